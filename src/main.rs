use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand};
use rtwtrace::catalog::TraceCatalog;
use rtwtrace::generator::generate_trace_info;
use rtwtrace::model::TraceDoc;
use rtwtrace::parser::{FsSource, TraceInfoParser, ZipSource};
use rtwtrace::{TraceTable, untitled};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query Simulink code generation traceability tables", long_about = None)]
struct Cli {
    /// `*_traceInfo.js` file, report directory, zipped report or `.rtt` snapshot.
    /// Defaults to the built-in `untitled` model.
    #[arg(short, long, value_name = "PATH", env = "RTWTRACE_INPUT", global = true)]
    input: Option<String>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a SID or rtwname across every report below ROOT
    Search {
        #[arg(value_name = "ROOT")]
        root: Utf8PathBuf,
        /// SID or rtwname
        key: String,
    },
    #[command(flatten)]
    Table(TableCommand),
}

/// Commands that operate on the single table selected by `--input`.
#[derive(Subcommand, Debug)]
enum TableCommand {
    /// Print the url hash (trace entry) of a SID
    UrlHash { sid: String },
    /// Print the SID of an rtwname as `{"sid": ...}`
    Sid { rtwname: String },
    /// Print the rtwname of a SID as `{"rtwname": ...}`
    Rtwname { sid: String },
    /// Print the parsed trace entry of a SID as JSON
    Locate { sid: String },
    /// Print the whole table as JSON
    Dump,
    /// Report inconsistencies and aliased names
    Check,
    /// Print traceInfo.js text for the table
    Generate,
    /// Save the table as a binary snapshot
    Snapshot {
        #[arg(value_name = "OUT")]
        out: Utf8PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_table(input: Option<&str>) -> Result<TraceTable> {
    let Some(input) = input else {
        return Ok(untitled::table());
    };
    let path = Utf8Path::new(input);
    match path.extension() {
        Some("rtt") => {
            let doc = TraceDoc::load_from_binary(path)
                .with_context(|| format!("Failed to load snapshot {}", path))?;
            Ok(doc.table)
        }
        Some("zip") => TraceInfoParser::new(ZipSource::open(path)?).parse_report(""),
        Some("js") => TraceInfoParser::new(FsSource).parse_file(path),
        _ if path.is_dir() => TraceInfoParser::new(FsSource).parse_report(path),
        _ => anyhow::bail!("Unsupported input {}", path),
    }
}

fn not_found(what: &str, key: &str) -> ExitCode {
    eprintln!("{} not found: {}", what, key);
    ExitCode::FAILURE
}

fn search(root: &Utf8Path, key: &str) -> Result<ExitCode> {
    let catalog = TraceCatalog::discover(root)?;
    if let Some(entry) = catalog.get_url_hash(key) {
        let rtwname = catalog.get_rtwname(key).map(|n| n.rtwname).unwrap_or("-");
        println!("{}\t{}\t{}", key, rtwname, entry);
        return Ok(ExitCode::SUCCESS);
    }
    if let Some(name) = catalog.get_rtwname(key) {
        println!("{}\t{}", key, name.rtwname);
        return Ok(ExitCode::SUCCESS);
    }
    if let Some((model, sid)) = catalog.get_sid(key) {
        let entry = catalog.get_url_hash(sid.sid).unwrap_or("-");
        println!("{}\t{}\t{}\t{}", model, sid.sid, key, entry);
        return Ok(ExitCode::SUCCESS);
    }
    Ok(not_found("SID or rtwname", key))
}

fn run_table_command(command: &TableCommand, input: Option<&str>) -> Result<ExitCode> {
    let table = load_table(input)?;
    tracing::info!(model = table.model(), blocks = table.len(), "table loaded");

    match command {
        TableCommand::UrlHash { sid } => match table.get_url_hash(sid) {
            Some(entry) => println!("{}", entry),
            None => return Ok(not_found("SID", sid)),
        },
        TableCommand::Sid { rtwname } => match table.get_sid(rtwname) {
            Some(sid) => println!("{}", serde_json::to_string(&sid)?),
            None => return Ok(not_found("rtwname", rtwname)),
        },
        TableCommand::Rtwname { sid } => match table.get_rtwname(sid) {
            Some(name) => println!("{}", serde_json::to_string(&name)?),
            None => return Ok(not_found("SID", sid)),
        },
        TableCommand::Locate { sid } => match table.trace_entry(sid) {
            Some(entry) => {
                let entry = entry.with_context(|| format!("Malformed trace entry for {}", sid))?;
                println!("{}", serde_json::to_string_pretty(&entry)?);
            }
            None => return Ok(not_found("SID", sid)),
        },
        TableCommand::Dump => println!("{}", serde_json::to_string_pretty(&table)?),
        TableCommand::Check => {
            let issues = table.check();
            for issue in &issues {
                println!("error: {}", issue);
            }
            for alias in table.aliases() {
                println!(
                    "alias: {} -> {} (reverse name {})",
                    alias.rtwname, alias.sid, alias.canonical
                );
            }
            if !issues.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
        TableCommand::Generate => print!("{}", generate_trace_info(&table)),
        TableCommand::Snapshot { out } => {
            TraceDoc { table }
                .save_to_binary(out)
                .with_context(|| format!("Failed to write {}", out))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Command::Search { root, key } => search(root, key),
        Command::Table(command) => run_table_command(command, cli.input.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_parses_without_loading_a_table() {
        let cli = Cli::try_parse_from(["rtwtrace", "search", "reports", "<Root>/Gain1"]).unwrap();
        match cli.command {
            Command::Search { root, key } => {
                assert_eq!(root, Utf8PathBuf::from("reports"));
                assert_eq!(key, "<Root>/Gain1");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn table_commands_are_flattened() {
        let cli = Cli::try_parse_from(["rtwtrace", "-i", "x_traceInfo.js", "url-hash", "x:1"])
            .unwrap();
        assert_eq!(cli.input.as_deref(), Some("x_traceInfo.js"));
        assert!(matches!(
            cli.command,
            Command::Table(TableCommand::UrlHash { ref sid }) if sid == "x:1"
        ));
    }
}
