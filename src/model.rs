use crate::trace::TraceTable;
use serde::{Deserialize, Serialize};
use std::fmt;

// ────────────────────────────────────────────────────────────────────────────
// TraceDoc – binary serialization wrapper
// ────────────────────────────────────────────────────────────────────────────

const MAGIC: &[u8; 8] = b"RTWTRACE";
const VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceDoc {
    pub table: TraceTable,
}

impl TraceDoc {
    /// Save the TraceDoc to a binary file with magic bytes and versioning.
    pub fn save_to_binary<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        std::io::Write::write_all(&mut writer, MAGIC)?;
        std::io::Write::write_all(&mut writer, &VERSION.to_le_bytes())?;
        bincode::serde::encode_into_std_write(self, &mut writer, bincode::config::standard())?;
        std::io::Write::flush(&mut writer)?;
        Ok(())
    }

    /// Load a TraceDoc from a binary file, checking magic bytes and version.
    pub fn load_from_binary<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        let mut magic = [0u8; 8];
        std::io::Read::read_exact(&mut reader, &mut magic)?;
        if &magic != MAGIC {
            anyhow::bail!("Invalid magic bytes: expected 'RTWTRACE'");
        }
        let mut version_bytes = [0u8; 4];
        std::io::Read::read_exact(&mut reader, &mut version_bytes)?;
        let version = u32::from_le_bytes(version_bytes);
        if version != VERSION {
            anyhow::bail!("Unsupported version: {}", version);
        }
        let doc: TraceDoc =
            bincode::serde::decode_from_std_read(&mut reader, bincode::config::standard())?;
        Ok(doc)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lookup results
// ────────────────────────────────────────────────────────────────────────────

/// Result of a name → SID lookup. Serializes as `{"sid": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidRef<'a> {
    pub sid: &'a str,
}

/// Result of a SID → name lookup. Serializes as `{"rtwname": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RtwnameRef<'a> {
    pub rtwname: &'a str,
}

// ────────────────────────────────────────────────────────────────────────────
// Trace entries
// ────────────────────────────────────────────────────────────────────────────

/// Message key the code generator uses for blocks without generated code.
pub const NOT_TRACEABLE_MSG: &str = "rtwMsg_notTraceable";

/// Typed view of a url hash string.
///
/// Parse with [`TraceEntry::parse`] (see [`crate::locator`]); the
/// [`Display`](fmt::Display) impl writes the `&`-joined form back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TraceEntry {
    /// `msg=rtwMsg_notTraceable&block=<sid>`
    NotTraceable { block: Option<String> },
    /// Any other `msg=` entry, e.g. `rtwMsg_reducedBlock`.
    Message { msg: String, block: Option<String> },
    /// One or more generated source locations.
    Locations(Vec<SourceLocation>),
}

impl TraceEntry {
    pub fn is_traceable(&self) -> bool {
        matches!(self, TraceEntry::Locations(_))
    }

    /// Generated source locations, empty for message entries.
    pub fn locations(&self) -> &[SourceLocation] {
        match self {
            TraceEntry::Locations(locs) => locs,
            _ => &[],
        }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::NotTraceable { block } => {
                write_message(f, NOT_TRACEABLE_MSG, block.as_deref())
            }
            TraceEntry::Message { msg, block } => write_message(f, msg, block.as_deref()),
            TraceEntry::Locations(locs) => {
                for (i, loc) in locs.iter().enumerate() {
                    if i > 0 {
                        f.write_str("&")?;
                    }
                    write!(f, "{}", loc)?;
                }
                Ok(())
            }
        }
    }
}

fn write_message(f: &mut fmt::Formatter<'_>, msg: &str, block: Option<&str>) -> fmt::Result {
    write!(f, "msg={}", msg)?;
    if let Some(block) = block {
        write!(f, "&block={}", block)?;
    }
    Ok(())
}

/// A generated file and the lines in it that implement a block,
/// e.g. `untitled.c:49,68`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub lines: Vec<u32>,
}

impl SourceLocation {
    /// Name of the code generation report page that renders this file
    /// (`untitled.c` → `untitled_c.html`).
    pub fn report_page(&self) -> String {
        format!("{}.html", self.file.replace('.', "_"))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file)?;
        for (i, line) in self.lines.iter().enumerate() {
            f.write_str(if i == 0 { ":" } else { "," })?;
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
