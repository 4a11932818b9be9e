//! Reader for the `<model>_traceInfo.js` files of a code generation report.
//!
//! The generator writes one assignment per line:
//!
//! ```text
//! this.urlHashMap["untitled:19"] = "untitled.c:46&untitled.h:118";
//! this.rtwnameHashMap["<Root>/Gain1"] = {sid: "untitled:19"};
//! this.sidHashMap["untitled:19"] = {rtwname: "<Root>/Gain1"};
//! ```
//!
//! Those three statement kinds are parsed strictly; every other line
//! (function headers, comments, accessors) is skipped. Sub-modules:
//!
//! - [`source`] – File I/O abstraction (filesystem vs. ZIP)
//! - [`error`] – [`TraceParseError`]

pub mod error;
mod literal;
pub mod source;

pub use error::TraceParseError;
pub use source::*;

use crate::trace::{TraceTable, TraceTableBuilder};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use literal::Cursor;

/// File name suffix of trace info scripts.
pub const TRACE_INFO_SUFFIX: &str = "_traceInfo.js";

/// Model name encoded in a `<model>_traceInfo.js` file name.
pub fn model_name_from_path(path: &Utf8Path) -> Option<&str> {
    path.file_name()?
        .strip_suffix(TRACE_INFO_SUFFIX)
        .filter(|m| !m.is_empty())
}

/// Parse trace info script text. Without a `model` hint the model name is
/// derived from the first SID.
pub fn parse_trace_info(text: &str, model: Option<&str>) -> Result<TraceTable, TraceParseError> {
    let mut builder = TraceTableBuilder::new();
    if let Some(model) = model {
        builder.model(model);
    }
    for (idx, raw) in text.lines().enumerate() {
        parse_statement(raw.trim(), idx + 1, &mut builder)?;
    }
    Ok(builder.build())
}

fn parse_statement(
    line: &str,
    line_no: usize,
    builder: &mut TraceTableBuilder,
) -> Result<(), TraceParseError> {
    let Some(stmt) = line.strip_prefix("this.") else {
        return Ok(());
    };
    let mut cur = Cursor::new(stmt, line_no);
    let map = cur.ident()?;
    if !matches!(map, "urlHashMap" | "rtwnameHashMap" | "sidHashMap") || !cur.eat_opt('[') {
        // `this.urlHashMap = new Array();`, accessor definitions, ...
        return Ok(());
    }
    let key = cur.string()?;
    cur.eat(']', "']'")?;
    cur.eat('=', "'='")?;
    match map {
        "urlHashMap" => {
            let entry = cur.string()?;
            builder.url_hash(key, entry);
        }
        "rtwnameHashMap" => {
            let sid = object_field(&mut cur, "sid")?;
            builder.forward(key, sid);
        }
        _ => {
            let rtwname = object_field(&mut cur, "rtwname")?;
            builder.reverse(key, rtwname);
        }
    }
    cur.eat_opt(';');
    cur.finish()
}

/// `{field: "value"}`
fn object_field(cur: &mut Cursor<'_>, field: &'static str) -> Result<String, TraceParseError> {
    cur.eat('{', "'{'")?;
    let name = cur.ident()?;
    if name != field {
        return Err(TraceParseError::UnexpectedToken {
            line: cur.line(),
            expected: field,
            found: name.to_string(),
        });
    }
    cur.eat(':', "':'")?;
    let value = cur.string()?;
    cur.eat('}', "'}'")?;
    Ok(value)
}

/// Reads trace info scripts through a [`ContentSource`].
pub struct TraceInfoParser<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> TraceInfoParser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Parse a `<model>_traceInfo.js` file.
    pub fn parse_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<TraceTable> {
        let path = path.as_ref();
        let text = self.source.read_to_string(path)?;
        let table = parse_trace_info(&text, model_name_from_path(path))
            .with_context(|| format!("Failed to parse {}", path))?;
        tracing::debug!(
            %path,
            model = table.model(),
            blocks = table.len(),
            "parsed trace info"
        );
        Ok(table)
    }

    /// Locate the trace info script of a report directory. Looks in `dir`
    /// itself and in `dir/html`; for ZIP sources the whole subtree is listed.
    pub fn find_trace_info(&mut self, dir: impl AsRef<Utf8Path>) -> Result<Option<Utf8PathBuf>> {
        let dir = dir.as_ref();
        let mut candidates: Vec<Utf8PathBuf> = self
            .source
            .list_dir(dir)?
            .into_iter()
            .filter(|p| model_name_from_path(p).is_some())
            .collect();
        if candidates.is_empty() {
            let html = dir.join("html");
            if let Ok(files) = self.source.list_dir(&html) {
                candidates.extend(files.into_iter().filter(|p| model_name_from_path(p).is_some()));
            }
        }
        if candidates.len() > 1 {
            tracing::warn!(
                %dir,
                count = candidates.len(),
                using = %candidates[0],
                "multiple trace info files found"
            );
        }
        Ok(candidates.into_iter().next())
    }

    /// Find and parse the trace info script of a report directory.
    pub fn parse_report(&mut self, dir: impl AsRef<Utf8Path>) -> Result<TraceTable> {
        let dir = dir.as_ref();
        let path = self
            .find_trace_info(dir)?
            .with_context(|| format!("No *{} found in {}", TRACE_INFO_SUFFIX, display_dir(dir)))?;
        self.parse_file(&path)
    }
}

fn display_dir(dir: &Utf8Path) -> &str {
    if dir.as_str().is_empty() { "archive root" } else { dir.as_str() }
}
