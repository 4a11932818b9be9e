//! Parsing of url hash strings into [`TraceEntry`] values.
//!
//! A url hash is a list of segments joined by `&` (the generator's choice) or
//! `;`. Segments are either `key=value` message fields (`msg=…`, `block=…`)
//! or source locators of the form `file[:line[,line…]]`.

use crate::model::{NOT_TRACEABLE_MSG, SourceLocation, TraceEntry};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("empty trace entry")]
    Empty,
    #[error("invalid line number {value:?} in locator {locator:?}")]
    BadLine { locator: String, value: String },
    #[error("unknown field {0:?} in trace entry")]
    UnknownField(String),
    #[error("trace entry mixes msg={msg} with source locators")]
    MixedEntry { msg: String },
}

impl TraceEntry {
    pub fn parse(s: &str) -> Result<Self, LocatorError> {
        let segments: Vec<&str> = s
            .split(['&', ';'])
            .map(str::trim)
            .filter(|seg| !seg.is_empty())
            .collect();
        if segments.is_empty() {
            return Err(LocatorError::Empty);
        }

        let mut msg: Option<&str> = None;
        let mut block: Option<&str> = None;
        let mut locations = Vec::new();
        for seg in segments {
            match seg.split_once('=') {
                Some(("msg", value)) => msg = Some(value),
                Some(("block", value)) => block = Some(value),
                Some((key, _)) => return Err(LocatorError::UnknownField(key.to_string())),
                None => locations.push(parse_location(seg)?),
            }
        }

        if let Some(msg) = msg {
            if !locations.is_empty() {
                return Err(LocatorError::MixedEntry {
                    msg: msg.to_string(),
                });
            }
        }

        Ok(match msg {
            Some(NOT_TRACEABLE_MSG) => TraceEntry::NotTraceable {
                block: block.map(str::to_string),
            },
            Some(msg) => TraceEntry::Message {
                msg: msg.to_string(),
                block: block.map(str::to_string),
            },
            None => TraceEntry::Locations(locations),
        })
    }
}

impl FromStr for TraceEntry {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TraceEntry::parse(s)
    }
}

/// Parse a single `file:1,2` locator.
pub fn parse_location(seg: &str) -> Result<SourceLocation, LocatorError> {
    let Some((file, lines_str)) = seg.rsplit_once(':') else {
        return Ok(SourceLocation {
            file: seg.to_string(),
            lines: Vec::new(),
        });
    };
    let mut lines = Vec::new();
    for value in lines_str.split(',').map(str::trim) {
        let line = value.parse::<u32>().map_err(|_| LocatorError::BadLine {
            locator: seg.to_string(),
            value: value.to_string(),
        })?;
        lines.push(line);
    }
    Ok(SourceLocation {
        file: file.trim().to_string(),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_file_without_lines() {
        let loc = parse_location("untitled.h").unwrap();
        assert_eq!(loc.file, "untitled.h");
        assert!(loc.lines.is_empty());
    }

    #[test]
    fn message_without_block() {
        let entry = TraceEntry::parse("msg=rtwMsg_reducedBlock").unwrap();
        assert_eq!(
            entry,
            TraceEntry::Message {
                msg: "rtwMsg_reducedBlock".into(),
                block: None
            }
        );
        assert_eq!(entry.to_string(), "msg=rtwMsg_reducedBlock");
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert_eq!(
            TraceEntry::parse("foo=bar"),
            Err(LocatorError::UnknownField("foo".into()))
        );
    }
}
