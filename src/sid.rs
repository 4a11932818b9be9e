//! Structured view of generator-assigned block identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A block SID such as `untitled:14:215`: the model name followed by the
/// numeric block indices of each enclosing subsystem level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Sid {
    pub model: String,
    pub path: Vec<u32>,
}

impl Sid {
    /// Parse a SID. Returns `None` if the model part is empty or any block
    /// index is not a number.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().split(':');
        let model = parts.next()?.trim();
        if model.is_empty() {
            return None;
        }
        let path = parts
            .map(|p| p.trim().parse::<u32>().ok())
            .collect::<Option<Vec<_>>>()?;
        Some(Sid {
            model: model.to_string(),
            path,
        })
    }

    /// Model prefix of a SID string without allocating.
    pub fn model_of(s: &str) -> &str {
        s.split_once(':').map(|(m, _)| m).unwrap_or(s).trim()
    }

    /// The model root itself (`untitled`).
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// SID of the enclosing subsystem, or `None` for the model root.
    pub fn parent(&self) -> Option<Sid> {
        let (_, rest) = self.path.split_last()?;
        Some(Sid {
            model: self.model.clone(),
            path: rest.to_vec(),
        })
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.model)?;
        for idx in &self.path {
            write!(f, ":{}", idx)?;
        }
        Ok(())
    }
}
