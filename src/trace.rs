//! The trace lookup table: SID → url hash, rtwname → SID and SID → rtwname.
//!
//! A [`TraceTable`] is assembled once through a [`TraceTableBuilder`] and is
//! immutable afterwards. Consumers receive it by reference; there is no
//! process-wide instance.

use crate::locator::LocatorError;
use crate::model::{RtwnameRef, SidRef, TraceEntry};
use crate::sid::Sid;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable traceability tables of one generated model.
///
/// All three maps preserve insertion order, so iteration matches the order
/// in which the generator wrote the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceTable {
    model: String,
    url_hashes: IndexMap<String, String>,
    rtwname_to_sid: IndexMap<String, String>,
    sid_to_rtwname: IndexMap<String, String>,
}

impl TraceTable {
    pub fn builder(model: impl Into<String>) -> TraceTableBuilder {
        TraceTableBuilder {
            table: TraceTable {
                model: model.into(),
                ..Default::default()
            },
        }
    }

    /// Name of the model the table was generated for.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Url hash (trace entry string) of a block, or `None` for unknown SIDs.
    pub fn get_url_hash(&self, sid: &str) -> Option<&str> {
        self.url_hashes.get(sid).map(String::as_str)
    }

    pub fn get_sid(&self, rtwname: &str) -> Option<SidRef<'_>> {
        self.rtwname_to_sid
            .get(rtwname)
            .map(|sid| SidRef { sid: sid.as_str() })
    }

    pub fn get_rtwname(&self, sid: &str) -> Option<RtwnameRef<'_>> {
        self.sid_to_rtwname.get(sid).map(|rtwname| RtwnameRef {
            rtwname: rtwname.as_str(),
        })
    }

    /// Typed view of [`get_url_hash`](Self::get_url_hash).
    pub fn trace_entry(&self, sid: &str) -> Option<Result<TraceEntry, LocatorError>> {
        self.get_url_hash(sid).map(TraceEntry::parse)
    }

    /// `(sid, url hash)` pairs in generator order.
    pub fn url_hashes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.url_hashes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `(rtwname, sid)` pairs in generator order.
    pub fn names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rtwname_to_sid
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `(sid, rtwname)` pairs of the reverse map.
    pub fn sids(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sid_to_rtwname
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of blocks carrying a url hash.
    pub fn len(&self) -> usize {
        self.url_hashes.len()
    }

    /// No block carries a url hash; names alone do not count.
    pub fn is_empty(&self) -> bool {
        self.url_hashes.is_empty()
    }

    /// Verify that the reverse map covers every SID used by the other two maps
    /// and that every SID belongs to this table's model.
    pub fn check(&self) -> Vec<Inconsistency> {
        let mut out = Vec::new();
        for sid in self.url_hashes.keys() {
            if !self.sid_to_rtwname.contains_key(sid) {
                out.push(Inconsistency::MissingReverse { sid: sid.clone() });
            }
        }
        for (rtwname, sid) in &self.rtwname_to_sid {
            if !self.sid_to_rtwname.contains_key(sid) {
                out.push(Inconsistency::DanglingName {
                    rtwname: rtwname.clone(),
                    sid: sid.clone(),
                });
            }
        }
        if !self.model.is_empty() {
            let all_sids = self
                .url_hashes
                .keys()
                .chain(self.rtwname_to_sid.values())
                .chain(self.sid_to_rtwname.keys());
            let mut seen = std::collections::HashSet::new();
            for sid in all_sids {
                if Sid::model_of(sid) != self.model && seen.insert(sid.as_str()) {
                    out.push(Inconsistency::ForeignSid { sid: sid.clone() });
                }
            }
        }
        out
    }

    /// Names whose SID maps back to a different name.
    ///
    /// The generator lists each subsystem under its short alias (`<S1>`) and
    /// under its parent path (`<Root>/PWM`); the reverse map keeps only the
    /// name written last.
    pub fn aliases(&self) -> Vec<Alias<'_>> {
        let mut out = Vec::new();
        for (rtwname, sid) in &self.rtwname_to_sid {
            if let Some(canonical) = self.sid_to_rtwname.get(sid) {
                if canonical != rtwname {
                    out.push(Alias {
                        rtwname: rtwname.as_str(),
                        sid: sid.as_str(),
                        canonical: canonical.as_str(),
                    });
                }
            }
        }
        out
    }
}

/// Incrementally fills a [`TraceTable`]. Later writes to the same key
/// replace earlier ones.
#[derive(Debug, Default)]
pub struct TraceTableBuilder {
    table: TraceTable,
}

impl TraceTableBuilder {
    /// Builder with an unknown model name; [`build`](Self::build) derives it
    /// from the first SID.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&mut self, model: impl Into<String>) -> &mut Self {
        self.table.model = model.into();
        self
    }

    pub fn url_hash(&mut self, sid: impl Into<String>, entry: impl Into<String>) -> &mut Self {
        self.table.url_hashes.insert(sid.into(), entry.into());
        self
    }

    /// Bind `rtwname` and `sid` in both directions.
    pub fn name(&mut self, rtwname: impl Into<String>, sid: impl Into<String>) -> &mut Self {
        let rtwname = rtwname.into();
        let sid = sid.into();
        self.reverse(sid.clone(), rtwname.clone());
        self.forward(rtwname, sid)
    }

    /// Write only the rtwname → SID direction.
    pub fn forward(&mut self, rtwname: impl Into<String>, sid: impl Into<String>) -> &mut Self {
        self.table.rtwname_to_sid.insert(rtwname.into(), sid.into());
        self
    }

    /// Write only the SID → rtwname direction.
    pub fn reverse(&mut self, sid: impl Into<String>, rtwname: impl Into<String>) -> &mut Self {
        let sid = sid.into();
        let rtwname = rtwname.into();
        if let Some(previous) = self.table.sid_to_rtwname.insert(sid.clone(), rtwname.clone()) {
            if previous != rtwname {
                tracing::debug!(%sid, %previous, %rtwname, "rebinding SID to a new rtwname");
            }
        }
        self
    }

    pub fn build(self) -> TraceTable {
        let mut table = self.table;
        if table.model.is_empty() {
            let first = table
                .url_hashes
                .keys()
                .chain(table.sid_to_rtwname.keys())
                .next();
            if let Some(sid) = first {
                table.model = Sid::model_of(sid).to_string();
            }
        }
        table
    }
}

/// A name that resolves to a SID whose reverse entry names something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alias<'a> {
    pub rtwname: &'a str,
    pub sid: &'a str,
    pub canonical: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inconsistency {
    /// A url hash SID without a SID → rtwname entry.
    MissingReverse { sid: String },
    /// An rtwname → SID entry whose SID has no reverse entry.
    DanglingName { rtwname: String, sid: String },
    /// A SID whose model prefix differs from the table's model.
    ForeignSid { sid: String },
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconsistency::MissingReverse { sid } => {
                write!(f, "{}: url hash without rtwname", sid)
            }
            Inconsistency::DanglingName { rtwname, sid } => {
                write!(f, "{} -> {}: SID has no reverse entry", rtwname, sid)
            }
            Inconsistency::ForeignSid { sid } => write!(f, "{}: SID of another model", sid),
        }
    }
}
