//! Index over the trace tables of several generated models.
//!
//! SIDs carry their model name as prefix (`untitled:19`), so SID lookups are
//! routed directly to the owning table. Name lookups have no such prefix and
//! search every model in name order.

use crate::model::{RtwnameRef, SidRef};
use crate::parser::{FsSource, TRACE_INFO_SUFFIX, TraceInfoParser};
use crate::sid::Sid;
use crate::trace::TraceTable;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use std::collections::BTreeMap;
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct TraceCatalog {
    tables: BTreeMap<String, TraceTable>,
}

impl TraceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table, replacing and returning any table of the same model.
    pub fn insert(&mut self, table: TraceTable) -> Option<TraceTable> {
        self.tables.insert(table.model().to_string(), table)
    }

    /// Parse every `*_traceInfo.js` below `root`. Files that fail to parse are
    /// logged and skipped; when two files describe the same model the first
    /// one in path order wins.
    pub fn discover(root: impl AsRef<Utf8Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut paths: Vec<Utf8PathBuf> = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Walk {}", root))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_trace_info = entry
                .file_name()
                .to_str()
                .is_some_and(|n| n.ends_with(TRACE_INFO_SUFFIX));
            if !is_trace_info {
                continue;
            }
            match Utf8PathBuf::from_path_buf(entry.into_path()) {
                Ok(p) => paths.push(p),
                Err(p) => tracing::warn!(path = %p.display(), "skipping non-UTF-8 path"),
            }
        }

        let parsed: Vec<(Utf8PathBuf, Result<TraceTable>)> = paths
            .into_par_iter()
            .map(|path| {
                let table = TraceInfoParser::new(FsSource).parse_file(&path);
                (path, table)
            })
            .collect();

        let mut catalog = Self::new();
        for (path, table) in parsed {
            match table {
                Ok(table) => {
                    if catalog.tables.contains_key(table.model()) {
                        tracing::warn!(%path, model = table.model(), "duplicate model, ignoring");
                        continue;
                    }
                    catalog.insert(table);
                }
                Err(e) => {
                    let error = format!("{:#}", e);
                    tracing::warn!(%path, %error, "skipping trace info");
                }
            }
        }
        tracing::info!(%root, models = catalog.len(), "trace catalog ready");
        Ok(catalog)
    }

    pub fn table(&self, model: &str) -> Option<&TraceTable> {
        self.tables.get(model)
    }

    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn get_url_hash(&self, sid: &str) -> Option<&str> {
        self.table(Sid::model_of(sid))?.get_url_hash(sid)
    }

    pub fn get_rtwname(&self, sid: &str) -> Option<RtwnameRef<'_>> {
        self.table(Sid::model_of(sid))?.get_rtwname(sid)
    }

    /// First model (in name order) that knows `rtwname`, with its SID.
    pub fn get_sid(&self, rtwname: &str) -> Option<(&str, SidRef<'_>)> {
        self.tables
            .iter()
            .find_map(|(model, table)| table.get_sid(rtwname).map(|sid| (model.as_str(), sid)))
    }
}
