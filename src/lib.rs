//! Traceability lookups for Simulink/Embedded Coder generated code.
//!
//! The code generation report of a model contains `<model>_traceInfo.js`,
//! which maps block SIDs to generated source lines ("url hashes") and maps
//! SIDs to and from hierarchical block names ("rtwnames"). This crate loads
//! those mappings into an immutable [`TraceTable`](trace::TraceTable) and
//! answers the three lookups the report viewer performs.
//!
//! The binary `rtwtrace` exposes the lookups on the command line.

pub mod catalog;
pub mod generator;
pub mod locator;
pub mod model;
pub mod parser;
pub mod sid;
pub mod trace;
pub mod untitled;

pub use trace::{TraceTable, TraceTableBuilder};
