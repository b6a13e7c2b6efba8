//! Similar-game scanning: fetch, extract, traverse, report.
//!
//! This crate provides:
//! - [`fetch`] — recommendation page fetcher ([`PageFetcher`], [`HttpFetcher`])
//! - [`extract`] — similar-item extraction and category inference
//! - [`engine`] — budgeted BFS/random frontier traversal ([`Scanner`])
//! - [`report`] — console, flat-file, and JSON reporting

pub mod engine;
pub mod extract;
pub mod fetch;
pub mod report;

pub use engine::{ScanObserver, ScanOutcome, Scanner, SilentObserver, StopReason};
pub use fetch::{HttpFetcher, PageFetcher};
