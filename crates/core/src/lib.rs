//! Trackport Core - streaming defect-tracker report encoders
//!
//! This crate turns a stream of static-analysis violations into import files
//! for defect-tracking systems:
//! - Rule classification into impact, category and issue kind
//! - Path prefix stripping and free-text escaping
//! - Per-format encoders (Coverity JSON, Polaris XML)
//! - A report session that streams records without holding them in memory

pub mod classify;
pub mod config;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod format;
pub mod path;
pub mod session;
pub mod violation;

pub use classify::{classify, Classification, Impact, IssueKind};
pub use config::{ReportConfig, TrackportConfig};
pub use encoder::{CoverityEncoder, Encoder, PolarisEncoder, Record};
pub use error::ReportError;
pub use escape::{escape, TextFormat};
pub use format::ReportFormat;
pub use session::{RenderSummary, ReportSession};
pub use violation::Violation;

/// Trackport version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
