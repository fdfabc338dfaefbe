//! Violation stream input
//!
//! Violations arrive as a sequence of JSON values, usually one object per
//! line. `null` entries stand for violations the rule engine could not
//! materialize; they are passed through as `None`.

use anyhow::{anyhow, Result};
use std::io::Read;

use trackport_core::Violation;

/// Lazily decode violations from a reader, one value at a time.
pub fn read_violations<R: Read>(reader: R) -> impl Iterator<Item = Result<Option<Violation>>> {
    serde_json::Deserializer::from_reader(reader)
        .into_iter::<Option<Violation>>()
        .map(|item| {
            item.map_err(|e| {
                anyhow!(
                    "invalid violation at line {}, column {}: {}",
                    e.line(),
                    e.column(),
                    e
                )
            })
        })
}
