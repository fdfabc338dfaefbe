//! CLI commands

pub mod formats;
pub mod init;
pub mod render;
