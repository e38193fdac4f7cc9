//! Extract and audit flat-text source bundles.
//!
//! A bundle is an optional `INDEX:` listing followed by files, each introduced
//! by a header block:
//!
//! ```text
//! ================================================================================
//! File: relative/path.ext
//! ================================================================================
//! <file contents>
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;
