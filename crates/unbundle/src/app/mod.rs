//! Application layer: bundle parsing and the operations built on it.

pub mod extract;
pub mod index;
pub mod inventory;
pub mod parser;
pub mod writer;
