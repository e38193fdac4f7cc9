//! Core bundle types shared by the parser and both commands.

pub mod errors;
pub mod model;
