//! Stateless helpers shared across layers

pub mod date;
pub mod file;
pub mod json;
pub mod number;
pub mod string;
