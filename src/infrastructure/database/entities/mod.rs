//! Database entities module

pub mod product;
