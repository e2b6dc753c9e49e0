//! Domain layer: entities and repository interfaces

pub mod product;
pub mod repositories;

pub use product::{NewProduct, Product, ProductRepository};
pub use repositories::{DomainResult, RepositoryProvider};

pub use crate::shared::errors::DomainError;
