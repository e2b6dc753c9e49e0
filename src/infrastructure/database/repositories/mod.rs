//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod product_repository;
pub mod repository_provider;

pub use product_repository::SeaOrmProductRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
