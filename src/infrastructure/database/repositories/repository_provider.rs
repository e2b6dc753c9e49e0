//! SeaORM implementation of RepositoryProvider

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{DomainResult, ProductRepository, RepositoryProvider};

use super::product_repository::SeaOrmProductRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    db: DatabaseConnection,
    products: SeaOrmProductRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: SeaOrmProductRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(self.db.ping().await?)
    }
}
