//! Product repository interface

use async_trait::async_trait;

use super::model::{NewProduct, Product};
use crate::domain::DomainResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Up to `limit` products starting at `offset`, ordered by id.
    async fn find_page(&self, offset: u64, limit: u64) -> DomainResult<Vec<Product>>;
    async fn count_all(&self) -> DomainResult<u64>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>>;
    async fn save(&self, product: NewProduct) -> DomainResult<Product>;
}
