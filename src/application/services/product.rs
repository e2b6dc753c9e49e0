//! Product business logic service

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, NewProduct, Product, RepositoryProvider};
use crate::shared::types::{PageResult, Paginator};

/// Service for product catalog operations
pub struct ProductService {
    repos: Arc<dyn RepositoryProvider>,
    paginator: Paginator,
}

impl ProductService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, paginator: Paginator) -> Self {
        Self { repos, paginator }
    }

    /// Products `offset..offset + limit` in id order
    pub async fn find_page(&self, offset: u64, limit: u64) -> DomainResult<Vec<Product>> {
        self.repos.products().find_page(offset, limit).await
    }

    pub async fn count_all(&self) -> DomainResult<u64> {
        self.repos.products().count_all().await
    }

    /// One page of the catalog. `page`/`size` are normalized, never rejected.
    pub async fn list_products(&self, page: i64, size: i64) -> DomainResult<PageResult<Product>> {
        self.paginator
            .paginate_async(
                page,
                size,
                |offset, limit| self.find_page(offset, limit),
                || self.count_all(),
            )
            .await
    }

    pub async fn get_product(&self, id: i32) -> DomainResult<Product> {
        self.repos
            .products()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Product",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn create_product(&self, product: NewProduct) -> DomainResult<Product> {
        let created = self.repos.products().save(product).await?;
        info!(product_id = created.id, "Product added to catalog");
        Ok(created)
    }
}
