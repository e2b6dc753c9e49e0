//! In-memory repositories for development and testing

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{DomainResult, NewProduct, Product, ProductRepository, RepositoryProvider};

/// Product store keyed by id
pub struct InMemoryProductRepository {
    products: DashMap<i32, Product>,
    id_counter: AtomicI32,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            id_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_page(&self, offset: u64, limit: u64) -> DomainResult<Vec<Product>> {
        let mut all: Vec<Product> = self.products.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|p| p.id);

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(all.into_iter().skip(offset).take(limit).collect())
    }

    async fn count_all(&self) -> DomainResult<u64> {
        Ok(self.products.len() as u64)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>> {
        Ok(self.products.get(&id).map(|p| p.clone()))
    }

    async fn save(&self, p: NewProduct) -> DomainResult<Product> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let product = Product {
            id,
            name: p.name,
            description: p.description,
            price: p.price,
            currency: p.currency,
            stock: p.stock,
            created_at: now,
            updated_at: now,
        };
        self.products.insert(id, product.clone());
        Ok(product)
    }
}

/// [`RepositoryProvider`] over in-memory repositories
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    products: InMemoryProductRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RepositoryProvider for InMemoryRepositoryProvider {
    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.into(),
            description: Some("test".into()),
            price: 500,
            currency: "KRW".into(),
            stock: 1,
        }
    }

    #[tokio::test]
    async fn ids_increase_and_pages_follow_id_order() {
        let repo = InMemoryProductRepository::new();
        for name in ["a", "b", "c", "d", "e"] {
            repo.save(new_product(name)).await.unwrap();
        }

        assert_eq!(repo.count_all().await.unwrap(), 5);

        let page: Vec<_> = repo
            .find_page(1, 3)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(page, vec!["b", "c", "d"]);

        assert!(repo.find_page(5, 3).await.unwrap().is_empty());
        assert!(repo.find_page(u64::MAX, u64::MAX).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_id() {
        let repo = InMemoryProductRepository::new();
        let saved = repo.save(new_product("lamp")).await.unwrap();

        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    }
}
