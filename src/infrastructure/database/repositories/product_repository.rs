//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set,
};
use tracing::info;

use crate::domain::{DomainResult, NewProduct, Product, ProductRepository};
use crate::infrastructure::database::entities::product;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(p: product::Model) -> Product {
    Product {
        id: p.id,
        name: p.name,
        description: p.description,
        price: p.price,
        currency: p.currency,
        stock: p.stock,
        created_at: p.created_at,
        updated_at: p.updated_at,
    }
}

/// SQLite integers are signed 64-bit.
const MAX_SQL_INT: u64 = i64::MAX as u64;

// ── SeaOrmProductRepository ─────────────────────────────────────

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_page(&self, offset: u64, limit: u64) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .offset(offset.min(MAX_SQL_INT))
            .limit(limit.min(MAX_SQL_INT))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn count_all(&self) -> DomainResult<u64> {
        Ok(product::Entity::find().count(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>> {
        let model = product::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn save(&self, p: NewProduct) -> DomainResult<Product> {
        let now = Utc::now();
        let model = product::ActiveModel {
            name: Set(p.name),
            description: Set(p.description),
            price: Set(p.price),
            currency: Set(p.currency),
            stock: Set(p.stock),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let saved = model.insert(&self.db).await?;
        info!(product_id = saved.id, name = %saved.name, "Product created");
        Ok(entity_to_domain(saved))
    }
}
