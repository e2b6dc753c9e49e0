//! Product domain entity

use chrono::{DateTime, Utc};

/// A catalog product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Price in the smallest currency unit (e.g. cents)
    pub price: i64,
    /// ISO 4217 code
    pub currency: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Price as `major.minor CUR`, e.g. `12.50 USD`.
    pub fn formatted_price(&self) -> String {
        let sign = if self.price < 0 { "-" } else { "" };
        let abs = self.price.unsigned_abs();
        format!("{}{}.{:02} {}", sign, abs / 100, abs % 100, self.currency)
    }
}

/// Data required to create a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub currency: String,
    pub stock: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(price: i64, stock: i32) -> Product {
        Product {
            id: 1,
            name: "Mug".into(),
            description: None,
            price,
            currency: "USD".into(),
            stock,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn formats_price_in_major_units() {
        assert_eq!(sample(1250, 1).formatted_price(), "12.50 USD");
        assert_eq!(sample(5, 1).formatted_price(), "0.05 USD");
        assert_eq!(sample(-199, 1).formatted_price(), "-1.99 USD");
    }

    #[test]
    fn stock_flag() {
        assert!(sample(100, 3).in_stock());
        assert!(!sample(100, 0).in_stock());
    }
}
