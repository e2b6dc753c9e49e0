//! Product catalog endpoints

pub mod dto;
pub mod handlers;

pub use dto::{CreateProductRequest, ListProductsParams, ProductDto};
pub use handlers::ProductState;
