//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::ProductService;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::health::{self, ComponentHealth, HealthResponse, HealthState};
use crate::interfaces::http::modules::products::{
    self, CreateProductRequest, ListProductsParams, ProductDto, ProductState,
};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::shared::types::PageResult;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::health_check,
        products::handlers::list_products,
        products::handlers::get_product,
        products::handlers::create_product,
    ),
    components(
        schemas(
            ApiResponse<String>,
            ApiResponse<ProductDto>,
            PageResult<ProductDto>,
            ProductDto,
            CreateProductRequest,
            ListProductsParams,
            HealthResponse,
            ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Service and database health"),
        (name = "Products", description = "Paginated product catalog"),
    ),
    info(
        title = "Catalog Service API",
        version = "1.0.0",
        description = "REST API for browsing and creating catalog products",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Everything the HTTP layer needs from the running service.
#[derive(Clone)]
pub struct ApiState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub products: Arc<ProductService>,
}

impl ApiState {
    pub fn new(repos: Arc<dyn RepositoryProvider>, products: Arc<ProductService>) -> Self {
        Self { repos, products }
    }

    pub fn into_router(self) -> Router {
        let health_state = HealthState {
            repos: self.repos,
            started_at: Instant::now(),
        };

        let product_state = ProductState {
            service: self.products,
        };

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let health_routes = Router::new()
            .route("/health", get(health::health_check))
            .with_state(health_state);

        let product_routes = Router::new()
            .route(
                "/",
                get(products::handlers::list_products).post(products::handlers::create_product),
            )
            .route("/{id}", get(products::handlers::get_product))
            .with_state(product_state);

        Router::new()
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .merge(health_routes)
            .nest("/api/products", product_routes)
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_id_middleware))
            .layer(cors)
    }
}

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    products: Arc<ProductService>,
) -> Router {
    ApiState::new(repos, products).into_router()
}
