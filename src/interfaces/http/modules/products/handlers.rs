//! Product REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateProductRequest, ListProductsParams, ProductDto};
use crate::application::ProductService;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::shared::types::PageResult;

/// Product handler state
#[derive(Clone)]
pub struct ProductState {
    pub service: Arc<ProductService>,
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ListProductsParams),
    responses(
        (status = 200, description = "One page of products", body = PageResult<ProductDto>),
        (status = 400, description = "Non-numeric page or size"),
        (status = 500, description = "Storage failure", body = ApiResponse<String>)
    )
)]
pub async fn list_products(
    State(state): State<ProductState>,
    Query(params): Query<ListProductsParams>,
) -> Result<Json<PageResult<ProductDto>>, ApiError> {
    // A size of 0 selects the paginator's configured default.
    let page = state
        .service
        .list_products(params.page.unwrap_or(1), params.size.unwrap_or(0))
        .await
        .map_err(domain_error)?;

    Ok(Json(page.map(ProductDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductDto>),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_product(
    State(state): State<ProductState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ProductDto>>, ApiError> {
    let product = state.service.get_product(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ProductDto>),
        (status = 400, description = "Malformed JSON", body = ApiResponse<String>),
        (status = 422, description = "Invalid or unsafe content", body = ApiResponse<String>)
    )
)]
pub async fn create_product(
    State(state): State<ProductState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductDto>>), ApiError> {
    let product = state
        .service
        .create_product(req.into())
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(product.into()))))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use axum::Router;
    use serde_json::{json, Value};
    use tower::Service;

    use super::*;
    use crate::domain::{NewProduct, RepositoryProvider};
    use crate::infrastructure::InMemoryRepositoryProvider;
    use crate::interfaces::http::create_api_router;
    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;
    use crate::shared::types::Paginator;

    async fn app_with(count: usize) -> Router {
        app_paged(count, Paginator::default()).await
    }

    async fn app_paged(count: usize, paginator: Paginator) -> Router {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        for n in 1..=count {
            repos
                .products()
                .save(NewProduct {
                    name: format!("Product {}", n),
                    description: None,
                    price: 990,
                    currency: "USD".into(),
                    stock: 5,
                })
                .await
                .unwrap();
        }
        let service = Arc::new(ProductService::new(repos.clone(), paginator));
        create_api_router(repos, service)
    }

    async fn send(app: Router, req: Request<Body>) -> Response {
        app.into_service().call(req).await.unwrap()
    }

    async fn get(app: Router, uri: &str) -> Response {
        send(app, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn json_body(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn lists_first_page_with_page_metadata() {
        let resp = get(app_with(25).await, "/api/products?page=1&size=10").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        assert_eq!(body["page"], 1);
        assert_eq!(body["size"], 10);
        assert_eq!(body["totalElements"], 25);
        assert_eq!(body["totalPages"], 3);
        assert_eq!(body["content"].as_array().unwrap().len(), 10);
        assert_eq!(body["content"][0]["name"], "Product 1");
        assert_eq!(body["content"][0]["formattedPrice"], "9.90 USD");
        assert_eq!(body["content"][0]["inStock"], true);
        assert!(body["content"][0].get("createdAt").is_some());
        assert!(body["content"][0].get("formatted_price").is_none());
    }

    #[tokio::test]
    async fn missing_and_invalid_paging_is_normalized() {
        let body = json_body(get(app_with(25).await, "/api/products").await).await;
        assert_eq!(body["page"], 1);
        assert_eq!(body["size"], 10);

        let body = json_body(get(app_with(25).await, "/api/products?page=0&size=0").await).await;
        assert_eq!(body["page"], 1);
        assert_eq!(body["size"], 10);

        let body = json_body(get(app_with(25).await, "/api/products?page=-5&size=-3").await).await;
        assert_eq!(body["page"], 1);
        assert_eq!(body["size"], 10);
        assert_eq!(body["content"][0]["name"], "Product 1");
    }

    #[tokio::test]
    async fn omitted_size_uses_configured_default() {
        let app = app_paged(12, Paginator::new(5)).await;

        let body = json_body(get(app.clone(), "/api/products").await).await;
        assert_eq!(body["size"], 5);
        assert_eq!(body["totalPages"], 3);
        assert_eq!(body["content"].as_array().unwrap().len(), 5);

        let body = json_body(get(app, "/api/products?size=0").await).await;
        assert_eq!(body["size"], 5);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let body = json_body(get(app_with(25).await, "/api/products?page=4&size=10").await).await;
        assert_eq!(body["content"], json!([]));
        assert_eq!(body["totalElements"], 25);
        assert_eq!(body["totalPages"], 3);
    }

    #[tokio::test]
    async fn non_numeric_paging_is_rejected() {
        let resp = get(app_with(1).await, "/api/products?page=abc").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_product_by_id() {
        let app = app_with(2).await;
        let resp = get(app.clone(), "/api/products/2").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Product 2");

        let resp = get(app, "/api/products/99").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(resp).await["success"], false);
    }

    #[tokio::test]
    async fn create_product_then_list_it() {
        let app = app_with(0).await;
        let resp = send(
            app.clone(),
            post_json(
                "/api/products",
                json!({
                    "name": "  Desk Lamp ",
                    "description": "<p>Warm <b>LED</b> light</p>",
                    "price": 2599,
                    "currency": "usd",
                    "stock": 4
                }),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = json_body(resp).await;
        assert_eq!(body["data"]["name"], "Desk Lamp");
        assert_eq!(body["data"]["currency"], "USD");
        assert_eq!(body["data"]["formattedPrice"], "25.99 USD");

        let list = json_body(get(app, "/api/products").await).await;
        assert_eq!(list["totalElements"], 1);
    }

    #[tokio::test]
    async fn unsafe_content_is_rejected() {
        let app = app_with(0).await;

        let resp = send(
            app.clone(),
            post_json(
                "/api/products",
                json!({"name": "<script>alert(1)</script>", "price": 100, "currency": "USD"}),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error = json_body(resp).await["error"].as_str().unwrap().to_string();
        assert!(error.contains("name: input contains disallowed markup"), "{}", error);

        let resp = send(
            app.clone(),
            post_json(
                "/api/products",
                json!({"name": "Mug", "description": "what the shit", "price": 100, "currency": "USD"}),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = send(
            app.clone(),
            post_json("/api/products", json!({"name": "Mug", "price": -1, "currency": "USD"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let list = json_body(get(app, "/api/products").await).await;
        assert_eq!(list["totalElements"], 0);
    }

    #[tokio::test]
    async fn unterminated_markup_is_rejected() {
        let app = app_with(0).await;

        for description in ["<img src=x onerror=alert(1) ", "hello <script"] {
            let resp = send(
                app.clone(),
                post_json(
                    "/api/products",
                    json!({"name": "Mug", "description": description, "price": 100, "currency": "USD"}),
                ),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", description);
            let error = json_body(resp).await["error"].as_str().unwrap().to_string();
            assert!(error.contains("description: input contains disallowed markup"), "{}", error);
        }

        let list = json_body(get(app, "/api/products").await).await;
        assert_eq!(list["totalElements"], 0);
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = app_with(0).await;

        let resp = get(app.clone(), "/api/products").await;
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

        let req = Request::get("/api/products")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        let resp = send(app, req).await;
        assert_eq!(resp.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let resp = get(app_with(0).await, "/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["status"], "ok");
    }
}
