//! API route definitions

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::{
    handlers::{health, todo_items},
    middleware::logging_middleware,
    state::AppState,
};

/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Todo items
        .route(
            "/api/TodoItems",
            get(todo_items::list_items).post(todo_items::create_item),
        )
        .route("/api/TodoItems/categories", get(todo_items::list_categories))
        .route("/api/TodoItems/print", get(todo_items::print_output))
        .route(
            "/api/TodoItems/{id}",
            get(todo_items::get_item)
                .put(todo_items::update_item)
                .delete(todo_items::delete_item),
        )
        .route(
            "/api/TodoItems/{id}/progressions",
            post(todo_items::register_progression),
        )
}

/// OpenAPI document route
pub fn openapi_routes() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}

/// Combined routes with request logging and permissive CORS
pub fn build_router(state: AppState) -> Router {
    api_routes()
        .merge(openapi_routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        todo_items::list_items,
        todo_items::get_item,
        todo_items::list_categories,
        todo_items::create_item,
        todo_items::update_item,
        todo_items::delete_item,
        todo_items::register_progression,
        todo_items::print_output,
    ),
    components(schemas(
        crate::models::TodoItemRequest,
        crate::models::ProgressionRequest,
        crate::models::TodoItemResponse,
        crate::models::ProgressionResponse,
        crate::models::PrintOutputResponse,
        crate::models::ErrorResponse,
        crate::models::HealthResponse,
    )),
    info(
        title = "Todo List API",
        version = "1.0.0",
        description = "RESTful API for todo items with progress tracking"
    )
)]
struct ApiDoc;
