//! Todo item API handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use todo_domain::value_objects::TodoItemId;

use crate::{
    error::ApiResult,
    models::{
        ErrorResponse, PrintOutputResponse, ProgressionRequest, TodoItemRequest, TodoItemResponse,
    },
    state::AppState,
};

/// Base path of the todo item resource
pub const TODO_ITEMS_PATH: &str = "/api/TodoItems";

/// List all todo items
#[utoipa::path(
    get,
    path = "/api/TodoItems",
    responses(
        (status = 200, description = "All todo items", body = Vec<TodoItemResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<TodoItemResponse>>> {
    let items = state.todo_service.list_all().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Get a todo item by ID
#[utoipa::path(
    get,
    path = "/api/TodoItems/{id}",
    params(("id" = i64, Path, description = "Todo item ID")),
    responses(
        (status = 200, description = "Todo item found", body = TodoItemResponse),
        (status = 404, description = "Todo item not found", body = ErrorResponse)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<TodoItemResponse>> {
    let Path(id) = id?;
    let item = state.todo_service.get_by_id(TodoItemId::new(id)).await?;
    Ok(Json(item.into()))
}

/// List valid categories
#[utoipa::path(
    get,
    path = "/api/TodoItems/categories",
    responses(
        (status = 200, description = "Valid category names", body = Vec<String>)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.todo_service.list_categories().await?))
}

/// Create a todo item
#[utoipa::path(
    post,
    path = "/api/TodoItems",
    request_body = TodoItemRequest,
    responses(
        (status = 201, description = "Todo item created", body = TodoItemResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Option<TodoItemRequest>>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;

    let item = state.todo_service.create(request.map(Into::into)).await?;
    let location = format!("{}/{}", TODO_ITEMS_PATH, item.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoItemResponse::from(item)),
    ))
}

/// Update a todo item's description
#[utoipa::path(
    put,
    path = "/api/TodoItems/{id}",
    params(("id" = i64, Path, description = "Todo item ID")),
    request_body = TodoItemRequest,
    responses(
        (status = 200, description = "Todo item updated", body = TodoItemResponse),
        (status = 400, description = "Invalid request or more than 50% progress", body = ErrorResponse),
        (status = 404, description = "Todo item not found", body = ErrorResponse)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Option<TodoItemRequest>>, JsonRejection>,
) -> ApiResult<Json<TodoItemResponse>> {
    let Path(id) = id?;
    let Json(request) = payload?;

    let item = state
        .todo_service
        .update(TodoItemId::new(id), request.map(Into::into))
        .await?;
    Ok(Json(item.into()))
}

/// Delete a todo item
#[utoipa::path(
    delete,
    path = "/api/TodoItems/{id}",
    params(("id" = i64, Path, description = "Todo item ID")),
    responses(
        (status = 204, description = "Todo item deleted"),
        (status = 400, description = "More than 50% progress", body = ErrorResponse),
        (status = 404, description = "Todo item not found", body = ErrorResponse)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.todo_service.remove(TodoItemId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Register progress on a todo item
#[utoipa::path(
    post,
    path = "/api/TodoItems/{id}/progressions",
    params(("id" = i64, Path, description = "Todo item ID")),
    request_body = ProgressionRequest,
    responses(
        (status = 200, description = "Progression registered", body = TodoItemResponse),
        (status = 400, description = "Invalid progression", body = ErrorResponse),
        (status = 404, description = "Todo item not found", body = ErrorResponse)
    )
)]
pub async fn register_progression(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Option<ProgressionRequest>>, JsonRejection>,
) -> ApiResult<Json<TodoItemResponse>> {
    let Path(id) = id?;
    let Json(request) = payload?;

    let item = state
        .todo_service
        .register_progression(TodoItemId::new(id), request.map(Into::into))
        .await?;
    Ok(Json(item.into()))
}

/// Render the progress report for all items
#[utoipa::path(
    get,
    path = "/api/TodoItems/print",
    responses(
        (status = 200, description = "Rendered report", body = PrintOutputResponse)
    )
)]
pub async fn print_output(State(state): State<AppState>) -> ApiResult<Json<PrintOutputResponse>> {
    let output = state.todo_service.print_output().await?;
    Ok(Json(PrintOutputResponse { output }))
}
