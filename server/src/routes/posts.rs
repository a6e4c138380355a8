//! `/posts` resource handlers, mounted under `/api/v1`.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{CreatePost, Post, UpdatePost};
use crate::store::PostStore;

pub fn router() -> Router<PostStore> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post)
                .patch(update_post)
                .put(update_post)
                .delete(delete_post),
        )
}

async fn list_posts(State(store): State<PostStore>) -> Json<Vec<Post>> {
    Json(store.list().await)
}

async fn create_post(
    State(store): State<PostStore>,
    ApiJson(input): ApiJson<CreatePost>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    input.validate()?;
    let post = store.insert(Post::new(input)).await;
    info!(id = %post.id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

async fn get_post(
    State(store): State<PostStore>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Post>, ApiError> {
    store.get(id).await.map(Json).ok_or(ApiError::NotFound("post"))
}

async fn update_post(
    State(store): State<PostStore>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<UpdatePost>,
) -> Result<Json<Post>, ApiError> {
    input.validate()?;
    let post = store.update(id, input).await.ok_or(ApiError::NotFound("post"))?;
    info!(id = %post.id, "post updated");
    Ok(Json(post))
}

async fn delete_post(
    State(store): State<PostStore>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    store.remove(id).await.ok_or(ApiError::NotFound("post"))?;
    info!(%id, "post deleted");
    Ok(StatusCode::NO_CONTENT)
}
