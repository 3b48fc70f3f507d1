/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::Post;
use crate::store::PostStore;

/// Get all posts
pub async fn list_posts(store: web::Data<RwLock<PostStore>>) -> Result<HttpResponse> {
    let store = store.read().await;
    Ok(HttpResponse::Ok().json(store.list()))
}

/// Create a new post
///
/// The body is stored verbatim; nothing is validated and no id is
/// assigned.
pub async fn create_post(
    store: web::Data<RwLock<PostStore>>,
    body: web::Json<Post>,
) -> Result<HttpResponse> {
    let mut store = store.write().await;
    let created = store.create(body.into_inner());
    Ok(HttpResponse::Created().json(created))
}

/// Update a post by id with a shallow field merge
pub async fn update_post(
    store: web::Data<RwLock<PostStore>>,
    post_id: web::Path<i64>,
    patch: web::Json<Map<String, Value>>,
) -> Result<HttpResponse> {
    let mut store = store.write().await;
    let updated = store.update_by_id(*post_id, &patch)?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete every post matching the given id
///
/// Succeeds with 204 whether or not anything matched.
pub async fn delete_post(
    store: web::Data<RwLock<PostStore>>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let mut store = store.write().await;
    store.delete_by_id(*post_id);
    Ok(HttpResponse::NoContent().finish())
}
