//! Post CRUD handlers.
//!
//! Path ids are taken as text so that a non-numeric id is reported as a bad
//! request by the service instead of failing route matching.

use actix_web::{HttpResponse, web};

use postline_core::domain::{Post, PostPatch};
use postline_shared::dto::{CreatePostRequest, DeleteResponse, PostResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        body: post.body,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.get_all().await?;
    tracing::debug!(count = posts.len(), "Listed posts");

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(path.as_str()).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state.posts.create(req.title, req.body).await?;

    tracing::info!(post_id = post.id, "Post created");
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PATCH /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        body: req.body,
    };
    let post = state.posts.update(path.as_str(), patch).await?;

    tracing::info!(post_id = post.id, "Post updated");
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let ack = state.posts.delete(path.as_str()).await?;

    tracing::info!(post_id = %path.as_str(), "Post deleted");
    Ok(HttpResponse::Ok().json(DeleteResponse {
        success: ack.success,
    }))
}
