/// HTTP handlers for blog-service endpoints
///
/// This module contains handlers for:
/// - Posts: Create, read, update, delete blog posts
/// - Welcome and health endpoints
use actix_web::{web, HttpResponse};

pub mod posts;

// Re-export handler functions at module level
pub use posts::{create_post, delete_post, list_posts, update_post};

/// GET / - plain text greeting
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to my blog")
}

/// GET /health - liveness endpoint
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "blog-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Configure routes for blog service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(welcome))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(list_posts))
                        .route(web::post().to(create_post)),
                )
                .service(
                    web::resource("/{post_id}")
                        .route(web::put().to(update_post))
                        .route(web::delete().to(delete_post)),
                ),
        );
}
