use actix_web::HttpResponse;

/// Liveness summary. The store is process-local so there is no downstream
/// dependency to probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "postline",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
