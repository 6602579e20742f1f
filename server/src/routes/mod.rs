use actix_web::{web, HttpResponse};

use errors::{Error, ErrorResponse};

pub mod polls;

const NOT_FOUND: &str = "Not Found";

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from(NOT_FOUND))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    // ids that don't parse get the same JSON 404 as unknown routes
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|_, _| Error::NotFound(NOT_FOUND.to_string()).into()),
    )
    .service(
        web::scope("/polls")
            .route("", web::get().to(polls::index))
            .service(
                web::scope("/{question_id}")
                    .route("", web::get().to(polls::detail))
                    .route("/results", web::get().to(polls::results))
                    .route("/vote", web::post().to(polls::vote)),
            ),
    )
    .default_service(web::route().to(not_found));
}
