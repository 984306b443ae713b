use actix_web::http::header::ContentType;
use actix_web::{get, HttpResponse};

const DEMO_PAGE: &str = include_str!("../../static/index.html");

// iframe web demo of the bot
#[get("/")]
pub async fn page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(DEMO_PAGE)
}
