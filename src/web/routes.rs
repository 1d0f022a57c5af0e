use actix_web::{get, web, HttpResponse, Responder};

use folderzen_site::frontend::render_homepage;

#[get("/")]
pub async fn homepage() -> impl Responder {
    tracing::debug!("rendering homepage");
    render(render_homepage())
}

fn render(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(homepage);
}
