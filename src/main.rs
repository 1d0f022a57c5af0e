mod web;

use actix_files::Files;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string());

    tracing::info!(%bind_addr, "starting folderzen-site");

    HttpServer::new(move || {
        App::new()
            .configure(web::routes::configure)
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
    })
    .bind(bind_addr)?
    .run()
    .await
}
