pub mod coins;
pub mod config;
pub mod intent;
pub mod quote;
pub mod routes;

use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use config::Config;
use std::net::TcpListener;
use std::sync::Arc;

pub fn run(listener: TcpListener, config: Config) -> Result<Server> {
    let quote_client = quote::Client::new(config.ticker_base_url.clone())?;

    let quote_client: Arc<dyn quote::Interface> = Arc::new(quote_client);

    let quote_client = web::Data::new(quote_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(quote_client.clone())
            .service(routes::home::page)
            .service(routes::health::check)
            .service(routes::webhook::handler)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
