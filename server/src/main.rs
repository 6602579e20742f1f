#[macro_use]
extern crate log;

use std::{env, io};

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;

mod routes;
mod tests;
mod validate;

use crate::routes::routes;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

fn to_io_error(error: errors::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, error.to_string())
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::new_pool().map_err(to_io_error)?;
    db::run_migrations(&pool).map_err(to_io_error)?;
    let pool = Data::new(pool);

    let bind_address =
        env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
    let client_host = env::var("CLIENT_HOST").ok();

    info!("Listening on {}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(3600);
        if let Some(ref host) = client_host {
            cors = cors.allowed_origin(host);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(pool.clone())
            .configure(routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
