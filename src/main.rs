use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use listenfd::ListenFd;
use std::env;

mod db;
mod error_handler;
mod schema;

mod districts;
mod health;
mod states;

macro_rules! AppFactory {
    ($pool:expr) => {
        move || {
            App::new()
                .wrap(Logger::default())
                .wrap(
                    Cors::default()
                        .allowed_origin("http://localhost:3000")
                        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
                        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
                        .max_age(3600),
                )
                .app_data(web::Data::new($pool.clone()))
                .configure(states::init_routes)
                .configure(districts::init_routes)
                .configure(health::init_routes)
        }
    };
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| String::from("covid19India.db"));
    let pool = db::init(&database_url);

    let mut listenfd = ListenFd::from_env();
    let mut server = HttpServer::new(AppFactory!(pool));

    server = match listenfd.take_tcp_listener(0)? {
        Some(listener) => server.listen(listener)?,
        None => {
            let port = env::var("PORT").unwrap_or_else(|_| String::from("3000"));
            server.bind(format!("0.0.0.0:{}", port))?
        }
    };

    server.run().await
}
