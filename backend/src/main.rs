mod analytics;
mod config;
mod error;
mod ingest;
mod services;
mod store;

use crate::config::Settings;
use crate::store::Store;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let store = match Store::open(&settings.database_path) {
        Ok(store) => store,
        Err(e) => {
            error!("Cannot open database '{}': {}", settings.database_path, e);
            std::process::exit(1);
        }
    };
    info!("Using database {}", settings.database_path);

    let address = settings.bind_address();
    info!("Server running at http://{}", address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(settings.clone()))
            .service(services::uploads::configure_routes())
            .service(services::records::configure_routes())
            .service(services::dashboard::configure_routes())
    })
    .bind(address)?
    .run()
    .await
}
