use std::sync::Arc;

use actix_web::{App, HttpServer, web};

use ove_foods::db::establish_connection_pool;
use ove_foods::models::config::{AppConfig, ContentSource};
use ove_foods::repository::{DieselDocumentStore, DocumentStore, StaticJsonStore};
use ove_foods::routes;
use ove_foods::services::content::ContentProvider;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::load().expect("Failed to load configuration");

    let store: Arc<dyn DocumentStore> = match &config.content {
        ContentSource::Live { database_url } => {
            let pool = establish_connection_pool(database_url)
                .expect("Failed to establish SQLite connection.");
            Arc::new(DieselDocumentStore::new(pool))
        }
        ContentSource::Static { data_dir } => {
            Arc::new(StaticJsonStore::load(data_dir).expect("Failed to load static content"))
        }
    };

    let provider = ContentProvider::new(Arc::clone(&store));
    let store_data: web::Data<dyn DocumentStore> = web::Data::from(store);

    log::info!(
        "starting OVE Foods content service on {}:{}",
        config.bind_address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .app_data(web::Data::new(provider.clone()))
            .configure(routes::configure)
    })
    .bind((config.bind_address.clone(), config.port))?
    .run()
    .await
}
