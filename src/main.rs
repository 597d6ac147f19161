use actix_web::cookie::Key;
use actix_web::{middleware::Logger, web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use log::{error, info};

use crate::config::Config;

mod config;
mod downloader;
mod filename;
mod models;
mod pages;
mod services;
#[cfg(test)]
mod test_support;

pub struct ServerState {
    pub config: Config,
}

const CONFIG_PATH: &str = "config.toml";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()))
        .init();

    let config = match Config::load(CONFIG_PATH) {
        Ok(c) => c,
        Err(why) => {
            error!("{:#}", why);
            std::process::exit(1);
        }
    };

    info!("listening on http://{}", config.listen_addr);
    info!("saving videos to {}", config.download_dir.display());

    let message_store =
        CookieMessageStore::builder(Key::derive_from(config.secret_key.as_bytes())).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let listen_addr = config.listen_addr.clone();
    let state = web::Data::new(ServerState { config });

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(message_framework.clone())
            .app_data(state.clone())
            .service(services::index::index)
            .service(services::index::submit)
            .service(services::files::download_file)
            .service(services::formats::formats)
            .service(services::health::health_check)
    })
    .bind(listen_addr.as_str())?
    .run()
    .await
}
