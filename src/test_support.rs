use std::path::Path;

use actix_web::cookie::Key;
use actix_web::web;
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;

use crate::config::Config;
use crate::ServerState;

const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef0123456789abcdef";

pub fn test_state(download_dir: &Path) -> web::Data<ServerState> {
    web::Data::new(ServerState {
        config: Config {
            listen_addr: "127.0.0.1:0".to_owned(),
            download_dir: download_dir.to_path_buf(),
            secret_key: TEST_SECRET.to_owned(),
        },
    })
}

pub fn flash_framework() -> FlashMessagesFramework {
    let store = CookieMessageStore::builder(Key::derive_from(TEST_SECRET.as_bytes())).build();
    FlashMessagesFramework::builder(store).build()
}
