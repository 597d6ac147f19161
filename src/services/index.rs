use actix_web::{get, http::header, post, web, HttpResponse, Responder};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use log::{debug, error};
use serde::Deserialize;

use crate::models::download::DownloadRequest;
use crate::pages::{self, Notice};
use crate::{downloader, ServerState};

#[derive(Deserialize)]
pub struct IndexQuery {
    file: Option<String>,
}

#[get("/")]
pub async fn index(
    messages: IncomingFlashMessages,
    query: web::Query<IndexQuery>,
) -> impl Responder {
    let notices: Vec<Notice> = messages
        .iter()
        .map(|m| Notice {
            category: category(m.level()),
            text: m.content().to_owned(),
        })
        .collect();

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::index_page(&notices, query.file.as_deref()))
}

#[post("/")]
pub async fn submit(
    state: web::Data<ServerState>,
    input: web::Form<DownloadRequest>,
) -> impl Responder {
    let url = input.into_inner().video_url;

    match downloader::youtube::download(&url, &state.config.download_dir).await {
        Ok(Some(result)) => {
            debug!("saved {} ({} bytes)", result.file_name, result.file_size);
            FlashMessage::success("Download completed.").send();
            see_other(&format!("/?file={}", result.file_name))
        }
        // No progressive MP4 stream: nothing is saved and the page comes
        // back unchanged.
        Ok(None) => see_other("/"),
        Err(why) => {
            error!("{}", why);
            FlashMessage::error(format!("Error: {}", why)).send();
            see_other("/")
        }
    }
}

fn category(level: Level) -> &'static str {
    match level {
        Level::Success => "success",
        Level::Error => "error",
        _ => "info",
    }
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_owned()))
        .finish()
}
