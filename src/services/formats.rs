use actix_web::{get, web, HttpResponse, Responder};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::downloader;

#[derive(Deserialize)]
pub struct FormatsQuery {
    url: String,
}

#[get("/formats")]
pub async fn formats(query: web::Query<FormatsQuery>) -> impl Responder {
    let url = match reqwest::Url::parse(&query.url) {
        Ok(u) => u,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({ "error": "Invalid video URL" }))
        }
    };

    match downloader::youtube::list_formats(&url).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(why) => {
            error!("{}", why);
            HttpResponse::InternalServerError().json(json!({ "error": why.to_string() }))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn unparsable_url_is_bad_request() {
        let app = test::init_service(App::new().service(formats)).await;

        let req = test::TestRequest::get()
            .uri("/formats?url=not%20a%20url")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid video URL");
    }

    #[actix_web::test]
    async fn missing_url_parameter_is_rejected() {
        let app = test::init_service(App::new().service(formats)).await;

        let req = test::TestRequest::get().uri("/formats").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
