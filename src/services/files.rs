use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{error, get, web};

use crate::ServerState;

#[get("/download/{filename}")]
pub async fn download_file(
    state: web::Data<ServerState>,
    path: web::Path<String>,
) -> actix_web::Result<NamedFile> {
    let filename = path.into_inner();

    // The route matches a single segment, but the decoded value may still
    // smuggle a separator. Anything pointing outside the download
    // directory is treated as absent.
    if filename.contains('/') || filename.contains('\\') || filename == ".." {
        return Err(error::ErrorNotFound("no such file"));
    }

    let file = NamedFile::open_async(state.config.download_dir.join(&filename)).await?;
    Ok(file.set_content_disposition(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(filename)],
    }))
}
