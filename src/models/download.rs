use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct DownloadRequest {
    pub video_url: String,
}

#[derive(Debug)]
pub struct DownloadResult {
    pub file_name: String,
    pub file_size: u64,
}

#[derive(Debug, Serialize)]
pub struct FormatInfo {
    pub itag: u64,
    pub quality: Option<String>,
    pub mime: String,
    pub progressive: bool,
}
