use std::{error::Error, path::Path};

use rustube::{Stream, Video};
use tokio::fs;

use crate::downloader::{best_progressive_mp4, Representation};
use crate::filename::safe_filename;
use crate::models::download::{DownloadResult, FormatInfo};

/// Resolves `url`, picks the highest-resolution progressive MP4 stream
/// and saves it into `dir` under the sanitized video title.
///
/// Returns `Ok(None)` when the video has no progressive MP4 stream; the
/// caller decides what that means for the page.
pub async fn download(
    url: &str,
    dir: &Path,
) -> Result<Option<DownloadResult>, Box<dyn Error + Send + Sync>> {
    let video = Video::from_url(&reqwest::Url::parse(url)?).await?;
    let streams = video.streams();

    let representations: Vec<Representation> = streams
        .iter()
        .enumerate()
        .map(|(index, stream)| describe(index, stream))
        .collect();

    let index = match best_progressive_mp4(&representations) {
        Some(i) => i,
        None => return Ok(None),
    };

    let file_name = safe_filename(&video.video_details().title);
    fs::create_dir_all(dir).await?;
    let path = dir.join(&file_name);
    streams[index].download_to(&path).await?;

    let file_size = fs::metadata(&path).await?.len();
    Ok(Some(DownloadResult {
        file_name,
        file_size,
    }))
}

/// Resolves `url` and describes every stream the resolver reports.
pub async fn list_formats(
    url: &reqwest::Url,
) -> Result<Vec<FormatInfo>, Box<dyn Error + Send + Sync>> {
    let video = Video::from_url(url).await?;
    let formats = video
        .streams()
        .iter()
        .map(|stream| FormatInfo {
            itag: stream.itag,
            quality: stream.height.map(|h| format!("{}p", h)),
            mime: stream.mime.to_string(),
            progressive: stream.includes_video_track && stream.includes_audio_track,
        })
        .collect();
    Ok(formats)
}

fn describe(index: usize, stream: &Stream) -> Representation {
    Representation {
        index,
        progressive: stream.includes_video_track && stream.includes_audio_track,
        mp4: stream.mime.subtype().as_str() == "mp4",
        height: stream.height,
    }
}
