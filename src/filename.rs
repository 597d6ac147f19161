/// Maps a video title to a name safe for the download directory.
///
/// Every character outside the ASCII letter/digit ranges becomes an
/// underscore, one per character, and a fixed `.mp4` extension is
/// appended. Colliding titles map to the same name and overwrite.
pub fn safe_filename(title: &str) -> String {
    let safe: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}.mp4", safe)
}
