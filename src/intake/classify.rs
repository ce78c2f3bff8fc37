//! Extension, kind and MIME resolution

use chrono::{DateTime, Utc};

use crate::models::{AssetKind, RawMediaAsset};

/// Extensions that mark an asset as video
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mov", "m4v", "webm"];

/// Lowercased extension of the asset, from its name or else its locator
pub fn extension(asset: &RawMediaAsset) -> String {
    let name = asset
        .file_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .or_else(|| asset.uri_file_name())
        .unwrap_or_default();

    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

/// Whether the asset is a video
pub fn is_video(asset: &RawMediaAsset, ext: &str) -> bool {
    asset.kind == Some(AssetKind::Video) || VIDEO_EXTENSIONS.contains(&ext)
}

/// MIME type sent with the upload.
///
/// Videos are always sent as `video/mp4`; unknown image types fall back
/// to `image/jpeg`.
pub fn mime(ext: &str, is_video: bool) -> &'static str {
    if is_video {
        return "video/mp4";
    }
    match ext {
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "image/jpeg",
    }
}

/// Name for the upload part: the picker's name, or a generated one
pub fn file_name(asset: &RawMediaAsset, ext: &str, is_video: bool, now: DateTime<Utc>) -> String {
    if let Some(name) = asset.file_name.as_deref().filter(|n| !n.trim().is_empty()) {
        return name.to_string();
    }
    let ext = if !ext.is_empty() {
        ext
    } else if is_video {
        "mp4"
    } else {
        "jpg"
    };
    format!("upload_{}.{ext}", now.timestamp_millis())
}

/// Label used in rejection reports
pub fn label(asset: &RawMediaAsset, is_video: bool) -> String {
    asset
        .file_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .or_else(|| asset.uri_file_name())
        .map_or_else(
            || (if is_video { "Video" } else { "File" }).to_string(),
            ToString::to_string,
        )
}

/// Rewrite absolute paths to `file://` form
pub fn normalize_uri(uri: &str) -> String {
    if uri.starts_with('/') && !uri.starts_with("file://") {
        format!("file://{uri}")
    } else {
        uri.to_string()
    }
}
