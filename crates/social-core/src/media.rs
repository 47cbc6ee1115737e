//! Media helpers: the upload allow-list, upload payloads, picker discovery,
//! and the render-URL seam used by the feed.

use std::path::{Path, PathBuf};

/// Media types the upload flow accepts, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Png,
    Jpg,
    Jpeg,
    Mp4,
    Avi,
    Mov,
    Mkv,
    Webm,
}

impl MediaKind {
    pub const ALL: [MediaKind; 8] = [
        MediaKind::Png,
        MediaKind::Jpg,
        MediaKind::Jpeg,
        MediaKind::Mp4,
        MediaKind::Avi,
        MediaKind::Mov,
        MediaKind::Mkv,
        MediaKind::Webm,
    ];

    /// Matches a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.extension() == ext)
    }

    /// Matches the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(self) -> &'static str {
        match self {
            MediaKind::Png => "png",
            MediaKind::Jpg => "jpg",
            MediaKind::Jpeg => "jpeg",
            MediaKind::Mp4 => "mp4",
            MediaKind::Avi => "avi",
            MediaKind::Mov => "mov",
            MediaKind::Mkv => "mkv",
            MediaKind::Webm => "webm",
        }
    }

    /// Declared MIME type sent with the multipart file part.
    pub fn mime_type(self) -> &'static str {
        match self {
            MediaKind::Png => "image/png",
            MediaKind::Jpg | MediaKind::Jpeg => "image/jpeg",
            MediaKind::Mp4 => "video/mp4",
            MediaKind::Avi => "video/x-msvideo",
            MediaKind::Mov => "video/quicktime",
            MediaKind::Mkv => "video/x-matroska",
            MediaKind::Webm => "video/webm",
        }
    }

    pub fn is_video(self) -> bool {
        !matches!(self, MediaKind::Png | MediaKind::Jpg | MediaKind::Jpeg)
    }
}

/// File part of an upload.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub kind: MediaKind,
}

impl MediaFile {
    /// Reads `path` into memory.
    ///
    /// Fails for unreadable files and for extensions outside the allow-list.
    pub async fn read(path: &Path) -> std::io::Result<Self> {
        let kind = MediaKind::from_path(path).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("unsupported media type: {}", path.display()),
            )
        })?;
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("upload.{}", kind.extension()));
        Ok(Self { name, bytes, kind })
    }
}

/// A post submission: constructed on submit, consumed by the API call.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file: MediaFile,
    pub caption: Option<String>,
}

/// Reserved knobs for future media transforms (sizing, caption overlays).
/// Ignored today.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformParams {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub overlay_text: Option<String>,
}

/// Maps a backend media URL to the URL the client renders.
///
/// Identity for now; this is the hook for overlay/transform logic.
pub fn render_url(url: &str, _params: Option<&TransformParams>) -> String {
    url.to_string()
}

/// Normalizes user-provided file paths.
///
/// Handles common drag-and-drop shell escaping (`\ `, `\(`, `\)`) and
/// expands `~/` to the HOME directory when available.
pub fn normalize_input_path(path: &str) -> PathBuf {
    let unescaped = path
        .trim()
        .replace("\\ ", " ")
        .replace("\\(", "(")
        .replace("\\)", ")");

    if let Some(rest) = unescaped.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    PathBuf::from(unescaped)
}

/// Maximum directory depth scanned by the upload picker.
pub const MAX_DISCOVERY_DEPTH: usize = 4;

/// Lists allow-listed media files under `root` (relative paths, sorted).
///
/// Honors .gitignore and hidden-file filters.
pub fn discover_media(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    let walker = WalkBuilder::new(root)
        .standard_filters(true)
        .max_depth(Some(max_depth))
        .build();

    let mut files: Vec<PathBuf> = walker
        .flatten()
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| MediaKind::from_path(entry.path()).is_some())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .filter(|rel| !rel.as_os_str().is_empty())
                .map(Path::to_path_buf)
        })
        .collect();

    files.sort();
    files
}
