//! File attachment domain
//!
//! - `Attachment`: the single file bound to the form
//! - `drop_zone`: kind/count filtering of dropped or typed paths

mod drop_zone;

pub use drop_zone::{parse_dropped_paths, DropZone, DropZoneConfig, Rejection};

#[cfg(test)]
pub use drop_zone::RejectReason;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Accepted attachment kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Png,
    Jpg,
    Jpeg,
    Gif,
}

impl FileKind {
    pub const ALL: [FileKind; 5] = [
        FileKind::Pdf,
        FileKind::Png,
        FileKind::Jpg,
        FileKind::Jpeg,
        FileKind::Gif,
    ];

    /// Kind from a path's extension, case-insensitive
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "png" => Some(Self::Png),
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::Jpg | Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
        }
    }
}

/// The user-selected file bound to the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub kind: FileKind,
}

impl Attachment {
    /// Size in kibibytes with two decimals, e.g. `"1.50"`
    pub fn size_kib(&self) -> String {
        format!("{:.2}", self.size_bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension_is_case_insensitive() {
        assert_eq!(FileKind::from_path(Path::new("scan.PDF")), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_path(Path::new("a/b/photo.Jpeg")), Some(FileKind::Jpeg));
        assert_eq!(FileKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(FileKind::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(FileKind::Jpg.mime_type(), "image/jpeg");
        assert_eq!(FileKind::Pdf.mime_type(), "application/pdf");
    }

    #[test]
    fn test_size_kib_two_decimals() {
        let attachment = Attachment {
            name: "cv.pdf".to_string(),
            path: PathBuf::from("/tmp/cv.pdf"),
            size_bytes: 1536,
            kind: FileKind::Pdf,
        };
        assert_eq!(attachment.size_kib(), "1.50");

        let empty = Attachment {
            size_bytes: 0,
            ..attachment.clone()
        };
        assert_eq!(empty.size_kib(), "0.00");

        let odd = Attachment {
            size_bytes: 1000,
            ..attachment
        };
        assert_eq!(odd.size_kib(), "0.98");
    }
}
