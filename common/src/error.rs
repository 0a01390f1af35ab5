//! エラー型定義

use thiserror::Error;

/// API呼び出しの失敗種別
///
/// メッセージはそのままUIのステータスバナーに表示される
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Failed to load files")]
    Load,

    #[error("File not found")]
    NotFound,

    #[error("Delete failed")]
    Delete,

    #[error("Upload failed")]
    Upload,

    #[error("Failed to edit metadata")]
    Metadata,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_load() {
        assert_eq!(format!("{}", Error::Load), "Failed to load files");
    }

    #[test]
    fn test_error_display_not_found() {
        assert_eq!(format!("{}", Error::NotFound), "File not found");
    }

    #[test]
    fn test_error_display_delete() {
        assert_eq!(format!("{}", Error::Delete), "Delete failed");
    }

    #[test]
    fn test_error_display_upload() {
        assert_eq!(format!("{}", Error::Upload), "Upload failed");
    }

    #[test]
    fn test_error_display_metadata() {
        assert_eq!(format!("{}", Error::Metadata), "Failed to edit metadata");
    }

    #[test]
    fn test_error_debug() {
        let debug = format!("{:?}", Error::NotFound);
        assert!(debug.contains("NotFound"));
    }
}
