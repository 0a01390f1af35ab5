//! ワイヤ型の定義
//!
//! サーバと共有される型:
//! - FileRecord: /list レスポンスの1要素
//! - MetadataUpdate / MetadataRequest: /metadata のリクエストボディ

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// ファイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    Book,
    #[serde(rename = "E-book")]
    Ebook,
    Audiobook,
    Anthology,
    Essay,
    Whitepaper,
}

impl FileType {
    /// ドロップダウンに並べる全種別
    pub const ALL: [FileType; 6] = [
        FileType::Book,
        FileType::Ebook,
        FileType::Audiobook,
        FileType::Anthology,
        FileType::Essay,
        FileType::Whitepaper,
    ];

    /// ワイヤ上の表記（serdeのrenameと一致させる）
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Book => "Book",
            FileType::Ebook => "E-book",
            FileType::Audiobook => "Audiobook",
            FileType::Anthology => "Anthology",
            FileType::Essay => "Essay",
            FileType::Whitepaper => "Whitepaper",
        }
    }

    /// ワイヤ表記からの変換。未知の値は None
    pub fn parse(value: &str) -> Option<FileType> {
        FileType::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// /list レスポンスの1要素
///
/// filename がキーで不変。title / author / type は省略可能なメタデータ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecord {
    pub filename: String,
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<FileType>,
}

impl FileRecord {
    /// 表示タイトル
    ///
    /// titleが空白のみ・空文字列・未設定ならファイル名にフォールバックする
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.filename)
    }
}

/// /metadata リクエストの値。変更するフィールドだけを載せる
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
}

impl MetadataUpdate {
    /// タイトルだけを更新するペイロード（タイトル編集モーダル用）
    pub fn title(title: impl Into<String>) -> Self {
        MetadataUpdate {
            title: Some(title.into()),
            ..MetadataUpdate::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.file_type.is_none()
    }
}

/// /metadata リクエストボディ: ファイル名 → 部分更新
pub type MetadataRequest = BTreeMap<String, MetadataUpdate>;

/// 表示順に並べ替える
///
/// 表示タイトルの昇順（大文字小文字を区別しない）。同順はファイル名で安定化
pub fn sort_for_display(records: &mut [FileRecord]) {
    records.sort_by(|a, b| {
        a.display_title()
            .to_lowercase()
            .cmp(&b.display_title().to_lowercase())
            .then_with(|| a.filename.cmp(&b.filename))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(filename: &str, title: Option<&str>) -> FileRecord {
        FileRecord {
            filename: filename.to_string(),
            title: title.map(str::to_string),
            ..FileRecord::default()
        }
    }

    #[test]
    fn test_display_title_prefers_custom_title() {
        let r = record("actual-file.txt", Some("Display Title"));
        assert_eq!(r.display_title(), "Display Title");
    }

    #[test]
    fn test_display_title_falls_back_on_missing() {
        let r = record("document.txt", None);
        assert_eq!(r.display_title(), "document.txt");
    }

    #[test]
    fn test_display_title_falls_back_on_empty() {
        let r = record("document.txt", Some(""));
        assert_eq!(r.display_title(), "document.txt");
    }

    #[test]
    fn test_display_title_falls_back_on_whitespace_only() {
        let r = record("document.txt", Some("   \t"));
        assert_eq!(r.display_title(), "document.txt");
    }

    #[test]
    fn test_display_title_trims_surrounding_whitespace() {
        let r = record("document.txt", Some("  My Title  "));
        assert_eq!(r.display_title(), "My Title");
    }

    #[test]
    fn test_sort_by_title_or_filename() {
        let mut records = vec![
            record("zebra.txt", None),
            record("apple.pdf", Some("Banana Book")),
            record("berry.txt", Some("")),
            record("aardvark.txt", Some("")),
            record("mango.doc", Some("Alpha Guide")),
            record("donut.txt", Some("")),
            record("cherry.txt", Some("")),
        ];
        sort_for_display(&mut records);
        let order: Vec<&str> = records.iter().map(|r| r.display_title()).collect();
        assert_eq!(
            order,
            vec![
                "aardvark.txt",
                "Alpha Guide",
                "Banana Book",
                "berry.txt",
                "cherry.txt",
                "donut.txt",
                "zebra.txt",
            ]
        );
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut records = vec![
            record("b.txt", Some("banana")),
            record("a.txt", Some("Apple")),
        ];
        sort_for_display(&mut records);
        assert_eq!(records[0].display_title(), "Apple");
    }

    #[test]
    fn test_file_record_deserializes_nulls() {
        let json = r#"[{"filename":"a.txt","title":null,"author":null,"type":null},
                       {"filename":"b.txt"}]"#;
        let records: Vec<FileRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].filename, "a.txt");
        assert!(records[0].title.is_none());
        assert!(records[1].file_type.is_none());
    }

    #[test]
    fn test_file_record_deserializes_full_metadata() {
        let json = r#"{"filename":"a.epub","title":"T","author":"A","type":"E-book"}"#;
        let r: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.file_type, Some(FileType::Ebook));
        assert_eq!(r.author.as_deref(), Some("A"));
    }

    #[test]
    fn test_metadata_update_skips_unset_fields() {
        let update = MetadataUpdate::title("My Document Title");
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"title":"My Document Title"}"#);
    }

    #[test]
    fn test_metadata_request_wire_shape() {
        let mut request = MetadataRequest::new();
        request.insert(
            "document.txt".to_string(),
            MetadataUpdate {
                title: Some("T".to_string()),
                author: None,
                file_type: Some(FileType::Book),
            },
        );
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"document.txt":{"title":"T","type":"Book"}}"#);
    }

    #[test]
    fn test_file_type_parse_round_trip() {
        for t in FileType::ALL {
            assert_eq!(FileType::parse(t.as_str()), Some(t));
        }
        assert_eq!(FileType::parse("Magazine"), None);
        assert_eq!(FileType::parse(""), None);
    }
}
