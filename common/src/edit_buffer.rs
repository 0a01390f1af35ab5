//! 行の編集バッファ
//!
//! 展開中の行だけが持つ一時状態。空文字列は「未変更（元の値を使う）」を
//! 意味し、行を畳むと無条件で破棄される。保存は明示的な操作でのみ行う

use crate::types::{FileRecord, FileType, MetadataUpdate};

/// 展開中の行が持つ下書き。全フィールド空が初期状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub title: String,
    pub author: String,
    pub file_type: String,
}

impl EditBuffer {
    /// 行を展開したときに呼ぶ。種別だけは現在値を選択済みにして始める。
    /// タイトル・著者は空のまま（現在値はプレースホルダで見せる）
    pub fn seed(&mut self, record: &FileRecord) {
        self.title.clear();
        self.author.clear();
        self.file_type = record
            .file_type
            .map(|t| t.as_str().to_string())
            .unwrap_or_default();
    }

    /// 行を畳んだときに呼ぶ。未保存の下書きを全て破棄する
    pub fn clear(&mut self) {
        *self = EditBuffer::default();
    }

    /// タイトルが変更扱いか（非空かつ表示タイトルと異なる）
    pub fn title_changed(&self, record: &FileRecord) -> bool {
        !self.title.is_empty() && self.title != record.display_title()
    }

    /// 著者が変更扱いか
    pub fn author_changed(&self, record: &FileRecord) -> bool {
        !self.author.is_empty() && Some(self.author.as_str()) != record.author.as_deref()
    }

    /// 種別が変更扱いか
    pub fn type_changed(&self, record: &FileRecord) -> bool {
        !self.file_type.is_empty()
            && record.file_type.map(|t| t.as_str()) != Some(self.file_type.as_str())
    }

    /// 保存ボタンを有効にするか。どれか1つでも変更があれば真
    pub fn save_enabled(&self, record: &FileRecord) -> bool {
        self.title_changed(record) || self.author_changed(record) || self.type_changed(record)
    }

    /// 保存ペイロードを組み立てる
    ///
    /// 変更されたフィールドだけを載せる。変更が1つもなければ None（保存は no-op）
    pub fn changed_fields(&self, record: &FileRecord) -> Option<MetadataUpdate> {
        if !self.save_enabled(record) {
            return None;
        }
        Some(MetadataUpdate {
            title: self.title_changed(record).then(|| self.title.clone()),
            author: self.author_changed(record).then(|| self.author.clone()),
            file_type: if self.type_changed(record) {
                FileType::parse(&self.file_type)
            } else {
                None
            },
        })
    }
}
