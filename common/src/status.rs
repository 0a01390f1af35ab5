//! 操作結果のステータスバナー
//!
//! 削除やメタデータ編集の結果をアップローダの表示領域に流すための型

/// バナーの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// 画面上部に出す1件のステータスメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl OperationStatus {
    pub fn success(message: &str) -> Self {
        OperationStatus {
            kind: StatusKind::Success,
            message: format!("✓ SUCCESS: {message}"),
        }
    }

    pub fn error(message: &str) -> Self {
        OperationStatus {
            kind: StatusKind::Error,
            message: format!("⚠ ERROR: {message}"),
        }
    }

    /// ステータス表示のCSSクラス
    pub fn class(&self) -> &'static str {
        match self.kind {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}
