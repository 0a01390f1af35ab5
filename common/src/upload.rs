//! アップロード状態機械
//!
//! idle -> uploading -> (success | error) -> idle の遷移。
//! 進捗バーの表示/非表示はコンポーネント側のタイマーが別管理する

/// アップロードの進行状況
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Error,
}

/// 単一の進行中アップロード。アップローダにつき1インスタンス
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub status: UploadStatus,
    /// 丸め済みの進捗率 0–100
    pub progress: u8,
    pub error_message: String,
}

impl UploadState {
    /// 送信開始。進捗を0に戻し、前回のエラーを消す
    pub fn begin(&mut self) {
        self.status = UploadStatus::Uploading;
        self.progress = 0;
        self.error_message.clear();
    }

    /// 進捗イベント（0–100の小数）を丸めて反映する
    pub fn set_progress(&mut self, percent: f64) {
        self.progress = percent.round().clamp(0.0, 100.0) as u8;
    }

    pub fn succeed(&mut self) {
        self.status = UploadStatus::Success;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = UploadStatus::Error;
        self.error_message = message.into();
    }
}
