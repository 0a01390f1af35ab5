//! Fileshelf Common Library
//!
//! Web(WASM)クライアントと共有される型と状態機械:
//! - types: ワイヤ型（/list レスポンス、/metadata リクエスト）
//! - edit_buffer / pending / upload / status: クライアント側の状態

pub mod edit_buffer;
pub mod error;
pub mod pending;
pub mod status;
pub mod types;
pub mod upload;

pub use edit_buffer::EditBuffer;
pub use error::{Error, Result};
pub use pending::PendingAction;
pub use status::{OperationStatus, StatusKind};
pub use types::{sort_for_display, FileRecord, FileType, MetadataRequest, MetadataUpdate};
pub use upload::{UploadState, UploadStatus};
