//! メインアプリケーションコンポーネント
//!
//! 初回マウントでリストを取得し、変更系の操作後は必ずリスト全体を
//! 取り直す（差分適用はしない）。削除・メタデータ編集の結果は
//! アップローダの表示領域に流す

use fileshelf_common::{FileRecord, MetadataUpdate, OperationStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{file_list::FileList, file_uploader::FileUploader};

#[component]
pub fn App() -> impl IntoView {
    let (files, set_files) = signal(Vec::<FileRecord>::new());
    let (operation_status, set_operation_status) = signal(None::<OperationStatus>);

    let load_file_list = move || {
        spawn_local(async move {
            match api::list_files().await {
                Ok(list) => set_files.set(list),
                // 初回ロードの失敗はログに残すだけで、リストは空のまま
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load files: {e}").into());
                }
            }
        });
    };

    load_file_list();

    let on_delete = move |filename: String| {
        spawn_local(async move {
            match api::delete_file(&filename).await {
                Ok(()) => {
                    set_operation_status.set(Some(OperationStatus::success("File deleted!")));
                    load_file_list();
                }
                Err(e) => {
                    set_operation_status.set(Some(OperationStatus::error(&e.to_string())));
                }
            }
        });
    };

    let on_edit_metadata = move |filename: String, update: MetadataUpdate| {
        spawn_local(async move {
            match api::edit_file_metadata(&filename, &update).await {
                // 成功時はバナーを出さずに再取得だけ行う
                Ok(()) => load_file_list(),
                Err(e) => {
                    set_operation_status.set(Some(OperationStatus::error(&e.to_string())));
                }
            }
        });
    };

    let on_upload_complete = move || {
        set_operation_status.set(None);
        load_file_list();
    };

    let on_clear_status = move || set_operation_status.set(None);

    view! {
        <div class="container">
            <h1>"FILESHELF"</h1>
            <div class="section upload-section">
                <h2>"UPLOAD FILE"</h2>
                <FileUploader
                    external_status=operation_status
                    on_upload_complete=on_upload_complete
                    on_clear_external_status=on_clear_status
                />
            </div>
            <div class="section file-list-section">
                <h2>"FILE LIST"</h2>
                <FileList
                    files=files
                    on_download=|filename: String| api::download_file(&filename)
                    on_delete=on_delete
                    on_edit_metadata=on_edit_metadata
                />
            </div>
        </div>
    }
}
