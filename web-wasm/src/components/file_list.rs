//! ファイル一覧コンポーネント
//!
//! 表示タイトルの昇順で行を並べ、保留中アクション（モーダル）の
//! 単一スロットを所有する。モーダルはスロットが埋まっている間だけ
//! ツリーに存在する

use fileshelf_common::{sort_for_display, FileRecord, MetadataUpdate, PendingAction};
use leptos::prelude::*;

use crate::components::{delete_modal::DeleteModal, file_item::FileItem, title_modal::TitleModal};

#[component]
pub fn FileList<FDown, FDel, FEdit>(
    files: ReadSignal<Vec<FileRecord>>,
    on_download: FDown,
    on_delete: FDel,
    on_edit_metadata: FEdit,
) -> impl IntoView
where
    FDown: Fn(String) + 'static + Clone + Send + Sync,
    FDel: Fn(String) + 'static + Clone + Send + Sync,
    FEdit: Fn(String, MetadataUpdate) + 'static + Clone + Send + Sync,
{
    let (pending_action, set_pending_action) = signal(None::<PendingAction>);

    let sorted_files = move || {
        let mut list = files.get();
        sort_for_display(&mut list);
        list
    };

    let open_delete_modal = move |filename: String| {
        set_pending_action.set(Some(PendingAction::delete(filename)));
    };
    let open_title_modal = move |filename: String| {
        set_pending_action.set(Some(PendingAction::edit_title(filename)));
    };
    let close_modal = move || set_pending_action.set(None);

    // 確定時はハンドラを呼んでからスロットを空にする。
    // リストの再取得はハンドラ側の責務
    let confirm_delete = {
        let on_delete = on_delete.clone();
        move |filename: String| {
            on_delete(filename);
            set_pending_action.set(None);
        }
    };
    let submit_title = {
        let on_edit_metadata = on_edit_metadata.clone();
        move |filename: String, title: String| {
            on_edit_metadata(filename, MetadataUpdate::title(title));
            set_pending_action.set(None);
        }
    };

    view! {
        <Show
            when=move || !files.get().is_empty()
            fallback=|| view! { <div class="file-list-empty">"No files available"</div> }
        >
            <div class="file-list">
                <For
                    each=sorted_files
                    key=|record| record.filename.clone()
                    children={
                        let on_download = on_download.clone();
                        let on_edit_metadata = on_edit_metadata.clone();
                        move |record: FileRecord| {
                            let filename = record.filename.clone();
                            // 再取得後も行コンポーネントを作り直さずに
                            // 最新のレコードを映すためのファイル名引き
                            let row = Signal::derive({
                                let filename = filename.clone();
                                move || {
                                    files
                                        .get()
                                        .into_iter()
                                        .find(|r| r.filename == filename)
                                        .unwrap_or_else(|| FileRecord {
                                            filename: filename.clone(),
                                            ..FileRecord::default()
                                        })
                                }
                            });
                            let on_download = on_download.clone();
                            let on_edit_metadata = on_edit_metadata.clone();
                            view! {
                                <FileItem
                                    record=row
                                    on_download=on_download
                                    on_edit_metadata=on_edit_metadata
                                    open_delete_modal=open_delete_modal
                                    open_title_modal=open_title_modal
                                />
                            }
                        }
                    }
                />
            </div>
        </Show>

        {move || match pending_action.get() {
            Some(PendingAction::Delete { filename }) => {
                let confirm_delete = confirm_delete.clone();
                Some(
                    view! {
                        <DeleteModal
                            filename=filename
                            on_close=close_modal
                            on_confirm=confirm_delete
                        />
                    }
                    .into_any(),
                )
            }
            Some(PendingAction::EditTitle { filename }) => {
                let submit_title = submit_title.clone();
                Some(
                    view! {
                        <TitleModal
                            filename=filename
                            on_close=close_modal
                            on_submit=submit_title
                        />
                    }
                    .into_any(),
                )
            }
            None => None,
        }}
    }
}
