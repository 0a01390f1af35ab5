//! ファイル行コンポーネント
//!
//! 展開/折り畳みの状態と編集バッファを所有する。畳むと下書きは
//! 無条件で破棄され、保存しても行は閉じない（親の再取得に任せる）

use fileshelf_common::{EditBuffer, FileRecord, MetadataUpdate};
use leptos::prelude::*;

use crate::components::{dropdown::Dropdown, input::Input, type_badge::TypeBadge};

#[component]
pub fn FileItem<FDown, FEdit, FDel, FTitle>(
    record: Signal<FileRecord>,
    on_download: FDown,
    on_edit_metadata: FEdit,
    open_delete_modal: FDel,
    open_title_modal: FTitle,
) -> impl IntoView
where
    FDown: Fn(String) + 'static + Clone + Send + Sync,
    FEdit: Fn(String, MetadataUpdate) + 'static + Clone + Send + Sync,
    FDel: Fn(String) + 'static + Clone + Send + Sync,
    FTitle: Fn(String) + 'static + Clone + Send + Sync,
{
    let (expanded, set_expanded) = signal(false);
    let buffer = RwSignal::new(EditBuffer::default());

    // ファイル名は不変キー。ボタン類には表示タイトルではなくこれを渡す
    let filename = record.with_untracked(|r| r.filename.clone());

    let display_title = move || record.with(|r| r.display_title().to_string());

    // 展開時は種別を現在値で初期化し、折り畳んだ瞬間に下書きを全て破棄する
    let toggle_expanded = move |checked: bool| {
        if checked {
            let r = record.get_untracked();
            buffer.update(|b| b.seed(&r));
        } else {
            buffer.update(|b| b.clear());
        }
        set_expanded.set(checked);
    };

    let save_enabled = move || {
        let r = record.get();
        buffer.with(|b| b.save_enabled(&r))
    };

    let on_save = {
        let on_edit_metadata = on_edit_metadata.clone();
        move |_: web_sys::MouseEvent| {
            let r = record.get_untracked();
            // 変更が1つもなければ no-op
            if let Some(update) = buffer.with_untracked(|b| b.changed_fields(&r)) {
                on_edit_metadata(r.filename.clone(), update);
            }
        }
    };

    view! {
        <div class="file-item">
            <article class=move || {
                if expanded.get() { "file-item-header selected" } else { "file-item-header" }
            }>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || expanded.get()
                        on:change=move |ev| toggle_expanded(event_target_checked(&ev))
                    />
                    <span>
                        {move || {
                            let marker = if expanded.get() { "▼" } else { "►" };
                            format!("{marker} {}", display_title())
                        }}
                    </span>
                    {move || {
                        record
                            .with(|r| r.author.clone())
                            .map(|author| {
                                view! {
                                    <p class="file-item-author-text">{format!("by: {author}")}</p>
                                }
                            })
                    }}
                </label>
                <div class="file-buttons-group">
                    <TypeBadge file_type=Signal::derive(move || record.with(|r| r.file_type)) />
                    <button
                        type="button"
                        class="button button-primary"
                        on:click={
                            let on_download = on_download.clone();
                            let filename = filename.clone();
                            move |_| on_download(filename.clone())
                        }
                    >
                        "⬇ DOWNLOAD"
                    </button>
                    <button
                        type="button"
                        class="button button-icon button-neutral"
                        aria-label="Edit title"
                        on:click={
                            let open_title_modal = open_title_modal.clone();
                            let filename = filename.clone();
                            move |_| open_title_modal(filename.clone())
                        }
                    >
                        "…"
                    </button>
                    <button
                        type="button"
                        class="button button-icon button-danger"
                        aria-label="Delete file"
                        on:click={
                            let open_delete_modal = open_delete_modal.clone();
                            let filename = filename.clone();
                            move |_| open_delete_modal(filename.clone())
                        }
                    >
                        "✖"
                    </button>
                </div>
            </article>
            <Show when=move || expanded.get()>
                <article class="file-item-dropdown expanded">
                    <p>{format!("File Name: {filename}")}</p>
                    <Input
                        label="Title"
                        placeholder=Signal::derive(display_title)
                        value=Signal::derive(move || buffer.with(|b| b.title.clone()))
                        on_input=move |v: String| buffer.update(|b| b.title = v)
                    />
                    <Input
                        label="Author"
                        placeholder=Signal::derive(move || {
                            record.with(|r| r.author.clone().unwrap_or_default())
                        })
                        value=Signal::derive(move || buffer.with(|b| b.author.clone()))
                        on_input=move |v: String| buffer.update(|b| b.author = v)
                    />
                    <Dropdown
                        label="Type"
                        value=Signal::derive(move || buffer.with(|b| b.file_type.clone()))
                        on_change=move |v: String| buffer.update(|b| b.file_type = v)
                    />
                    <button
                        type="button"
                        class="button button-icon button-primary"
                        aria-label="Save file metadata"
                        disabled=move || !save_enabled()
                        on:click=on_save.clone()
                    >
                        "Save"
                    </button>
                </article>
            </Show>
        </div>
    }
}
