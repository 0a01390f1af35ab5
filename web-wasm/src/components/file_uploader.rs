//! アップローダコンポーネント
//!
//! 単一ファイルのアップロードと進捗表示。自分が idle の間は、
//! 親から渡された操作結果（削除・メタデータ編集）のバナーを代わりに出す

use fileshelf_common::{OperationStatus, UploadState, UploadStatus};
use gloo::timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

/// 成否確定後に進捗バーを隠すまでの時間
const PROGRESS_HIDE_DELAY_MS: u32 = 1_000;

#[component]
pub fn FileUploader<FDone, FClear>(
    external_status: ReadSignal<Option<OperationStatus>>,
    on_upload_complete: FDone,
    on_clear_external_status: FClear,
) -> impl IntoView
where
    FDone: Fn() + 'static + Clone + Send + Sync,
    FClear: Fn() + 'static + Clone + Send + Sync,
{
    let state = RwSignal::new(UploadState::default());
    let (show_progress, set_show_progress) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();
    let hide_timer = StoredValue::new_local(None::<Timeout>);

    // 成否が確定したら一定時間後に進捗バーだけ隠す。
    // status は次の操作まで残る。新しい操作で状態が動いたら前のタイマーは破棄
    Effect::new(move |_| {
        let status = state.with(|s| s.status);
        hide_timer.update_value(|timer| {
            if let Some(timer) = timer.take() {
                timer.cancel();
            }
        });
        if matches!(status, UploadStatus::Success | UploadStatus::Error) {
            hide_timer.set_value(Some(Timeout::new(PROGRESS_HIDE_DELAY_MS, move || {
                set_show_progress.set(false);
            })));
        }
    });

    let handle_upload = {
        let on_upload_complete = on_upload_complete.clone();
        let on_clear_external_status = on_clear_external_status.clone();
        move |_: web_sys::MouseEvent| {
            // 新しいアップロードは外部ステータスを必ず消してから始める
            on_clear_external_status();

            let Some(input) = input_ref.get_untracked() else {
                return;
            };
            let file = input.files().and_then(|files| files.get(0));
            let Some(file) = file else {
                // ファイル未選択ならネットワークに出ずにエラー表示
                state.update(|s| s.fail("Please select a file"));
                return;
            };

            state.update(|s| s.begin());
            set_show_progress.set(true);

            let on_upload_complete = on_upload_complete.clone();
            spawn_local(async move {
                let result = api::upload_file(&file, move |percent| {
                    state.update(|s| s.set_progress(percent));
                })
                .await;
                match result {
                    Ok(()) => {
                        state.update(|s| s.succeed());
                        if let Some(input) = input_ref.get_untracked() {
                            input.set_value("");
                        }
                        on_upload_complete();
                    }
                    Err(e) => state.update(|s| s.fail(e.to_string())),
                }
            });
        }
    };

    let status_banner = move || {
        let s = state.get();
        match s.status {
            UploadStatus::Success => Some(
                view! { <div class="status success">"✓ SUCCESS: File uploaded!"</div> }.into_any(),
            ),
            UploadStatus::Error if !s.error_message.is_empty() => {
                let banner = OperationStatus::error(&s.error_message);
                Some(
                    view! {
                        <div class=format!("status {}", banner.class())>{banner.message.clone()}</div>
                    }
                    .into_any(),
                )
            }
            UploadStatus::Idle => external_status.get().map(|ext| {
                view! {
                    <div class=format!("status {}", ext.class())>{ext.message.clone()}</div>
                }
                .into_any()
            }),
            _ => None,
        }
    };

    view! {
        <div class="file-uploader">
            <input type="file" node_ref=input_ref />
            <button class="button button-primary upload-button" on:click=handle_upload>
                "UPLOAD"
            </button>

            <Show when=move || show_progress.get()>
                <div class="progress-bar">
                    <div class="progress-container">
                        <div
                            class="progress-fill"
                            style=move || format!("width: {}%", state.with(|s| s.progress))
                        />
                        <span class="progress-text">
                            {move || format!("{}%", state.with(|s| s.progress))}
                        </span>
                    </div>
                </div>
            </Show>

            {status_banner}
        </div>
    }
}
