//! タイトル編集モーダル
//!
//! 入力欄はモーダル自身が持つ。開くたびにコンポーネントが作り直されるので
//! 前回の下書きが残ることはない。トリム後に空なら送信しない

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn TitleModal<FClose, FSubmit>(
    filename: String,
    on_close: FClose,
    on_submit: FSubmit,
) -> impl IntoView
where
    FClose: Fn() + 'static + Clone + Send + Sync,
    FSubmit: Fn(String, String) + 'static + Clone + Send + Sync,
{
    let (title, set_title) = signal(String::new());

    let escape_handle = window_event_listener(ev::keydown, {
        let on_close = on_close.clone();
        move |ev| {
            if ev.key() == "Escape" {
                on_close();
            }
        }
    });
    on_cleanup(move || escape_handle.remove());

    let close_on_backdrop = {
        let on_close = on_close.clone();
        move |ev: web_sys::MouseEvent| {
            if ev.target() == ev.current_target() {
                on_close();
            }
        }
    };

    let submit = {
        let on_submit = on_submit.clone();
        let filename = filename.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let trimmed = title.get_untracked().trim().to_string();
            if !trimmed.is_empty() {
                on_submit(filename.clone(), trimmed);
            }
        }
    };

    view! {
        <div role="dialog" class="modal-backdrop" on:click=close_on_backdrop>
            <div class="modal-content">
                <h3 class="modal-title">"Edit File Metadata"</h3>
                <p class="modal-filename">{filename.clone()}</p>
                <form on:submit=submit>
                    <input
                        type="text"
                        class="modal-input"
                        placeholder="Title"
                        autofocus=true
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <div class="modal-buttons">
                        <button
                            type="button"
                            class="button button-neutral modal-button"
                            on:click={
                                let on_close = on_close.clone();
                                move |_| on_close()
                            }
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="button button-primary modal-button">
                            "Confirm"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
