//! 削除確認モーダル
//!
//! 開いている間だけツリーに存在する。Escape と背景クリックで閉じ、
//! フォーム送信（Enter含む）で確定する

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn DeleteModal<FClose, FConfirm>(
    filename: String,
    on_close: FClose,
    on_confirm: FConfirm,
) -> impl IntoView
where
    FClose: Fn() + 'static + Clone + Send + Sync,
    FConfirm: Fn(String) + 'static + Clone + Send + Sync,
{
    // マウント中だけ document 全体の Escape を拾う
    let escape_handle = window_event_listener(ev::keydown, {
        let on_close = on_close.clone();
        move |ev| {
            if ev.key() == "Escape" {
                on_close();
            }
        }
    });
    on_cleanup(move || escape_handle.remove());

    // 背景そのものをクリックしたときだけ閉じる（内側のクリックでは閉じない）
    let close_on_backdrop = {
        let on_close = on_close.clone();
        move |ev: web_sys::MouseEvent| {
            if ev.target() == ev.current_target() {
                on_close();
            }
        }
    };

    let submit = {
        let on_confirm = on_confirm.clone();
        let filename = filename.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            on_confirm(filename.clone());
        }
    };

    view! {
        <div role="dialog" class="modal-backdrop" on:click=close_on_backdrop>
            <div class="modal-content">
                <p class="modal-filename">{filename.clone()}</p>
                <form on:submit=submit>
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
                        <button type="submit" class="button button-danger modal-button">
                            "Confirm"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// キュー済みのDOM更新を流す
    async fn tick() {
        for _ in 0..2 {
            let promise = js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL);
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        }
    }

    fn dispatch_keydown(key: &str) {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        let ev =
            web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&ev).unwrap();
    }

    fn click(selector: &str) {
        let el: web_sys::HtmlElement = document()
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        el.click();
    }

    #[wasm_bindgen_test]
    async fn test_escape_key_closes_delete_modal() {
        let closes = Arc::new(AtomicUsize::new(0));
        let on_close = {
            let closes = Arc::clone(&closes);
            move || {
                closes.fetch_add(1, Ordering::SeqCst);
            }
        };
        let handle = leptos::mount::mount_to(document().body().unwrap(), move || {
            view! {
                <DeleteModal
                    filename="document.txt".to_string()
                    on_close=on_close
                    on_confirm=move |_filename: String| {}
                />
            }
        });
        tick().await;

        dispatch_keydown("Enter");
        assert_eq!(closes.load(Ordering::SeqCst), 0);

        dispatch_keydown("Escape");
        assert_eq!(closes.load(Ordering::SeqCst), 1);

        drop(handle);
    }

    #[wasm_bindgen_test]
    async fn test_backdrop_click_closes_but_content_click_does_not() {
        let closes = Arc::new(AtomicUsize::new(0));
        let on_close = {
            let closes = Arc::clone(&closes);
            move || {
                closes.fetch_add(1, Ordering::SeqCst);
            }
        };
        let handle = leptos::mount::mount_to(document().body().unwrap(), move || {
            view! {
                <DeleteModal
                    filename="document.txt".to_string()
                    on_close=on_close
                    on_confirm=move |_filename: String| {}
                />
            }
        });
        tick().await;

        click(".modal-content");
        assert_eq!(closes.load(Ordering::SeqCst), 0);

        click(".modal-backdrop");
        assert_eq!(closes.load(Ordering::SeqCst), 1);

        drop(handle);
    }

    #[wasm_bindgen_test]
    async fn test_form_submit_confirms_with_filename() {
        let confirmed = Arc::new(Mutex::new(Vec::<String>::new()));
        let on_confirm = {
            let confirmed = Arc::clone(&confirmed);
            move |filename: String| confirmed.lock().unwrap().push(filename)
        };
        let handle = leptos::mount::mount_to(document().body().unwrap(), move || {
            view! {
                <DeleteModal
                    filename="doomed.txt".to_string()
                    on_close=move || {}
                    on_confirm=on_confirm
                />
            }
        });
        tick().await;

        let form: web_sys::HtmlFormElement = document()
            .query_selector(".modal-content form")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        form.request_submit().unwrap();
        assert_eq!(confirmed.lock().unwrap().as_slice(), ["doomed.txt"]);

        drop(handle);
    }
}
