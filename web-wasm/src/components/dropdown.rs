//! 種別選択ドロップダウン

use fileshelf_common::FileType;
use leptos::prelude::*;

#[component]
pub fn Dropdown<F>(label: &'static str, value: Signal<String>, on_change: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <div class="input-group">
            <select
                id=label
                class="input dropdown"
                prop:value=move || value.get()
                on:change=move |ev| on_change(event_target_value(&ev))
            >
                // 空の値は「未変更」を意味する
                <option value=""></option>
                {FileType::ALL
                    .into_iter()
                    .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                    .collect_view()}
            </select>
            <label for=label class="input-label">{label}</label>
        </div>
    }
}
