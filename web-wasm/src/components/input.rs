//! ラベル付きテキスト入力

use leptos::prelude::*;

#[component]
pub fn Input<F>(
    label: &'static str,
    placeholder: Signal<String>,
    value: Signal<String>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <div class="input-group">
            <input
                type="text"
                id=label
                class="input"
                placeholder=move || placeholder.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            <label for=label class="input-label">{label}</label>
        </div>
    }
}
