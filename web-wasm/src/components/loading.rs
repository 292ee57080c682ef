//! 読み込み中表示

use leptos::prelude::*;

#[component]
pub fn Spinner(label: &'static str) -> impl IntoView {
    view! {
        <span class="spinner-wrap">
            <span class="spinner" aria-hidden="true"></span>
            {label}
        </span>
    }
}
