//! 生成メール表示・コピー・再生成

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard::copy_text;

/// 「コピーしました」表示を戻すまでの時間
const COPIED_RESET_MS: u32 = 2_000;

#[component]
pub fn EmailPanel<FR>(
    email: ReadSignal<String>,
    is_generating: ReadSignal<bool>,
    on_regenerate: FR,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let (copied, set_copied) = signal(false);

    let on_copy = move |_| {
        let text = email.get_untracked();
        spawn_local(async move {
            match copy_text(&text).await {
                Ok(()) => {
                    set_copied.set(true);
                    Timeout::new(COPIED_RESET_MS, move || {
                        let _ = set_copied.try_set(false);
                    })
                    .forget();
                }
                Err(e) => gloo::console::error!(e),
            }
        });
    };

    view! {
        <Show when=move || email.with(|e| !e.is_empty())>
            <div class="email-panel">
                <div class="email-header">
                    <h2>"Generated Email"</h2>
                    <div class="email-actions">
                        <button class="btn btn-secondary btn-small" on:click=on_copy>
                            {move || if copied.get() { "Copied!" } else { "Copy" }}
                        </button>
                        <button
                            class="btn btn-tertiary btn-small"
                            disabled=move || is_generating.get()
                            on:click={
                                let on_regenerate = on_regenerate.clone();
                                move |_| on_regenerate(())
                            }
                        >
                            "Regenerate"
                        </button>
                    </div>
                </div>
                <div class="email-body">{move || email.get()}</div>
            </div>
        </Show>
    }
}
