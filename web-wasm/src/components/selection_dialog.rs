//! 教授選択後の確認ダイアログ

use leptos::prelude::*;
use profpilot_common::ProfessorRecord;
use crate::routes::Page;

#[component]
pub fn SelectionDialog<FD>(
    selected: ReadSignal<Option<ProfessorRecord>>,
    on_dismiss: FD,
) -> impl IntoView
where
    FD: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || selected.with(|s| s.is_some())>
            <div class="modal-backdrop">
                <div class="modal">
                    <h3>"Professor Selected!"</h3>
                    <p>
                        "You've selected "
                        <strong>{move || selected.with(|s| s.as_ref().map(|p| p.name.clone()).unwrap_or_default())}</strong>
                        ". Ready to generate a personalized email?"
                    </p>
                    <div class="modal-actions">
                        <a href=Page::Generate.href() class="btn btn-primary">"Generate Email"</a>
                        <button
                            class="btn btn-tertiary"
                            on:click={
                                let on_dismiss = on_dismiss.clone();
                                move |_| on_dismiss(())
                            }
                        >
                            "Keep Looking"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
