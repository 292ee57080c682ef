//! マッチ検索ページ
//!
//! 研究内容を送信して教授候補を表示し、選択を localStorage に保存する。

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use profpilot_common::{partition_matches, ApiError, Handoff, ProfessorRecord};

use crate::api;
use crate::components::{
    header::Header, loading::Spinner, professor_card::ProfessorCard,
    selection_dialog::SelectionDialog,
};
use crate::lifetime::ViewLifetime;
use crate::routes::Page;
use crate::storage::handoff_store;

#[component]
pub fn MatchPage() -> impl IntoView {
    let lifetime = ViewLifetime::attach();

    let (input, set_input) = signal(String::new());
    let (matches, set_matches) = signal(None::<Vec<ProfessorRecord>>);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (selected, set_selected) = signal(None::<ProfessorRecord>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        if is_loading.get_untracked() || text.trim().is_empty() {
            return;
        }

        set_is_loading.set(true);
        set_matches.set(None);
        set_error.set(None);

        spawn_local(async move {
            let abort = lifetime.signal();
            let result = api::match_professors(&text, abort.as_ref()).await;
            if lifetime.is_cancelled() {
                return;
            }
            match result {
                Ok(list) => set_matches.set(Some(list)),
                Err(ApiError::Cancelled) => {}
                Err(e) => {
                    gloo::console::error!(format!("Error fetching matches: {}", e));
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    let on_select = move |professor: ProfessorRecord| {
        let handoff = Handoff::new(professor.clone(), input.get_untracked());
        if let Err(e) = handoff_store().save(&handoff) {
            gloo::console::error!(format!("Error saving selection: {}", e));
        }
        set_selected.set(Some(professor));
    };

    let on_dismiss = move |_: ()| set_selected.set(None);

    let results = move || {
        matches.get().map(|all| {
            let (top, additional) = partition_matches(&all);
            let count = all.len();

            let top_cards = top
                .iter()
                .cloned()
                .map(|professor| {
                    view! { <ProfessorCard professor=professor student_input=input on_select=on_select /> }
                })
                .collect_view();

            let additional_section = (!additional.is_empty()).then(|| {
                let cards = additional
                    .iter()
                    .cloned()
                    .map(|professor| {
                        view! { <ProfessorCard professor=professor student_input=input on_select=on_select compact=true /> }
                    })
                    .collect_view();
                view! {
                    <section class="match-section">
                        <h3>"Additional Matches"</h3>
                        {cards}
                    </section>
                }
            });

            view! {
                <div class="results">
                    <div class="results-header">
                        <h2>"Your Matches"</h2>
                        <span class="text-muted">{format!("{} professors found", count)}</span>
                    </div>
                    <section class="match-section">
                        <h3>"Top Matches"</h3>
                        {top_cards}
                    </section>
                    {additional_section}
                </div>
            }
        })
    };

    view! {
        <div class="page">
            <Header current=Page::Match />
            <main class="container">
                <div class="page-title">
                    <h1>"Find Your Research Match"</h1>
                    <p class="text-muted">
                        "Share your research interests and we'll find professors who align with your work"
                    </p>
                </div>

                <form class="card" on:submit=on_submit>
                    <label for="research-input">"Research Interests & Background"</label>
                    <textarea
                        id="research-input"
                        rows="6"
                        required=true
                        placeholder="Describe your research interests, background, goals, and what you're looking for in a research mentor. Be specific about your field, techniques, and areas of focus..."
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || is_loading.get() || input.with(|t| t.trim().is_empty())
                    >
                        <Show when=move || is_loading.get() fallback=|| "Find Professor Matches">
                            <Spinner label="Finding Matches..." />
                        </Show>
                    </button>
                </form>

                {move || error.get().map(|e| view! { <p class="error-text">{e}</p> })}

                {results}

                <SelectionDialog selected=selected on_dismiss=on_dismiss />
            </main>
        </div>
    }
}
