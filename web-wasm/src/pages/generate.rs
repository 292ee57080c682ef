//! メール生成ページ
//!
//! マウント時にURLクエリ → localStorage → デフォルトの順で引き継ぎを解決し、
//! 選択中の教授宛のメールを生成する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use profpilot_common::{parse_query, resolve, ApiError, ProfessorRecord, Resolution};

use crate::api;
use crate::components::{email_panel::EmailPanel, header::Header, loading::Spinner};
use crate::lifetime::ViewLifetime;
use crate::routes::{current_location, Page};
use crate::storage::handoff_store;

fn resolve_on_mount() -> Resolution {
    let (_, search) = current_location();
    let resolution = resolve(&parse_query(&search), &handoff_store());
    for issue in &resolution.issues {
        gloo::console::warn!(format!("Handoff: {}", issue));
    }
    gloo::console::log!(format!(
        "Handoff resolved from {} ({})",
        resolution.source.as_str(),
        resolution.handoff.professor.name
    ));
    resolution
}

#[component]
pub fn GeneratePage() -> impl IntoView {
    let lifetime = ViewLifetime::attach();
    let resolution = resolve_on_mount();

    let professor = StoredValue::new(resolution.handoff.professor.clone());
    let (student_input, set_student_input) = signal(resolution.handoff.student_input.clone());
    let (email, set_email) = signal(String::new());
    let (is_generating, set_is_generating) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let generate = move |_: ()| {
        if is_generating.get_untracked() {
            return;
        }
        let text = student_input.get_untracked();
        let target = professor.get_value();

        set_is_generating.set(true);
        set_error.set(None);

        spawn_local(async move {
            let abort = lifetime.signal();
            let result = api::generate_email(&text, &target, abort.as_ref()).await;
            if lifetime.is_cancelled() {
                return;
            }
            match result {
                Ok(body) => set_email.set(body),
                Err(ApiError::Cancelled) => {}
                Err(e) => {
                    gloo::console::error!(format!("Error generating email: {}", e));
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_generating.set(false);
        });
    };

    view! {
        <div class="page">
            <Header current=Page::Generate />
            <main class="container narrow">
                <h1>"Generate Cold Email"</h1>

                <ProfessorSummary professor=professor.get_value() />

                <textarea
                    class="student-input"
                    rows="4"
                    placeholder="Describe your research interests..."
                    prop:value=move || student_input.get()
                    on:input=move |ev| set_student_input.set(event_target_value(&ev))
                />

                <button
                    class="btn btn-primary"
                    disabled=move || is_generating.get()
                    on:click=move |_| generate(())
                >
                    <Show when=move || is_generating.get() fallback=|| "Generate Email">
                        <Spinner label="Generating..." />
                    </Show>
                </button>

                {move || error.get().map(|e| view! { <p class="error-text">{e}</p> })}

                <EmailPanel email=email is_generating=is_generating on_regenerate=generate />
            </main>
        </div>
    }
}

#[component]
fn ProfessorSummary(professor: ProfessorRecord) -> impl IntoView {
    let publications = professor.recent_publications.clone();

    view! {
        <div class="professor-summary card">
            <h2>{professor.name.clone()}</h2>
            {professor.title.clone().map(|t| view! { <p class="title">{t}</p> })}
            <p class="department">{professor.department_or_empty().to_string()}</p>
            <p class="bio">{professor.bio_or_empty().to_string()}</p>
            {professor.score_label().map(|s| view! { <p class="match-score">"Match Score: "{s}</p> })}
            {(!publications.is_empty()).then(|| view! {
                <ul class="publications">
                    {publications.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
                </ul>
            })}
        </div>
    }
}
