//! 教授カードコンポーネント

use leptos::prelude::*;
use profpilot_common::{generate_href, ProfessorRecord};

#[component]
pub fn ProfessorCard<FS>(
    professor: ProfessorRecord,
    student_input: ReadSignal<String>,
    on_select: FS,
    #[prop(optional)] compact: bool,
) -> impl IntoView
where
    FS: Fn(ProfessorRecord) + 'static + Clone + Send,
{
    let score = professor.score_label();
    let department = professor.department_or_empty().to_string();
    let bio = professor.bio_or_empty().to_string();
    let name = professor.name.clone();

    // 直接生成リンクは現在の入力内容を反映する
    let href = {
        let professor = professor.clone();
        move || generate_href(&professor, &student_input.get()).unwrap_or_else(|_| "/generate".to_string())
    };

    let heading = if compact {
        view! { <h4 class="professor-name">{name}</h4> }.into_any()
    } else {
        view! { <h3 class="professor-name">{name}</h3> }.into_any()
    };

    view! {
        <div class="professor-card">
            <div class="professor-header">
                {heading}
                {score.map(|s| view! {
                    <span class="match-score">
                        <span class="text-muted">"Match Score: "</span>
                        <strong>{s}</strong>
                    </span>
                })}
            </div>
            <p class="department">{department}</p>
            <p class="bio">{bio}</p>
            <div class="card-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_select = on_select.clone();
                        let professor = professor.clone();
                        move |_| on_select(professor.clone())
                    }
                >
                    "Select This Professor"
                </button>
                <a class="btn btn-secondary" href=href>
                    "Generate Email"
                </a>
            </div>
        </div>
    }
}
