//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::header::Header;
use crate::pages::{generate::GeneratePage, landing::LandingPage, matches::MatchPage};
use crate::routes::{current_location, Page};

/// 現在のパスに応じてページを表示
#[component]
pub fn App() -> impl IntoView {
    let (path, _) = current_location();

    match Page::from_path(&path) {
        Page::Landing => view! { <LandingPage /> }.into_any(),
        Page::Match => view! { <MatchPage /> }.into_any(),
        Page::Generate => view! { <GeneratePage /> }.into_any(),
        Page::NotFound => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <Header current=Page::NotFound />
            <main class="container">
                <h1>"Page not found"</h1>
                <a href=Page::Landing.href() class="btn btn-primary">"Back to home"</a>
            </main>
        </div>
    }
}
