//! ナビゲーションバー

use leptos::prelude::*;
use crate::routes::Page;

#[component]
pub fn Header(current: Page) -> impl IntoView {
    let link_class = move |page: Page| {
        if page == current {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="navbar">
            <a href=Page::Landing.href() class="brand">
                <h1>"ProfPilot"</h1>
            </a>
            <div class="nav-links">
                <a href=Page::Match.href() class=link_class(Page::Match)>"Find Matches"</a>
                <a href=Page::Generate.href() class=link_class(Page::Generate)>"Generate Email"</a>
            </div>
        </nav>
    }
}
