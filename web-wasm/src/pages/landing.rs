//! トップページ

use leptos::prelude::*;
use crate::components::header::Header;
use crate::routes::Page;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page">
            <Header current=Page::Landing />
            <main class="hero">
                <h1>"Find the right research mentor"</h1>
                <p class="text-muted">
                    "Describe your research interests, discover professors whose work aligns with yours, "
                    "and draft a personalized outreach email in seconds."
                </p>
                <div class="hero-actions">
                    <a href=Page::Match.href() class="btn btn-primary">"Find Matches"</a>
                    <a href=Page::Generate.href() class="btn btn-secondary">"Generate Email"</a>
                </div>
                <ol class="steps">
                    <li>"Share your interests and background."</li>
                    <li>"Review ranked professor matches."</li>
                    <li>"Generate and copy a tailored email."</li>
                </ol>
            </main>
        </div>
    }
}
