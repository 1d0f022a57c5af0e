use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <a href="/" class="nav-brand">
                <span class="nav-logo">"🗂️"</span>
                <span class="nav-title">"FolderZen"</span>
            </a>
            <div class="nav-links">
                <a href="/docs/intro">"Docs"</a>
                <a href="#features">"Features"</a>
            </div>
        </nav>
    }
}
