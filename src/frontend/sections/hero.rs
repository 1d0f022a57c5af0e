use leptos::prelude::*;

/// Hero banner: site title, tagline, call to action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="container">
                <h1 class="hero-title">"FolderZen"</h1>
                <p class="hero-subtitle">
                    "A scalable folder structure for modern React and Next.js projects."
                </p>
                <div class="hero-cta">
                    <a href="/docs/intro" class="btn-primary">"Get Started"</a>
                    <a href="#features" class="btn-ghost">"Why FolderZen?"</a>
                </div>
            </div>
        </header>
    }
}
