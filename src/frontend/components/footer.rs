use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer-brand">"🗂️ FolderZen"</p>
            <p class="footer-tagline">"Organized codebases, from day one."</p>
            <p class="copyright">"© 2026 FolderZen."</p>
        </footer>
    }
}
