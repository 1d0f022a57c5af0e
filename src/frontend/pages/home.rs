use leptos::prelude::*;

use crate::frontend::components::{Footer, Nav};
use crate::frontend::sections::{Hero, HomepageFeatures};

/// The documentation site's homepage: chrome around the features block.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Nav/>
        <main>
            <Hero/>
            <HomepageFeatures/>
        </main>
        <Footer/>
    }
}
