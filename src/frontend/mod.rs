pub mod components;
pub mod pages;
pub mod sections;

use leptos::prelude::*;

use pages::HomePage;

/// HTML shell for the rendered site - provides the full document structure
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"FolderZen - Scalable folder structures for React & Next.js"</title>
                <meta
                    name="description"
                    content="FolderZen keeps React and Next.js codebases organized with a scalable folder structure."
                />
                <link rel="stylesheet" href="/static/site.css"/>
            </head>
            <body>
                <HomePage/>
            </body>
        </html>
    }
}

/// Renders the complete homepage document to an HTML string.
///
/// Pure and deterministic: the output depends only on the constant feature
/// list and the static chrome, so repeated calls yield identical documents.
pub fn render_homepage() -> String {
    view! { <Shell/> }.to_html()
}
