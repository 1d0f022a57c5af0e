use leptos::prelude::*;

use crate::common::{class_names, FeatureError};
use crate::frontend::components::FeatureCard;
use crate::models::{validate_features, FeatureItem};

/// The fixed feature list shown on the homepage. Order here is display
/// order and must not change between renders.
pub const FEATURES: [FeatureItem; 3] = [
    FeatureItem::new(
        "Scalable Architecture",
        "FolderZen provides a scalable folder structure that grows with your \
         project, keeping your codebase organized as it expands.",
    ),
    FeatureItem::new(
        "Clear Separation of Concerns",
        "Each layer has a specific responsibility, making it easier to \
         understand where code should be placed and how different parts of \
         the application interact.",
    ),
    FeatureItem::new(
        "Optimized for Next.js & React",
        "Designed specifically for modern React and Next.js applications, \
         with best practices for component organization and state management.",
    ),
];

/// Lays any feature list out as a grid of [`FeatureCard`]s, preserving list
/// order. An empty list yields an empty section.
#[component]
pub fn FeatureGrid(
    features: Vec<FeatureItem>,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <section class=class_names([Some("features"), class])>
            <div class="container">
                <div class="row">
                    {features
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// The homepage features section, rendered from the constant list.
#[component]
pub fn HomepageFeatures() -> impl IntoView {
    view! { <FeatureGrid features=FEATURES.to_vec()/> }
}

/// Renders a standalone features grid for embedding by a host page.
///
/// Supplied lists are validated before rendering; the built-in homepage
/// section bypasses this path entirely.
pub fn render_features(features: &[FeatureItem]) -> Result<String, FeatureError> {
    validate_features(features)?;
    let features = features.to_vec();
    Ok(view! { <FeatureGrid features=features/> }.to_html())
}
