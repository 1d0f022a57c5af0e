use leptos::prelude::*;

use crate::common::class_names;
use crate::frontend::components::{Heading, HeadingLevel};
use crate::models::FeatureItem;

/// One column of the features grid: optional icon, centered title, body text.
#[component]
pub fn FeatureCard(feature: FeatureItem) -> impl IntoView {
    view! {
        <div class=class_names([Some("col"), Some("col--4")])>
            {feature
                .icon
                .map(|icon| view! { <div class="text--center">{icon()}</div> })}
            <div class="text--center padding-horiz--md">
                <Heading level=HeadingLevel::H3>{feature.title}</Heading>
                <p>{feature.description}</p>
            </div>
        </div>
    }
}
