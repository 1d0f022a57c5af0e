use leptos::prelude::*;

use folderzen_site::models::FeatureItem;

pub fn get_seed_feature_0() -> FeatureItem {
    FeatureItem::new(
        "Convention Driven",
        "Every module follows the same layout, so navigating an unfamiliar feature feels familiar.",
    )
}

pub fn get_seed_feature_1() -> FeatureItem {
    FeatureItem::new(
        "Refactor Friendly",
        "Moving a feature means moving one directory, not hunting imports across the tree.",
    )
}

pub fn get_seed_feature_with_icon() -> FeatureItem {
    FeatureItem::with_icon(
        "Editor Integration",
        get_seed_icon,
        "Ships with jump-to-layer shortcuts for the editors your team already uses.",
    )
}

pub fn get_seed_icon() -> AnyView {
    view! { <span class="feature-icon">"🗂️"</span> }.into_any()
}

pub fn get_seed_feature_empty_title() -> FeatureItem {
    FeatureItem::new("", "A description without a heading.")
}

pub fn get_seed_feature_blank_description() -> FeatureItem {
    FeatureItem::new("Unfinished", "   ")
}

pub fn get_seed_features() -> Vec<FeatureItem> {
    vec![
        get_seed_feature_0(),
        get_seed_feature_1(),
        get_seed_feature_with_icon(),
    ]
}
