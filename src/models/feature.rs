use leptos::prelude::AnyView;

use crate::common::FeatureError;

/// Produces the inline icon fragment for a feature block.
pub type IconRender = fn() -> AnyView;

/// One marketing feature shown on the homepage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureItem {
    pub title: &'static str,
    pub icon: Option<IconRender>,
    pub description: &'static str,
}

impl FeatureItem {
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            icon: None,
            description,
        }
    }

    pub const fn with_icon(
        title: &'static str,
        icon: IconRender,
        description: &'static str,
    ) -> Self {
        Self {
            title,
            icon: Some(icon),
            description,
        }
    }
}

/// Checks that every supplied feature carries a non-empty title and
/// description. The built-in homepage list never goes through this; it only
/// guards lists handed in by a host page.
pub fn validate_features(features: &[FeatureItem]) -> Result<(), FeatureError> {
    for (index, feature) in features.iter().enumerate() {
        if feature.title.trim().is_empty() {
            return Err(FeatureError::EmptyTitle(index));
        }
        if feature.description.trim().is_empty() {
            return Err(FeatureError::EmptyDescription(index));
        }
    }
    Ok(())
}
