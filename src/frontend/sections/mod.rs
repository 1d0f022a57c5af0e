//! Homepage sections

mod features;
mod hero;

pub use features::{render_features, FeatureGrid, HomepageFeatures, FEATURES};
pub use hero::Hero;
