use leptos::prelude::*;

/// Semantic level for the [`Heading`] component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

/// Generic heading primitive: renders its children under the requested
/// semantic level.
#[component]
pub fn Heading(level: HeadingLevel, children: Children) -> impl IntoView {
    match level {
        HeadingLevel::H1 => view! { <h1>{children()}</h1> }.into_any(),
        HeadingLevel::H2 => view! { <h2>{children()}</h2> }.into_any(),
        HeadingLevel::H3 => view! { <h3>{children()}</h3> }.into_any(),
        HeadingLevel::H4 => view! { <h4>{children()}</h4> }.into_any(),
        HeadingLevel::H5 => view! { <h5>{children()}</h5> }.into_any(),
        HeadingLevel::H6 => view! { <h6>{children()}</h6> }.into_any(),
    }
}
