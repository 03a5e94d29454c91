//! Tag Pills Component
//!
//! Read-only row of small red tags under a project description.

use dioxus::prelude::*;

/// Properties for the TagPills component
#[derive(Clone, PartialEq, Props)]
pub struct TagPillsProps {
    pub tags: Vec<String>,
}

/// Displays a wrapped row of tags. Renders nothing for an empty list.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagPills { tags: vec!["ERP".to_string(), "PowerBI".to_string()] }
/// }
/// ```
#[component]
pub fn TagPills(props: TagPillsProps) -> Element {
    if props.tags.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "tag-pills",
            // Tags may repeat, so key by position
            for (index, tag) in props.tags.iter().enumerate() {
                span { key: "{index}", class: "pill", "{tag}" }
            }
        }
    }
}
