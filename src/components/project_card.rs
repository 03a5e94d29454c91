//! Project Card Components
//!
//! A card shows the project image; hovering scales the card up and fades in
//! an overlay with the description, tags and links.

use dioxus::prelude::*;
use portfolio_core::{HoverFlag, Project};
use portfolio_ui::{ButtonVariant, FallbackImage, LinkButton, TagPills};

/// One project in the gallery. Each card owns its own hover flag.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard { project: content.projects[0].clone() }
/// }
/// ```
#[component]
pub fn ProjectCard(project: Project) -> Element {
    let mut hover = use_signal(HoverFlag::default);
    let flag = hover();

    rsx! {
        div {
            class: if flag.is_hovered() { "project-card hovered" } else { "project-card" },
            style: "transform: scale({flag.scale()});",
            onmouseenter: move |_| hover.write().enter(),
            onmouseleave: move |_| hover.write().leave(),

            FallbackImage {
                src: project.image.clone(),
                alt: project.title.clone(),
                class: "project-card__image".to_string(),
            }

            div {
                class: "project-card__overlay",
                style: "opacity: {flag.overlay_opacity()};",

                h3 { class: "card-title", "{project.title}" }
                p { class: "project-card__description", "{project.description}" }

                TagPills { tags: project.tags.clone() }

                div { class: "project-card__links",
                    if let Some(url) = &project.demo_url {
                        LinkButton { href: url.clone(), variant: ButtonVariant::Primary, "Live Demo" }
                    }
                    if let Some(url) = &project.github_url {
                        LinkButton { href: url.clone(), variant: ButtonVariant::Secondary, "GitHub" }
                    }
                }
            }
        }
    }
}

/// Two-column grid of project cards. An empty list renders an empty grid.
#[component]
pub fn ProjectGrid(projects: Vec<Project>) -> Element {
    rsx! {
        div { class: "project-grid",
            for project in projects.iter() {
                ProjectCard { key: "{project.id}", project: project.clone() }
            }
        }
    }
}
