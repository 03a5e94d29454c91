//! Portfolio page - the whole site on one scrolling page.
//!
//! Layers, back to front: the optional particle background, then the fixed
//! navigation header, the seven sections, and the footer. The page owns the
//! active-section state; every scroll of the page container re-measures the
//! sections and updates it. Measurements finish out of order, so each one
//! carries a ticket and only results newer than the last applied one count.

use std::rc::Rc;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use portfolio_core::{MeasureSequence, ScrollTracker, Section, SectionBounds};

use crate::components::sections::{
    AboutSection, ContactSection, EducationSection, ExperienceSection, HeroSection,
    ProjectsSection, SkillsSection,
};
use crate::components::{NavHeader, ParticleBackground, SectionAnchors};
use crate::context::{use_page_config, Background};

/// Measure each section's client rectangle, in document order.
///
/// Sections that are not mounted yet, or whose rectangle cannot be read,
/// are reported without bounds.
async fn measure_sections(
    handles: Vec<(Section, Option<Rc<MountedData>>)>,
) -> Vec<(Section, Option<SectionBounds>)> {
    let mut measurements = Vec::with_capacity(handles.len());
    for (section, handle) in handles {
        let bounds = match handle {
            Some(handle) => match handle.get_client_rect().await {
                Ok(rect) => Some(SectionBounds::new(rect.min_y(), rect.max_y())),
                Err(e) => {
                    tracing::debug!(%section, error = ?e, "Could not measure section");
                    None
                }
            },
            None => None,
        };
        measurements.push((section, bounds));
    }
    measurements
}

/// Portfolio page component.
#[component]
pub fn Portfolio() -> Element {
    let config = use_page_config();
    let mut tracker = use_signal(ScrollTracker::new);
    let anchors = use_signal(SectionAnchors::default);

    // Sections register their elements here on mount
    use_context_provider(|| anchors);

    // Never read during render, so writes do not re-render the page
    let mut sequence = use_signal(MeasureSequence::default);

    // No debouncing: every scroll event re-evaluates the active section
    let on_scroll = move |_: ScrollEvent| {
        let handles = anchors.peek().snapshot();
        let ticket = sequence.write().issue();
        spawn(async move {
            let measurements = measure_sections(handles).await;
            if !sequence.write().accept(ticket) {
                tracing::trace!(ticket, "Dropping stale section measurement");
                return;
            }
            let mut next = *tracker.peek();
            if next.observe(measurements) {
                tracing::debug!(active = %next.active(), "Navigation highlight moved");
                tracker.set(next);
            }
        });
    };

    let on_navigate = move |section: Section| {
        let handle = anchors.peek().get(section);
        match handle {
            Some(handle) => {
                spawn(async move {
                    if let Err(e) = handle.scroll_to(ScrollBehavior::Smooth).await {
                        tracing::warn!(%section, error = ?e, "Failed to scroll to section");
                    }
                });
            }
            None => tracing::warn!(%section, "Section not mounted, cannot scroll to it"),
        }
    };

    let content = &config.content;

    rsx! {
        div { class: "portfolio", onscroll: on_scroll,
            if let Background::Particles { seed } = config.background {
                ParticleBackground { seed, orbit_labels: content.orbit_skills.clone() }
            }

            div { class: "page-layer",
                NavHeader {
                    name: content.profile.name.clone(),
                    active: tracker.read().active(),
                    on_navigate,
                }

                main {
                    HeroSection {}
                    AboutSection {}
                    EducationSection {}
                    ExperienceSection {}
                    ProjectsSection {}
                    SkillsSection {}
                    ContactSection {}
                }

                footer { class: "page-footer",
                    p { "{content.profile.footer}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PageConfig;
    use portfolio_core::{Content, PARTICLE_COUNT};

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn provide_config(background: Background) {
        use_context_provider(|| {
            Rc::new(PageConfig {
                content: Content::builtin(),
                background,
            })
        });
    }

    fn PageWithoutBackground() -> Element {
        provide_config(Background::Disabled);
        rsx! { Portfolio {} }
    }

    fn PageWithParticles() -> Element {
        provide_config(Background::Particles { seed: Some(7) });
        rsx! { Portfolio {} }
    }

    #[tokio::test]
    async fn page_renders_without_background() {
        let html = render(PageWithoutBackground);

        assert!(!html.contains("particle-scene"), "{html}");
        assert!(html.contains("nav-header"), "{html}");
        assert_eq!(html.matches("<section").count(), Section::ALL.len(), "{html}");
        for section in Section::ALL {
            assert!(html.contains(&format!("id=\"{}\"", section.id())), "missing {section}");
        }
        assert!(html.contains("page-footer"), "{html}");
    }

    #[tokio::test]
    async fn particle_background_renders_every_point() {
        let html = render(PageWithParticles);

        assert!(html.contains("particle-scene"), "{html}");
        assert_eq!(html.matches("class=\"particle\"").count(), PARTICLE_COUNT);
        assert_eq!(html.matches("<section").count(), Section::ALL.len());
    }

    #[tokio::test]
    async fn home_is_highlighted_before_any_scroll() {
        let html = render(PageWithoutBackground);

        assert_eq!(html.matches("nav-link active").count(), 1, "{html}");
        // Home is the first link, so the active one comes before any other
        let active = html.find("class=\"nav-link active\"");
        let inactive = html.find("class=\"nav-link\"");
        assert!(active.is_some() && active < inactive, "{html}");
    }
}
