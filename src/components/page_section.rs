//! Scroll-addressable page section.
//!
//! Every section registers its mounted element with the page's
//! [`SectionAnchors`] so the page can measure it on scroll and scroll to it
//! from the navigation bar.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::Section;

/// Mounted element handle for each section, indexed in document order.
#[derive(Clone, Default)]
pub struct SectionAnchors {
    handles: [Option<Rc<MountedData>>; Section::ALL.len()],
}

impl SectionAnchors {
    pub fn set(&mut self, section: Section, handle: Rc<MountedData>) {
        self.handles[section.index()] = Some(handle);
    }

    pub fn get(&self, section: Section) -> Option<Rc<MountedData>> {
        self.handles[section.index()].clone()
    }

    /// Handles paired with their section, in document order.
    pub fn snapshot(&self) -> Vec<(Section, Option<Rc<MountedData>>)> {
        Section::ALL
            .iter()
            .map(|section| (*section, self.get(*section)))
            .collect()
    }
}

/// Hook to access the section anchors provided by the page.
pub fn use_section_anchors() -> Signal<SectionAnchors> {
    use_context::<Signal<SectionAnchors>>()
}

#[component]
pub fn PageSection(
    section: Section,
    /// Extra layout classes
    #[props(default)]
    class: String,
    children: Element,
) -> Element {
    let mut anchors = use_section_anchors();

    rsx! {
        section {
            id: section.id(),
            class: "page-section {class}",
            onmounted: move |evt| {
                tracing::trace!(%section, "Section mounted");
                anchors.write().set(section, evt.data());
            },
            {children}
        }
    }
}
