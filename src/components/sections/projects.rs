use dioxus::prelude::*;
use portfolio_core::Section;
use portfolio_ui::SectionHeading;

use crate::components::{PageSection, ProjectGrid};
use crate::context::use_page_config;

#[component]
pub fn ProjectsSection() -> Element {
    let config = use_page_config();

    rsx! {
        PageSection { section: Section::Projects,
            SectionHeading { title: "Projects".to_string(), centered: true }
            ProjectGrid { projects: config.content.projects.clone() }
        }
    }
}
