use dioxus::prelude::*;
use portfolio_core::Section;
use portfolio_ui::SectionHeading;

use crate::components::PageSection;
use crate::context::use_page_config;

#[component]
pub fn AboutSection() -> Element {
    let config = use_page_config();

    rsx! {
        PageSection { section: Section::About, class: "centered-section".to_string(),
            div { class: "section-body",
                SectionHeading { title: "About Me".to_string() }
                div { class: "about-text",
                    for (index, paragraph) in config.content.about.iter().enumerate() {
                        p { key: "{index}", "{paragraph}" }
                    }
                }
            }
        }
    }
}
