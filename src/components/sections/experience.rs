use dioxus::prelude::*;
use portfolio_core::{Experience, Section};
use portfolio_ui::SectionHeading;

use crate::components::PageSection;
use crate::context::use_page_config;

#[component]
pub fn ExperienceSection() -> Element {
    let config = use_page_config();

    rsx! {
        PageSection { section: Section::Experience, class: "centered-section".to_string(),
            div { class: "section-body",
                SectionHeading { title: "Professional Experience".to_string() }
                div { class: "stack",
                    for (index, entry) in config.content.experience.iter().enumerate() {
                        ExperienceCard { key: "{index}", entry: entry.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ExperienceCard(entry: Experience) -> Element {
    rsx! {
        div { class: "info-card",
            h3 { class: "card-title", "{entry.role}" }
            p { class: "info-card__subtitle", "{entry.organization}" }
            p { class: "info-card__period", "{entry.period}" }
            ul { class: "bullet-list",
                for (index, highlight) in entry.highlights.iter().enumerate() {
                    li { key: "{index}", "{highlight}" }
                }
            }
        }
    }
}
