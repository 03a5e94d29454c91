//! Education section: one card per degree.

use dioxus::prelude::*;
use portfolio_core::{Education, Section};
use portfolio_ui::SectionHeading;

use crate::components::PageSection;
use crate::context::use_page_config;

#[component]
pub fn EducationSection() -> Element {
    let config = use_page_config();

    rsx! {
        PageSection { section: Section::Education, class: "centered-section".to_string(),
            div { class: "section-body",
                SectionHeading { title: "Education".to_string() }
                for entry in config.content.education.iter() {
                    EducationCard { key: "{entry.school}", entry: entry.clone() }
                }
            }
        }
    }
}

#[component]
fn EducationCard(entry: Education) -> Element {
    let awards = entry.awards.join(", ");

    rsx! {
        div { class: "info-card",
            h3 { class: "card-title", "{entry.school}" }
            p { class: "info-card__subtitle", "{entry.degree}" }
            p { "Graduation: {entry.graduation}" }
            if let Some(gpa) = &entry.gpa {
                p { "Cumulative GPA: {gpa}" }
            }
            if !awards.is_empty() {
                p { "Awards: {awards}" }
            }
            if !entry.coursework.is_empty() {
                h4 { class: "info-card__heading", "Relevant Coursework:" }
                ul { class: "bullet-grid",
                    for course in entry.coursework.iter() {
                        li { key: "{course}", "{course}" }
                    }
                }
            }
        }
    }
}
