//! Technical skills: a grid of skill-bar columns and a plain list of
//! additional skills.

use dioxus::prelude::*;
use portfolio_core::Section;
use portfolio_ui::{SectionHeading, SkillColumn};

use crate::components::PageSection;
use crate::context::use_page_config;

#[component]
pub fn SkillsSection() -> Element {
    let config = use_page_config();
    let content = &config.content;

    rsx! {
        PageSection { section: Section::Skills, class: "centered-section".to_string(),
            div { class: "section-body wide",
                SectionHeading { title: "Technical Skills".to_string(), centered: true }

                div { class: "skill-grid",
                    for group in content.skill_groups.iter() {
                        SkillColumn { key: "{group.title}", group: group.clone() }
                    }
                }

                if !content.additional_skills.is_empty() {
                    div { class: "additional-skills",
                        h3 { class: "card-title", "Additional Skills" }
                        ul { class: "bullet-grid",
                            for skill in content.additional_skills.iter() {
                                li { key: "{skill}", "{skill}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
