use dioxus::prelude::*;
use portfolio_core::Section;
use portfolio_ui::SectionHeading;

use crate::components::{ContactForm, PageSection};

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        PageSection { section: Section::Contact, class: "centered-section".to_string(),
            div { class: "section-body wide",
                SectionHeading { title: "Get in Touch".to_string(), centered: true }
                ContactForm {}
            }
        }
    }
}
