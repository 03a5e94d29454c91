//! Hero section: name, cycling subtitle and contact details.

use dioxus::prelude::*;
use portfolio_core::Section;

use crate::components::{AnimatedSubtitle, PageSection};
use crate::context::use_page_config;

#[component]
pub fn HeroSection() -> Element {
    let config = use_page_config();
    let profile = &config.content.profile;

    rsx! {
        PageSection { section: Section::Home, class: "hero".to_string(),
            div { class: "hero__content",
                h1 { class: "hero__name", "{profile.name}" }

                AnimatedSubtitle { captions: config.content.captions.clone() }

                div { class: "hero__details",
                    p { "{profile.email}" }
                    p { "{profile.location}" }
                    if let Some(url) = &profile.linkedin_url {
                        a {
                            class: "hero__link",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "LinkedIn"
                        }
                    }
                }
            }
        }
    }
}
