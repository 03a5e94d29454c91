//! Navigation Header Component
//!
//! Fixed, blurred header with the owner's name on the left and one link per
//! page section on the right. Exactly one link, the active section's, is
//! highlighted.

use dioxus::prelude::*;
use portfolio_core::Section;

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Title shown on the left
    pub name: String,
    /// Section currently spanning the reference line
    pub active: Section,
    /// Called when a link is clicked
    pub on_navigate: EventHandler<Section>,
}

/// CSS class for a navigation link.
pub fn link_class(is_active: bool) -> &'static str {
    if is_active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Navigation Header component
///
/// Links keep their `#section` href; the click is intercepted and turned
/// into a smooth scroll of the page container.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let on_navigate = props.on_navigate;
    let active = props.active;

    rsx! {
        header { class: "nav-header",
            h1 { class: "nav-title", "{props.name}" }

            nav {
                ul { class: "nav-links",
                    for section in Section::ALL {
                        li { key: "{section}",
                            a {
                                class: link_class(section == active),
                                href: section.href(),
                                "aria-current": if section == active { "true" } else { "false" },
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    on_navigate.call(section);
                                },
                                "{section.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_link_is_active() {
        for active in Section::ALL {
            let highlighted = Section::ALL
                .iter()
                .filter(|s| link_class(**s == active).contains("active"))
                .count();
            assert_eq!(highlighted, 1);
        }
    }
}
