use dioxus::prelude::*;

/// Large section title. Centered titles are used above grids.
#[component]
pub fn SectionHeading(title: String, #[props(default = false)] centered: bool) -> Element {
    rsx! {
        h2 {
            class: if centered { "section-title centered" } else { "section-title" },
            "{title}"
        }
    }
}
