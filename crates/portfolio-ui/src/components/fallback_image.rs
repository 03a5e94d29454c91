//! Image with a placeholder fallback.
//!
//! A missing or broken image never breaks the layout: on load error the
//! `img` is swapped for a placeholder block of the same size.

use dioxus::prelude::*;

#[component]
pub fn FallbackImage(
    src: String,
    /// Alt text, also shown inside the placeholder
    alt: String,
    #[props(default = "card-image".to_string())] class: String,
) -> Element {
    let mut failed = use_signal(|| false);

    if failed() {
        return rsx! {
            div {
                class: "{class} image-placeholder",
                role: "img",
                "aria-label": "{alt}",
                span { class: "image-placeholder__label", "{alt}" }
            }
        };
    }

    let logged_src = src.clone();

    rsx! {
        img {
            class: "{class}",
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| {
                tracing::warn!(src = %logged_src, "Image failed to load, showing placeholder");
                failed.set(true);
            },
        }
    }
}
