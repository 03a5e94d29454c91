//! Stateful components and page sections for the portfolio.

mod animated_subtitle;
mod contact_form;
mod nav_header;
mod page_section;
mod particle_background;
mod project_card;
pub mod sections;

pub use animated_subtitle::AnimatedSubtitle;
pub use contact_form::ContactForm;
pub use nav_header::NavHeader;
pub use page_section::{use_section_anchors, PageSection, SectionAnchors};
pub use particle_background::ParticleBackground;
pub use project_card::{ProjectCard, ProjectGrid};
