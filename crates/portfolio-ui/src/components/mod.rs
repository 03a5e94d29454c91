//! Reusable presentation components.

mod button;
mod fallback_image;
mod input;
mod section_heading;
mod skill_bar;
mod tag_pills;

pub use button::*;
pub use fallback_image::*;
pub use input::*;
pub use section_heading::*;
pub use skill_bar::*;
pub use tag_pills::*;
