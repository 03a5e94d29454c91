//! The seven page sections, in document order.

mod about;
mod contact;
mod education;
mod experience;
mod hero;
mod projects;
mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
