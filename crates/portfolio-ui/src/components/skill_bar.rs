//! Skill Bar Component
//!
//! A labelled horizontal proficiency bar: name on the left, percentage on
//! the right, and a red fill whose width is the percentage.

use dioxus::prelude::*;
use portfolio_core::{Skill, SkillGroup};

/// Properties for the SkillBar component
#[derive(Clone, PartialEq, Props)]
pub struct SkillBarProps {
    pub skill: Skill,
}

/// Inline style for the bar fill.
pub fn fill_style(skill: &Skill) -> String {
    format!("width: {}%;", skill.width_percent())
}

#[component]
pub fn SkillBar(props: SkillBarProps) -> Element {
    let style = fill_style(&props.skill);
    let level = props.skill.level;

    rsx! {
        div { class: "skill-bar",
            div { class: "skill-bar__header",
                span { class: "skill-bar__name", "{props.skill.name}" }
                span { class: "skill-bar__level", "{level}%" }
            }
            div {
                class: "skill-bar__track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{level}",
                div { class: "skill-bar__fill", style: "{style}" }
            }
        }
    }
}

/// A titled column of skill bars
#[component]
pub fn SkillColumn(group: SkillGroup) -> Element {
    rsx! {
        div { class: "skill-column",
            h3 { class: "card-title", "{group.title}" }
            for skill in group.skills.iter() {
                SkillBar { key: "{skill.name}", skill: skill.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_width_follows_level() {
        assert_eq!(fill_style(&Skill::new("Python", 95)), "width: 95%;");
        assert_eq!(fill_style(&Skill::new("None", 0)), "width: 0%;");
    }

    #[test]
    fn fill_width_never_overflows() {
        assert_eq!(fill_style(&Skill::new("Overclaimed", 180)), "width: 100%;");
    }
}
