//! Particle Background Component
//!
//! Fixed full-window 3D scene behind the page: 500 red points rotating as
//! one group, plus an optional ring of skill labels. The scene is CSS 3D:
//! every point is positioned once, and each frame only rewrites the group's
//! `rotateX/rotateY` transform.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{run_frames, ParticleField, Point3, Rotation, SkillOrbit, FRAME_PERIOD};

use crate::theme::colors::ACCENT;

/// CSS pixels per scene unit.
const SCENE_SCALE: f32 = 60.0;

/// CSS transform for a rotated group.
pub fn group_transform(rotation: Rotation) -> String {
    format!("rotateX({:.4}rad) rotateY({:.4}rad)", rotation.x, rotation.y)
}

/// CSS transform placing a point. Scene Y points up, CSS Y points down.
pub fn point_transform(point: &Point3) -> String {
    format!(
        "translate3d({:.1}px, {:.1}px, {:.1}px)",
        point.x * SCENE_SCALE,
        -point.y * SCENE_SCALE,
        point.z * SCENE_SCALE
    )
}

/// Decorative background. Only mounted when a background is enabled; when it
/// is not, no frame loop runs at all.
#[component]
pub fn ParticleBackground(
    /// Fixed layout seed; a random layout when `None`
    #[props(!optional)]
    seed: Option<u64>,
    /// Labels circling the scene
    #[props(default)]
    orbit_labels: Vec<String>,
) -> Element {
    let mut field = use_signal(|| match seed {
        Some(seed) => ParticleField::from_seed(seed),
        None => ParticleField::random(),
    });
    let mut orbit = use_signal(|| match seed {
        Some(seed) => SkillOrbit::from_seed(&orbit_labels, seed),
        None => SkillOrbit::random(&orbit_labels),
    });

    // Points never change after generation; hand them to a memoized child
    let points = use_hook(|| Rc::new(field.peek().points().to_vec()));

    let frames = use_hook(|| {
        tracing::debug!(points = field.peek().len(), "Starting particle frame loop");
        spawn(async move {
            run_frames(FRAME_PERIOD, move |delta| {
                field.write().advance(delta);
                orbit.write().advance(delta);
            })
            .await;
        })
    });

    use_drop(move || {
        tracing::debug!("Particle background unmounted, stopping frame loop");
        frames.cancel();
    });

    let field_style = format!("color: {}; transform: {};", ACCENT, group_transform(field.read().rotation()));
    let orbit_style = format!("transform: {};", group_transform(orbit.read().rotation()));
    let labels = orbit.read().labels().to_vec();

    rsx! {
        div { class: "particle-scene", "aria-hidden": "true",
            div { class: "particle-group", style: "{field_style}",
                PointCloud { points: points.clone() }
            }

            if !labels.is_empty() {
                div { class: "particle-group", style: "{orbit_style}",
                    for (label, position) in labels.iter() {
                        span {
                            key: "{label}",
                            class: "orbit-label",
                            style: "transform: {point_transform(position)};",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// Static point layout. Props compare equal every frame, so this never
/// re-renders after mount.
#[component]
fn PointCloud(points: Rc<Vec<Point3>>) -> Element {
    rsx! {
        for (index, point) in points.iter().enumerate() {
            span {
                key: "{index}",
                class: "particle",
                style: "transform: {point_transform(point)};",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_transform_formats_radians() {
        let r = Rotation { x: 0.1, y: 0.25 };
        assert_eq!(group_transform(r), "rotateX(0.1000rad) rotateY(0.2500rad)");
    }

    #[test]
    fn point_transform_flips_y() {
        let p = Point3::new(1.0, 2.0, -0.5);
        assert_eq!(point_transform(&p), "translate3d(60.0px, -120.0px, -30.0px)");
    }
}
