//! Decorative 3D background: a rotating point cloud and an orbit of skill
//! labels.
//!
//! Points are generated once and never rewritten. Animation only changes the
//! group [`Rotation`], which the renderer applies to the whole cloud as one
//! rigid-body transform.

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of points in the field.
pub const PARTICLE_COUNT: usize = 500;

/// Half the edge length of the cube points are drawn from.
pub const PARTICLE_EXTENT: f32 = 5.0;

/// Radians per second added to both rotation axes.
pub const ROTATION_SPEED: f32 = 0.1;

/// Radians per second of the skill orbit's Y rotation.
pub const ORBIT_SPEED: f32 = 0.05;

/// Radius of the skill orbit in scene units.
pub const ORBIT_RADIUS: f32 = 5.0;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Euler rotation of a group, in radians, applied in XYZ order
/// (the Y rotation acts on the point first, then X).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    /// Rotate a point the way the CSS `rotateX(..) rotateY(..)` group
    /// transform does.
    #[cfg(test)]
    fn apply(&self, p: Point3) -> Point3 {
        let (sy, cy) = self.y.sin_cos();
        let (sx, cx) = self.x.sin_cos();

        // About Y
        let x1 = p.x * cy + p.z * sy;
        let z1 = -p.x * sy + p.z * cy;

        // About X
        let y2 = p.y * cx - z1 * sx;
        let z2 = p.y * sx + z1 * cx;

        Point3::new(x1, y2, z2)
    }
}

/// Fixed point cloud plus its accumulated rotation.
#[derive(Clone, PartialEq, Debug)]
pub struct ParticleField {
    points: Vec<Point3>,
    rotation: Rotation,
}

impl ParticleField {
    /// Draw [`PARTICLE_COUNT`] points uniformly from the cube
    /// `[-PARTICLE_EXTENT, PARTICLE_EXTENT)^3`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let points = (0..PARTICLE_COUNT)
            .map(|_| {
                Point3::new(
                    rng.random_range(-PARTICLE_EXTENT..PARTICLE_EXTENT),
                    rng.random_range(-PARTICLE_EXTENT..PARTICLE_EXTENT),
                    rng.random_range(-PARTICLE_EXTENT..PARTICLE_EXTENT),
                )
            })
            .collect();

        Self {
            points,
            rotation: Rotation::default(),
        }
    }

    /// Deterministic field for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::generate(&mut StdRng::seed_from_u64(seed))
    }

    /// Field seeded from the thread RNG.
    pub fn random() -> Self {
        Self::generate(&mut rand::rng())
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Advance one frame. `delta_secs` is the time since the previous frame.
    ///
    /// Negative or non-finite deltas are dropped so the angles never decrease.
    pub fn advance(&mut self, delta_secs: f32) {
        if !delta_secs.is_finite() || delta_secs <= 0.0 {
            return;
        }
        let step = delta_secs * ROTATION_SPEED;
        self.rotation.x += step;
        self.rotation.y += step;
    }

    /// World-space positions after the group rotation.
    #[cfg(test)]
    fn transformed(&self) -> impl Iterator<Item = Point3> + '_ {
        let rotation = self.rotation;
        self.points.iter().map(move |p| rotation.apply(*p))
    }
}

/// Skill labels arranged on a horizontal circle that slowly turns.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SkillOrbit {
    labels: Vec<(String, Point3)>,
    elapsed_secs: f32,
}

impl SkillOrbit {
    /// Place `labels` evenly around the orbit with random heights in
    /// `[-1, 1)`.
    pub fn generate<R: Rng + ?Sized>(labels: &[String], rng: &mut R) -> Self {
        let count = labels.len() as f32;
        let labels = labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let angle = index as f32 / count * TAU;
                let position = Point3::new(
                    angle.sin() * ORBIT_RADIUS,
                    rng.random_range(-1.0..1.0),
                    angle.cos() * ORBIT_RADIUS,
                );
                (label.clone(), position)
            })
            .collect();

        Self {
            labels,
            elapsed_secs: 0.0,
        }
    }

    pub fn from_seed(labels: &[String], seed: u64) -> Self {
        Self::generate(labels, &mut StdRng::seed_from_u64(seed))
    }

    /// Orbit with heights drawn from the thread RNG.
    pub fn random(labels: &[String]) -> Self {
        Self::generate(labels, &mut rand::rng())
    }

    pub fn labels(&self) -> &[(String, Point3)] {
        &self.labels
    }

    pub fn advance(&mut self, delta_secs: f32) {
        if delta_secs.is_finite() && delta_secs > 0.0 {
            self.elapsed_secs += delta_secs;
        }
    }

    /// Group rotation, derived from total elapsed time rather than
    /// accumulated per frame.
    pub fn rotation(&self) -> Rotation {
        Rotation {
            x: 0.0,
            y: self.elapsed_secs * ORBIT_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn distance(a: &Point3, b: &Point3) -> f32 {
        let (dx, dy, dz) = (a.x - b.x, a.y - b.y, a.z - b.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    #[test]
    fn generates_fixed_count_in_range() {
        let field = ParticleField::from_seed(7);
        assert_eq!(field.len(), PARTICLE_COUNT);
        for p in field.points() {
            for c in [p.x, p.y, p.z] {
                assert!((-PARTICLE_EXTENT..PARTICLE_EXTENT).contains(&c), "{c} out of range");
            }
        }
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(ParticleField::from_seed(42), ParticleField::from_seed(42));
        assert_ne!(ParticleField::from_seed(42), ParticleField::from_seed(43));
    }

    #[test]
    fn advance_rotates_both_axes() {
        let mut field = ParticleField::from_seed(1);
        field.advance(0.5);
        field.advance(1.5);
        let r = field.rotation();
        assert!((r.x - 0.2).abs() < EPS);
        assert!((r.y - 0.2).abs() < EPS);
    }

    #[test]
    fn advance_leaves_points_untouched() {
        let mut field = ParticleField::from_seed(3);
        let before = field.points().to_vec();
        field.advance(0.016);
        assert_eq!(field.points(), before.as_slice());
    }

    #[test]
    fn bad_deltas_are_ignored() {
        let mut field = ParticleField::from_seed(1);
        field.advance(-1.0);
        field.advance(f32::NAN);
        field.advance(f32::INFINITY);
        assert_eq!(field.rotation(), Rotation::default());
    }

    #[test]
    fn rotation_identity() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(Rotation::default().apply(p), p);
    }

    #[test]
    fn quarter_turn_about_y() {
        let r = Rotation {
            x: 0.0,
            y: std::f32::consts::FRAC_PI_2,
        };
        let p = r.apply(Point3::new(1.0, 0.0, 0.0));
        assert!(p.x.abs() < EPS);
        assert!((p.z + 1.0).abs() < EPS);
    }

    #[test]
    fn transformed_preserves_distances() {
        let mut field = ParticleField::from_seed(9);
        field.advance(12.3);
        let moved: Vec<_> = field.transformed().collect();
        let orig = field.points();
        let d0 = distance(&orig[0], &orig[1]);
        let d1 = distance(&moved[0], &moved[1]);
        assert!((d0 - d1).abs() < EPS);
    }

    #[test]
    fn orbit_places_labels_on_circle() {
        let labels: Vec<String> = ["Rust", "SQL", "Python", "Azure"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let orbit = SkillOrbit::from_seed(&labels, 5);
        assert_eq!(orbit.labels().len(), 4);
        for (_, p) in orbit.labels() {
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - ORBIT_RADIUS).abs() < EPS);
            assert!((-1.0..1.0).contains(&p.y));
        }
        // First label sits on +Z
        let (_, first) = &orbit.labels()[0];
        assert!(first.x.abs() < EPS);
        assert!((first.z - ORBIT_RADIUS).abs() < EPS);
    }

    #[test]
    fn orbit_rotation_tracks_elapsed_time() {
        let mut orbit = SkillOrbit::from_seed(&["Git".to_string()], 0);
        orbit.advance(4.0);
        orbit.advance(6.0);
        assert!((orbit.rotation().y - 0.5).abs() < EPS);
        assert_eq!(orbit.rotation().x, 0.0);
    }

    #[test]
    fn empty_orbit() {
        let orbit = SkillOrbit::from_seed(&[], 0);
        assert!(orbit.labels().is_empty());
    }
}
