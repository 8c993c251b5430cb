//! Shade profiles: target lightness and saturation per shade step.

use std::collections::BTreeMap;

/// The shade steps of a full ramp, lightest first.
pub const SHADE_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

const PRIMARY: [(u16, f64, f64); 11] = [
    (50, 96.0, 90.0),
    (100, 90.0, 70.0),
    (200, 82.0, 60.0),
    (300, 70.0, 70.0),
    (400, 53.0, 60.0),
    (500, 43.0, 70.0),
    (600, 36.0, 70.0),
    (700, 30.0, 60.0),
    (800, 26.0, 50.0),
    (900, 23.0, 50.0),
    (950, 15.0, 60.0),
];

const SECONDARY_LIGHTNESS: [(u16, f64); 11] = [
    (50, 96.0),
    (100, 90.0),
    (200, 82.0),
    (300, 70.0),
    (400, 50.0),
    (500, 42.0),
    (600, 36.0),
    (700, 30.0),
    (800, 26.0),
    (900, 23.0),
    (950, 15.0),
];

const SECONDARY_SATURATION: f64 = 10.0;

/// Target for one shade, both values in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadeTarget {
    /// HSL lightness, `0.0..=100.0`.
    pub lightness: f64,
    /// HSL saturation, `0.0..=100.0`.
    pub saturation: f64,
}

impl ShadeTarget {
    /// Target with the given lightness and saturation.
    pub fn new(lightness: f64, saturation: f64) -> Self {
        Self {
            lightness,
            saturation,
        }
    }
}

/// Step-to-target table used to derive a [`ShadeRamp`](crate::ShadeRamp).
#[derive(Clone, Debug, PartialEq)]
pub struct ShadeProfile {
    targets: BTreeMap<u16, ShadeTarget>,
}

impl ShadeProfile {
    /// Saturated ramp for the brand color.
    pub fn primary() -> Self {
        Self::from_targets(
            PRIMARY
                .iter()
                .map(|&(step, l, s)| (step, ShadeTarget::new(l, s))),
        )
    }

    /// Near-neutral ramp tinted with the brand hue.
    pub fn secondary() -> Self {
        Self::from_targets(
            SECONDARY_LIGHTNESS
                .iter()
                .map(|&(step, l)| (step, ShadeTarget::new(l, SECONDARY_SATURATION))),
        )
    }

    /// Build a custom profile. A repeated step keeps the last target.
    pub fn from_targets(targets: impl IntoIterator<Item = (u16, ShadeTarget)>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
        }
    }

    /// Target for `step`, if the profile has one.
    pub fn target(&self, step: u16) -> Option<ShadeTarget> {
        self.targets.get(&step).copied()
    }

    /// Steps with their targets, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u16, ShadeTarget)> + '_ {
        self.targets.iter().map(|(&step, &target)| (step, target))
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the profile has no steps.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
