//! Brand color shade ramps.
//!
//! Given one base color, derives two eleven-step ramps (50 through 950) as
//! CSS custom properties: a saturated `primary` ramp and a near-neutral
//! `secondary` ramp, both sharing the base hue.
//!
//! ```
//! let (primary, secondary) = folio_palette::derive_primary_and_secondary("#3b82f6")?;
//! assert_eq!(primary.get(500), Some("#215bba"));
//! assert_eq!(secondary.get(500), Some("#606976"));
//! # Ok::<(), folio_core::Error>(())
//! ```

#![doc = include_str!("../README.md")]

pub mod color;
pub mod profile;
pub mod ramp;

pub use color::{Hsl, Rgb};
pub use profile::{SHADE_STEPS, ShadeProfile, ShadeTarget};
pub use ramp::{ShadeRamp, derive_primary_and_secondary, derive_ramp};
