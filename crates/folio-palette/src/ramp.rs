//! Shade ramp derivation and CSS output.

use serde::ser::{Serialize, SerializeMap, Serializer};

use folio_core::Result;

use crate::color::{Hsl, Rgb};
use crate::profile::ShadeProfile;

/// A named ramp of shades, `--{prefix}-{step}` to `#rrggbb`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadeRamp {
    prefix: String,
    shades: Vec<(u16, String)>,
}

impl ShadeRamp {
    /// Variable name prefix, e.g. `primary`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Hex value for `step`.
    pub fn get(&self, step: u16) -> Option<&str> {
        self.shades
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, hex)| hex.as_str())
    }

    /// Steps and hex values, lightest first.
    pub fn shades(&self) -> &[(u16, String)] {
        &self.shades
    }

    /// Number of shades.
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Whether the ramp has no shades.
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    fn variable(&self, step: u16) -> String {
        format!("--{}-{step}", self.prefix)
    }

    /// CSS custom property names with their values.
    pub fn variables(&self) -> Vec<(String, &str)> {
        self.shades
            .iter()
            .map(|(step, hex)| (self.variable(*step), hex.as_str()))
            .collect()
    }

    /// One `--prefix-step: #rrggbb;` declaration per line.
    pub fn to_css(&self) -> String {
        self.variables()
            .into_iter()
            .map(|(name, hex)| format!("{name}: {hex};\n"))
            .collect()
    }
}

impl Serialize for ShadeRamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.shades.len()))?;
        for (step, hex) in &self.shades {
            map.serialize_entry(&self.variable(*step), hex)?;
        }
        map.end()
    }
}

/// Derive a ramp from `base` using `profile`.
///
/// Every shade keeps the base hue and takes its saturation and lightness from
/// the profile. A base with zero saturation (white, black, greys) produces a
/// neutral ramp: hue and saturation 0, profile lightness.
///
/// # Errors
///
/// [`folio_core::Error::InvalidData`] when `base` is not a color.
pub fn derive_ramp(base: &str, profile: &ShadeProfile, prefix: &str) -> Result<ShadeRamp> {
    let hsl = Rgb::parse(base)?.to_hsl();
    let achromatic = hsl.s == 0.0;
    log::debug!(
        "Deriving '{prefix}' ramp from {base} (h={:.1}, s={:.3}, l={:.3})",
        hsl.h,
        hsl.s,
        hsl.l
    );

    let shades = profile
        .iter()
        .map(|(step, target)| {
            let shade = if achromatic {
                Hsl::new(0.0, 0.0, target.lightness / 100.0)
            } else {
                Hsl::new(hsl.h, target.saturation / 100.0, target.lightness / 100.0)
            };
            (step, shade.to_hex())
        })
        .collect();

    Ok(ShadeRamp {
        prefix: prefix.to_string(),
        shades,
    })
}

/// The `primary` and `secondary` ramps for a brand color.
pub fn derive_primary_and_secondary(base: &str) -> Result<(ShadeRamp, ShadeRamp)> {
    let primary = derive_ramp(base, &ShadeProfile::primary(), "primary")?;
    let secondary = derive_ramp(base, &ShadeProfile::secondary(), "secondary")?;
    Ok((primary, secondary))
}
