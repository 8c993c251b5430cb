//! Color parsing and RGB/HSL conversion.

use std::fmt;
use std::str::FromStr;

use folio_core::{Error, Result};

/// An sRGB color with channels in `0.0..=255.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

/// A color in the HSL model.
///
/// Hue is in degrees (`0.0..360.0`); saturation and lightness are fractions
/// in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation fraction.
    pub s: f64,
    /// Lightness fraction.
    pub l: f64,
}

impl Rgb {
    /// Create a color, clamping each channel into range.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 255.0),
            g: g.clamp(0.0, 255.0),
            b: b.clamp(0.0, 255.0),
        }
    }

    /// Parse a CSS-style color string.
    ///
    /// Accepts hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `#` optional),
    /// `rgb()`/`rgba()`, `hsl()`/`hsla()`, and the keywords `white` and
    /// `black`. Alpha is parsed and dropped.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidData`] for anything else.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_ascii_lowercase();
        let parsed = match normalized.as_str() {
            "white" => Some(Self::new(255.0, 255.0, 255.0)),
            "black" => Some(Self::new(0.0, 0.0, 0.0)),
            other => {
                if let Some(args) = function_args(other, "rgb") {
                    parse_rgb_args(&args)
                } else if let Some(args) = function_args(other, "hsl") {
                    parse_hsl_args(&args).map(|hsl| hsl.to_rgb())
                } else {
                    parse_hex(other.strip_prefix('#').unwrap_or(other))
                }
            }
        };
        parsed.ok_or_else(|| Error::invalid_data(format!("invalid color: {input:?}")))
    }

    /// Convert to HSL.
    ///
    /// ```
    /// use folio_palette::Rgb;
    ///
    /// let hsl = Rgb::new(255.0, 0.0, 0.0).to_hsl();
    /// assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));
    /// ```
    pub fn to_hsl(&self) -> Hsl {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h * 60.0, s, l }
    }

    /// Lowercase `#rrggbb`, channels rounded half-up.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b)
        )
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Hsl {
    /// Create a color, wrapping the hue and clamping the fractions.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Convert to sRGB.
    pub fn to_rgb(&self) -> Rgb {
        if self.s == 0.0 {
            let v = self.l * 255.0;
            return Rgb::new(v, v, v);
        }

        let h = self.h / 360.0;
        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;

        Rgb::new(
            hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
            hue_to_channel(p, q, h) * 255.0,
            hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
        )
    }

    /// Lowercase `#rrggbb` of the equivalent sRGB color.
    ///
    /// ```
    /// use folio_palette::Hsl;
    ///
    /// assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_hex(), "#0000ff");
    /// assert_eq!(Hsl::new(0.0, 0.0, 1.0).to_hex(), "#ffffff");
    /// ```
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel_byte(value: f64) -> u8 {
    // clamped, so the cast cannot truncate
    value.round().clamp(0.0, 255.0) as u8
}

/// Arguments of `name(...)` or `namea(...)`, split on commas, slashes and
/// whitespace.
fn function_args<'a>(input: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let rest = input.strip_prefix(name)?;
    let rest = rest.strip_prefix('a').unwrap_or(rest).trim_start();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    Some(
        inner
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect(),
    )
}

fn parse_rgb_args(args: &[&str]) -> Option<Rgb> {
    let [r, g, b, rest @ ..] = args else {
        return None;
    };
    check_alpha(rest)?;
    Some(Rgb::new(
        rgb_channel(r)?,
        rgb_channel(g)?,
        rgb_channel(b)?,
    ))
}

fn parse_hsl_args(args: &[&str]) -> Option<Hsl> {
    let [h, s, l, rest @ ..] = args else {
        return None;
    };
    check_alpha(rest)?;
    let hue = number(h.strip_suffix("deg").unwrap_or(h))?;
    Some(Hsl::new(hue, fraction(s)?, fraction(l)?))
}

fn check_alpha(rest: &[&str]) -> Option<()> {
    match rest {
        [] => Some(()),
        [alpha] => fraction(alpha).map(|_| ()),
        _ => None,
    }
}

fn number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// `0..255`, or a percentage of 255.
fn rgb_channel(text: &str) -> Option<f64> {
    match text.strip_suffix('%') {
        Some(pct) => number(pct).map(|n| n / 100.0 * 255.0),
        None => number(text),
    }
}

/// A percentage, or a bare number read as a fraction when at most 1.
fn fraction(text: &str) -> Option<f64> {
    let value = match text.strip_suffix('%') {
        Some(pct) => number(pct)? / 100.0,
        None => {
            let n = number(text)?;
            if n > 1.0 { n / 100.0 } else { n }
        }
    };
    Some(value.clamp(0.0, 1.0))
}

fn parse_hex(digits: &str) -> Option<Rgb> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(f64::from);
    match digits.len() {
        3 | 4 => {
            let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17.0);
            Some(Rgb::new(short(0)?, short(1)?, short(2)?))
        }
        6 | 8 => Some(Rgb::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => None,
    }
}
