//! Fill colors for SVG output.

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Result};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    /// Parse `#rrggbb` or `#rgb` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#')
            .ok_or_else(|| anyhow!("[io::svg::color] Expected a hex color like #3498db, got {s:?}"))?;
        let digit = |i: usize| -> Result<u8> {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map_err(|_| anyhow!("[io::svg::color] Invalid hex digit in {s:?}"))
        };

        match hex.len() {
            6 if hex.is_ascii() => Ok(Rgb {
                r: digit(0)? * 16 + digit(1)?,
                g: digit(2)? * 16 + digit(3)?,
                b: digit(4)? * 16 + digit(5)?,
            }),
            3 if hex.is_ascii() => Ok(Rgb {
                r: digit(0)? * 17,
                g: digit(1)? * 17,
                b: digit(2)? * 17,
            }),
            _ => bail!("[io::svg::color] Expected 3 or 6 hex digits in {s:?}"),
        }
    }
}
