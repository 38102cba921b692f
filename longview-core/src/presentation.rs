//! Presentation helpers
//!
//! Thin mappings that define the contract with UI collaborators: the
//! logarithmic timeline slider, year labels and colour ramps. None of these
//! feed back into the projection.

use serde::{Deserialize, Serialize};

use crate::{offset_of, FloatValue, Year, EPOCH_YEAR, FINAL_YEAR, HORIZON_YEARS};

/// Highest slider position.
pub const SLIDER_MAX: u16 = 1000;

/// Map a slider position to a year on a logarithmic scale.
///
/// `year = epoch + round(1_000_000^(slider / 1000))`, with position 0 pinned to
/// the epoch year and positions of 1000 or more pinned to the final year.
pub fn slider_to_year(slider: u16) -> Year {
    if slider == 0 {
        return EPOCH_YEAR;
    }
    if slider >= SLIDER_MAX {
        return FINAL_YEAR;
    }
    let exponent = slider as FloatValue / SLIDER_MAX as FloatValue;
    let offset = (HORIZON_YEARS as FloatValue).powf(exponent).round() as Year;
    EPOCH_YEAR + offset.min(HORIZON_YEARS)
}

/// Inverse of [`slider_to_year`], clamped to the slider range.
pub fn year_to_slider(year: Year) -> u16 {
    let offset = offset_of(year);
    if offset <= 0 {
        return 0;
    }
    if offset >= HORIZON_YEARS {
        return SLIDER_MAX;
    }
    let position = (offset as FloatValue).ln() / (HORIZON_YEARS as FloatValue).ln()
        * SLIDER_MAX as FloatValue;
    position.round() as u16
}

/// Granularity of a year label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearFormat {
    /// Short labels for axis ticks and the slider thumb, e.g. `+75K`
    Compact,
    /// Long labels for headings, e.g. `+75,000 years`
    Full,
}

/// Format a year for display.
///
/// Distinguishes the epoch year itself, years less than a millennium away
/// (shown literally), offsets under a million (thousands) and the million-year
/// horizon.
pub fn format_year(year: Year, format: YearFormat) -> String {
    let offset = offset_of(year);
    match format {
        YearFormat::Compact => {
            if offset < 1_000 {
                year.to_string()
            } else if offset < HORIZON_YEARS {
                // Truncated to tenths so labels never reach 1000K below the horizon
                let tenths = offset / 100;
                if tenths % 10 == 0 {
                    format!("+{}K", tenths / 10)
                } else {
                    format!("+{}.{}K", tenths / 10, tenths % 10)
                }
            } else {
                format!("+{}M", offset / HORIZON_YEARS)
            }
        }
        YearFormat::Full => {
            if offset == 0 {
                format!("{} (Present)", year)
            } else if offset < 1_000 {
                format!("Year {}", year)
            } else if offset < HORIZON_YEARS {
                format!("+{} years", group_thousands(offset))
            } else if offset == HORIZON_YEARS {
                "+1 million years".to_string()
            } else {
                format!("+{} years", group_thousands(offset))
            }
        }
    }
}

fn group_thousands(value: Year) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style hex string, e.g. `#1e90ff`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Stops for [`temperature_color`], keyed by normalised temperature.
const TEMPERATURE_STOPS: [(FloatValue, Rgb); 5] = [
    (0.0, Rgb::new(30, 64, 175)),
    (0.25, Rgb::new(34, 211, 238)),
    (0.45, Rgb::new(74, 222, 128)),
    (0.65, Rgb::new(250, 204, 21)),
    (1.0, Rgb::new(220, 38, 38)),
];

/// Stops for [`health_color`], keyed by health score.
const HEALTH_STOPS: [(FloatValue, Rgb); 5] = [
    (0.0, Rgb::new(185, 28, 28)),
    (30.0, Rgb::new(249, 115, 22)),
    (55.0, Rgb::new(234, 179, 8)),
    (80.0, Rgb::new(34, 197, 94)),
    (100.0, Rgb::new(21, 128, 61)),
];

/// Temperature range mapped onto the colour ramp.
pub const TEMPERATURE_COLOR_MIN: FloatValue = -2.0;
pub const TEMPERATURE_COLOR_MAX: FloatValue = 8.0;

/// Normalise a temperature anomaly to [0, 1] for colouring.
pub fn normalize_temperature(temperature: FloatValue) -> FloatValue {
    ((temperature - TEMPERATURE_COLOR_MIN) / (TEMPERATURE_COLOR_MAX - TEMPERATURE_COLOR_MIN))
        .clamp(0.0, 1.0)
}

/// Colour for a temperature anomaly, blue (cold) through green to red (hot).
pub fn temperature_color(temperature: FloatValue) -> Rgb {
    interpolate_stops(&TEMPERATURE_STOPS, normalize_temperature(temperature))
}

/// Colour for an earth health score, red (poor) through yellow to green (healthy).
pub fn health_color(score: FloatValue) -> Rgb {
    interpolate_stops(&HEALTH_STOPS, score.clamp(0.0, 100.0))
}

fn interpolate_stops(stops: &[(FloatValue, Rgb)], position: FloatValue) -> Rgb {
    let (first_at, first) = stops[0];
    if position <= first_at {
        return first;
    }
    for pair in stops.windows(2) {
        let (lo_at, lo) = pair[0];
        let (hi_at, hi) = pair[1];
        if position <= hi_at {
            let t = (position - lo_at) / (hi_at - lo_at);
            let channel =
                |a: u8, b: u8| (a as FloatValue + (b as FloatValue - a as FloatValue) * t).round() as u8;
            return Rgb::new(channel(lo.r, hi.r), channel(lo.g, hi.g), channel(lo.b, hi.b));
        }
    }
    stops[stops.len() - 1].1
}
