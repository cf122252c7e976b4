//! Conversion between the Celsius, Fahrenheit and Kelvin scales.
//!
//! Values are returned at full precision; rounding for display happens in
//! [`crate::output`].

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Offset between Celsius and Kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Shown instead of results when the input holds no number.
pub const EMPTY_STATE_MESSAGE: &str = "Enter a temperature to see conversions";

/// Longest numeric prefix accepted as a temperature.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(Infinity|[0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?")
        .expect("leading number pattern is valid")
});

/// Reads a temperature from free text.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"21.5 degrees"` reads as `21.5`. Returns `None` when no number leads,
/// which the display layer treats as the empty state rather than an error.
pub fn parse_temperature_input(raw: &str) -> Option<f64> {
    let found = LEADING_NUMBER.find(raw.trim_start())?;
    found.as_str().parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin];

    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
        }
    }

    /// Capitalized name used as a result label.
    pub fn label(self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Kelvin => "Kelvin",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scale::Celsius => "celsius",
            Scale::Fahrenheit => "fahrenheit",
            Scale::Kelvin => "kelvin",
        };
        f.write_str(s)
    }
}

impl FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(Scale::Celsius),
            "f" | "fahrenheit" => Ok(Scale::Fahrenheit),
            "k" | "kelvin" => Ok(Scale::Kelvin),
            other => Err(format!(
                "unknown temperature scale '{other}' (expected celsius, fahrenheit or kelvin)"
            )),
        }
    }
}

/// A value read on one particular scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureReading {
    pub value: f64,
    pub scale: Scale,
}

impl TemperatureReading {
    pub fn new(value: f64, scale: Scale) -> Self {
        Self { value, scale }
    }

    /// Builds a reading from free text, see [`parse_temperature_input`].
    pub fn parse(raw: &str, scale: Scale) -> Option<Self> {
        parse_temperature_input(raw).map(|value| Self::new(value, scale))
    }

    pub fn convert(&self) -> Conversion {
        convert_temperature(self.value, self.scale)
    }
}

/// The same temperature expressed on all three scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

impl Conversion {
    pub fn get(&self, scale: Scale) -> f64 {
        match scale {
            Scale::Celsius => self.celsius,
            Scale::Fahrenheit => self.fahrenheit,
            Scale::Kelvin => self.kelvin,
        }
    }
}

/// Converts `value`, read on scale `from`, to all three scales.
///
/// The source scale is copied through untouched so reading it back always
/// yields the exact input.
pub fn convert_temperature(value: f64, from: Scale) -> Conversion {
    match from {
        Scale::Celsius => Conversion {
            celsius: value,
            fahrenheit: value * 9.0 / 5.0 + 32.0,
            kelvin: value + KELVIN_OFFSET,
        },
        Scale::Fahrenheit => Conversion {
            celsius: (value - 32.0) * 5.0 / 9.0,
            fahrenheit: value,
            kelvin: (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        },
        Scale::Kelvin => Conversion {
            celsius: value - KELVIN_OFFSET,
            fahrenheit: (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
            kelvin: value,
        },
    }
}
