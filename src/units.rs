//! Measurement units and the fixed points-per-unit conversion table.
//!
//! The table is the closed set a page-layout host understands; every unit
//! maps to one constant factor, defined once and immutable. Unknown names
//! are rejected at the string boundary so the enum itself converts totally.

use std::fmt;
use std::str::FromStr;

use crate::errors::UnitError;
use crate::log::debug;

/// Closed set of measurement units understood by the conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Points,
    Millimeters,
    Inches,
    Pixels,
    Centimeters,
    Picas,
    Agates,
    Ciceros,
}

impl Unit {
    /// Every unit, for iteration in tests and help text.
    pub const ALL: [Unit; 8] = [
        Unit::Points,
        Unit::Millimeters,
        Unit::Inches,
        Unit::Pixels,
        Unit::Centimeters,
        Unit::Picas,
        Unit::Agates,
        Unit::Ciceros,
    ];

    /// How many points equal one of this unit.
    #[inline]
    pub const fn points_per_unit(self) -> f64 {
        match self {
            Unit::Points => 1.0,
            Unit::Millimeters => 72.0 / 25.4,
            Unit::Inches => 72.0,
            Unit::Pixels => 1.0,
            Unit::Centimeters => 720.0 / 25.4,
            Unit::Picas => 12.0,
            Unit::Agates => 14.4,
            Unit::Ciceros => 12.7878,
        }
    }

    /// Express `value` of this unit in points.
    #[inline]
    pub fn to_points(self, value: f64) -> f64 {
        value * self.points_per_unit()
    }

    /// Express `value` points in this unit.
    #[inline]
    pub fn from_points(self, value: f64) -> f64 {
        value / self.points_per_unit()
    }

    /// Case-insensitive lookup accepting the canonical abbreviation and the
    /// singular/plural full names.
    pub fn parse(name: &str) -> Result<Unit, UnitError> {
        let unit = match name.to_ascii_lowercase().as_str() {
            "pt" | "point" | "points" => Unit::Points,
            "mm" | "millimeter" | "millimeters" => Unit::Millimeters,
            "in" | "inch" | "inches" => Unit::Inches,
            "px" | "pixel" | "pixels" => Unit::Pixels,
            "cm" | "centimeter" | "centimeters" => Unit::Centimeters,
            "pc" | "pica" | "picas" => Unit::Picas,
            "ag" | "agate" | "agates" => Unit::Agates,
            "ci" | "cicero" | "ciceros" => Unit::Ciceros,
            _ => {
                return Err(UnitError::UnknownUnit {
                    name: name.to_string(),
                });
            }
        };
        Ok(unit)
    }

    /// Canonical abbreviation, as printed by `Display`.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Unit::Points => "pt",
            Unit::Millimeters => "mm",
            Unit::Inches => "in",
            Unit::Pixels => "px",
            Unit::Centimeters => "cm",
            Unit::Picas => "pc",
            Unit::Agates => "ag",
            Unit::Ciceros => "ci",
        }
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

/// Convert a value between two units via the points table.
///
/// Total on the enum; `UnknownUnit` can only arise at the string boundary.
#[inline]
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    value * from.points_per_unit() / to.points_per_unit()
}

/// String-keyed convert for callers holding unit names.
///
/// Fails with `UnknownUnit` when either name falls outside the closed set.
pub fn convert_between(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    let from = Unit::parse(from)?;
    let to = Unit::parse(to)?;
    let converted = convert(value, from, to);
    debug!("converted {value}{from} to {converted}{to}");
    Ok(converted)
}
