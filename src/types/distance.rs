use crate::parsers::str_to_uint;

const HEIGHT_FACTOR: u32 = 100;
const LAYER_DEPTH_FACTOR: u32 = 1000;
const CAVOK_VISIBILITY_METERS: u32 = 10000;
const CAVOK_VISIBILITY_MILES: u32 = 6;

const METERS_PER_MILE: f32 = 1609.347;
const METERS_PER_FOOT: f32 = 0.3048;
const FEET_PER_MILE: f32 = 5280.0;

/// A horizontal or vertical distance: visibility, RVR, cloud base, layer
/// heights.
///
/// The value is an optional integer part plus an optional fraction
/// (statute-mile visibility uses mixed fractions such as `1 1/2SM`).
/// A distance with neither part is "not reported" but still carries its
/// unit.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance {
    /// Integer part of the value
    pub integer: Option<u32>,
    /// Fraction numerator
    pub numerator: Option<u32>,
    /// Fraction denominator
    pub denominator: Option<u32>,
    /// `P`/`M` modifier, or the synthetic "more than" on `9999` and CAVOK
    pub modifier: DistanceModifier,
    /// The unit the distance was reported in
    pub unit: DistanceUnit,
}

/// Distance units, convertible via [`Distance::to_unit`].
#[derive(PartialEq, Eq, Copy, Clone, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    /// Meters
    #[display("m")]
    Meters,
    /// Statute miles (`SM`)
    #[display("SM")]
    StatuteMiles,
    /// Feet (`FT`)
    #[display("FT")]
    Feet,
}

/// Qualifies a distance value as an upper or lower bound.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceModifier {
    /// The value is exact
    #[default]
    None,
    /// Less than the reported value (`M` prefix)
    LessThan,
    /// More than the reported value (`P` prefix)
    MoreThan,
}

impl Distance {
    /// A not-reported distance in `unit`.
    pub fn not_reported(unit: DistanceUnit) -> Self {
        Distance {
            integer: None,
            numerator: None,
            denominator: None,
            modifier: DistanceModifier::None,
            unit,
        }
    }

    /// An exact integer distance in `unit`.
    pub fn exact(value: u32, unit: DistanceUnit) -> Self {
        Distance {
            integer: Some(value),
            ..Self::not_reported(unit)
        }
    }

    fn modifier_from_byte(b: u8) -> Option<DistanceModifier> {
        match b {
            b'M' => Some(DistanceModifier::LessThan),
            b'P' => Some(DistanceModifier::MoreThan),
            _ => None,
        }
    }

    /// Decodes 4-digit visibility in meters, or `////`.
    ///
    /// `9999` means "10 km or more" and decodes to 10000 m with the
    /// more-than modifier.
    pub fn from_meters(s: &str) -> Option<Self> {
        if s.len() != 4 {
            return None;
        }
        if s == "////" {
            return Some(Self::not_reported(DistanceUnit::Meters));
        }
        let value = str_to_uint(s, 0, 4)?;
        if value == 9999 {
            return Some(Distance {
                modifier: DistanceModifier::MoreThan,
                ..Self::exact(CAVOK_VISIBILITY_METERS, DistanceUnit::Meters)
            });
        }
        Some(Self::exact(value, DistanceUnit::Meters))
    }

    /// Decodes statute-mile visibility: `[PM]?d?d(/d?d)?SM` or `////SM`.
    ///
    /// A fraction whose numerator is not below its denominator folds the
    /// leading digit into the integer part, so `11/2SM` reads as one and a
    /// half miles.
    pub fn from_miles(s: &str) -> Option<Self> {
        const UNIT: &str = "SM";
        if s.len() < UNIT.len() + 1 {
            return None;
        }
        if s == "////SM" {
            return Some(Self::not_reported(DistanceUnit::StatuteMiles));
        }
        let body = s.strip_suffix(UNIT)?;
        let mut result = Self::not_reported(DistanceUnit::StatuteMiles);
        let mut pos = 0;
        if let Some(modifier) = body.as_bytes().first().copied().and_then(Self::modifier_from_byte)
        {
            result.modifier = modifier;
            pos = 1;
        }
        let body = &body[pos..];
        match body.find('/') {
            None => {
                if body.is_empty() || body.len() > 2 {
                    return None;
                }
                result.integer = Some(str_to_uint(body, 0, body.len())?);
            }
            Some(slash) => {
                let num_str = &body[..slash];
                let den_str = &body[slash + 1..];
                if num_str.is_empty() || num_str.len() > 2 || den_str.is_empty() || den_str.len() > 2
                {
                    return None;
                }
                let num = str_to_uint(num_str, 0, num_str.len())?;
                let den = str_to_uint(den_str, 0, den_str.len())?;
                if num >= den {
                    result.integer = Some(num / 10);
                    result.numerator = Some(num % 10);
                } else {
                    result.numerator = Some(num);
                }
                result.denominator = Some(den);
            }
        }
        Some(result)
    }

    /// Decodes a 3-digit height in hundreds of feet, or `///`.
    pub fn from_height(s: &str) -> Option<Self> {
        if s.len() != 3 {
            return None;
        }
        if s == "///" {
            return Some(Self::not_reported(DistanceUnit::Feet));
        }
        let h = str_to_uint(s, 0, 3)?;
        Some(Self::exact(h * HEIGHT_FACTOR, DistanceUnit::Feet))
    }

    /// Decodes a runway visual range: `[PM]?dddd` or `////`.
    pub fn from_rvr(s: &str, unit_feet: bool) -> Option<Self> {
        let unit = if unit_feet {
            DistanceUnit::Feet
        } else {
            DistanceUnit::Meters
        };
        match s.len() {
            4 => {
                if s == "////" {
                    return Some(Self::not_reported(unit));
                }
                Some(Self::exact(str_to_uint(s, 0, 4)?, unit))
            }
            5 => {
                let modifier = Self::modifier_from_byte(s.as_bytes()[0])?;
                Some(Distance {
                    modifier,
                    ..Self::exact(str_to_uint(s, 1, 4)?, unit)
                })
            }
            _ => None,
        }
    }

    /// Decodes an icing/turbulence layer: 3-digit base in hundreds of feet
    /// plus 1-digit depth in thousands of feet. Returns (base, top).
    pub fn from_layer(s: &str) -> Option<(Self, Self)> {
        if s.len() != 4 {
            return None;
        }
        let base = str_to_uint(s, 0, 3)?;
        let depth = str_to_uint(s, 3, 1)?;
        Some((
            Self::exact(base * HEIGHT_FACTOR, DistanceUnit::Feet),
            Self::exact(
                base * HEIGHT_FACTOR + depth * LAYER_DEPTH_FACTOR,
                DistanceUnit::Feet,
            ),
        ))
    }

    /// The synthetic visibility CAVOK stands for: more than 10 km, or more
    /// than 6 statute miles.
    pub fn cavok_visibility(unit_miles: bool) -> Self {
        let mut result = Self::exact(CAVOK_VISIBILITY_METERS, DistanceUnit::Meters);
        if unit_miles {
            result = Self::exact(CAVOK_VISIBILITY_MILES, DistanceUnit::StatuteMiles);
        }
        result.modifier = DistanceModifier::MoreThan;
        result
    }

    /// Merges an integer-only distance with a fraction-only distance of
    /// the same unit (the two-token `1 1/2SM` form).
    pub fn from_integer_and_fraction(integer: &Distance, fraction: &Distance) -> Option<Self> {
        if !integer.is_valid()
            || !fraction.is_valid()
            || integer.modifier != DistanceModifier::None
            || fraction.modifier != DistanceModifier::None
            || integer.unit != fraction.unit
            || !integer.is_integer()
            || !fraction.is_fraction()
        {
            return None;
        }
        Some(Distance {
            numerator: fraction.numerator,
            denominator: fraction.denominator,
            ..*integer
        })
    }

    /// An integer value with no fraction part.
    pub fn is_integer(&self) -> bool {
        self.integer.is_some() && self.numerator.is_none() && self.denominator.is_none()
    }

    /// A fraction with no integer part.
    pub fn is_fraction(&self) -> bool {
        self.integer.is_none() && self.numerator.is_some() && self.denominator.is_some()
    }

    /// Whether any value is present.
    pub fn is_reported(&self) -> bool {
        self.integer.is_some() || (self.numerator.is_some() && self.denominator.is_some())
    }

    /// Rejects zero numerators and denominators.
    pub fn is_valid(&self) -> bool {
        if self.denominator == Some(0) || self.numerator == Some(0) {
            return false;
        }
        true
    }

    /// Converts the reported value into `unit`.
    pub fn to_unit(&self, unit: DistanceUnit) -> Option<f32> {
        if !self.is_reported() {
            return None;
        }
        let den = self.denominator.unwrap_or(1);
        if den == 0 {
            return None;
        }
        let value =
            self.integer.unwrap_or(0) as f32 + self.numerator.unwrap_or(0) as f32 / den as f32;
        let meters = match self.unit {
            DistanceUnit::Meters => value,
            DistanceUnit::StatuteMiles => value * METERS_PER_MILE,
            DistanceUnit::Feet => value * METERS_PER_FOOT,
        };
        Some(match unit {
            DistanceUnit::Meters => meters,
            DistanceUnit::StatuteMiles => meters / METERS_PER_MILE,
            DistanceUnit::Feet => {
                if self.unit == DistanceUnit::StatuteMiles {
                    value * FEET_PER_MILE
                } else {
                    meters / METERS_PER_FOOT
                }
            }
        })
    }
}
