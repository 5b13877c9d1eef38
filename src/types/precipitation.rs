use crate::parsers::str_to_uint;

const MM_PER_INCH: f32 = 25.4;

/// A precipitation or deposit-depth amount.
#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Precipitation {
    value: f32,
    /// Whether the amount was reported at all
    pub status: PrecipitationStatus,
    /// The unit the amount was reported in
    pub unit: PrecipitationUnit,
}

/// Reporting status of a precipitation amount.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrecipitationStatus {
    /// Slashed out
    NotReported,
    /// An amount is present
    Reported,
    /// Deposit depth code 99: the runway is not operational
    RunwayNotOperational,
}

/// Precipitation units, convertible via [`Precipitation::to_unit`].
#[derive(PartialEq, Eq, Copy, Clone, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrecipitationUnit {
    /// Millimeters
    #[display("mm")]
    Millimeters,
    /// Inches
    #[display("in")]
    Inches,
}

impl Precipitation {
    pub(crate) fn not_reported(unit: PrecipitationUnit) -> Self {
        Precipitation {
            value: 0.0,
            status: PrecipitationStatus::NotReported,
            unit,
        }
    }

    fn reported(value: f32, unit: PrecipitationUnit) -> Self {
        Precipitation {
            value,
            status: PrecipitationStatus::Reported,
            unit,
        }
    }

    /// Decodes a rainfall amount `d?dd.d` in millimeters, or a slashed
    /// form (`//./`, `///./`) or empty string as not reported.
    pub fn from_rainfall_token(s: &str) -> Option<Self> {
        if s.is_empty() || s == "//./" || s == "///./" {
            return Some(Self::not_reported(PrecipitationUnit::Millimeters));
        }
        if s.len() != 4 && s.len() != 5 {
            return None;
        }
        if s.as_bytes()[s.len() - 2] != b'.' {
            return None;
        }
        let fract = str_to_uint(s, s.len() - 1, 1)?;
        let int = str_to_uint(s, 0, s.len() - 2)?;
        Some(Self::reported(
            int as f32 + 0.1 * fract as f32,
            PrecipitationUnit::Millimeters,
        ))
    }

    /// Decodes a 2-digit runway deposit depth in millimeters.
    ///
    /// Codes 92 to 98 are reserved for depths from 10 cm to 40 cm, code 99
    /// flags a non-operational runway and code 91 is rejected (WMO table
    /// 1079). `//` is not reported.
    pub fn from_runway_deposits(s: &str) -> Option<Self> {
        if s.len() != 2 {
            return None;
        }
        if s == "//" {
            return Some(Self::not_reported(PrecipitationUnit::Millimeters));
        }
        let code = str_to_uint(s, 0, 2)?;
        let value = match code {
            91 => return None,
            92 => 100,
            93 => 150,
            94 => 200,
            95 => 250,
            96 => 300,
            97 => 350,
            98 => 400,
            99 => {
                return Some(Precipitation {
                    value: 0.0,
                    status: PrecipitationStatus::RunwayNotOperational,
                    unit: PrecipitationUnit::Millimeters,
                });
            }
            v => v,
        };
        Some(Self::reported(value as f32, PrecipitationUnit::Millimeters))
    }

    /// Decodes a 3- or 4-digit remark amount in inches, scaled by the
    /// group type's factor. `///`/`////` is not reported when the group
    /// type allows that.
    pub fn from_remark_token(s: &str, factor_inches: f32, allow_not_reported: bool) -> Option<Self> {
        if s.len() != 3 && s.len() != 4 {
            return None;
        }
        if s == "///" || s == "////" {
            if !allow_not_reported {
                return None;
            }
            return Some(Self::not_reported(PrecipitationUnit::Inches));
        }
        let v = str_to_uint(s, 0, s.len())?;
        Some(Self::reported(
            v as f32 * factor_inches,
            PrecipitationUnit::Inches,
        ))
    }

    /// The amount in the reporting unit, when reported.
    pub fn value(&self) -> Option<f32> {
        if self.status != PrecipitationStatus::Reported {
            return None;
        }
        Some(self.value)
    }

    /// Converts the reported amount into `unit`.
    pub fn to_unit(&self, unit: PrecipitationUnit) -> Option<f32> {
        let v = self.value()?;
        Some(match (self.unit, unit) {
            (a, b) if a == b => v,
            (PrecipitationUnit::Millimeters, PrecipitationUnit::Inches) => v / MM_PER_INCH,
            (PrecipitationUnit::Inches, PrecipitationUnit::Millimeters) => v * MM_PER_INCH,
            _ => return None,
        })
    }
}
