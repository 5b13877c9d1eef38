use crate::parsers::str_to_uint;

const HPA_PER_INHG: f32 = 33.8639;
const HPA_PER_MMHG: f32 = 1.3332;
const MM_PER_INCH: f32 = 25.4;

/// An atmospheric pressure with its reporting unit.
#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pressure {
    /// The reported pressure, [`None`] when slashed out
    pub value: Option<f32>,
    /// The unit the pressure was reported in
    pub unit: PressureUnit,
}

/// Pressure units, convertible via [`Pressure::to_unit`].
#[derive(PartialEq, Eq, Copy, Clone, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureUnit {
    /// Hectopascals (`Q` groups)
    #[display("hPa")]
    Hectopascals,
    /// Inches of mercury (`A` groups)
    #[display("inHg")]
    InchesOfMercury,
    /// Millimeters of mercury (`QFE` groups)
    #[display("mmHg")]
    MillimetersOfMercury,
}

impl Pressure {
    fn not_reported(unit: PressureUnit) -> Self {
        Pressure { value: None, unit }
    }

    fn reported(value: f32, unit: PressureUnit) -> Self {
        Pressure {
            value: Some(value),
            unit,
        }
    }

    /// Decodes a QNH body group: `Q` or `A` plus 4 digits or `////`.
    ///
    /// `A` values carry hundredths of an inch of mercury, `Q` values whole
    /// hectopascals.
    pub fn from_token(s: &str) -> Option<Self> {
        if s.len() != 5 {
            return None;
        }
        match (s.as_bytes()[0], &s[1..]) {
            (b'A', "////") => Some(Self::not_reported(PressureUnit::InchesOfMercury)),
            (b'Q', "////") => Some(Self::not_reported(PressureUnit::Hectopascals)),
            (b'A', _) => {
                let v = str_to_uint(s, 1, 4)?;
                Some(Self::reported(
                    v as f32 * 0.01,
                    PressureUnit::InchesOfMercury,
                ))
            }
            (b'Q', _) => {
                let v = str_to_uint(s, 1, 4)?;
                Some(Self::reported(v as f32, PressureUnit::Hectopascals))
            }
            _ => None,
        }
    }

    /// Decodes the TAF forecast lowest QNH group `QNHddddINS`.
    pub fn from_forecast_token(s: &str) -> Option<Self> {
        let digits = s.strip_prefix("QNH")?.strip_suffix("INS")?;
        if digits.len() != 4 {
            return None;
        }
        let v = str_to_uint(digits, 0, 4)?;
        Some(Self::reported(
            v as f32 * 0.01,
            PressureUnit::InchesOfMercury,
        ))
    }

    /// Decodes the remark sea-level pressure group `SLPddd`.
    ///
    /// The value carries tenths of a hectopascal with the thousands digit
    /// dropped: values of 500 and above rehydrate against a 900 hPa base,
    /// lower values against 1000 hPa (`SLP982` is 998.2 hPa, `SLP015` is
    /// 1001.5 hPa).
    pub fn from_slp_token(s: &str) -> Option<Self> {
        let digits = s.strip_prefix("SLP")?;
        if digits.len() != 3 {
            return None;
        }
        let v = str_to_uint(digits, 0, 3)?;
        let base = if v < 500 { 1000.0 } else { 900.0 };
        Some(Self::reported(
            v as f32 * 0.1 + base,
            PressureUnit::Hectopascals,
        ))
    }

    /// Decodes the remark actual-pressure group `QFEddd` or `QFEddd/dddd`.
    ///
    /// The leading value is millimeters of mercury; the optional
    /// hectopascal value after the slash is validated but dropped.
    pub fn from_qfe_token(s: &str) -> Option<Self> {
        let body = s.strip_prefix("QFE")?;
        let mm = match body.len() {
            3 => str_to_uint(body, 0, 3)?,
            8 => {
                if body.as_bytes()[3] != b'/' {
                    return None;
                }
                str_to_uint(body, 4, 4)?;
                str_to_uint(body, 0, 3)?
            }
            _ => return None,
        };
        Some(Self::reported(
            mm as f32,
            PressureUnit::MillimetersOfMercury,
        ))
    }

    /// Decodes the 3-digit pressure difference of a tendency group, in
    /// tenths of a hectopascal, or `///`.
    pub fn from_tendency_token(s: &str) -> Option<Self> {
        if s.len() != 3 {
            return None;
        }
        if s == "///" {
            return Some(Self::not_reported(PressureUnit::Hectopascals));
        }
        let v = str_to_uint(s, 0, 3)?;
        Some(Self::reported(v as f32 * 0.1, PressureUnit::Hectopascals))
    }

    /// Converts the reported value into `unit`.
    pub fn to_unit(&self, unit: PressureUnit) -> Option<f32> {
        let v = self.value?;
        use PressureUnit::*;
        Some(match (self.unit, unit) {
            (a, b) if a == b => v,
            (Hectopascals, InchesOfMercury) => v / HPA_PER_INHG,
            (Hectopascals, MillimetersOfMercury) => v / HPA_PER_MMHG,
            (InchesOfMercury, Hectopascals) => v * HPA_PER_INHG,
            (InchesOfMercury, MillimetersOfMercury) => v * MM_PER_INCH,
            (MillimetersOfMercury, Hectopascals) => v * HPA_PER_MMHG,
            (MillimetersOfMercury, InchesOfMercury) => v / MM_PER_INCH,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qnh() {
        let p = Pressure::from_token("Q1011").unwrap();
        assert_eq!(p.value, Some(1011.0));
        assert_eq!(p.unit, PressureUnit::Hectopascals);
        let p = Pressure::from_token("A2992").unwrap();
        assert!((p.value.unwrap() - 29.92).abs() < 1e-4);
        assert_eq!(p.unit, PressureUnit::InchesOfMercury);
        assert_eq!(Pressure::from_token("Q////").unwrap().value, None);
        assert_eq!(Pressure::from_token("Q101"), None);
        assert_eq!(Pressure::from_token("B1011"), None);
    }

    #[test]
    fn test_forecast() {
        let p = Pressure::from_forecast_token("QNH2979INS").unwrap();
        assert!((p.value.unwrap() - 29.79).abs() < 1e-4);
        assert_eq!(Pressure::from_forecast_token("QNH297INS"), None);
    }

    #[test]
    fn test_slp() {
        assert!((Pressure::from_slp_token("SLP982").unwrap().value.unwrap() - 998.2).abs() < 1e-4);
        assert!((Pressure::from_slp_token("SLP015").unwrap().value.unwrap() - 1001.5).abs() < 1e-4);
        assert!((Pressure::from_slp_token("SLP221").unwrap().value.unwrap() - 1022.1).abs() < 1e-4);
        assert_eq!(Pressure::from_slp_token("SLP22"), None);
    }

    #[test]
    fn test_qfe() {
        let p = Pressure::from_qfe_token("QFE750").unwrap();
        assert_eq!(p.value, Some(750.0));
        assert_eq!(p.unit, PressureUnit::MillimetersOfMercury);
        assert_eq!(Pressure::from_qfe_token("QFE761/1015").unwrap().value, Some(761.0));
        assert_eq!(Pressure::from_qfe_token("QFE761/101"), None);
    }

    #[test]
    fn test_tendency() {
        assert!((Pressure::from_tendency_token("032").unwrap().value.unwrap() - 3.2).abs() < 1e-4);
        assert_eq!(Pressure::from_tendency_token("///").unwrap().value, None);
    }

    #[test]
    fn test_conversions() {
        let p = Pressure::from_token("A2992").unwrap();
        let hpa = p.to_unit(PressureUnit::Hectopascals).unwrap();
        assert!((hpa - 1013.21).abs() < 0.1);
        let mm = p.to_unit(PressureUnit::MillimetersOfMercury).unwrap();
        assert!((mm - 759.97).abs() < 0.1);
    }
}
