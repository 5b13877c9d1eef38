use crate::parsers::str_to_uint;

/// A wind or gust speed with its reporting unit.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speed {
    /// The reported speed, [`None`] when slashed out
    pub value: Option<u32>,
    /// The unit the speed was reported in
    pub unit: SpeedUnit,
}

/// Speed units used by wind groups, convertible via [`Speed::to_unit`].
#[derive(PartialEq, Eq, Copy, Clone, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedUnit {
    /// Nautical miles per hour (`KT`)
    #[display("KT")]
    Knots,
    /// Meters per second (`MPS`)
    #[display("MPS")]
    MetersPerSecond,
    /// Kilometers per hour (`KMH`)
    #[display("KMH")]
    KilometersPerHour,
    /// Statute miles per hour
    #[display("MPH")]
    MilesPerHour,
}

const KNOTS_TO_MPS: f32 = 0.514444;
const KNOTS_TO_KMH: f32 = 1.852;
const KNOTS_TO_MPH: f32 = 1.150779;

impl Speed {
    /// Decodes a 2- or 3-digit speed (no leading zero on 3 digits), or
    /// `//` / empty as not reported.
    pub fn from_token(s: &str, unit: SpeedUnit) -> Option<Self> {
        if s.is_empty() || s == "//" {
            return Some(Speed { value: None, unit });
        }
        if s.len() != 2 && s.len() != 3 {
            return None;
        }
        if s.len() == 3 && s.starts_with('0') {
            return None;
        }
        let value = str_to_uint(s, 0, s.len())?;
        Some(Speed {
            value: Some(value),
            unit,
        })
    }

    /// Decodes a unit suffix as it appears in wind groups.
    pub fn unit_from_token(s: &str) -> Option<SpeedUnit> {
        match s {
            "KT" => Some(SpeedUnit::Knots),
            "MPS" => Some(SpeedUnit::MetersPerSecond),
            "KMH" => Some(SpeedUnit::KilometersPerHour),
            _ => None,
        }
    }

    /// Converts the reported value into `unit`.
    pub fn to_unit(&self, unit: SpeedUnit) -> Option<f32> {
        let value = self.value? as f32;
        let knots = match self.unit {
            SpeedUnit::Knots => value,
            SpeedUnit::MetersPerSecond => value / KNOTS_TO_MPS,
            SpeedUnit::KilometersPerHour => value / KNOTS_TO_KMH,
            SpeedUnit::MilesPerHour => value / KNOTS_TO_MPH,
        };
        Some(match unit {
            SpeedUnit::Knots => knots,
            SpeedUnit::MetersPerSecond => knots * KNOTS_TO_MPS,
            SpeedUnit::KilometersPerHour => knots * KNOTS_TO_KMH,
            SpeedUnit::MilesPerHour => knots * KNOTS_TO_MPH,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed() {
        assert_eq!(
            Speed::from_token("05", SpeedUnit::Knots).unwrap().value,
            Some(5)
        );
        assert_eq!(
            Speed::from_token("125", SpeedUnit::Knots).unwrap().value,
            Some(125)
        );
        assert_eq!(Speed::from_token("//", SpeedUnit::Knots).unwrap().value, None);
        assert_eq!(Speed::from_token("025", SpeedUnit::Knots), None);
        assert_eq!(Speed::from_token("5", SpeedUnit::Knots), None);
        assert_eq!(Speed::from_token("1250", SpeedUnit::Knots), None);
    }

    #[test]
    fn test_units() {
        assert_eq!(Speed::unit_from_token("KT"), Some(SpeedUnit::Knots));
        assert_eq!(Speed::unit_from_token("MPS"), Some(SpeedUnit::MetersPerSecond));
        assert_eq!(Speed::unit_from_token("KMH"), Some(SpeedUnit::KilometersPerHour));
        assert_eq!(Speed::unit_from_token("MPH"), None);
    }

    #[test]
    fn test_conversions() {
        let ten_kt = Speed::from_token("10", SpeedUnit::Knots).unwrap();
        assert!((ten_kt.to_unit(SpeedUnit::MetersPerSecond).unwrap() - 5.14444).abs() < 1e-4);
        assert!((ten_kt.to_unit(SpeedUnit::KilometersPerHour).unwrap() - 18.52).abs() < 1e-4);
        assert!((ten_kt.to_unit(SpeedUnit::MilesPerHour).unwrap() - 11.50779).abs() < 1e-4);
        let mps = Speed::from_token("10", SpeedUnit::MetersPerSecond).unwrap();
        assert!((mps.to_unit(SpeedUnit::Knots).unwrap() - 19.4384).abs() < 1e-3);
    }
}
