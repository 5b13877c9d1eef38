use chumsky::prelude::*;

use crate::parsers::digit_slice;
use crate::types::{ReportPart, Temperature};

/// Air temperature and dew point.
///
/// Covers the body form `25/18` (whole degrees, `M` for freezing, `//`
/// when missing) and the remark form `T00560028` (tenths of a degree).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureGroup {
    /// Air temperature
    pub air: Temperature,
    /// Dew point
    pub dew_point: Temperature,
}

impl TemperatureGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        match part {
            ReportPart::Metar => Self::parse_body(token),
            ReportPart::Rmk => Self::parse_remark(token),
            _ => None,
        }
    }

    fn parse_body(token: &str) -> Option<Self> {
        let value = || {
            choice((
                just("M").or_not().then(digit_slice(2, 2)).to_slice(),
                just("//").to_slice(),
            ))
        };
        let parser = value()
            .then_ignore(just("/"))
            .then(value().or_not())
            .then_ignore(end());
        let (air, dew_point) = parser.parse(token).into_result().ok()?;
        Some(TemperatureGroup {
            air: Temperature::from_token(air)?,
            dew_point: match dew_point {
                Some(dew_point) => Temperature::from_token(dew_point)?,
                None => Temperature::not_reported(),
            },
        })
    }

    fn parse_remark(token: &str) -> Option<Self> {
        let value = || one_of("01").then(digit_slice(3, 3)).to_slice();
        let parser = just("T")
            .ignore_then(value())
            .then(value().or_not())
            .then_ignore(end());
        let (air, dew_point) = parser.parse(token).into_result().ok()?;
        Some(TemperatureGroup {
            air: Temperature::from_remark_token(air)?,
            dew_point: match dew_point {
                Some(dew_point) => Temperature::from_remark_token(dew_point)?,
                None => Temperature::not_reported(),
            },
        })
    }

    /// The dew point cannot exceed the air temperature, and a freezing
    /// `M00` cannot pair with a non-freezing `00` dew point.
    pub fn is_valid(&self) -> bool {
        let (Some(air), Some(dew_point)) = (self.air.value(), self.dew_point.value()) else {
            return true;
        };
        if air == 0.0 && dew_point == 0.0 && self.air.freezing && !self.dew_point.freezing {
            return false;
        }
        air >= dew_point
    }
}
