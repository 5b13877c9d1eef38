use chumsky::prelude::*;

use crate::parsers::{digit_slice, slashes};
use crate::types::{ReportPart, Temperature};

use super::{Combined, Group};

/// 6-hourly (`1dddd` max / `2dddd` min) or 24-hourly (`4ddddddddd`)
/// temperature extremes reported in remarks.
///
/// The two 6-hourly halves arrive as separate tokens and combine into a
/// single group carrying both extremes.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinMaxTemperatureGroup {
    /// The observation period the extremes cover
    pub period: ObservationPeriod,
    /// The minimum temperature, when reported
    pub minimum: Temperature,
    /// The maximum temperature, when reported
    pub maximum: Temperature,
}

/// Observation period of a temperature extreme remark.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObservationPeriod {
    /// Last 6 hours
    Hours6,
    /// Last 24 hours
    Hours24,
}

impl MinMaxTemperatureGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Rmk {
            return None;
        }
        let value = || one_of("01").then(digit_slice(3, 3)).to_slice();
        // 24-hourly: both extremes in one token.
        let full_day = just("4")
            .ignore_then(value())
            .then(value())
            .then_ignore(end());
        if let Ok((max, min)) = full_day.parse(token).into_result() {
            return Some(MinMaxTemperatureGroup {
                period: ObservationPeriod::Hours24,
                minimum: Temperature::from_remark_token(min)?,
                maximum: Temperature::from_remark_token(max)?,
            });
        }
        // 6-hourly: one half at a time.
        let half = one_of("12")
            .then(choice((value(), slashes(4))))
            .to_slice()
            .then_ignore(end());
        let slice = half.parse(token).into_result().ok()?;
        let value = &slice[1..];
        let mut result = MinMaxTemperatureGroup {
            period: ObservationPeriod::Hours6,
            minimum: Temperature::not_reported(),
            maximum: Temperature::not_reported(),
        };
        if value == "////" {
            return Some(result);
        }
        let temperature = Temperature::from_remark_token(value)?;
        match slice.as_bytes()[0] {
            b'1' => result.maximum = temperature,
            _ => result.minimum = temperature,
        }
        Some(result)
    }

    pub(crate) fn combine(&self, next: &Group) -> Combined {
        let Group::MinMaxTemperature(next) = next else {
            return Combined::Not;
        };
        if self.period != ObservationPeriod::Hours6 || next.period != ObservationPeriod::Hours6 {
            return Combined::Not;
        }
        // Each half may be contributed once.
        if self.minimum.value().is_some() && next.minimum.value().is_some() {
            return Combined::Not;
        }
        if self.maximum.value().is_some() && next.maximum.value().is_some() {
            return Combined::Not;
        }
        let mut merged = *self;
        if merged.minimum.value().is_none() && next.minimum.value().is_some() {
            merged.minimum = next.minimum;
        }
        if merged.maximum.value().is_none() && next.maximum.value().is_some() {
            merged.maximum = next.maximum;
        }
        Combined::Replaced(Group::MinMaxTemperature(merged))
    }
}
