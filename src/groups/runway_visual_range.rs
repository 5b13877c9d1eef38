use chumsky::prelude::*;

use crate::parsers::{digit_slice, slashes};
use crate::types::{Distance, ReportPart, Runway};

/// Runway visual range: `R06/0600`, `R16L/M0050V0600FT/U`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunwayVisualRangeGroup {
    /// The runway the range applies to
    pub runway: Runway,
    /// The visual range, or the lower bound of a variable range
    pub visual_range: Distance,
    /// The upper bound when the range is variable (`V` part)
    pub variable_range: Option<Distance>,
    /// The reported range tendency
    pub trend: RvrTrend,
}

/// Tendency suffix of a runway visual range.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RvrTrend {
    /// No tendency reported
    None,
    /// Tendency slashed out
    NotReported,
    /// Increasing (`U`)
    Upward,
    /// No distinct change (`N`)
    Neutral,
    /// Decreasing (`D`)
    Downward,
}

impl RunwayVisualRangeGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Metar {
            return None;
        }
        let runway = just("R")
            .then(digit_slice(2, 2))
            .then(one_of("RCL").or_not())
            .to_slice();
        let value = || {
            choice((
                slashes(4),
                one_of("PM").or_not().then(digit_slice(4, 4)).to_slice(),
            ))
        };
        let variable = just("V").ignore_then(value());
        let feet = just("FT").then(just("/").or_not()).map(|_| ());
        let parser = group((
            runway,
            just("/").map(|_| ()),
            value(),
            variable.or_not(),
            feet.or_not(),
            one_of("UND/").or_not(),
        ))
        .then_ignore(end());
        let (runway, (), value, variable, feet, trend) = parser.parse(token).into_result().ok()?;

        let unit_feet = feet.is_some();
        let variable_range = match variable {
            Some(upper) => Some(Distance::from_rvr(upper, unit_feet)?),
            None => None,
        };
        Some(RunwayVisualRangeGroup {
            runway: Runway::from_token(runway, false)?,
            visual_range: Distance::from_rvr(value, unit_feet)?,
            variable_range,
            trend: match trend {
                None => RvrTrend::None,
                Some('/') => RvrTrend::NotReported,
                Some('U') => RvrTrend::Upward,
                Some('N') => RvrTrend::Neutral,
                Some('D') => RvrTrend::Downward,
                Some(_) => return None,
            },
        })
    }

    /// Whether the range varies between two bounds.
    pub fn is_variable(&self) -> bool {
        self.variable_range.is_some()
    }

    /// Runway and both range values must be consistent.
    pub fn is_valid(&self) -> bool {
        self.runway.is_valid()
            && self.visual_range.is_valid()
            && self.variable_range.is_none_or(|range| range.is_valid())
    }
}
