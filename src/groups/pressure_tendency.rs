use chumsky::prelude::*;

use crate::parsers::{digit_slice, slashes};
use crate::types::{Pressure, ReportPart};

/// The 3-hourly pressure tendency remark `5appp` (WMO table 0200).
#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressureTendencyGroup {
    /// The characteristic of the pressure change
    pub tendency: PressureTendency,
    /// Absolute pressure change over the last three hours
    pub difference: Pressure,
}

/// Characteristic of the 3-hourly pressure change.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureTendency {
    /// Characteristic slashed out
    NotReported,
    /// Code 0: increasing, then decreasing
    IncreasingThenDecreasing,
    /// Code 1: increasing more slowly
    IncreasingMoreSlowly,
    /// Code 2: increasing
    Increasing,
    /// Code 3: increasing more rapidly
    IncreasingMoreRapidly,
    /// Code 4: steady
    Steady,
    /// Code 5: decreasing, then increasing
    DecreasingThenIncreasing,
    /// Code 6: decreasing more slowly
    DecreasingMoreSlowly,
    /// Code 7: decreasing
    Decreasing,
    /// Code 8: decreasing more rapidly
    DecreasingMoreRapidly,
}

/// Where the pressure now stands relative to three hours ago.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureTrend {
    /// Trend not reported
    NotReported,
    /// Higher than three hours ago
    Higher,
    /// Higher or the same
    HigherOrSame,
    /// Same as three hours ago
    Same,
    /// Lower or the same
    LowerOrSame,
    /// Lower than three hours ago
    Lower,
}

impl PressureTendencyGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Rmk {
            return None;
        }
        let parser = just("5")
            .ignore_then(one_of("012345678/"))
            .then(choice((digit_slice(3, 3), slashes(3))))
            .then_ignore(end());
        let (tendency, difference) = parser.parse(token).into_result().ok()?;
        Some(PressureTendencyGroup {
            tendency: Self::tendency_from(tendency)?,
            difference: Pressure::from_tendency_token(difference)?,
        })
    }

    fn tendency_from(code: char) -> Option<PressureTendency> {
        Some(match code {
            '0' => PressureTendency::IncreasingThenDecreasing,
            '1' => PressureTendency::IncreasingMoreSlowly,
            '2' => PressureTendency::Increasing,
            '3' => PressureTendency::IncreasingMoreRapidly,
            '4' => PressureTendency::Steady,
            '5' => PressureTendency::DecreasingThenIncreasing,
            '6' => PressureTendency::DecreasingMoreSlowly,
            '7' => PressureTendency::Decreasing,
            '8' => PressureTendency::DecreasingMoreRapidly,
            '/' => PressureTendency::NotReported,
            _ => return None,
        })
    }

    /// The qualitative trend the characteristic implies.
    pub fn trend(tendency: PressureTendency) -> PressureTrend {
        match tendency {
            PressureTendency::IncreasingMoreSlowly
            | PressureTendency::Increasing
            | PressureTendency::IncreasingMoreRapidly => PressureTrend::Higher,
            PressureTendency::IncreasingThenDecreasing => PressureTrend::HigherOrSame,
            PressureTendency::Steady => PressureTrend::Same,
            PressureTendency::DecreasingThenIncreasing => PressureTrend::LowerOrSame,
            PressureTendency::DecreasingMoreSlowly
            | PressureTendency::Decreasing
            | PressureTendency::DecreasingMoreRapidly => PressureTrend::Lower,
            PressureTendency::NotReported => PressureTrend::NotReported,
        }
    }
}
