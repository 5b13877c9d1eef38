use chumsky::prelude::*;

use crate::parsers::digit_slice;
use crate::types::{Precipitation, PrecipitationUnit, ReportPart};

use super::{Combined, Group};

/// Recent rainfall amounts (`RF02.7/010.5`, Australian stations), or the
/// remark markers for missing icing / precipitation data (`ICG MISG`,
/// `PCPN MISG`).
#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RainfallGroup {
    /// What this group announces
    pub kind: RainfallKind,
    /// Rainfall over the last 10 minutes
    pub last_10_minutes: Precipitation,
    /// Rainfall since 09:00 local time
    pub since_9am: Precipitation,
    /// Rainfall over the last 60 minutes
    pub last_60_minutes: Precipitation,
    awaiting_misg: bool,
}

/// The forms a rainfall group can take.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RainfallKind {
    /// Measured rainfall amounts
    Rainfall,
    /// Icing data missing (`ICG MISG`)
    IcingDataMissing,
    /// Precipitation data missing (`PCPN MISG`)
    PrecipitationDataMissing,
}

impl RainfallGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part == ReportPart::Rmk {
            let kind = match token {
                "ICG" => RainfallKind::IcingDataMissing,
                "PCPN" => RainfallKind::PrecipitationDataMissing,
                _ => return None,
            };
            return Some(RainfallGroup {
                kind,
                awaiting_misg: true,
                ..Self::no_amounts(kind)
            });
        }
        if part != ReportPart::Metar {
            return None;
        }
        let fraction = |int_digits| {
            choice((
                digit_slice(int_digits, int_digits)
                    .then(just("."))
                    .then(digit_slice(1, 1))
                    .to_slice(),
                just("/")
                    .repeated()
                    .exactly(int_digits)
                    .then(just("./"))
                    .to_slice(),
            ))
        };
        let parser = just("RF")
            .ignore_then(fraction(2))
            .then_ignore(just("/"))
            .then(fraction(3))
            .then(just("/").ignore_then(fraction(3)).or_not())
            .then_ignore(end());
        let ((last_10, since_9am), last_60) = parser.parse(token).into_result().ok()?;
        Some(RainfallGroup {
            kind: RainfallKind::Rainfall,
            last_10_minutes: Precipitation::from_rainfall_token(last_10)?,
            since_9am: Precipitation::from_rainfall_token(since_9am)?,
            last_60_minutes: Precipitation::from_rainfall_token(last_60.unwrap_or(""))?,
            awaiting_misg: false,
        })
    }

    fn no_amounts(kind: RainfallKind) -> Self {
        RainfallGroup {
            kind,
            last_10_minutes: Precipitation::not_reported(PrecipitationUnit::Millimeters),
            since_9am: Precipitation::not_reported(PrecipitationUnit::Millimeters),
            last_60_minutes: Precipitation::not_reported(PrecipitationUnit::Millimeters),
            awaiting_misg: false,
        }
    }

    pub(crate) fn combine(&self, next: &Group) -> Combined {
        if !self.awaiting_misg {
            return Combined::Not;
        }
        if let Group::PlainText(text) = next
            && text.text == "MISG"
        {
            let mut merged = *self;
            merged.awaiting_misg = false;
            return Combined::Replaced(Group::Rainfall(merged));
        }
        Combined::Invalidated
    }

    /// A dangling `ICG`/`PCPN` without its `MISG` is invalid.
    pub fn is_valid(&self) -> bool {
        !self.awaiting_misg
    }
}
