use chumsky::prelude::*;

use crate::parsers::digit_slice;
use crate::types::{Precipitation, PrecipitationUnit, ReportPart, Time};

use super::{Combined, Group};

/// A precipitation amount reported in remarks.
///
/// The group dispatches on its prefix; the amount that follows is scaled
/// by a prefix-specific factor. The `6` prefix is ambiguous: whether it
/// covers 3 or 6 hours depends on the report issue hour, which is why
/// parsing consults the report time collected so far.
#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecipitationGroup {
    /// What the amount covers
    pub kind: PrecipitationKind,
    /// The amount itself; for `SNINCR` the snow depth on the ground
    pub amount: Precipitation,
    /// For `SNINCR`, the snow increase over the last hour
    pub recent: Precipitation,
    awaiting_fraction: bool,
}

/// The reported precipitation measurements.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrecipitationKind {
    /// `P`: total precipitation over the last hour
    TotalPrecipitationHourly,
    /// `PP`: precipitation accumulated since the last report
    PrecipitationSinceLastReport,
    /// `4/`: snow depth on the ground
    SnowDepthOnGround,
    /// `6` issued outside the fixed reporting cycles
    FrozenPrecip3Or6Hourly,
    /// `6` issued at a 3-hourly reporting hour
    FrozenPrecip3Hourly,
    /// `6` issued at a 6-hourly reporting hour
    FrozenPrecip6Hourly,
    /// `7`: frozen precipitation over the last 24 hours
    FrozenPrecip24Hourly,
    /// `931`: snowfall over the last 6 hours
    Snow6Hourly,
    /// `933`: water equivalent of snow on the ground
    WaterEquivalentOfSnowOnGround,
    /// `I1`: ice accretion over the last hour
    IceAccretionLastHour,
    /// `I3`: ice accretion over the last 3 hours
    IceAccretionLast3Hours,
    /// `I6`: ice accretion over the last 6 hours
    IceAccretionLast6Hours,
    /// `SNINCR`: snow increasing rapidly
    SnowIncreasingRapidly,
}

impl PrecipitationGroup {
    pub(crate) fn from_token(
        token: &str,
        part: ReportPart,
        report_time: Option<Time>,
    ) -> Option<Self> {
        if part != ReportPart::Rmk {
            return None;
        }
        if token == "SNINCR" {
            return Some(PrecipitationGroup {
                kind: PrecipitationKind::SnowIncreasingRapidly,
                amount: Precipitation::not_reported(PrecipitationUnit::Inches),
                recent: Precipitation::not_reported(PrecipitationUnit::Inches),
                awaiting_fraction: true,
            });
        }
        // Four-digit amounts.
        for (prefix, kind) in [
            ("PP", PrecipitationKind::PrecipitationSinceLastReport),
            ("P", PrecipitationKind::TotalPrecipitationHourly),
            ("6", Self::frozen_precip_kind(report_time)),
            ("7", PrecipitationKind::FrozenPrecip24Hourly),
        ] {
            if let Some(value) = token.strip_prefix(prefix)
                && Self::is_amount(value, 4)
            {
                return Self::with_amount(kind, value);
            }
        }
        // Three-digit amounts.
        for (prefix, kind) in [
            ("4/", PrecipitationKind::SnowDepthOnGround),
            ("931", PrecipitationKind::Snow6Hourly),
            ("933", PrecipitationKind::WaterEquivalentOfSnowOnGround),
            ("I1", PrecipitationKind::IceAccretionLastHour),
            ("I3", PrecipitationKind::IceAccretionLast3Hours),
            ("I6", PrecipitationKind::IceAccretionLast6Hours),
        ] {
            if let Some(value) = token.strip_prefix(prefix)
                && Self::is_amount(value, 3)
            {
                return Self::with_amount(kind, value);
            }
        }
        None
    }

    fn is_amount(value: &str, digits: usize) -> bool {
        value.len() == digits
            && (value.bytes().all(|b| b.is_ascii_digit()) || value.bytes().all(|b| b == b'/'))
    }

    fn with_amount(kind: PrecipitationKind, value: &str) -> Option<Self> {
        Some(PrecipitationGroup {
            kind,
            amount: Precipitation::from_remark_token(value, Self::factor(kind), true)?,
            recent: Precipitation::not_reported(PrecipitationUnit::Inches),
            awaiting_fraction: false,
        })
    }

    // The issue hour decides whether a `6` group covers 3 or 6 hours;
    // outside the fixed cycles it stays ambiguous.
    fn frozen_precip_kind(report_time: Option<Time>) -> PrecipitationKind {
        match report_time {
            Some(time) if time.is_3_hourly_report_time() => PrecipitationKind::FrozenPrecip3Hourly,
            Some(time) if time.is_6_hourly_report_time() => PrecipitationKind::FrozenPrecip6Hourly,
            _ => PrecipitationKind::FrozenPrecip3Or6Hourly,
        }
    }

    fn factor(kind: PrecipitationKind) -> f32 {
        match kind {
            PrecipitationKind::SnowDepthOnGround => 1.0,
            PrecipitationKind::Snow6Hourly
            | PrecipitationKind::WaterEquivalentOfSnowOnGround => 0.1,
            _ => 0.01,
        }
    }

    pub(crate) fn combine(&self, next: &Group) -> Combined {
        if !self.awaiting_fraction {
            return Combined::Not;
        }
        if let Group::PlainText(text) = next
            && let Some((recent, total)) = Self::parse_fraction(&text.text)
        {
            let mut merged = *self;
            merged.recent = recent;
            merged.amount = total;
            merged.awaiting_fraction = false;
            return Combined::Replaced(Group::Precipitation(merged));
        }
        Combined::Invalidated
    }

    // The `m/n` continuation of SNINCR: inches gained over the last hour
    // and depth on the ground.
    fn parse_fraction(token: &str) -> Option<(Precipitation, Precipitation)> {
        let parser = digit_slice(1, 3)
            .then_ignore(just("/"))
            .then(digit_slice(1, 3))
            .then_ignore(end());
        let (recent, total) = parser.parse(token).into_result().ok()?;
        let inches = |digits: &str| {
            Precipitation::from_remark_token(
                &format!("{:0>3}", digits),
                Self::factor(PrecipitationKind::SnowDepthOnGround),
                false,
            )
        };
        Some((inches(recent)?, inches(total)?))
    }

    /// A dangling `SNINCR` without its fraction is invalid.
    pub fn is_valid(&self) -> bool {
        !self.awaiting_fraction
    }
}
