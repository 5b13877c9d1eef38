use chumsky::prelude::*;

use crate::parsers::digit_slice;
use crate::traits::TokenParse;
use crate::types::{ReportPart, Time};

/// The report issue time: `ddhhmmZ`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportTimeGroup {
    /// Day of month, hour and minute of issue
    pub time: Time,
}

impl TokenParse for ReportTimeGroup {
    fn parser<'src>() -> impl Parser<'src, &'src str, Self, extra::Default> {
        digit_slice(6, 6)
            .then_ignore(just("Z"))
            .map(|digits: &str| ReportTimeGroup {
                time: Time::from_ddhhmm(digits).unwrap(),
            })
    }
}

impl ReportTimeGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Header {
            return None;
        }
        Self::parse_token(token)
    }

    /// The issue time must be in range and carry a day of month.
    pub fn is_valid(&self) -> bool {
        self.time.is_valid() && self.time.day.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_time() {
        let g = ReportTimeGroup::from_token("041115Z", ReportPart::Header).unwrap();
        assert_eq!(
            g.time,
            Time {
                day: Some(4),
                hour: 11,
                minute: 15
            }
        );
        assert!(g.is_valid());
        assert_eq!(ReportTimeGroup::from_token("041115", ReportPart::Header), None);
        assert_eq!(ReportTimeGroup::from_token("04115Z", ReportPart::Header), None);
        assert_eq!(ReportTimeGroup::from_token("041115Z", ReportPart::Metar), None);
    }

    #[test]
    fn test_out_of_range_time_is_invalid() {
        let g = ReportTimeGroup::from_token("321170Z", ReportPart::Header).unwrap();
        assert!(!g.is_valid());
    }
}
