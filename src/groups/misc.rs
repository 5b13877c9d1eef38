use chumsky::prelude::*;

use crate::parsers::uint;
use crate::types::ReportPart;

/// Odds and ends: the corrected-observation marker of a METAR body and
/// the sunshine duration remark.
#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MiscGroup {
    /// What the group reports
    pub kind: MiscKind,
    /// The decoded value (correction ordinal or minutes of sunshine)
    pub value: u32,
}

/// What a misc group reports.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MiscKind {
    /// `98ddd` remark: sunshine duration in minutes
    SunshineDurationMinutes,
    /// `CCa` body token: the observation is the a-th correction
    CorrectedWeatherObservation,
}

impl MiscGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part == ReportPart::Metar {
            let parser = just::<_, _, extra::Default>("CC")
                .ignore_then(any().filter(char::is_ascii_uppercase))
                .then_ignore(end());
            if let Ok(letter) = parser.parse(token).into_result() {
                return Some(MiscGroup {
                    kind: MiscKind::CorrectedWeatherObservation,
                    value: u32::from(letter as u8 - b'A') + 1,
                });
            }
        }
        if part == ReportPart::Rmk {
            let parser = just("98").ignore_then(uint(3)).then_ignore(end());
            if let Ok(minutes) = parser.parse(token).into_result() {
                return Some(MiscGroup {
                    kind: MiscKind::SunshineDurationMinutes,
                    value: minutes,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrected_observation() {
        let g = MiscGroup::from_token("CCB", ReportPart::Metar).unwrap();
        assert_eq!(g.kind, MiscKind::CorrectedWeatherObservation);
        assert_eq!(g.value, 2);
        assert_eq!(MiscGroup::from_token("CCB", ReportPart::Rmk), None);
        assert_eq!(MiscGroup::from_token("CC1", ReportPart::Metar), None);
    }

    #[test]
    fn test_sunshine_duration() {
        let g = MiscGroup::from_token("98096", ReportPart::Rmk).unwrap();
        assert_eq!(g.kind, MiscKind::SunshineDurationMinutes);
        assert_eq!(g.value, 96);
        assert_eq!(MiscGroup::from_token("98096", ReportPart::Metar), None);
        assert_eq!(MiscGroup::from_token("9809", ReportPart::Rmk), None);
    }
}
