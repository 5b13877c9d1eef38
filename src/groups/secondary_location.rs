use crate::types::{ReportPart, Runway};

use super::{Combined, Group};

/// Wind shear in the lower layers, reported for a runway.
///
/// This group is assembled from several tokens: `WS ALL RWY`, `WS R32` or
/// `WS RWY27C`. A bare `WS` (or `WS ALL`) is speculative; when the
/// continuation does not fit, the combiner demotes what was collected so
/// far back to plain text.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecondaryLocationGroup {
    /// The runway the wind shear applies to, once complete
    pub runway: Option<Runway>,
    stage: Stage,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Stage {
    Ws,
    WsAll,
    Complete,
}

impl SecondaryLocationGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part == ReportPart::Metar && token == "WS" {
            return Some(SecondaryLocationGroup {
                runway: None,
                stage: Stage::Ws,
            });
        }
        None
    }

    pub(crate) fn combine(&self, next: &Group) -> Combined {
        let Group::PlainText(next) = next else {
            return if self.stage == Stage::Complete {
                Combined::Not
            } else {
                Combined::Invalidated
            };
        };
        let mut merged = *self;
        match self.stage {
            Stage::Complete => Combined::Not,
            Stage::Ws => {
                if next.text == "ALL" {
                    merged.stage = Stage::WsAll;
                    return Combined::Replaced(Group::SecondaryLocation(merged));
                }
                if let Some(runway) = Runway::from_token(&next.text, true) {
                    merged.stage = Stage::Complete;
                    merged.runway = Some(runway);
                    return Combined::Replaced(Group::SecondaryLocation(merged));
                }
                Combined::Invalidated
            }
            Stage::WsAll => {
                if next.text == "RWY" {
                    merged.stage = Stage::Complete;
                    merged.runway = Some(Runway::all_runways());
                    return Combined::Replaced(Group::SecondaryLocation(merged));
                }
                Combined::Invalidated
            }
        }
    }

    /// Whether the multi-token form has been fully assembled.
    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Complete
    }

    /// Incomplete compositions are invalid, as is an inconsistent runway.
    pub fn is_valid(&self) -> bool {
        if self.stage != Stage::Complete {
            return false;
        }
        self.runway.is_none_or(|runway| runway.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::PlainTextGroup;
    use crate::types::RunwayDesignator;

    fn plain(text: &str) -> Group {
        Group::PlainText(PlainTextGroup::new(text))
    }

    fn merged(result: Combined) -> SecondaryLocationGroup {
        match result {
            Combined::Replaced(Group::SecondaryLocation(g)) => g,
            other => panic!("expected a combined group, got {other:?}"),
        }
    }

    #[test]
    fn test_ws_all_rwy() {
        let ws = SecondaryLocationGroup::from_token("WS", ReportPart::Metar).unwrap();
        assert!(!ws.is_valid());
        let ws_all = merged(ws.combine(&plain("ALL")));
        assert!(!ws_all.is_valid());
        let complete = merged(ws_all.combine(&plain("RWY")));
        assert!(complete.is_complete() && complete.is_valid());
        assert!(complete.runway.unwrap().is_all_runways());
    }

    #[test]
    fn test_ws_runway() {
        let ws = SecondaryLocationGroup::from_token("WS", ReportPart::Metar).unwrap();
        let complete = merged(ws.combine(&plain("R27C")));
        let runway = complete.runway.unwrap();
        assert_eq!(runway.number, 27);
        assert_eq!(runway.designator, RunwayDesignator::Center);
        // The RWY prefix form is accepted too.
        let ws = SecondaryLocationGroup::from_token("WS", ReportPart::Metar).unwrap();
        assert!(merged(ws.combine(&plain("RWY32"))).is_valid());
    }

    #[test]
    fn test_mismatch_invalidates() {
        let ws = SecondaryLocationGroup::from_token("WS", ReportPart::Metar).unwrap();
        assert_eq!(ws.combine(&plain("FOO")), Combined::Invalidated);
        let ws_all = merged(ws.combine(&plain("ALL")));
        assert_eq!(ws_all.combine(&plain("R32")), Combined::Invalidated);
    }

    #[test]
    fn test_only_metar_body() {
        assert_eq!(SecondaryLocationGroup::from_token("WS", ReportPart::Taf), None);
        assert_eq!(SecondaryLocationGroup::from_token("WS", ReportPart::Rmk), None);
    }
}
