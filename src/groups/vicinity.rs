use crate::types::{Cardinal, ReportPart};

use super::{Combined, Group};

/// A phenomenon observed from the station rather than at it:
/// `CB DSNT N MOV E`, `VIRGA SW`, `ACSL NE-SE`.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VicinityGroup {
    /// The observed phenomenon
    pub phenomenon: VicinityPhenomenon,
    /// More than 10 SM away (`DSNT`)
    pub distant: bool,
    /// Within 5 to 10 SM (`VC`)
    pub in_vicinity: bool,
    /// Sectors the phenomenon is observed in
    pub directions: Vec<Cardinal>,
    /// All quadrants (`ALQDS`)
    pub all_quadrants: bool,
    /// Directly overhead (`OVHD`)
    pub overhead: bool,
    /// The direction the phenomenon is moving towards (`MOV` part)
    pub moving_to: Option<Cardinal>,
    awaiting_moving_direction: bool,
}

/// Phenomena reported in the vicinity remarks.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VicinityPhenomenon {
    /// Cumulonimbus (`CB`)
    Cumulonimbus,
    /// Cumulonimbus mammatus (`CBMAM`)
    CumulonimbusMammatus,
    /// Towering cumulus (`TCU`)
    ToweringCumulus,
    /// Altocumulus castellanus (`ACC`)
    AltocumulusCastellanus,
    /// Standing lenticular altocumulus (`ACSL`)
    StandingLenticularAltocumulus,
    /// Standing lenticular cirrocumulus (`CCSL`)
    StandingLenticularCirrocumulus,
    /// Standing lenticular stratocumulus (`SCSL`)
    StandingLenticularStratocumulus,
    /// Virga (`VIRGA`)
    Virga,
}

impl VicinityGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Rmk {
            return None;
        }
        let phenomenon = match token {
            "CB" => VicinityPhenomenon::Cumulonimbus,
            "CBMAM" => VicinityPhenomenon::CumulonimbusMammatus,
            "TCU" => VicinityPhenomenon::ToweringCumulus,
            "ACC" => VicinityPhenomenon::AltocumulusCastellanus,
            "ACSL" => VicinityPhenomenon::StandingLenticularAltocumulus,
            "CCSL" => VicinityPhenomenon::StandingLenticularCirrocumulus,
            "SCSL" => VicinityPhenomenon::StandingLenticularStratocumulus,
            "VIRGA" => VicinityPhenomenon::Virga,
            _ => return None,
        };
        Some(VicinityGroup {
            phenomenon,
            distant: false,
            in_vicinity: false,
            directions: Vec::new(),
            all_quadrants: false,
            overhead: false,
            moving_to: None,
            awaiting_moving_direction: false,
        })
    }

    pub(crate) fn combine(&self, next: &Group) -> Combined {
        let Group::PlainText(text) = next else {
            return if self.awaiting_moving_direction {
                Combined::Invalidated
            } else {
                Combined::Not
            };
        };
        let mut merged = self.clone();
        if merged.awaiting_moving_direction {
            // After MOV only a direction may follow.
            let Some(direction) = Cardinal::from_sector_token(&text.text) else {
                return Combined::Invalidated;
            };
            merged.moving_to = Some(direction);
            merged.awaiting_moving_direction = false;
            return Combined::Replaced(Group::Vicinity(merged));
        }
        match text.text.as_str() {
            "DSNT" => merged.distant = true,
            "VC" => merged.in_vicinity = true,
            "ALQDS" => merged.all_quadrants = true,
            "OVHD" => merged.overhead = true,
            "MOV" => merged.awaiting_moving_direction = true,
            token => {
                if !merged.absorb_sectors(token) {
                    return Combined::Not;
                }
            }
        }
        Combined::Replaced(Group::Vicinity(merged))
    }

    fn absorb_sectors(&mut self, token: &str) -> bool {
        let mut sectors = Vec::new();
        for part in token.split('-') {
            match Cardinal::from_sector_token(part) {
                Some(sector) => sectors.push(sector),
                None => return false,
            }
        }
        self.directions.extend(sectors);
        true
    }

    /// A dangling `MOV` without its direction is invalid.
    pub fn is_valid(&self) -> bool {
        !self.awaiting_moving_direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::PlainTextGroup;

    fn plain(text: &str) -> Group {
        Group::PlainText(PlainTextGroup::new(text))
    }

    fn merged(result: Combined) -> VicinityGroup {
        match result {
            Combined::Replaced(Group::Vicinity(g)) => g,
            other => panic!("expected a combined vicinity group, got {other:?}"),
        }
    }

    #[test]
    fn test_distant_cb_moving() {
        let g = VicinityGroup::from_token("CB", ReportPart::Rmk).unwrap();
        let g = merged(g.combine(&plain("DSNT")));
        assert!(g.distant);
        let g = merged(g.combine(&plain("N")));
        assert_eq!(g.directions, vec![Cardinal::North]);
        let g = merged(g.combine(&plain("MOV")));
        assert!(!g.is_valid());
        let g = merged(g.combine(&plain("E")));
        assert_eq!(g.moving_to, Some(Cardinal::East));
        assert!(g.is_valid());
    }

    #[test]
    fn test_sector_span() {
        let g = VicinityGroup::from_token("ACSL", ReportPart::Rmk).unwrap();
        let g = merged(g.combine(&plain("NE-SE")));
        assert_eq!(g.directions, vec![Cardinal::NorthEast, Cardinal::SouthEast]);
    }

    #[test]
    fn test_dangling_mov_invalidates() {
        let g = VicinityGroup::from_token("TCU", ReportPart::Rmk).unwrap();
        let g = merged(g.combine(&plain("MOV")));
        assert_eq!(g.combine(&plain("QUICKLY")), Combined::Invalidated);
    }

    #[test]
    fn test_unrelated_token_ends_the_group() {
        let g = VicinityGroup::from_token("VIRGA", ReportPart::Rmk).unwrap();
        assert_eq!(g.combine(&plain("AO2")), Combined::Not);
    }

    #[test]
    fn test_rejects() {
        assert_eq!(VicinityGroup::from_token("CB", ReportPart::Metar), None);
        assert_eq!(VicinityGroup::from_token("CBX", ReportPart::Rmk), None);
    }
}
