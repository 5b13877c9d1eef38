use crate::types::{Direction, Distance, DistanceUnit, ReportPart};

use super::{Combined, Group};

/// Prevailing or directional horizontal visibility.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityGroup {
    /// The visibility value
    pub visibility: Distance,
    /// The direction the value applies to; omitted for prevailing
    /// visibility
    pub direction: Direction,
    // A bare leading integer of a two-token mile value ("1 1/2SM"),
    // waiting for its fraction.
    incomplete_integer: bool,
}

impl VisibilityGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Metar && part != ReportPart::Taf {
            return None;
        }
        // A single digit speculatively starts a mixed-fraction mile value.
        if token.len() == 1 && token.as_bytes()[0].is_ascii_digit() {
            return Some(VisibilityGroup {
                visibility: Distance::exact(
                    u32::from(token.as_bytes()[0] - b'0'),
                    DistanceUnit::StatuteMiles,
                ),
                direction: Direction::Omitted,
                incomplete_integer: true,
            });
        }
        // Visibility in meters with an optional cardinal or NDV suffix.
        // Forms like `////SM` fail the suffix here and fall through to the
        // mile decoder.
        if token.len() >= 4
            && token.as_bytes()[..4]
                .iter()
                .all(|b| b.is_ascii_digit() || *b == b'/')
            && let Some(visibility) = Distance::from_meters(&token[..4])
            && let Some(direction) = Direction::from_cardinal(&token[4..])
        {
            return Some(VisibilityGroup {
                visibility,
                direction,
                incomplete_integer: false,
            });
        }
        // Statute mile forms.
        let visibility = Distance::from_miles(token)?;
        Some(VisibilityGroup {
            visibility,
            direction: Direction::Omitted,
            incomplete_integer: false,
        })
    }

    pub(crate) fn combine(&self, next: &Group) -> Combined {
        let Group::Visibility(next) = next else {
            return Combined::Not;
        };
        if self.visibility.unit != DistanceUnit::StatuteMiles
            || next.visibility.unit != DistanceUnit::StatuteMiles
        {
            return Combined::Not;
        }
        if self.incomplete_integer && next.visibility.is_fraction() {
            let Some(merged) =
                Distance::from_integer_and_fraction(&self.visibility, &next.visibility)
            else {
                return Combined::Not;
            };
            return Combined::Replaced(Group::Visibility(VisibilityGroup {
                visibility: merged,
                direction: self.direction,
                incomplete_integer: false,
            }));
        }
        Combined::Not
    }

    /// Whether the group is still waiting for a fraction token.
    pub fn is_incomplete(&self) -> bool {
        self.incomplete_integer
    }

    /// Prevailing visibility carries no direction.
    pub fn is_prevailing(&self) -> bool {
        matches!(
            self.direction,
            Direction::Omitted | Direction::NoDirectionalVariation
        )
    }

    /// Incomplete integers are invalid; value and direction must be
    /// consistent.
    pub fn is_valid(&self) -> bool {
        !self.incomplete_integer && self.visibility.is_valid() && self.direction.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DistanceModifier;

    #[test]
    fn test_meters() {
        let vis = VisibilityGroup::from_token("9999", ReportPart::Metar).unwrap();
        assert_eq!(vis.visibility.integer, Some(10000));
        assert_eq!(vis.visibility.modifier, DistanceModifier::MoreThan);
        assert!(vis.is_prevailing() && vis.is_valid());
        let vis = VisibilityGroup::from_token("2000SW", ReportPart::Metar).unwrap();
        assert_eq!(vis.direction, Direction::CardinalValue(225));
        assert!(!vis.is_prevailing());
        let vis = VisibilityGroup::from_token("6000NDV", ReportPart::Metar).unwrap();
        assert!(vis.is_prevailing());
        assert!(!VisibilityGroup::from_token("////", ReportPart::Metar)
            .unwrap()
            .visibility
            .is_reported());
        assert_eq!(VisibilityGroup::from_token("2000XX", ReportPart::Metar), None);
    }

    #[test]
    fn test_miles() {
        let vis = VisibilityGroup::from_token("10SM", ReportPart::Metar).unwrap();
        assert_eq!(vis.visibility.integer, Some(10));
        let vis = VisibilityGroup::from_token("P6SM", ReportPart::Taf).unwrap();
        assert_eq!(vis.visibility.modifier, DistanceModifier::MoreThan);
        let vis = VisibilityGroup::from_token("1/2SM", ReportPart::Metar).unwrap();
        assert!(vis.visibility.is_fraction());
    }

    #[test]
    fn test_incomplete_integer_combines_with_fraction() {
        let int = VisibilityGroup::from_token("1", ReportPart::Metar).unwrap();
        assert!(int.is_incomplete() && !int.is_valid());
        let frac = VisibilityGroup::from_token("1/2SM", ReportPart::Metar).unwrap();
        let Combined::Replaced(Group::Visibility(merged)) =
            int.combine(&Group::Visibility(frac))
        else {
            panic!("integer did not absorb fraction");
        };
        assert_eq!(merged.visibility.integer, Some(1));
        assert_eq!(merged.visibility.numerator, Some(1));
        assert_eq!(merged.visibility.denominator, Some(2));
        assert!(merged.is_valid());
    }

    #[test]
    fn test_incomplete_integer_refuses_other_units() {
        let int = VisibilityGroup::from_token("1", ReportPart::Metar).unwrap();
        let meters = VisibilityGroup::from_token("2000", ReportPart::Metar).unwrap();
        assert_eq!(int.combine(&Group::Visibility(meters)), Combined::Not);
    }

    #[test]
    fn test_part_gating() {
        assert_eq!(VisibilityGroup::from_token("9999", ReportPart::Header), None);
        assert_eq!(VisibilityGroup::from_token("9999", ReportPart::Rmk), None);
    }
}
