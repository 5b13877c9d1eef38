use crate::parsers::str_to_uint;

const MAX_DEGREES: u32 = 360;

/// A direction as reported in wind, visibility and secondary-location
/// groups.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// The group form does not carry a direction at all
    Omitted,
    /// The direction is slashed out (`///`)
    NotReported,
    /// Variable direction (`VRB`)
    Variable,
    /// No directional variation (`NDV`)
    NoDirectionalVariation,
    /// A value in degrees; the textual form requires the last digit to be 0
    Degrees(u32),
    /// A cardinal direction, stored as its axis in degrees
    CardinalValue(u32),
}

/// Cardinal direction sectors, including the exact-axis "true" variants.
#[derive(PartialEq, Eq, Copy, Clone, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cardinal {
    /// No corresponding cardinal direction
    #[display("none")]
    None,
    /// No directional variation
    #[display("NDV")]
    Ndv,
    /// North
    #[display("N")]
    North,
    /// North-east
    #[display("NE")]
    NorthEast,
    /// East
    #[display("E")]
    East,
    /// South-east
    #[display("SE")]
    SouthEast,
    /// South
    #[display("S")]
    South,
    /// South-west
    #[display("SW")]
    SouthWest,
    /// West
    #[display("W")]
    West,
    /// North-west
    #[display("NW")]
    NorthWest,
    /// Exactly 360 degrees
    #[display("true N")]
    TrueNorth,
    /// Exactly 90 degrees
    #[display("true E")]
    TrueEast,
    /// Exactly 180 degrees
    #[display("true S")]
    TrueSouth,
    /// Exactly 270 degrees
    #[display("true W")]
    TrueWest,
}

impl Direction {
    /// Decodes a cardinal suffix (`N`, `SW`, ...), `NDV`, or the empty
    /// string as omitted.
    pub fn from_cardinal(s: &str) -> Option<Self> {
        let degrees = match s {
            "" => return Some(Direction::Omitted),
            "NDV" => return Some(Direction::NoDirectionalVariation),
            "N" => 360,
            "NE" => 45,
            "E" => 90,
            "SE" => 135,
            "S" => 180,
            "SW" => 225,
            "W" => 270,
            "NW" => 315,
            _ => return None,
        };
        Some(Direction::CardinalValue(degrees))
    }

    /// Decodes a 3-digit direction ending in 0, `///`, `VRB`, or the
    /// empty string as omitted.
    pub fn from_degrees(s: &str) -> Option<Self> {
        match s {
            "" => return Some(Direction::Omitted),
            "///" => return Some(Direction::NotReported),
            "VRB" => return Some(Direction::Variable),
            _ => {}
        }
        if s.len() != 3 || !s.ends_with('0') {
            return None;
        }
        Some(Direction::Degrees(str_to_uint(s, 0, 3)?))
    }

    /// The direction in degrees, when a value was reported.
    pub fn degrees(&self) -> Option<u32> {
        match self {
            Direction::Degrees(d) | Direction::CardinalValue(d) => Some(*d),
            _ => None,
        }
    }

    /// Whether a degrees or cardinal value is present.
    pub fn is_value(&self) -> bool {
        matches!(self, Direction::Degrees(_) | Direction::CardinalValue(_))
    }

    /// A reported value must not exceed 360 degrees.
    pub fn is_valid(&self) -> bool {
        match self.degrees() {
            Some(d) => d <= MAX_DEGREES,
            None => true,
        }
    }

    /// Classifies the direction into a cardinal sector.
    ///
    /// With `true_directions`, values lying exactly on an axis map to the
    /// dedicated true-axis variants.
    pub fn cardinal(&self, true_directions: bool) -> Cardinal {
        let degrees = match self {
            Direction::NoDirectionalVariation => return Cardinal::Ndv,
            Direction::Degrees(d) | Direction::CardinalValue(d) => *d,
            _ => return Cardinal::None,
        };
        if true_directions {
            match degrees {
                360 => return Cardinal::TrueNorth,
                90 => return Cardinal::TrueEast,
                180 => return Cardinal::TrueSouth,
                270 => return Cardinal::TrueWest,
                _ => {}
            }
        }
        match degrees {
            0..=22 => Cardinal::North,
            23..=67 => Cardinal::NorthEast,
            68..=112 => Cardinal::East,
            113..=157 => Cardinal::SouthEast,
            158..=202 => Cardinal::South,
            203..=247 => Cardinal::SouthWest,
            248..=292 => Cardinal::West,
            293..=337 => Cardinal::NorthWest,
            338..=360 => Cardinal::North,
            _ => Cardinal::None,
        }
    }
}

impl Cardinal {
    /// Decodes a bare sector token as used in remark groups (`NE`, `S`...).
    pub(crate) fn from_sector_token(s: &str) -> Option<Self> {
        match s {
            "N" => Some(Cardinal::North),
            "NE" => Some(Cardinal::NorthEast),
            "E" => Some(Cardinal::East),
            "SE" => Some(Cardinal::SouthEast),
            "S" => Some(Cardinal::South),
            "SW" => Some(Cardinal::SouthWest),
            "W" => Some(Cardinal::West),
            "NW" => Some(Cardinal::NorthWest),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees() {
        assert_eq!(Direction::from_degrees("240"), Some(Direction::Degrees(240)));
        assert_eq!(Direction::from_degrees("VRB"), Some(Direction::Variable));
        assert_eq!(Direction::from_degrees("///"), Some(Direction::NotReported));
        assert_eq!(Direction::from_degrees(""), Some(Direction::Omitted));
        // The last digit of a reported direction must be zero.
        assert_eq!(Direction::from_degrees("245"), None);
        assert_eq!(Direction::from_degrees("24"), None);
    }

    #[test]
    fn test_cardinal_suffix() {
        assert_eq!(Direction::from_cardinal("NW"), Some(Direction::CardinalValue(315)));
        assert_eq!(
            Direction::from_cardinal("NDV"),
            Some(Direction::NoDirectionalVariation)
        );
        assert_eq!(Direction::from_cardinal("XX"), None);
    }

    #[test]
    fn test_sector_classification() {
        assert_eq!(Direction::Degrees(20).cardinal(false), Cardinal::North);
        assert_eq!(Direction::Degrees(45).cardinal(false), Cardinal::NorthEast);
        assert_eq!(Direction::Degrees(240).cardinal(false), Cardinal::SouthWest);
        assert_eq!(Direction::Degrees(350).cardinal(false), Cardinal::North);
        assert_eq!(Direction::Degrees(180).cardinal(true), Cardinal::TrueSouth);
        assert_eq!(Direction::Degrees(180).cardinal(false), Cardinal::South);
        assert_eq!(Direction::Variable.cardinal(false), Cardinal::None);
    }

    #[test]
    fn test_validity() {
        assert!(Direction::Degrees(360).is_valid());
        assert!(!Direction::Degrees(370).is_valid());
        assert!(Direction::NotReported.is_valid());
    }
}
