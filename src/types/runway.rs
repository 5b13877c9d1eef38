use crate::parsers::str_to_uint;

/// A runway identifier: two-digit heading number plus optional designator.
///
/// Two numbers are sentinels rather than headings: 88 stands for "all
/// runways" and 99 for "repetition of the last message".
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Runway {
    /// Runway heading number, usually 0 to 36
    pub number: u8,
    /// Parallel-runway designator
    pub designator: RunwayDesignator,
}

/// Distinguishes parallel runways sharing a heading number.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunwayDesignator {
    /// No designator reported
    #[default]
    None,
    /// Left runway
    Left,
    /// Center runway
    Center,
    /// Right runway
    Right,
}

const ALL_RUNWAYS: u8 = 88;
const MESSAGE_REPETITION: u8 = 99;
const MAX_RUNWAY_NUMBER: u8 = 36;

impl Runway {
    /// Decodes `Rdd`, `Rdd[LCR]` and (with `enable_rwy`) `RWYdd[LCR]`.
    pub fn from_token(s: &str, enable_rwy: bool) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() < 3 || bytes[0] != b'R' {
            return None;
        }
        let num_pos = if enable_rwy && bytes[1] == b'W' && bytes[2] == b'Y' {
            3
        } else {
            1
        };
        let number = str_to_uint(s, num_pos, 2)? as u8;
        let dsg_pos = num_pos + 2;
        if bytes.len() > dsg_pos + 1 {
            return None;
        }
        let designator = match bytes.get(dsg_pos) {
            None => RunwayDesignator::None,
            Some(b'L') => RunwayDesignator::Left,
            Some(b'C') => RunwayDesignator::Center,
            Some(b'R') => RunwayDesignator::Right,
            Some(_) => return None,
        };
        Some(Runway { number, designator })
    }

    /// The `88` sentinel covering every runway of the aerodrome.
    pub fn all_runways() -> Self {
        Runway {
            number: ALL_RUNWAYS,
            designator: RunwayDesignator::None,
        }
    }

    /// True for the `88` sentinel.
    pub fn is_all_runways(&self) -> bool {
        self.number == ALL_RUNWAYS && self.designator == RunwayDesignator::None
    }

    /// True for the `99` sentinel.
    pub fn is_message_repetition(&self) -> bool {
        self.number == MESSAGE_REPETITION && self.designator == RunwayDesignator::None
    }

    /// A heading number at most 36, or one of the two bare sentinels.
    pub fn is_valid(&self) -> bool {
        self.number <= MAX_RUNWAY_NUMBER || self.is_all_runways() || self.is_message_repetition()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runway() {
        assert_eq!(
            Runway::from_token("R32", false),
            Some(Runway {
                number: 32,
                designator: RunwayDesignator::None
            })
        );
        assert_eq!(
            Runway::from_token("R27C", false),
            Some(Runway {
                number: 27,
                designator: RunwayDesignator::Center
            })
        );
        assert_eq!(
            Runway::from_token("RWY32", true),
            Some(Runway {
                number: 32,
                designator: RunwayDesignator::None
            })
        );
        assert_eq!(Runway::from_token("RWY32", false), None);
        assert_eq!(Runway::from_token("R3", false), None);
        assert_eq!(Runway::from_token("R32X", false), None);
        assert_eq!(Runway::from_token("R320L", false), None);
    }

    #[test]
    fn test_sentinels() {
        let all = Runway::from_token("R88", false).unwrap();
        assert!(all.is_all_runways() && all.is_valid());
        let rep = Runway::from_token("R99", false).unwrap();
        assert!(rep.is_message_repetition() && rep.is_valid());
        assert!(!Runway::from_token("R42", false).unwrap().is_valid());
    }
}
