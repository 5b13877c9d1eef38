use crate::parsers::str_to_uint;

/// Runway surface friction: either a measured coefficient or a braking
/// action bucket (WMO table 0366).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceFriction {
    /// How the friction was reported
    pub status: SurfaceFrictionStatus,
    coefficient: u8,
}

/// Reporting status of a surface friction value.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceFrictionStatus {
    /// Slashed out
    NotReported,
    /// A friction coefficient was measured
    SurfaceFrictionReported,
    /// A braking action bucket was reported (codes 91 to 95)
    BrakingActionReported,
    /// Code 99: unreliable or unmeasurable
    Unreliable,
}

/// Braking action buckets derived from the friction coefficient.
#[derive(PartialEq, Eq, Copy, Clone, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BrakingAction {
    /// Not reported or unreliable
    #[display("none")]
    None,
    /// Coefficient below 0.26
    #[display("poor")]
    Poor,
    /// Coefficient 0.26 to 0.29
    #[display("medium/poor")]
    MediumPoor,
    /// Coefficient 0.30 to 0.35
    #[display("medium")]
    Medium,
    /// Coefficient 0.36 to 0.39
    #[display("medium/good")]
    MediumGood,
    /// Coefficient 0.40 and above
    #[display("good")]
    Good,
}

const MEDIUM_POOR_LOW: u8 = 26;
const MEDIUM_LOW: u8 = 30;
const MEDIUM_GOOD_LOW: u8 = 36;
const GOOD_LOW: u8 = 40;

impl SurfaceFriction {
    pub(crate) fn not_reported() -> Self {
        SurfaceFriction {
            status: SurfaceFrictionStatus::NotReported,
            coefficient: 0,
        }
    }

    /// Decodes the 2-digit friction field of a runway state group.
    ///
    /// 00 to 90 is a coefficient in hundredths, 91 to 95 map to braking
    /// action buckets, 96 to 98 are reserved and rejected, 99 is
    /// unreliable, `//` not reported.
    pub fn from_token(s: &str) -> Option<Self> {
        if s.len() != 2 {
            return None;
        }
        if s == "//" {
            return Some(Self::not_reported());
        }
        let code = str_to_uint(s, 0, 2)? as u8;
        let (status, coefficient) = match code {
            91 => (SurfaceFrictionStatus::BrakingActionReported, 0),
            92 => (SurfaceFrictionStatus::BrakingActionReported, MEDIUM_POOR_LOW),
            93 => (SurfaceFrictionStatus::BrakingActionReported, MEDIUM_LOW),
            94 => (SurfaceFrictionStatus::BrakingActionReported, MEDIUM_GOOD_LOW),
            95 => (SurfaceFrictionStatus::BrakingActionReported, GOOD_LOW),
            96..=98 => return None,
            99 => (SurfaceFrictionStatus::Unreliable, 0),
            c => (SurfaceFrictionStatus::SurfaceFrictionReported, c),
        };
        Some(SurfaceFriction {
            status,
            coefficient,
        })
    }

    /// The friction coefficient (0.00 to 0.90), when one was reported or
    /// implied by a braking action bucket.
    pub fn coefficient(&self) -> Option<f32> {
        match self.status {
            SurfaceFrictionStatus::NotReported | SurfaceFrictionStatus::Unreliable => None,
            _ => Some(self.coefficient as f32 * 0.01),
        }
    }

    /// The braking action bucket the coefficient falls into.
    pub fn braking_action(&self) -> BrakingAction {
        match self.status {
            SurfaceFrictionStatus::NotReported | SurfaceFrictionStatus::Unreliable => {
                return BrakingAction::None;
            }
            _ => {}
        }
        match self.coefficient {
            c if c < MEDIUM_POOR_LOW => BrakingAction::Poor,
            c if c < MEDIUM_LOW => BrakingAction::MediumPoor,
            c if c < MEDIUM_GOOD_LOW => BrakingAction::Medium,
            c if c < GOOD_LOW => BrakingAction::MediumGood,
            _ => BrakingAction::Good,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient() {
        let sf = SurfaceFriction::from_token("55").unwrap();
        assert_eq!(sf.status, SurfaceFrictionStatus::SurfaceFrictionReported);
        assert!((sf.coefficient().unwrap() - 0.55).abs() < 1e-4);
        assert_eq!(sf.braking_action(), BrakingAction::Good);
        let sf = SurfaceFriction::from_token("28").unwrap();
        assert_eq!(sf.braking_action(), BrakingAction::MediumPoor);
    }

    #[test]
    fn test_braking_action_codes() {
        let sf = SurfaceFriction::from_token("93").unwrap();
        assert_eq!(sf.status, SurfaceFrictionStatus::BrakingActionReported);
        assert_eq!(sf.braking_action(), BrakingAction::Medium);
        assert!((sf.coefficient().unwrap() - 0.30).abs() < 1e-4);
    }

    #[test]
    fn test_special_codes() {
        assert_eq!(
            SurfaceFriction::from_token("99").unwrap().status,
            SurfaceFrictionStatus::Unreliable
        );
        assert_eq!(
            SurfaceFriction::from_token("//").unwrap().status,
            SurfaceFrictionStatus::NotReported
        );
        assert_eq!(SurfaceFriction::from_token("96"), None);
        assert_eq!(SurfaceFriction::from_token("5"), None);
    }
}
