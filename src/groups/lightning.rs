use crate::types::{Cardinal, ReportPart};

use super::{Combined, Group};

/// A lightning observation remark: `LTGICCG`, `CONS LTG DSNT SW-NW`.
///
/// The frequency word arrives as its own token ahead of the `LTG` group;
/// distance and sector tokens are absorbed afterwards.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightningGroup {
    /// How often strikes are observed
    pub frequency: Option<LightningFrequency>,
    /// The observed discharge types, in reported order
    pub types: Vec<LightningType>,
    /// Strikes more than 10 SM away (`DSNT`)
    pub distant: bool,
    /// Strikes within 5 to 10 SM (`VC`)
    pub in_vicinity: bool,
    /// Sectors the strikes are observed in
    pub directions: Vec<Cardinal>,
    /// All quadrants (`ALQDS`)
    pub all_quadrants: bool,
    /// Directly overhead (`OVHD`)
    pub overhead: bool,
    awaiting_ltg: bool,
}

/// Observed lightning frequency.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightningFrequency {
    /// Less than one strike per minute (`OCNL`)
    Occasional,
    /// About one to six strikes per minute (`FRQ`)
    Frequent,
    /// More than six strikes per minute (`CONS`)
    Continuous,
}

/// Lightning discharge types.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightningType {
    /// Within the cloud (`IC`)
    InCloud,
    /// Cloud to cloud (`CC`)
    CloudToCloud,
    /// Cloud to ground (`CG`)
    CloudToGround,
    /// Cloud to air (`CA`)
    CloudToAir,
}

impl LightningGroup {
    fn empty() -> Self {
        LightningGroup {
            frequency: None,
            types: Vec::new(),
            distant: false,
            in_vicinity: false,
            directions: Vec::new(),
            all_quadrants: false,
            overhead: false,
            awaiting_ltg: false,
        }
    }

    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Rmk {
            return None;
        }
        let frequency = match token {
            "OCNL" => Some(LightningFrequency::Occasional),
            "FRQ" => Some(LightningFrequency::Frequent),
            "CONS" => Some(LightningFrequency::Continuous),
            _ => None,
        };
        if frequency.is_some() {
            return Some(LightningGroup {
                frequency,
                awaiting_ltg: true,
                ..Self::empty()
            });
        }
        let pairs = token.strip_prefix("LTG")?;
        if pairs.len() % 2 != 0 {
            return None;
        }
        let mut types = Vec::with_capacity(pairs.len() / 2);
        for pair in pairs.as_bytes().chunks(2) {
            types.push(match pair {
                b"IC" => LightningType::InCloud,
                b"CC" => LightningType::CloudToCloud,
                b"CG" => LightningType::CloudToGround,
                b"CA" => LightningType::CloudToAir,
                _ => return None,
            });
        }
        Some(LightningGroup {
            types,
            ..Self::empty()
        })
    }

    pub(crate) fn combine(&self, next: &Group) -> Combined {
        if self.awaiting_ltg {
            // A frequency word must be followed by the LTG group itself.
            if let Group::Lightning(next) = next
                && !next.awaiting_ltg
                && next.frequency.is_none()
            {
                let mut merged = next.clone();
                merged.frequency = self.frequency;
                return Combined::Replaced(Group::Lightning(merged));
            }
            return Combined::Invalidated;
        }
        let Group::PlainText(text) = next else {
            return Combined::Not;
        };
        let mut merged = self.clone();
        match text.text.as_str() {
            "DSNT" => merged.distant = true,
            "VC" => merged.in_vicinity = true,
            "ALQDS" => merged.all_quadrants = true,
            "OVHD" => merged.overhead = true,
            token => {
                if !merged.absorb_sectors(token) {
                    return Combined::Not;
                }
            }
        }
        Combined::Replaced(Group::Lightning(merged))
    }

    // Accepts `NE` as well as spans like `SW-NW`.
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

    /// A frequency word without its `LTG` group is invalid.
    pub fn is_valid(&self) -> bool {
        !self.awaiting_ltg
    }
}
