use chumsky::prelude::*;

use crate::parsers::{digit_slice, slashes};
use crate::types::{Distance, DistanceUnit, ReportPart};

/// A cloud layer, a vertical visibility, or one of the no-cloud keywords.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloudGroup {
    /// Sky cover amount or no-cloud keyword
    pub amount: CloudAmount,
    /// Convective cloud type suffix
    pub convective_type: ConvectiveType,
    height_or_vert_vis: Distance,
}

/// Sky cover of a cloud group.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CloudAmount {
    /// Amount slashed out (`///040`)
    NotReported,
    /// No clouds detected by the automated station (`NCD`)
    Ncd,
    /// No significant clouds (`NSC`)
    Nsc,
    /// Sky clear (`CLR`)
    NoneClr,
    /// Sky clear (`SKC`)
    NoneSkc,
    /// 1 to 2 oktas
    Few,
    /// 3 to 4 oktas
    Scattered,
    /// 5 to 7 oktas
    Broken,
    /// 8 oktas
    Overcast,
    /// Sky obscured; the group carries a vertical visibility (`VVddd`)
    Obscured,
}

/// Convective cloud type attached to a layer.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvectiveType {
    /// No type suffix
    None,
    /// Type slashed out (`BKN025///`)
    NotReported,
    /// Towering cumulus (`TCU`)
    ToweringCumulus,
    /// Cumulonimbus (`CB`)
    Cumulonimbus,
}

impl CloudGroup {
    fn of_amount(amount: CloudAmount) -> Self {
        CloudGroup {
            amount,
            convective_type: ConvectiveType::None,
            height_or_vert_vis: Distance::not_reported(DistanceUnit::Feet),
        }
    }

    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Metar && part != ReportPart::Taf {
            return None;
        }
        match token {
            "NCD" => return Some(Self::of_amount(CloudAmount::Ncd)),
            "NSC" => return Some(Self::of_amount(CloudAmount::Nsc)),
            "CLR" => return Some(Self::of_amount(CloudAmount::NoneClr)),
            "SKC" => return Some(Self::of_amount(CloudAmount::NoneSkc)),
            _ => {}
        }
        let amount = choice((
            just("FEW").map(|_| CloudAmount::Few),
            just("SCT").map(|_| CloudAmount::Scattered),
            just("BKN").map(|_| CloudAmount::Broken),
            just("OVC").map(|_| CloudAmount::Overcast),
            just("VV").map(|_| CloudAmount::Obscured),
            slashes(3).map(|_| CloudAmount::NotReported),
        ));
        let height = choice((digit_slice(3, 3), slashes(3)));
        let convective = choice((
            just("TCU").map(|_| ConvectiveType::ToweringCumulus),
            just("CB").map(|_| ConvectiveType::Cumulonimbus),
            slashes(3).map(|_| ConvectiveType::NotReported),
        ));
        let parser = group((amount, height, convective.or_not())).then_ignore(end());
        let (amount, height, convective) = parser.parse(token).into_result().ok()?;
        let convective_type = convective.unwrap_or(ConvectiveType::None);
        // A vertical visibility group cannot carry a convective type.
        if amount == CloudAmount::Obscured && convective_type != ConvectiveType::None {
            return None;
        }
        Some(CloudGroup {
            amount,
            convective_type,
            height_or_vert_vis: Distance::from_height(height)?,
        })
    }

    /// The layer base height, for layer amounts.
    pub fn height(&self) -> Distance {
        match self.amount {
            CloudAmount::NotReported
            | CloudAmount::Few
            | CloudAmount::Scattered
            | CloudAmount::Broken
            | CloudAmount::Overcast => self.height_or_vert_vis,
            _ => Distance::not_reported(DistanceUnit::Feet),
        }
    }

    /// The vertical visibility, when the sky is obscured.
    pub fn vertical_visibility(&self) -> Distance {
        if self.amount != CloudAmount::Obscured {
            return Distance::not_reported(DistanceUnit::Feet);
        }
        self.height_or_vert_vis
    }

    /// Whether this group is one of the no-cloud keywords.
    pub fn is_no_clouds(&self) -> bool {
        matches!(
            self.amount,
            CloudAmount::Ncd | CloudAmount::Nsc | CloudAmount::NoneClr | CloudAmount::NoneSkc
        )
    }

    /// Whether this group describes an actual cloud layer.
    pub fn is_cloud_layer(&self) -> bool {
        matches!(
            self.amount,
            CloudAmount::Few | CloudAmount::Scattered | CloudAmount::Broken | CloudAmount::Overcast
        )
    }

    /// The carried height must be consistent.
    pub fn is_valid(&self) -> bool {
        self.height_or_vert_vis.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers() {
        let cloud = CloudGroup::from_token("FEW040", ReportPart::Metar).unwrap();
        assert_eq!(cloud.amount, CloudAmount::Few);
        assert_eq!(cloud.height().integer, Some(4000));
        assert!(cloud.is_cloud_layer());
        let cloud = CloudGroup::from_token("BKN025CB", ReportPart::Taf).unwrap();
        assert_eq!(cloud.convective_type, ConvectiveType::Cumulonimbus);
        let cloud = CloudGroup::from_token("SCT///TCU", ReportPart::Metar).unwrap();
        assert!(!cloud.height().is_reported());
    }

    #[test]
    fn test_not_reported_forms() {
        let cloud = CloudGroup::from_token("///040", ReportPart::Metar).unwrap();
        assert_eq!(cloud.amount, CloudAmount::NotReported);
        let cloud = CloudGroup::from_token("BKN025///", ReportPart::Metar).unwrap();
        assert_eq!(cloud.convective_type, ConvectiveType::NotReported);
        let cloud = CloudGroup::from_token("//////", ReportPart::Metar).unwrap();
        assert_eq!(cloud.amount, CloudAmount::NotReported);
        assert!(!cloud.height().is_reported());
    }

    #[test]
    fn test_vertical_visibility() {
        let vv = CloudGroup::from_token("VV010", ReportPart::Metar).unwrap();
        assert_eq!(vv.amount, CloudAmount::Obscured);
        assert_eq!(vv.vertical_visibility().integer, Some(1000));
        assert!(!vv.height().is_reported());
        // No convective type on an obscured sky.
        assert_eq!(CloudGroup::from_token("VV010CB", ReportPart::Metar), None);
    }

    #[test]
    fn test_no_cloud_keywords() {
        for (token, amount) in [
            ("NCD", CloudAmount::Ncd),
            ("NSC", CloudAmount::Nsc),
            ("CLR", CloudAmount::NoneClr),
            ("SKC", CloudAmount::NoneSkc),
        ] {
            let cloud = CloudGroup::from_token(token, ReportPart::Metar).unwrap();
            assert_eq!(cloud.amount, amount);
            assert!(cloud.is_no_clouds());
        }
    }

    #[test]
    fn test_rejects() {
        assert_eq!(CloudGroup::from_token("FEW04", ReportPart::Metar), None);
        assert_eq!(CloudGroup::from_token("FEW0400", ReportPart::Metar), None);
        assert_eq!(CloudGroup::from_token("XXX040", ReportPart::Metar), None);
        assert_eq!(CloudGroup::from_token("FEW040", ReportPart::Rmk), None);
    }
}
