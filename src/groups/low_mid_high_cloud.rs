use chumsky::prelude::*;

use crate::types::ReportPart;

/// The `8/LMH` remark reporting low, mid and high cloud genera (WMO
/// tables 0513, 0515 and 0509).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LowMidHighCloudGroup {
    /// Low cloud layer code
    pub low: LowCloudLayer,
    /// Mid cloud layer code
    pub mid: MidCloudLayer,
    /// High cloud layer code
    pub high: HighCloudLayer,
}

/// Low-level cloud genera (WMO table 0513).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LowCloudLayer {
    /// Code 0: no low clouds
    None,
    /// Code 1: cumulus humilis or fractus
    CuHuCuFr,
    /// Code 2: cumulus mediocris or congestus
    CuMedCuCon,
    /// Code 3: cumulonimbus calvus
    CbCal,
    /// Code 4: stratocumulus cumulogenitus
    ScCugen,
    /// Code 5: stratocumulus other than cumulogenitus
    ScNonCugen,
    /// Code 6: stratus nebulosus or fractus
    StNebStFr,
    /// Code 7: stratus or cumulus fractus pannus
    StFrCuFrPannus,
    /// Code 8: cumulus and stratocumulus at different levels
    CuScNonCugenDifferentLevels,
    /// Code 9: cumulonimbus capillatus
    CbCap,
    /// Slashed out: not observable
    NotObservable,
}

/// Mid-level cloud genera (WMO table 0515).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MidCloudLayer {
    /// Code 0: no mid clouds
    None,
    /// Code 1: altostratus translucidus
    AsTr,
    /// Code 2: altostratus opacus or nimbostratus
    AsOpNs,
    /// Code 3: altocumulus translucidus
    AcTr,
    /// Code 4: patches of altocumulus translucidus
    AcTrLenPatches,
    /// Code 5: altocumulus spreading over the sky
    AcTrAcOpSpreading,
    /// Code 6: altocumulus cumulogenitus or cumulonimbogenitus
    AcCugenAcCbgen,
    /// Code 7: altocumulus duplicatus or opacus
    AcDuAcOpAcWithAsOrNs,
    /// Code 8: altocumulus castellanus or floccus
    AcCasAcFlo,
    /// Code 9: altocumulus of a chaotic sky
    AcOfChaoticSky,
    /// Slashed out: not observable
    NotObservable,
}

/// High-level cloud genera (WMO table 0509).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighCloudLayer {
    /// Code 0: no high clouds
    None,
    /// Code 1: cirrus fibratus or uncinus
    CiFibCiUnc,
    /// Code 2: cirrus spissatus, castellanus or floccus
    CiSpiCiCasCiFlo,
    /// Code 3: cirrus spissatus cumulonimbogenitus
    CiSpiCbgen,
    /// Code 4: cirrus spreading over the sky
    CiFibCiUncSpreading,
    /// Code 5: cirrus and cirrostratus low above the horizon
    CiCsLowAboveHorizon,
    /// Code 6: cirrus and cirrostratus high above the horizon
    CiCsHighAboveHorizon,
    /// Code 7: cirrostratus covering the entire sky
    CsNebCsFibCoveringEntireSky,
    /// Code 8: cirrostratus not covering the entire sky
    Cs,
    /// Code 9: cirrocumulus
    Cc,
    /// Slashed out: not observable
    NotObservable,
}

impl LowMidHighCloudGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Rmk {
            return None;
        }
        let layer = || one_of::<_, _, extra::Default>("0123456789/");
        let parser = just("8/")
            .ignore_then(group((layer(), layer(), layer())))
            .then_ignore(end());
        let (low, mid, high) = parser.parse(token).into_result().ok()?;
        Some(LowMidHighCloudGroup {
            low: Self::low_from(low)?,
            mid: Self::mid_from(mid)?,
            high: Self::high_from(high)?,
        })
    }

    fn low_from(code: char) -> Option<LowCloudLayer> {
        Some(match code {
            '0' => LowCloudLayer::None,
            '1' => LowCloudLayer::CuHuCuFr,
            '2' => LowCloudLayer::CuMedCuCon,
            '3' => LowCloudLayer::CbCal,
            '4' => LowCloudLayer::ScCugen,
            '5' => LowCloudLayer::ScNonCugen,
            '6' => LowCloudLayer::StNebStFr,
            '7' => LowCloudLayer::StFrCuFrPannus,
            '8' => LowCloudLayer::CuScNonCugenDifferentLevels,
            '9' => LowCloudLayer::CbCap,
            '/' => LowCloudLayer::NotObservable,
            _ => return None,
        })
    }

    fn mid_from(code: char) -> Option<MidCloudLayer> {
        Some(match code {
            '0' => MidCloudLayer::None,
            '1' => MidCloudLayer::AsTr,
            '2' => MidCloudLayer::AsOpNs,
            '3' => MidCloudLayer::AcTr,
            '4' => MidCloudLayer::AcTrLenPatches,
            '5' => MidCloudLayer::AcTrAcOpSpreading,
            '6' => MidCloudLayer::AcCugenAcCbgen,
            '7' => MidCloudLayer::AcDuAcOpAcWithAsOrNs,
            '8' => MidCloudLayer::AcCasAcFlo,
            '9' => MidCloudLayer::AcOfChaoticSky,
            '/' => MidCloudLayer::NotObservable,
            _ => return None,
        })
    }

    fn high_from(code: char) -> Option<HighCloudLayer> {
        Some(match code {
            '0' => HighCloudLayer::None,
            '1' => HighCloudLayer::CiFibCiUnc,
            '2' => HighCloudLayer::CiSpiCiCasCiFlo,
            '3' => HighCloudLayer::CiSpiCbgen,
            '4' => HighCloudLayer::CiFibCiUncSpreading,
            '5' => HighCloudLayer::CiCsLowAboveHorizon,
            '6' => HighCloudLayer::CiCsHighAboveHorizon,
            '7' => HighCloudLayer::CsNebCsFibCoveringEntireSky,
            '8' => HighCloudLayer::Cs,
            '9' => HighCloudLayer::Cc,
            '/' => HighCloudLayer::NotObservable,
            _ => return None,
        })
    }

    /// A lower layer hidden from observation forces the layers above it
    /// to be unobservable too.
    pub fn is_valid(&self) -> bool {
        if self.low == LowCloudLayer::NotObservable && self.mid != MidCloudLayer::NotObservable {
            return false;
        }
        if self.mid == MidCloudLayer::NotObservable && self.high != HighCloudLayer::NotObservable {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers() {
        let g = LowMidHighCloudGroup::from_token("8/578", ReportPart::Rmk).unwrap();
        assert_eq!(g.low, LowCloudLayer::ScNonCugen);
        assert_eq!(g.mid, MidCloudLayer::AcDuAcOpAcWithAsOrNs);
        assert_eq!(g.high, HighCloudLayer::Cs);
        assert!(g.is_valid());
    }

    #[test]
    fn test_observability_rule() {
        let g = LowMidHighCloudGroup::from_token("8///7", ReportPart::Rmk).unwrap();
        assert!(!g.is_valid());
        let g = LowMidHighCloudGroup::from_token("8/6//", ReportPart::Rmk).unwrap();
        assert!(g.is_valid());
        let g = LowMidHighCloudGroup::from_token("8////", ReportPart::Rmk).unwrap();
        assert!(g.is_valid());
    }

    #[test]
    fn test_rejects() {
        assert_eq!(LowMidHighCloudGroup::from_token("8/578", ReportPart::Metar), None);
        assert_eq!(LowMidHighCloudGroup::from_token("8/57", ReportPart::Rmk), None);
        assert_eq!(LowMidHighCloudGroup::from_token("8/5789", ReportPart::Rmk), None);
        assert_eq!(LowMidHighCloudGroup::from_token("9/578", ReportPart::Rmk), None);
    }
}
