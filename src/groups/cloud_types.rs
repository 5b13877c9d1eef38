use chumsky::prelude::*;

use crate::types::ReportPart;

/// Observed cloud types with their okta amounts: `SC1CI2`, `CU3AC2CI1`.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloudTypesGroup {
    /// Cloud types and the oktas each covers, in reported order
    pub layers: Vec<(CloudType, u8)>,
}

/// Cloud genera reported in the cloud types remark.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CloudType {
    /// Cumulonimbus (`CB`)
    Cumulonimbus,
    /// Towering cumulus (`TCU`)
    ToweringCumulus,
    /// Cumulus (`CU`)
    Cumulus,
    /// Cumulus fractus (`CF`)
    CumulusFractus,
    /// Stratocumulus (`SC`)
    Stratocumulus,
    /// Nimbostratus (`NS`)
    Nimbostratus,
    /// Stratus (`ST`)
    Stratus,
    /// Stratus fractus (`SF`)
    StratusFractus,
    /// Altostratus (`AS`)
    Altostratus,
    /// Altocumulus (`AC`)
    Altocumulus,
    /// Altocumulus castellanus (`ACC`)
    AltocumulusCastellanus,
    /// Cirrus (`CI`)
    Cirrus,
    /// Cirrostratus (`CS`)
    Cirrostratus,
    /// Cirrocumulus (`CC`)
    Cirrocumulus,
}

const MAX_LAYERS: usize = 8;

impl CloudTypesGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Rmk {
            return None;
        }
        let cloud_type = choice((
            just::<_, _, extra::Default>("ACC").map(|_| CloudType::AltocumulusCastellanus),
            just("AC").map(|_| CloudType::Altocumulus),
            just("AS").map(|_| CloudType::Altostratus),
            just("CB").map(|_| CloudType::Cumulonimbus),
            just("TCU").map(|_| CloudType::ToweringCumulus),
            just("CU").map(|_| CloudType::Cumulus),
            just("CF").map(|_| CloudType::CumulusFractus),
            just("SC").map(|_| CloudType::Stratocumulus),
            just("NS").map(|_| CloudType::Nimbostratus),
            just("ST").map(|_| CloudType::Stratus),
            just("SF").map(|_| CloudType::StratusFractus),
            just("CI").map(|_| CloudType::Cirrus),
            just("CS").map(|_| CloudType::Cirrostratus),
            just("CC").map(|_| CloudType::Cirrocumulus),
        ));
        let entry = cloud_type
            .then(one_of("12345678").map(|okta: char| okta as u8 - b'0'));
        let parser = entry
            .repeated()
            .at_least(1)
            .collect::<Vec<_>>()
            .then_ignore(end());
        let mut layers = parser.parse(token).into_result().ok()?;
        layers.truncate(MAX_LAYERS);
        Some(CloudTypesGroup { layers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_layer() {
        let g = CloudTypesGroup::from_token("SC1", ReportPart::Rmk).unwrap();
        assert_eq!(g.layers, vec![(CloudType::Stratocumulus, 1)]);
    }

    #[test]
    fn test_multiple_layers() {
        let g = CloudTypesGroup::from_token("CU3AC2CI1", ReportPart::Rmk).unwrap();
        assert_eq!(
            g.layers,
            vec![
                (CloudType::Cumulus, 3),
                (CloudType::Altocumulus, 2),
                (CloudType::Cirrus, 1)
            ]
        );
        let g = CloudTypesGroup::from_token("ACC4TCU2", ReportPart::Rmk).unwrap();
        assert_eq!(g.layers[0], (CloudType::AltocumulusCastellanus, 4));
        assert_eq!(g.layers[1], (CloudType::ToweringCumulus, 2));
    }

    #[test]
    fn test_rejects() {
        assert_eq!(CloudTypesGroup::from_token("SC1", ReportPart::Metar), None);
        assert_eq!(CloudTypesGroup::from_token("SC0", ReportPart::Rmk), None);
        assert_eq!(CloudTypesGroup::from_token("SC9", ReportPart::Rmk), None);
        assert_eq!(CloudTypesGroup::from_token("XX1", ReportPart::Rmk), None);
        assert_eq!(CloudTypesGroup::from_token("SC1X", ReportPart::Rmk), None);
    }
}
