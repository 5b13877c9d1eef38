use chumsky::prelude::*;

use crate::parsers::digit_slice;
use crate::types::{Distance, ReportPart};

/// A TAF icing (`6xhhhd`) or turbulence (`5xhhhd`) layer forecast.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerForecastGroup {
    /// Severity and character of the forecast layer
    pub kind: LayerForecastKind,
    /// Base of the layer
    pub base_height: Distance,
    /// Top of the layer
    pub top_height: Distance,
}

/// Icing and turbulence codes of a layer forecast.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayerForecastKind {
    /// Code 60: trace icing or none
    IcingTraceOrNone,
    /// Code 61: light mixed icing
    IcingLightMixed,
    /// Code 62: light rime icing in cloud
    IcingLightRimeInCloud,
    /// Code 63: light clear icing in precipitation
    IcingLightClearInPrecipitation,
    /// Code 64: moderate mixed icing
    IcingModerateMixed,
    /// Code 65: moderate rime icing in cloud
    IcingModerateRimeInCloud,
    /// Code 66: moderate clear icing in precipitation
    IcingModerateClearInPrecipitation,
    /// Code 67: severe mixed icing
    IcingSevereMixed,
    /// Code 68: severe rime icing in cloud
    IcingSevereRimeInCloud,
    /// Code 69: severe clear icing in precipitation
    IcingSevereClearInPrecipitation,
    /// Code 50: no turbulence
    TurbulenceNone,
    /// Code 51: light turbulence
    TurbulenceLight,
    /// Code 52: occasional moderate turbulence in clear air
    TurbulenceModerateInClearAirOccasional,
    /// Code 53: frequent moderate turbulence in clear air
    TurbulenceModerateInClearAirFrequent,
    /// Code 54: occasional moderate turbulence in cloud
    TurbulenceModerateInCloudOccasional,
    /// Code 55: frequent moderate turbulence in cloud
    TurbulenceModerateInCloudFrequent,
    /// Code 56: occasional severe turbulence in clear air
    TurbulenceSevereInClearAirOccasional,
    /// Code 57: frequent severe turbulence in clear air
    TurbulenceSevereInClearAirFrequent,
    /// Code 58: occasional severe turbulence in cloud
    TurbulenceSevereInCloudOccasional,
    /// Code 59: frequent severe turbulence in cloud
    TurbulenceSevereInCloudFrequent,
    /// Code 5X: extreme turbulence
    TurbulenceExtreme,
}

impl LayerForecastGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Taf {
            return None;
        }
        let code = one_of("65").then(one_of("0123456789X")).to_slice();
        let parser = code.then(digit_slice(4, 4)).then_ignore(end());
        let (code, layer) = parser.parse(token).into_result().ok()?;
        let (base_height, top_height) = Distance::from_layer(layer)?;
        Some(LayerForecastGroup {
            kind: Self::kind_from(code)?,
            base_height,
            top_height,
        })
    }

    fn kind_from(code: &str) -> Option<LayerForecastKind> {
        Some(match code {
            "60" => LayerForecastKind::IcingTraceOrNone,
            "61" => LayerForecastKind::IcingLightMixed,
            "62" => LayerForecastKind::IcingLightRimeInCloud,
            "63" => LayerForecastKind::IcingLightClearInPrecipitation,
            "64" => LayerForecastKind::IcingModerateMixed,
            "65" => LayerForecastKind::IcingModerateRimeInCloud,
            "66" => LayerForecastKind::IcingModerateClearInPrecipitation,
            "67" => LayerForecastKind::IcingSevereMixed,
            "68" => LayerForecastKind::IcingSevereRimeInCloud,
            "69" => LayerForecastKind::IcingSevereClearInPrecipitation,
            "50" => LayerForecastKind::TurbulenceNone,
            "51" => LayerForecastKind::TurbulenceLight,
            "52" => LayerForecastKind::TurbulenceModerateInClearAirOccasional,
            "53" => LayerForecastKind::TurbulenceModerateInClearAirFrequent,
            "54" => LayerForecastKind::TurbulenceModerateInCloudOccasional,
            "55" => LayerForecastKind::TurbulenceModerateInCloudFrequent,
            "56" => LayerForecastKind::TurbulenceSevereInClearAirOccasional,
            "57" => LayerForecastKind::TurbulenceSevereInClearAirFrequent,
            "58" => LayerForecastKind::TurbulenceSevereInCloudOccasional,
            "59" => LayerForecastKind::TurbulenceSevereInCloudFrequent,
            "5X" => LayerForecastKind::TurbulenceExtreme,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icing_layer() {
        let g = LayerForecastGroup::from_token("620304", ReportPart::Taf).unwrap();
        assert_eq!(g.kind, LayerForecastKind::IcingLightRimeInCloud);
        assert_eq!(g.base_height.integer, Some(3000));
        assert_eq!(g.top_height.integer, Some(7000));
    }

    #[test]
    fn test_turbulence_layer() {
        let g = LayerForecastGroup::from_token("5X0509", ReportPart::Taf).unwrap();
        assert_eq!(g.kind, LayerForecastKind::TurbulenceExtreme);
        assert_eq!(g.base_height.integer, Some(500));
        assert_eq!(g.top_height.integer, Some(9500));
    }

    #[test]
    fn test_rejects() {
        assert_eq!(LayerForecastGroup::from_token("620304", ReportPart::Metar), None);
        assert_eq!(LayerForecastGroup::from_token("6X0304", ReportPart::Taf), None);
        assert_eq!(LayerForecastGroup::from_token("62030", ReportPart::Taf), None);
    }
}
