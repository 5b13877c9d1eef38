use chumsky::prelude::*;

use crate::parsers::{digit_slice, slashes};
use crate::types::{ReportPart, Temperature, WaveHeight};

/// Sea surface temperature and wave state: `W15/S3`, `W12/H75`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeaSurfaceGroup {
    /// Sea surface temperature
    pub surface_temperature: Temperature,
    /// State of sea or measured wave height
    pub waves: WaveHeight,
}

impl SeaSurfaceGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Metar {
            return None;
        }
        let temperature = choice((digit_slice(2, 2), slashes(2)));
        let waves = one_of("SH")
            .then(choice((
                digit_slice(1, 3),
                slashes(3),
                slashes(1),
            )))
            .to_slice();
        let parser = just("W")
            .ignore_then(temperature)
            .then_ignore(just("/"))
            .then(waves)
            .then_ignore(end());
        let (temperature, waves) = parser.parse(token).into_result().ok()?;
        Some(SeaSurfaceGroup {
            surface_temperature: Temperature::from_token(temperature)?,
            waves: WaveHeight::from_token(waves)?,
        })
    }

    /// The group carries no cross-field constraints.
    pub fn is_valid(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StateOfSea, WaveHeightKind};

    #[test]
    fn test_state_of_sea() {
        let g = SeaSurfaceGroup::from_token("W15/S3", ReportPart::Metar).unwrap();
        assert_eq!(g.surface_temperature.value(), Some(15.0));
        assert_eq!(g.waves.kind, WaveHeightKind::StateOfSea);
        assert_eq!(g.waves.state_of_sea(), StateOfSea::Slight);
    }

    #[test]
    fn test_wave_height() {
        let g = SeaSurfaceGroup::from_token("W12/H75", ReportPart::Metar).unwrap();
        assert_eq!(g.waves.kind, WaveHeightKind::WaveHeight);
        assert!((g.waves.wave_height().unwrap() - 7.5).abs() < 1e-4);
    }

    #[test]
    fn test_not_reported() {
        let g = SeaSurfaceGroup::from_token("W///S4", ReportPart::Metar).unwrap();
        assert_eq!(g.surface_temperature.value(), None);
        let g = SeaSurfaceGroup::from_token("W15/H///", ReportPart::Metar).unwrap();
        assert!(!g.waves.is_reported());
        let g = SeaSurfaceGroup::from_token("W15/S/", ReportPart::Metar).unwrap();
        assert!(!g.waves.is_reported());
    }

    #[test]
    fn test_rejects() {
        assert_eq!(SeaSurfaceGroup::from_token("W15/S3", ReportPart::Taf), None);
        assert_eq!(SeaSurfaceGroup::from_token("W15/X3", ReportPart::Metar), None);
        assert_eq!(SeaSurfaceGroup::from_token("W15/S33", ReportPart::Metar), None);
    }
}
