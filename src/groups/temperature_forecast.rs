use chumsky::prelude::*;

use crate::parsers::digit_slice;
use crate::types::{ReportPart, Temperature, Time};

/// A TAF temperature forecast: `TX12/0415Z`, `TNM03/0504Z`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureForecastGroup {
    /// Whether a minimum, maximum or unspecified point is forecast
    pub point: TemperaturePoint,
    /// The forecast temperature
    pub temperature: Temperature,
    /// When the extreme is expected (`ddhh`)
    pub time: Time,
}

/// The forecast point of a temperature forecast group.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperaturePoint {
    /// Plain `T` prefix
    NotSpecified,
    /// Forecast minimum (`TN`)
    Minimum,
    /// Forecast maximum (`TX`)
    Maximum,
}

impl TemperatureForecastGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Taf {
            return None;
        }
        let point = choice((
            just("TX").map(|_| TemperaturePoint::Maximum),
            just("TN").map(|_| TemperaturePoint::Minimum),
            just("T").map(|_| TemperaturePoint::NotSpecified),
        ));
        let temperature = just("M").or_not().then(digit_slice(2, 2)).to_slice();
        let parser = group((
            point,
            temperature,
            just("/").ignore_then(digit_slice(4, 4)),
            just("Z").map(|_| ()),
        ))
        .then_ignore(end());
        let (point, temperature, time, ()) = parser.parse(token).into_result().ok()?;
        Some(TemperatureForecastGroup {
            point,
            temperature: Temperature::from_token(temperature)?,
            time: Time::from_ddhh(time)?,
        })
    }

    /// The forecast time must be in range.
    pub fn is_valid(&self) -> bool {
        self.time.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_points() {
        let g = TemperatureForecastGroup::from_token("TX12/0415Z", ReportPart::Taf).unwrap();
        assert_eq!(g.point, TemperaturePoint::Maximum);
        assert_eq!(g.temperature.value(), Some(12.0));
        assert_eq!(g.time.day, Some(4));
        assert_eq!(g.time.hour, 15);
        let g = TemperatureForecastGroup::from_token("TNM03/0504Z", ReportPart::Taf).unwrap();
        assert_eq!(g.point, TemperaturePoint::Minimum);
        assert_eq!(g.temperature.value(), Some(-3.0));
        let g = TemperatureForecastGroup::from_token("T24/0412Z", ReportPart::Taf).unwrap();
        assert_eq!(g.point, TemperaturePoint::NotSpecified);
    }

    #[test]
    fn test_rejects() {
        assert_eq!(
            TemperatureForecastGroup::from_token("TX12/0415Z", ReportPart::Metar),
            None
        );
        assert_eq!(
            TemperatureForecastGroup::from_token("TX12/0415", ReportPart::Taf),
            None
        );
        assert_eq!(
            TemperatureForecastGroup::from_token("TX123/0415Z", ReportPart::Taf),
            None
        );
    }

    #[test]
    fn test_out_of_range_time() {
        let g = TemperatureForecastGroup::from_token("TX12/0455Z", ReportPart::Taf).unwrap();
        assert!(!g.is_valid());
    }
}
