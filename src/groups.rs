//! The recognized group kinds and the `Group` sum type tying them
//! together.
//!
//! Each group kind lives in its own module and knows three things: how to
//! parse one token of its shape (given the report part the token sits
//! in), whether it can absorb the token that follows it, and whether its
//! decoded fields are cross-consistent (`is_valid`).

mod cloud;
mod cloud_types;
mod colour_code;
mod keyword;
mod layer_forecast;
mod lightning;
mod location;
mod low_mid_high_cloud;
mod min_max_temperature;
mod misc;
mod plain_text;
mod precipitation;
mod pressure;
mod pressure_tendency;
mod rainfall;
mod report_time;
mod runway_state;
mod runway_visual_range;
mod sea_surface;
mod secondary_location;
mod temperature;
mod temperature_forecast;
mod trend;
mod unknown;
mod vicinity;
mod visibility;
mod weather;
mod wind;

pub use cloud::{CloudAmount, CloudGroup, ConvectiveType};
pub use cloud_types::{CloudType, CloudTypesGroup};
pub use colour_code::{ColourCode, ColourCodeGroup};
pub use keyword::KeywordGroup;
pub use layer_forecast::{LayerForecastGroup, LayerForecastKind};
pub use lightning::{LightningFrequency, LightningGroup, LightningType};
pub use location::LocationGroup;
pub use low_mid_high_cloud::{HighCloudLayer, LowCloudLayer, LowMidHighCloudGroup, MidCloudLayer};
pub use min_max_temperature::{MinMaxTemperatureGroup, ObservationPeriod};
pub use misc::{MiscGroup, MiscKind};
pub use plain_text::PlainTextGroup;
pub use precipitation::{PrecipitationGroup, PrecipitationKind};
pub use pressure::{PressureGroup, PressureKind};
pub use pressure_tendency::{PressureTendency, PressureTendencyGroup, PressureTrend};
pub use rainfall::{RainfallGroup, RainfallKind};
pub use report_time::ReportTimeGroup;
pub use runway_state::{RunwayDeposits, RunwayStateGroup, RunwayStateKind, SurfaceExtent};
pub use runway_visual_range::{RunwayVisualRangeGroup, RvrTrend};
pub use sea_surface::SeaSurfaceGroup;
pub use secondary_location::SecondaryLocationGroup;
pub use temperature::TemperatureGroup;
pub use temperature_forecast::{TemperatureForecastGroup, TemperaturePoint};
pub use trend::{Probability, TrendGroup, TrendKind};
pub use unknown::UnknownGroup;
pub use vicinity::{VicinityGroup, VicinityPhenomenon};
pub use visibility::VisibilityGroup;
pub use weather::{Weather, WeatherDescriptor, WeatherGroup, WeatherQualifier};
pub use wind::{WindGroup, WindKind};

/// One parsed group of a METAR or TAF report.
///
/// Every variant carries decoded values rather than raw text; the raw
/// substring each group was built from is available through
/// [`extended_parse`](crate::extended_parse).
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    /// A fixed keyword such as `METAR`, `AUTO` or `RMK`
    Keyword(KeywordGroup),
    /// The reporting station identifier
    Location(LocationGroup),
    /// The report issue time
    ReportTime(ReportTimeGroup),
    /// A trend: `NOSIG`, `BECMG`, `TEMPO`, probabilities and time spans
    Trend(TrendGroup),
    /// Surface wind, wind shear or a variable wind sector
    Wind(WindGroup),
    /// Prevailing or directional visibility
    Visibility(VisibilityGroup),
    /// A cloud layer, vertical visibility or a no-clouds keyword
    Cloud(CloudGroup),
    /// Current, recent or forecast weather phenomena
    Weather(WeatherGroup),
    /// Air temperature and dew point
    Temperature(TemperatureGroup),
    /// A TAF minimum or maximum temperature forecast
    TemperatureForecast(TemperatureForecastGroup),
    /// Atmospheric pressure (QNH, forecast QNH, SLP, QFE)
    Pressure(PressureGroup),
    /// Runway visual range
    RunwayVisualRange(RunwayVisualRangeGroup),
    /// Runway surface state
    RunwayState(RunwayStateGroup),
    /// Wind shear in the lower layers for a runway
    SecondaryLocation(SecondaryLocationGroup),
    /// Recent rainfall amounts, or a missing icing/precipitation marker
    Rainfall(RainfallGroup),
    /// Sea surface temperature and wave state
    SeaSurface(SeaSurfaceGroup),
    /// A military aerodrome colour code
    ColourCode(ColourCodeGroup),
    /// 6-hourly or 24-hourly minimum/maximum temperature remark
    MinMaxTemperature(MinMaxTemperatureGroup),
    /// A precipitation amount remark
    Precipitation(PrecipitationGroup),
    /// A TAF icing or turbulence layer forecast
    LayerForecast(LayerForecastGroup),
    /// A 3-hourly pressure tendency remark
    PressureTendency(PressureTendencyGroup),
    /// Observed cloud types with okta amounts
    CloudTypes(CloudTypesGroup),
    /// The `8/xxx` low/mid/high cloud layer remark
    LowMidHighCloud(LowMidHighCloudGroup),
    /// A lightning observation remark
    Lightning(LightningGroup),
    /// A phenomenon observed in the vicinity of the station
    Vicinity(VicinityGroup),
    /// Sunshine duration and corrected-observation groups
    Misc(MiscGroup),
    /// A token (or run of tokens) no grammar recognized
    PlainText(PlainTextGroup),
    /// A token plain text cannot carry
    Unknown(UnknownGroup),
}

/// The outcome of asking a group to absorb its successor.
#[derive(PartialEq, Clone, Debug)]
pub(crate) enum Combined {
    /// The next group stands on its own.
    Not,
    /// Both groups merged into the contained one.
    Replaced(Group),
    /// The previous group was speculative and the continuation does not
    /// fit: demote it to plain text and keep the next group separate.
    Invalidated,
}

/// The coarse view of a group the report-level state machine runs on.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub(crate) enum SyntaxClass {
    Other,
    MetarKeyword,
    SpeciKeyword,
    TafKeyword,
    Cor,
    Amd,
    Location,
    ReportTime,
    TimeSpan,
    Cnl,
    Nil,
    Rmk,
    Maintenance,
}

impl Group {
    /// Asks this group whether it absorbs `next`.
    pub(crate) fn combine(&self, next: &Group) -> Combined {
        match self {
            Group::Trend(g) => g.combine(next),
            Group::Wind(g) => g.combine(next),
            Group::Visibility(g) => g.combine(next),
            Group::SecondaryLocation(g) => g.combine(next),
            Group::Rainfall(g) => g.combine(next),
            Group::MinMaxTemperature(g) => g.combine(next),
            Group::Precipitation(g) => g.combine(next),
            Group::Lightning(g) => g.combine(next),
            Group::Vicinity(g) => g.combine(next),
            Group::PlainText(g) => g.combine(next),
            _ => Combined::Not,
        }
    }

    /// Cross-field consistency of the decoded values.
    ///
    /// Parsing accepts internally consistent groups even when their fields
    /// contradict each other (a gust at or below the wind speed, a
    /// reserved contamination code); this predicate exposes that verdict.
    pub fn is_valid(&self) -> bool {
        match self {
            Group::Keyword(_) => true,
            Group::Location(_) => true,
            Group::ReportTime(g) => g.is_valid(),
            Group::Trend(g) => g.is_valid(),
            Group::Wind(g) => g.is_valid(),
            Group::Visibility(g) => g.is_valid(),
            Group::Cloud(g) => g.is_valid(),
            Group::Weather(_) => true,
            Group::Temperature(g) => g.is_valid(),
            Group::TemperatureForecast(g) => g.is_valid(),
            Group::Pressure(_) => true,
            Group::RunwayVisualRange(g) => g.is_valid(),
            Group::RunwayState(g) => g.is_valid(),
            Group::SecondaryLocation(g) => g.is_valid(),
            Group::Rainfall(g) => g.is_valid(),
            Group::SeaSurface(g) => g.is_valid(),
            Group::ColourCode(_) => true,
            Group::MinMaxTemperature(_) => true,
            Group::Precipitation(g) => g.is_valid(),
            Group::LayerForecast(_) => true,
            Group::PressureTendency(_) => true,
            Group::CloudTypes(_) => true,
            Group::LowMidHighCloud(g) => g.is_valid(),
            Group::Lightning(g) => g.is_valid(),
            Group::Vicinity(g) => g.is_valid(),
            Group::Misc(_) => true,
            Group::PlainText(g) => g.is_valid(),
            Group::Unknown(_) => true,
        }
    }

    /// The syntax class driving the report-level state machine.
    pub(crate) fn syntax_class(&self) -> SyntaxClass {
        match self {
            Group::Keyword(keyword) => match keyword {
                KeywordGroup::Metar => SyntaxClass::MetarKeyword,
                KeywordGroup::Speci => SyntaxClass::SpeciKeyword,
                KeywordGroup::Taf => SyntaxClass::TafKeyword,
                KeywordGroup::Cor => SyntaxClass::Cor,
                KeywordGroup::Amd => SyntaxClass::Amd,
                KeywordGroup::Nil => SyntaxClass::Nil,
                KeywordGroup::Cnl => SyntaxClass::Cnl,
                KeywordGroup::Rmk => SyntaxClass::Rmk,
                KeywordGroup::MaintenanceIndicator => SyntaxClass::Maintenance,
                _ => SyntaxClass::Other,
            },
            Group::Location(_) => SyntaxClass::Location,
            Group::ReportTime(_) => SyntaxClass::ReportTime,
            Group::Trend(trend) => {
                if trend.is_time_span() {
                    SyntaxClass::TimeSpan
                } else {
                    SyntaxClass::Other
                }
            }
            _ => SyntaxClass::Other,
        }
    }
}
