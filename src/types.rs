//! Decoded physical quantities shared by the report groups.
//!
//! Every type here is a small value object: a unit-tagged numeric payload
//! plus whatever modifier the textual form can carry. "Not reported"
//! (slashed-out) data is encoded as [`None`] in the payload, never as a
//! magic number.

mod direction;
mod distance;
mod precipitation;
mod pressure;
mod runway;
mod speed;
mod surface_friction;
mod temperature;
mod time;
mod wave_height;

pub use direction::{Cardinal, Direction};
pub use distance::{Distance, DistanceModifier, DistanceUnit};
pub use precipitation::{Precipitation, PrecipitationStatus, PrecipitationUnit};
pub use pressure::{Pressure, PressureUnit};
pub use runway::{Runway, RunwayDesignator};
pub use speed::{Speed, SpeedUnit};
pub use surface_friction::{BrakingAction, SurfaceFriction, SurfaceFrictionStatus};
pub use temperature::{Temperature, TemperatureUnit};
pub use time::Time;
pub use wave_height::{StateOfSea, WaveHeight, WaveHeightKind, WaveHeightUnit};

/// The part of a report a token belongs to.
///
/// Which group grammars are even attempted for a token depends on its
/// report part; a remark-only grammar never fires inside a METAR body and
/// vice versa.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportPart {
    /// Not part of any recognizable report section
    #[display("unknown")]
    Unknown,
    /// The report header (type, location, issue time, validity span)
    #[display("header")]
    Header,
    /// The body of a METAR or SPECI report
    #[display("METAR body")]
    Metar,
    /// The body of a TAF report
    #[display("TAF body")]
    Taf,
    /// The remarks section introduced by `RMK`
    #[display("remarks")]
    Rmk,
}
