use crate::types::{Pressure, ReportPart};

/// An atmospheric pressure group.
#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressureGroup {
    /// What the pressure describes
    pub kind: PressureKind,
    /// The decoded pressure
    pub pressure: Pressure,
}

/// What a pressure group reports.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureKind {
    /// Observed mean-sea-level pressure (`Q1013`, `A2992`, `SLP221`)
    ObservedQnh,
    /// Forecast lowest sea-level pressure (`QNH2979INS`)
    ForecastLowestQnh,
    /// Observed actual station-level pressure (`QFE761`)
    ObservedQfe,
}

impl PressureGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        match part {
            ReportPart::Metar => Some(PressureGroup {
                kind: PressureKind::ObservedQnh,
                pressure: Pressure::from_token(token)?,
            }),
            ReportPart::Taf => Some(PressureGroup {
                kind: PressureKind::ForecastLowestQnh,
                pressure: Pressure::from_forecast_token(token)?,
            }),
            ReportPart::Rmk => {
                if let Some(pressure) = Pressure::from_slp_token(token) {
                    return Some(PressureGroup {
                        kind: PressureKind::ObservedQnh,
                        pressure,
                    });
                }
                Some(PressureGroup {
                    kind: PressureKind::ObservedQfe,
                    pressure: Pressure::from_qfe_token(token)?,
                })
            }
            _ => None,
        }
    }
}
