use crate::parsers::str_to_uint;

const METERS_PER_FOOT: f32 = 0.3048;

/// Sea surface description: either a state-of-sea ordinal (`S3`) or an
/// explicit wave height in decimeters (`H25`).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveHeight {
    /// Which of the two textual forms was reported
    pub kind: WaveHeightKind,
    decimeters: Option<u32>,
}

/// The two forms a sea-surface wave group can take.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaveHeightKind {
    /// A descriptive state-of-sea code (WMO table 3700)
    StateOfSea,
    /// An actual wave height
    WaveHeight,
}

/// Wave height units exposed by [`WaveHeight::to_unit`].
#[derive(PartialEq, Eq, Copy, Clone, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaveHeightUnit {
    /// Meters
    #[display("m")]
    Meters,
    /// Feet
    #[display("ft")]
    Feet,
}

/// State of the sea surface (WMO table 3700).
#[derive(PartialEq, Eq, Copy, Clone, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateOfSea {
    /// Not reported
    #[display("not reported")]
    NotReported,
    /// Code 0, wave height 0 m
    #[display("calm (glassy)")]
    CalmGlassy,
    /// Code 1, up to 0.1 m
    #[display("calm (rippled)")]
    CalmRippled,
    /// Code 2, up to 0.5 m
    #[display("smooth")]
    Smooth,
    /// Code 3, up to 1.2 m
    #[display("slight")]
    Slight,
    /// Code 4, up to 2.5 m
    #[display("moderate")]
    Moderate,
    /// Code 5, up to 4 m
    #[display("rough")]
    Rough,
    /// Code 6, up to 6 m
    #[display("very rough")]
    VeryRough,
    /// Code 7, up to 9 m
    #[display("high")]
    High,
    /// Code 8, up to 14 m
    #[display("very high")]
    VeryHigh,
    /// Code 9, over 14 m
    #[display("phenomenal")]
    Phenomenal,
}

// Upper wave height limit of each state-of-sea code, in decimeters.
const MAX_CALM_GLASSY: u32 = 0;
const MAX_CALM_RIPPLED: u32 = 1;
const MAX_SMOOTH: u32 = 5;
const MAX_SLIGHT: u32 = 12;
const MAX_MODERATE: u32 = 25;
const MAX_ROUGH: u32 = 40;
const MAX_VERY_ROUGH: u32 = 60;
const MAX_HIGH: u32 = 90;
const MAX_VERY_HIGH: u32 = 140;
const MIN_PHENOMENAL: u32 = 141;

impl WaveHeight {
    /// Decodes `Sd` (state of sea), `Hd`/`Hdd`/`Hddd` (decimeters), or the
    /// slashed forms `S/` and `H///`.
    pub fn from_token(s: &str) -> Option<Self> {
        if s.len() < 2 || s.len() > 4 {
            return None;
        }
        match (s.as_bytes()[0], &s[1..]) {
            (b'S', "/") => Some(WaveHeight {
                kind: WaveHeightKind::StateOfSea,
                decimeters: None,
            }),
            (b'H', "///") => Some(WaveHeight {
                kind: WaveHeightKind::WaveHeight,
                decimeters: None,
            }),
            (b'S', code) => {
                if code.len() != 1 {
                    return None;
                }
                let code = str_to_uint(code, 0, 1)?;
                let decimeters = match code {
                    0 => MAX_CALM_GLASSY,
                    1 => MAX_CALM_RIPPLED,
                    2 => MAX_SMOOTH,
                    3 => MAX_SLIGHT,
                    4 => MAX_MODERATE,
                    5 => MAX_ROUGH,
                    6 => MAX_VERY_ROUGH,
                    7 => MAX_HIGH,
                    8 => MAX_VERY_HIGH,
                    _ => MIN_PHENOMENAL,
                };
                Some(WaveHeight {
                    kind: WaveHeightKind::StateOfSea,
                    decimeters: Some(decimeters),
                })
            }
            (b'H', height) => {
                let h = str_to_uint(height, 0, height.len())?;
                Some(WaveHeight {
                    kind: WaveHeightKind::WaveHeight,
                    decimeters: Some(h),
                })
            }
            _ => None,
        }
    }

    /// The wave height in meters, when reported.
    pub fn wave_height(&self) -> Option<f32> {
        Some(self.decimeters? as f32 * 0.1)
    }

    /// Whether a value is present.
    pub fn is_reported(&self) -> bool {
        self.decimeters.is_some()
    }

    /// Converts the wave height into `unit`.
    pub fn to_unit(&self, unit: WaveHeightUnit) -> Option<f32> {
        let meters = self.wave_height()?;
        Some(match unit {
            WaveHeightUnit::Meters => meters,
            WaveHeightUnit::Feet => meters / METERS_PER_FOOT,
        })
    }

    /// Classifies the wave height into a state-of-sea code.
    pub fn state_of_sea(&self) -> StateOfSea {
        let Some(h) = self.decimeters else {
            return StateOfSea::NotReported;
        };
        match h {
            0 => StateOfSea::CalmGlassy,
            _ if h <= MAX_CALM_RIPPLED => StateOfSea::CalmRippled,
            _ if h <= MAX_SMOOTH => StateOfSea::Smooth,
            _ if h <= MAX_SLIGHT => StateOfSea::Slight,
            _ if h <= MAX_MODERATE => StateOfSea::Moderate,
            _ if h <= MAX_ROUGH => StateOfSea::Rough,
            _ if h <= MAX_VERY_ROUGH => StateOfSea::VeryRough,
            _ if h <= MAX_HIGH => StateOfSea::High,
            _ if h <= MAX_VERY_HIGH => StateOfSea::VeryHigh,
            _ => StateOfSea::Phenomenal,
        }
    }
}
