use crate::types::ReportPart;

/// A military aerodrome colour code, optionally prefixed with `BLACK`.
///
/// The `BLACK` prefix is concatenated directly to the colour
/// (`BLACKBLU`), meaning the aerodrome is unusable for reasons other than
/// weather.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColourCodeGroup {
    /// The colour code
    pub code: ColourCode,
    /// Whether `BLACK` was prefixed to the code
    pub code_black: bool,
}

/// Colour codes, best (blue) to worst (red).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColourCode {
    /// Visibility over 8 km, cloud base above 2500 ft
    Blue,
    /// Visibility over 5 km, cloud base above 1500 ft
    White,
    /// Visibility over 3.7 km, cloud base above 700 ft
    Green,
    /// Visibility over 2.5 km, cloud base above 500 ft
    Yellow1,
    /// Visibility over 1.6 km, cloud base above 300 ft
    Yellow2,
    /// Visibility over 800 m, cloud base above 200 ft
    Amber,
    /// Visibility below 800 m or cloud base below 200 ft
    Red,
}

impl ColourCodeGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Metar {
            return None;
        }
        let (code_black, colour) = match token.strip_prefix("BLACK") {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        let code = match colour {
            "BLU" => ColourCode::Blue,
            "WHT" => ColourCode::White,
            "GRN" => ColourCode::Green,
            "YLO1" => ColourCode::Yellow1,
            "YLO2" => ColourCode::Yellow2,
            "AMB" => ColourCode::Amber,
            "RED" => ColourCode::Red,
            _ => return None,
        };
        Some(ColourCodeGroup { code, code_black })
    }
}
