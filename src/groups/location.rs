use chumsky::prelude::*;

use crate::traits::TokenParse;
use crate::types::ReportPart;

/// The 4-character reporting station identifier (ICAO location code).
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationGroup {
    /// The station identifier, e.g. `EGLL`
    pub station: String,
}

impl TokenParse for LocationGroup {
    fn parser<'src>() -> impl Parser<'src, &'src str, Self, extra::Default> {
        regex("[A-Z][A-Z0-9]{3}").map(|station: &str| LocationGroup {
            station: station.to_string(),
        })
    }
}

impl LocationGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Header {
            return None;
        }
        Self::parse_token(token)
    }
}
