use crate::types::ReportPart;

/// A fixed word with a well-known meaning, mapped by report part.
///
/// Keywords either steer the report-level syntax (`METAR`, `RMK`, `NIL`)
/// or raise an attribute flag on the report metadata (`AUTO`, `AO2`,
/// `NOSPECI`).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeywordGroup {
    /// Report type `METAR`
    Metar,
    /// Report type `SPECI` (an unscheduled METAR)
    Speci,
    /// Report type `TAF`
    Taf,
    /// Amended TAF
    Amd,
    /// Missing report
    Nil,
    /// Cancelled TAF
    Cnl,
    /// Corrected report
    Cor,
    /// Fully automated report
    Auto,
    /// Aerodrome closed by snow (`SNOCLO` / `R/SNOCLO`)
    RunwaySnoclo,
    /// Ceiling and visibility OK
    Cavok,
    /// No significant weather
    Nsw,
    /// Remarks follow
    Rmk,
    /// Wind shear conditions forecast
    Wsconds,
    /// The `$` maintenance indicator
    MaintenanceIndicator,
    /// Automated station without precipitation discriminator
    Ao1,
    /// `AO1` with an augmenting observer present
    Ao1a,
    /// Automated station with precipitation discriminator
    Ao2,
    /// `AO2` with an augmenting observer present
    Ao2a,
    /// No SPECI reports are produced at this station
    Nospeci,
    /// Pressure falling rapidly
    Presfr,
    /// Pressure rising rapidly
    Presrr,
    /// RVR missing
    Rvrno,
    /// Present-weather identifier inoperative
    Pwino,
    /// Precipitation amount not available
    Pno,
    /// Freezing rain sensor inoperative
    Fzrano,
    /// Thunderstorm information not available
    Tsno,
    /// Sea-level pressure not available
    Slpno,
    /// Frost on the indicator
    Froin,
    /// `CCA`..`CCZ`: the report correction number (1 for `CCA`)
    CorrectionNumber(u32),
}

impl KeywordGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part == ReportPart::Header {
            match token {
                "METAR" => return Some(KeywordGroup::Metar),
                "SPECI" => return Some(KeywordGroup::Speci),
                "TAF" => return Some(KeywordGroup::Taf),
                "AMD" => return Some(KeywordGroup::Amd),
                _ => {}
            }
        }
        if (part == ReportPart::Header || part == ReportPart::Metar) && token == "COR" {
            return Some(KeywordGroup::Cor);
        }
        if part == ReportPart::Header || part == ReportPart::Metar || part == ReportPart::Taf {
            match token {
                "NIL" => return Some(KeywordGroup::Nil),
                "CNL" => return Some(KeywordGroup::Cnl),
                _ => {}
            }
        }
        if part == ReportPart::Metar {
            match token {
                "AUTO" => return Some(KeywordGroup::Auto),
                "SNOCLO" | "R/SNOCLO" => return Some(KeywordGroup::RunwaySnoclo),
                _ => {}
            }
        }
        if (part == ReportPart::Metar || part == ReportPart::Taf) && token == "WSCONDS" {
            return Some(KeywordGroup::Wsconds);
        }
        if part == ReportPart::Metar || part == ReportPart::Taf {
            match token {
                "CAVOK" => return Some(KeywordGroup::Cavok),
                "NSW" => return Some(KeywordGroup::Nsw),
                "RMK" => return Some(KeywordGroup::Rmk),
                _ => {}
            }
        }
        if part == ReportPart::Rmk {
            match token {
                "AO1" => return Some(KeywordGroup::Ao1),
                "AO1A" => return Some(KeywordGroup::Ao1a),
                "AO2" => return Some(KeywordGroup::Ao2),
                "AO2A" => return Some(KeywordGroup::Ao2a),
                "NOSPECI" => return Some(KeywordGroup::Nospeci),
                "PRESFR" => return Some(KeywordGroup::Presfr),
                "PRESRR" => return Some(KeywordGroup::Presrr),
                "RVRNO" => return Some(KeywordGroup::Rvrno),
                "PWINO" => return Some(KeywordGroup::Pwino),
                "PNO" => return Some(KeywordGroup::Pno),
                "FZRANO" => return Some(KeywordGroup::Fzrano),
                "TSNO" => return Some(KeywordGroup::Tsno),
                "SLPNO" => return Some(KeywordGroup::Slpno),
                "FROIN" => return Some(KeywordGroup::Froin),
                _ => {}
            }
            if let Some(letter) = token.strip_prefix("CC")
                && letter.len() == 1
                && letter.as_bytes()[0].is_ascii_uppercase()
            {
                let number = u32::from(letter.as_bytes()[0] - b'A') + 1;
                return Some(KeywordGroup::CorrectionNumber(number));
            }
        }
        if token == "$" {
            return Some(KeywordGroup::MaintenanceIndicator);
        }
        None
    }
}
