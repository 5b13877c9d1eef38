#![deny(missing_docs)]

//! # METAR and TAF parsing library for Rust
//!
//! Parses aviation weather reports (METAR routine observations and TAF
//! aerodrome forecasts) into strongly typed groups plus report metadata.
//! Parsing never fails: tokens no grammar recognizes are kept as plain
//! text, and structural problems are reported through
//! [`ReportMetadata::error`] instead of an `Err`.
//!
//! ## Quick usage
//!
//! ```rust
//! let result = wxreport::parse("METAR ZZZZ 041115Z 24005KT 9999 FEW040 25/18 Q1011 NOSIG=");
//! assert_eq!(result.metadata.kind, wxreport::ReportKind::Metar);
//! assert!(result.metadata.error.is_none());
//! for group in &result.groups {
//!     println!("{group:?}");
//! }
//! ```
//!
//! [`extended_parse`] additionally reports, for every group, the report
//! part it was parsed in and the raw substring it came from.
//!
//! ## Issues
//!
//! METARs and TAFs are ragged formats with plenty of regional dialects.
//! If a report decodes in a surprising way, please open an issue and
//! include the full report string.

mod groups;
mod parser;
mod parsers;
mod traits;
mod types;

pub use groups::*;
pub use types::*;

use annotate_snippets::{AnnotationKind, Group as Diagnostic, Level, Renderer, Snippet};

/// The kind of a parsed report.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash, Default, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportKind {
    /// The kind could not be determined
    #[default]
    #[display("unknown report")]
    Unknown,
    /// A METAR or SPECI observation
    #[display("METAR")]
    Metar,
    /// A TAF forecast
    #[display("TAF")]
    Taf,
}

/// The structural errors a report can be rejected with.
///
/// Only the first structural error is reported; groups after the
/// triggering token are not retained.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The report contains no groups at all
    #[display("the report is empty")]
    EmptyReport,
    /// The report starts with neither a report type nor a location
    #[display("expected a report type keyword or a location")]
    ExpectedReportTypeOrLocation,
    /// A location was expected here
    #[display("expected a location")]
    ExpectedLocation,
    /// A report time was expected here
    #[display("expected the report time")]
    ExpectedReportTime,
    /// A TAF validity span was expected here
    #[display("expected a validity time span")]
    ExpectedTimeSpan,
    /// The report ended in the middle of its header or before its body
    #[display("unexpected end of report")]
    UnexpectedReportEnd,
    /// Nothing may follow the NIL keyword
    #[display("unexpected group after NIL")]
    UnexpectedGroupAfterNil,
    /// Nothing may follow the CNL keyword
    #[display("unexpected group after CNL")]
    UnexpectedGroupAfterCnl,
    /// Nothing may follow the maintenance indicator
    #[display("unexpected group after the maintenance indicator")]
    UnexpectedGroupAfterMaintenanceIndicator,
    /// NIL and CNL are only legal before the report body
    #[display("NIL or CNL inside the report body")]
    UnexpectedNilOrCnlInReportBody,
    /// Only a TAF can be amended
    #[display("AMD is allowed in TAF reports only")]
    AmdAllowedInTafOnly,
    /// Only a TAF can be cancelled
    #[display("CNL is allowed in TAF reports only")]
    CnlAllowedInTafOnly,
    /// The maintenance indicator belongs to METAR reports
    #[display("the maintenance indicator is allowed in METAR reports only")]
    MaintenanceIndicatorAllowedInMetarOnly,
    /// The report exceeds the group count limit
    #[display("the report contains too many groups")]
    ReportTooLarge,
    /// The parser reached an impossible state
    #[display("internal parser state error")]
    InternalParserState,
}

/// A structural error, pointing at the token that triggered it.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportError {
    /// What went wrong
    pub kind: ErrorKind,
    /// Byte offset of the triggering token in the report string
    pub start: usize,
    /// Byte length of the triggering token (0 at end of report)
    pub length: usize,
}

impl ReportError {
    /// Renders the error as an annotated snippet of the report it came
    /// from.
    ///
    /// `report` should be the same string that was parsed; the annotation
    /// points at the triggering token.
    pub fn annotate(&self, report: &str) -> String {
        let end = (self.start + self.length).min(report.len());
        let start = self.start.min(end);
        let message = self.kind.to_string();
        let diagnostic = &[Diagnostic::with_title(Level::ERROR.primary_title(&message)).element(
            Snippet::source(report).annotation(AnnotationKind::Primary.span(start..end)),
        )];
        format!("{}", Renderer::plain().render(diagnostic))
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ReportError {}

/// Report-wide data collected while the header and keywords are parsed.
#[derive(PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportMetadata {
    /// Whether the report is a METAR or a TAF
    pub kind: ReportKind,
    /// The first structural error, if the report is malformed
    pub error: Option<ReportError>,
    /// The reporting station identifier
    pub station: Option<String>,
    /// The report issue time
    pub report_time: Option<Time>,
    /// Start of the TAF validity span
    pub time_span_from: Option<Time>,
    /// End of the TAF validity span
    pub time_span_until: Option<Time>,
    /// The report is a SPECI (unscheduled observation)
    pub is_speci: bool,
    /// The station produces no SPECI reports (`NOSPECI`)
    pub is_nospeci: bool,
    /// The report was produced automatically (`AUTO`)
    pub is_automated: bool,
    /// Automated station without a precipitation discriminator (`AO1`)
    pub is_ao1: bool,
    /// `AO1` station with an augmenting observer (`AO1A`)
    pub is_ao1a: bool,
    /// Automated station with a precipitation discriminator (`AO2`)
    pub is_ao2: bool,
    /// `AO2` station with an augmenting observer (`AO2A`)
    pub is_ao2a: bool,
    /// The report is missing (`NIL`)
    pub is_nil: bool,
    /// The forecast was cancelled (`CNL`)
    pub is_cancelled: bool,
    /// The forecast amends an earlier one (`AMD`)
    pub is_amended: bool,
    /// The report corrects an earlier one (`COR`)
    pub is_correctional: bool,
    /// The automated station needs maintenance (`$`)
    pub maintenance_indicator: bool,
    /// The correction number from a `CCA`..`CCZ` remark; 0 if none
    pub correction_number: u32,
}

/// One parsed group with its report part and source text, as returned by
/// [`extended_parse`].
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupInfo {
    /// The decoded group
    pub group: Group,
    /// The report part the group was parsed in
    pub part: ReportPart,
    /// The raw substring the group was built from; combined groups carry
    /// their tokens joined by single spaces
    pub raw: String,
}

/// The result of [`parse`].
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// Report-wide metadata
    pub metadata: ReportMetadata,
    /// The parsed groups, in report order
    pub groups: Vec<Group>,
}

/// The result of [`extended_parse`].
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedParseResult {
    /// Report-wide metadata
    pub metadata: ReportMetadata,
    /// The parsed groups with their report parts and source substrings
    pub groups: Vec<GroupInfo>,
}

/// Parses a METAR or TAF report.
///
/// Parsing is total: unrecognized tokens become
/// [`PlainTextGroup`]/[`UnknownGroup`] entries and structural problems
/// are reported via [`ReportMetadata::error`].
pub fn parse(report: &str) -> ParseResult {
    let (metadata, groups) = parser::parse_internal(report);
    ParseResult {
        metadata,
        groups: groups.into_iter().map(|info| info.group).collect(),
    }
}

/// Parses a METAR or TAF report, keeping each group's report part and
/// raw source substring.
pub fn extended_parse(report: &str) -> ExtendedParseResult {
    let (metadata, groups) = parser::parse_internal(report);
    ExtendedParseResult { metadata, groups }
}
