//! The report-level parser: tokenization, the syntax state machine, the
//! group dispatcher and result assembly.
//!
//! A report is consumed one whitespace-delimited token at a time. Each
//! token is offered to the group grammars eligible for the current report
//! part; the parsed group's coarse syntax class then advances the state
//! machine, which decides the report kind, assigns report parts and
//! raises structural errors.

use crate::groups::{
    CloudGroup, CloudTypesGroup, ColourCodeGroup, Combined, Group, KeywordGroup,
    LayerForecastGroup, LightningGroup, LocationGroup, LowMidHighCloudGroup,
    MinMaxTemperatureGroup, MiscGroup, PlainTextGroup, PrecipitationGroup, PressureGroup,
    PressureTendencyGroup, RainfallGroup, ReportTimeGroup, RunwayStateGroup,
    RunwayVisualRangeGroup, SeaSurfaceGroup, SecondaryLocationGroup, SyntaxClass,
    TemperatureForecastGroup, TemperatureGroup, TrendGroup, UnknownGroup, VicinityGroup,
    VisibilityGroup, WeatherGroup, WindGroup,
};
use crate::types::ReportPart;
use crate::{ErrorKind, GroupInfo, ReportError, ReportKind, ReportMetadata};

/// Reports longer than this many tokens are rejected outright.
const MAX_GROUPS: usize = 100;

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
enum State {
    ReportTypeOrLocation,
    Correction,
    Location,
    ReportTime,
    TimeSpan,
    ReportBodyBeginMetar,
    ReportBodyBeginMetarRepeatParse,
    ReportBodyMetar,
    ReportBodyBeginTaf,
    ReportBodyTaf,
    RemarkMetar,
    RemarkTaf,
    MaintenanceIndicator,
    Nil,
    Cnl,
    Error,
}

struct Machine {
    state: State,
    kind: ReportKind,
    error: Option<ErrorKind>,
}

impl Machine {
    fn new() -> Self {
        Machine {
            state: State::ReportTypeOrLocation,
            kind: ReportKind::Unknown,
            error: None,
        }
    }

    fn is_error(&self) -> bool {
        self.state == State::Error
    }

    fn reparse_required(&self) -> bool {
        self.state == State::ReportBodyBeginMetarRepeatParse
    }

    fn fail(&mut self, error: ErrorKind) {
        self.state = State::Error;
        self.error = Some(error);
    }

    fn report_part(&self) -> ReportPart {
        match self.state {
            State::ReportTypeOrLocation
            | State::Correction
            | State::Location
            | State::ReportTime
            | State::TimeSpan => ReportPart::Header,
            State::ReportBodyBeginMetar
            | State::ReportBodyBeginMetarRepeatParse
            | State::ReportBodyMetar => ReportPart::Metar,
            State::ReportBodyBeginTaf | State::ReportBodyTaf => ReportPart::Taf,
            State::RemarkMetar | State::RemarkTaf => ReportPart::Rmk,
            State::MaintenanceIndicator | State::Nil | State::Cnl | State::Error => {
                ReportPart::Unknown
            }
        }
    }

    fn transition(&mut self, class: SyntaxClass) {
        match self.state {
            State::ReportTypeOrLocation => self.from_report_type_or_location(class),
            State::Correction => self.from_correction(class),
            State::Location => match class {
                SyntaxClass::Location => self.state = State::ReportTime,
                _ => self.fail(ErrorKind::ExpectedLocation),
            },
            State::ReportTime => self.from_report_time(class),
            State::TimeSpan => self.from_time_span(class),
            State::ReportBodyBeginMetar | State::ReportBodyBeginMetarRepeatParse => {
                self.from_report_body_begin_metar(class);
            }
            State::ReportBodyMetar => self.from_report_body_metar(class),
            State::ReportBodyBeginTaf => self.from_report_body_begin_taf(class),
            State::ReportBodyTaf => self.from_report_body_taf(class),
            State::RemarkMetar => {
                if class == SyntaxClass::Maintenance {
                    self.state = State::MaintenanceIndicator;
                }
            }
            State::RemarkTaf => {
                if class == SyntaxClass::Maintenance {
                    self.fail(ErrorKind::MaintenanceIndicatorAllowedInMetarOnly);
                }
            }
            State::MaintenanceIndicator => {
                self.fail(ErrorKind::UnexpectedGroupAfterMaintenanceIndicator);
            }
            State::Nil => self.fail(ErrorKind::UnexpectedGroupAfterNil),
            State::Cnl => self.fail(ErrorKind::UnexpectedGroupAfterCnl),
            State::Error => {}
        }
    }

    fn from_report_type_or_location(&mut self, class: SyntaxClass) {
        match class {
            SyntaxClass::MetarKeyword | SyntaxClass::SpeciKeyword => {
                self.kind = ReportKind::Metar;
                self.state = State::Correction;
            }
            SyntaxClass::TafKeyword => {
                self.kind = ReportKind::Taf;
                self.state = State::Correction;
            }
            SyntaxClass::Location => self.state = State::ReportTime,
            _ => self.fail(ErrorKind::ExpectedReportTypeOrLocation),
        }
    }

    fn from_correction(&mut self, class: SyntaxClass) {
        match class {
            SyntaxClass::Amd => {
                self.state = State::Location;
                if self.kind != ReportKind::Taf {
                    self.fail(ErrorKind::AmdAllowedInTafOnly);
                }
            }
            SyntaxClass::Cor => self.state = State::Location,
            SyntaxClass::Location => self.state = State::ReportTime,
            _ => self.fail(ErrorKind::ExpectedLocation),
        }
    }

    fn from_report_time(&mut self, class: SyntaxClass) {
        match class {
            SyntaxClass::ReportTime => {
                self.state = if self.kind == ReportKind::Metar {
                    State::ReportBodyBeginMetar
                } else {
                    State::TimeSpan
                };
            }
            SyntaxClass::TimeSpan => {
                if self.kind == ReportKind::Taf {
                    self.state = State::ReportBodyBeginTaf;
                } else {
                    self.fail(ErrorKind::ExpectedReportTime);
                }
            }
            SyntaxClass::Nil => self.state = State::Nil,
            _ => self.fail(ErrorKind::ExpectedReportTime),
        }
    }

    fn from_time_span(&mut self, class: SyntaxClass) {
        match class {
            SyntaxClass::TimeSpan => {
                self.kind = ReportKind::Taf;
                self.state = State::ReportBodyBeginTaf;
            }
            SyntaxClass::Nil => self.state = State::Nil,
            _ => {
                // A METAR without the METAR keyword: the body starts right
                // after the report time, so the current token has to be
                // parsed again under METAR body rules.
                if self.kind == ReportKind::Unknown {
                    self.kind = ReportKind::Metar;
                    self.state = State::ReportBodyBeginMetarRepeatParse;
                } else {
                    self.fail(ErrorKind::ExpectedTimeSpan);
                }
            }
        }
    }

    fn from_report_body_begin_metar(&mut self, class: SyntaxClass) {
        match class {
            SyntaxClass::Nil => self.state = State::Nil,
            SyntaxClass::Cnl => self.fail(ErrorKind::CnlAllowedInTafOnly),
            SyntaxClass::Rmk => self.state = State::RemarkMetar,
            SyntaxClass::Maintenance => self.state = State::MaintenanceIndicator,
            _ => self.state = State::ReportBodyMetar,
        }
    }

    fn from_report_body_metar(&mut self, class: SyntaxClass) {
        match class {
            SyntaxClass::Rmk => self.state = State::RemarkMetar,
            SyntaxClass::Maintenance => self.state = State::MaintenanceIndicator,
            SyntaxClass::Nil | SyntaxClass::Cnl => {
                self.fail(ErrorKind::UnexpectedNilOrCnlInReportBody);
            }
            _ => {}
        }
    }

    fn from_report_body_begin_taf(&mut self, class: SyntaxClass) {
        match class {
            SyntaxClass::Nil => self.state = State::Nil,
            SyntaxClass::Cnl => self.state = State::Cnl,
            SyntaxClass::Rmk => self.state = State::RemarkTaf,
            SyntaxClass::Maintenance => {
                self.fail(ErrorKind::MaintenanceIndicatorAllowedInMetarOnly);
            }
            _ => self.state = State::ReportBodyTaf,
        }
    }

    fn from_report_body_taf(&mut self, class: SyntaxClass) {
        match class {
            SyntaxClass::Rmk => self.state = State::RemarkTaf,
            SyntaxClass::Nil | SyntaxClass::Cnl => {
                self.fail(ErrorKind::UnexpectedNilOrCnlInReportBody);
            }
            SyntaxClass::Maintenance => {
                self.fail(ErrorKind::MaintenanceIndicatorAllowedInMetarOnly);
            }
            _ => {}
        }
    }

    fn final_transition(&mut self) {
        match self.state {
            State::ReportBodyMetar
            | State::ReportBodyTaf
            | State::RemarkMetar
            | State::RemarkTaf
            | State::MaintenanceIndicator
            | State::Nil
            | State::Cnl
            | State::Error => {}
            State::ReportTypeOrLocation => self.fail(ErrorKind::EmptyReport),
            State::Correction
            | State::Location
            | State::ReportTime
            | State::TimeSpan
            | State::ReportBodyBeginMetar
            | State::ReportBodyBeginMetarRepeatParse
            | State::ReportBodyBeginTaf => self.fail(ErrorKind::UnexpectedReportEnd),
        }
    }
}

struct RawToken<'a> {
    text: &'a str,
    start: usize,
    ends_report: bool,
}

// Tokens are runs of bytes between spaces, tabs, carriage returns and
// line feeds. A trailing '=' on a token ends the report.
fn tokenize(report: &str) -> Vec<RawToken<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, b) in report.bytes().enumerate() {
        let is_separator = matches!(b, b' ' | b'\t' | b'\r' | b'\n');
        match (start, is_separator) {
            (None, false) => start = Some(i),
            (Some(s), true) => {
                tokens.push(span_token(report, s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(span_token(report, s, report.len()));
    }
    tokens
}

fn span_token(report: &str, start: usize, end: usize) -> RawToken<'_> {
    let mut text = &report[start..end];
    let ends_report = text.ends_with('=');
    if ends_report {
        text = &text[..text.len() - 1];
    }
    RawToken {
        text,
        start,
        ends_report,
    }
}

/// Offers a token to each group grammar in order of specificity; the
/// first accepting grammar wins. Plain text and the unknown group are the
/// fallbacks that always accept.
fn dispatch(token: &str, part: ReportPart, metadata: &ReportMetadata) -> Group {
    if let Some(group) = KeywordGroup::from_token(token, part) {
        return Group::Keyword(group);
    }
    if let Some(group) = LocationGroup::from_token(token, part) {
        return Group::Location(group);
    }
    if let Some(group) = ReportTimeGroup::from_token(token, part) {
        return Group::ReportTime(group);
    }
    if let Some(group) = TrendGroup::from_token(token, part) {
        return Group::Trend(group);
    }
    if let Some(group) = WindGroup::from_token(token, part) {
        return Group::Wind(group);
    }
    if let Some(group) = VisibilityGroup::from_token(token, part) {
        return Group::Visibility(group);
    }
    if let Some(group) = CloudGroup::from_token(token, part) {
        return Group::Cloud(group);
    }
    if let Some(group) = WeatherGroup::from_token(token, part) {
        return Group::Weather(group);
    }
    if let Some(group) = TemperatureGroup::from_token(token, part) {
        return Group::Temperature(group);
    }
    if let Some(group) = TemperatureForecastGroup::from_token(token, part) {
        return Group::TemperatureForecast(group);
    }
    if let Some(group) = PressureGroup::from_token(token, part) {
        return Group::Pressure(group);
    }
    if let Some(group) = RunwayVisualRangeGroup::from_token(token, part) {
        return Group::RunwayVisualRange(group);
    }
    if let Some(group) = RunwayStateGroup::from_token(token, part) {
        return Group::RunwayState(group);
    }
    if let Some(group) = SecondaryLocationGroup::from_token(token, part) {
        return Group::SecondaryLocation(group);
    }
    if let Some(group) = RainfallGroup::from_token(token, part) {
        return Group::Rainfall(group);
    }
    if let Some(group) = SeaSurfaceGroup::from_token(token, part) {
        return Group::SeaSurface(group);
    }
    if let Some(group) = ColourCodeGroup::from_token(token, part) {
        return Group::ColourCode(group);
    }
    if let Some(group) = MinMaxTemperatureGroup::from_token(token, part) {
        return Group::MinMaxTemperature(group);
    }
    if let Some(group) = PrecipitationGroup::from_token(token, part, metadata.report_time) {
        return Group::Precipitation(group);
    }
    if let Some(group) = LayerForecastGroup::from_token(token, part) {
        return Group::LayerForecast(group);
    }
    if let Some(group) = PressureTendencyGroup::from_token(token, part) {
        return Group::PressureTendency(group);
    }
    if let Some(group) = CloudTypesGroup::from_token(token, part) {
        return Group::CloudTypes(group);
    }
    if let Some(group) = LowMidHighCloudGroup::from_token(token, part) {
        return Group::LowMidHighCloud(group);
    }
    if let Some(group) = LightningGroup::from_token(token, part) {
        return Group::Lightning(group);
    }
    if let Some(group) = VicinityGroup::from_token(token, part) {
        return Group::Vicinity(group);
    }
    if let Some(group) = MiscGroup::from_token(token, part) {
        return Group::Misc(group);
    }
    if let Some(group) = PlainTextGroup::from_token(token) {
        return Group::PlainText(group);
    }
    Group::Unknown(UnknownGroup::new(token))
}

// Attribute flags raised by an accepted group. Only runs when the token
// did not raise a structural error, so a misplaced keyword leaves the
// metadata untouched.
fn update_metadata(metadata: &mut ReportMetadata, group: &Group, state_before: State) {
    match group {
        Group::Keyword(keyword) => match keyword {
            KeywordGroup::Speci => {
                if state_before == State::ReportTypeOrLocation {
                    metadata.is_speci = true;
                }
            }
            KeywordGroup::Amd => metadata.is_amended = true,
            KeywordGroup::Cor => metadata.is_correctional = true,
            KeywordGroup::Auto => metadata.is_automated = true,
            KeywordGroup::Ao1 => metadata.is_ao1 = true,
            KeywordGroup::Ao1a => metadata.is_ao1a = true,
            KeywordGroup::Ao2 => metadata.is_ao2 = true,
            KeywordGroup::Ao2a => metadata.is_ao2a = true,
            KeywordGroup::Nospeci => metadata.is_nospeci = true,
            KeywordGroup::CorrectionNumber(number) => metadata.correction_number = *number,
            _ => {}
        },
        Group::Location(location) => {
            if metadata.station.is_none() {
                metadata.station = Some(location.station.clone());
            }
        }
        Group::ReportTime(report_time) => metadata.report_time = Some(report_time.time),
        Group::Trend(trend) => {
            // Only the header validity span is report metadata; body
            // trend spans stay inside their groups.
            if trend.is_time_span()
                && matches!(state_before, State::ReportTime | State::TimeSpan)
            {
                metadata.time_span_from = trend.time_from;
                metadata.time_span_until = trend.time_until;
            }
        }
        _ => {}
    }
}

pub(crate) fn parse_internal(report: &str) -> (ReportMetadata, Vec<GroupInfo>) {
    let mut machine = Machine::new();
    let mut metadata = ReportMetadata::default();
    let mut groups: Vec<GroupInfo> = Vec::new();
    let mut processed = 0usize;

    for token in tokenize(report) {
        if machine.is_error() {
            break;
        }
        if token.text.is_empty() {
            if token.ends_report {
                break;
            }
            continue;
        }
        processed += 1;
        if processed > MAX_GROUPS {
            machine.fail(ErrorKind::ReportTooLarge);
            metadata.error = Some(ReportError {
                kind: ErrorKind::ReportTooLarge,
                start: token.start,
                length: token.text.len(),
            });
            break;
        }

        let mut state_before = machine.state;
        let mut part = machine.report_part();
        let mut group = dispatch(token.text, part, &metadata);
        machine.transition(group.syntax_class());
        if machine.reparse_required() {
            state_before = machine.state;
            part = machine.report_part();
            group = dispatch(token.text, part, &metadata);
            machine.transition(group.syntax_class());
        }

        if let Some(kind) = machine.error {
            if metadata.error.is_none() {
                metadata.error = Some(ReportError {
                    kind,
                    start: token.start,
                    length: token.text.len(),
                });
            }
        } else {
            update_metadata(&mut metadata, &group, state_before);
            match machine.state {
                State::Nil => metadata.is_nil = true,
                State::Cnl => metadata.is_cancelled = true,
                State::MaintenanceIndicator => metadata.maintenance_indicator = true,
                _ => {}
            }
        }

        enum Action {
            Append,
            Replace(Group),
            Demote,
        }
        let action = match groups.last() {
            None => Action::Append,
            Some(last) => match last.group.combine(&group) {
                Combined::Not => Action::Append,
                Combined::Replaced(merged) => Action::Replace(merged),
                Combined::Invalidated => Action::Demote,
            },
        };
        match action {
            Action::Append => groups.push(GroupInfo {
                group,
                part,
                raw: token.text.to_string(),
            }),
            Action::Replace(merged) => {
                if let Some(last) = groups.last_mut() {
                    last.group = merged;
                    last.raw.push(' ');
                    last.raw.push_str(token.text);
                }
            }
            Action::Demote => {
                if let Some(last) = groups.last_mut() {
                    last.group = Group::PlainText(PlainTextGroup::new(&last.raw));
                }
                groups.push(GroupInfo {
                    group,
                    part,
                    raw: token.text.to_string(),
                });
            }
        }

        if token.ends_report {
            break;
        }
    }

    machine.final_transition();
    if let Some(kind) = machine.error
        && metadata.error.is_none()
    {
        metadata.error = Some(ReportError {
            kind,
            start: report.len(),
            length: 0,
        });
    }
    metadata.kind = machine.kind;
    (metadata, groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_splits_on_any_whitespace() {
        let tokens = tokenize("METAR\tZZZZ\r\n041115Z  24005KT");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["METAR", "ZZZZ", "041115Z", "24005KT"]);
        assert_eq!(tokens[1].start, 6);
    }

    #[test]
    fn test_tokenizer_end_of_report() {
        let tokens = tokenize("Q1011 NOSIG= IGNORED");
        assert!(!tokens[0].ends_report);
        assert!(tokens[1].ends_report);
        assert_eq!(tokens[1].text, "NOSIG");
        // The tokenizer itself keeps trailing tokens; the parser stops at
        // the sentinel.
        assert_eq!(tokens[2].text, "IGNORED");
    }

    #[test]
    fn test_lone_equals_sign() {
        let tokens = tokenize("ZZZZ =");
        assert_eq!(tokens[1].text, "");
        assert!(tokens[1].ends_report);
    }

    #[test]
    fn test_report_too_large() {
        let mut report = String::from("METAR ZZZZ 041115Z ");
        for _ in 0..MAX_GROUPS {
            report.push_str("RMK ");
        }
        let (metadata, _) = parse_internal(&report);
        assert_eq!(
            metadata.error.map(|e| e.kind),
            Some(ErrorKind::ReportTooLarge)
        );
    }
}
