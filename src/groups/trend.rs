use chumsky::prelude::*;

use crate::parsers::digit_slice;
use crate::types::{ReportPart, Time};

use super::{Combined, Group};

/// A weather-change or forecast-segment group.
///
/// Trends assemble themselves over several tokens: `PROB40` followed by
/// `TEMPO` followed by `0420/0424` ends up as one group. A group whose
/// `kind` is still [`None`] is such a deficient composition awaiting its
/// siblings and reports itself invalid.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendGroup {
    /// What the (possibly combined) group announces
    pub kind: Option<TrendKind>,
    /// A `PROB30`/`PROB40` probability attached to the trend
    pub probability: Option<Probability>,
    /// Start of the trend or span
    pub time_from: Option<Time>,
    /// End of the trend or span
    pub time_until: Option<Time>,
    /// Exact event time (`AT` form)
    pub time_at: Option<Time>,
}

/// The kinds of trend a report can carry.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrendKind {
    /// No significant changes expected
    Nosig,
    /// Conditions becoming
    Becmg,
    /// Temporary fluctuations
    Tempo,
    /// Intermittent fluctuations
    Inter,
    /// Rapid change from the given time (`FMddhhmm`)
    From,
    /// A validity time span `ddhh/ddhh`
    TimeSpan,
}

/// Probability attached to a TAF forecast segment.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Probability {
    /// 30 % probability
    Prob30,
    /// 40 % probability
    Prob40,
}

impl TrendGroup {
    fn of_kind(kind: TrendKind) -> Self {
        TrendGroup {
            kind: Some(kind),
            probability: None,
            time_from: None,
            time_until: None,
            time_at: None,
        }
    }

    fn of_probability(probability: Probability) -> Self {
        TrendGroup {
            kind: None,
            probability: Some(probability),
            time_from: None,
            time_until: None,
            time_at: None,
        }
    }

    fn empty() -> Self {
        TrendGroup {
            kind: None,
            probability: None,
            time_from: None,
            time_until: None,
            time_at: None,
        }
    }

    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part == ReportPart::Metar || part == ReportPart::Taf {
            match token {
                "BECMG" => return Some(Self::of_kind(TrendKind::Becmg)),
                "TEMPO" => return Some(Self::of_kind(TrendKind::Tempo)),
                "INTER" => return Some(Self::of_kind(TrendKind::Inter)),
                _ => {}
            }
        }
        if part == ReportPart::Taf {
            match token {
                "PROB30" => return Some(Self::of_probability(Probability::Prob30)),
                "PROB40" => return Some(Self::of_probability(Probability::Prob40)),
                _ => {}
            }
            if let Some(span) = Self::from_time_span(token) {
                return Some(span);
            }
            if let Some(from) = Self::from_fm(token) {
                return Some(from);
            }
        }
        if part == ReportPart::Metar {
            if token == "NOSIG" {
                return Some(Self::of_kind(TrendKind::Nosig));
            }
            if let Some(time) = Self::from_trend_time(token) {
                return Some(time);
            }
        }
        if part == ReportPart::Header {
            if let Some(span) = Self::from_time_span(token) {
                return Some(span);
            }
        }
        None
    }

    /// `ddhh/ddhh`, e.g. a TAF validity span.
    fn from_time_span(token: &str) -> Option<Self> {
        let parser = digit_slice(4, 4)
            .then_ignore(just("/"))
            .then(digit_slice(4, 4))
            .then_ignore(end());
        let (from, until) = parser.parse(token).into_result().ok()?;
        Some(TrendGroup {
            kind: Some(TrendKind::TimeSpan),
            time_from: Time::from_ddhh(from),
            time_until: Time::from_ddhh(until),
            ..Self::empty()
        })
    }

    /// `FMddhhmm`, the long TAF change-from marker.
    fn from_fm(token: &str) -> Option<Self> {
        let parser = just("FM").ignore_then(digit_slice(6, 6)).then_ignore(end());
        let time = parser.parse(token).into_result().ok()?;
        Some(TrendGroup {
            kind: Some(TrendKind::From),
            time_from: Time::from_ddhhmm(time),
            ..Self::empty()
        })
    }

    /// `FMhhmm` / `TLhhmm` / `AThhmm`, the short METAR trend times.
    fn from_trend_time(token: &str) -> Option<Self> {
        let role = choice((
            just("FM").map(|_| TrendTimeRole::From),
            just("TL").map(|_| TrendTimeRole::Until),
            just("AT").map(|_| TrendTimeRole::At),
        ));
        let parser = role.then(digit_slice(4, 4)).then_ignore(end());
        let (role, digits) = parser.parse(token).into_result().ok()?;
        let time = Time::from_ddhhmm(digits);
        let mut result = Self::empty();
        match role {
            TrendTimeRole::From => result.time_from = time,
            TrendTimeRole::Until => result.time_until = time,
            TrendTimeRole::At => result.time_at = time,
        }
        Some(result)
    }

    pub(crate) fn combine(&self, next: &Group) -> Combined {
        let Group::Trend(next) = next else {
            return Combined::Not;
        };
        let mut merged = *self;
        if merged.merge_probability_and_trend_kind(next)
            || merged.merge_trend_kind_and_time(next)
            || merged.merge_probability_and_time_span(next)
            || merged.merge_deficient_and_trend_time(next)
        {
            return Combined::Replaced(Group::Trend(merged));
        }
        Combined::Not
    }

    // PROB30/PROB40 + TEMPO/INTER.
    fn merge_probability_and_trend_kind(&mut self, next: &TrendGroup) -> bool {
        if !self.is_probability_group() || !next.is_trend_kind_group() {
            return false;
        }
        if next.kind != Some(TrendKind::Tempo) && next.kind != Some(TrendKind::Inter) {
            return false;
        }
        self.kind = next.kind;
        true
    }

    // BECMG/TEMPO/INTER + time span or trend time.
    fn merge_trend_kind_and_time(&mut self, next: &TrendGroup) -> bool {
        if !matches!(
            self.kind,
            Some(TrendKind::Becmg) | Some(TrendKind::Tempo) | Some(TrendKind::Inter)
        ) {
            return false;
        }
        if !next.is_time_span() && !next.is_trend_time_group() {
            return false;
        }
        if !Self::can_merge_times(self, next) {
            return false;
        }
        self.merge_times(next);
        true
    }

    // PROB30/PROB40 + time span.
    fn merge_probability_and_time_span(&mut self, next: &TrendGroup) -> bool {
        if !self.is_probability_group() || !next.is_time_span() {
            return false;
        }
        self.merge_times(next);
        self.kind = Some(TrendKind::TimeSpan);
        true
    }

    // A bare FM/TL/AT composition picking up further trend times.
    fn merge_deficient_and_trend_time(&mut self, next: &TrendGroup) -> bool {
        if self.kind.is_some() || self.probability.is_some() {
            return false;
        }
        if !next.is_trend_time_group() {
            return false;
        }
        if !Self::can_merge_times(self, next) {
            return false;
        }
        self.merge_times(next);
        true
    }

    // Each of from/until/at may be contributed once, and an exact time
    // excludes a span.
    fn can_merge_times(a: &TrendGroup, b: &TrendGroup) -> bool {
        if a.time_from.is_some() && b.time_from.is_some() {
            return false;
        }
        if a.time_until.is_some() && b.time_until.is_some() {
            return false;
        }
        if a.time_at.is_some() && b.time_at.is_some() {
            return false;
        }
        if a.time_at.is_some() && (b.time_from.is_some() || b.time_until.is_some()) {
            return false;
        }
        if b.time_at.is_some() && (a.time_from.is_some() || a.time_until.is_some()) {
            return false;
        }
        true
    }

    fn merge_times(&mut self, next: &TrendGroup) {
        if self.time_from.is_none() {
            self.time_from = next.time_from;
        }
        if self.time_until.is_none() {
            self.time_until = next.time_until;
        }
        if self.time_at.is_none() {
            self.time_at = next.time_at;
        }
    }

    fn is_probability_group(&self) -> bool {
        self.kind.is_none()
            && self.probability.is_some()
            && self.time_from.is_none()
            && self.time_until.is_none()
            && self.time_at.is_none()
    }

    fn is_trend_kind_group(&self) -> bool {
        matches!(
            self.kind,
            Some(TrendKind::Becmg) | Some(TrendKind::Tempo) | Some(TrendKind::Inter)
        ) && self.probability.is_none()
            && self.time_from.is_none()
            && self.time_until.is_none()
            && self.time_at.is_none()
    }

    fn is_trend_time_group(&self) -> bool {
        if self.kind.is_some() || self.probability.is_some() {
            return false;
        }
        let set = [
            self.time_from.is_some(),
            self.time_until.is_some(),
            self.time_at.is_some(),
        ];
        set.iter().filter(|present| **present).count() == 1
    }

    /// A complete `ddhh/ddhh` span: from and until, nothing else.
    pub(crate) fn is_time_span(&self) -> bool {
        self.kind == Some(TrendKind::TimeSpan)
            && self.probability.is_none()
            && self.time_from.is_some()
            && self.time_until.is_some()
            && self.time_at.is_none()
    }

    /// Deficient compositions are invalid; carried times must be in range,
    /// and a time span must actually span forward (month wrap allowed).
    pub fn is_valid(&self) -> bool {
        for time in [&self.time_from, &self.time_until, &self.time_at].into_iter().flatten() {
            if !time.is_valid() {
                return false;
            }
        }
        if self.kind == Some(TrendKind::TimeSpan)
            && let (Some(from), Some(until)) = (self.time_from, self.time_until)
            && from == until
        {
            return false;
        }
        self.kind.is_some()
    }
}

#[derive(Copy, Clone)]
enum TrendTimeRole {
    From,
    Until,
    At,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combined(prev: TrendGroup, next: TrendGroup) -> Option<TrendGroup> {
        match prev.combine(&Group::Trend(next)) {
            Combined::Replaced(Group::Trend(merged)) => Some(merged),
            _ => None,
        }
    }

    #[test]
    fn test_fixed_trends() {
        assert_eq!(
            TrendGroup::from_token("NOSIG", ReportPart::Metar).unwrap().kind,
            Some(TrendKind::Nosig)
        );
        assert_eq!(TrendGroup::from_token("NOSIG", ReportPart::Taf), None);
        assert_eq!(
            TrendGroup::from_token("BECMG", ReportPart::Taf).unwrap().kind,
            Some(TrendKind::Becmg)
        );
        assert_eq!(TrendGroup::from_token("PROB30", ReportPart::Metar), None);
        assert_eq!(
            TrendGroup::from_token("PROB40", ReportPart::Taf)
                .unwrap()
                .probability,
            Some(Probability::Prob40)
        );
    }

    #[test]
    fn test_time_span() {
        let span = TrendGroup::from_token("0412/0512", ReportPart::Header).unwrap();
        assert!(span.is_time_span());
        assert_eq!(span.time_from.unwrap().day, Some(4));
        assert_eq!(span.time_until.unwrap().hour, 12);
        assert_eq!(TrendGroup::from_token("0412/051", ReportPart::Header), None);
        assert_eq!(TrendGroup::from_token("0412/0512", ReportPart::Metar), None);
    }

    #[test]
    fn test_trend_times() {
        let fm = TrendGroup::from_token("FM1445", ReportPart::Metar).unwrap();
        assert_eq!(fm.kind, None);
        assert_eq!(fm.time_from.unwrap().minute, 45);
        let at = TrendGroup::from_token("AT1600", ReportPart::Metar).unwrap();
        assert!(at.time_at.is_some());
        let long_fm = TrendGroup::from_token("FM050300", ReportPart::Taf).unwrap();
        assert_eq!(long_fm.kind, Some(TrendKind::From));
        assert_eq!(long_fm.time_from.unwrap().day, Some(5));
        assert_eq!(TrendGroup::from_token("FM050300", ReportPart::Metar), None);
    }

    #[test]
    fn test_prob_tempo_span_combination() {
        let prob = TrendGroup::from_token("PROB40", ReportPart::Taf).unwrap();
        let tempo = TrendGroup::from_token("TEMPO", ReportPart::Taf).unwrap();
        let merged = combined(prob, tempo).unwrap();
        assert_eq!(merged.kind, Some(TrendKind::Tempo));
        assert_eq!(merged.probability, Some(Probability::Prob40));

        let span = TrendGroup::from_token("0420/0424", ReportPart::Taf).unwrap();
        let merged = combined(merged, span).unwrap();
        assert_eq!(merged.kind, Some(TrendKind::Tempo));
        assert_eq!(merged.time_from.unwrap().hour, 20);
        assert_eq!(merged.time_until.unwrap().hour, 24);
        assert!(merged.is_valid());
    }

    #[test]
    fn test_becmg_with_trend_times() {
        let becmg = TrendGroup::from_token("BECMG", ReportPart::Metar).unwrap();
        let fm = TrendGroup::from_token("FM1445", ReportPart::Metar).unwrap();
        let tl = TrendGroup::from_token("TL1600", ReportPart::Metar).unwrap();
        let merged = combined(combined(becmg, fm).unwrap(), tl).unwrap();
        assert_eq!(merged.kind, Some(TrendKind::Becmg));
        assert!(merged.time_from.is_some() && merged.time_until.is_some());
    }

    #[test]
    fn test_duplicate_times_refuse_to_combine() {
        let becmg = TrendGroup::from_token("BECMG", ReportPart::Metar).unwrap();
        let fm = TrendGroup::from_token("FM1445", ReportPart::Metar).unwrap();
        let with_from = combined(becmg, fm).unwrap();
        let fm2 = TrendGroup::from_token("FM1600", ReportPart::Metar).unwrap();
        assert_eq!(combined(with_from, fm2), None);
        let at = TrendGroup::from_token("AT1700", ReportPart::Metar).unwrap();
        assert_eq!(combined(with_from, at), None);
    }

    #[test]
    fn test_validity() {
        let deficient = TrendGroup::from_token("FM1445", ReportPart::Metar).unwrap();
        assert!(!deficient.is_valid());
        let span = TrendGroup::from_token("0412/0412", ReportPart::Header).unwrap();
        assert!(!span.is_valid());
        let bad_hour = TrendGroup::from_token("0425/0512", ReportPart::Header).unwrap();
        assert!(!bad_hour.is_valid());
    }
}
