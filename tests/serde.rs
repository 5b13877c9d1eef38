//! Serialization of parse results behind the default `serde` feature.

#![cfg(feature = "serde")]

#[test]
fn parse_result_round_trips_through_json() {
    let result = wxreport::parse("METAR ZZZZ 041115Z 24005KT 9999 FEW040 25/18 Q1011 NOSIG=");
    let json = serde_json::to_string(&result).unwrap();
    let back: wxreport::ParseResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}

#[test]
fn metadata_serializes_its_flags() {
    let result = wxreport::parse("SPECI ZZZZ 041115Z 24005KT 9999 FEW040 25/18 Q1011=");
    let json = serde_json::to_string(&result.metadata).unwrap();
    assert!(json.contains("\"is_speci\":true"));
}
