//! End-to-end decoding of real-world reports.

use wxreport::{
    CloudAmount, ColourCode, Group, MiscKind, ObservationPeriod, PrecipitationKind, PressureKind,
    PressureTendency, PressureUnit, ReportKind, RunwayDeposits, SpeedUnit, Weather,
    WeatherQualifier, WindKind,
};

fn find<'a, F>(result: &'a wxreport::ExtendedParseResult, predicate: F) -> &'a Group
where
    F: Fn(&Group) -> bool,
{
    &result
        .groups
        .iter()
        .find(|info| predicate(&info.group))
        .expect("expected group missing")
        .group
}

#[test]
fn european_metar_with_variable_wind() {
    let result = wxreport::extended_parse("EGHI 282120Z 19015KT 140V220 6000 RA SCT006 BKN009 16/14 Q1006");
    assert_eq!(result.metadata.kind, ReportKind::Metar);
    assert!(result.metadata.error.is_none());
    assert_eq!(result.metadata.station.as_deref(), Some("EGHI"));

    // The variable sector folds into the surface wind group.
    let wind = result
        .groups
        .iter()
        .find(|info| info.raw == "19015KT 140V220")
        .expect("the wind sector did not combine");
    let Group::Wind(wind) = &wind.group else {
        panic!("expected a wind group");
    };
    assert_eq!(wind.kind, WindKind::SurfaceWindWithVariableSector);
    assert_eq!(wind.sector_begin.degrees(), Some(140));
    assert_eq!(wind.sector_end.degrees(), Some(220));

    let clouds: Vec<_> = result
        .groups
        .iter()
        .filter_map(|info| match &info.group {
            Group::Cloud(cloud) => Some(cloud),
            _ => None,
        })
        .collect();
    assert_eq!(clouds.len(), 2);
    assert_eq!(clouds[0].amount, CloudAmount::Scattered);
    assert_eq!(clouds[0].height().integer, Some(600));
    assert_eq!(clouds[1].amount, CloudAmount::Broken);
}

#[test]
fn automated_metar_with_rvr() {
    let result = wxreport::extended_parse(
        "EKVG 232250Z AUTO 31006KT 1000 R12/0800N R30/P1500D BR OVC001/// 09/09 Q0995 \
         RMK OVC000/// WIND SKEID 29012KT",
    );
    assert!(result.metadata.error.is_none());
    assert!(result.metadata.is_automated);

    let rvrs: Vec<_> = result
        .groups
        .iter()
        .filter_map(|info| match &info.group {
            Group::RunwayVisualRange(rvr) => Some(rvr),
            _ => None,
        })
        .collect();
    assert_eq!(rvrs.len(), 2);
    assert_eq!(rvrs[0].runway.number, 12);
    assert_eq!(rvrs[0].visual_range.integer, Some(800));
    assert_eq!(rvrs[1].visual_range.integer, Some(1500));

    let Group::Weather(weather) = find(&result, |g| matches!(g, Group::Weather(_))) else {
        unreachable!();
    };
    assert_eq!(weather.weather, vec![Weather::Mist]);

    // The free-text part of the remarks survives as one chunk.
    let last = result.groups.last().unwrap();
    assert_eq!(last.raw, "OVC000/// WIND SKEID 29012KT");
}

#[test]
fn recent_weather_and_colour_code() {
    let result = wxreport::extended_parse(
        "ETSN 261720Z 32003KT 9999 -RA FEW020 SCT070 BKN090 17/15 Q1014 RERA BLU",
    );
    assert!(result.metadata.error.is_none());

    let weather_groups: Vec<_> = result
        .groups
        .iter()
        .filter_map(|info| match &info.group {
            Group::Weather(weather) => Some(weather),
            _ => None,
        })
        .collect();
    assert_eq!(weather_groups.len(), 2);
    assert_eq!(weather_groups[0].qualifier, WeatherQualifier::Light);
    assert_eq!(weather_groups[1].qualifier, WeatherQualifier::Recent);
    assert_eq!(weather_groups[1].weather, vec![Weather::Rain]);

    let Group::ColourCode(colour) = find(&result, |g| matches!(g, Group::ColourCode(_))) else {
        unreachable!();
    };
    assert_eq!(colour.code, ColourCode::Blue);
    assert!(!colour.code_black);
}

#[test]
fn russian_metar_with_runway_state_and_sea_surface() {
    let result = wxreport::extended_parse(
        "UHMM 041150Z 36005MPS 9999 OVC018 M02/M06 Q1019 R10/290450 W12/S5 RMK QFE757",
    );
    assert!(result.metadata.error.is_none());

    let Group::Wind(wind) = find(&result, |g| matches!(g, Group::Wind(_))) else {
        unreachable!();
    };
    assert_eq!(wind.speed.unit, SpeedUnit::MetersPerSecond);

    let Group::RunwayState(state) = find(&result, |g| matches!(g, Group::RunwayState(_))) else {
        unreachable!();
    };
    assert_eq!(state.runway.number, 10);
    assert_eq!(state.deposits, RunwayDeposits::WetAndWaterPatches);
    assert_eq!(state.deposit_depth.value(), Some(4.0));
    assert!((state.surface_friction.coefficient().unwrap() - 0.50).abs() < 1e-4);

    let Group::SeaSurface(sea) = find(&result, |g| matches!(g, Group::SeaSurface(_))) else {
        unreachable!();
    };
    assert_eq!(sea.surface_temperature.value(), Some(12.0));

    let Group::Pressure(qfe) = find(
        &result,
        |g| matches!(g, Group::Pressure(p) if p.kind == PressureKind::ObservedQfe),
    ) else {
        unreachable!();
    };
    assert_eq!(qfe.pressure.unit, PressureUnit::MillimetersOfMercury);
    assert_eq!(qfe.pressure.value, Some(757.0));
}

#[test]
fn us_metar_with_coded_remarks() {
    let result = wxreport::extended_parse(
        "KJFK 041151Z 24009KT 10SM FEW250 22/12 A3003 \
         RMK AO2 SLP168 T02220117 10228 20206 55003 8/578 98096 SC1CI1",
    );
    assert!(result.metadata.error.is_none());
    assert_eq!(result.metadata.kind, ReportKind::Metar);
    assert!(result.metadata.is_ao2);

    let Group::Pressure(altimeter) = find(
        &result,
        |g| matches!(g, Group::Pressure(p) if p.pressure.unit == PressureUnit::InchesOfMercury),
    ) else {
        unreachable!();
    };
    assert!((altimeter.pressure.value.unwrap() - 30.03).abs() < 1e-4);

    let Group::Pressure(slp) = find(
        &result,
        |g| matches!(g, Group::Pressure(p) if p.pressure.unit == PressureUnit::Hectopascals),
    ) else {
        unreachable!();
    };
    assert!((slp.pressure.value.unwrap() - 1016.8).abs() < 1e-3);

    // Precise temperature remark.
    let precise = result
        .groups
        .iter()
        .find_map(|info| match &info.group {
            Group::Temperature(t) if t.air.precise => Some(t),
            _ => None,
        })
        .expect("missing the T-group");
    assert!((precise.air.value().unwrap() - 22.2).abs() < 1e-4);
    assert!((precise.dew_point.value().unwrap() - 11.7).abs() < 1e-4);

    // The two 6-hourly extremes combine into one group.
    let min_max = result
        .groups
        .iter()
        .find_map(|info| match &info.group {
            Group::MinMaxTemperature(g) => Some(g),
            _ => None,
        })
        .expect("missing the min/max group");
    assert_eq!(min_max.period, ObservationPeriod::Hours6);
    assert!((min_max.maximum.value().unwrap() - 22.8).abs() < 1e-4);
    assert!((min_max.minimum.value().unwrap() - 20.6).abs() < 1e-4);

    let Group::PressureTendency(tendency) =
        find(&result, |g| matches!(g, Group::PressureTendency(_)))
    else {
        unreachable!();
    };
    assert_eq!(tendency.tendency, PressureTendency::DecreasingThenIncreasing);
    assert!((tendency.difference.value.unwrap() - 0.3).abs() < 1e-6);

    assert!(matches!(
        find(&result, |g| matches!(g, Group::LowMidHighCloud(_))),
        Group::LowMidHighCloud(_)
    ));

    let Group::Misc(sunshine) = find(&result, |g| matches!(g, Group::Misc(_))) else {
        unreachable!();
    };
    assert_eq!(sunshine.kind, MiscKind::SunshineDurationMinutes);
    assert_eq!(sunshine.value, 96);

    assert!(matches!(
        find(&result, |g| matches!(g, Group::CloudTypes(_))),
        Group::CloudTypes(_)
    ));
}

#[test]
fn australian_metar_with_rainfall() {
    let result =
        wxreport::extended_parse("YPKD 041130Z AUTO 24008KT 9999 // NCD 26/19 Q1014 RF00.0/000.2");
    assert!(result.metadata.error.is_none());

    let Group::Weather(weather) = find(&result, |g| matches!(g, Group::Weather(_))) else {
        unreachable!();
    };
    assert_eq!(weather.weather, vec![Weather::NotReported]);

    let Group::Cloud(cloud) = find(&result, |g| matches!(g, Group::Cloud(_))) else {
        unreachable!();
    };
    assert_eq!(cloud.amount, CloudAmount::Ncd);

    let Group::Rainfall(rainfall) = find(&result, |g| matches!(g, Group::Rainfall(_))) else {
        unreachable!();
    };
    assert_eq!(rainfall.last_10_minutes.value(), Some(0.0));
    assert!((rainfall.since_9am.value().unwrap() - 0.2).abs() < 1e-4);
}

#[test]
fn frozen_precipitation_uses_the_issue_hour() {
    // 1151Z is neither a 3-hourly nor a 6-hourly reporting time.
    let result = wxreport::parse("KJFK 041151Z 24009KT 10SM FEW250 22/12 A3003 RMK 60217");
    let generic = result
        .groups
        .iter()
        .find_map(|group| match group {
            Group::Precipitation(g) => Some(g.kind),
            _ => None,
        })
        .unwrap();
    assert_eq!(generic, PrecipitationKind::FrozenPrecip3Or6Hourly);

    // 1453Z falls into the 3-hourly cycle.
    let result = wxreport::parse("KJFK 041453Z 24009KT 10SM FEW250 22/12 A3003 RMK 60217");
    let three_hourly = result
        .groups
        .iter()
        .find_map(|group| match group {
            Group::Precipitation(g) => Some(g.kind),
            _ => None,
        })
        .unwrap();
    assert_eq!(three_hourly, PrecipitationKind::FrozenPrecip3Hourly);
}

#[test]
fn taf_with_layer_forecasts() {
    let result = wxreport::extended_parse(
        "TAF KXYZ 041140Z 0412/0512 24010KT P6SM SCT040 620304 510004 QNH2979INS \
         TX24/0420Z TNM02/0510Z",
    );
    assert!(result.metadata.error.is_none());
    assert_eq!(result.metadata.kind, ReportKind::Taf);

    let layers: Vec<_> = result
        .groups
        .iter()
        .filter_map(|info| match &info.group {
            Group::LayerForecast(layer) => Some(layer),
            _ => None,
        })
        .collect();
    assert_eq!(layers.len(), 2);

    let forecasts: Vec<_> = result
        .groups
        .iter()
        .filter_map(|info| match &info.group {
            Group::TemperatureForecast(forecast) => Some(forecast),
            _ => None,
        })
        .collect();
    assert_eq!(forecasts.len(), 2);
    assert_eq!(forecasts[0].temperature.value(), Some(24.0));
    assert_eq!(forecasts[1].temperature.value(), Some(-2.0));
}
