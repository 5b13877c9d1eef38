use crate::types::ReportPart;

/// Current, recent or vicinity weather phenomena.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherGroup {
    /// Intensity or proximity qualifier
    pub qualifier: WeatherQualifier,
    /// Descriptor such as showers or thunderstorm
    pub descriptor: WeatherDescriptor,
    /// The phenomena, in reported order
    pub weather: Vec<Weather>,
}

/// Intensity or proximity qualifier of a weather group.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherQualifier {
    /// No qualifier
    None,
    /// Recent weather (`RE` prefix)
    Recent,
    /// In the vicinity (`VC` prefix)
    Vicinity,
    /// Light (`-` prefix)
    Light,
    /// Moderate (no prefix, precipitation reported)
    Moderate,
    /// Heavy (`+` prefix)
    Heavy,
}

/// Weather descriptor codes.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherDescriptor {
    /// No descriptor
    None,
    /// Shallow (`MI`)
    Shallow,
    /// Partial (`PR`)
    Partial,
    /// Patches (`BC`)
    Patches,
    /// Low drifting (`DR`)
    LowDrifting,
    /// Blowing (`BL`)
    Blowing,
    /// Showers (`SH`)
    Showers,
    /// Thunderstorm (`TS`)
    Thunderstorm,
    /// Freezing (`FZ`)
    Freezing,
}

/// Weather phenomena codes.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weather {
    /// Weather slashed out (`//`)
    NotReported,
    /// Drizzle (`DZ`)
    Drizzle,
    /// Rain (`RA`)
    Rain,
    /// Snow (`SN`)
    Snow,
    /// Snow grains (`SG`)
    SnowGrains,
    /// Ice crystals (`IC`)
    IceCrystals,
    /// Ice pellets (`PL`)
    IcePellets,
    /// Hail (`GR`)
    Hail,
    /// Snow pellets or small hail (`GS`)
    SmallHail,
    /// Undetermined precipitation (`UP`)
    Undetermined,
    /// Mist (`BR`)
    Mist,
    /// Fog (`FG`)
    Fog,
    /// Smoke (`FU`)
    Smoke,
    /// Volcanic ash (`VA`)
    VolcanicAsh,
    /// Widespread dust (`DU`)
    Dust,
    /// Sand (`SA`)
    Sand,
    /// Haze (`HZ`)
    Haze,
    /// Spray (`PY`)
    Spray,
    /// Dust or sand whirls (`PO`)
    DustWhirls,
    /// Squalls (`SQ`)
    Squalls,
    /// Funnel cloud (`FC`)
    FunnelCloud,
    /// Sandstorm (`SS`)
    Sandstorm,
    /// Duststorm (`DS`)
    Duststorm,
}

const MAX_PHENOMENA: usize = 8;

impl WeatherGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Metar && part != ReportPart::Taf {
            return None;
        }
        if part == ReportPart::Metar {
            if token == "//" {
                return Some(Self::not_reported(WeatherQualifier::None));
            }
            if token == "RE//" {
                return Some(Self::not_reported(WeatherQualifier::Recent));
            }
        }
        let (qualifier, rest) = Self::strip_qualifier(token);
        let (descriptor, rest) = Self::strip_descriptor(rest);
        if rest.len() % 2 != 0 || rest.len() / 2 > MAX_PHENOMENA {
            return None;
        }
        let mut weather = Vec::with_capacity(rest.len() / 2);
        for pair in rest.as_bytes().chunks(2) {
            weather.push(Self::weather_from(pair)?);
        }
        let mut result = WeatherGroup {
            qualifier,
            descriptor,
            weather,
        };
        if result.qualifier == WeatherQualifier::None && result.is_moderate_precipitation() {
            result.qualifier = WeatherQualifier::Moderate;
        }
        Some(result)
    }

    fn not_reported(qualifier: WeatherQualifier) -> Self {
        WeatherGroup {
            qualifier,
            descriptor: WeatherDescriptor::None,
            weather: vec![Weather::NotReported],
        }
    }

    fn strip_qualifier(token: &str) -> (WeatherQualifier, &str) {
        for (prefix, qualifier) in [
            ("RE", WeatherQualifier::Recent),
            ("+", WeatherQualifier::Heavy),
            ("-", WeatherQualifier::Light),
            ("VC", WeatherQualifier::Vicinity),
        ] {
            if let Some(rest) = token.strip_prefix(prefix) {
                return (qualifier, rest);
            }
        }
        (WeatherQualifier::None, token)
    }

    fn strip_descriptor(token: &str) -> (WeatherDescriptor, &str) {
        for (prefix, descriptor) in [
            ("MI", WeatherDescriptor::Shallow),
            ("PR", WeatherDescriptor::Partial),
            ("BC", WeatherDescriptor::Patches),
            ("DR", WeatherDescriptor::LowDrifting),
            ("BL", WeatherDescriptor::Blowing),
            ("SH", WeatherDescriptor::Showers),
            ("TS", WeatherDescriptor::Thunderstorm),
            ("FZ", WeatherDescriptor::Freezing),
        ] {
            if let Some(rest) = token.strip_prefix(prefix) {
                return (descriptor, rest);
            }
        }
        (WeatherDescriptor::None, token)
    }

    fn weather_from(pair: &[u8]) -> Option<Weather> {
        Some(match pair {
            b"DZ" => Weather::Drizzle,
            b"RA" => Weather::Rain,
            b"SN" => Weather::Snow,
            b"SG" => Weather::SnowGrains,
            b"IC" => Weather::IceCrystals,
            b"PL" => Weather::IcePellets,
            b"GR" => Weather::Hail,
            b"GS" => Weather::SmallHail,
            b"UP" => Weather::Undetermined,
            b"BR" => Weather::Mist,
            b"FG" => Weather::Fog,
            b"FU" => Weather::Smoke,
            b"VA" => Weather::VolcanicAsh,
            b"DU" => Weather::Dust,
            b"SA" => Weather::Sand,
            b"HZ" => Weather::Haze,
            b"PY" => Weather::Spray,
            b"PO" => Weather::DustWhirls,
            b"SQ" => Weather::Squalls,
            b"FC" => Weather::FunnelCloud,
            b"SS" => Weather::Sandstorm,
            b"DS" => Weather::Duststorm,
            _ => return None,
        })
    }

    // Unqualified drizzle, rain, snow grains, ice pellets, undetermined
    // precipitation and non-drifting snow imply moderate intensity.
    fn is_moderate_precipitation(&self) -> bool {
        self.weather.iter().any(|weather| match weather {
            Weather::Drizzle
            | Weather::Rain
            | Weather::SnowGrains
            | Weather::IcePellets
            | Weather::Undetermined => true,
            Weather::Snow => {
                self.descriptor != WeatherDescriptor::LowDrifting
                    && self.descriptor != WeatherDescriptor::Blowing
            }
            _ => false,
        })
    }
}
