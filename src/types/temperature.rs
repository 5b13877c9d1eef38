use crate::parsers::str_to_uint;
use crate::types::{Speed, SpeedUnit};

/// A temperature in degrees Celsius, as decoded from a report group.
///
/// Body groups report whole degrees with an `M` prefix for freezing
/// values; remark groups such as `T00560028` add tenth-of-degree
/// resolution, signalled here by the `precise` flag. `M00` keeps the
/// distinction from `00`: both decode to zero but only the former is
/// freezing.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    value: Option<i32>,
    /// Whether the reported value is below zero (`M` prefix)
    pub freezing: bool,
    /// Tenth-of-degree resolution (remark form); `value` is then in tenths
    pub precise: bool,
}

/// Temperature units convertible via [`Temperature::to_unit`].
#[derive(PartialEq, Eq, Copy, Clone, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[display("°C")]
    Celsius,
    /// Degrees Fahrenheit
    #[display("°F")]
    Fahrenheit,
}

impl Temperature {
    /// A not-reported temperature.
    pub(crate) fn not_reported() -> Self {
        Temperature {
            value: None,
            freezing: false,
            precise: false,
        }
    }

    fn precise_from_tenths(tenths: i32) -> Self {
        Temperature {
            value: Some(tenths),
            freezing: tenths < 0,
            precise: true,
        }
    }

    /// A precise temperature from a derived value in degrees Celsius.
    fn from_celsius(value: f32) -> Self {
        Self::precise_from_tenths((value * 10.0).round() as i32)
    }

    /// Decodes the `M?dd` body form, or `//` as not reported.
    pub fn from_token(s: &str) -> Option<Self> {
        if s == "//" {
            return Some(Self::not_reported());
        }
        match s.len() {
            3 => {
                if !s.starts_with('M') {
                    return None;
                }
                let t = str_to_uint(s, 1, 2)?;
                Some(Temperature {
                    value: Some(-(t as i32)),
                    freezing: true,
                    precise: false,
                })
            }
            2 => {
                let t = str_to_uint(s, 0, 2)?;
                Some(Temperature {
                    value: Some(t as i32),
                    freezing: false,
                    precise: false,
                })
            }
            _ => None,
        }
    }

    /// Decodes the `[01]ddd` remark form carrying tenths of a degree.
    pub fn from_remark_token(s: &str) -> Option<Self> {
        if s.len() != 4 {
            return None;
        }
        let sign = match s.as_bytes()[0] {
            b'0' => 1,
            b'1' => -1,
            _ => return None,
        };
        let t = str_to_uint(s, 1, 3)? as i32;
        Some(Self::precise_from_tenths(sign * t))
    }

    /// The temperature in degrees Celsius, if reported.
    pub fn value(&self) -> Option<f32> {
        let v = self.value?;
        Some(if self.precise {
            v as f32 * 0.1
        } else {
            v as f32
        })
    }

    /// Converts the reported value into `unit`.
    pub fn to_unit(&self, unit: TemperatureUnit) -> Option<f32> {
        let celsius = self.value()?;
        Some(match unit {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 1.8 + 32.0,
        })
    }

    /// Relative humidity in percent, from the Magnus formula.
    pub fn relative_humidity(air: &Temperature, dew_point: &Temperature) -> Option<f32> {
        let t = air.value()?;
        let dp = dew_point.value()?;
        if t < dp {
            return Some(100.0);
        }
        let saturation = 6.11 * 10.0_f32.powf(7.5 * t / (237.7 + t));
        let actual = 6.11 * 10.0_f32.powf(7.5 * dp / (237.7 + dp));
        Some(100.0 * actual / saturation)
    }

    /// Heat index from air temperature and relative humidity.
    ///
    /// Uses the NWS polynomial in degrees Celsius; defined only for
    /// temperatures above 27 °C and humidity between 40 % and 100 %.
    pub fn heat_index(air: &Temperature, relative_humidity: f32) -> Temperature {
        let Some(t) = air.value() else {
            return Self::not_reported();
        };
        if t < 27.0 || !(40.0..=100.0).contains(&relative_humidity) {
            return Self::not_reported();
        }
        let r = relative_humidity;
        let hi = -8.784_695 + 1.611_39 * t + 2.338_549 * r - 0.146_116 * t * r
            - 0.012_308_1 * t * t
            - 0.016_424_8 * r * r
            + 0.002_211_7 * t * t * r
            + 0.000_725_46 * t * r * r
            - 0.000_003_582 * t * t * r * r;
        Self::from_celsius(hi)
    }

    /// Heat index from air temperature and dew point.
    pub fn heat_index_from_dew_point(air: &Temperature, dew_point: &Temperature) -> Temperature {
        match Self::relative_humidity(air, dew_point) {
            Some(rh) => Self::heat_index(air, rh),
            None => Self::not_reported(),
        }
    }

    /// Wind chill from air temperature and wind speed.
    ///
    /// Uses the NWS polynomial; defined only for temperatures at or below
    /// 10 °C and wind of at least 4.8 km/h.
    pub fn wind_chill(air: &Temperature, wind: &Speed) -> Temperature {
        let Some(t) = air.value() else {
            return Self::not_reported();
        };
        let Some(kmh) = wind.to_unit(SpeedUnit::KilometersPerHour) else {
            return Self::not_reported();
        };
        if t > 10.0 || kmh < 4.8 {
            return Self::not_reported();
        }
        let wc = 13.12 + 0.6215 * t - 11.37 * kmh.powf(0.16) + 0.3965 * t * kmh.powf(0.16);
        Self::from_celsius(wc)
    }
}
