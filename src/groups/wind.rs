use chumsky::prelude::*;

use crate::parsers::{digit_slice, slashes};
use crate::types::{Direction, Distance, DistanceUnit, ReportPart, Speed, SpeedUnit};

use super::{Combined, Group};

/// Surface wind, a wind shear profile, or a variable wind sector.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindGroup {
    /// Which of the wind forms this group carries
    pub kind: WindKind,
    /// Wind direction
    pub direction: Direction,
    /// Sustained wind speed
    pub speed: Speed,
    /// Gust speed; not reported when the group carries no `G` part
    pub gust_speed: Speed,
    /// Height of the wind shear layer (`WSddd/...` forms)
    pub shear_height: Distance,
    /// Start of the variable wind sector
    pub sector_begin: Direction,
    /// End of the variable wind sector
    pub sector_end: Direction,
}

/// The forms a wind group can take.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindKind {
    /// Surface wind (`24005KT`)
    SurfaceWind,
    /// A bare variable sector (`140V220`)
    VariableWindSector,
    /// Surface wind that absorbed a following variable sector
    SurfaceWindWithVariableSector,
    /// Wind shear at a height (`WS020/24045KT`)
    WindShear,
}

impl WindGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Metar && part != ReportPart::Taf {
            return None;
        }
        if let Some(wind) = Self::parse_wind(token) {
            return Some(wind);
        }
        Self::parse_variable_sector(token)
    }

    fn parse_wind(token: &str) -> Option<Self> {
        let shear = just("WS")
            .ignore_then(digit_slice(3, 3))
            .then_ignore(just("/"));
        let direction = choice((digit_slice(3, 3), just("VRB").to_slice(), slashes(3)));
        let speed = choice((digit_slice(2, 3), slashes(2)));
        let gust = just("G").ignore_then(digit_slice(2, 3));
        let unit = choice((
            just("KT").map(|_| SpeedUnit::Knots),
            just("MPS").map(|_| SpeedUnit::MetersPerSecond),
            just("KMH").map(|_| SpeedUnit::KilometersPerHour),
        ));
        let parser = group((shear.or_not(), direction, speed, gust.or_not(), unit))
            .then_ignore(end());
        let (shear, direction, speed, gust, unit) = parser.parse(token).into_result().ok()?;

        let direction = Direction::from_degrees(direction)?;
        let speed = Speed::from_token(speed, unit)?;
        let gust_speed = match gust {
            Some(gust) => Speed::from_token(gust, unit)?,
            None => Speed { value: None, unit },
        };
        let (kind, shear_height) = match shear {
            Some(height) => (WindKind::WindShear, Distance::from_height(height)?),
            None => (
                WindKind::SurfaceWind,
                Distance::not_reported(DistanceUnit::Feet),
            ),
        };
        Some(WindGroup {
            kind,
            direction,
            speed,
            gust_speed,
            shear_height,
            sector_begin: Direction::Omitted,
            sector_end: Direction::Omitted,
        })
    }

    fn parse_variable_sector(token: &str) -> Option<Self> {
        let parser = digit_slice(3, 3)
            .then_ignore(just("V"))
            .then(digit_slice(3, 3))
            .then_ignore(end());
        let (begin, end) = parser.parse(token).into_result().ok()?;
        let sector_begin = Direction::from_degrees(begin)?;
        let sector_end = Direction::from_degrees(end)?;
        if !sector_begin.is_value() || !sector_end.is_value() {
            return None;
        }
        Some(WindGroup {
            kind: WindKind::VariableWindSector,
            direction: Direction::Omitted,
            speed: Speed {
                value: None,
                unit: SpeedUnit::Knots,
            },
            gust_speed: Speed {
                value: None,
                unit: SpeedUnit::Knots,
            },
            shear_height: Distance::not_reported(DistanceUnit::Feet),
            sector_begin,
            sector_end,
        })
    }

    pub(crate) fn combine(&self, next: &Group) -> Combined {
        let Group::Wind(next) = next else {
            return Combined::Not;
        };
        if self.kind == WindKind::SurfaceWind && next.kind == WindKind::VariableWindSector {
            let mut merged = *self;
            merged.kind = WindKind::SurfaceWindWithVariableSector;
            merged.sector_begin = next.sector_begin;
            merged.sector_end = next.sector_end;
            return Combined::Replaced(Group::Wind(merged));
        }
        Combined::Not
    }

    /// Calm wind: direction and speed both reported as zero, no gusts.
    pub fn is_calm(&self) -> bool {
        self.kind == WindKind::SurfaceWind
            && self.direction == Direction::Degrees(0)
            && self.speed.value == Some(0)
            && self.gust_speed.value.is_none()
    }

    /// A reported gust must exceed the wind speed and be non-zero; a
    /// reported shear height must be non-zero; all directions in range.
    pub fn is_valid(&self) -> bool {
        if self.speed.value.unwrap_or(0) >= self.gust_speed.value.unwrap_or(u32::MAX) {
            return false;
        }
        if self.gust_speed.value == Some(0) {
            return false;
        }
        if self.shear_height.integer == Some(0) {
            return false;
        }
        self.direction.is_valid()
            && self.shear_height.is_valid()
            && self.sector_begin.is_valid()
            && self.sector_end.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_wind() {
        let wind = WindGroup::from_token("24005KT", ReportPart::Metar).unwrap();
        assert_eq!(wind.kind, WindKind::SurfaceWind);
        assert_eq!(wind.direction, Direction::Degrees(240));
        assert_eq!(wind.speed.value, Some(5));
        assert_eq!(wind.speed.unit, SpeedUnit::Knots);
        assert_eq!(wind.gust_speed.value, None);
        assert!(wind.is_valid());
    }

    #[test]
    fn test_gusts_and_units() {
        let wind = WindGroup::from_token("24015G25KT", ReportPart::Taf).unwrap();
        assert_eq!(wind.gust_speed.value, Some(25));
        let wind = WindGroup::from_token("VRB02MPS", ReportPart::Metar).unwrap();
        assert_eq!(wind.direction, Direction::Variable);
        assert_eq!(wind.speed.unit, SpeedUnit::MetersPerSecond);
        assert_eq!(WindGroup::from_token("24005MPH", ReportPart::Metar), None);
    }

    #[test]
    fn test_not_reported_parts() {
        let wind = WindGroup::from_token("/////KT", ReportPart::Metar).unwrap();
        assert_eq!(wind.direction, Direction::NotReported);
        assert_eq!(wind.speed.value, None);
    }

    #[test]
    fn test_wind_shear() {
        let wind = WindGroup::from_token("WS020/24045KT", ReportPart::Metar).unwrap();
        assert_eq!(wind.kind, WindKind::WindShear);
        assert_eq!(wind.shear_height.integer, Some(2000));
        assert_eq!(wind.speed.value, Some(45));
    }

    #[test]
    fn test_variable_sector_and_combining() {
        let sector = WindGroup::from_token("140V220", ReportPart::Metar).unwrap();
        assert_eq!(sector.kind, WindKind::VariableWindSector);
        let wind = WindGroup::from_token("19015KT", ReportPart::Metar).unwrap();
        let Combined::Replaced(Group::Wind(merged)) = wind.combine(&Group::Wind(sector)) else {
            panic!("surface wind did not absorb the sector");
        };
        assert_eq!(merged.kind, WindKind::SurfaceWindWithVariableSector);
        assert_eq!(merged.sector_begin, Direction::Degrees(140));
        assert_eq!(merged.speed.value, Some(15));
        // A sector does not absorb another sector.
        assert_eq!(sector.combine(&Group::Wind(sector)), Combined::Not);
    }

    #[test]
    fn test_rejects() {
        assert_eq!(WindGroup::from_token("24005KT", ReportPart::Header), None);
        assert_eq!(WindGroup::from_token("2400KT", ReportPart::Metar), None);
        assert_eq!(WindGroup::from_token("24505KT", ReportPart::Metar), None);
        assert_eq!(WindGroup::from_token("140V225", ReportPart::Metar), None);
    }

    #[test]
    fn test_calm_and_validity() {
        assert!(WindGroup::from_token("00000KT", ReportPart::Metar).unwrap().is_calm());
        let gust_below = WindGroup::from_token("24015G10KT", ReportPart::Metar).unwrap();
        assert!(!gust_below.is_valid());
    }
}
