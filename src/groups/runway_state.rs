use chumsky::prelude::*;

use crate::parsers::{digit_slice, slashes};
use crate::types::{
    Precipitation, PrecipitationUnit, ReportPart, Runway, SurfaceFriction,
};

/// Runway surface state: deposits, contamination extent, deposit depth
/// and surface friction (`R16/290155`), or the `CLRD`/`SNOCLO` forms.
#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunwayStateGroup {
    /// The runway the state applies to
    pub runway: Runway,
    /// Normal state, cleared deposits, or aerodrome closed by snow
    pub kind: RunwayStateKind,
    /// Deposit type on the runway (WMO table 0919)
    pub deposits: RunwayDeposits,
    /// Contamination extent (WMO table 0519)
    pub extent: SurfaceExtent,
    /// Depth of the deposits
    pub deposit_depth: Precipitation,
    /// Measured friction or braking action
    pub surface_friction: SurfaceFriction,
}

/// The three forms of a runway state group.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunwayStateKind {
    /// Deposits, extent, depth and friction reported
    Normal,
    /// Deposits ceased to exist (`CLRD`)
    Clrd,
    /// Aerodrome closed due to snow (`SNOCLO`)
    Snoclo,
}

/// Deposits on the runway surface (WMO table 0919).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunwayDeposits {
    /// Code 0
    ClearAndDry,
    /// Code 1
    Damp,
    /// Code 2
    WetAndWaterPatches,
    /// Code 3
    RimeAndFrostCovered,
    /// Code 4
    DrySnow,
    /// Code 5
    WetSnow,
    /// Code 6
    Slush,
    /// Code 7
    Ice,
    /// Code 8
    CompactedOrRolledSnow,
    /// Code 9
    FrozenRutsOrRidges,
    /// Slashed out
    NotReported,
}

/// Extent of runway contamination (WMO table 0519).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceExtent {
    /// Code 0: clear
    None,
    /// Code 1
    LessThan10Percent,
    /// Code 2
    From11To25Percent,
    /// Code 3 is reserved
    Reserved3,
    /// Code 4 is reserved
    Reserved4,
    /// Code 5
    From26To50Percent,
    /// Code 6 is reserved
    Reserved6,
    /// Code 7 is reserved
    Reserved7,
    /// Code 8 is reserved
    Reserved8,
    /// Code 9
    MoreThan51Percent,
    /// Slashed out
    NotReported,
}

enum StateBody<'src> {
    Snoclo,
    Clrd(&'src str),
    Normal(char, char, &'src str, &'src str),
}

impl RunwayStateGroup {
    pub(crate) fn from_token(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Metar {
            return None;
        }
        let runway = just("R")
            .then(digit_slice(2, 2))
            .then(one_of("RCL").or_not())
            .to_slice();
        let two = |min| choice((digit_slice(min, min), slashes(min)));
        let body = choice((
            just("SNOCLO").map(|_| StateBody::Snoclo),
            just("CLRD").ignore_then(two(2)).map(StateBody::Clrd),
            group((one_of("0123456789/"), one_of("0123456789/"), two(2), two(2)))
                .map(|(deposits, extent, depth, friction)| {
                    StateBody::Normal(deposits, extent, depth, friction)
                }),
        ));
        let parser = runway.then_ignore(just("/")).then(body).then_ignore(end());
        let (runway, body) = parser.parse(token).into_result().ok()?;
        let runway = Runway::from_token(runway, false)?;

        match body {
            StateBody::Snoclo => Some(Self::snoclo(runway)),
            StateBody::Clrd(friction) => {
                Some(Self::clrd(runway, SurfaceFriction::from_token(friction)?))
            }
            StateBody::Normal(deposits, extent, depth, friction) => Some(RunwayStateGroup {
                runway,
                kind: RunwayStateKind::Normal,
                deposits: Self::deposits_from(deposits)?,
                extent: Self::extent_from(extent)?,
                deposit_depth: Precipitation::from_runway_deposits(depth)?,
                surface_friction: SurfaceFriction::from_token(friction)?,
            }),
        }
    }

    fn snoclo(runway: Runway) -> Self {
        RunwayStateGroup {
            runway,
            kind: RunwayStateKind::Snoclo,
            deposits: RunwayDeposits::NotReported,
            extent: SurfaceExtent::NotReported,
            deposit_depth: Precipitation::not_reported(PrecipitationUnit::Millimeters),
            surface_friction: SurfaceFriction::not_reported(),
        }
    }

    fn clrd(runway: Runway, surface_friction: SurfaceFriction) -> Self {
        RunwayStateGroup {
            surface_friction,
            kind: RunwayStateKind::Clrd,
            ..Self::snoclo(runway)
        }
    }

    fn deposits_from(code: char) -> Option<RunwayDeposits> {
        Some(match code {
            '0' => RunwayDeposits::ClearAndDry,
            '1' => RunwayDeposits::Damp,
            '2' => RunwayDeposits::WetAndWaterPatches,
            '3' => RunwayDeposits::RimeAndFrostCovered,
            '4' => RunwayDeposits::DrySnow,
            '5' => RunwayDeposits::WetSnow,
            '6' => RunwayDeposits::Slush,
            '7' => RunwayDeposits::Ice,
            '8' => RunwayDeposits::CompactedOrRolledSnow,
            '9' => RunwayDeposits::FrozenRutsOrRidges,
            '/' => RunwayDeposits::NotReported,
            _ => return None,
        })
    }

    fn extent_from(code: char) -> Option<SurfaceExtent> {
        Some(match code {
            '0' => SurfaceExtent::None,
            '1' => SurfaceExtent::LessThan10Percent,
            '2' => SurfaceExtent::From11To25Percent,
            '3' => SurfaceExtent::Reserved3,
            '4' => SurfaceExtent::Reserved4,
            '5' => SurfaceExtent::From26To50Percent,
            '6' => SurfaceExtent::Reserved6,
            '7' => SurfaceExtent::Reserved7,
            '8' => SurfaceExtent::Reserved8,
            '9' => SurfaceExtent::MoreThan51Percent,
            '/' => SurfaceExtent::NotReported,
            _ => return None,
        })
    }

    /// The runway must be consistent and the extent code not reserved.
    pub fn is_valid(&self) -> bool {
        self.runway.is_valid()
            && !matches!(
                self.extent,
                SurfaceExtent::Reserved3
                    | SurfaceExtent::Reserved4
                    | SurfaceExtent::Reserved6
                    | SurfaceExtent::Reserved7
                    | SurfaceExtent::Reserved8
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BrakingAction;

    #[test]
    fn test_normal_state() {
        let state = RunwayStateGroup::from_token("R16/290155", ReportPart::Metar).unwrap();
        assert_eq!(state.runway.number, 16);
        assert_eq!(state.kind, RunwayStateKind::Normal);
        assert_eq!(state.deposits, RunwayDeposits::WetAndWaterPatches);
        assert_eq!(state.extent, SurfaceExtent::MoreThan51Percent);
        assert_eq!(state.deposit_depth.value(), Some(1.0));
        assert!((state.surface_friction.coefficient().unwrap() - 0.55).abs() < 1e-4);
        assert!(state.is_valid());
    }

    #[test]
    fn test_not_reported_fields() {
        let state = RunwayStateGroup::from_token("R21///////", ReportPart::Metar).unwrap();
        assert_eq!(state.deposits, RunwayDeposits::NotReported);
        assert_eq!(state.extent, SurfaceExtent::NotReported);
        assert_eq!(state.deposit_depth.value(), None);
        assert_eq!(state.surface_friction.coefficient(), None);
    }

    #[test]
    fn test_clrd_and_snoclo() {
        let state = RunwayStateGroup::from_token("R88/CLRD93", ReportPart::Metar).unwrap();
        assert_eq!(state.kind, RunwayStateKind::Clrd);
        assert!(state.runway.is_all_runways());
        assert_eq!(state.surface_friction.braking_action(), BrakingAction::Medium);
        let state = RunwayStateGroup::from_token("R24L/SNOCLO", ReportPart::Metar).unwrap();
        assert_eq!(state.kind, RunwayStateKind::Snoclo);
    }

    #[test]
    fn test_reserved_extent_is_invalid() {
        let state = RunwayStateGroup::from_token("R16/230155", ReportPart::Metar).unwrap();
        assert_eq!(state.extent, SurfaceExtent::Reserved3);
        assert!(!state.is_valid());
    }

    #[test]
    fn test_rejects() {
        assert_eq!(RunwayStateGroup::from_token("R16/29015", ReportPart::Metar), None);
        // Reserved deposit depth code 91.
        assert_eq!(RunwayStateGroup::from_token("R16/299155", ReportPart::Metar), None);
        assert_eq!(RunwayStateGroup::from_token("R16/290155", ReportPart::Taf), None);
    }
}
