// ABOUTME: HYROX race simulator: eight stations each preceded by a 1 km run
// ABOUTME: Every distance, rep count and load is scaled by the readiness factor and rounded

use periodize_core::models::{HyroxStationKind, RaceSimulation};
use std::collections::BTreeSet;

use super::hyrox::{build_station, station_standard, LoadScaling};
use super::to_count;
use crate::programming_constants::hyrox::{RUN_SEGMENT_MINUTES, STATION_MINUTES};

/// Stations in race order
pub const RACE_ORDER: [HyroxStationKind; 8] = [
    HyroxStationKind::SkiErg,
    HyroxStationKind::SledPush,
    HyroxStationKind::SledPull,
    HyroxStationKind::BurpeeBroadJump,
    HyroxStationKind::Row,
    HyroxStationKind::FarmerCarry,
    HyroxStationKind::SandbagLunge,
    HyroxStationKind::WallBall,
];

/// Full race: run, station, run, station, ... at race standards
#[must_use]
pub fn simulate_race(equipment: &BTreeSet<String>, factor: f64) -> RaceSimulation {
    let run = station_standard(HyroxStationKind::Run);
    let segments = RACE_ORDER
        .into_iter()
        .flat_map(|kind| {
            let standard = station_standard(kind);
            [
                build_station(
                    HyroxStationKind::Run,
                    run.quantity,
                    equipment,
                    factor,
                    LoadScaling::Readiness,
                ),
                build_station(
                    kind,
                    standard.quantity,
                    equipment,
                    factor,
                    LoadScaling::Readiness,
                ),
            ]
        })
        .collect();

    RaceSimulation {
        segments,
        readiness_factor: factor,
    }
}

/// Estimated minutes to complete a simulation at a readiness factor
#[must_use]
pub fn estimated_race_minutes(factor: f64) -> u32 {
    let stations = RACE_ORDER.len() as f64;
    let raw = stations.mul_add(RUN_SEGMENT_MINUTES, stations * STATION_MINUTES) * factor;
    to_count(raw.round().max(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodize_core::constants::equipment::{SKI_ERG, SLED};
    use periodize_core::models::StationQuantity;

    #[test]
    fn test_race_alternates_runs_and_stations() {
        let race = simulate_race(&BTreeSet::new(), 1.0);
        assert_eq!(race.segments.len(), 16);
        for (position, segment) in race.segments.iter().enumerate() {
            assert_eq!(segment.station == HyroxStationKind::Run, position % 2 == 0);
        }
    }

    #[test]
    fn test_readiness_scales_distances_and_loads() {
        let equipment: BTreeSet<String> = [SLED, SKI_ERG].iter().map(|s| (*s).to_owned()).collect();
        let race = simulate_race(&equipment, 0.9);
        assert_eq!(race.segments[0].quantity, StationQuantity::Meters(900));
        let push = &race.segments[3];
        assert_eq!(push.station, HyroxStationKind::SledPush);
        assert!(!push.substituted);
        // 152 x 0.9 = 136.8
        assert!((push.load_kg.unwrap_or_default() - 137.0).abs() < f64::EPSILON);
        assert_eq!(push.quantity, StationQuantity::Meters(45));
    }

    #[test]
    fn test_estimated_minutes() {
        assert_eq!(estimated_race_minutes(1.0), 76);
    }
}
