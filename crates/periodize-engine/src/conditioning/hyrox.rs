// ABOUTME: HYROX station standards and the equipment-conditional template library
// ABOUTME: Substitutes a bodyweight movement when a station's machine or implement is missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use periodize_core::constants::equipment::{
    DUMBBELLS, KETTLEBELL, ROWER, SANDBAG, SKI_ERG, SLED, WALL_BALL,
};
use periodize_core::models::{
    HyroxStation, HyroxStationKind, HyroxTemplateKind, HyroxWorkout, StationQuantity,
    TimeAvailability,
};
use std::collections::BTreeSet;

use super::{scale_count, scale_minutes};
use crate::programming_constants::hyrox::{
    BURPEE_BROAD_JUMP_METERS, FARMER_CARRY_KG, FARMER_CARRY_METERS, LONG_BASE_MINUTES, ROW_METERS,
    RUN_METERS, SANDBAG_KG, SANDBAG_LUNGE_METERS, SHORT_BASE_MINUTES, SKI_ERG_METERS,
    SLED_PULL_KG, SLED_PULL_METERS, SLED_PUSH_KG, SLED_PUSH_METERS, STANDARD_BASE_MINUTES,
    WALL_BALL_KG, WALL_BALL_REPS, WAVE_MULTIPLIERS,
};
use crate::waves::Wave;

/// Bodyweight replacement for a station
#[derive(Debug, Clone, Copy)]
struct StationFallback {
    exercise_id: &'static str,
    /// Quantity equivalent to the full race standard
    quantity: StationQuantity,
}

/// Race standard for one station
#[derive(Debug, Clone, Copy)]
pub struct StationStandard {
    /// Station identity
    pub kind: HyroxStationKind,
    /// Catalog exercise performed when the equipment is present
    pub exercise_id: &'static str,
    /// Equipment ids, any one of which enables the station
    pub equipment: &'static [&'static str],
    /// Race quantity
    pub quantity: StationQuantity,
    /// Race load
    pub load_kg: Option<f64>,
    fallback: Option<StationFallback>,
}

/// Race standard for a station kind
#[must_use]
pub const fn station_standard(kind: HyroxStationKind) -> StationStandard {
    match kind {
        HyroxStationKind::Run => StationStandard {
            kind,
            exercise_id: "run",
            equipment: &[],
            quantity: StationQuantity::Meters(RUN_METERS),
            load_kg: None,
            fallback: None,
        },
        HyroxStationKind::SkiErg => StationStandard {
            kind,
            exercise_id: "ski_erg",
            equipment: &[SKI_ERG],
            quantity: StationQuantity::Meters(SKI_ERG_METERS),
            load_kg: None,
            fallback: Some(StationFallback {
                exercise_id: "burpee",
                quantity: StationQuantity::Reps(30),
            }),
        },
        HyroxStationKind::SledPush => StationStandard {
            kind,
            exercise_id: "sled_push",
            equipment: &[SLED],
            quantity: StationQuantity::Meters(SLED_PUSH_METERS),
            load_kg: Some(SLED_PUSH_KG),
            fallback: Some(StationFallback {
                exercise_id: "bear_crawl",
                quantity: StationQuantity::Meters(SLED_PUSH_METERS),
            }),
        },
        HyroxStationKind::SledPull => StationStandard {
            kind,
            exercise_id: "sled_pull",
            equipment: &[SLED],
            quantity: StationQuantity::Meters(SLED_PULL_METERS),
            load_kg: Some(SLED_PULL_KG),
            fallback: Some(StationFallback {
                exercise_id: "inverted_row",
                quantity: StationQuantity::Reps(30),
            }),
        },
        HyroxStationKind::BurpeeBroadJump => StationStandard {
            kind,
            exercise_id: "burpee_broad_jump",
            equipment: &[],
            quantity: StationQuantity::Meters(BURPEE_BROAD_JUMP_METERS),
            load_kg: None,
            fallback: None,
        },
        HyroxStationKind::Row => StationStandard {
            kind,
            exercise_id: "row_erg",
            equipment: &[ROWER],
            quantity: StationQuantity::Meters(ROW_METERS),
            load_kg: None,
            fallback: Some(StationFallback {
                exercise_id: "jump_squat",
                quantity: StationQuantity::Reps(40),
            }),
        },
        HyroxStationKind::FarmerCarry => StationStandard {
            kind,
            exercise_id: "farmers_carry",
            equipment: &[DUMBBELLS, KETTLEBELL],
            quantity: StationQuantity::Meters(FARMER_CARRY_METERS),
            load_kg: Some(FARMER_CARRY_KG),
            fallback: Some(StationFallback {
                exercise_id: "plank",
                quantity: StationQuantity::Seconds(120),
            }),
        },
        HyroxStationKind::SandbagLunge => StationStandard {
            kind,
            exercise_id: "sandbag_lunge",
            equipment: &[SANDBAG],
            quantity: StationQuantity::Meters(SANDBAG_LUNGE_METERS),
            load_kg: Some(SANDBAG_KG),
            fallback: Some(StationFallback {
                exercise_id: "walking_lunge",
                quantity: StationQuantity::Meters(SANDBAG_LUNGE_METERS),
            }),
        },
        HyroxStationKind::WallBall => StationStandard {
            kind,
            exercise_id: "wall_ball",
            equipment: &[WALL_BALL],
            quantity: StationQuantity::Reps(WALL_BALL_REPS),
            load_kg: Some(WALL_BALL_KG),
            fallback: Some(StationFallback {
                exercise_id: "air_squat",
                quantity: StationQuantity::Reps(WALL_BALL_REPS),
            }),
        },
    }
}

impl StationStandard {
    /// Whether the athlete's equipment supports the station as raced
    #[must_use]
    pub fn is_available(&self, equipment: &BTreeSet<String>) -> bool {
        self.equipment.is_empty() || self.equipment.iter().any(|id| equipment.contains(*id))
    }
}

/// How station loads respond to the readiness factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadScaling {
    /// Loads stay at the prescribed value
    Fixed,
    /// Loads are multiplied by the readiness factor and rounded to whole kilograms
    Readiness,
}

/// Build one station for a requested quantity
///
/// `quantity` is expressed in the station's own unit. When the equipment is
/// missing, the bodyweight fallback receives the proportional share of its own
/// race-equivalent quantity and carries no load.
#[must_use]
pub fn build_station(
    kind: HyroxStationKind,
    quantity: StationQuantity,
    equipment: &BTreeSet<String>,
    factor: f64,
    load_scaling: LoadScaling,
) -> HyroxStation {
    let standard = station_standard(kind);
    match standard.fallback {
        Some(fallback) if !standard.is_available(equipment) => {
            let share = f64::from(quantity.value()) / f64::from(standard.quantity.value().max(1));
            HyroxStation {
                station: kind,
                exercise_id: fallback.exercise_id.to_owned(),
                quantity: fallback
                    .quantity
                    .with_value(scale_count(fallback.quantity.value(), share * factor)),
                load_kg: None,
                substituted: true,
            }
        }
        _ => HyroxStation {
            station: kind,
            exercise_id: standard.exercise_id.to_owned(),
            quantity: quantity.with_value(scale_count(quantity.value(), factor)),
            load_kg: standard.load_kg.map(|load| match load_scaling {
                LoadScaling::Fixed => load,
                LoadScaling::Readiness => (load * factor).round(),
            }),
            substituted: false,
        },
    }
}

/// Template base minutes for a time-availability category
#[must_use]
pub const fn template_base_minutes(time: TimeAvailability) -> u32 {
    match time {
        TimeAvailability::Short => SHORT_BASE_MINUTES,
        TimeAvailability::Standard => STANDARD_BASE_MINUTES,
        TimeAvailability::Long => LONG_BASE_MINUTES,
    }
}

/// Intensity multiplier for a wave phase
#[must_use]
pub const fn intensity_multiplier(wave: Wave) -> f64 {
    WAVE_MULTIPLIERS[wave.position()]
}

/// Estimated minutes for one round of a template
const fn round_minutes(template: HyroxTemplateKind) -> u32 {
    match template {
        HyroxTemplateKind::SledPushPull => 6,
        HyroxTemplateKind::WallBallChipper => 5,
        HyroxTemplateKind::MachineIntervals | HyroxTemplateKind::BurpeeBroadJump => 4,
    }
}

/// Templates the athlete's equipment supports, in library order
///
/// The burpee broad jump template needs no equipment and is always present.
#[must_use]
pub fn available_templates(equipment: &BTreeSet<String>) -> Vec<HyroxTemplateKind> {
    let has = |id: &str| equipment.contains(id);
    let mut templates = Vec::with_capacity(4);
    if has(SLED) {
        templates.push(HyroxTemplateKind::SledPushPull);
    }
    if has(WALL_BALL) {
        templates.push(HyroxTemplateKind::WallBallChipper);
    }
    if has(ROWER) || has(SKI_ERG) {
        templates.push(HyroxTemplateKind::MachineIntervals);
    }
    templates.push(HyroxTemplateKind::BurpeeBroadJump);
    templates
}

fn template_stations(
    template: HyroxTemplateKind,
    equipment: &BTreeSet<String>,
    factor: f64,
) -> Vec<HyroxStation> {
    let station = |kind, quantity| build_station(kind, quantity, equipment, factor, LoadScaling::Fixed);
    match template {
        HyroxTemplateKind::SledPushPull => vec![
            station(HyroxStationKind::Run, StationQuantity::Meters(500)),
            station(HyroxStationKind::SledPush, StationQuantity::Meters(25)),
            station(HyroxStationKind::SledPull, StationQuantity::Meters(25)),
        ],
        HyroxTemplateKind::WallBallChipper => vec![
            station(HyroxStationKind::WallBall, StationQuantity::Reps(25)),
            station(HyroxStationKind::SandbagLunge, StationQuantity::Meters(20)),
            station(HyroxStationKind::Run, StationQuantity::Meters(400)),
        ],
        HyroxTemplateKind::MachineIntervals => {
            let machines: Vec<HyroxStation> = [HyroxStationKind::SkiErg, HyroxStationKind::Row]
                .into_iter()
                .filter(|kind| station_standard(*kind).is_available(equipment))
                .map(|kind| station(kind, StationQuantity::Meters(250)))
                .collect();
            if machines.is_empty() {
                vec![station(HyroxStationKind::Row, StationQuantity::Meters(250))]
            } else {
                machines
            }
        }
        HyroxTemplateKind::BurpeeBroadJump => vec![
            station(HyroxStationKind::Run, StationQuantity::Meters(400)),
            station(HyroxStationKind::BurpeeBroadJump, StationQuantity::Meters(20)),
        ],
    }
}

/// Equipment-conditional HYROX session for a day
///
/// The template rotates through the available library by day index. The time
/// cap is `base_minutes x intensity_multiplier(wave) x readiness`; rounds fill
/// the cap and station quantities are scaled by readiness.
#[must_use]
pub fn hyrox_workout(
    day_index: u32,
    equipment: &BTreeSet<String>,
    time: TimeAvailability,
    wave: Wave,
    factor: f64,
) -> HyroxWorkout {
    let templates = available_templates(equipment);
    let template = templates
        .get(day_index as usize % templates.len())
        .copied()
        .unwrap_or(HyroxTemplateKind::BurpeeBroadJump);

    let time_cap_minutes = scale_minutes(
        template_base_minutes(time),
        intensity_multiplier(wave) * factor,
    );
    HyroxWorkout {
        template,
        rounds: (time_cap_minutes / round_minutes(template)).max(1),
        stations: template_stations(template, equipment, factor),
        time_cap_minutes,
    }
}
