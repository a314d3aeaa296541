// ABOUTME: Accessory progression: pattern-keyed tag templates and wave-scaled volume
// ABOUTME: Determines which accessory slots a day gets and how many sets and reps each carries

use periodize_core::models::{ExerciseTag, MovementPattern};

use crate::programming_constants::accessory::{MIN_RPE, RPE_OFFSET};
use crate::waves::{IntensityWave, RepScheme, Wave};

/// Accessory tag slots for a day's primary pattern, in prescription order
#[must_use]
pub const fn accessory_tags(pattern: MovementPattern) -> &'static [ExerciseTag] {
    match pattern {
        MovementPattern::Squat => &[
            ExerciseTag::UnilateralLower,
            ExerciseTag::PosteriorChain,
            ExerciseTag::Core,
        ],
        MovementPattern::Hinge => &[
            ExerciseTag::UnilateralLower,
            ExerciseTag::UpperPull,
            ExerciseTag::Core,
        ],
        MovementPattern::Lunge => &[ExerciseTag::PosteriorChain, ExerciseTag::Core],
        MovementPattern::HorizontalPush => &[
            ExerciseTag::UpperPull,
            ExerciseTag::Shoulders,
            ExerciseTag::Arms,
        ],
        MovementPattern::VerticalPush => &[
            ExerciseTag::UpperPull,
            ExerciseTag::Arms,
            ExerciseTag::Core,
        ],
        MovementPattern::HorizontalPull => &[
            ExerciseTag::UpperPush,
            ExerciseTag::Arms,
            ExerciseTag::Grip,
        ],
        MovementPattern::VerticalPull => &[
            ExerciseTag::UpperPush,
            ExerciseTag::Shoulders,
            ExerciseTag::Core,
        ],
        MovementPattern::Carry => &[ExerciseTag::Grip, ExerciseTag::Core],
        MovementPattern::Core | MovementPattern::Conditioning => &[ExerciseTag::Core],
    }
}

/// Accessory sets and reps for a wave phase
#[must_use]
pub const fn accessory_volume(wave: Wave) -> RepScheme {
    match wave {
        Wave::Base => RepScheme { sets: 3, reps: 12 },
        Wave::Load => RepScheme { sets: 3, reps: 10 },
        Wave::Peak => RepScheme { sets: 4, reps: 8 },
        Wave::Deload => RepScheme { sets: 2, reps: 12 },
    }
}

/// Accessory RPE: one below the main lift, never under the floor
#[must_use]
pub fn accessory_rpe(intensity: IntensityWave) -> u8 {
    intensity.rpe.saturating_sub(RPE_OFFSET).max(MIN_RPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waves::intensity_wave;

    #[test]
    fn test_accessory_rpe_floor() {
        // deload sits at RPE 6, so accessories land on the floor of 5
        assert_eq!(accessory_rpe(intensity_wave(3)), 5);
        assert_eq!(accessory_rpe(intensity_wave(2)), 8);
    }
}
