// ABOUTME: Cooldown block generator with fixed down-regulation content
// ABOUTME: Always succeeds regardless of equipment or readiness

use periodize_core::models::{CooldownBlock, CooldownItem, WorkoutBlock};

use super::minutes_for_seconds;

const ITEMS: [(&str, u32); 4] = [
    ("Easy walk or spin", 120),
    ("Hip flexor stretch", 60),
    ("Hamstring stretch", 60),
    ("Box breathing", 60),
];

/// Fixed cooldown
#[must_use]
pub fn cooldown_block() -> WorkoutBlock {
    let items: Vec<CooldownItem> = ITEMS
        .iter()
        .map(|(name, duration_seconds)| CooldownItem {
            name: (*name).to_owned(),
            duration_seconds: *duration_seconds,
        })
        .collect();
    let total_seconds = items.iter().map(|item| item.duration_seconds).sum();
    WorkoutBlock::Cooldown(CooldownBlock {
        title: "Cooldown".to_owned(),
        items,
        estimated_minutes: minutes_for_seconds(total_seconds),
    })
}
