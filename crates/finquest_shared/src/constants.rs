//! # Curriculum Constants
//!
//! Shape of the curriculum and the reward schedule.
//!
//! **CRITICAL:** Level and lesson ids built from these separators are stored
//! by the progress tracker. Changing them orphans every saved record.

// =============================================================================
// CURRICULUM SHAPE
// =============================================================================

/// Number of levels in every world.
pub const LEVELS_PER_WORLD: u32 = 8;

/// Number of lessons in every level (one per archetype).
pub const LESSONS_PER_LEVEL: usize = 6;

/// Separator between the world part and the level number of a level id.
pub const LEVEL_ID_SEPARATOR: &str = "_l";

/// Separator between a level id and the lesson slot of a lesson id.
pub const LESSON_ID_SEPARATOR: &str = "_";

// =============================================================================
// REWARD SCHEDULE
// =============================================================================

/// XP awarded for the first lesson of a level.
pub const BASE_XP_REWARD: u32 = 100;

/// Extra XP per lesson slot.
pub const XP_REWARD_STEP: u32 = 20;

/// Coins awarded for the first lesson of a level.
pub const BASE_COIN_REWARD: u32 = 50;

/// Extra coins per lesson slot.
pub const COIN_REWARD_STEP: u32 = 10;

/// XP reward for the lesson in slot `order`.
#[inline]
#[must_use]
pub const fn xp_reward(order: u32) -> u32 {
    BASE_XP_REWARD + order * XP_REWARD_STEP
}

/// Coin reward for the lesson in slot `order`.
#[inline]
#[must_use]
pub const fn coin_reward(order: u32) -> u32 {
    BASE_COIN_REWARD + order * COIN_REWARD_STEP
}
