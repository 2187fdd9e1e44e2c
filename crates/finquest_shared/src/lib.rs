//! # FINQUEST Shared
//!
//! Content contracts used by the generator, the content-serving layer and
//! the UI.
//!
//! ## CRITICAL RULE
//!
//! This crate holds data shapes only. Generation logic belongs in
//! `finquest_procedural`; anything here is a wire contract.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod lesson;
pub mod level;

pub use constants::{
    coin_reward, xp_reward, LESSONS_PER_LEVEL, LESSON_ID_SEPARATOR, LEVELS_PER_WORLD,
    LEVEL_ID_SEPARATOR,
};
pub use lesson::{
    lesson_id, Calculator, InfoDrop, LessonArchetype, LessonContent, LessonDescriptor, Meme,
    Poll, SpotTheLie, Statement, SwipeDecision, SwipeSide,
};
pub use level::{level_id, normalize_world_id, BossQuestion, LevelDescriptor};
