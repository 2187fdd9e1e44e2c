//! # FINQUEST Procedural Generation
//!
//! Deterministic level content for reproducible, never-stored curriculum.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same `(world, level)` always produces the same content
//! 2. **Stateless**: Nothing is persisted; each call builds its own RNG
//! 3. **Data-driven**: Content pools live in TOML, validated at load time
//! 4. **Total over worlds**: Unknown world ids fall back to the default world
//!
//! ## Core Components
//!
//! - `SeededRng`: string-seeded LCG for flavor choices
//! - `ContentCatalog`: per-world pools, boss quizzes, poll and tips
//! - `LevelContentGenerator`: produces a level and its six lessons
//! - `Curriculum`: `list_levels` / `list_lessons` for the serving layer
//!
//! ## Example
//!
//! ```rust
//! use finquest_procedural::Curriculum;
//!
//! let curriculum = Curriculum::bundled()?;
//!
//! let levels = curriculum.list_levels("Budget Beach")?;
//! assert_eq!(levels[0].id, "BudgetBeach_l1");
//!
//! let lessons = curriculum.list_lessons(&levels[0].id)?;
//! assert_eq!(lessons.len(), 6);
//! # Ok::<(), finquest_procedural::GenerationError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod boss;
pub mod catalog;
pub mod curriculum;
pub mod error;
pub mod generator;
pub mod rng;

pub use boss::BossArchetype;
pub use catalog::{pool_index, ContentCatalog, ContentPool, WorldContent};
pub use curriculum::{parse_level_id, Curriculum};
pub use error::{GenerationError, GenerationResult};
pub use generator::{GeneratedLevel, LevelContentGenerator, WorldResolution};
pub use rng::SeededRng;
