//! # Curriculum
//!
//! Lookup surface for the content-serving layer: list a world's levels,
//! list a level's lessons. Every answer is recomputed by the generator.

use finquest_shared::{LessonDescriptor, LevelDescriptor, LEVELS_PER_WORLD, LEVEL_ID_SEPARATOR};

use crate::error::{GenerationError, GenerationResult};
use crate::generator::LevelContentGenerator;

/// Splits a level id into `(world_id, level_number)`.
///
/// Splits on the last `_l`; the number part must be ASCII digits forming a
/// level number of at least 1, written without leading zeros, so that every
/// level has exactly one id.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidLevelId`] for any other shape.
pub fn parse_level_id(level_id: &str) -> GenerationResult<(String, u32)> {
    let invalid = || GenerationError::InvalidLevelId(level_id.to_string());

    let (world, number) = level_id
        .rsplit_once(LEVEL_ID_SEPARATOR)
        .ok_or_else(invalid)?;
    if world.trim().is_empty()
        || number.is_empty()
        || number.starts_with('0')
        || !number.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let level_number: u32 = number.parse().map_err(|_| invalid())?;
    Ok((world.to_string(), level_number))
}

/// World and level listings backed by a [`LevelContentGenerator`].
#[derive(Clone, Debug)]
pub struct Curriculum {
    generator: LevelContentGenerator,
}

impl Curriculum {
    /// Creates a curriculum over `generator`.
    #[must_use]
    pub fn new(generator: LevelContentGenerator) -> Self {
        Self { generator }
    }

    /// Creates a curriculum over the bundled catalog.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidConfig`] if the bundled data fails
    /// validation.
    pub fn bundled() -> GenerationResult<Self> {
        LevelContentGenerator::bundled().map(Self::new)
    }

    /// The underlying generator.
    #[must_use]
    pub fn generator(&self) -> &LevelContentGenerator {
        &self.generator
    }

    /// Levels 1 through 8 of a world.
    ///
    /// # Errors
    ///
    /// Propagates generation errors.
    pub fn list_levels(&self, world_id: &str) -> GenerationResult<Vec<LevelDescriptor>> {
        (1..=LEVELS_PER_WORLD)
            .map(|n| self.generator.generate(world_id, n).map(|g| g.level))
            .collect()
    }

    /// The six lessons of a level.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidLevelId`] for a malformed id.
    pub fn list_lessons(&self, level_id: &str) -> GenerationResult<Vec<LessonDescriptor>> {
        let (world_id, level_number) = parse_level_id(level_id)?;
        Ok(self.generator.generate(&world_id, level_number)?.lessons)
    }

    /// A single level by id.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidLevelId`] for a malformed id.
    pub fn level(&self, level_id: &str) -> GenerationResult<LevelDescriptor> {
        let (world_id, level_number) = parse_level_id(level_id)?;
        Ok(self.generator.generate(&world_id, level_number)?.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert_eq!(parse_level_id("basics_l3").unwrap(), ("basics".to_string(), 3));
        assert_eq!(
            parse_level_id("BudgetBeach_l12").unwrap(),
            ("BudgetBeach".to_string(), 12)
        );
        assert_eq!(parse_level_id("basics_l10").unwrap(), ("basics".to_string(), 10));
    }

    #[test]
    fn test_parse_splits_on_last_separator() {
        assert_eq!(parse_level_id("loan_lab_l2").unwrap(), ("loan_lab".to_string(), 2));
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for bad in [
            "basics",
            "basics_3",
            "basics_l",
            "_l3",
            "basics_lx",
            "basics_l-1",
            "basics_l0",
            "basics_l01",
            "basics_l007",
            "basics_l+4",
            "basics_l99999999999",
        ] {
            assert_eq!(
                parse_level_id(bad),
                Err(GenerationError::InvalidLevelId(bad.to_string())),
                "{bad}"
            );
        }
    }
}
