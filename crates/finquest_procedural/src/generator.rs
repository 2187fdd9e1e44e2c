//! # Level Content Generator
//!
//! Turns `(world_id, level_number)` into a level descriptor and its six
//! lessons. Nothing is stored: calling [`LevelContentGenerator::generate`]
//! twice with the same arguments yields identical output, so a level looks
//! like fixed curriculum across sessions and devices.
//!
//! ## Pipeline
//!
//! ```text
//! world_id ──resolve──► WorldContent (or default world, flagged)
//!    │
//!    ├─► level_id = normalize(world_id) + "_l" + n  (resolved id if blank)
//!    ├─► boss     = ALL[(n - 1) mod 8]            (index-based)
//!    └─► slot i   = pool[((n - 1) + 3i) mod len]  (index-based)
//!                   info-drop tip = rng.pick(...) (seeded per level)
//! ```

use finquest_shared::{
    level_id, normalize_world_id, InfoDrop, LessonArchetype, LessonContent, LessonDescriptor,
    LevelDescriptor, LESSONS_PER_LEVEL, LEVEL_ID_SEPARATOR,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::boss::BossArchetype;
use crate::catalog::{ContentCatalog, WorldContent, WORLD_PLACEHOLDER};
use crate::error::{GenerationError, GenerationResult};
use crate::rng::SeededRng;

/// Outcome of resolving a caller-supplied world id.
#[derive(Clone, Copy, Debug)]
pub struct WorldResolution<'a> {
    /// The world whose content will be used.
    pub world: &'a WorldContent,
    /// `true` if the id was unknown and the default world was substituted.
    pub used_fallback: bool,
}

/// A generated level with its lessons.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLevel {
    /// Level descriptor.
    pub level: LevelDescriptor,
    /// Six lessons, in slot order.
    pub lessons: Vec<LessonDescriptor>,
    /// `true` if the requested world was unknown and the default world's
    /// content was used.
    pub used_fallback: bool,
}

/// Deterministic level generator over a content catalog.
///
/// Holds only read-only tables, so one instance can serve any number of
/// threads.
#[derive(Clone, Debug)]
pub struct LevelContentGenerator {
    catalog: ContentCatalog,
}

impl LevelContentGenerator {
    /// Creates a generator over `catalog`.
    #[must_use]
    pub fn new(catalog: ContentCatalog) -> Self {
        Self { catalog }
    }

    /// Creates a generator over the bundled catalog.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidConfig`] if the bundled data fails
    /// validation.
    pub fn bundled() -> GenerationResult<Self> {
        ContentCatalog::bundled().map(Self::new)
    }

    /// The catalog this generator reads from.
    #[must_use]
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Resolves a world id, falling back to the default world.
    ///
    /// Never fails. A fallback is logged at warn level.
    #[must_use]
    pub fn resolve_world(&self, world_id: &str) -> WorldResolution<'_> {
        if let Some(world) = self.catalog.find_world(world_id) {
            return WorldResolution {
                world,
                used_fallback: false,
            };
        }

        let world = self.catalog.default_world();
        warn!(
            requested = world_id,
            fallback = %world.id,
            "unknown world id, using default world content"
        );
        WorldResolution {
            world,
            used_fallback: true,
        }
    }

    /// Generates a level and its six lessons.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::InvalidLevelNumber`] if `level_number` is 0
    /// - [`GenerationError::EmptyPool`] if a pool is empty (cannot happen
    ///   with a validated catalog)
    pub fn generate(&self, world_id: &str, level_number: u32) -> GenerationResult<GeneratedLevel> {
        if level_number == 0 {
            return Err(GenerationError::InvalidLevelNumber(level_number));
        }

        let WorldResolution {
            world,
            used_fallback,
        } = self.resolve_world(world_id);
        // a blank id has no key of its own; it names the world it resolved to
        let mut world_key = normalize_world_id(world_id);
        if world_key.is_empty() {
            world_key.clone_from(&world.id);
        }
        let level_id = level_id(&world_key, level_number);

        // Seeded from the resolved world so a fallback reproduces the
        // default world's content exactly.
        let mut rng = SeededRng::new(&format!(
            "{}{LEVEL_ID_SEPARATOR}{level_number}",
            world.id
        ));

        let level = self.build_level(world, &world_key, &level_id, level_number);

        let mut lessons = Vec::with_capacity(LESSONS_PER_LEVEL);
        for (slot, archetype) in (0u32..).zip(LessonArchetype::ALL) {
            let content = self.lesson_content(world, archetype, level_number, slot, &mut rng)?;
            lessons.push(LessonDescriptor::new(
                &world_key,
                &level_id,
                slot,
                archetype.display_title().to_string(),
                content,
            ));
        }

        debug!(
            level_id = %level_id,
            world = %world.id,
            boss = %level.boss_name,
            used_fallback,
            "generated level"
        );

        Ok(GeneratedLevel {
            level,
            lessons,
            used_fallback,
        })
    }

    fn build_level(
        &self,
        world: &WorldContent,
        world_key: &str,
        level_id: &str,
        level_number: u32,
    ) -> LevelDescriptor {
        let boss = BossArchetype::for_level(level_number);
        let boss_name = boss.boss_name(&world.boss_fragment);

        LevelDescriptor {
            id: level_id.to_string(),
            world_id: world_key.to_string(),
            level_number,
            title: format!("{}: Level {level_number}", world.title),
            description: format!(
                "{} Beat the {boss_name} to clear level {level_number}.",
                world.tagline
            ),
            boss_image: boss.image_path(),
            boss_intro_text: boss.intro_text(&boss_name),
            boss_name,
            boss_questions: self.catalog.boss_questions_for(world).to_vec(),
        }
    }

    fn lesson_content(
        &self,
        world: &WorldContent,
        archetype: LessonArchetype,
        level_number: u32,
        slot: u32,
        rng: &mut SeededRng,
    ) -> GenerationResult<LessonContent> {
        let content = match archetype {
            LessonArchetype::DecisionSwipe => {
                LessonContent::DecisionSwipe(world.swipes.select(level_number, slot)?.to_payload())
            }
            LessonArchetype::SpotTheLie => {
                LessonContent::SpotTheLie(world.lies.select(level_number, slot)?.to_payload())
            }
            LessonArchetype::Meme => {
                LessonContent::Meme(world.memes.select(level_number, slot)?.to_payload())
            }
            LessonArchetype::Calculator => LessonContent::Calculator(
                world.calculators.select(level_number, slot)?.to_payload(),
            ),
            LessonArchetype::Poll => LessonContent::Poll(self.catalog.poll().clone()),
            LessonArchetype::InfoDrop => {
                let fragment = rng.pick(self.catalog.tip_fragments())?;
                LessonContent::InfoDrop(InfoDrop {
                    text: fragment.replace(WORLD_PLACEHOLDER, &world.title),
                })
            }
        };
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finquest_shared::SwipeSide;

    fn generator() -> LevelContentGenerator {
        LevelContentGenerator::bundled().expect("bundled catalog")
    }

    #[test]
    fn test_level_zero_is_rejected() {
        assert_eq!(
            generator().generate("basics", 0),
            Err(GenerationError::InvalidLevelNumber(0))
        );
    }

    #[test]
    fn test_level_ids() {
        let gen = generator();
        assert_eq!(gen.generate("basics", 3).unwrap().level.id, "basics_l3");
        assert_eq!(gen.generate("Budget Beach", 1).unwrap().level.id, "BudgetBeach_l1");
    }

    #[test]
    fn test_lesson_ids_and_slots() {
        let generated = generator().generate("basics", 2).unwrap();

        assert_eq!(generated.lessons.len(), LESSONS_PER_LEVEL);
        for (i, lesson) in generated.lessons.iter().enumerate() {
            assert_eq!(usize::try_from(lesson.order).unwrap(), i);
            assert_eq!(lesson.id, format!("basics_l2_{i}"));
            assert_eq!(lesson.level_id, "basics_l2");
            assert_eq!(lesson.archetype, LessonArchetype::ALL[i]);
            assert_eq!(lesson.archetype, lesson.content.archetype());
        }
    }

    #[test]
    fn test_first_level_takes_first_swipe() {
        let gen = generator();
        let world = gen.catalog().default_world();
        let generated = gen.generate("basics", 1).unwrap();

        let LessonContent::DecisionSwipe(swipe) = &generated.lessons[0].content else {
            panic!("slot 0 must be a decision swipe");
        };
        assert_eq!(swipe.question, world.swipes.items()[0].question);
        assert!(matches!(swipe.correct_side, SwipeSide::Left | SwipeSide::Right));
    }

    #[test]
    fn test_info_drop_mentions_world_title() {
        let gen = generator();
        let generated = gen.generate("Budget Beach", 4).unwrap();

        let LessonContent::InfoDrop(tip) = &generated.lessons[5].content else {
            panic!("slot 5 must be an info drop");
        };
        assert!(tip.text.contains("Budget Beach"), "{}", tip.text);
        assert!(!tip.text.contains(WORLD_PLACEHOLDER));
    }

    #[test]
    fn test_blank_world_id_takes_resolved_world_key() {
        let gen = generator();

        for blank in ["", "   ", "\t\n"] {
            let generated = gen.generate(blank, 2).unwrap();
            assert!(generated.used_fallback);
            assert_eq!(generated.level.id, "basics_l2");
            assert_eq!(generated.level.world_id, "basics");
            assert_eq!(generated.lessons[0].id, "basics_l2_0");
        }
    }

    #[test]
    fn test_known_world_is_not_fallback() {
        let gen = generator();
        assert!(!gen.resolve_world("basics").used_fallback);
        assert!(!gen.resolve_world("budget beach").used_fallback);
        assert!(gen.resolve_world("atlantis").used_fallback);
    }

    #[test]
    fn test_boss_name_uses_world_fragment() {
        let gen = generator();
        let world = gen.catalog().default_world();
        let level = gen.generate("basics", 1).unwrap().level;

        assert_eq!(level.boss_name, format!("{} Goblin", world.boss_fragment));
        assert_eq!(level.boss_image, "/bosses/goblin.png");
        assert!(!level.boss_questions.is_empty());
    }
}
