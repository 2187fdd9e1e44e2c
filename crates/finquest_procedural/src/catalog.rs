//! # Content Catalog
//!
//! Curated per-world content pools, loaded from TOML and validated once.
//!
//! ## Layout
//!
//! ```toml
//! [poll]
//! question = "..."
//! options = ["...", "..."]
//! correct_index = 0
//!
//! [info_drop]
//! fragments = ["Pro tip from {world}: ..."]
//!
//! [[worlds]]
//! id = "basics"
//! title = "Money Basics"
//! boss_fragment = "Impulse"
//! tagline = "..."
//!
//! [[worlds.swipes]]       # decision-swipe pool
//! [[worlds.lies]]         # spot-the-lie pool
//! [[worlds.memes]]        # meme pool
//! [[worlds.calculators]]  # calculator pool
//! [[worlds.boss_questions]]  # optional except for the first world
//! ```
//!
//! The first world is the default world: unknown world ids resolve to it,
//! and worlds without boss questions borrow its set.
//!
//! Once loaded the catalog is immutable and can be shared across threads
//! without locking.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use finquest_shared::{
    normalize_world_id, BossQuestion, Calculator, Meme, Poll, SpotTheLie, Statement,
    SwipeDecision, SwipeSide,
};
use serde::Deserialize;
use tracing::info;

use crate::error::{GenerationError, GenerationResult};

/// Catalog shipped with the crate.
const BUNDLED_CATALOG: &str = include_str!("../data/worlds.toml");

/// Placeholder replaced by the world title in info-drop fragments.
pub const WORLD_PLACEHOLDER: &str = "{world}";

/// Ordered, non-empty list of content items for one (world, archetype).
///
/// Selection is index-based; see [`pool_index`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ContentPool<T> {
    items: Vec<T>,
}

impl<T> ContentPool<T> {
    /// Creates a pool from items. Emptiness is rejected at catalog validation.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Item for lesson `slot` of `level_number`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyPool`] if the pool is empty.
    pub fn select(&self, level_number: u32, slot: u32) -> GenerationResult<&T> {
        pool_index(level_number, slot, self.items.len())
            .and_then(|index| self.items.get(index))
            .ok_or(GenerationError::EmptyPool)
    }
}

/// Pool index for lesson `slot` of `level_number`:
/// `((level_number - 1) + slot * 3) mod pool_len`.
///
/// Returns `None` for an empty pool. Periodic in `level_number` with period
/// `pool_len`; not guaranteed collision-free across slots.
#[must_use]
pub fn pool_index(level_number: u32, slot: u32, pool_len: usize) -> Option<usize> {
    let len = u64::try_from(pool_len).ok().filter(|&len| len > 0)?;
    let offset = u64::from(level_number.saturating_sub(1)) + u64::from(slot) * 3;
    usize::try_from(offset % len).ok()
}

/// Decision-swipe pool entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwipeItem {
    /// The decision.
    pub question: String,
    /// Left card label.
    pub left: String,
    /// Right card label.
    pub right: String,
    /// The smart side.
    pub correct: SwipeSide,
    /// Post-swipe text.
    pub flavor: String,
}

impl SwipeItem {
    /// Shapes the entry into a lesson payload.
    #[must_use]
    pub fn to_payload(&self) -> SwipeDecision {
        SwipeDecision {
            question: self.question.clone(),
            left_option: self.left.clone(),
            right_option: self.right.clone(),
            correct_side: self.correct,
            flavor_text: self.flavor.clone(),
        }
    }
}

/// Spot-the-lie pool entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LieItem {
    /// Instruction text.
    pub prompt: String,
    /// All statements, the lie included.
    pub statements: Vec<String>,
    /// Which statement is the lie.
    pub lie_index: usize,
}

impl LieItem {
    /// Shapes the entry into a lesson payload with exactly one lie.
    #[must_use]
    pub fn to_payload(&self) -> SpotTheLie {
        SpotTheLie {
            prompt: self.prompt.clone(),
            statements: self
                .statements
                .iter()
                .enumerate()
                .map(|(i, text)| Statement {
                    text: text.clone(),
                    is_lie: i == self.lie_index,
                })
                .collect(),
        }
    }
}

/// Meme pool entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemeItem {
    /// Template image.
    pub image_url: String,
    /// Top caption.
    pub top: String,
    /// Bottom caption.
    pub bottom: String,
}

impl MemeItem {
    /// Shapes the entry into a lesson payload.
    #[must_use]
    pub fn to_payload(&self) -> Meme {
        Meme {
            image_url: self.image_url.clone(),
            top_caption: self.top.clone(),
            bottom_caption: self.bottom.clone(),
        }
    }
}

/// Calculator pool entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorItem {
    /// Scenario label.
    pub label: String,
    /// Question.
    pub prompt: String,
    /// Expected answer.
    pub answer: f64,
    /// Post-answer text.
    pub flavor: String,
}

impl CalculatorItem {
    /// Shapes the entry into a lesson payload.
    #[must_use]
    pub fn to_payload(&self) -> Calculator {
        Calculator {
            label: self.label.clone(),
            prompt: self.prompt.clone(),
            numeric_answer: self.answer,
            flavor_text: self.flavor.clone(),
        }
    }
}

/// Content tables for one world.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldContent {
    /// Canonical world id (no whitespace).
    pub id: String,
    /// Display title.
    pub title: String,
    /// First word of every boss name in this world.
    pub boss_fragment: String,
    /// One-line world pitch, used in level descriptions.
    pub tagline: String,
    /// Decision-swipe pool.
    pub swipes: ContentPool<SwipeItem>,
    /// Spot-the-lie pool.
    pub lies: ContentPool<LieItem>,
    /// Meme pool.
    pub memes: ContentPool<MemeItem>,
    /// Calculator pool.
    pub calculators: ContentPool<CalculatorItem>,
    /// Boss quiz. Empty means "use the default world's quiz".
    #[serde(default)]
    pub boss_questions: Vec<BossQuestion>,
}

impl WorldContent {
    /// Whether `world_id` names this world, by id or by display title.
    ///
    /// Comparison ignores whitespace and ASCII case.
    #[must_use]
    pub fn matches(&self, world_id: &str) -> bool {
        let key = normalize_world_id(world_id);
        key.eq_ignore_ascii_case(&self.id)
            || key.eq_ignore_ascii_case(&normalize_world_id(&self.title))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct InfoDropTable {
    fragments: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    poll: Poll,
    info_drop: InfoDropTable,
    worlds: Vec<WorldContent>,
}

/// Validated, immutable content tables for every world.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentCatalog {
    poll: Poll,
    tip_fragments: Vec<String>,
    worlds: Vec<WorldContent>,
}

impl ContentCatalog {
    /// Loads the catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidConfig`] if the bundled data is
    /// malformed.
    pub fn bundled() -> GenerationResult<Self> {
        Self::from_toml_str(BUNDLED_CATALOG)
    }

    /// Parses and validates a TOML catalog.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidConfig`] on parse or validation
    /// failure.
    pub fn from_toml_str(source: &str) -> GenerationResult<Self> {
        let file: CatalogFile =
            toml::from_str(source).map_err(|e| GenerationError::InvalidConfig(e.to_string()))?;

        let catalog = Self {
            poll: file.poll,
            tip_fragments: file.info_drop.fragments,
            worlds: file.worlds,
        };
        catalog.validate()?;

        info!(
            worlds = catalog.worlds.len(),
            tips = catalog.tip_fragments.len(),
            "content catalog loaded"
        );
        Ok(catalog)
    }

    /// Reads, parses and validates a TOML catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Io`] if the file cannot be read, otherwise
    /// as [`ContentCatalog::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> GenerationResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| GenerationError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// All worlds, default world first.
    #[must_use]
    pub fn worlds(&self) -> &[WorldContent] {
        &self.worlds
    }

    /// The default world (first in the catalog).
    #[must_use]
    pub fn default_world(&self) -> &WorldContent {
        // validate() guarantees at least one world
        &self.worlds[0]
    }

    /// Finds a world by id or display title.
    #[must_use]
    pub fn find_world(&self, world_id: &str) -> Option<&WorldContent> {
        self.worlds.iter().find(|w| w.matches(world_id))
    }

    /// Boss quiz for a world, falling back to the default world's quiz.
    #[must_use]
    pub fn boss_questions_for<'a>(&'a self, world: &'a WorldContent) -> &'a [BossQuestion] {
        if world.boss_questions.is_empty() {
            &self.default_world().boss_questions
        } else {
            &world.boss_questions
        }
    }

    /// The generic poll payload.
    #[must_use]
    pub fn poll(&self) -> &Poll {
        &self.poll
    }

    /// Info-drop tip fragments, each containing [`WORLD_PLACEHOLDER`].
    #[must_use]
    pub fn tip_fragments(&self) -> &[String] {
        &self.tip_fragments
    }

    fn validate(&self) -> GenerationResult<()> {
        let invalid = |msg: String| Err(GenerationError::InvalidConfig(msg));

        if self.worlds.is_empty() {
            return invalid("catalog defines no worlds".to_string());
        }
        if self.tip_fragments.is_empty() {
            return invalid("info_drop.fragments is empty".to_string());
        }
        for (i, fragment) in self.tip_fragments.iter().enumerate() {
            if fragment.trim().is_empty() {
                return invalid(format!("info_drop.fragments[{i}] is blank"));
            }
            if !fragment.contains(WORLD_PLACEHOLDER) {
                return invalid(format!(
                    "info_drop.fragments[{i}] is missing {WORLD_PLACEHOLDER}"
                ));
            }
        }
        validate_choice("poll", &self.poll.options, self.poll.correct_index)?;

        // every id and normalized title must resolve to exactly one world
        let mut ids = HashSet::new();
        let mut names: HashMap<String, &str> = HashMap::new();
        for world in &self.worlds {
            validate_world(world)?;
            if !ids.insert(world.id.to_ascii_lowercase()) {
                return invalid(format!("duplicate world id {:?}", world.id));
            }

            let title_key = normalize_world_id(&world.title).to_ascii_lowercase();
            for key in [world.id.to_ascii_lowercase(), title_key] {
                let owner = *names.entry(key.clone()).or_insert(world.id.as_str());
                if owner != world.id {
                    return invalid(format!(
                        "world {:?}: name {key:?} already refers to world {owner:?}",
                        world.id
                    ));
                }
            }
        }

        if self.default_world().boss_questions.is_empty() {
            return invalid(format!(
                "default world {:?} must define boss_questions",
                self.default_world().id
            ));
        }
        Ok(())
    }
}

fn validate_world(world: &WorldContent) -> GenerationResult<()> {
    let id = &world.id;
    let invalid = |msg: String| Err(GenerationError::InvalidConfig(msg));

    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return invalid(format!("world id {id:?} must be non-empty with no whitespace"));
    }
    if world.title.trim().is_empty() {
        return invalid(format!("world {id}: title is blank"));
    }

    for (pool, len) in [
        ("swipes", world.swipes.len()),
        ("lies", world.lies.len()),
        ("memes", world.memes.len()),
        ("calculators", world.calculators.len()),
    ] {
        if len == 0 {
            return invalid(format!("world {id}: {pool} pool is empty"));
        }
    }

    for (i, lie) in world.lies.items().iter().enumerate() {
        if lie.statements.len() < 2 {
            return invalid(format!("world {id}: lies[{i}] needs at least 2 statements"));
        }
        if lie.lie_index >= lie.statements.len() {
            return invalid(format!(
                "world {id}: lies[{i}] lie_index {} out of range",
                lie.lie_index
            ));
        }
    }

    for (i, calc) in world.calculators.items().iter().enumerate() {
        if !calc.answer.is_finite() {
            return invalid(format!("world {id}: calculators[{i}] answer is not finite"));
        }
    }

    for (i, question) in world.boss_questions.iter().enumerate() {
        validate_choice(
            &format!("world {id}: boss_questions[{i}]"),
            &question.options,
            question.correct_index,
        )?;
    }
    Ok(())
}

fn validate_choice(
    context: &str,
    options: &[String],
    correct_index: usize,
) -> GenerationResult<()> {
    if options.len() < 2 {
        return Err(GenerationError::InvalidConfig(format!(
            "{context}: needs at least 2 options"
        )));
    }
    if correct_index >= options.len() {
        return Err(GenerationError::InvalidConfig(format!(
            "{context}: correct_index {correct_index} out of range"
        )));
    }
    Ok(())
}
