//! # Lesson Contracts
//!
//! Lesson archetypes and their payloads.
//!
//! ## Wire Format
//!
//! A lesson serializes as a flat object whose `archetype` field carries the
//! tag and whose `content` field carries the untagged payload:
//!
//! ```text
//! { "id": "basics_l1_0", "archetype": "decision-swipe",
//!   "content": { "question": ..., "leftOption": ..., "correctSide": "left", ... } }
//! ```
//!
//! The descriptor derives `archetype` from the payload, so the two can
//! never disagree.

use serde::{Deserialize, Serialize};

use crate::constants::{coin_reward, xp_reward, LESSONS_PER_LEVEL, LESSON_ID_SEPARATOR};

/// Lesson interaction styles, in level slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonArchetype {
    /// Swipe left or right on a money decision.
    DecisionSwipe,
    /// Pick the false statement out of a list.
    SpotTheLie,
    /// Meme with a finance punchline.
    Meme,
    /// Work out a number.
    Calculator,
    /// Multiple-choice poll.
    Poll,
    /// Short tip, no interaction.
    InfoDrop,
}

impl LessonArchetype {
    /// Every archetype, in the order lessons appear within a level.
    pub const ALL: [Self; LESSONS_PER_LEVEL] = [
        Self::DecisionSwipe,
        Self::SpotTheLie,
        Self::Meme,
        Self::Calculator,
        Self::Poll,
        Self::InfoDrop,
    ];

    /// Wire name (kebab-case).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DecisionSwipe => "decision-swipe",
            Self::SpotTheLie => "spot-the-lie",
            Self::Meme => "meme",
            Self::Calculator => "calculator",
            Self::Poll => "poll",
            Self::InfoDrop => "info-drop",
        }
    }

    /// Player-facing lesson title.
    #[must_use]
    pub const fn display_title(self) -> &'static str {
        match self {
            Self::DecisionSwipe => "Swipe Decision",
            Self::SpotTheLie => "Spot the Lie",
            Self::Meme => "Meme Break",
            Self::Calculator => "Money Math",
            Self::Poll => "Quick Poll",
            Self::InfoDrop => "Info Drop",
        }
    }
}

impl std::fmt::Display for LessonArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way the player should swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeSide {
    /// Swipe left.
    Left,
    /// Swipe right.
    Right,
}

/// Decision-swipe payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeDecision {
    /// The decision being made.
    pub question: String,
    /// Label on the left card.
    pub left_option: String,
    /// Label on the right card.
    pub right_option: String,
    /// The smart choice.
    pub correct_side: SwipeSide,
    /// Shown after the swipe.
    pub flavor_text: String,
}

/// One line in a spot-the-lie lesson.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    /// Statement text.
    pub text: String,
    /// Whether this is the false statement.
    pub is_lie: bool,
}

/// Spot-the-lie payload. Exactly one statement is a lie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotTheLie {
    /// Instruction shown above the statements.
    pub prompt: String,
    /// Candidate statements.
    pub statements: Vec<Statement>,
}

impl SpotTheLie {
    /// Number of statements flagged as lies.
    #[must_use]
    pub fn lie_count(&self) -> usize {
        self.statements.iter().filter(|s| s.is_lie).count()
    }
}

/// Meme payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meme {
    /// Template image.
    pub image_url: String,
    /// Caption above the image.
    pub top_caption: String,
    /// Caption below the image.
    pub bottom_caption: String,
}

/// Calculator payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculator {
    /// Short scenario label.
    pub label: String,
    /// The question to compute.
    pub prompt: String,
    /// Expected answer.
    pub numeric_answer: f64,
    /// Shown after answering.
    pub flavor_text: String,
}

/// Poll payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    /// Poll question.
    pub question: String,
    /// Answer choices.
    pub options: Vec<String>,
    /// Index of the best answer in `options`.
    #[serde(alias = "correct_index")]
    pub correct_index: usize,
}

/// Info-drop payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoDrop {
    /// The tip.
    pub text: String,
}

/// Archetype-specific lesson payload.
///
/// Serialized untagged; variants are ordered so that deserialization tries
/// the payloads with the most required fields first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LessonContent {
    /// Decision-swipe payload.
    DecisionSwipe(SwipeDecision),
    /// Calculator payload.
    Calculator(Calculator),
    /// Spot-the-lie payload.
    SpotTheLie(SpotTheLie),
    /// Meme payload.
    Meme(Meme),
    /// Poll payload.
    Poll(Poll),
    /// Info-drop payload.
    InfoDrop(InfoDrop),
}

impl LessonContent {
    /// The archetype this payload belongs to.
    #[must_use]
    pub const fn archetype(&self) -> LessonArchetype {
        match self {
            Self::DecisionSwipe(_) => LessonArchetype::DecisionSwipe,
            Self::SpotTheLie(_) => LessonArchetype::SpotTheLie,
            Self::Meme(_) => LessonArchetype::Meme,
            Self::Calculator(_) => LessonArchetype::Calculator,
            Self::Poll(_) => LessonArchetype::Poll,
            Self::InfoDrop(_) => LessonArchetype::InfoDrop,
        }
    }
}

/// A lesson within a level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDescriptor {
    /// `level_id + "_" + order`.
    pub id: String,
    /// World id as requested by the caller, whitespace removed.
    pub world_id: String,
    /// Owning level id.
    pub level_id: String,
    /// Zero-based slot within the level.
    pub order: u32,
    /// Interaction style, always equal to `content.archetype()`.
    pub archetype: LessonArchetype,
    /// Lesson title.
    pub title: String,
    /// Archetype payload.
    pub content: LessonContent,
    /// XP for completing the lesson.
    pub xp_reward: u32,
    /// Coins for completing the lesson.
    pub coin_reward: u32,
}

impl LessonDescriptor {
    /// Builds a lesson, deriving id, archetype and rewards from the slot.
    #[must_use]
    pub fn new(
        world_id: &str,
        level_id: &str,
        order: u32,
        title: String,
        content: LessonContent,
    ) -> Self {
        Self {
            id: lesson_id(level_id, order),
            world_id: world_id.to_string(),
            level_id: level_id.to_string(),
            order,
            archetype: content.archetype(),
            title,
            content,
            xp_reward: xp_reward(order),
            coin_reward: coin_reward(order),
        }
    }
}

/// Lesson id for slot `order` of `level_id`.
#[must_use]
pub fn lesson_id(level_id: &str, order: u32) -> String {
    format!("{level_id}{LESSON_ID_SEPARATOR}{order}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll() -> LessonContent {
        LessonContent::Poll(Poll {
            question: "Best first step?".to_string(),
            options: vec!["Budget".to_string(), "Splurge".to_string()],
            correct_index: 0,
        })
    }

    #[test]
    fn test_descriptor_derives_identity_and_rewards() {
        let lesson = LessonDescriptor::new("basics", "basics_l2", 4, "Quick Poll".into(), poll());

        assert_eq!(lesson.id, "basics_l2_4");
        assert_eq!(lesson.archetype, LessonArchetype::Poll);
        assert_eq!(lesson.xp_reward, 180);
        assert_eq!(lesson.coin_reward, 90);
    }

    #[test]
    fn test_archetype_order_matches_slots() {
        let names: Vec<&str> = LessonArchetype::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(names.len(), LESSONS_PER_LEVEL);
        assert_eq!(
            names,
            vec!["decision-swipe", "spot-the-lie", "meme", "calculator", "poll", "info-drop"]
        );
    }

    #[test]
    fn test_swipe_wire_field_names() {
        let content = LessonContent::DecisionSwipe(SwipeDecision {
            question: "Buy the hoodie?".to_string(),
            left_option: "Skip".to_string(),
            right_option: "Buy".to_string(),
            correct_side: SwipeSide::Left,
            flavor_text: "Wallet says thanks.".to_string(),
        });
        let json = serde_json::to_value(&content).unwrap();

        assert_eq!(json["leftOption"], "Skip");
        assert_eq!(json["rightOption"], "Buy");
        assert_eq!(json["correctSide"], "left");
        assert_eq!(json["flavorText"], "Wallet says thanks.");
        assert!(json.get("archetype").is_none(), "payload must be untagged");
    }

    #[test]
    fn test_lesson_json_carries_kebab_archetype() {
        let lesson = LessonDescriptor::new("basics", "basics_l1", 4, "Quick Poll".into(), poll());
        let json = serde_json::to_value(&lesson).unwrap();

        assert_eq!(json["archetype"], "poll");
        assert_eq!(json["levelId"], "basics_l1");
        assert_eq!(json["xpReward"], 180);
        assert_eq!(json["content"]["correctIndex"], 0);
    }

    #[test]
    fn test_untagged_payload_reads_back_as_same_variant() {
        let lie = LessonContent::SpotTheLie(SpotTheLie {
            prompt: "Which one is false?".to_string(),
            statements: vec![
                Statement {
                    text: "Interest compounds.".to_string(),
                    is_lie: false,
                },
                Statement {
                    text: "Debt is free money.".to_string(),
                    is_lie: true,
                },
            ],
        });
        let text = serde_json::to_string(&lie).unwrap();
        let back: LessonContent = serde_json::from_str(&text).unwrap();

        assert_eq!(back.archetype(), LessonArchetype::SpotTheLie);
        assert_eq!(back, lie);
    }
}
