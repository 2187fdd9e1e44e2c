//! # Level Contracts
//!
//! Level descriptors and the boss quiz they carry.

use serde::{Deserialize, Serialize};

use crate::constants::LEVEL_ID_SEPARATOR;

/// A boss-battle quiz question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossQuestion {
    /// Question text.
    pub prompt: String,
    /// Answer choices.
    pub options: Vec<String>,
    /// Index of the right answer in `options`.
    #[serde(alias = "correct_index")]
    pub correct_index: usize,
    /// Shown after answering.
    pub explanation: String,
}

/// A level within a world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDescriptor {
    /// `normalize(world_id) + "_l" + level_number`. The sole identity key.
    pub id: String,
    /// World id as requested by the caller, whitespace removed.
    pub world_id: String,
    /// One-based level number.
    pub level_number: u32,
    /// Level title.
    pub title: String,
    /// Level blurb.
    pub description: String,
    /// Boss display name.
    pub boss_name: String,
    /// Boss artwork path.
    pub boss_image: String,
    /// Boss taunt shown before the quiz.
    pub boss_intro_text: String,
    /// Boss quiz.
    pub boss_questions: Vec<BossQuestion>,
}

/// Removes all whitespace from a world id.
#[must_use]
pub fn normalize_world_id(world_id: &str) -> String {
    world_id.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Canonical level id for `level_number` of `world_id`.
///
/// ```
/// use finquest_shared::level_id;
///
/// assert_eq!(level_id("Budget Beach", 1), "BudgetBeach_l1");
/// ```
#[must_use]
pub fn level_id(world_id: &str, level_number: u32) -> String {
    format!(
        "{}{LEVEL_ID_SEPARATOR}{level_number}",
        normalize_world_id(world_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_id_strips_all_whitespace() {
        assert_eq!(level_id("basics", 3), "basics_l3");
        assert_eq!(level_id("Budget Beach", 1), "BudgetBeach_l1");
        assert_eq!(level_id(" Credit\tCanyon \n", 8), "CreditCanyon_l8");
    }

    #[test]
    fn test_boss_question_accepts_snake_case_input() {
        let question: BossQuestion = serde_json::from_str(
            r#"{"prompt":"2+2?","options":["3","4"],"correct_index":1,"explanation":"Math."}"#,
        )
        .unwrap();

        assert_eq!(question.correct_index, 1);
        assert_eq!(question.options[question.correct_index], "4");
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["correctIndex"], 1);
    }
}
