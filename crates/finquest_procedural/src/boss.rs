//! # Boss Rotation
//!
//! Every level ends with a boss. The boss archetype rotates with the level
//! number so consecutive levels never share a boss:
//!
//! ```text
//! level:  1      2     3      4       5      6     7     8      9 ...
//! boss:   goblin troll dragon vampire reaper titan golem wizard goblin ...
//! ```
//!
//! The rotation is index-based, not random.

/// Boss archetypes, in rotation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BossArchetype {
    /// Level 1, 9, 17, ...
    Goblin = 0,
    /// Level 2, 10, ...
    Troll = 1,
    /// Level 3, 11, ...
    Dragon = 2,
    /// Level 4, 12, ...
    Vampire = 3,
    /// Level 5, 13, ...
    Reaper = 4,
    /// Level 6, 14, ...
    Titan = 5,
    /// Level 7, 15, ...
    Golem = 6,
    /// Level 8, 16, ...
    Wizard = 7,
}

impl BossArchetype {
    /// All archetypes in rotation order.
    pub const ALL: [Self; 8] = [
        Self::Goblin,
        Self::Troll,
        Self::Dragon,
        Self::Vampire,
        Self::Reaper,
        Self::Titan,
        Self::Golem,
        Self::Wizard,
    ];

    /// Archetype for a one-based level number: `ALL[(level - 1) mod 8]`.
    ///
    /// Level 0 is treated as level 1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn for_level(level_number: u32) -> Self {
        let index = level_number.saturating_sub(1) % 8;
        Self::from_u8(index as u8)
    }

    /// Converts from u8 (wraps modulo 8).
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value % 8 {
            0 => Self::Goblin,
            1 => Self::Troll,
            2 => Self::Dragon,
            3 => Self::Vampire,
            4 => Self::Reaper,
            5 => Self::Titan,
            6 => Self::Golem,
            _ => Self::Wizard,
        }
    }

    /// Display name, used as the second word of the boss name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Goblin => "Goblin",
            Self::Troll => "Troll",
            Self::Dragon => "Dragon",
            Self::Vampire => "Vampire",
            Self::Reaper => "Reaper",
            Self::Titan => "Titan",
            Self::Golem => "Golem",
            Self::Wizard => "Wizard",
        }
    }

    /// Lowercase key used for artwork.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Goblin => "goblin",
            Self::Troll => "troll",
            Self::Dragon => "dragon",
            Self::Vampire => "vampire",
            Self::Reaper => "reaper",
            Self::Titan => "titan",
            Self::Golem => "golem",
            Self::Wizard => "wizard",
        }
    }

    /// Artwork path for this archetype.
    #[must_use]
    pub fn image_path(self) -> String {
        format!("/bosses/{}.png", self.slug())
    }

    /// Full boss name for a world's boss fragment, e.g. `"Impulse Goblin"`.
    #[must_use]
    pub fn boss_name(self, fragment: &str) -> String {
        format!("{fragment} {}", self.name())
    }

    /// Taunt shown before the boss quiz.
    #[must_use]
    pub fn intro_text(self, boss_name: &str) -> String {
        format!("{boss_name} {}", self.taunt())
    }

    const fn taunt(self) -> &'static str {
        match self {
            Self::Goblin => "snickers: \"Your coins are mine, one tiny purchase at a time!\"",
            Self::Troll => "blocks the bridge: \"Pay the toll or prove you know your money!\"",
            Self::Dragon => "guards a hoard: \"You'll never save a pile like mine!\"",
            Self::Vampire => "hisses: \"I drain wallets slowly. You won't even notice.\"",
            Self::Reaper => "looms: \"Bad choices come due eventually.\"",
            Self::Titan => "roars: \"Only the sharpest minds can move me!\"",
            Self::Golem => "rumbles: \"Solid facts are the only way through.\"",
            Self::Wizard => "waves a wand: \"Let's see if your money magic is real.\"",
        }
    }
}

impl std::fmt::Display for BossArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
