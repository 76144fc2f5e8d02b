use serde::{Deserialize, Serialize};

/// Platforms a game can be played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Pc,
    XboxOne,
    XboxSeriesXs,
    Ps4,
    Ps5,
    Switch,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::XboxOne => "Xbox One",
            Self::XboxSeriesXs => "Xbox Series X|S",
            Self::Ps4 => "PlayStation 4",
            Self::Ps5 => "PlayStation 5",
            Self::Switch => "Nintendo Switch",
        }
    }
}

/// Declarative metadata the host reads when a game module is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub platform: Platform,
    pub platforms_other: Vec<Platform>,
    pub is_adult_only_or_unrated: bool,
}

impl GameMetadata {
    /// Primary platform followed by the others.
    pub fn all_platforms(&self) -> Vec<Platform> {
        let mut platforms = vec![self.platform];
        platforms.extend(self.platforms_other.iter().copied());
        platforms
    }

    pub fn supports(&self, platform: Platform) -> bool {
        self.platform == platform || self.platforms_other.contains(&platform)
    }
}
