use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::schema::options::{load_options, parse_options, OptionToggle, OptionsError, ToggleSet};

pub const INCLUDE_PVP: &str = "sea_of_thieves_include_pvp";
pub const INCLUDE_FISHING: &str = "sea_of_thieves_include_fishing";
pub const INCLUDE_TALL_TALES: &str = "sea_of_thieves_include_tall_tales";
pub const INCLUDE_EMERGENT_EVENTS: &str = "sea_of_thieves_include_emergent_events";
pub const INCLUDE_SOCIAL: &str = "sea_of_thieves_include_social";

static SCHEMA: [OptionToggle; 5] = [
    OptionToggle {
        key: INCLUDE_PVP,
        display_name: "Sea of Thieves PVP Objectives",
        description: "Indicates if PVP based objectives (hourglass, world pvp) should be generated",
        default: false,
    },
    OptionToggle {
        key: INCLUDE_FISHING,
        display_name: "Sea of Thieves Fishing Objectives",
        description: "Indicates if non-voyage fishing checks should be included (catch specific fish, earn X gold off of fish)",
        default: false,
    },
    OptionToggle {
        key: INCLUDE_TALL_TALES,
        display_name: "Sea of Thieves Tall Tale Objectives",
        description: "Indicates if Tall Tale objectives should be included (recommended to have access to all beforehand!)",
        default: false,
    },
    OptionToggle {
        key: INCLUDE_EMERGENT_EVENTS,
        display_name: "Sea of Thieves Emergent Event Objectives",
        description: "Indicates whether emergent events (krakens, megalodons, skeleton ships) should be included. These objectives can be hard to purposefully check, and require a bit of RARE luck.",
        default: false,
    },
    OptionToggle {
        key: INCLUDE_SOCIAL,
        display_name: "Sea of Thieves Social Objectives",
        description: "Indicates whether more 'social' checks should be included. Sea of Thieves is a social game, and incentivizing this can be a lot of fun! These objectives may be fairly subjective.",
        default: false,
    },
];

/// Player-facing toggles for Sea of Thieves. Every toggle defaults to off,
/// and a RON file that omits one leaves it off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeaOfThievesOptions {
    #[serde(default, rename = "sea_of_thieves_include_pvp")]
    pub include_pvp: bool,
    #[serde(default, rename = "sea_of_thieves_include_fishing")]
    pub include_fishing: bool,
    #[serde(default, rename = "sea_of_thieves_include_tall_tales")]
    pub include_tall_tales: bool,
    #[serde(default, rename = "sea_of_thieves_include_emergent_events")]
    pub include_emergent_events: bool,
    #[serde(default, rename = "sea_of_thieves_include_social")]
    pub include_social: bool,
}

impl SeaOfThievesOptions {
    /// Every optional group switched on.
    pub fn all() -> Self {
        Self {
            include_pvp: true,
            include_fishing: true,
            include_tall_tales: true,
            include_emergent_events: true,
            include_social: true,
        }
    }

    pub fn parse_ron(input: &str) -> Result<Self, OptionsError> {
        parse_options(input)
    }

    pub fn load_from_ron(path: &Path) -> Result<Self, OptionsError> {
        load_options(path)
    }
}

impl ToggleSet for SeaOfThievesOptions {
    fn schema() -> &'static [OptionToggle] {
        &SCHEMA
    }

    fn flag(&self, key: &str) -> Option<bool> {
        match key {
            INCLUDE_PVP => Some(self.include_pvp),
            INCLUDE_FISHING => Some(self.include_fishing),
            INCLUDE_TALL_TALES => Some(self.include_tall_tales),
            INCLUDE_EMERGENT_EVENTS => Some(self.include_emergent_events),
            INCLUDE_SOCIAL => Some(self.include_social),
            _ => None,
        }
    }

    fn flag_mut(&mut self, key: &str) -> Option<&mut bool> {
        match key {
            INCLUDE_PVP => Some(&mut self.include_pvp),
            INCLUDE_FISHING => Some(&mut self.include_fishing),
            INCLUDE_TALL_TALES => Some(&mut self.include_tall_tales),
            INCLUDE_EMERGENT_EVENTS => Some(&mut self.include_emergent_events),
            INCLUDE_SOCIAL => Some(&mut self.include_social),
            _ => None,
        }
    }
}
