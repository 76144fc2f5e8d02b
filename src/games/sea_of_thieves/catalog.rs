//! Lookup tables for Sea of Thieves objectives.
//!
//! The tables live in one immutable `static`. Accessors hand out owned
//! copies so callers can filter or extend a list without touching the
//! shared data.

/// Every named table used to fill Sea of Thieves placeholders.
#[derive(Debug)]
pub struct Catalog {
    pub gh_voyages: &'static [&'static str],
    pub oos_voyages: &'static [&'static str],
    pub ma_voyages: &'static [&'static str],
    pub hc_voyages: &'static [&'static str],
    pub af_voyages: &'static [&'static str],
    pub rb_voyages: &'static [&'static str],
    pub world_events: &'static [&'static str],
    pub sunken_kingdom: &'static [&'static str],
    pub base_factions: &'static [&'static str],
    pub pvp_factions: &'static [&'static str],
    pub raids: &'static [&'static str],
    pub hg_factions: &'static [&'static str],
    pub fish: &'static [&'static str],
    pub tall_tales: &'static [&'static str],
    pub emergent_events: &'static [&'static str],
}

pub static CATALOG: Catalog = Catalog {
    gh_voyages: &["Treasure Map", "Riddle Quest", "Treasure Vault"],
    oos_voyages: &["Skeleton Bounty", "Ghost Armada"],
    ma_voyages: &["Lost Shipment", "Cargo Run", "Merchant Contract"],
    hc_voyages: &["Fishing", "Hunting"],
    af_voyages: &["Voyage of Legends", "Legend of the Veil", "Legendary Search"],
    rb_voyages: &["Ritual", "Search"],
    world_events: &[
        "Skeleton Fort",
        "Skeleton Fleet",
        "Reaper Fortress",
        "Fort of Fortune",
        "Ghost Fleet",
        "Ashen Winds",
    ],
    sunken_kingdom: &[
        "Shrine of the Coral Tomb",
        "Shrine of Ocean's Fortune",
        "Shrine of Ancient Tears",
        "Shrine of Tribute",
        "Shrine of Hungering",
        "Shrine of Flooded Embrace",
        "Treasury of Sunken Shores",
        "Treasury of the Lost Ancients",
        "Treasury of the Secret Wilds",
    ],
    base_factions: &[
        "Gold Hoarders",
        "Order of Souls",
        "Merchant Alliance",
        "Hunter's Call",
        "Athena's Fortune",
    ],
    pvp_factions: &["Reaper's Bones"],
    raids: &[
        "Sea Fort",
        "Skeleton Camp",
        "Ashen Lord",
        "Skeleton Armada",
        "Ghost Fleet",
        "Skeleton Fort",
    ],
    hg_factions: &["Guardians of Fortune", "Servants of the Flame"],
    fish: &[
        "Ruby Splashtail",
        "Sunny Splashtail",
        "Indigo Splashtail",
        "Umber Splashtail",
        "Seafoam Splashtail",
        "Charcoal Pondie",
        "Orchid Pondie",
        "Bronze Pondie",
        "Bright Pondie",
        "Moonsky Pondie",
        "Stone Islehopper",
        "Moss Islehopper",
        "Honey Islehopper",
        "Raven Islehopper",
        "Amethyst Islehopper",
        "Almond Ancientscale",
        "Sapphire Ancientscale",
        "Smoke Ancientscale",
        "Bone Ancientscale",
        "Starshine Ancientscale",
        "Olive Plentifin",
        "Amber Plentifin",
        "Cloudy Plentifin",
        "Bonedust Plentifin",
        "Watery Plentifin",
        "Russet Wildsplash",
        "Sandy Wildsplash",
        "Ocean Wildsplash",
        "Muddy Wildsplash",
        "Coral Wildsplash",
        "Ashen Devilfish",
        "Seashell Devilfish",
        "Lava Devilfish",
        "Forsaken Devilfish",
        "Firelight Devilfish",
        "Jade Battlegill",
        "Sky Battlegill",
        "Rum Battlegill",
        "Sand Battlegill",
        "Bittersweet Battlegill",
        "Rose Wrecker",
        "Sun Wrecker",
        "Blackcloud Wrecker",
        "Snow Wrecker",
        "Moon Wrecker",
        "Ancient Stormfish",
        "Shores Stormfish",
        "Wild Stormfish",
        "Shadow Stormfish",
        "Twilight Stormfish",
    ],
    tall_tales: &[
        "The Shroudbreaker",
        "The Cursed Rogue",
        "The Legendary Storyteller",
        "Stars of a Thief",
        "Wild Rose",
        "The Art of the Trickster",
        "The Fate of the Morningstar",
        "Revenge of the Morningstar",
        "Shores of Gold",
        "The Seabound Soul",
        "Heart of Fire",
        "A Pirate's Life",
        "The Sunken Pearl",
        "Captains of the Damned",
        "Dark Brethren",
        "Lords of the Sea",
        "Journey to Melee Island",
        "The Quest for Guybrush",
        "The Lair of LeChuck",
    ],
    emergent_events: &["Kraken", "Megalodon", "Skeleton Sloop", "Skeleton Galleon"],
};

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

impl Catalog {
    pub fn gh_voyages(&self) -> Vec<String> {
        owned(self.gh_voyages)
    }

    pub fn oos_voyages(&self) -> Vec<String> {
        owned(self.oos_voyages)
    }

    pub fn ma_voyages(&self) -> Vec<String> {
        owned(self.ma_voyages)
    }

    pub fn hc_voyages(&self) -> Vec<String> {
        owned(self.hc_voyages)
    }

    pub fn af_voyages(&self) -> Vec<String> {
        owned(self.af_voyages)
    }

    pub fn rb_voyages(&self) -> Vec<String> {
        owned(self.rb_voyages)
    }

    pub fn world_events(&self) -> Vec<String> {
        owned(self.world_events)
    }

    pub fn sunken_kingdom(&self) -> Vec<String> {
        owned(self.sunken_kingdom)
    }

    /// Factions that can run raids. Never includes PvP-only factions.
    pub fn pve_factions(&self) -> Vec<String> {
        owned(self.base_factions)
    }

    /// Factions eligible for emissary objectives. PvP-only factions are
    /// appended to a fresh copy of the base list when PvP is enabled.
    pub fn factions(&self, include_pvp: bool) -> Vec<String> {
        let mut factions = owned(self.base_factions);
        if include_pvp {
            factions.extend(self.pvp_factions.iter().map(|s| s.to_string()));
        }
        factions
    }

    pub fn raids(&self) -> Vec<String> {
        owned(self.raids)
    }

    pub fn hg_factions(&self) -> Vec<String> {
        owned(self.hg_factions)
    }

    pub fn fish(&self) -> Vec<String> {
        owned(self.fish)
    }

    pub fn tall_tales(&self) -> Vec<String> {
        owned(self.tall_tales)
    }

    pub fn emergent_events(&self) -> Vec<String> {
        owned(self.emergent_events)
    }

    /// Every table paired with its name, for linting.
    pub fn tables(&self) -> [(&'static str, &'static [&'static str]); 15] {
        [
            ("gh_voyages", self.gh_voyages),
            ("oos_voyages", self.oos_voyages),
            ("ma_voyages", self.ma_voyages),
            ("hc_voyages", self.hc_voyages),
            ("af_voyages", self.af_voyages),
            ("rb_voyages", self.rb_voyages),
            ("world_events", self.world_events),
            ("sunken_kingdom", self.sunken_kingdom),
            ("base_factions", self.base_factions),
            ("pvp_factions", self.pvp_factions),
            ("raids", self.raids),
            ("hg_factions", self.hg_factions),
            ("fish", self.fish),
            ("tall_tales", self.tall_tales),
            ("emergent_events", self.emergent_events),
        ]
    }
}
