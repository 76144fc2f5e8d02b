//! Sea of Thieves objective templates.
//!
//! Fifteen templates are always available. Five option groups append more,
//! always in the order PvP, fishing, tall tales, emergent events, social.

pub mod catalog;
pub mod options;

use tracing::debug;

use crate::core::game::Game;
use crate::core::producer::ValueProducer;
use crate::core::template::TemplateDefinition;
use crate::schema::options::ToggleSet;
use crate::schema::platform::{GameMetadata, Platform};

use catalog::{Catalog, CATALOG};
pub use options::SeaOfThievesOptions;

/// The Sea of Thieves game module.
#[derive(Debug, Clone, Copy)]
pub struct SeaOfThievesGame {
    catalog: &'static Catalog,
}

impl Default for SeaOfThievesGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SeaOfThievesGame {
    pub fn new() -> Self {
        Self { catalog: &CATALOG }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    fn base_templates(&self, options: &SeaOfThievesOptions) -> Vec<TemplateDefinition> {
        let c = self.catalog;
        vec![
            // Standard voyages per faction
            TemplateDefinition::new("Complete a Gold Hoarder GH_VOYAGE voyage")
                .bind("GH_VOYAGE", ValueProducer::Catalog(c.gh_voyages()))
                .weight(3),
            TemplateDefinition::new("Complete an Order of Souls OOS_VOYAGE voyage")
                .bind("OOS_VOYAGE", ValueProducer::Catalog(c.oos_voyages()))
                .weight(3),
            TemplateDefinition::new("Complete a Merchant Alliance MA_VOYAGE voyage")
                .bind("MA_VOYAGE", ValueProducer::Catalog(c.ma_voyages()))
                .weight(3),
            TemplateDefinition::new("Complete a Hunter's Call HC_VOYAGE voyage")
                .bind("HC_VOYAGE", ValueProducer::Catalog(c.hc_voyages()))
                .weight(3),
            TemplateDefinition::new("Complete an Athena's Fortune AF_VOYAGE voyage")
                .bind("AF_VOYAGE", ValueProducer::Catalog(c.af_voyages()))
                .time_consuming(true)
                .weight(3),
            // Raids
            TemplateDefinition::new("Complete a(n) FACTION RAID raid voyage")
                .bind("FACTION", ValueProducer::Catalog(c.pve_factions()))
                .bind("RAID", ValueProducer::Catalog(c.raids()))
                .weight(3),
            // Emissary
            TemplateDefinition::new("Reach Emissary Rank 5 as FACTION")
                .bind(
                    "FACTION",
                    ValueProducer::Catalog(c.factions(options.include_pvp)),
                )
                .weight(2),
            // World events
            TemplateDefinition::new("Complete INT world events")
                .bind("INT", ValueProducer::range(2, 5))
                .weight(3),
            TemplateDefinition::new("Complete a(n) WORLD_EVENT world event")
                .bind("WORLD_EVENT", ValueProducer::Catalog(c.world_events()))
                .weight(3),
            TemplateDefinition::new("Complete a Message in a Bottle voyage").weight(3),
            TemplateDefinition::new("Complete the SUNKEN_KINGDOM")
                .bind("SUNKEN_KINGDOM", ValueProducer::Catalog(c.sunken_kingdom()))
                .weight(3),
            TemplateDefinition::new("Plunder a Sanctuary of the Banished in the Devil's Roar")
                .weight(3),
            TemplateDefinition::new("Earn INT gold from a single turn-in")
                .bind("INT", ValueProducer::stepped(100_000, 1_000_000, 100_000))
                .difficult(true)
                .weight(3),
            TemplateDefinition::new("Complete and successfully plunder the Fort of the Damned")
                .difficult(true)
                .weight(3),
            TemplateDefinition::new("Successfully complete a Smuggler's Run voyage").weight(3),
        ]
    }

    fn pvp_templates(&self) -> Vec<TemplateDefinition> {
        let c = self.catalog;
        vec![
            // Hourglass
            TemplateDefinition::new("Win INT hourglass matches as the HG_FACTION")
                .bind("INT", ValueProducer::range(2, 5))
                .bind("HG_FACTION", ValueProducer::Catalog(c.hg_factions()))
                .weight(3),
            TemplateDefinition::new("Send INT enemy pirates to the Ferry of the Damned")
                .bind("INT", ValueProducer::range(4, 10))
                .weight(3),
            // World PvP
            TemplateDefinition::new("Sink INT ships outside of Hourglass matches")
                .bind("INT", ValueProducer::range(2, 5))
                .weight(3),
            TemplateDefinition::new("Complete a Reaper's Bones RB_VOYAGE voyage")
                .bind("RB_VOYAGE", ValueProducer::Catalog(c.rb_voyages()))
                .weight(3),
            TemplateDefinition::new("Sell a Skull of Siren Song").weight(3),
            TemplateDefinition::new("Sell a Reaper's Chest or Reaper's Bounty").weight(3),
        ]
    }

    fn fishing_templates(&self) -> Vec<TemplateDefinition> {
        vec![
            TemplateDefinition::new("Catch and sell a FISH")
                .bind("FISH", ValueProducer::Catalog(self.catalog.fish()))
                .weight(3),
            TemplateDefinition::new("Make INT gold selling fish")
                .bind("INT", ValueProducer::stepped(5_000, 50_000, 5_000))
                .weight(3),
        ]
    }

    fn tall_tale_templates(&self) -> Vec<TemplateDefinition> {
        vec![TemplateDefinition::new("Complete the TALL_TALE Tall Tale")
            .bind("TALL_TALE", ValueProducer::Catalog(self.catalog.tall_tales()))
            .weight(3)]
    }

    fn emergent_event_templates(&self) -> Vec<TemplateDefinition> {
        vec![TemplateDefinition::new("Defeat a EMERGENT_EVENT")
            .bind(
                "EMERGENT_EVENT",
                ValueProducer::Catalog(self.catalog.emergent_events()),
            )
            .weight(3)]
    }

    fn social_templates(&self) -> Vec<TemplateDefinition> {
        vec![
            TemplateDefinition::new("Make a new friend").weight(3),
            TemplateDefinition::new("Ride on another crew's ship for INT minutes")
                .bind("INT", ValueProducer::range(5, 15))
                .weight(3),
            TemplateDefinition::new("Form an alliance with INT other ships")
                .bind("INT", ValueProducer::range(1, 3))
                .weight(3),
        ]
    }
}

impl Game for SeaOfThievesGame {
    type Options = SeaOfThievesOptions;

    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Sea of Thieves".to_string(),
            platform: Platform::Pc,
            platforms_other: vec![Platform::XboxOne, Platform::XboxSeriesXs, Platform::Ps5],
            is_adult_only_or_unrated: false,
        }
    }

    fn objective_templates(&self, options: &SeaOfThievesOptions) -> Vec<TemplateDefinition> {
        let mut templates = self.base_templates(options);

        if options.include_pvp {
            templates.extend(self.pvp_templates());
        }
        if options.include_fishing {
            templates.extend(self.fishing_templates());
        }
        if options.include_tall_tales {
            templates.extend(self.tall_tale_templates());
        }
        if options.include_emergent_events {
            templates.extend(self.emergent_event_templates());
        }
        if options.include_social {
            templates.extend(self.social_templates());
        }

        debug!(
            count = templates.len(),
            groups = ?options.enabled_keys(),
            "assembled Sea of Thieves objective templates"
        );
        templates
    }
}
