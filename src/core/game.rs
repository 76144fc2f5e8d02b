/// The contract a game module exposes to the host.
use crate::core::template::TemplateDefinition;
use crate::schema::options::{OptionToggle, ToggleSet};
use crate::schema::platform::GameMetadata;

/// A game that can supply objective templates.
///
/// Implementations hold no mutable state: `objective_templates` is a pure
/// function of the option set and the game's static catalog, and it never
/// invokes a value producer.
pub trait Game {
    /// The game's flat option struct. `Default` must leave every toggle off.
    type Options: ToggleSet + Default;

    /// Display metadata read by the host at load time.
    fn metadata(&self) -> GameMetadata;

    /// The option schema surfaced in the host's configuration UI.
    fn option_schema(&self) -> &'static [OptionToggle] {
        <Self::Options as ToggleSet>::schema()
    }

    /// Assemble the ordered template list for the given options.
    fn objective_templates(&self, options: &Self::Options) -> Vec<TemplateDefinition>;
}
