/// Objective materialisation — turning a chosen template into player-facing text.
///
/// Producers are invoked here and nowhere else, so a template list can be
/// built, cloned, and inspected without drawing any randomness.
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::template::{LabelSegment, TemplateDefinition, TemplateError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjectiveError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("no binding for placeholder {0}")]
    MissingBinding(String),
    #[error("producer for {0} yielded fewer values than its arity")]
    NoValue(String),
}

/// A concrete objective with every placeholder substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub text: String,
    pub template_label: String,
    pub is_time_consuming: bool,
    pub is_difficult: bool,
}

impl TemplateDefinition {
    /// Produce a concrete objective from this template.
    ///
    /// Each distinct placeholder is resolved once, so a token repeated in
    /// the label receives the same value everywhere. Bindings with an arity
    /// above 1 draw that many distinct values joined by ", ".
    pub fn materialize<R: Rng>(&self, rng: &mut R) -> Result<Objective, ObjectiveError> {
        let label = self.parsed_label()?;
        let mut resolved: FxHashMap<&str, String> = FxHashMap::default();

        for token in label.placeholders() {
            let binding = self
                .bindings
                .get(token)
                .ok_or_else(|| ObjectiveError::MissingBinding(token.to_string()))?;
            if binding.arity == 0 {
                return Err(TemplateError::ZeroArity(token.to_string()).into());
            }
            let arity = binding.arity as usize;
            let values = binding.producer.pick(arity, rng)?;
            if values.len() < arity {
                return Err(ObjectiveError::NoValue(token.to_string()));
            }
            resolved.insert(token, values.join(", "));
        }

        let mut text = String::with_capacity(self.label.len());
        for segment in &label.segments {
            match segment {
                LabelSegment::Literal(s) => text.push_str(s),
                LabelSegment::Placeholder(token) => {
                    if let Some(value) = resolved.get(token.as_str()) {
                        text.push_str(value);
                    }
                }
            }
        }

        Ok(Objective {
            text,
            template_label: self.label.clone(),
            is_time_consuming: self.is_time_consuming,
            is_difficult: self.is_difficult,
        })
    }
}
