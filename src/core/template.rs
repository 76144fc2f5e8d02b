/// Objective templates — label parsing, bindings, and validation.
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::core::producer::ValueProducer;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("label parse error: {0}")]
    LabelParse(String),
    #[error("label '{label}' uses placeholder {token} with no binding")]
    MissingBinding { label: String, token: String },
    #[error("producer for {0} yields no values")]
    EmptyProducer(String),
    #[error("invalid range {min}..={max} (step {step})")]
    InvalidRange { min: i64, max: i64, step: i64 },
    #[error("template '{0}' has zero weight")]
    ZeroWeight(String),
    #[error("binding for {0} draws zero values")]
    ZeroArity(String),
}

/// A segment of a parsed label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// Placeholder token to be substituted: `GH_VOYAGE`, `INT`.
    Placeholder(String),
}

/// A parsed label — a sequence of segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub segments: Vec<LabelSegment>,
}

impl Label {
    /// Parse a label into literal and placeholder segments.
    ///
    /// A placeholder is a whole word of at least two characters made only
    /// of uppercase ASCII letters, digits, and underscores, starting with a
    /// letter. Words are delimited by anything that is not alphanumeric or
    /// `_`, so `a(n)` and `Hunter's` stay literal.
    pub fn parse(input: &str) -> Result<Label, TemplateError> {
        if input.trim().is_empty() {
            return Err(TemplateError::LabelParse("empty label".to_string()));
        }

        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let mut word = String::new();

        for c in input.chars() {
            if c.is_alphanumeric() || c == '_' {
                word.push(c);
                continue;
            }
            Self::flush_word(&mut word, &mut literal_buf, &mut segments);
            literal_buf.push(c);
        }
        Self::flush_word(&mut word, &mut literal_buf, &mut segments);

        if !literal_buf.is_empty() {
            segments.push(LabelSegment::Literal(literal_buf));
        }

        Ok(Label { segments })
    }

    fn flush_word(word: &mut String, literal_buf: &mut String, segments: &mut Vec<LabelSegment>) {
        if word.is_empty() {
            return;
        }
        if is_placeholder(word) {
            if !literal_buf.is_empty() {
                segments.push(LabelSegment::Literal(std::mem::take(literal_buf)));
            }
            segments.push(LabelSegment::Placeholder(std::mem::take(word)));
        } else {
            literal_buf.push_str(word);
            word.clear();
        }
    }

    /// Placeholder tokens in order of first appearance, without duplicates.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let LabelSegment::Placeholder(token) = segment {
                if !tokens.contains(&token.as_str()) {
                    tokens.push(token);
                }
            }
        }
        tokens
    }
}

fn is_placeholder(word: &str) -> bool {
    let mut chars = word.chars();
    let starts_upper = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    starts_upper
        && word.len() >= 2
        && word
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// A placeholder binding: where values come from and how many to draw.
///
/// Every template in the shipped catalogs uses an arity of 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub producer: ValueProducer,
    pub arity: u32,
}

/// One parametrizable objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    pub label: String,
    pub bindings: FxHashMap<String, Binding>,
    pub is_time_consuming: bool,
    pub is_difficult: bool,
    pub weight: u32,
}

/// Outcome of checking a single template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCheck {
    pub errors: Vec<TemplateError>,
    pub warnings: Vec<String>,
}

impl TemplateCheck {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl TemplateDefinition {
    /// Start a template with no bindings, not time consuming, not
    /// difficult, weight 1.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            bindings: FxHashMap::default(),
            is_time_consuming: false,
            is_difficult: false,
            weight: 1,
        }
    }

    /// Bind a placeholder token with arity 1.
    pub fn bind(self, token: &str, producer: ValueProducer) -> Self {
        self.bind_many(token, producer, 1)
    }

    pub fn bind_many(mut self, token: &str, producer: ValueProducer, arity: u32) -> Self {
        self.bindings
            .insert(token.to_string(), Binding { producer, arity });
        self
    }

    pub fn time_consuming(mut self, value: bool) -> Self {
        self.is_time_consuming = value;
        self
    }

    pub fn difficult(mut self, value: bool) -> Self {
        self.is_difficult = value;
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn parsed_label(&self) -> Result<Label, TemplateError> {
        Label::parse(&self.label)
    }

    /// Binding tokens in sorted order, for stable display.
    pub fn binding_tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }

    /// Collect every problem with this template.
    ///
    /// Placeholders without a binding, empty producers, invalid ranges,
    /// zero arity, and zero weight are errors. Bindings whose token never appears in
    /// the label are warnings.
    pub fn check(&self) -> TemplateCheck {
        let mut report = TemplateCheck::default();

        let label = match self.parsed_label() {
            Ok(label) => label,
            Err(e) => {
                report.errors.push(e);
                return report;
            }
        };
        let placeholders = label.placeholders();

        for token in &placeholders {
            if !self.bindings.contains_key(*token) {
                report.errors.push(TemplateError::MissingBinding {
                    label: self.label.clone(),
                    token: token.to_string(),
                });
            }
        }

        for token in self.binding_tokens() {
            if !placeholders.contains(&token) {
                let message = format!(
                    "Template '{}' binds {} which does not appear in its label",
                    self.label, token
                );
                warn!("{}", message);
                report.warnings.push(message);
            }
            let binding = &self.bindings[token];
            if binding.arity == 0 {
                report.errors.push(TemplateError::ZeroArity(token.to_string()));
            }
            if let Err(e) = binding.producer.validate(token) {
                report.errors.push(e);
            }
        }

        if self.weight == 0 {
            report.errors.push(TemplateError::ZeroWeight(self.label.clone()));
        }

        report
    }

    /// Validate the template, returning the first error found.
    pub fn validate(&self) -> Result<(), TemplateError> {
        match self.check().errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_literal_only() {
        let l = Label::parse("Make a new friend").unwrap();
        assert_eq!(
            l.segments,
            vec![LabelSegment::Literal("Make a new friend".to_string())]
        );
        assert!(l.placeholders().is_empty());
    }

    #[test]
    fn parse_single_placeholder() {
        let l = Label::parse("Complete a Gold Hoarder GH_VOYAGE voyage").unwrap();
        assert_eq!(l.segments.len(), 3);
        assert_eq!(
            l.segments[1],
            LabelSegment::Placeholder("GH_VOYAGE".to_string())
        );
        assert_eq!(
            l.segments[2],
            LabelSegment::Literal(" voyage".to_string())
        );
    }

    #[test]
    fn parse_adjacent_placeholders() {
        let l = Label::parse("Complete a(n) FACTION RAID raid voyage").unwrap();
        assert_eq!(l.placeholders(), vec!["FACTION", "RAID"]);
    }

    #[test]
    fn parse_placeholder_at_end() {
        let l = Label::parse("Reach Emissary Rank 5 as FACTION").unwrap();
        assert_eq!(
            l.segments.last(),
            Some(&LabelSegment::Placeholder("FACTION".to_string()))
        );
    }

    #[test]
    fn mixed_case_words_stay_literal() {
        let l = Label::parse("Complete a Hunter's Call HC_VOYAGE voyage").unwrap();
        assert_eq!(l.placeholders(), vec!["HC_VOYAGE"]);
        assert_eq!(
            l.segments[0],
            LabelSegment::Literal("Complete a Hunter's Call ".to_string())
        );
    }

    #[test]
    fn single_capital_is_not_a_placeholder() {
        let l = Label::parse("A Pirate's Life").unwrap();
        assert!(l.placeholders().is_empty());
    }

    #[test]
    fn repeated_placeholder_listed_once() {
        let l = Label::parse("Sell INT fish, then INT more").unwrap();
        assert_eq!(l.placeholders(), vec!["INT"]);
        assert_eq!(l.segments.len(), 5);
    }

    #[test]
    fn parse_empty_label_error() {
        assert!(Label::parse("").is_err());
        assert!(Label::parse("   ").is_err());
    }

    #[test]
    fn builder_defaults() {
        let t = TemplateDefinition::new("Make a new friend");
        assert!(t.bindings.is_empty());
        assert!(!t.is_time_consuming);
        assert!(!t.is_difficult);
        assert_eq!(t.weight, 1);
    }

    #[test]
    fn valid_template_passes() {
        let t = TemplateDefinition::new("Complete INT world events")
            .bind("INT", ValueProducer::range(2, 5))
            .weight(3);
        assert!(t.validate().is_ok());
        assert!(t.check().warnings.is_empty());
        assert_eq!(t.bindings["INT"].arity, 1);
    }

    #[test]
    fn missing_binding_is_error() {
        let t = TemplateDefinition::new("Catch and sell a FISH").weight(3);
        assert_eq!(
            t.validate(),
            Err(TemplateError::MissingBinding {
                label: "Catch and sell a FISH".to_string(),
                token: "FISH".to_string(),
            })
        );
    }

    #[test]
    fn unused_binding_is_warning() {
        let t = TemplateDefinition::new("Make a new friend")
            .bind("INT", ValueProducer::range(1, 3));
        let report = t.check();
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("INT"));
    }

    #[test]
    fn zero_weight_and_bad_producer_are_errors() {
        let t = TemplateDefinition::new("Defeat a EMERGENT_EVENT")
            .bind("EMERGENT_EVENT", ValueProducer::Catalog(Vec::new()))
            .weight(0);
        let report = t.check();
        assert_eq!(report.errors.len(), 2);
        assert!(report
            .errors
            .contains(&TemplateError::EmptyProducer("EMERGENT_EVENT".to_string())));
    }

    #[test]
    fn zero_arity_is_error() {
        let t = TemplateDefinition::new("Catch and sell a FISH")
            .bind_many("FISH", ValueProducer::catalog(&["Ruby Splashtail"]), 0);
        assert_eq!(
            t.validate(),
            Err(TemplateError::ZeroArity("FISH".to_string()))
        );
    }

    #[test]
    fn check_report_can_be_cloned() {
        let t = TemplateDefinition::new("Catch and sell a FISH").weight(0);
        let report = t.check();
        let copy = report.clone();
        assert_eq!(copy, report);
        assert_eq!(copy.errors.len(), 2);
    }

    #[test]
    fn ron_round_trip() {
        let t = TemplateDefinition::new("Earn INT gold from a single turn-in")
            .bind("INT", ValueProducer::stepped(100_000, 1_000_000, 100_000))
            .difficult(true)
            .weight(3);

        let serialized = ron::to_string(&t).unwrap();
        let deserialized: TemplateDefinition = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, t);
    }
}
