//! Objective Engine — template-driven objective catalogs for randomizer games.
//!
//! A game module returns an ordered list of objective templates for a set of
//! player toggles. Templates carry placeholder bindings that are only
//! resolved when a concrete objective is materialised, so assembling a list
//! never consumes randomness.

pub mod core;
pub mod games;
pub mod schema;
