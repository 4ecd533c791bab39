//! Character primitives shared by the lexicon crates.
//!
//! - [`character`] -- letter ordinals used by DAWG edges, simple case mapping
//! - [`case`] -- whole-word case folding

pub mod case;
pub mod character;
