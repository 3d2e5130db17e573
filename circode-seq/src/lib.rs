//! Nucleotide tuples and circular-code analysis.
//!
//! A *code* is a set of fixed-length tuples over the nucleotide alphabet.
//! This crate provides the tuple data model, the transformations applied to
//! codes, and the tests that decide their combinatorial properties:
//!
//! - **Alphabet** — [`Base`] and [`Acid`]
//! - **Tuples** — [`Tuple`] with acid conversion, reverse complement, ordering
//! - **Text** — [`split_tuples`], [`slice_tuples`], [`join_tuples`]
//! - **Substitutions** — [`BaseMap`] and the named [`Substitution`] catalog
//! - **Transformations** — [`CyclicShift`], [`CommonSubstitution`]
//! - **Tests** — [`DuplicateFree`], [`Circular`], [`SelfComplementary`], [`InvariantTo`]
//! - **Compounds** — amino-acid lookup for display
//!
//! # Example
//!
//! ```
//! use circode_seq::{is_circular, is_self_complementary, split_tuples, Tuple};
//! use circode_core::CollectingSink;
//!
//! let code: Vec<Tuple> = split_tuples("AAC, GUU").into_iter().flatten().collect();
//! let sink = CollectingSink::new();
//!
//! assert!(is_circular(&code, 2, &sink));
//! assert!(is_self_complementary(&code, &sink));
//!
//! // every rotation of AAA is AAA itself
//! let periodic = vec!["AAA".parse::<Tuple>().unwrap()];
//! assert!(!is_circular(&periodic, 1, &sink));
//! assert_eq!(sink.lines().len(), 1);
//! ```

pub mod alphabet;
pub mod combinatorics;
pub mod compound;
pub mod property;
pub mod substitution;
pub mod text;
pub mod transform;
pub mod tuple;

pub use alphabet::{Acid, Base};
pub use compound::Compound;
pub use substitution::{
    catalog, catalog_group, klein_group, BaseMap, Substitution, SubstitutionGroup,
};
pub use tuple::{all_tuples, tuples_acid, tuples_length, uniform_acid, AcidUsage, Tuple};

pub use text::{join_tuples, normalize_tuple_text, slice_tuples, split_tuples};

pub use transform::{
    common_substitution, shift_sequence, CommonSubstitution, CyclicShift, Transformation,
};

pub use property::{
    is_circular, is_duplicate_free, is_invariant, is_self_complementary, Circular, CodeTest,
    DuplicateFree, InvariantTo, SelfComplementary,
};
