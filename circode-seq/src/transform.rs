//! Transformations: pure functions from a tuple sequence to a new one.
//!
//! - [`CyclicShift`] — rotate the concatenated bases, re-cut at the original
//!   tuple boundaries
//! - [`CommonSubstitution`] — remap every base through a catalog entry

use std::borrow::Borrow;

use crate::alphabet::Acid;
use crate::substitution::Substitution;
use crate::tuple::{tuples_acid, AcidUsage, Tuple};

/// A pure transformation of an ordered tuple sequence.
///
/// Implementations never mutate their input and always return a freshly
/// allocated sequence of the same length.
pub trait Transformation {
    /// Human-readable name.
    fn name(&self) -> String;

    fn transform(&self, tuples: &[Tuple]) -> Vec<Tuple>;
}

/// Rotate the concatenation of `tuples` left by `shift` bases and cut the
/// result back into pieces of the original per-position lengths.
///
/// The shift is reduced modulo the total base count (negative values rotate
/// right); a sequence without bases is returned unchanged.
pub fn shift_sequence<T: Borrow<Tuple>>(tuples: &[T], shift: isize) -> Vec<Tuple> {
    let mut bases: Vec<_> = tuples
        .iter()
        .flat_map(|t| t.borrow().bases().iter().copied())
        .collect();
    if !bases.is_empty() {
        let k = shift.rem_euclid(bases.len() as isize) as usize;
        bases.rotate_left(k);
    }
    let mut rest = bases.as_slice();
    tuples
        .iter()
        .map(|t| {
            let (head, tail) = rest.split_at(t.borrow().len());
            rest = tail;
            Tuple::from(head)
        })
        .collect()
}

/// Remap every tuple through the named catalog entry. An unknown name
/// leaves the sequence unchanged.
pub fn common_substitution(tuples: &[Tuple], name: &str) -> Vec<Tuple> {
    match Substitution::find(name) {
        Some(substitution) => substitute(tuples, substitution),
        None => tuples.to_vec(),
    }
}

/// Remap every tuple through `substitution`.
///
/// Images are written in the common acid of the sequence, so A/C/G-only
/// tuples of a DNA code map into DNA too. A sequence mixing acids keeps
/// each DNA tuple DNA.
pub fn substitute(tuples: &[Tuple], substitution: &Substitution) -> Vec<Tuple> {
    let common = tuples_acid(tuples);
    tuples
        .iter()
        .map(|tuple| {
            let mapped = tuple.map(substitution.map());
            match (common, tuple.acid()) {
                (Some(acid), _) => mapped.to_acid(acid),
                (None, AcidUsage::Pure(Acid::Dna)) => mapped.to_acid(Acid::Dna),
                (None, _) => mapped,
            }
        })
        .collect()
}

/// Cyclic shift by a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicShift {
    pub shift: isize,
}

impl CyclicShift {
    pub fn new(shift: isize) -> Self {
        Self { shift }
    }
}

impl Default for CyclicShift {
    fn default() -> Self {
        Self { shift: 1 }
    }
}

impl Transformation for CyclicShift {
    fn name(&self) -> String {
        format!("shift by {}", self.shift)
    }

    fn transform(&self, tuples: &[Tuple]) -> Vec<Tuple> {
        shift_sequence(tuples, self.shift)
    }
}

/// Substitution by catalog name; unknown names transform to the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonSubstitution {
    pub name: String,
}

impl CommonSubstitution {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Transformation for CommonSubstitution {
    fn name(&self) -> String {
        format!("common substitution {}", self.name)
    }

    fn transform(&self, tuples: &[Tuple]) -> Vec<Tuple> {
        common_substitution(tuples, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Vec<Tuple> {
        s.split_whitespace().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn shift_single_tuple() {
        assert_eq!(shift_sequence(&code("AAC"), 1), code("ACA"));
        assert_eq!(shift_sequence(&code("AAC"), 0), code("AAC"));
        assert_eq!(shift_sequence(&code("AAC"), 4), code("ACA"));
        assert_eq!(shift_sequence(&code("AAC"), -1), code("CAA"));
    }

    #[test]
    fn shift_crosses_tuple_boundaries() {
        assert_eq!(shift_sequence(&code("ACG UUA"), 1), code("CGU UAA"));
        assert_eq!(shift_sequence(&code("ACG UUA"), 3), code("UUA ACG"));
    }

    #[test]
    fn shift_keeps_original_lengths() {
        // AC GUU → rotate "ACGUU" by 1 → "CGUUA" → CG UUA
        assert_eq!(shift_sequence(&code("AC GUU"), 1), code("CG UUA"));
        let shifted = shift_sequence(&code("A CC GGG"), 2);
        let lengths: Vec<_> = shifted.iter().map(Tuple::len).collect();
        assert_eq!(lengths, vec![1, 2, 3]);
        assert_eq!(shifted, code("C GG GAC"));
    }

    #[test]
    fn shift_by_reference() {
        let tuples = code("ACG UUA");
        let permuted = vec![&tuples[1], &tuples[0]];
        assert_eq!(shift_sequence(&permuted, 1), code("UAA CGU"));
    }

    #[test]
    fn shift_empty_input() {
        assert!(shift_sequence::<Tuple>(&[], 3).is_empty());
        let empties = vec![Tuple::default(), Tuple::default()];
        assert_eq!(shift_sequence(&empties, 1), empties);
    }

    #[test]
    fn named_substitution() {
        assert_eq!(common_substitution(&code("AAC GUU"), "c"), code("UUG CAA"));
        assert_eq!(common_substitution(&code("ACGU"), "πAC"), code("CAGU"));
        assert_eq!(common_substitution(&code("ACGU"), "piAC"), code("CAGU"));
    }

    #[test]
    fn substitution_keeps_dna() {
        assert_eq!(common_substitution(&code("AAT"), "c"), code("TTA"));
        assert_eq!(common_substitution(&code("ACG"), "c"), code("UGC"));
    }

    #[test]
    fn substitution_follows_code_acid() {
        // ACG carries no T but belongs to a DNA code
        assert_eq!(
            common_substitution(&code("AAT ACG"), "c"),
            code("TTA TGC")
        );
        assert_eq!(common_substitution(&code("ACG TGC"), "c"), code("TGC ACG"));
        // mixed acids: only the DNA tuple stays DNA
        assert_eq!(
            common_substitution(&code("AAT AAU ACG"), "c"),
            code("TTA UUA UGC")
        );
    }

    #[test]
    fn unknown_substitution_is_identity() {
        let tuples = code("AAC GUU");
        assert_eq!(common_substitution(&tuples, "bogus"), tuples);
    }

    #[test]
    fn transformation_trait_objects() {
        let ops: Vec<Box<dyn Transformation>> = vec![
            Box::new(CyclicShift::default()),
            Box::new(CommonSubstitution::new("id")),
        ];
        let tuples = code("AAC");
        assert_eq!(ops[0].transform(&tuples), code("ACA"));
        assert_eq!(ops[1].transform(&tuples), tuples);
        assert_eq!(ops[0].name(), "shift by 1");
        assert_eq!(ops[1].name(), "common substitution id");
    }
}
