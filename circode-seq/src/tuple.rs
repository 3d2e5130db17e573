//! Immutable nucleotide tuples.
//!
//! A [`Tuple`] is a fixed sequence of [`Base`]s; its canonical string is the
//! concatenation of the base symbols, so equality and hashing by bases and
//! by string coincide. Tuples are never mutated: every operation returns a
//! fresh tuple.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use circode_core::{CircodeError, Result};

use crate::alphabet::{Acid, Base};
use crate::compound::{self, Compound};
use crate::substitution::BaseMap;

/// An ordered, immutable word over the nucleotide alphabet.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Tuple {
    bases: Box<[Base]>,
}

/// Which acid a single tuple's bases commit it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcidUsage {
    /// Only A, C, G: valid in either acid.
    Neutral,
    /// Holds uracil (RNA) or thymine (DNA), not both.
    Pure(Acid),
    /// Holds both uracil and thymine.
    Mixed,
}

impl Tuple {
    pub fn new(bases: impl Into<Box<[Base]>>) -> Self {
        Self {
            bases: bases.into(),
        }
    }

    /// Parse a token, returning `None` when it holds anything but bases.
    pub fn parse(text: &str) -> Option<Tuple> {
        text.parse().ok()
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Remap every base through `map`.
    pub fn map(&self, map: &BaseMap) -> Tuple {
        self.bases.iter().map(|&b| map.get(b)).collect()
    }

    /// Normalize to `acid` (T→U for RNA, U→T for DNA).
    pub fn to_acid(&self, acid: Acid) -> Tuple {
        self.map(&acid.substitution())
    }

    /// Reverse Watson-Crick complement, normalized to `acid`.
    pub fn complement(&self, acid: Acid) -> Tuple {
        let pairing = BaseMap::COMPLEMENT.then(&acid.substitution());
        self.bases.iter().rev().map(|&b| pairing.get(b)).collect()
    }

    /// Cyclic left rotation by `shift` positions (negative rotates right).
    pub fn rotated(&self, shift: isize) -> Tuple {
        if self.bases.is_empty() {
            return self.clone();
        }
        let k = shift.rem_euclid(self.bases.len() as isize) as usize;
        let mut bases = self.bases.to_vec();
        bases.rotate_left(k);
        Tuple::new(bases)
    }

    /// Which acid this tuple commits to.
    pub fn acid(&self) -> AcidUsage {
        let uracil = self.bases.contains(&Base::Uracil);
        let thymine = self.bases.contains(&Base::Thymine);
        match (uracil, thymine) {
            (false, false) => AcidUsage::Neutral,
            (true, false) => AcidUsage::Pure(Acid::Rna),
            (false, true) => AcidUsage::Pure(Acid::Dna),
            (true, true) => AcidUsage::Mixed,
        }
    }

    /// Amino acid encoded by this tuple in the standard genetic code.
    pub fn compound(&self) -> Option<Compound> {
        Compound::for_tuple(self)
    }

    /// `"AUG (Methionine)"`, `"UAA (Stop)"`, or `"AC (Unknown)"`.
    pub fn display_with_compound(&self) -> String {
        let label = match self.compound() {
            Some(compound) => compound.name(),
            None if compound::is_stop(self) => "Stop",
            None => "Unknown",
        };
        format!("{self} ({label})")
    }
}

impl FromStr for Tuple {
    type Err = CircodeError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(i, c)| {
                Base::from_symbol(c).ok_or_else(|| {
                    CircodeError::Parse(format!(
                        "invalid base '{}' at position {} in {:?}",
                        c, i, s
                    ))
                })
            })
            .collect()
    }
}

impl FromIterator<Base> for Tuple {
    fn from_iter<I: IntoIterator<Item = Base>>(iter: I) -> Self {
        Tuple::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl From<&[Base]> for Tuple {
    fn from(bases: &[Base]) -> Self {
        Tuple::new(bases)
    }
}

impl AsRef<[Base]> for Tuple {
    fn as_ref(&self) -> &[Base] {
        &self.bases
    }
}

/// Positions are compared left to right. If `other` runs out first, `self`
/// is greater; if `self` runs out first with every position tied, `self` is
/// less.
impl Ord for Tuple {
    fn cmp(&self, other: &Self) -> Ordering {
        for (i, base) in self.bases.iter().enumerate() {
            let Some(theirs) = other.bases.get(i) else {
                return Ordering::Greater;
            };
            match base.cmp(theirs) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        if self.bases.len() == other.bases.len() {
            Ordering::Equal
        } else {
            Ordering::Less
        }
    }
}

impl PartialOrd for Tuple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in self.bases.iter() {
            write!(f, "{}", base.symbol())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tuple(\"{}\")", self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Tuple {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tuple {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Whole-code helpers
// ---------------------------------------------------------------------------

/// Common length of every tuple, or `None` if the lengths differ or the
/// code is empty.
pub fn tuples_length(code: &[Tuple]) -> Option<usize> {
    let (first, rest) = code.split_first()?;
    rest.iter()
        .all(|t| t.len() == first.len())
        .then_some(first.len())
}

/// Common acid of every tuple, or `None` if the code mixes acids or is empty.
///
/// Neutral tuples agree with either acid; a code of only neutral tuples
/// resolves to [`Acid::Rna`].
pub fn tuples_acid(code: &[Tuple]) -> Option<Acid> {
    if code.is_empty() {
        return None;
    }
    let mut common: Option<Acid> = None;
    for tuple in code {
        match tuple.acid() {
            AcidUsage::Neutral => {}
            AcidUsage::Mixed => return None,
            AcidUsage::Pure(acid) => match common {
                None => common = Some(acid),
                Some(seen) if seen != acid => return None,
                Some(_) => {}
            },
        }
    }
    Some(common.unwrap_or_default())
}

/// Normalize every tuple to `acid`, preserving order.
pub fn uniform_acid(tuples: &[Tuple], acid: Acid) -> Vec<Tuple> {
    tuples.iter().map(|t| t.to_acid(acid)).collect()
}

/// Every tuple of `length` over the alphabet of `acid`, in lexicographic
/// base order (`AAA, AAC, ..., UUU` for RNA codons).
///
/// Returns `None` when the `4^length` tuples cannot be counted in a `usize`.
pub fn all_tuples(acid: Acid, length: usize) -> Option<Vec<Tuple>> {
    let alphabet = acid.bases();
    let total = u32::try_from(length)
        .ok()
        .and_then(|exp| alphabet.len().checked_pow(exp))?;
    let tuples = (0..total)
        .map(|mut index| {
            let mut bases = vec![Base::Adenine; length];
            for slot in bases.iter_mut().rev() {
                *slot = alphabet[index % alphabet.len()];
                index /= alphabet.len();
            }
            Tuple::new(bases)
        })
        .collect();
    Some(tuples)
}
