//! Nucleotide alphabet: bases and the two nucleic acids.
//!
//! [`Base`] is ordered by its one-letter symbol (`A < C < G < T < U`). An
//! [`Acid`] fixes a four-letter alphabet; RNA and DNA share `A`, `C`, `G`
//! and differ only in uracil versus thymine.

use std::fmt;

use crate::substitution::BaseMap;

/// A single nucleotide base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Base {
    Adenine = 0,
    Cytosine = 1,
    Guanine = 2,
    Thymine = 3,
    Uracil = 4,
}

impl Base {
    /// Every base, in symbol order.
    pub const ALL: [Base; 5] = [
        Base::Adenine,
        Base::Cytosine,
        Base::Guanine,
        Base::Thymine,
        Base::Uracil,
    ];

    /// One-letter canonical symbol (uppercase).
    pub const fn symbol(self) -> char {
        match self {
            Base::Adenine => 'A',
            Base::Cytosine => 'C',
            Base::Guanine => 'G',
            Base::Thymine => 'T',
            Base::Uracil => 'U',
        }
    }

    /// Parse a one-letter symbol, case-insensitively.
    pub const fn from_symbol(c: char) -> Option<Base> {
        match c.to_ascii_uppercase() {
            'A' => Some(Base::Adenine),
            'C' => Some(Base::Cytosine),
            'G' => Some(Base::Guanine),
            'T' => Some(Base::Thymine),
            'U' => Some(Base::Uracil),
            _ => None,
        }
    }

    /// Dense index in `[0, 5)`, used by fixed-size lookup tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Base::Adenine => "Adenine",
            Base::Cytosine => "Cytosine",
            Base::Guanine => "Guanine",
            Base::Thymine => "Thymine",
            Base::Uracil => "Uracil",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Nucleic acid kind.
///
/// RNA is the default, matching the acid assumed for tuples that hold
/// neither uracil nor thymine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acid {
    #[default]
    Rna,
    Dna,
}

impl Acid {
    /// The acid's four-letter alphabet, in symbol order.
    pub const fn bases(self) -> [Base; 4] {
        match self {
            Acid::Rna => [Base::Adenine, Base::Cytosine, Base::Guanine, Base::Uracil],
            Acid::Dna => [Base::Adenine, Base::Cytosine, Base::Guanine, Base::Thymine],
        }
    }

    /// Map that normalizes any base into this acid's alphabet
    /// (T→U for RNA, U→T for DNA, everything else unchanged).
    pub const fn substitution(self) -> BaseMap {
        match self {
            Acid::Rna => BaseMap::IDENTITY.with(Base::Thymine, Base::Uracil),
            Acid::Dna => BaseMap::IDENTITY.with(Base::Uracil, Base::Thymine),
        }
    }

    /// Whether `base` belongs to this acid's alphabet.
    pub fn contains(self, base: Base) -> bool {
        self.bases().contains(&base)
    }

    /// The other acid.
    pub const fn other(self) -> Acid {
        match self {
            Acid::Rna => Acid::Dna,
            Acid::Dna => Acid::Rna,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Acid::Rna => "RNA",
            Acid::Dna => "DNA",
        }
    }
}

impl fmt::Display for Acid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
