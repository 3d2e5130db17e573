//! Amino-acid lookup for codons under the standard genetic code.
//!
//! Used only to annotate tuples for display. No code test or
//! transformation consults it.

use std::fmt;

use crate::alphabet::Base;
use crate::tuple::Tuple;

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, T/U=3
// ---------------------------------------------------------------------------

fn base_index(b: Base) -> usize {
    match b {
        Base::Adenine => 0,
        Base::Cytosine => 1,
        Base::Guanine => 2,
        Base::Thymine | Base::Uracil => 3,
    }
}

/// Convert a 3-base tuple to an index in [0, 64).
fn codon_index(tuple: &Tuple) -> Option<usize> {
    match *tuple.bases() {
        [b1, b2, b3] => Some(base_index(b1) * 16 + base_index(b2) * 4 + base_index(b3)),
        _ => None,
    }
}

// Codon order: AAA, AAC, AAG, AAU, ACA, ..., UUU (U and T share a slot).

/// Standard genetic code (NCBI Table 1), one-letter amino acid codes.
const STANDARD: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// AUG
const START_INDEX: usize = 14;

/// One of the twenty standard amino acids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compound {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    GlutamicAcid,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
}

impl Compound {
    /// Amino acid encoded by `tuple`, or `None` for stop codons and tuples
    /// that are not codons.
    pub fn for_tuple(tuple: &Tuple) -> Option<Compound> {
        Compound::from_letter(STANDARD[codon_index(tuple)?])
    }

    /// Parse a one-letter amino acid code.
    pub fn from_letter(letter: u8) -> Option<Compound> {
        use Compound::*;
        Some(match letter.to_ascii_uppercase() {
            b'A' => Alanine,
            b'R' => Arginine,
            b'N' => Asparagine,
            b'D' => AsparticAcid,
            b'C' => Cysteine,
            b'E' => GlutamicAcid,
            b'Q' => Glutamine,
            b'G' => Glycine,
            b'H' => Histidine,
            b'I' => Isoleucine,
            b'L' => Leucine,
            b'K' => Lysine,
            b'M' => Methionine,
            b'F' => Phenylalanine,
            b'P' => Proline,
            b'S' => Serine,
            b'T' => Threonine,
            b'W' => Tryptophan,
            b'Y' => Tyrosine,
            b'V' => Valine,
            _ => return None,
        })
    }

    pub fn letter(self) -> char {
        use Compound::*;
        match self {
            Alanine => 'A',
            Arginine => 'R',
            Asparagine => 'N',
            AsparticAcid => 'D',
            Cysteine => 'C',
            GlutamicAcid => 'E',
            Glutamine => 'Q',
            Glycine => 'G',
            Histidine => 'H',
            Isoleucine => 'I',
            Leucine => 'L',
            Lysine => 'K',
            Methionine => 'M',
            Phenylalanine => 'F',
            Proline => 'P',
            Serine => 'S',
            Threonine => 'T',
            Tryptophan => 'W',
            Tyrosine => 'Y',
            Valine => 'V',
        }
    }

    pub fn name(self) -> &'static str {
        use Compound::*;
        match self {
            Alanine => "Alanine",
            Arginine => "Arginine",
            Asparagine => "Asparagine",
            AsparticAcid => "Aspartic acid",
            Cysteine => "Cysteine",
            GlutamicAcid => "Glutamic acid",
            Glutamine => "Glutamine",
            Glycine => "Glycine",
            Histidine => "Histidine",
            Isoleucine => "Isoleucine",
            Leucine => "Leucine",
            Lysine => "Lysine",
            Methionine => "Methionine",
            Phenylalanine => "Phenylalanine",
            Proline => "Proline",
            Serine => "Serine",
            Threonine => "Threonine",
            Tryptophan => "Tryptophan",
            Tyrosine => "Tyrosine",
            Valine => "Valine",
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `tuple` is the start codon (AUG / ATG).
pub fn is_start(tuple: &Tuple) -> bool {
    codon_index(tuple) == Some(START_INDEX)
}

/// Whether `tuple` is a stop codon (UAA, UAG, UGA or their DNA forms).
pub fn is_stop(tuple: &Tuple) -> bool {
    codon_index(tuple).map_or(false, |idx| STANDARD[idx] == b'*')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Acid;
    use crate::tuple::all_tuples;

    fn t(s: &str) -> Tuple {
        s.parse().unwrap()
    }

    #[test]
    fn translates_known_codons() {
        assert_eq!(t("AUG").compound(), Some(Compound::Methionine));
        assert_eq!(t("UUU").compound(), Some(Compound::Phenylalanine));
        assert_eq!(t("GCU").compound(), Some(Compound::Alanine));
        assert_eq!(t("UGG").compound(), Some(Compound::Tryptophan));
        // DNA spelling maps to the same slot
        assert_eq!(t("TGG").compound(), Some(Compound::Tryptophan));
    }

    #[test]
    fn stops_have_no_compound() {
        for stop in ["UAA", "UAG", "UGA", "TAA"] {
            assert!(is_stop(&t(stop)), "{stop} should be a stop");
            assert_eq!(t(stop).compound(), None);
        }
        assert!(!is_stop(&t("AUG")));
    }

    #[test]
    fn start_codon() {
        assert!(is_start(&t("AUG")));
        assert!(is_start(&t("ATG")));
        assert!(!is_start(&t("GUG")));
        assert!(!is_start(&t("AU")));
    }

    #[test]
    fn non_codons_are_unknown() {
        assert_eq!(t("AC").compound(), None);
        assert_eq!(t("ACGU").compound(), None);
        assert!(!is_stop(&t("")));
    }

    #[test]
    fn standard_table_counts() {
        let codons = all_tuples(Acid::Rna, 3).unwrap();
        let stops = codons.iter().filter(|c| is_stop(c)).count();
        assert_eq!(stops, 3);
        let coding = codons.iter().filter_map(|c| c.compound()).count();
        assert_eq!(coding, 61);
    }

    #[test]
    fn letters_round_trip() {
        for &b in b"ARNDCEQGHILKMFPSTWYV" {
            let compound = Compound::from_letter(b).unwrap();
            assert_eq!(compound.letter(), b as char);
        }
        assert_eq!(Compound::from_letter(b'*'), None);
    }
}
