//! Tuple text grammar: normalizing, splitting, slicing, and joining.
//!
//! Tokens that hold anything but nucleotide symbols are not errors here;
//! they become `None` entries so callers keep positional alignment with the
//! input.

use circode_core::{CircodeError, Result};

use crate::alphabet::Base;
use crate::tuple::Tuple;

const SEPARATORS: [char; 2] = [',', ';'];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEPARATORS.contains(&c)
}

/// Uppercase `text`, turn every run of non-base characters into a single
/// space, and trim the ends.
///
/// ```
/// use circode_seq::normalize_tuple_text;
/// assert_eq!(normalize_tuple_text("  aug--uaa\n gc "), "AUG UAA GC");
/// ```
pub fn normalize_tuple_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .map(|c| match Base::from_symbol(c) {
            Some(base) => base.symbol(),
            None => ' ',
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split on whitespace, commas, and semicolons; parse each token.
pub fn split_tuples(text: &str) -> Vec<Option<Tuple>> {
    text.split(is_separator)
        .filter(|token| !token.is_empty())
        .map(Tuple::parse)
        .collect()
}

/// Strip all whitespace and cut the rest into tuples of `length`; the last
/// tuple may be shorter.
pub fn slice_tuples(text: &str, length: usize) -> Result<Vec<Option<Tuple>>> {
    if length == 0 {
        return Err(CircodeError::InvalidInput(
            "tuple length must be at least 1".into(),
        ));
    }
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(chars
        .chunks(length)
        .map(|chunk| Tuple::parse(&chunk.iter().collect::<String>()))
        .collect())
}

/// Join tuples with `glue`, skipping absent entries. With
/// `with_compounds`, each tuple is annotated with its amino acid.
pub fn join_tuples<'a, I, T>(tuples: I, glue: &str, with_compounds: bool) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<Option<&'a Tuple>>,
{
    tuples
        .into_iter()
        .filter_map(Into::into)
        .map(|tuple| {
            if with_compounds {
                tuple.display_with_compound()
            } else {
                tuple.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(glue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Tuple {
        s.parse().unwrap()
    }

    #[test]
    fn normalize_collapses_noise() {
        assert_eq!(normalize_tuple_text("acg"), "ACG");
        assert_eq!(normalize_tuple_text("ACG  UUA"), "ACG UUA");
        assert_eq!(normalize_tuple_text("ACXXG"), "AC G");
        assert_eq!(normalize_tuple_text(" 12 ACG, UUA; "), "ACG UUA");
        assert_eq!(normalize_tuple_text("xyz"), "");
        assert_eq!(normalize_tuple_text(""), "");
    }

    #[test]
    fn split_on_all_separators() {
        let tuples = split_tuples("AUG, uaa;GC\tCCC\n");
        assert_eq!(
            tuples,
            vec![Some(t("AUG")), Some(t("UAA")), Some(t("GC")), Some(t("CCC"))]
        );
    }

    #[test]
    fn split_keeps_absent_positions() {
        let tuples = split_tuples("AUG X12 CCC");
        assert_eq!(tuples, vec![Some(t("AUG")), None, Some(t("CCC"))]);
        assert!(split_tuples("  ,; ").is_empty());
    }

    #[test]
    fn slice_fixed_width() {
        let tuples = slice_tuples("AUG UAA\nGC", 3).unwrap();
        assert_eq!(tuples, vec![Some(t("AUG")), Some(t("UAA")), Some(t("GC"))]);
        let with_noise = slice_tuples("AUGXAA", 3).unwrap();
        assert_eq!(with_noise, vec![Some(t("AUG")), None]);
        assert!(slice_tuples("", 3).unwrap().is_empty());
    }

    #[test]
    fn slice_rejects_zero_length() {
        assert!(matches!(
            slice_tuples("AUG", 0),
            Err(CircodeError::InvalidInput(_))
        ));
    }

    #[test]
    fn join_skips_absent() {
        let tuples = vec![Some(t("AUG")), None, Some(t("UAA"))];
        assert_eq!(join_tuples(&tuples, " ", false), "AUG UAA");
        assert_eq!(join_tuples(&tuples, ", ", true), "AUG (Methionine), UAA (Stop)");
        let plain = [t("AC"), t("GU")];
        assert_eq!(join_tuples(&plain, "-", false), "AC-GU");
        assert_eq!(join_tuples(Vec::<&Tuple>::new(), " ", false), "");
    }
}
