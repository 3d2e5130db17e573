//! Code tests: predicates over a set of tuples.
//!
//! Every test returns a plain `bool`. Failing a property is a normal
//! outcome, not an error; the first violation found is written to the
//! supplied [`DiagnosticSink`] as one line. Results never depend on the sink.
//!
//! - [`is_duplicate_free`] — no tuple occurs twice
//! - [`is_circular`] — the code is n-circular
//! - [`is_self_complementary`] — the code holds the complement of each member
//! - [`is_invariant`] — a catalog substitution maps the code onto itself

use std::collections::HashSet;

use circode_core::DiagnosticSink;
use tracing::{debug, trace};

use crate::combinatorics::{arrangements, binomial};
use crate::substitution::Substitution;
use crate::transform::{self, shift_sequence};
use crate::tuple::{tuples_acid, tuples_length, Tuple};

/// A pure predicate over a code.
pub trait CodeTest {
    /// Human-readable name.
    fn name(&self) -> String;

    /// Decide the property, narrating the first violation into `sink`.
    fn test(&self, code: &[Tuple], sink: &dyn DiagnosticSink) -> bool;
}

fn join(tuples: &[impl std::borrow::Borrow<Tuple>]) -> String {
    let parts: Vec<String> = tuples.iter().map(|t| t.borrow().to_string()).collect();
    format!("[{}]", parts.join(", "))
}

// ---------------------------------------------------------------------------
// Duplicate freedom
// ---------------------------------------------------------------------------

/// Whether no tuple occurs more than once.
pub fn is_duplicate_free(code: &[Tuple]) -> bool {
    first_duplicate(code).is_none()
}

fn first_duplicate(code: &[Tuple]) -> Option<&Tuple> {
    let mut seen = HashSet::with_capacity(code.len());
    code.iter().find(|&tuple| !seen.insert(tuple))
}

/// No tuple occurs more than once.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateFree;

impl CodeTest for DuplicateFree {
    fn name(&self) -> String {
        "duplicate-free".into()
    }

    fn test(&self, code: &[Tuple], sink: &dyn DiagnosticSink) -> bool {
        match first_duplicate(code) {
            Some(tuple) => {
                sink.log(&format!("Tuple {tuple} occurs more than once, code not duplicate-free."));
                false
            }
            None => true,
        }
    }
}

// ---------------------------------------------------------------------------
// n-circularity
// ---------------------------------------------------------------------------

/// Whether `code` is `n`-circular.
///
/// The empty code is n-circular for every `n`, and every well-formed code is
/// 0-circular. Codes with tuples of differing length or with duplicates are
/// rejected. For `n > 1` the code must first be `(n-1)`-circular; then no
/// ordering of any `n` distinct members may rotate, at any offset inside the
/// tuple length, into a sequence made only of members.
///
/// The search is exhaustive over `C(|code|, n) * n! * (L - 1)` candidates and
/// has no built-in bound; callers keep `n` and the code size small.
pub fn is_circular(code: &[Tuple], n: usize, sink: &dyn DiagnosticSink) -> bool {
    if code.is_empty() {
        return true;
    }
    let Some(length) = tuples_length(code) else {
        sink.log(&format!("Tuples of variable length, can't check for {n}-circular."));
        return false;
    };
    if !is_duplicate_free(code) {
        sink.log(&format!("Duplicate tuples in code, code not {n}-circular."));
        return false;
    }
    let members: HashSet<&Tuple> = code.iter().collect();
    circular_order(code, &members, length, n, sink)
}

fn circular_order(
    code: &[Tuple],
    members: &HashSet<&Tuple>,
    length: usize,
    n: usize,
    sink: &dyn DiagnosticSink,
) -> bool {
    match n {
        0 => true,
        1 => conjugacy_free(code, members, length, sink),
        _ => {
            // n-circular implies m-circular for every m < n
            if !circular_order(code, members, length, n - 1, sink) {
                return false;
            }
            debug!(
                order = n,
                code_size = code.len(),
                choices = ?binomial(code.len() as u64, n as u64),
                "searching rotated arrangements"
            );
            arrangements_closed(code, members, length, n, sink)
        }
    }
}

/// 1-circularity: no member rotates onto a member, itself included.
fn conjugacy_free(
    code: &[Tuple],
    members: &HashSet<&Tuple>,
    length: usize,
    sink: &dyn DiagnosticSink,
) -> bool {
    for tuple in code {
        for shift in 1..length {
            let rotated = tuple.rotated(shift as isize);
            if members.contains(&rotated) {
                if rotated == *tuple {
                    sink.log(&format!(
                        "Tuple {tuple} is its own rotation, code not 1-circular."
                    ));
                } else {
                    sink.log(&format!(
                        "Tuples {tuple} and {rotated} belong to the same conjugacy class, code not 1-circular."
                    ));
                }
                return false;
            }
        }
    }
    true
}

/// n-circularity for n > 1, assuming (n-1)-circularity already holds.
fn arrangements_closed(
    code: &[Tuple],
    members: &HashSet<&Tuple>,
    length: usize,
    n: usize,
    sink: &dyn DiagnosticSink,
) -> bool {
    for arrangement in arrangements(code, n) {
        for shift in 1..length {
            let shifted = shift_sequence(&arrangement, shift as isize);
            if shifted.iter().all(|t| members.contains(t)) {
                sink.log(&format!(
                    "Partition {} and shift {} contained in code, code not {n}-circular.",
                    join(&arrangement),
                    join(&shifted)
                ));
                return false;
            }
            trace!(?arrangement, shift, "arrangement leaves the code");
        }
    }
    true
}

/// Code is n-circular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circular {
    pub n: usize,
}

impl Circular {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Default for Circular {
    fn default() -> Self {
        Self { n: 1 }
    }
}

impl CodeTest for Circular {
    fn name(&self) -> String {
        format!("{}-circular", self.n)
    }

    fn test(&self, code: &[Tuple], sink: &dyn DiagnosticSink) -> bool {
        is_circular(code, self.n, sink)
    }
}

// ---------------------------------------------------------------------------
// Self-complementarity
// ---------------------------------------------------------------------------

/// Whether the complement of every member is also a member.
///
/// The empty code is self-complementary; a code mixing RNA and DNA tuples
/// is rejected. Complements are formed in the code's common acid.
pub fn is_self_complementary(code: &[Tuple], sink: &dyn DiagnosticSink) -> bool {
    if code.is_empty() {
        return true;
    }
    let Some(acid) = tuples_acid(code) else {
        sink.log("Tuples with variable acids, can't check for self-complementary.");
        return false;
    };
    let members: HashSet<&Tuple> = code.iter().collect();
    for tuple in code {
        let complement = tuple.complement(acid);
        if !members.contains(&complement) {
            sink.log(&format!(
                "Complement tuple {complement} is not contained in code, code not self-complementary."
            ));
            return false;
        }
    }
    true
}

/// Code holds the complement of each member.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfComplementary;

impl CodeTest for SelfComplementary {
    fn name(&self) -> String {
        "self-complementary".into()
    }

    fn test(&self, code: &[Tuple], sink: &dyn DiagnosticSink) -> bool {
        is_self_complementary(code, sink)
    }
}

// ---------------------------------------------------------------------------
// Substitution invariance
// ---------------------------------------------------------------------------

/// Whether the named catalog substitution maps `code` onto itself, i.e. the
/// transformed tuples and the code contain each other.
///
/// Only catalog names are accepted: an unknown name is reported as `false`.
pub fn is_invariant(code: &[Tuple], name: &str, sink: &dyn DiagnosticSink) -> bool {
    let Some(substitution) = Substitution::find(name) else {
        sink.log(&format!("Unknown substitution {name:?}, can't check for invariance."));
        return false;
    };
    let transformed = transform::substitute(code, substitution);
    let members: HashSet<&Tuple> = code.iter().collect();
    let images: HashSet<&Tuple> = transformed.iter().collect();

    if let Some((from, to)) = code
        .iter()
        .zip(&transformed)
        .find(|(_, to)| !members.contains(to))
    {
        sink.log(&format!(
            "Tuple {from} maps to {to} under {substitution}, which is not contained in code, code not invariant."
        ));
        return false;
    }
    if let Some(missing) = code.iter().find(|t| !images.contains(t)) {
        sink.log(&format!(
            "Tuple {missing} is not an image under {substitution}, code not invariant."
        ));
        return false;
    }
    true
}

/// Code is invariant under a catalog substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantTo {
    pub substitution: String,
}

impl InvariantTo {
    pub fn new(substitution: impl Into<String>) -> Self {
        Self {
            substitution: substitution.into(),
        }
    }
}

impl CodeTest for InvariantTo {
    fn name(&self) -> String {
        format!("invariant to {}", self.substitution)
    }

    fn test(&self, code: &[Tuple], sink: &dyn DiagnosticSink) -> bool {
        is_invariant(code, &self.substitution, sink)
    }
}
