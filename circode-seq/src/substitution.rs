//! Base substitutions and the catalog of common substitutions.
//!
//! A [`BaseMap`] is a total function over [`Base`], stored as a fixed-size
//! table indexed by [`Base::index`]. The catalog holds the 24 named
//! permutations of the RNA alphabet used to test code invariance. Catalog
//! maps send thymine wherever they send uracil, so applying one to a DNA
//! tuple works once the result is normalized back to DNA.

use std::fmt;

use circode_core::{CircodeError, Result};

use crate::alphabet::Base;

/// Total map `Base -> Base`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseMap([Base; 5]);

impl BaseMap {
    /// Maps every base to itself.
    pub const IDENTITY: BaseMap = BaseMap(Base::ALL);

    /// Watson-Crick pairing: A→U, U→A, T→A, C↔G.
    pub const COMPLEMENT: BaseMap = BaseMap([
        Base::Uracil,
        Base::Guanine,
        Base::Cytosine,
        Base::Adenine,
        Base::Adenine,
    ]);

    /// Build a permutation of the RNA alphabet from the images of A, C, G, U.
    /// Thymine shares uracil's image.
    pub const fn over_rna(a: Base, c: Base, g: Base, u: Base) -> BaseMap {
        BaseMap([a, c, g, u, u])
    }

    /// Copy of this map with `from` redirected to `to`.
    pub const fn with(self, from: Base, to: Base) -> BaseMap {
        let mut table = self.0;
        table[from as usize] = to;
        BaseMap(table)
    }

    #[inline]
    pub const fn get(&self, base: Base) -> Base {
        self.0[base as usize]
    }

    /// Apply `self` first, then `next`.
    pub fn then(&self, next: &BaseMap) -> BaseMap {
        let mut table = Base::ALL;
        for base in Base::ALL {
            table[base.index()] = next.get(self.get(base));
        }
        BaseMap(table)
    }

    /// Whether the map fixes every base of the RNA alphabet.
    pub fn is_identity_on_rna(&self) -> bool {
        [Base::Adenine, Base::Cytosine, Base::Guanine, Base::Uracil]
            .into_iter()
            .all(|b| self.get(b) == b)
    }
}

impl fmt::Debug for BaseMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for base in Base::ALL {
            map.entry(&base.symbol(), &self.get(base).symbol());
        }
        map.finish()
    }
}

/// Which part of the catalog a substitution belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstitutionGroup {
    /// The identity, the three Klein involutions `c`, `p`, `r`, and the
    /// four swaps and cycles `πCG`, `πAU`, `πACUG`, `πAGUC`.
    Special,
    /// The remaining sixteen entries.
    Normal,
}

/// A named entry of the substitution catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Substitution {
    name: &'static str,
    group: SubstitutionGroup,
    map: BaseMap,
}

impl Substitution {
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn group(&self) -> SubstitutionGroup {
        self.group
    }

    pub const fn map(&self) -> &BaseMap {
        &self.map
    }

    /// Find a catalog entry by name. `pi` is accepted in place of `π`.
    pub fn find(name: &str) -> Option<&'static Substitution> {
        let name = name.trim();
        if let Some(found) = CATALOG.iter().find(|s| s.name == name) {
            return Some(found);
        }
        let rest = name.strip_prefix("pi").filter(|rest| !rest.is_empty())?;
        CATALOG
            .iter()
            .find(|s| s.name.strip_prefix('π') == Some(rest))
    }

    /// Like [`find`](Self::find), but an unknown name is an error.
    pub fn lookup(name: &str) -> Result<&'static Substitution> {
        Self::find(name).ok_or_else(|| CircodeError::UnknownSubstitution(name.to_owned()))
    }

    /// The `id` entry.
    pub fn identity() -> &'static Substitution {
        &CATALOG[0]
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Every catalog entry, in catalog order.
pub fn catalog() -> &'static [Substitution] {
    &CATALOG
}

/// The Klein four-group `id`, `c`, `p`, `r` at the head of the catalog.
pub fn klein_group() -> &'static [Substitution] {
    &CATALOG[..4]
}

/// Catalog entries of one group, in catalog order.
pub fn catalog_group(group: SubstitutionGroup) -> impl Iterator<Item = &'static Substitution> {
    CATALOG.iter().filter(move |s| s.group == group)
}

const fn entry(
    name: &'static str,
    group: SubstitutionGroup,
    a: Base,
    c: Base,
    g: Base,
    u: Base,
) -> Substitution {
    Substitution {
        name,
        group,
        map: BaseMap::over_rna(a, c, g, u),
    }
}

use Base::{Adenine as A, Cytosine as C, Guanine as G, Uracil as U};
use SubstitutionGroup::{Normal, Special};

// Images listed as (A, C, G, U).
static CATALOG: [Substitution; 24] = [
    entry("id", Special, A, C, G, U),
    entry("c", Special, U, G, C, A),
    entry("p", Special, G, U, A, C),
    entry("r", Special, C, A, U, G),
    entry("πCG", Special, A, G, C, U),
    entry("πAU", Special, U, C, G, A),
    entry("πACUG", Special, C, U, A, G),
    entry("πAGUC", Special, G, A, U, C),
    entry("πAC", Normal, C, A, G, U),
    entry("πAG", Normal, G, C, A, U),
    entry("πUG", Normal, A, C, U, G),
    entry("πUC", Normal, A, U, G, C),
    entry("πAUCG", Normal, U, G, A, C),
    entry("πAUGC", Normal, U, A, C, G),
    entry("πUACG", Normal, C, G, U, A),
    entry("πUAGC", Normal, G, U, C, A),
    entry("πAUC", Normal, U, A, G, C),
    entry("πUAC", Normal, C, U, G, A),
    entry("πAUG", Normal, U, C, A, G),
    entry("πUAG", Normal, G, C, U, A),
    entry("πGUC", Normal, A, G, U, C),
    entry("πUGC", Normal, A, U, C, G),
    entry("πAGC", Normal, G, A, C, U),
    entry("πGAC", Normal, C, G, A, U),
];
