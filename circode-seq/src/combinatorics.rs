//! Lazy index generators for combinations and permutations.
//!
//! Both iterators keep only the current index vector, so memory stays
//! proportional to `k` however many items are enumerated. Either can be
//! rewound with `restart`.

/// Iterate over all k-element combinations of `[0, n)` in lexicographic
/// order. Each item is a `Vec<usize>` of length `k` with strictly
/// increasing indices. Yields nothing when `k == 0` or `k > n`.
///
/// # Example
///
/// ```
/// use circode_seq::combinatorics::combinations;
///
/// let combos: Vec<Vec<usize>> = combinations(4, 2).collect();
/// assert_eq!(combos.len(), 6); // C(4, 2) = 6
/// assert_eq!(combos[0], vec![0, 1]);
/// assert_eq!(combos[5], vec![2, 3]);
/// ```
pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        k,
        current: first_combination(n, k),
    }
}

fn first_combination(n: usize, k: usize) -> Option<Vec<usize>> {
    if k == 0 || k > n {
        None
    } else {
        Some((0..k).collect())
    }
}

/// Iterator over k-element combinations of `[0, n)`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    current: Option<Vec<usize>>,
}

impl Combinations {
    /// Rewind to the first combination.
    pub fn restart(&mut self) {
        self.current = first_combination(self.n, self.k);
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current.clone()?;

        // rightmost slot that can still move up; reset everything after it
        let mut next = result.clone();
        let mut i = self.k;
        while i > 0 {
            i -= 1;
            next[i] += 1;
            if next[i] <= self.n - self.k + i {
                for j in (i + 1)..self.k {
                    next[j] = next[j - 1] + 1;
                }
                self.current = Some(next);
                return Some(result);
            }
        }

        self.current = None;
        Some(result)
    }
}

/// Iterate over every ordering of `[0, k)` in lexicographic order, starting
/// from the identity. Yields nothing when `k == 0`.
pub fn permutations(k: usize) -> Permutations {
    Permutations {
        k,
        current: first_permutation(k),
    }
}

fn first_permutation(k: usize) -> Option<Vec<usize>> {
    (k > 0).then(|| (0..k).collect())
}

/// Iterator over orderings of `[0, k)`.
#[derive(Debug, Clone)]
pub struct Permutations {
    k: usize,
    current: Option<Vec<usize>>,
}

impl Permutations {
    /// Rewind to the identity ordering.
    pub fn restart(&mut self) {
        self.current = first_permutation(self.k);
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current.take()?;

        // Standard next-permutation step: find the longest descending
        // suffix, swap its predecessor with the smallest larger element,
        // then reverse the suffix.
        let mut next = result.clone();
        if let Some(i) = (1..next.len()).rev().find(|&i| next[i - 1] < next[i]) {
            let pivot = i - 1;
            let j = (i..next.len())
                .rev()
                .find(|&j| next[j] > next[pivot])
                .unwrap_or(i);
            next.swap(pivot, j);
            next[i..].reverse();
            self.current = Some(next);
        }
        Some(result)
    }
}

/// Every ordering of every `k`-element choice from `items`, by reference.
pub fn arrangements<T>(items: &[T], k: usize) -> impl Iterator<Item = Vec<&T>> + '_ {
    combinations(items.len(), k).flat_map(move |choice| {
        permutations(k).map(move |order| {
            order
                .iter()
                .map(|&o| &items[choice[o]])
                .collect::<Vec<&T>>()
        })
    })
}

/// Exact binomial coefficient C(n, k). Returns `None` on overflow.
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 0..k {
        result = result.checked_mul(n - i)?;
        result /= i + 1;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_of_four_choose_two() {
        let all: Vec<_> = combinations(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn combination_edge_cases() {
        assert_eq!(combinations(3, 3).collect::<Vec<_>>(), vec![vec![0, 1, 2]]);
        assert_eq!(combinations(2, 3).count(), 0);
        assert_eq!(combinations(3, 0).count(), 0);
    }

    #[test]
    fn combination_counts_match_binomial() {
        for n in 1..8usize {
            for k in 1..=n {
                assert_eq!(
                    combinations(n, k).count() as u64,
                    binomial(n as u64, k as u64).unwrap(),
                    "C({n},{k})"
                );
            }
        }
    }

    #[test]
    fn permutations_of_three() {
        let all: Vec<_> = permutations(3).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0]
            ]
        );
        assert_eq!(permutations(5).count(), 120);
        assert_eq!(permutations(1).collect::<Vec<_>>(), vec![vec![0]]);
        assert_eq!(permutations(0).count(), 0);
    }

    #[test]
    fn restart_rewinds() {
        let mut combos = combinations(5, 3);
        let first: Vec<_> = combos.by_ref().take(4).collect();
        combos.restart();
        let again: Vec<_> = combos.by_ref().take(4).collect();
        assert_eq!(first, again);

        let mut perms = permutations(3);
        assert_eq!(perms.by_ref().count(), 6);
        perms.restart();
        assert_eq!(perms.next(), Some(vec![0, 1, 2]));
    }

    #[test]
    fn arrangements_by_reference() {
        let items = ["a", "b", "c"];
        let all: Vec<Vec<&&str>> = arrangements(&items, 2).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec![&"a", &"b"]);
        assert_eq!(all[1], vec![&"b", &"a"]);
        assert_eq!(all[5], vec![&"c", &"b"]);
    }

    #[test]
    fn binomial_known_values() {
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(20, 10), Some(184_756));
        assert_eq!(binomial(3, 4), Some(0));
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(200, 100), None);
    }
}
