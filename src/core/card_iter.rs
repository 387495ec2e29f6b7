use std::iter::FusedIterator;

/// Iterator over every `k` element combination of a slice, without
/// repetition.
///
/// Combinations come out in lexicographic order of the positions they were
/// taken from, and each one keeps the relative order its elements had in
/// the source slice.
///
/// When `k` is zero, the slice is empty, or `k` is larger than the slice
/// there is no valid combination and the iterator is empty.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    // All the possible elements that can be chosen
    elements: &'a [T],

    // Positions of the next combination to hand out.
    // None once everything has been handed out.
    idx: Option<Vec<usize>>,
}

impl<'a, T> Combinations<'a, T> {
    /// Start at the first `k` elements. See `combinations`.
    pub fn new(elements: &'a [T], k: usize) -> Self {
        let idx = if k == 0 || k > elements.len() {
            None
        } else {
            Some((0..k).collect())
        };
        Self { elements, idx }
    }

    /// How many combinations are left to be handed out.
    fn remaining(&self) -> usize {
        let Some(idx) = &self.idx else {
            return 0;
        };
        let n = self.elements.len();
        let k = idx.len();

        // Count the combinations that sort before idx: for every position,
        // each smaller pick there frees up nck(rest, slots left) of them.
        let mut before = 0;
        for (i, &pos) in idx.iter().enumerate() {
            let start = if i == 0 { 0 } else { idx[i - 1] + 1 };
            for skipped in start..pos {
                before += binomial(n - skipped - 1, k - i - 1);
            }
        }
        binomial(n, k) - before
    }

    /// Move idx forward to the next combination, or clear it when done.
    fn advance(&mut self) {
        let n = self.elements.len();
        let Some(idx) = self.idx.as_mut() else {
            return;
        };
        let k = idx.len();

        // Find the right most position that can still move forward.
        let mut level = k;
        while level > 0 {
            level -= 1;
            if idx[level] < n - (k - level) {
                idx[level] += 1;
                // Everything after it restarts right behind it.
                for next in (level + 1)..k {
                    idx[next] = idx[next - 1] + 1;
                }
                return;
            }
        }
        self.idx = None;
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let result: Vec<T> = self
            .idx
            .as_ref()?
            .iter()
            .map(|i| self.elements[*i].clone())
            .collect();
        self.advance();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Combinations<'_, T> {}
impl<T: Clone> FusedIterator for Combinations<'_, T> {}

/// All the `k` element combinations of `elements`.
///
/// ```
/// use cardrank::core::combinations;
///
/// let picks: Vec<Vec<char>> = combinations(&['a', 'b', 'c'], 2).collect();
/// assert_eq!(vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']], picks);
///
/// // No element, or asking for more than there are, gives nothing back.
/// assert_eq!(0, combinations(&['a', 'b'], 3).count());
/// assert_eq!(0, combinations(&['a', 'b'], 0).count());
/// ```
pub fn combinations<T: Clone>(elements: &[T], k: usize) -> Combinations<'_, T> {
    Combinations::new(elements, k)
}

/// Returns the binomial coefficient for n choose k.
///
/// Zero when k > n. Saturates at `usize::MAX` when the count doesn't fit.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // nck(n, i) = nck(n, i - 1) * (n - i + 1) / i stays an integer at each
    // step. The product is at most nck(n, i) * i, so it fits in u128 as long
    // as the result fits in usize.
    let mut acc: u128 = 1;
    for i in 1..=k {
        let Some(product) = acc.checked_mul((n - i + 1) as u128) else {
            return usize::MAX;
        };
        acc = product / i as u128;
    }
    usize::try_from(acc).unwrap_or(usize::MAX)
}
