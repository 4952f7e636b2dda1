use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts in first-seen order.
///
/// A single pass records each distinct value the first time it appears, so ties
/// between equally frequent values always resolve to the earliest one.
#[derive(Debug, Clone)]
pub struct Tally<T> {
    slots: HashMap<T, usize>,
    counts: Vec<(T, usize)>,
}

impl<T: Hash + Eq + Clone> Tally<T> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            counts: Vec::new(),
        }
    }

    pub fn add(&mut self, value: T) {
        match self.slots.get(&value) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.slots.insert(value.clone(), self.counts.len());
                self.counts.push((value, 1));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Most frequent value; ties go to the value seen first.
    pub fn mode(&self) -> Option<&T> {
        let mut best: Option<&(T, usize)> = None;
        for entry in &self.counts {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(value, _)| value)
    }

    /// `(value, count)` pairs by descending count, first-seen order within ties.
    pub fn into_counts(self) -> Vec<(T, usize)> {
        let mut counts = self.counts;
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl<T: Hash + Eq + Clone> Default for Tally<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for Tally<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for value in iter {
            tally.add(value);
        }
        tally
    }
}

/// Most frequent value of `values`, earliest occurrence winning ties.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect::<Tally<T>>().mode().cloned()
}

/// Frequency table ordered by descending count.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect::<Tally<T>>().into_counts()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_prefers_first_seen_on_tie() {
        assert_eq!(mode(["b", "a", "a", "b"]), Some("b"));
        assert_eq!(mode(["a", "b", "b", "a"]), Some("a"));
        assert_eq!(mode([3, 1, 1, 2, 3]), Some(3));
    }

    #[test]
    fn mode_picks_highest_count() {
        assert_eq!(mode(["x", "y", "y", "z", "y", "x"]), Some("y"));
    }

    #[test]
    fn mode_of_nothing_is_none() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn value_counts_sorted_descending_and_stable() {
        let counts = value_counts(["c", "a", "b", "a", "b", "a"]);
        assert_eq!(counts, vec![("a", 3), ("b", 2), ("c", 1)]);

        let tied = value_counts(["z", "y", "y", "z", "x"]);
        assert_eq!(tied, vec![("z", 2), ("y", 2), ("x", 1)]);
    }
}
