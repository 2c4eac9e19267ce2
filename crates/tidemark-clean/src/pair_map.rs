//! Insertion-ordered mapping from pair to frame.

use tidemark_types::{Frame, Pair};

/// An insertion-ordered mapping from [`Pair`] to [`Frame`].
///
/// Iteration order is the order in which pairs were first inserted, and
/// the combiner concatenates in exactly that order. Re-inserting an
/// existing pair replaces its frame but keeps its position. Pair counts
/// are small (a handful of instruments), so lookup is a linear scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairMap {
    entries: Vec<(Pair, Frame)>,
}

impl PairMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts or replaces the frame for a pair. A replaced pair keeps
    /// its original position.
    pub fn insert(&mut self, pair: Pair, frame: Frame) {
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == pair) {
            entry.1 = frame;
        } else {
            self.entries.push((pair, frame));
        }
    }

    /// Returns the frame for a pair code, if present.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Frame> {
        self.entries
            .iter()
            .find(|(p, _)| p.as_str() == code)
            .map(|(_, f)| f)
    }

    /// Iterates `(pair, frame)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair, &Frame)> {
        self.entries.iter().map(|(p, f)| (p, f))
    }

    /// Iterates pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = &Pair> {
        self.entries.iter().map(|(p, _)| p)
    }

    /// Iterates frames in insertion order. The iterator is `Clone` so the
    /// combiner can make its schema and data passes over one call.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> + Clone {
        self.entries.iter().map(|(_, f)| f)
    }
}

impl FromIterator<(Pair, Frame)> for PairMap {
    fn from_iter<T: IntoIterator<Item = (Pair, Frame)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (pair, frame) in iter {
            map.insert(pair, frame);
        }
        map
    }
}

impl IntoIterator for PairMap {
    type Item = (Pair, Frame);
    type IntoIter = std::vec::IntoIter<(Pair, Frame)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(code: &str) -> Pair {
        Pair::new(code).unwrap()
    }

    #[test]
    fn test_insertion_order() {
        let mut map = PairMap::new();
        map.insert(pair("USDCHF"), Frame::new());
        map.insert(pair("EURUSD"), Frame::new());
        map.insert(pair("GBPUSD"), Frame::new());

        let codes: Vec<_> = map.pairs().map(Pair::as_str).collect();
        assert_eq!(codes, vec!["USDCHF", "EURUSD", "GBPUSD"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut map = PairMap::new();
        map.insert(pair("EURUSD"), Frame::new());
        map.insert(pair("USDCHF"), Frame::new());

        let replacement =
            Frame::from_columns([("Bid", vec![tidemark_types::Cell::Num(1.0)])]).unwrap();
        map.insert(pair("EURUSD"), replacement.clone());

        assert_eq!(map.len(), 2);
        let codes: Vec<_> = map.pairs().map(Pair::as_str).collect();
        assert_eq!(codes, vec!["EURUSD", "USDCHF"]);
        assert_eq!(map.get("EURUSD"), Some(&replacement));
    }

    #[test]
    fn test_get_missing() {
        let map = PairMap::new();
        assert!(map.get("EURUSD").is_none());
        assert!(map.is_empty());
    }
}
