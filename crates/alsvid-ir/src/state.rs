//! Total maps over bit identifiers.

use rustc_hash::FxHashMap;

use crate::bit::BitId;

/// A total mapping from [`BitId`] to a value.
///
/// Lookup cannot fail: keys that were never written read back the designated
/// default supplied at construction. Entries equal to the default are not
/// stored, so the derived equality is extensional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalMap<V> {
    entries: FxHashMap<BitId, V>,
    default: V,
}

impl<V: Clone + PartialEq> TotalMap<V> {
    /// Create a map that sends every bit to `default`.
    pub fn new(default: V) -> Self {
        Self {
            entries: FxHashMap::default(),
            default,
        }
    }

    /// Look up the value for `bit`.
    #[inline]
    pub fn get(&self, bit: BitId) -> &V {
        self.entries.get(&bit).unwrap_or(&self.default)
    }

    /// Set the value for `bit`.
    pub fn set(&mut self, bit: BitId, value: V) {
        if value == self.default {
            self.entries.remove(&bit);
        } else {
            self.entries.insert(bit, value);
        }
    }

    /// The designated default value.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Iterate over the entries that differ from the default.
    pub fn iter(&self) -> impl Iterator<Item = (BitId, &V)> {
        self.entries.iter().map(|(&k, v)| (k, v))
    }
}

/// An evaluation state: a total assignment of Booleans to bits.
///
/// States are supplied by callers for evaluation and testing; synthesis
/// itself never inspects one.
pub type State = TotalMap<bool>;

impl TotalMap<bool> {
    /// The all-zeros state.
    pub fn zeroed() -> Self {
        Self::new(false)
    }

    /// Flip the value of `bit`.
    pub fn toggle(&mut self, bit: BitId) {
        let v = *self.get(bit);
        self.set(bit, !v);
    }

    /// XOR `value` into `bit`.
    pub fn xor_in(&mut self, bit: BitId, value: bool) {
        if value {
            self.toggle(bit);
        }
    }
}

impl FromIterator<(BitId, bool)> for TotalMap<bool> {
    fn from_iter<I: IntoIterator<Item = (BitId, bool)>>(iter: I) -> Self {
        let mut st = Self::zeroed();
        for (bit, value) in iter {
            st.set(bit, value);
        }
        st
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_total() {
        let st = State::zeroed();
        assert!(!*st.get(BitId(12345)));

        let ones = State::new(true);
        assert!(*ones.get(BitId(-7)));
    }

    #[test]
    fn test_set_and_toggle() {
        let mut st = State::zeroed();
        st.set(BitId(3), true);
        assert!(*st.get(BitId(3)));

        st.toggle(BitId(3));
        assert!(!*st.get(BitId(3)));

        st.xor_in(BitId(0), true);
        st.xor_in(BitId(0), false);
        assert!(*st.get(BitId(0)));
    }

    #[test]
    fn test_equality_is_extensional() {
        let mut a = State::zeroed();
        a.set(BitId(1), true);
        a.set(BitId(1), false);

        let b = State::zeroed();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_iter() {
        let st: State = [(BitId(0), true), (BitId(1), false)].into_iter().collect();
        assert!(*st.get(BitId(0)));
        assert!(!*st.get(BitId(1)));
    }
}
