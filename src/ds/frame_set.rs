//! Fixed-capacity working set of resident pages.
//!
//! Frames are positional: a page keeps the slot it was loaded into until it is
//! replaced in place. An auxiliary index maps each resident key to its slot so
//! membership tests stay O(1).
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, usize>         slots: Vec<K>  (len <= capacity)
//!   ┌─────────┬────────┐               ┌─────┬─────┬─────┬─────┐
//!   │ page 7  │   0    │──────────────►│  7  │  4  │  2  │  -  │
//!   │ page 4  │   1    │               └─────┴─────┴─────┴─────┘
//!   │ page 2  │   2    │                 0     1     2     3
//!   └─────────┴────────┘                 filled left-to-right
//! ```
//!
//! ## Behavior
//! - `push(k)`: fills the next free slot (left-to-right)
//! - `replace(slot, k)`: swaps the resident at `slot` for `k`, slot unchanged
//! - `snapshot()`: slot contents padded with [`Frame::Empty`] to `capacity`
//!
//! ## Performance
//! - `contains` / `slot_of` / `push` / `replace`: O(1) average
//! - `snapshot`: O(capacity)
//!
//! `check_invariants()` verifies slot/index agreement; debug builds run it
//! after every mutation.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::InvariantError;
use crate::trace::Frame;

/// Ordered, bounded set of resident keys with O(1) membership.
#[derive(Debug, Clone)]
pub struct FrameSet<K> {
    slots: Vec<K>,
    index: FxHashMap<K, usize>,
    capacity: usize,
}

impl<K> FrameSet<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty frame set holding at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        }
    }

    /// Returns the number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of occupied frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no frame is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if every frame is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Returns `true` if `key` is resident.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the slot holding `key`, if resident.
    #[inline]
    pub fn slot_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Returns the key resident in `slot`.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<&K> {
        self.slots.get(slot)
    }

    /// Iterates resident keys in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.slots.iter()
    }

    /// Loads `key` into the next free slot and returns that slot.
    ///
    /// Returns `None` when every frame is occupied. A key that is already
    /// resident is left where it is and its current slot is returned.
    pub fn push(&mut self, key: K) -> Option<usize> {
        if let Some(slot) = self.slot_of(&key) {
            return Some(slot);
        }
        if self.is_full() {
            return None;
        }

        let slot = self.slots.len();
        self.index.insert(key.clone(), slot);
        self.slots.push(key);

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();
        Some(slot)
    }

    /// Replaces the resident in `slot` with `key`, returning the displaced key.
    ///
    /// Returns `None` (and changes nothing) if `slot` is unoccupied or `key`
    /// is already resident.
    pub fn replace(&mut self, slot: usize, key: K) -> Option<K> {
        if slot >= self.slots.len() || self.contains(&key) {
            return None;
        }

        let old = std::mem::replace(&mut self.slots[slot], key.clone());
        self.index.remove(&old);
        self.index.insert(key, slot);

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();
        Some(old)
    }

    /// Returns the slot contents padded with [`Frame::Empty`] to `capacity`.
    pub fn snapshot(&self) -> Vec<Frame<K>> {
        let mut frames = Vec::with_capacity(self.capacity);
        frames.extend(self.slots.iter().cloned().map(Frame::Occupied));
        frames.resize(self.capacity.max(self.slots.len()), Frame::Empty);
        frames
    }

    /// Removes every resident key.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
    }

    /// Verifies that the slot vector and index agree.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.slots.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} resident keys exceed capacity {}",
                self.slots.len(),
                self.capacity
            )));
        }
        if self.slots.len() != self.index.len() {
            return Err(InvariantError::new(format!(
                "slot count {} does not match index size {}",
                self.slots.len(),
                self.index.len()
            )));
        }
        for (slot, key) in self.slots.iter().enumerate() {
            match self.index.get(key) {
                Some(&indexed) if indexed == slot => {},
                Some(&indexed) => {
                    return Err(InvariantError::new(format!(
                        "index points slot {slot} at {indexed}"
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "resident key in slot {slot} missing from index"
                    )));
                },
            }
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("FrameSet invariant violated: {err}");
        }
    }
}

impl<'a, K> IntoIterator for &'a FrameSet<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod basic_operations {
        use super::*;

        #[test]
        fn new_frame_set_is_empty() {
            let frames: FrameSet<u32> = FrameSet::new(3);
            assert!(frames.is_empty());
            assert!(!frames.is_full());
            assert_eq!(frames.len(), 0);
            assert_eq!(frames.capacity(), 3);
        }

        #[test]
        fn push_fills_left_to_right() {
            let mut frames = FrameSet::new(3);
            assert_eq!(frames.push(7), Some(0));
            assert_eq!(frames.push(0), Some(1));
            assert_eq!(frames.push(1), Some(2));

            assert!(frames.is_full());
            assert_eq!(frames.iter().copied().collect::<Vec<_>>(), vec![7, 0, 1]);
            assert_eq!(frames.slot_of(&0), Some(1));
        }

        #[test]
        fn get_and_borrowed_iteration_follow_slot_order() {
            let mut frames = FrameSet::new(3);
            frames.push('p');
            frames.push('q');

            assert_eq!(frames.get(0), Some(&'p'));
            assert_eq!(frames.get(1), Some(&'q'));
            assert_eq!(frames.get(2), None);

            let mut seen = Vec::new();
            for page in &frames {
                seen.push(*page);
            }
            assert_eq!(seen, vec!['p', 'q']);
        }

        #[test]
        fn push_into_full_set_is_rejected() {
            let mut frames = FrameSet::new(2);
            frames.push("a");
            frames.push("b");

            assert_eq!(frames.push("c"), None);
            assert!(!frames.contains(&"c"));
            assert_eq!(frames.len(), 2);
        }

        #[test]
        fn push_resident_key_keeps_slot() {
            let mut frames = FrameSet::new(3);
            frames.push(1);
            frames.push(2);

            assert_eq!(frames.push(1), Some(0));
            assert_eq!(frames.len(), 2);
        }
    }

    mod replacement {
        use super::*;

        #[test]
        fn replace_keeps_slot_position() {
            let mut frames = FrameSet::new(3);
            frames.push(7);
            frames.push(0);
            frames.push(1);

            assert_eq!(frames.replace(1, 3), Some(0));
            assert_eq!(frames.iter().copied().collect::<Vec<_>>(), vec![7, 3, 1]);
            assert!(!frames.contains(&0));
            assert_eq!(frames.slot_of(&3), Some(1));
            assert!(frames.check_invariants().is_ok());
        }

        #[test]
        fn replace_empty_slot_is_rejected() {
            let mut frames = FrameSet::new(3);
            frames.push(1);

            assert_eq!(frames.replace(2, 9), None);
            assert!(!frames.contains(&9));
        }

        #[test]
        fn replace_with_resident_key_is_rejected() {
            let mut frames = FrameSet::new(2);
            frames.push(1);
            frames.push(2);

            assert_eq!(frames.replace(0, 2), None);
            assert_eq!(frames.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        }
    }

    mod snapshots {
        use super::*;

        #[test]
        fn snapshot_pads_with_empty_frames() {
            let mut frames = FrameSet::new(4);
            frames.push(5);
            frames.push(6);

            assert_eq!(
                frames.snapshot(),
                vec![
                    Frame::Occupied(5),
                    Frame::Occupied(6),
                    Frame::Empty,
                    Frame::Empty
                ]
            );
        }

        #[test]
        fn snapshot_of_full_set_has_no_padding() {
            let mut frames = FrameSet::new(2);
            frames.push('x');
            frames.push('y');

            let snap = frames.snapshot();
            assert_eq!(snap.len(), 2);
            assert!(snap.iter().all(Frame::is_occupied));
        }

        #[test]
        fn clear_resets_slots_and_index() {
            let mut frames = FrameSet::new(2);
            frames.push(1);
            frames.push(2);
            frames.clear();

            assert!(frames.is_empty());
            assert!(!frames.contains(&1));
            assert_eq!(frames.snapshot(), vec![Frame::Empty, Frame::Empty]);
        }
    }

    #[test]
    fn check_invariants_detects_index_drift() {
        let mut frames = FrameSet::new(3);
        frames.push(1);
        frames.push(2);
        frames.index.insert(2, 0);

        let err = frames.check_invariants().unwrap_err();
        assert!(err.message().contains("slot 1"));
    }

    #[test]
    fn check_invariants_detects_missing_index_entry() {
        let mut frames = FrameSet::new(3);
        frames.push(1);
        frames.index.clear();

        assert!(frames.check_invariants().is_err());
    }
}
