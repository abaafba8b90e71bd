//! MRU (Most Recently Used) victim selection.
//!
//! When every frame is occupied and a fault arrives, MRU evicts the resident
//! page with the **largest** last-occurrence index, i.e. the page touched most
//! recently. This is the opposite of LRU and suits cyclic scans where the page
//! just used is the one least likely to be needed again soon.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │   FrameSet (slot order)         RecencyTable (last occurrence)      │
//! │                                                                     │
//! │   slot 0   slot 1   slot 2      page 7 → 0                          │
//! │   ┌─────┐  ┌─────┐  ┌─────┐     page 0 → 4   ◄── max: VICTIM        │
//! │   │  7  │  │  0  │  │  2  │     page 2 → 3                          │
//! │   └─────┘  └─────┘  └─────┘                                         │
//! │                                                                     │
//! │   fault on 3:  slot 1 ← 3   (in place, slot order preserved)        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection Rules
//!
//! - A resident page with no recency entry counts as "never referenced" and
//!   ranks below every recorded position, so it is the least likely victim.
//! - Ties on the maximum keep the candidate met first in slot order.
//! - If no resident page has a recency entry, slot 0 is chosen.
//!
//! ## Example Usage
//!
//! ```
//! use mru_sim::ds::{FrameSet, RecencyTable};
//! use mru_sim::policy::mru::select_victim;
//!
//! let mut frames = FrameSet::new(3);
//! let mut recency = RecencyTable::new();
//! for (i, page) in [7, 0, 2].into_iter().enumerate() {
//!     frames.push(page);
//!     recency.record(page, i);
//! }
//! recency.record(0, 4);
//!
//! let victim = select_victim(&frames, &recency).unwrap();
//! assert_eq!(victim.slot, 1);
//! assert_eq!(victim.page, &0);
//! ```
//!
//! ## Operations
//!
//! | Operation       | Time | Notes                                   |
//! |-----------------|------|-----------------------------------------|
//! | `select_victim` | O(n) | One pass over the `n` occupied frames   |

use std::hash::Hash;

use crate::ds::{FrameSet, RecencyTable};

/// Eviction candidate chosen by [`select_victim`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Victim<'a, K> {
    /// Slot the victim occupies; the incoming page takes this slot.
    pub slot: usize,
    pub page: &'a K,
    /// The victim's last occurrence, `None` if it was never referenced.
    pub last_seen: Option<usize>,
    /// Number of frames inspected to reach the decision.
    pub scanned: usize,
}

/// Picks the most recently used resident page.
///
/// Returns `None` only when `frames` is empty.
pub fn select_victim<'a, K>(
    frames: &'a FrameSet<K>,
    recency: &RecencyTable<K>,
) -> Option<Victim<'a, K>>
where
    K: Clone + Eq + Hash,
{
    let mut best: Option<Victim<'a, K>> = None;
    let mut scanned = 0;

    for (slot, page) in frames.iter().enumerate() {
        scanned += 1;
        let last_seen = recency.last_seen(page);
        // `None < Some(_)`: never-referenced pages lose to any recorded one.
        let newer = match &best {
            Some(current) => last_seen > current.last_seen,
            None => true,
        };
        if newer {
            best = Some(Victim {
                slot,
                page,
                last_seen,
                scanned: 0,
            });
        }
    }

    best.map(|victim| Victim { scanned, ..victim })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(pages: &[u32]) -> (FrameSet<u32>, RecencyTable<u32>) {
        let mut frames = FrameSet::new(pages.len());
        let mut recency = RecencyTable::new();
        for (i, &page) in pages.iter().enumerate() {
            frames.push(page);
            recency.record(page, i);
        }
        (frames, recency)
    }

    mod mru_behavior {
        use super::*;

        #[test]
        fn picks_most_recent_load() {
            let (frames, recency) = loaded(&[7, 0, 1]);
            let victim = select_victim(&frames, &recency).unwrap();

            assert_eq!(victim.slot, 2);
            assert_eq!(*victim.page, 1);
            assert_eq!(victim.last_seen, Some(2));
        }

        #[test]
        fn hit_promotes_page_to_victim() {
            let (frames, mut recency) = loaded(&[7, 0, 2]);
            recency.record(7, 3);

            let victim = select_victim(&frames, &recency).unwrap();
            assert_eq!(victim.slot, 0);
            assert_eq!(*victim.page, 7);
        }

        #[test]
        fn scans_every_frame() {
            let (frames, recency) = loaded(&[1, 2, 3, 4, 5]);
            let victim = select_victim(&frames, &recency).unwrap();
            assert_eq!(victim.scanned, 5);
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn empty_frames_have_no_victim() {
            let frames: FrameSet<u32> = FrameSet::new(3);
            let recency = RecencyTable::new();
            assert!(select_victim(&frames, &recency).is_none());
        }

        #[test]
        fn never_referenced_page_is_least_likely_victim() {
            let mut frames = FrameSet::new(3);
            let mut recency = RecencyTable::new();
            frames.push(10);
            frames.push(20);
            frames.push(30);
            recency.record(20, 0);
            recency.record(30, 1);

            let victim = select_victim(&frames, &recency).unwrap();
            assert_eq!(*victim.page, 30);
        }

        #[test]
        fn all_never_referenced_picks_first_slot() {
            let mut frames = FrameSet::new(2);
            frames.push('a');
            frames.push('b');
            let recency = RecencyTable::new();

            let victim = select_victim(&frames, &recency).unwrap();
            assert_eq!(victim.slot, 0);
            assert_eq!(victim.last_seen, None);
        }

        #[test]
        fn tie_keeps_earliest_slot() {
            let mut frames = FrameSet::new(3);
            frames.push(1);
            frames.push(2);
            frames.push(3);
            // Two residents share the maximum position.
            let mut recency = RecencyTable::new();
            recency.record(1, 0);
            recency.record(2, 5);
            recency.record(3, 5);

            let victim = select_victim(&frames, &recency).unwrap();
            assert_eq!(victim.slot, 1);
        }
    }
}
