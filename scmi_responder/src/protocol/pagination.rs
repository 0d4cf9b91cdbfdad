// scmi_responder/src/protocol/pagination.rs
//! Bounded batches for describe/list commands.
//!
//! A list response is one flags word followed by `returned` descriptors. The
//! agent advances `start_index` by `returned` until `remaining` reaches zero.

use crate::constants::TRIPLET_LEN;
use std::ops::Range;

/// Outcome of one list call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Page {
    /// Items in this response.
    pub returned: usize,
    /// Items after this response.
    pub remaining: usize,
}

impl Page {
    /// A (start, end, step) list: always three entries, nothing remaining.
    pub const fn triplet() -> Self {
        Self {
            returned: TRIPLET_LEN as usize,
            remaining: 0,
        }
    }

    /// True when nothing remains after this page.
    pub fn is_last(&self) -> bool {
        self.remaining == 0
    }
}

/// Largest batch that fills `budget_words` after the flags word.
pub fn max_batch(budget_words: usize, words_per_descriptor: usize) -> usize {
    if words_per_descriptor == 0 {
        return 0;
    }
    budget_words.saturating_sub(1) / words_per_descriptor
}

/// Offset of descriptor `index` in a list response (after the flags word).
pub fn descriptor_base(index: usize, words_per_descriptor: usize) -> usize {
    1 + index * words_per_descriptor
}

/// Split `total` items starting at `start` into one batch of at most
/// `max_batch`. `None` when `start > total`; `start == total` is a valid
/// empty batch.
pub fn paginate(total: usize, start: usize, max_batch: usize) -> Option<Page> {
    let available = total.checked_sub(start)?;
    let returned = available.min(max_batch);
    Some(Page {
        returned,
        remaining: available - returned,
    })
}

/// `(start_index, total_count)` of one list call. Recomputed per call, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationCursor {
    /// First item requested.
    pub start_index: usize,
    /// Items in the whole list.
    pub total_count: usize,
}

impl EnumerationCursor {
    /// Cursor at `start_index` of `total_count` items.
    pub fn new(start_index: usize, total_count: usize) -> Self {
        Self {
            start_index,
            total_count,
        }
    }

    /// Page starting at the cursor; `None` past the end.
    pub fn page(&self, max_batch: usize) -> Option<Page> {
        paginate(self.total_count, self.start_index, max_batch)
    }

    /// Indices covered by `page`.
    pub fn range(&self, page: &Page) -> Range<usize> {
        self.start_index..self.start_index + page.returned
    }

    /// Cursor for the next call.
    pub fn advance(&self, page: &Page) -> Self {
        Self::new(self.start_index + page.returned, self.total_count)
    }
}
