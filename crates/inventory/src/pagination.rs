//! Offset pagination over the insertion-ordered item sequence.

use core::ops::Range;

use stockroom_core::{DomainError, DomainResult};

/// A `(page, size)` request. Zero means "not supplied".
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    /// No pagination: the whole sequence.
    pub const ALL: PageRequest = PageRequest { page: 0, size: 0 };

    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// True when neither page nor size was supplied.
    pub fn is_unbounded(&self) -> bool {
        self.page == 0 && self.size == 0
    }

    /// Resolve the half-open window into a sequence of `len` items.
    ///
    /// A missing page or size defaults to 1 on its own, so `page=3` alone
    /// selects the third item. Fails with `RangeExceeded` when the window
    /// starts at or past the end (including on an empty sequence).
    pub fn window(&self, len: usize) -> DomainResult<Range<usize>> {
        if self.is_unbounded() {
            return Ok(0..len);
        }

        let page = self.page.max(1);
        let size = self.size.max(1);

        let start = (page - 1)
            .checked_mul(size)
            .and_then(|s| usize::try_from(s).ok())
            .ok_or_else(DomainError::range_exceeded)?;
        if start >= len {
            return Err(DomainError::range_exceeded());
        }

        let end = page
            .checked_mul(size)
            .and_then(|e| usize::try_from(e).ok())
            .unwrap_or(usize::MAX)
            .min(len);

        Ok(start..end)
    }
}
