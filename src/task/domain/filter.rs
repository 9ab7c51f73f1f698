//! Listing filters and paging.

use super::Priority;

/// Offset/limit paging request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: u64,
    page_size: u64,
}

impl PageRequest {
    /// Page size used when the caller does not provide one.
    pub const DEFAULT_PAGE_SIZE: u64 = 10;
    /// Largest page size served in one request.
    pub const MAX_PAGE_SIZE: u64 = 100;
    /// Largest offset a store can address.
    pub const MAX_SKIP: u64 = i64::MAX.unsigned_abs();

    /// Creates a paging request, clamping the page size to
    /// `1..=MAX_PAGE_SIZE` and the offset to `MAX_SKIP`.
    #[must_use]
    pub fn new(skip: u64, page_size: u64) -> Self {
        Self {
            skip: skip.min(Self::MAX_SKIP),
            page_size: page_size.clamp(1, Self::MAX_PAGE_SIZE),
        }
    }

    /// Returns the number of matching records to skip.
    #[must_use]
    pub const fn skip(self) -> u64 {
        self.skip
    }

    /// Returns the maximum number of records to return.
    #[must_use]
    pub const fn page_size(self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_PAGE_SIZE)
    }
}

/// Filter for the open-task listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    name: Option<String>,
    priority: Option<Priority>,
    paging: PageRequest,
}

impl TaskFilter {
    /// Creates a filter that matches every open task on the first page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to tasks with exactly this name.
    ///
    /// A blank name clears the restriction.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.trim().is_empty() {
            None
        } else {
            Some(name)
        };
        self
    }

    /// Restricts the listing to tasks with this priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the requested page.
    #[must_use]
    pub const fn with_paging(mut self, paging: PageRequest) -> Self {
        self.paging = paging;
        self
    }

    /// Returns the name restriction, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the priority restriction, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the requested page.
    #[must_use]
    pub const fn paging(&self) -> PageRequest {
        self.paging
    }
}
