pub const LEADS_PER_PAGE: usize = 15;

/// Which slice of the lead list the table shows. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: LEADS_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.per_page)
    }

    /// Keeps `page` within `[1, max(total_pages, 1)]`.
    pub fn clamped(self, len: usize) -> Self {
        let last = self.total_pages(len).max(1);
        Self {
            page: self.page.clamp(1, last),
            ..self
        }
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.page.saturating_sub(1) * self.per_page;
        let end = (start + self.per_page).min(items.len());
        items.get(start..end).unwrap_or_default()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page < self.total_pages(len)
    }

    pub fn next(self, len: usize) -> Self {
        if self.has_next(len) {
            Self {
                page: self.page + 1,
                ..self
            }
        } else {
            self
        }
    }

    pub fn previous(self) -> Self {
        if self.has_previous() {
            Self {
                page: self.page - 1,
                ..self
            }
        } else {
            self
        }
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
