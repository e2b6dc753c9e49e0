//! Generic pagination
//!
//! [`Paginator`] turns a raw `(page, size)` request into a normalized
//! [`PageRequest`], hands the derived offset/limit to a page-fetch closure,
//! asks a count closure for the total, and assembles a [`PageResult`].
//!
//! Out-of-range input is never rejected: `page <= 0` becomes `1` and a
//! non-positive `size` falls back to the default size. Errors returned by
//! the closures are passed through untouched.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Page size used when the caller supplies a non-positive one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Clamp a requested page number to `>= 1`.
pub fn safe_page(page: i64) -> u64 {
    page.max(1) as u64
}

/// Use `size` if positive, otherwise `default_size` (at least 1).
pub fn safe_size(size: i64, default_size: u64) -> u64 {
    if size > 0 {
        size as u64
    } else {
        default_size.max(1)
    }
}

/// Zero-based index of the first element on `page`.
pub fn offset(page: i64, size: i64, default_size: u64) -> u64 {
    (safe_page(page) - 1).saturating_mul(safe_size(size, default_size))
}

/// `ceil(total_elements / size)`; `0` for an empty collection.
pub fn total_pages(total_elements: u64, size: u64) -> u64 {
    total_elements.div_ceil(size.max(1))
}

/// A normalized page request: `page >= 1`, `size >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64, default_size: u64) -> Self {
        Self {
            page: safe_page(page),
            size: safe_size(size, default_size),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.size)
    }

    pub fn limit(&self) -> u64 {
        self.size
    }
}

/// One page of results plus the metadata a client needs to navigate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// Items on this page, at most `size` of them
    pub content: Vec<T>,
    /// Normalized page number (1-based)
    pub page: u64,
    /// Normalized page size
    pub size: u64,
    /// Number of items across all pages
    pub total_elements: u64,
    /// Number of pages, `0` when there are no items
    pub total_pages: u64,
}

impl<T> PageResult<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: total_pages(total_elements, request.size),
        }
    }

    /// Convert every item, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// Pagination helper carrying the fallback page size.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    default_size: u64,
}

impl Paginator {
    /// A `default_size` of `0` is treated as `1`.
    pub fn new(default_size: u64) -> Self {
        Self {
            default_size: default_size.max(1),
        }
    }

    pub fn default_size(&self) -> u64 {
        self.default_size
    }

    pub fn request(&self, page: i64, size: i64) -> PageRequest {
        PageRequest::new(page, size, self.default_size)
    }

    /// Fetch one page with synchronous closures.
    ///
    /// `fetch_page` receives `(offset, limit)` and is called before
    /// `count_total`. Each is called exactly once unless `fetch_page` fails,
    /// in which case its error is returned and `count_total` is skipped.
    pub fn paginate<T, E, F, C>(
        &self,
        page: i64,
        size: i64,
        fetch_page: F,
        count_total: C,
    ) -> Result<PageResult<T>, E>
    where
        F: FnOnce(u64, u64) -> Result<Vec<T>, E>,
        C: FnOnce() -> Result<u64, E>,
    {
        let request = self.request(page, size);
        debug!(page = request.page, size = request.size, offset = request.offset(), "Fetching page");

        let content = fetch_page(request.offset(), request.limit())?;
        let total = count_total()?;

        Ok(PageResult::new(content, request, total))
    }

    /// Async counterpart of [`Paginator::paginate`].
    pub async fn paginate_async<T, E, F, FFut, C, CFut>(
        &self,
        page: i64,
        size: i64,
        fetch_page: F,
        count_total: C,
    ) -> Result<PageResult<T>, E>
    where
        F: FnOnce(u64, u64) -> FFut,
        FFut: Future<Output = Result<Vec<T>, E>>,
        C: FnOnce() -> CFut,
        CFut: Future<Output = Result<u64, E>>,
    {
        let request = self.request(page, size);
        debug!(page = request.page, size = request.size, offset = request.offset(), "Fetching page");

        let content = fetch_page(request.offset(), request.limit()).await?;
        let total = count_total().await?;

        Ok(PageResult::new(content, request, total))
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// [`Paginator::paginate`] with the default page size.
pub fn paginate<T, E, F, C>(
    page: i64,
    size: i64,
    fetch_page: F,
    count_total: C,
) -> Result<PageResult<T>, E>
where
    F: FnOnce(u64, u64) -> Result<Vec<T>, E>,
    C: FnOnce() -> Result<u64, E>,
{
    Paginator::default().paginate(page, size, fetch_page, count_total)
}
