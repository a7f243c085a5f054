//! The request-scoped [`Paginator`] and its [`Builder`].

use std::num::IntErrorKind;
use std::ops::RangeInclusive;

use http::Uri;
use serde::Serialize;

use crate::link::UrlView;
use crate::params::{Params, DEFAULT_PARAMS};
use crate::total::{QueryHandle, TotalSource};
use crate::PageNum;

/// The four sibling links of the current page. `None` means there is no such link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Links {
	/// The first page. Present when there is at least one page.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first: Option<String>,
	/// The previous page. Present when the current page is not the first.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub prev: Option<String>,
	/// The next page. Present when the current page is not the last.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub next: Option<String>,
	/// The last page. Present when there is at least one page.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last: Option<String>,
}

/// Pagination state derived from one request.
///
/// Everything is computed when the paginator is built; afterwards it is read-only.
/// Serializes as `per_page`, `last_page` (omitted when zero), and whichever of `first`, `prev`, `next`, and `last` exist.
#[derive(Debug, Clone, Serialize)]
pub struct Paginator<'r> {
	#[serde(skip)]
	url: UrlView<'r>,
	#[serde(skip)]
	params: &'r Params,
	per_page: PageNum,
	#[serde(skip_serializing_if = "is_zero")]
	last_page: PageNum,
	#[serde(flatten)]
	links: Links,
	#[serde(skip)]
	total_items: PageNum,
	#[serde(skip)]
	page_nums: PageNum,
	#[serde(skip)]
	page: PageNum,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // signature required by serde
fn is_zero(n: &PageNum) -> bool {
	*n == 0
}

/// Ceiling division for a non-negative dividend and a positive divisor.
fn div_ceil(dividend: PageNum, divisor: PageNum) -> PageNum {
	dividend / divisor + PageNum::from(dividend % divisor != 0)
}

/// Parse a decimal page number, saturating values too large for [`PageNum`] instead of rejecting them.
fn parse_page_num(raw: &str) -> Option<PageNum> {
	match raw.parse::<PageNum>() {
		Ok(n) => Some(n),
		Err(error) => match error.kind() {
			IntErrorKind::PosOverflow => Some(PageNum::MAX),
			IntErrorKind::NegOverflow => Some(PageNum::MIN),
			_ => None,
		},
	}
}

/// Configures and builds a [`Paginator`].
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct Builder<'r> {
	uri: &'r Uri,
	params: &'r Params,
	per_page: Option<PageNum>,
}

impl<'r> Builder<'r> {
	/// Use these parameter names and fallback page size instead of [`DEFAULT_PARAMS`].
	pub fn params(mut self, params: &'r Params) -> Self {
		self.params = params;
		self
	}

	/// Use this page size if it is positive, ignoring the request's `per_page` parameter.
	pub fn per_page(mut self, per_page: PageNum) -> Self {
		self.per_page = Some(per_page);
		self
	}

	/// Resolve the total and build the paginator.
	///
	/// This awaits the count query for [`TotalSource::Query`]. If that fails the failure is logged and the collection is treated as empty.
	pub async fn build(self, total: TotalSource<'_>) -> Paginator<'r> {
		let total_items = match total.resolve().await {
			Ok(total_items) => total_items,
			Err(error) => {
				tracing::warn!(%error, "could not resolve item count, paginating as empty");
				0
			}
		};
		self.with_total(total_items)
	}

	/// Build the paginator from a count the caller already has.
	///
	/// A negative count is treated as zero.
	pub fn with_total(self, total_items: PageNum) -> Paginator<'r> {
		let url = UrlView::new(self.uri);
		let total_items = total_items.max(0);

		let per_page = self
			.per_page
			.filter(|&per_page| per_page > 0)
			.or_else(|| {
				url.param(&self.params.per_page)
					.and_then(|raw| parse_page_num(&raw))
					.filter(|&per_page| per_page > 0)
			})
			.unwrap_or_else(|| self.params.default_per_page.max(1));

		let last_page = div_ceil(total_items, per_page);

		let mut page_nums = div_ceil(total_items, per_page);
		if last_page > 0 {
			page_nums = page_nums.min(last_page);
		}

		let mut page = url
			.param(&self.params.page)
			.and_then(|raw| parse_page_num(&raw))
			.unwrap_or(0);
		if page > page_nums {
			page = page_nums;
		}
		if page <= 0 {
			page = 1;
		}

		let mut paginator = Paginator {
			url,
			params: self.params,
			per_page,
			last_page,
			links: Links::default(),
			total_items,
			page_nums,
			page,
		};
		paginator.links = paginator.links();

		tracing::debug!(
			uri = %self.uri,
			page,
			per_page,
			page_nums,
			total_items,
			"resolved pagination"
		);

		paginator
	}
}

impl<'r> Paginator<'r> {
	/// Start configuring a paginator for this request.
	pub fn builder(uri: &'r Uri) -> Builder<'r> {
		Builder {
			uri,
			params: &DEFAULT_PARAMS,
			per_page: None,
		}
	}

	/// Build a paginator with the default parameter names, taking the page size from the request.
	pub async fn new(uri: &'r Uri, total: TotalSource<'_>) -> Paginator<'r> {
		Self::builder(uri).build(total).await
	}

	/// The request URI this paginator was built from.
	#[must_use]
	pub fn request(&self) -> &'r Uri {
		self.url.uri()
	}

	/// The parameter configuration in use.
	#[must_use]
	pub fn params(&self) -> &'r Params {
		self.params
	}

	/// Items per page. Always at least 1.
	#[must_use]
	pub fn per_page(&self) -> PageNum {
		self.per_page
	}

	/// The `LIMIT` for an SQL query; the same as [`per_page`](Self::per_page).
	#[must_use]
	pub fn limit(&self) -> PageNum {
		self.per_page
	}

	/// The page count computed from the total when the paginator was built.
	#[must_use]
	pub fn last_page(&self) -> PageNum {
		self.last_page
	}

	/// Total number of items.
	#[must_use]
	pub fn nums(&self) -> PageNum {
		self.total_items
	}

	/// Total number of pages. Zero when there are no items.
	#[must_use]
	pub fn page_nums(&self) -> PageNum {
		self.page_nums
	}

	/// The current page, from 1 to `max(1, page_nums)`.
	#[must_use]
	pub fn page(&self) -> PageNum {
		self.page
	}

	/// The `OFFSET` for an SQL query.
	#[must_use]
	pub fn offset(&self) -> PageNum {
		(self.page - 1).saturating_mul(self.per_page)
	}

	/// Whether there is a page before the current one.
	#[must_use]
	pub fn has_prev(&self) -> bool {
		self.page > 1
	}

	/// Whether there is a page after the current one.
	#[must_use]
	pub fn has_next(&self) -> bool {
		self.page < self.page_nums
	}

	/// Whether there is more than one page.
	#[must_use]
	pub fn has_pages(&self) -> bool {
		self.page_nums > 1
	}

	/// Whether `page` is the current page.
	#[must_use]
	pub fn is_active(&self, page: PageNum) -> bool {
		self.page == page
	}

	/// Every page number, for rendering numbered links. Empty when there are no items.
	#[must_use]
	pub fn pages(&self) -> RangeInclusive<PageNum> {
		1..=self.page_nums
	}

	/// The request URL pointing at `page`.
	///
	/// Page 1 has no page parameter at all; other pages have exactly one.
	#[must_use]
	pub fn page_link(&self, page: PageNum) -> String {
		if page == 1 {
			self.url.with_param(&self.params.page, None)
		} else {
			self.url
				.with_param(&self.params.page, Some(page.to_string().as_str()))
		}
	}

	/// Link to the previous page, if there is one.
	#[must_use]
	pub fn page_link_prev(&self) -> Option<String> {
		self.has_prev().then(|| self.page_link(self.page - 1))
	}

	/// Link to the next page, if there is one.
	#[must_use]
	pub fn page_link_next(&self) -> Option<String> {
		self.has_next().then(|| self.page_link(self.page + 1))
	}

	/// Link to the first page.
	#[must_use]
	pub fn page_link_first(&self) -> String {
		self.page_link(1)
	}

	/// Link to the last page.
	#[must_use]
	pub fn page_link_last(&self) -> String {
		self.page_link(self.page_nums)
	}

	/// Compute the sibling links. `first` and `last` only exist when there is at least one page.
	///
	/// The result is cached when the paginator is built and available through [`first`](Self::first) and friends.
	#[must_use]
	pub fn links(&self) -> Links {
		let has_pages = self.page_nums > 0;
		Links {
			first: has_pages.then(|| self.page_link_first()),
			prev: self.page_link_prev(),
			next: self.page_link_next(),
			last: has_pages.then(|| self.page_link_last()),
		}
	}

	/// Cached link to the first page.
	#[must_use]
	pub fn first(&self) -> Option<&str> {
		self.links.first.as_deref()
	}

	/// Cached link to the previous page.
	#[must_use]
	pub fn prev(&self) -> Option<&str> {
		self.links.prev.as_deref()
	}

	/// Cached link to the next page.
	#[must_use]
	pub fn next(&self) -> Option<&str> {
		self.links.next.as_deref()
	}

	/// Cached link to the last page.
	#[must_use]
	pub fn last(&self) -> Option<&str> {
		self.links.last.as_deref()
	}

	/// Apply this page's offset and limit to `query` without running it.
	pub fn paginate<Q: QueryHandle>(&self, query: Q) -> Q {
		query.offset(self.offset()).limit(self.limit())
	}
}
