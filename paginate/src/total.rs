//! Where the total number of items comes from.
//!
//! A [`TotalSource`] is one of three closed cases: a number the caller already has, a collection that can count itself ([`Totaler`]), or a query handle that must ask the database ([`QueryHandle`]). Only the last performs I/O.

use crate::PageNum;

/// Boxed error returned by [`QueryHandle::count`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Something that knows how many items it holds.
pub trait Totaler {
	/// The total number of items.
	fn total(&self) -> PageNum;
}

fn len_total(len: usize) -> PageNum {
	PageNum::try_from(len).unwrap_or(PageNum::MAX)
}

impl<T> Totaler for &[T] {
	fn total(&self) -> PageNum {
		len_total(self.len())
	}
}

impl<T> Totaler for Vec<T> {
	fn total(&self) -> PageNum {
		len_total(self.len())
	}
}

/// A database query that has not been executed yet.
///
/// Implementations count the rows the query would return and can have an offset and a limit applied. The core only calls [`count`](Self::count) while building a [`Paginator`](crate::Paginator) and [`offset`](Self::offset)/[`limit`](Self::limit) from [`Paginator::paginate`](crate::Paginator::paginate).
#[async_trait::async_trait]
pub trait QueryHandle: Sync {
	/// Count the rows matched by this query, ignoring any offset or limit.
	async fn count(&self) -> Result<PageNum, BoxError>;

	/// Skip the first `offset` rows.
	#[must_use]
	fn offset(self, offset: PageNum) -> Self
	where
		Self: Sized;

	/// Return at most `limit` rows.
	#[must_use]
	fn limit(self, limit: PageNum) -> Self
	where
		Self: Sized;
}

/// Error produced while resolving a [`TotalSource`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The query handle failed to count its rows.
	#[error("counting items: {0}")]
	Count(#[source] BoxError),
}

/// The total number of items in the paginated collection.
#[derive(Clone, Copy)]
pub enum TotalSource<'a> {
	/// A count the caller already has.
	Count(PageNum),
	/// A collection that counts itself.
	Counter(&'a (dyn Totaler + Sync)),
	/// A query whose matching rows are counted.
	Query(&'a dyn QueryHandle),
}

impl TotalSource<'_> {
	/// Resolve to a count, running the count query for [`TotalSource::Query`].
	///
	/// # Errors
	///
	/// Returns [`Error::Count`] if the query handle fails.
	pub async fn resolve(self) -> Result<PageNum, Error> {
		match self {
			Self::Count(count) => Ok(count),
			Self::Counter(counter) => Ok(counter.total()),
			Self::Query(query) => query.count().await.map_err(Error::Count),
		}
	}
}

impl std::fmt::Debug for TotalSource<'_> {
	fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Count(count) => formatter.debug_tuple("Count").field(count).finish(),
			Self::Counter(counter) => formatter
				.debug_tuple("Counter")
				.field(&counter.total())
				.finish(),
			Self::Query(_) => formatter.write_str("Query(..)"),
		}
	}
}

impl<'a, T: Sync> From<&'a Vec<T>> for TotalSource<'a> {
	fn from(items: &'a Vec<T>) -> Self {
		Self::Counter(items)
	}
}

impl<'a, 'b: 'a, T: Sync> From<&'a &'b [T]> for TotalSource<'a> {
	fn from(items: &'a &'b [T]) -> Self {
		Self::Counter(items)
	}
}

impl<'a> From<&'a dyn QueryHandle> for TotalSource<'a> {
	fn from(query: &'a dyn QueryHandle) -> Self {
		Self::Query(query)
	}
}

macro_rules! impl_from_lossless {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for TotalSource<'_> {
				fn from(count: $ty) -> Self {
					Self::Count(count.into())
				}
			}
		)*
	};
}

impl_from_lossless!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_checked {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for TotalSource<'_> {
				fn from(count: $ty) -> Self {
					Self::Count(PageNum::try_from(count).unwrap_or_else(|_| {
						tracing::warn!(count, "item count does not fit in a page number, treating as zero");
						0
					}))
				}
			}
		)*
	};
}

impl_from_checked!(isize, u64, usize);
