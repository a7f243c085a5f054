//! Names of the query parameters read from requests and written into links.

use std::borrow::Cow;

use serde::Deserialize;

use crate::PageNum;

/// The parameter configuration used when none is given to the [`Builder`](crate::Builder).
pub static DEFAULT_PARAMS: Params = Params::DEFAULT;

/// Query parameter names and the fallback page size.
///
/// Changing a name affects both the parameter read from incoming requests and the parameter written into generated links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Params {
	/// Name of the current page parameter. Defaults to `page`.
	pub page: Cow<'static, str>,
	/// Name of the page size parameter. Defaults to `per_page`.
	pub per_page: Cow<'static, str>,
	/// Page size used when neither the caller nor the request provides a positive one. Defaults to 25.
	pub default_per_page: PageNum,
}

impl Params {
	/// `page`, `per_page`, and 25 items per page.
	pub const DEFAULT: Self = Self {
		page: Cow::Borrowed("page"),
		per_page: Cow::Borrowed("per_page"),
		default_per_page: 25,
	};

	/// Check that the names are usable and the fallback page size is positive.
	///
	/// # Errors
	///
	/// See the variants of [`ParamsError`].
	pub fn validate(&self) -> Result<(), ParamsError> {
		if self.page.is_empty() {
			return Err(ParamsError::EmptyName("page"));
		}
		if self.per_page.is_empty() {
			return Err(ParamsError::EmptyName("per_page"));
		}
		if self.page == self.per_page {
			return Err(ParamsError::SameName(self.page.clone().into_owned()));
		}
		if self.default_per_page < 1 {
			return Err(ParamsError::DefaultPerPage(self.default_per_page));
		}
		Ok(())
	}
}

impl Default for Params {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// Reasons a [`Params`] configuration is unusable.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)] // `Error` is taken by the count error
pub enum ParamsError {
	/// The parameter name for the given field was empty.
	#[error("the {0} parameter name is empty")]
	EmptyName(&'static str),
	/// Both parameters use the same name, so one would shadow the other.
	#[error("page and per_page parameters are both named {0:?}")]
	SameName(String),
	/// The fallback page size was zero or negative.
	#[error("default_per_page must be at least 1, not {0}")]
	DefaultPerPage(PageNum),
}
