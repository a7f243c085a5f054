//! # Paginate
//!
//! Request-scoped page-number pagination.
//!
//! A [`Paginator`] is built once per request from the request URI and a [`TotalSource`]. It resolves the page size, the total number of items, the page count, and the current page, then exposes the offset/limit pair for slicing a query and the sibling links (first, previous, next, last) for rendering navigation.
//!
//! Nothing here fails loudly: malformed `page` or `per_page` parameters fall back to defaults and a failed count becomes zero items.

#![warn(clippy::pedantic)]
#![warn(
	elided_lifetimes_in_paths,
	explicit_outlives_requirements,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	non_ascii_idents,
	noop_method_call,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_extern_crates,
	unused_import_braces,
	unused_lifetimes,
	unused_macro_rules,
	unused_qualifications
)]
#![allow(clippy::tabs_in_doc_comments)] // rustfmt formats our doc comments and we use tabs
#![deny(unsafe_code)]

pub mod link;
pub mod paginator;
pub mod params;
pub mod total;

pub use link::UrlView;
pub use paginator::{Builder, Links, Paginator};
pub use params::{Params, ParamsError, DEFAULT_PARAMS};
pub use total::{BoxError, Error, QueryHandle, TotalSource, Totaler};

/// Page numbers, page sizes, item counts, offsets, and limits.
///
/// Signed so that a negative `page` parameter can be parsed before it is clamped. Every value exposed by a [`Paginator`] is non-negative.
pub type PageNum = i64;
