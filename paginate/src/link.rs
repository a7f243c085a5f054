//! Reading and rewriting the query of the request URL.

use std::borrow::Cow;

use http::Uri;
use url::form_urlencoded;

/// Read-only view of a request URI.
#[derive(Debug, Clone, Copy)]
pub struct UrlView<'r> {
	uri: &'r Uri,
}

impl<'r> UrlView<'r> {
	/// Wrap a request URI.
	#[must_use]
	pub fn new(uri: &'r Uri) -> Self {
		Self { uri }
	}

	/// The wrapped URI.
	#[must_use]
	pub fn uri(&self) -> &'r Uri {
		self.uri
	}

	/// The decoded value of the first query parameter called `name`.
	#[must_use]
	pub fn param(&self, name: &str) -> Option<Cow<'r, str>> {
		let query = self.uri.query()?;
		form_urlencoded::parse(query.as_bytes())
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
	}

	/// The same URL with every `name` parameter removed, and `name=value` appended if `value` is given.
	///
	/// The scheme and authority (for absolute-form URIs) and the path are kept verbatim. The remaining parameters keep their order but are re-encoded.
	#[must_use]
	pub fn with_param(&self, name: &str, value: Option<&str>) -> String {
		let mut serializer = form_urlencoded::Serializer::new(String::new());
		if let Some(query) = self.uri.query() {
			serializer.extend_pairs(form_urlencoded::parse(query.as_bytes()).filter(|(key, _)| key != name));
		}
		if let Some(value) = value {
			serializer.append_pair(name, value);
		}
		let query = serializer.finish();

		let mut link = String::new();
		if let (Some(scheme), Some(authority)) = (self.uri.scheme_str(), self.uri.authority()) {
			link.push_str(scheme);
			link.push_str("://");
			link.push_str(authority.as_str());
		}
		link.push_str(self.uri.path());
		if !query.is_empty() {
			link.push('?');
			link.push_str(&query);
		}
		link
	}
}
