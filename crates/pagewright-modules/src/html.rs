//! HTML output helpers

use std::borrow::Cow;

/// Escape text for element content or quoted attribute values.
///
/// Encodes `&`, `<`, `>`, `"` and `'`.
pub fn escape(text: &str) -> Cow<'_, str> {
	html_escape::encode_quoted_attribute(text)
}

/// ` name="value"` with the value escaped
pub fn attribute(name: &str, value: &str) -> String {
	format!(" {}=\"{}\"", name, escape(value))
}

/// Whether a URL is safe to place in `href` or `src`.
///
/// Relative paths, anchors and the http(s), mailto, tel and ftp(s) schemes
/// are allowed. Other schemes (`javascript:`, `data:`, `vbscript:`) and
/// parent traversal are rejected.
pub fn is_safe_url(url: &str) -> bool {
	let url = url.trim();
	if url.starts_with("../") {
		return false;
	}
	if url.starts_with('/') || url.starts_with("./") || url.starts_with('#') || url.starts_with('?') {
		return true;
	}
	let lower = url.to_ascii_lowercase();
	let safe_protocols = ["http://", "https://", "mailto:", "tel:", "ftp://", "ftps://"];
	if safe_protocols.iter().any(|protocol| lower.starts_with(protocol)) {
		return true;
	}
	// Scheme-less relative path such as `images/a.jpg`
	let head = lower.split(['/', '?', '#']).next().unwrap_or_default();
	!head.contains(':') && !lower.chars().any(char::is_control)
}

/// `url` when safe, `fallback` otherwise
pub fn safe_url<'a>(url: &'a str, fallback: &'a str) -> &'a str {
	if is_safe_url(url) {
		url
	} else {
		tracing::debug!(url, "rejected unsafe url");
		fallback
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("<script>alert('x')</script>", "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;")]
	#[case("Tom & \"Jerry\"", "Tom &amp; &quot;Jerry&quot;")]
	#[case("plain", "plain")]
	fn test_escape(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape(input), expected);
	}

	#[rstest]
	#[case("https://example.com", true)]
	#[case("/about", true)]
	#[case("#section", true)]
	#[case("mailto:a@example.com", true)]
	#[case("images/photo.jpg", true)]
	#[case("javascript:alert(1)", false)]
	#[case(" JavaScript:alert(1)", false)]
	#[case("data:text/html,<b>x</b>", false)]
	#[case("../secret", false)]
	fn test_is_safe_url(#[case] url: &str, #[case] expected: bool) {
		assert_eq!(is_safe_url(url), expected);
	}

	#[rstest]
	fn test_attribute() {
		assert_eq!(attribute("title", "a\"b"), " title=\"a&quot;b\"");
		assert_eq!(safe_url("javascript:x", "#"), "#");
	}
}
