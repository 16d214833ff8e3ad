//! HTML escaping for text placed into cell markup

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// Returns a borrowed reference if no escaping is needed.
///
/// # Examples
///
/// ```
/// use folio_tables::escape::html_escape;
///
/// assert_eq!(html_escape("R&D <core>"), "R&amp;D &lt;core&gt;");
/// assert_eq!(html_escape("plain"), "plain");
/// ```
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Escapes a string embedded in a single-quoted JavaScript literal
/// inside an HTML attribute (confirmation prompts).
pub fn js_attr_escape(s: &str) -> String {
	let js = s.replace('\\', "\\\\").replace('\'', "\\'");
	html_escape(&js).into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_borrowed_when_clean() {
		assert!(matches!(html_escape("Marketing"), Cow::Borrowed(_)));
	}

	#[test]
	fn test_quotes_escaped() {
		assert_eq!(html_escape(r#"a "b" 'c'"#), "a &quot;b&quot; &#x27;c&#x27;");
	}

	#[test]
	fn test_js_attr_escape() {
		assert_eq!(js_attr_escape("Don't"), "Don\\&#x27;t");
	}
}
