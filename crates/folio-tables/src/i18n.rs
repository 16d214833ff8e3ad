//! Message resolution for labels and prompts
//!
//! Column labels, empty-table messages and confirmation prompts are message
//! keys such as `"object.actor.name.label"`. Tables never interpret them;
//! they are handed to a [`MessageResolver`] when a table is filled.

use std::collections::HashMap;

/// Resolves message keys to display strings
///
/// Implementations return the key itself when no translation exists, so a
/// missing translation is visible without breaking the page.
pub trait MessageResolver: Send + Sync {
	/// Resolve `key`, substituting `{0}`, `{1}`, ... with `args`
	fn message(&self, key: &str, args: &[&str]) -> String;
}

/// Resolver returning keys untouched
///
/// Useful for tests and for machine consumers of filled tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEcho;

impl MessageResolver for KeyEcho {
	fn message(&self, key: &str, _args: &[&str]) -> String {
		key.to_string()
	}
}

/// An in-memory catalog of messages for one locale
///
/// # Example
/// ```
/// use folio_tables::i18n::{MessageCatalog, MessageResolver};
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add("object.actor.name.label", "Nom");
/// catalog.add("table.count", "{0} lignes");
///
/// assert_eq!(catalog.message("object.actor.name.label", &[]), "Nom");
/// assert_eq!(catalog.message("table.count", &["3"]), "3 lignes");
/// assert_eq!(catalog.message("unknown.key", &[]), "unknown.key");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create an empty catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a message
	pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
		self.messages.insert(key.into(), message.into());
	}

	/// Add messages from `(key, message)` pairs
	pub fn extend<K, M>(&mut self, messages: impl IntoIterator<Item = (K, M)>)
	where
		K: Into<String>,
		M: Into<String>,
	{
		for (key, message) in messages {
			self.add(key, message);
		}
	}

	/// Get a raw message
	pub fn get(&self, key: &str) -> Option<&String> {
		self.messages.get(key)
	}

	/// Number of messages in the catalog
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	/// Whether the catalog is empty
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

impl MessageResolver for MessageCatalog {
	fn message(&self, key: &str, args: &[&str]) -> String {
		let Some(template) = self.messages.get(key) else {
			tracing::trace!(locale = %self.locale, key, "missing message");
			return key.to_string();
		};
		substitute(template, args)
	}
}

/// Replaces `{N}` placeholders with `args[N]` in one pass over `template`
///
/// Placeholders without an argument and text inside arguments are left as is.
fn substitute(template: &str, args: &[&str]) -> String {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);
		let tail = &rest[open..];
		let arg = tail.find('}').and_then(|close| {
			tail[1..close]
				.parse::<usize>()
				.ok()
				.and_then(|idx| args.get(idx))
				.map(|arg| (close, *arg))
		});
		match arg {
			Some((close, arg)) => {
				out.push_str(arg);
				rest = &tail[close + 1..];
			}
			None => {
				out.push('{');
				rest = &tail[1..];
			}
		}
	}
	out.push_str(rest);
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_key_echo() {
		assert_eq!(KeyEcho.message("a.b", &["x"]), "a.b");
	}

	#[test]
	fn test_catalog_multiple_args() {
		let mut catalog = MessageCatalog::new("en");
		catalog.extend([("range", "{0} to {1}")]);
		assert_eq!(catalog.message("range", &["1", "9"]), "1 to 9");
		assert_eq!(catalog.len(), 1);
		assert!(!catalog.is_empty());
	}

	#[test]
	fn test_arguments_are_not_substituted_again() {
		let mut catalog = MessageCatalog::new("en");
		catalog.add("pair", "{0} and {1}");
		assert_eq!(catalog.message("pair", &["{1}", "X"]), "{1} and X");
		assert_eq!(catalog.message("pair", &["{", "}"]), "{ and }");
	}

	#[test]
	fn test_braces_without_index_stay() {
		let mut catalog = MessageCatalog::new("en");
		catalog.add("json", "{\"a\": {0}} {x} {");
		assert_eq!(catalog.message("json", &["1"]), "{\"a\": 1} {x} {");
	}

	#[test]
	fn test_unused_placeholder_stays() {
		let mut catalog = MessageCatalog::new("en");
		catalog.add("greet", "Hello {0}");
		assert_eq!(catalog.message("greet", &[]), "Hello {0}");
	}
}
