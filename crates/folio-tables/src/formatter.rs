//! Formatter strategies
//!
//! A formatter turns the raw [`Value`] of a cell into display markup. It is a
//! plain function value, `(row, value, context) -> String`, so one-off
//! formatters are closures and the built-in strategies are constructors on
//! [`Formatter`]. Every built-in formatter renders absent values as
//! [`FormatSettings::empty_placeholder`].

use std::fmt::{self, Debug, Write as _};
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::escape::{html_escape, js_attr_escape};
use crate::i18n::MessageResolver;
use crate::settings::FormatSettings;
use crate::value::{Reference, Value};

/// Markup fragments shared by list views
pub mod markup {
	/// Edit icon link, `{url}` is replaced by the target
	pub const EDIT_URL_FORMAT: &str =
		"<a href=\"{url}\"><span class=\"fa fa-pencil-square-o\"></span></a>";

	/// Delete icon link asking for confirmation first
	///
	/// `{message}` is replaced by the confirmation prompt and `{url}` by the
	/// target.
	pub const DELETE_URL_FORMAT_WITH_CONFIRMATION: &str = "<a onclick=\"return maf_confirmAction('{message}');\" href=\"{url}\"><span class=\"fa fa-trash\"></span></a>";

	/// Message key of the default delete confirmation prompt
	pub const DELETE_CONFIRMATION_MESSAGE_KEY: &str = "default.delete.confirmation.message";

	/// Narrow action column
	pub const BOOTSTRAP_COLUMN_1: &str = "col-md-1";

	/// Two-unit column
	pub const BOOTSTRAP_COLUMN_2: &str = "col-md-2";

	/// Right aligned cell
	pub const TEXT_ALIGN_RIGHT: &str = "text-right";

	/// Cells carrying this class are excluded from row navigation
	pub const ROWLINK_SKIP: &str = "rowlink-skip";
}

/// Render-time context handed to formatters
#[derive(Clone, Copy)]
pub struct FormatContext<'a> {
	/// Formatting settings
	pub settings: &'a FormatSettings,
	/// Message resolver of the current request
	pub messages: &'a dyn MessageResolver,
}

impl<'a> FormatContext<'a> {
	/// Create a context
	pub fn new(settings: &'a FormatSettings, messages: &'a dyn MessageResolver) -> Self {
		Self { settings, messages }
	}

	/// The empty placeholder
	pub fn empty(&self) -> String {
		self.settings.empty_placeholder.clone()
	}
}

type FormatFn<R> = dyn Fn(&R, &Value, &FormatContext<'_>) -> String + Send + Sync;

/// A value-to-markup converter for rows of type `R`
///
/// # Examples
///
/// ```
/// use folio_tables::formatter::{FormatContext, Formatter};
/// use folio_tables::i18n::KeyEcho;
/// use folio_tables::{FormatSettings, Value};
///
/// let settings = FormatSettings::default();
/// let ctx = FormatContext::new(&settings, &KeyEcho);
///
/// let yes_no = Formatter::<()>::boolean();
/// assert_eq!(yes_no.apply(&(), &Value::Bool(true), &ctx), settings.boolean_true);
/// assert_eq!(yes_no.apply(&(), &Value::Null, &ctx), settings.empty_placeholder);
/// ```
pub struct Formatter<R> {
	kind: &'static str,
	f: Arc<FormatFn<R>>,
}

impl<R> Clone for Formatter<R> {
	fn clone(&self) -> Self {
		Self {
			kind: self.kind,
			f: Arc::clone(&self.f),
		}
	}
}

impl<R> Debug for Formatter<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Formatter").field("kind", &self.kind).finish()
	}
}

impl<R: 'static> Formatter<R> {
	fn with_kind<F>(kind: &'static str, f: F) -> Self
	where
		F: Fn(&R, &Value, &FormatContext<'_>) -> String + Send + Sync + 'static,
	{
		Self {
			kind,
			f: Arc::new(f),
		}
	}

	/// Wrap an arbitrary function
	pub fn custom<F>(f: F) -> Self
	where
		F: Fn(&R, &Value, &FormatContext<'_>) -> String + Send + Sync + 'static,
	{
		Self::with_kind("custom", f)
	}

	/// Formatter name, for diagnostics
	pub fn kind(&self) -> &'static str {
		self.kind
	}

	/// Apply the formatter
	pub fn apply(&self, row: &R, value: &Value, ctx: &FormatContext<'_>) -> String {
		(self.f)(row, value, ctx)
	}

	/// Escaped display text of the value
	pub fn plain() -> Self {
		Self::with_kind("plain", |_, value, ctx| render_plain(value, ctx))
	}

	/// Fixed yes/no markup for booleans
	pub fn boolean() -> Self {
		Self::with_kind("boolean", |_, value, ctx| match value {
			Value::Bool(true) => ctx.settings.boolean_true.clone(),
			Value::Bool(false) => ctx.settings.boolean_false.clone(),
			other => render_plain(other, ctx),
		})
	}

	/// Dates and date-times using the configured patterns
	pub fn date() -> Self {
		Self::with_kind("date", |_, value, ctx| render_date(value, ctx))
	}

	/// Numbers with grouping and the configured decimal separator
	pub fn number() -> Self {
		Self::with_kind("number", |_, value, ctx| match value {
			Value::Decimal(d) => format_decimal(*d, ctx.settings),
			Value::Integer(i) => format_decimal(Decimal::from(*i), ctx.settings),
			other => render_plain(other, ctx),
		})
	}

	/// Items joined with the configured separator
	///
	/// References with a URL render as links.
	pub fn list() -> Self {
		Self::with_kind("list", |_, value, ctx| match value {
			Value::List(items) if !items.is_empty() => items
				.iter()
				.map(|item| render_item(item, ctx))
				.collect::<Vec<_>>()
				.join(&ctx.settings.list_separator),
			other => render_item(other, ctx),
		})
	}

	/// Related object: link when it has a URL, label otherwise
	pub fn reference() -> Self {
		Self::with_kind("reference", |_, value, ctx| render_item(value, ctx))
	}

	/// Image tag for a URL value, or the image placeholder
	pub fn image() -> Self {
		Self::with_kind("image", |_, value, ctx| match value {
			Value::Text(url) if !url.is_empty() => {
				format!("<img src=\"{}\" class=\"img-thumbnail\"/>", html_escape(url))
			}
			_ => ctx.settings.image_placeholder.clone(),
		})
	}

	/// Substitutes `{url}` in a markup template with a URL computed from the row
	pub fn string_format<F>(template: &'static str, url: F) -> Self
	where
		F: Fn(&R) -> String + Send + Sync + 'static,
	{
		Self::with_kind("string_format", move |row, _, _| {
			template.replace("{url}", &html_escape(&url(row)))
		})
	}

	/// Edit icon linking to the row's edit page
	pub fn edit_link<F>(url: F) -> Self
	where
		F: Fn(&R) -> String + Send + Sync + 'static,
	{
		Self::string_format(markup::EDIT_URL_FORMAT, url)
	}

	/// Link asking for confirmation before navigating
	///
	/// The prompt is resolved through the request's message resolver.
	pub fn link_with_confirmation<F>(
		template: &'static str,
		message_key: &'static str,
		url: F,
	) -> Self
	where
		F: Fn(&R) -> String + Send + Sync + 'static,
	{
		Self::with_kind("link_with_confirmation", move |row, _, ctx| {
			let message = ctx.messages.message(message_key, &[]);
			template
				.replace("{message}", &js_attr_escape(&message))
				.replace("{url}", &html_escape(&url(row)))
		})
	}

	/// Delete icon with the default confirmation prompt
	pub fn delete_link<F>(url: F) -> Self
	where
		F: Fn(&R) -> String + Send + Sync + 'static,
	{
		Self::link_with_confirmation(
			markup::DELETE_URL_FORMAT_WITH_CONFIRMATION,
			markup::DELETE_CONFIRMATION_MESSAGE_KEY,
			url,
		)
	}
}

fn render_plain(value: &Value, ctx: &FormatContext<'_>) -> String {
	if value.is_empty() {
		return ctx.empty();
	}
	html_escape(&value.to_plain_string()).into_owned()
}

fn render_item(value: &Value, ctx: &FormatContext<'_>) -> String {
	match value {
		Value::Ref(Reference {
			label,
			url: Some(url),
			..
		}) => format!("<a href=\"{}\">{}</a>", html_escape(url), html_escape(label)),
		other => render_plain(other, ctx),
	}
}

fn render_date(value: &Value, ctx: &FormatContext<'_>) -> String {
	let mut out = String::new();
	let written = match value {
		Value::Date(d) => write!(out, "{}", d.format(&ctx.settings.date_pattern)),
		Value::DateTime(dt) => write!(out, "{}", dt.format(&ctx.settings.datetime_pattern)),
		other => return render_plain(other, ctx),
	};
	// chrono reports an invalid pattern as a formatting error
	if written.is_err() {
		return html_escape(&value.to_plain_string()).into_owned();
	}
	out
}

/// Format a decimal with the configured separators
///
/// # Examples
///
/// ```
/// use folio_tables::formatter::format_decimal;
/// use folio_tables::FormatSettings;
/// use rust_decimal::Decimal;
///
/// let settings = FormatSettings::default();
/// assert_eq!(format_decimal(Decimal::new(123456750, 2), &settings), "1'234'567.5");
/// assert_eq!(format_decimal(Decimal::new(-1575, 2), &settings), "-15.75");
/// ```
pub fn format_decimal(value: Decimal, settings: &FormatSettings) -> String {
	let rounded = value.round_dp(settings.max_fraction_digits).normalize();
	let text = rounded.abs().to_string();
	let (int_part, frac_part) = match text.split_once('.') {
		Some((i, f)) => (i, Some(f)),
		None => (text.as_str(), None),
	};

	let mut out = String::with_capacity(text.len() + 4);
	if rounded.is_sign_negative() && !rounded.is_zero() {
		out.push('-');
	}
	let digits = int_part.len();
	for (idx, c) in int_part.chars().enumerate() {
		if idx > 0 && (digits - idx) % 3 == 0 {
			out.push_str(&settings.grouping_separator);
		}
		out.push(c);
	}
	if let Some(frac) = frac_part {
		out.push_str(&settings.decimal_separator);
		out.push_str(frac);
	}
	out
}
