//! Options that make up an output profile.
//!
//! [`ProfileOptions`] is the complete record an [`OutputProfile`] works
//! from. Callers rarely build one by hand: they describe what they want to
//! change in a [`PartialProfileOptions`] and let the profile merge it over
//! the defaults.
//!
//! ```rust
//! use markup_profile::{PartialProfileOptions, ProfileOptions, SelfClosingStyle};
//!
//! let partial = PartialProfileOptions::new()
//!     .with_indent("  ")
//!     .with_self_closing_style(SelfClosingStyle::Xhtml);
//! let options = ProfileOptions::default().merge(partial);
//! assert_eq!(options.indent, "  ");
//! assert!(options.format);
//! ```
//!
//! [`OutputProfile`]: crate::OutputProfile
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Attribute names treated as boolean unless the options say otherwise.
pub const DEFAULT_BOOLEAN_ATTRIBUTES: &[&str] = &[
    "contenteditable",
    "seamless",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "ismap",
    "loop",
    "multiple",
    "muted",
    "novalidate",
    "readonly",
    "required",
    "reversed",
    "selected",
    "typemustmatch",
];

/// Tag names considered inline-level unless the options say otherwise.
pub const DEFAULT_INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "acronym", "applet", "b", "basefont", "bdo", "big", "br", "button", "cite",
    "code", "del", "dfn", "em", "font", "i", "iframe", "img", "input", "ins", "kbd", "label",
    "map", "object", "q", "s", "samp", "select", "small", "span", "strike", "strong", "sub",
    "sup", "textarea", "tt", "u", "var",
];

const DEFAULT_FORMAT_SKIP: &[&str] = &["html"];
const DEFAULT_FORMAT_FORCE: &[&str] = &["body"];

fn to_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Letter case transform applied to tag or attribute names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum StringCase {
    /// Leave names as written.
    #[default]
    None,
    /// Upper case the whole name.
    Upper,
    /// Lower case the whole name.
    Lower,
}

impl StringCase {
    /// The option name of this case mode. [`StringCase::None`] is the empty
    /// string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            StringCase::None => "",
            StringCase::Upper => "upper",
            StringCase::Lower => "lower",
        }
    }

    /// Lenient conversion from an option name.
    ///
    /// An empty name means no transform, `upper` means upper case and any
    /// other name lower cases.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "" => StringCase::None,
            "upper" => StringCase::Upper,
            "lower" => StringCase::Lower,
            other => {
                log::debug!("unrecognized string case {other:?}, lower casing");
                StringCase::Lower
            }
        }
    }

    pub(crate) fn apply(self, s: &str) -> String {
        match self {
            StringCase::None => s.to_string(),
            StringCase::Upper => s.to_uppercase(),
            StringCase::Lower => s.to_lowercase(),
        }
    }
}

/// Quote character wrapped around attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum AttributeQuotes {
    /// `'`
    Single,
    /// `"`
    #[default]
    Double,
}

impl AttributeQuotes {
    /// The option name of this quoting style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            AttributeQuotes::Single => "single",
            AttributeQuotes::Double => "double",
        }
    }

    /// The quote character itself.
    #[must_use]
    pub const fn quote_char(&self) -> char {
        match self {
            AttributeQuotes::Single => '\'',
            AttributeQuotes::Double => '"',
        }
    }

    /// Lenient conversion from an option name: anything but `single` is
    /// double quoting.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "single" => AttributeQuotes::Single,
            "double" => AttributeQuotes::Double,
            other => {
                log::debug!("unrecognized attribute quotes {other:?}, using double");
                AttributeQuotes::Double
            }
        }
    }
}

/// Notation for self-closing tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum SelfClosingStyle {
    /// `<br>`
    #[default]
    Html,
    /// `<br />`
    Xhtml,
    /// `<br/>`
    Xml,
}

impl SelfClosingStyle {
    /// The option name of this style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SelfClosingStyle::Html => "html",
            SelfClosingStyle::Xhtml => "xhtml",
            SelfClosingStyle::Xml => "xml",
        }
    }

    /// Lenient conversion from an option name: unknown styles behave as
    /// `html`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "html" => SelfClosingStyle::Html,
            "xhtml" => SelfClosingStyle::Xhtml,
            "xml" => SelfClosingStyle::Xml,
            other => {
                log::debug!("unrecognized self-closing style {other:?}, using html");
                SelfClosingStyle::Html
            }
        }
    }
}

// Strict parsing and string conversions shared by the three option enums.
macro_rules! option_enum {
    ($ty:ident, $option:literal, [$($variant:ident),+]) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                $(
                    if s == $ty::$variant.as_str() {
                        return Ok($ty::$variant);
                    }
                )+
                Err(Error::UnknownOptionValue {
                    option: $option,
                    value: s.to_string(),
                })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<String> for $ty {
            fn from(name: String) -> Self {
                $ty::from_name(&name)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

option_enum!(StringCase, "string case", [None, Upper, Lower]);
option_enum!(AttributeQuotes, "attribute quotes", [Single, Double]);
option_enum!(SelfClosingStyle, "self-closing style", [Html, Xhtml, Xml]);

/// The complete set of options of an output profile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ProfileOptions {
    /// Text inserted once per indentation level.
    pub indent: String,
    /// Case transform for tag names.
    pub tag_case: StringCase,
    /// Case transform for attribute names.
    pub attribute_case: StringCase,
    /// Quote character for attribute values.
    pub attribute_quotes: AttributeQuotes,
    /// Whether the renderer formats output over multiple lines.
    pub format: bool,
    /// Tags the renderer never formats.
    pub format_skip: Vec<String>,
    /// Tags the renderer always formats.
    pub format_force: Vec<String>,
    /// Number of adjacent inline elements after which the renderer breaks
    /// lines.
    pub inline_break: usize,
    /// Whether the renderer writes boolean attributes without a value.
    pub compact_boolean_attributes: bool,
    /// Attribute names that are boolean even when the parser didn't flag
    /// them. Compared case-insensitively.
    pub boolean_attributes: Vec<String>,
    /// Self-closing tag notation.
    pub self_closing_style: SelfClosingStyle,
    /// Tag names that are inline-level. Compared case-insensitively.
    pub inline_elements: Vec<String>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        ProfileOptions {
            indent: "\t".to_string(),
            tag_case: StringCase::None,
            attribute_case: StringCase::None,
            attribute_quotes: AttributeQuotes::Double,
            format: true,
            format_skip: to_names(DEFAULT_FORMAT_SKIP),
            format_force: to_names(DEFAULT_FORMAT_FORCE),
            inline_break: 3,
            compact_boolean_attributes: false,
            boolean_attributes: to_names(DEFAULT_BOOLEAN_ATTRIBUTES),
            self_closing_style: SelfClosingStyle::Html,
            inline_elements: to_names(DEFAULT_INLINE_ELEMENTS),
        }
    }
}

impl ProfileOptions {
    /// Overrides every field that is set in `partial`.
    ///
    /// The merge is shallow: a list given in `partial` replaces the list
    /// here, it is not appended to it.
    #[must_use]
    pub fn merge(self, partial: PartialProfileOptions) -> Self {
        ProfileOptions {
            indent: partial.indent.unwrap_or(self.indent),
            tag_case: partial.tag_case.unwrap_or(self.tag_case),
            attribute_case: partial.attribute_case.unwrap_or(self.attribute_case),
            attribute_quotes: partial.attribute_quotes.unwrap_or(self.attribute_quotes),
            format: partial.format.unwrap_or(self.format),
            format_skip: partial.format_skip.unwrap_or(self.format_skip),
            format_force: partial.format_force.unwrap_or(self.format_force),
            inline_break: partial.inline_break.unwrap_or(self.inline_break),
            compact_boolean_attributes: partial
                .compact_boolean_attributes
                .unwrap_or(self.compact_boolean_attributes),
            boolean_attributes: partial.boolean_attributes.unwrap_or(self.boolean_attributes),
            self_closing_style: partial
                .self_closing_style
                .unwrap_or(self.self_closing_style),
            inline_elements: partial.inline_elements.unwrap_or(self.inline_elements),
        }
    }

    /// Look up an option by name.
    pub fn get(&self, name: OptionName) -> OptionValue<'_> {
        match name {
            OptionName::Indent => OptionValue::Text(&self.indent),
            OptionName::TagCase => OptionValue::Case(self.tag_case),
            OptionName::AttributeCase => OptionValue::Case(self.attribute_case),
            OptionName::AttributeQuotes => OptionValue::Quotes(self.attribute_quotes),
            OptionName::Format => OptionValue::Flag(self.format),
            OptionName::FormatSkip => OptionValue::Names(&self.format_skip),
            OptionName::FormatForce => OptionValue::Names(&self.format_force),
            OptionName::InlineBreak => OptionValue::Count(self.inline_break),
            OptionName::CompactBooleanAttributes => {
                OptionValue::Flag(self.compact_boolean_attributes)
            }
            OptionName::BooleanAttributes => OptionValue::Names(&self.boolean_attributes),
            OptionName::SelfClosingStyle => OptionValue::SelfClosing(self.self_closing_style),
            OptionName::InlineElements => OptionValue::Names(&self.inline_elements),
        }
    }
}

/// Caller supplied overrides for [`ProfileOptions`].
///
/// Every field left at `None` falls back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct PartialProfileOptions {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub indent: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub tag_case: Option<StringCase>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub attribute_case: Option<StringCase>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub attribute_quotes: Option<AttributeQuotes>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub format: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub format_skip: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub format_force: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub inline_break: Option<usize>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub compact_boolean_attributes: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub boolean_attributes: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub self_closing_style: Option<SelfClosingStyle>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub inline_elements: Option<Vec<String>>,
}

impl PartialProfileOptions {
    /// No overrides at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    #[must_use]
    pub fn with_tag_case(mut self, tag_case: StringCase) -> Self {
        self.tag_case = Some(tag_case);
        self
    }

    #[must_use]
    pub fn with_attribute_case(mut self, attribute_case: StringCase) -> Self {
        self.attribute_case = Some(attribute_case);
        self
    }

    #[must_use]
    pub fn with_attribute_quotes(mut self, attribute_quotes: AttributeQuotes) -> Self {
        self.attribute_quotes = Some(attribute_quotes);
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: bool) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn with_format_skip<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.format_skip = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_format_force<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.format_force = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_inline_break(mut self, inline_break: usize) -> Self {
        self.inline_break = Some(inline_break);
        self
    }

    #[must_use]
    pub fn with_compact_boolean_attributes(mut self, compact: bool) -> Self {
        self.compact_boolean_attributes = Some(compact);
        self
    }

    /// Replaces the boolean attribute list.
    #[must_use]
    pub fn with_boolean_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.boolean_attributes = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_self_closing_style(mut self, style: SelfClosingStyle) -> Self {
        self.self_closing_style = Some(style);
        self
    }

    /// Replaces the inline element list.
    #[must_use]
    pub fn with_inline_elements<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inline_elements = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Names of the fields of [`ProfileOptions`], for lookup with
/// [`OutputProfile::get`](crate::OutputProfile::get).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionName {
    Indent,
    TagCase,
    AttributeCase,
    AttributeQuotes,
    Format,
    FormatSkip,
    FormatForce,
    InlineBreak,
    CompactBooleanAttributes,
    BooleanAttributes,
    SelfClosingStyle,
    InlineElements,
}

impl OptionName {
    /// All option names, in declaration order.
    pub const ALL: [OptionName; 12] = [
        OptionName::Indent,
        OptionName::TagCase,
        OptionName::AttributeCase,
        OptionName::AttributeQuotes,
        OptionName::Format,
        OptionName::FormatSkip,
        OptionName::FormatForce,
        OptionName::InlineBreak,
        OptionName::CompactBooleanAttributes,
        OptionName::BooleanAttributes,
        OptionName::SelfClosingStyle,
        OptionName::InlineElements,
    ];

    /// The settings key of this option, as used in persisted settings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            OptionName::Indent => "indent",
            OptionName::TagCase => "tagCase",
            OptionName::AttributeCase => "attributeCase",
            OptionName::AttributeQuotes => "attributeQuotes",
            OptionName::Format => "format",
            OptionName::FormatSkip => "formatSkip",
            OptionName::FormatForce => "formatForce",
            OptionName::InlineBreak => "inlineBreak",
            OptionName::CompactBooleanAttributes => "compactBooleanAttributes",
            OptionName::BooleanAttributes => "booleanAttributes",
            OptionName::SelfClosingStyle => "selfClosingStyle",
            OptionName::InlineElements => "inlineElements",
        }
    }
}

impl FromStr for OptionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        OptionName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| Error::UnknownOption(s.to_string()))
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value of a single option, borrowed from the options it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue<'a> {
    Text(&'a str),
    Case(StringCase),
    Quotes(AttributeQuotes),
    Flag(bool),
    Count(usize),
    Names(&'a [String]),
    SelfClosing(SelfClosingStyle),
}
