#![forbid(unsafe_code)]
//! Output profiles for markup serialization.
//!
//! An [`OutputProfile`] decides how a parsed markup tree is written back
//! out as text: the indentation unit, the letter case of tag and attribute
//! names, the quote character around attribute values, which attributes are
//! boolean, how self-closing tags are written and which elements are
//! inline-level. A renderer builds one profile per render and asks it
//! questions as it walks the tree.
//!
//! ```rust
//! use markup_profile::{AttributeQuotes, Attribute, Node, OutputProfile, PartialProfileOptions};
//!
//! let profile = OutputProfile::new(
//!     PartialProfileOptions::new()
//!         .with_indent("  ")
//!         .with_attribute_quotes(AttributeQuotes::Single),
//! );
//!
//! assert_eq!(profile.indent(2), "    ");
//! assert_eq!(profile.quote("main"), "'main'");
//! assert!(profile.is_boolean_attribute(&Attribute::new("Checked")));
//! assert!(profile.is_inline("SPAN"));
//! assert!(profile.is_inline(&Node::text("hello")));
//! assert!(!profile.is_inline(&Node::element("div")));
//! ```
//!
//! With the `serde` feature, [`PartialProfileOptions`] can be read straight
//! from persisted settings, using camelCase keys such as `tagCase` and
//! `selfClosingStyle`.

mod error;
mod names;
mod node;
mod options;
mod profile;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

pub use error::{Error, Result};
pub use node::{Attribute, InlineTarget, Literal, Node, Quotable};
pub use options::{
    AttributeQuotes, OptionName, OptionValue, PartialProfileOptions, ProfileOptions,
    SelfClosingStyle, StringCase, DEFAULT_BOOLEAN_ATTRIBUTES, DEFAULT_INLINE_ELEMENTS,
};
pub use profile::OutputProfile;
