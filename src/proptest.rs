//! Proptest support for output profiles
//!
//! [`arb_partial_options`] produces profile overrides where each field is
//! independently left unset or filled in, including mixed-case name lists,
//! so a renderer can check that its output holds up under any profile.
//! [`arb_tag_name`] and [`arb_attribute_name`] give mixed-case names to ask
//! the profile about.
//!
//! The strategies are behind the `proptest` feature:
//!
//! ```toml
//! [dependencies]
//! markup_profile = { version = "0.1", features = ["proptest"] }
//! ```

use proptest::prelude::*;

use crate::options::{AttributeQuotes, PartialProfileOptions, SelfClosingStyle, StringCase};

const INDENTS: &[&str] = &["", "\t", " ", "  ", "    "];
const TAG_NAMES: &[&str] = &["a", "SPAN", "div", "Em", "p", "img", "section"];
const ATTRIBUTE_NAMES: &[&str] = &["checked", "Disabled", "href", "class", "OPEN", "async"];

fn arb_string_case() -> impl Strategy<Value = StringCase> {
    prop_oneof![
        Just(StringCase::None),
        Just(StringCase::Upper),
        Just(StringCase::Lower),
    ]
}

fn arb_attribute_quotes() -> impl Strategy<Value = AttributeQuotes> {
    prop_oneof![Just(AttributeQuotes::Single), Just(AttributeQuotes::Double)]
}

fn arb_self_closing_style() -> impl Strategy<Value = SelfClosingStyle> {
    prop_oneof![
        Just(SelfClosingStyle::Html),
        Just(SelfClosingStyle::Xhtml),
        Just(SelfClosingStyle::Xml),
    ]
}

fn arb_names(names: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(names).prop_map(|name| name.to_string()),
        0..5,
    )
}

/// Generate an arbitrary tag name, in mixed case.
pub fn arb_tag_name() -> impl Strategy<Value = String> {
    prop::sample::select(TAG_NAMES).prop_map(|name| name.to_string())
}

/// Generate an arbitrary attribute name, in mixed case.
pub fn arb_attribute_name() -> impl Strategy<Value = String> {
    prop::sample::select(ATTRIBUTE_NAMES).prop_map(|name| name.to_string())
}

/// Generate arbitrary profile overrides. Every field is independently
/// either left unset or given a value.
///
/// Example:
///
/// ```notrust
/// use markup_profile::proptest::arb_partial_options;
/// use markup_profile::OutputProfile;
///
/// proptest! {
///   #[test]
///   fn test_self_close_is_short(partial in arb_partial_options()) {
///     let profile = OutputProfile::new(partial);
///     prop_assert!(profile.self_close().len() <= 2);
///   }
/// }
/// ```
pub fn arb_partial_options() -> impl Strategy<Value = PartialProfileOptions> {
    (
        (
            prop::option::of(prop::sample::select(INDENTS).prop_map(|i| i.to_string())),
            prop::option::of(arb_string_case()),
            prop::option::of(arb_string_case()),
            prop::option::of(arb_attribute_quotes()),
            prop::option::of(any::<bool>()),
            prop::option::of(arb_names(TAG_NAMES)),
        ),
        (
            prop::option::of(arb_names(TAG_NAMES)),
            prop::option::of(0..10usize),
            prop::option::of(any::<bool>()),
            prop::option::of(arb_names(ATTRIBUTE_NAMES)),
            prop::option::of(arb_self_closing_style()),
            prop::option::of(arb_names(TAG_NAMES)),
        ),
    )
        .prop_map(
            |(
                (indent, tag_case, attribute_case, attribute_quotes, format, format_skip),
                (
                    format_force,
                    inline_break,
                    compact_boolean_attributes,
                    boolean_attributes,
                    self_closing_style,
                    inline_elements,
                ),
            )| PartialProfileOptions {
                indent,
                tag_case,
                attribute_case,
                attribute_quotes,
                format,
                format_skip,
                format_force,
                inline_break,
                compact_boolean_attributes,
                boolean_attributes,
                self_closing_style,
                inline_elements,
            },
        )
}
