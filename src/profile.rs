use crate::names::NameSet;
use crate::node::{Attribute, InlineTarget, Quotable};
use crate::options::{
    OptionName, OptionValue, PartialProfileOptions, ProfileOptions, SelfClosingStyle,
};

/// Answers a renderer's questions about how to write out markup.
///
/// A profile is built once per render from caller overrides layered over
/// [`ProfileOptions::default`], and is not changed afterwards.
///
/// ```rust
/// use markup_profile::{OutputProfile, PartialProfileOptions, SelfClosingStyle, StringCase};
///
/// let profile = OutputProfile::new(
///     PartialProfileOptions::new()
///         .with_tag_case(StringCase::Upper)
///         .with_self_closing_style(SelfClosingStyle::Xhtml),
/// );
/// let tag = format!("<{}{}>", profile.name("br"), profile.self_close());
/// assert_eq!(tag, "<BR />");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputProfile {
    options: ProfileOptions,
    quote_char: char,
    boolean_attributes: NameSet,
    inline_elements: NameSet,
}

impl Default for OutputProfile {
    fn default() -> Self {
        Self::from_options(ProfileOptions::default())
    }
}

impl From<ProfileOptions> for OutputProfile {
    fn from(options: ProfileOptions) -> Self {
        Self::from_options(options)
    }
}

impl OutputProfile {
    /// Create a profile from the default options with `options` laid over
    /// them.
    pub fn new(options: PartialProfileOptions) -> Self {
        Self::from_options(ProfileOptions::default().merge(options))
    }

    /// Create a profile from a complete set of options.
    pub fn from_options(options: ProfileOptions) -> Self {
        let quote_char = options.attribute_quotes.quote_char();
        let boolean_attributes = NameSet::new(&options.boolean_attributes);
        let inline_elements = NameSet::new(&options.inline_elements);
        log::trace!(
            "output profile: quote {:?}, tag case {:?}, attribute case {:?}, self-closing {}, {} boolean attributes, {} inline elements",
            quote_char,
            options.tag_case,
            options.attribute_case,
            options.self_closing_style,
            boolean_attributes.len(),
            inline_elements.len(),
        );
        Self {
            options,
            quote_char,
            boolean_attributes,
            inline_elements,
        }
    }

    /// The merged options.
    pub fn options(&self) -> &ProfileOptions {
        &self.options
    }

    /// Value of the named option.
    pub fn get(&self, name: OptionName) -> OptionValue<'_> {
        self.options.get(name)
    }

    /// Character used for quoting attribute values.
    pub fn quote_char(&self) -> char {
        self.quote_char
    }

    /// Quote an attribute value.
    ///
    /// Plain text is wrapped in the quote character. A literal keeps its
    /// own `{` opening and `}` closing delimiters; each side that has no
    /// such delimiter gets the quote character instead.
    pub fn quote<'a>(&self, value: impl Into<Quotable<'a>>) -> String {
        let (before, text, after) = match value.into() {
            Quotable::Text(text) => (None, text, None),
            Quotable::Literal(literal) => (
                literal.before.as_deref().filter(|before| *before == "{"),
                literal.value.as_deref(),
                literal.after.as_deref().filter(|after| *after == "}"),
            ),
        };
        let text = text.unwrap_or("");
        let mut quoted = String::with_capacity(text.len() + 2);
        match before {
            Some(before) => quoted.push_str(before),
            None => quoted.push(self.quote_char),
        }
        quoted.push_str(text);
        match after {
            Some(after) => quoted.push_str(after),
            None => quoted.push(self.quote_char),
        }
        quoted
    }

    /// Tag name as it should be written.
    pub fn name(&self, name: &str) -> String {
        self.options.tag_case.apply(name)
    }

    /// Attribute name as it should be written.
    pub fn attribute(&self, name: &str) -> String {
        self.options.attribute_case.apply(name)
    }

    /// Whether the attribute is boolean, either because the parser says so
    /// or because its name is a configured boolean attribute.
    pub fn is_boolean_attribute(&self, attribute: &Attribute) -> bool {
        attribute.boolean
            || self
                .boolean_attributes
                .contains(attribute.name.as_deref().unwrap_or(""))
    }

    /// Token written before the `>` of a self-closing tag.
    pub fn self_close(&self) -> &'static str {
        match self.options.self_closing_style {
            SelfClosingStyle::Xhtml => " /",
            SelfClosingStyle::Xml => "/",
            SelfClosingStyle::Html => "",
        }
    }

    /// Indentation for the given nesting level.
    pub fn indent(&self, level: usize) -> String {
        self.options.indent.repeat(level)
    }

    /// Whether a tag name or node is inline-level.
    ///
    /// A node with a non-empty name is classified by its name. Any other
    /// node is inline only when it has text and no attributes.
    pub fn is_inline<'a>(&self, target: impl Into<InlineTarget<'a>>) -> bool {
        match target.into() {
            InlineTarget::Name(name) => self.inline_elements.contains(name),
            InlineTarget::Node(node) => match node.name.as_deref() {
                Some(name) if !name.is_empty() => self.is_inline(name),
                _ => {
                    node.value.as_deref().is_some_and(|value| !value.is_empty())
                        && node.attributes.is_empty()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Literal, Node};
    use crate::options::{AttributeQuotes, StringCase};
    use insta::assert_snapshot;
    use rstest::rstest;

    fn single_quoted() -> OutputProfile {
        OutputProfile::new(
            PartialProfileOptions::new().with_attribute_quotes(AttributeQuotes::Single),
        )
    }

    #[test]
    fn test_quote_char() {
        assert_eq!(OutputProfile::default().quote_char(), '"');
        assert_eq!(single_quoted().quote_char(), '\'');
    }

    #[test]
    fn test_quote_text() {
        let profile = OutputProfile::default();
        assert_snapshot!(profile.quote("hello world"), @r#""hello world""#);
        assert_eq!(profile.quote(""), r#""""#);
        assert_eq!(profile.quote(None::<&str>), r#""""#);
        assert_eq!(single_quoted().quote(None::<&str>), "''");
    }

    #[rstest]
    #[case(Literal::new("x").with_delimiters("{", "}"), r#"{x}"#, "{x}")]
    #[case(Literal::new("x"), r#""x""#, "'x'")]
    #[case(Literal::new("x").with_delimiters("{", "]"), r#"{x""#, "{x'")]
    #[case(Literal::new("x").with_delimiters("(", "}"), r#""x}"#, "'x}")]
    #[case(Literal::new("x").with_delimiters("}", "{"), r#""x""#, "'x'")]
    #[case(Literal::default(), r#""""#, "''")]
    fn quote_literal(
        #[case] literal: Literal,
        #[case] double: &str,
        #[case] single: &str,
    ) {
        assert_eq!(OutputProfile::default().quote(&literal), double);
        assert_eq!(single_quoted().quote(&literal), single);
    }

    #[rstest]
    #[case(StringCase::None, "Div", "Div")]
    #[case(StringCase::Upper, "Div", "DIV")]
    #[case(StringCase::Lower, "DIV", "div")]
    fn name_case(#[case] case: StringCase, #[case] name: &str, #[case] expected: &str) {
        let tags = OutputProfile::new(PartialProfileOptions::new().with_tag_case(case));
        assert_eq!(tags.name(name), expected);
        assert_eq!(tags.attribute(name), name);
        let attributes =
            OutputProfile::new(PartialProfileOptions::new().with_attribute_case(case));
        assert_eq!(attributes.attribute(name), expected);
        assert_eq!(attributes.name(name), name);
    }

    #[test]
    fn test_boolean_attribute() {
        let profile = OutputProfile::default();
        assert!(profile.is_boolean_attribute(&Attribute::new("Checked")));
        assert!(profile.is_boolean_attribute(&Attribute::new("DISABLED")));
        assert!(!profile.is_boolean_attribute(&Attribute::new("href")));
        assert!(profile.is_boolean_attribute(&Attribute::new("href").boolean()));
        assert!(!profile.is_boolean_attribute(&Attribute::default()));
    }

    #[test]
    fn test_boolean_attribute_configured() {
        let profile = OutputProfile::new(
            PartialProfileOptions::new().with_boolean_attributes(["Open"]),
        );
        assert!(profile.is_boolean_attribute(&Attribute::new("open")));
        assert!(!profile.is_boolean_attribute(&Attribute::new("checked")));
    }

    #[rstest]
    #[case(SelfClosingStyle::Html, "")]
    #[case(SelfClosingStyle::Xhtml, " /")]
    #[case(SelfClosingStyle::Xml, "/")]
    fn self_close(#[case] style: SelfClosingStyle, #[case] expected: &str) {
        let profile =
            OutputProfile::new(PartialProfileOptions::new().with_self_closing_style(style));
        assert_eq!(profile.self_close(), expected);
    }

    #[test]
    fn test_indent() {
        let profile = OutputProfile::new(PartialProfileOptions::new().with_indent("  "));
        assert_eq!(profile.indent(3), "      ");
        assert_eq!(profile.indent(0), "");
        assert_eq!(OutputProfile::default().indent(2), "\t\t");
    }

    #[test]
    fn test_is_inline() {
        let profile = OutputProfile::default();
        assert!(profile.is_inline("SPAN"));
        assert!(profile.is_inline("em"));
        assert!(!profile.is_inline("div"));
        assert!(profile.is_inline(&Node::text("text")));
        assert!(!profile.is_inline(&Node::text("")));
        assert!(!profile.is_inline(&Node::default()));
        assert!(!profile.is_inline(&Node::text("text").with_attribute(Attribute::new("class"))));
        assert!(!profile.is_inline(&Node::element("div")));
        assert!(profile.is_inline(&Node::element("B")));
    }

    #[test]
    fn test_empty_name_uses_text_rule() {
        let profile = OutputProfile::default();
        let text = Node {
            name: Some(String::new()),
            value: Some("text".to_string()),
            attributes: vec![],
        };
        assert!(profile.is_inline(&text));
        let empty = Node {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(!profile.is_inline(&empty));
        assert!(!profile.is_inline(&text.clone().with_attribute(Attribute::new("id"))));
    }

    #[test]
    fn test_named_node_ignores_value() {
        let profile = OutputProfile::default();
        let node = Node {
            name: Some("div".to_string()),
            value: Some("text".to_string()),
            attributes: vec![],
        };
        assert!(!profile.is_inline(&node));
    }

    #[test]
    fn test_get() {
        let profile = OutputProfile::new(
            PartialProfileOptions::new()
                .with_inline_break(1)
                .with_tag_case(StringCase::Lower),
        );
        assert_eq!(profile.get(OptionName::InlineBreak), OptionValue::Count(1));
        assert_eq!(
            profile.get(OptionName::TagCase),
            OptionValue::Case(StringCase::Lower)
        );
        assert_eq!(
            profile.get(OptionName::AttributeCase),
            OptionValue::Case(StringCase::None)
        );
        assert_eq!(
            profile.get(OptionName::CompactBooleanAttributes),
            OptionValue::Flag(false)
        );
    }

    #[test]
    fn test_render_start_tag() {
        let profile = OutputProfile::new(
            PartialProfileOptions::new()
                .with_attribute_case(StringCase::Upper)
                .with_attribute_quotes(AttributeQuotes::Single)
                .with_self_closing_style(SelfClosingStyle::Xml),
        );
        let attribute = Attribute::new("src").with_value(Literal::new("a.png"));
        let tag = format!(
            "<{} {}={}{}>",
            profile.name("img"),
            profile.attribute("src"),
            profile.quote(attribute.value.as_ref().unwrap()),
            profile.self_close()
        );
        assert_snapshot!(tag, @"<img SRC='a.png'/>");
    }
}
