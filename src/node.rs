//! The pieces of a parsed tree the profile is asked about.
//!
//! A renderer usually owns richer node types; these hold just what the
//! profile inspects, and are cheap to build from borrowed data.

/// A text or expression value that may carry its own delimiters.
///
/// An attribute value written as `{expr}` is a literal with `before` set to
/// `{` and `after` set to `}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Literal {
    pub value: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl Literal {
    /// A literal without delimiter hints.
    pub fn new(value: impl Into<String>) -> Self {
        Literal {
            value: Some(value.into()),
            before: None,
            after: None,
        }
    }

    /// Sets the opening and closing delimiter hints.
    #[must_use]
    pub fn with_delimiters(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self.after = Some(after.into());
        self
    }
}

/// An attribute of a parsed element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribute {
    pub name: Option<String>,
    pub value: Option<Literal>,
    /// The parser already knows this attribute is boolean.
    pub boolean: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Attribute {
            name: Some(name.into()),
            value: None,
            boolean: false,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: Literal) -> Self {
        self.value = Some(value);
        self
    }

    /// Flags the attribute as boolean.
    #[must_use]
    pub fn boolean(mut self) -> Self {
        self.boolean = true;
        self
    }
}

/// A parsed node: an element when it has a name, a text node otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub name: Option<String>,
    pub value: Option<String>,
    pub attributes: Vec<Attribute>,
}

impl Node {
    /// An element node.
    pub fn element(name: impl Into<String>) -> Self {
        Node {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// A text-only node.
    pub fn text(value: impl Into<String>) -> Self {
        Node {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Something [`OutputProfile::quote`](crate::OutputProfile::quote) can wrap
/// in quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quotable<'a> {
    /// Plain text. Absent text quotes as the empty string.
    Text(Option<&'a str>),
    /// A literal whose own delimiters may replace the quotes.
    Literal(&'a Literal),
}

impl<'a> From<&'a str> for Quotable<'a> {
    fn from(text: &'a str) -> Self {
        Quotable::Text(Some(text))
    }
}

impl<'a> From<&'a String> for Quotable<'a> {
    fn from(text: &'a String) -> Self {
        Quotable::Text(Some(text))
    }
}

impl<'a> From<Option<&'a str>> for Quotable<'a> {
    fn from(text: Option<&'a str>) -> Self {
        Quotable::Text(text)
    }
}

impl<'a> From<&'a Literal> for Quotable<'a> {
    fn from(literal: &'a Literal) -> Self {
        Quotable::Literal(literal)
    }
}

/// Something [`OutputProfile::is_inline`](crate::OutputProfile::is_inline)
/// can classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineTarget<'a> {
    /// A bare tag name.
    Name(&'a str),
    /// A parsed node.
    Node(&'a Node),
}

impl<'a> From<&'a str> for InlineTarget<'a> {
    fn from(name: &'a str) -> Self {
        InlineTarget::Name(name)
    }
}

impl<'a> From<&'a String> for InlineTarget<'a> {
    fn from(name: &'a String) -> Self {
        InlineTarget::Name(name)
    }
}

impl<'a> From<&'a Node> for InlineTarget<'a> {
    fn from(node: &'a Node) -> Self {
        InlineTarget::Node(node)
    }
}
