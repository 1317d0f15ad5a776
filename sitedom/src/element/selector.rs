use super::Element;

/// A small subset of CSS selectors, built programmatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `tag`
    Tag(String),
    /// `[name="value"]`
    Attr { name: String, value: String },
    /// `[name^="prefix"]`
    AttrPrefix { name: String, prefix: String },
    /// All of the inner selectors must match the same element.
    All(Vec<Selector>),
    /// Any of the inner selectors may match (`a, b`).
    Any(Vec<Selector>),
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attr {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn attr_prefix(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::AttrPrefix {
            name: name.into(),
            prefix: prefix.into(),
        }
    }

    /// Selector list matching any of the given classes.
    pub fn any_class<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Any(classes.into_iter().map(Self::class).collect())
    }

    /// Combine with another selector on the same element.
    pub fn and(self, other: Selector) -> Self {
        match self {
            Self::All(mut parts) => {
                parts.push(other);
                Self::All(parts)
            }
            first => Self::All(vec![first, other]),
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Id(id) => element.id == *id,
            Self::Class(class) => element.has_class(class),
            Self::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
            Self::Attr { name, value } => element.get_attr(name) == Some(value.as_str()),
            Self::AttrPrefix { name, prefix } => element
                .get_attr(name)
                .is_some_and(|v| v.starts_with(prefix.as_str())),
            Self::All(parts) => parts.iter().all(|s| s.matches(element)),
            Self::Any(parts) => parts.iter().any(|s| s.matches(element)),
        }
    }
}
