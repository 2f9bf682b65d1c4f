//! Key/value attributes attached to log records
//!
//! An [`Attr`] binds a key to an [`AttrValue`], which is either a scalar
//! (already rendered to a string) or a named group of child attributes.
//! Attribute lists are ordered; the order is the emission order.

use std::fmt;

/// Value of an attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Scalar(String),
    Group(Vec<Attr>),
}

impl AttrValue {
    /// True for an empty scalar or a group without children
    pub fn is_empty(&self) -> bool {
        match self {
            AttrValue::Scalar(s) => s.is_empty(),
            AttrValue::Group(attrs) => attrs.is_empty(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, AttrValue::Group(_))
    }
}

impl Default for AttrValue {
    fn default() -> Self {
        AttrValue::Scalar(String::new())
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Scalar(s) => f.write_str(s),
            AttrValue::Group(attrs) => {
                f.write_str("[")?;
                write_joined(f, attrs)?;
                f.write_str("]")
            }
        }
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Scalar(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Scalar(s.to_string())
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        AttrValue::Scalar(s.clone())
    }
}

impl From<Vec<Attr>> for AttrValue {
    fn from(attrs: Vec<Attr>) -> Self {
        AttrValue::Group(attrs)
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(v: $ty) -> Self {
                    AttrValue::Scalar(v.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char);

/// A single key-bound value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attr {
    pub key: String,
    pub value: AttrValue,
}

impl Attr {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a group attribute from its children
    pub fn group<K, I>(key: K, attrs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = Attr>,
    {
        Self {
            key: key.into(),
            value: AttrValue::Group(attrs.into_iter().collect()),
        }
    }

    /// The zero attribute: no key and no value. Formatters skip it.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Write non-zero attributes separated by single spaces
pub(crate) fn write_joined(f: &mut impl fmt::Write, attrs: &[Attr]) -> fmt::Result {
    let mut first = true;
    for attr in attrs.iter().filter(|a| !a.is_empty()) {
        if !first {
            f.write_char(' ')?;
        }
        write!(f, "{}", attr)?;
        first = false;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Attr::new("aaa", "bbb").to_string(), "aaa=bbb");
        assert_eq!(Attr::new("count", 42).to_string(), "count=42");
        assert_eq!(Attr::new("ok", true).to_string(), "ok=true");
    }

    #[test]
    fn test_group_display() {
        let attr = Attr::group(
            "group",
            vec![Attr::new("aaa", "bbb"), Attr::group("inner", vec![Attr::new("x", 1)])],
        );
        assert_eq!(attr.to_string(), "group=[aaa=bbb inner=[x=1]]");
    }

    #[test]
    fn test_group_skips_zero_children() {
        let attr = Attr::group(
            "g",
            vec![Attr::default(), Attr::new("a", 1), Attr::default(), Attr::new("b", 2)],
        );
        assert_eq!(attr.to_string(), "g=[a=1 b=2]");
    }

    #[test]
    fn test_zero_attribute() {
        assert!(Attr::default().is_empty());
        assert!(Attr::new("", "").is_empty());
        assert!(!Attr::new("key", "").is_empty());
        assert!(!Attr::new("", "value").is_empty());
    }

    #[test]
    fn test_group_from_vec() {
        let value: AttrValue = vec![Attr::new("a", "b")].into();
        assert!(value.is_group());
    }
}
