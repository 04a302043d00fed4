//! The tree produced by the [`TreeBuilder`](crate::TreeBuilder).
//!
//! A [`Node`] is an ordered mapping from keys to [`Value`]s. Keys are either
//! names of child elements, attribute keys or one of the reserved keys below.
//! Reserved keys start with two underscores so they never collide with the
//! attributes stored with the [`ATTRIBUTE_PREFIX`] in the default mode.

use std::borrow::Cow;

use indexmap::map::{IndexMap, Iter};

use crate::writer;

/// Key under which attributes are stored in [`AttributesMode::Dictionary`] mode
///
/// [`AttributesMode::Dictionary`]: crate::AttributesMode::Dictionary
pub const ATTRIBUTES_KEY: &str = "__attributes";
/// Key under which comments are stored when they are preserved
pub const COMMENTS_KEY: &str = "__comments";
/// Key under which the own text of an element is stored
pub const TEXT_KEY: &str = "__text";
/// Key under which the original element name is stored
pub const NAME_KEY: &str = "__name";
/// Prefix of the attribute keys in [`AttributesMode::Prefixed`] mode
///
/// [`AttributesMode::Prefixed`]: crate::AttributesMode::Prefixed
pub const ATTRIBUTE_PREFIX: &str = "_";

const RESERVED_KEYS: [&str; 4] = [ATTRIBUTES_KEY, COMMENTS_KEY, TEXT_KEY, NAME_KEY];

/// Returns `true` if the key is one of the reserved keys
#[inline]
fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// A value stored under a key of a [`Node`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(untagged))]
pub enum Value {
    /// Collapsed text of an element, an attribute value, a text segment or a comment
    Text(String),
    /// Repeated elements with the same name, several text segments or comments.
    ///
    /// Items are either [`Value::Text`] or [`Value::Node`], lists are never nested.
    List(Vec<Value>),
    /// An element with structure
    Node(Node),
}

impl Value {
    /// Returns the text if this value is a [`Value::Text`]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the node if this value is a [`Value::Node`]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the items if this value is a [`Value::List`]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the text of the value: the text itself, the inner text of
    /// a node, or the texts of list items joined with a line separator.
    pub fn inner_text(&self) -> Option<Cow<str>> {
        match self {
            Value::Text(text) => Some(Cow::Borrowed(text)),
            Value::Node(node) => node.inner_text(),
            Value::List(items) => {
                let texts: Vec<_> = items.iter().filter_map(Value::inner_text).collect();
                match texts.len() {
                    0 => None,
                    1 => texts.into_iter().next(),
                    _ => Some(Cow::Owned(texts.join("\n"))),
                }
            }
        }
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(text: &str) -> Value {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(text: String) -> Value {
        Value::Text(text)
    }
}

impl From<Node> for Value {
    #[inline]
    fn from(node: Node) -> Value {
        Value::Node(node)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(items: Vec<Value>) -> Value {
        Value::List(items)
    }
}

/// A dictionary representing one xml element, or the whole document.
///
/// Keys keep their insertion order, which follows the document order of
/// attributes and child elements. Equality does not depend on that order.
///
/// # Examples
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use xml_dict::Node;
///
/// let root = Node::from_xml_str(r#"<feed lang="en"><title>News</title></feed>"#).unwrap();
///
/// assert_eq!(root.node_name(), Some("feed"));
/// assert_eq!(root.attributes(), Some(vec![("lang", "en")]));
/// assert_eq!(root.get("title").and_then(|v| v.as_str()), Some("News"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(transparent))]
pub struct Node {
    entries: IndexMap<String, Value>,
}

impl Node {
    /// Creates an empty node
    pub fn new() -> Node {
        Node::default()
    }

    /// Builds a tree from an xml string using the default [`Config`](crate::Config)
    pub fn from_xml_str(xml: &str) -> crate::Result<Node> {
        crate::from_str(xml)
    }

    /// Number of keys
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the node has no keys
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the value stored under `key`
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets the mutable value stored under `key`
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns `true` if the node has a value under `key`
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores a value under `key`, returning the previous one.
    ///
    /// A new key is added after all existing keys, a replaced key keeps its position.
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes `key` keeping the order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Iterates over all keys and values in insertion order
    #[inline]
    pub fn iter(&self) -> Iter<String, Value> {
        self.entries.iter()
    }

    /// Iterates over all keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns attributes of the element in document order.
    ///
    /// Attributes are read from the [`ATTRIBUTES_KEY`] if it is present,
    /// otherwise from keys starting with the [`ATTRIBUTE_PREFIX`] (with the
    /// prefix stripped). Returns `None` if the element has no attributes.
    ///
    /// Attributes stored without prefix cannot be told apart from child
    /// elements and are reported by [`Self::child_elements`] instead.
    pub fn attributes(&self) -> Option<Vec<(&str, &str)>> {
        let attributes: Vec<_> = match self.get(ATTRIBUTES_KEY) {
            Some(Value::Node(dict)) => dict
                .iter()
                .filter_map(|(k, v)| Some((k.as_str(), v.as_str()?)))
                .collect(),
            _ => self
                .iter()
                .filter(|(k, _)| !is_reserved(k))
                .filter_map(|(k, v)| Some((k.strip_prefix(ATTRIBUTE_PREFIX)?, v.as_str()?)))
                .collect(),
        };
        if attributes.is_empty() {
            None
        } else {
            Some(attributes)
        }
    }

    /// Returns `true` if the element has at least one attribute
    pub(crate) fn has_attributes(&self) -> bool {
        match self.get(ATTRIBUTES_KEY) {
            Some(Value::Node(dict)) => !dict.is_empty(),
            _ => self
                .keys()
                .any(|k| !is_reserved(k) && k.starts_with(ATTRIBUTE_PREFIX)),
        }
    }

    /// Iterates over the child elements in document order of their first
    /// occurrence: all keys except reserved keys and prefixed attribute keys.
    pub fn child_elements(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.iter()
            .filter(|(k, _)| !is_reserved(k) && !k.starts_with(ATTRIBUTE_PREFIX))
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` if the element has at least one child element
    pub(crate) fn has_child_elements(&self) -> bool {
        self.child_elements().next().is_some()
    }

    /// Iterates over the preserved comments of the element
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        let comments = match self.get(COMMENTS_KEY) {
            Some(Value::List(items)) => items.as_slice(),
            Some(value) => std::slice::from_ref(value),
            None => &[][..],
        };
        comments.iter().filter_map(Value::as_str)
    }

    /// Returns `true` if the element has preserved comments
    pub(crate) fn has_comments(&self) -> bool {
        self.contains_key(COMMENTS_KEY)
    }

    /// Original name of the element, when it was stored
    pub fn node_name(&self) -> Option<&str> {
        self.get(NAME_KEY).and_then(Value::as_str)
    }

    /// Own text of the element. Several text segments are joined with a line
    /// separator.
    pub fn inner_text(&self) -> Option<Cow<str>> {
        match self.get(TEXT_KEY)? {
            Value::Text(text) => Some(Cow::Borrowed(text)),
            Value::List(items) => {
                let segments: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                Some(Cow::Owned(segments.join("\n")))
            }
            Value::Node(_) => None,
        }
    }

    /// Renders comments, child elements and text of the element as xml,
    /// without the element tag itself.
    pub fn inner_xml(&self) -> String {
        let mut xml = String::new();
        writer::write_inner_xml(&mut xml, self);
        xml
    }

    /// Renders the node as an xml document, see [`to_string`](crate::to_string)
    pub fn to_xml_string(&self) -> String {
        writer::to_string(self)
    }

    /// Appends a text segment under the [`TEXT_KEY`]
    pub(crate) fn push_text(&mut self, text: String) {
        self.push_to(TEXT_KEY, Value::Text(text));
    }

    /// Appends a comment under the [`COMMENTS_KEY`]
    pub(crate) fn push_comment(&mut self, comment: String) {
        match self.entries.get_mut(COMMENTS_KEY) {
            Some(Value::List(items)) => items.push(Value::Text(comment)),
            _ => {
                self.entries
                    .insert(COMMENTS_KEY.to_string(), Value::List(vec![Value::Text(comment)]));
            }
        }
    }

    /// Stores `value` under `key`, promoting an existing value to a list.
    /// Returns the position of the value in the list, if it was placed in one.
    pub(crate) fn push_to(&mut self, key: &str, value: Value) -> Option<usize> {
        match self.entries.get_mut(key) {
            Some(Value::List(items)) => {
                items.push(value);
                Some(items.len() - 1)
            }
            Some(existing) => {
                let first = std::mem::replace(existing, Value::List(Vec::new()));
                *existing = Value::List(vec![first, value]);
                Some(1)
            }
            None => {
                self.entries.insert(key.to_string(), value);
                None
            }
        }
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Node {
        Node {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Node {
    fn from(entries: [(K, V); N]) -> Node {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prefixed_attributes() {
        let node = Node::from([
            (NAME_KEY, Value::from("a")),
            ("_x", Value::from("1")),
            ("b", Value::from("text")),
            ("_y", Value::from("2")),
        ]);
        assert_eq!(node.attributes(), Some(vec![("x", "1"), ("y", "2")]));
        assert!(node.has_attributes());
        assert_eq!(
            node.child_elements().map(|(k, _)| k).collect::<Vec<_>>(),
            vec!["b"]
        );
    }

    #[test]
    fn dictionary_attributes() {
        let node = Node::from([(
            ATTRIBUTES_KEY,
            Value::from(Node::from([("x", "1"), ("_y", "2")])),
        )]);
        assert_eq!(node.attributes(), Some(vec![("x", "1"), ("_y", "2")]));
        assert!(node.has_attributes());
        assert!(!node.has_child_elements());
    }

    #[test]
    fn reserved_keys_are_not_attributes() {
        let node = Node::from([(TEXT_KEY, "t"), (NAME_KEY, "n")]);
        assert_eq!(node.attributes(), None);
        assert!(!node.has_attributes());
        assert!(!node.has_child_elements());
    }

    #[test]
    fn inner_text_joins_segments() {
        let mut node = Node::new();
        assert_eq!(node.inner_text(), None);

        node.push_text("first".to_string());
        assert_eq!(node.inner_text().as_deref(), Some("first"));

        node.push_text("second".to_string());
        assert_eq!(node.inner_text().as_deref(), Some("first\nsecond"));
    }

    #[test]
    fn comments() {
        let mut node = Node::new();
        assert_eq!(node.comments().count(), 0);
        node.push_comment("one".to_string());
        node.push_comment("two".to_string());
        assert_eq!(node.comments().collect::<Vec<_>>(), vec!["one", "two"]);
        assert!(node.has_comments());
    }

    #[test]
    fn push_to_promotes() {
        let mut node = Node::new();
        assert_eq!(node.push_to("b", Value::from("1")), None);
        assert_eq!(node.push_to("b", Value::from("2")), Some(1));
        assert_eq!(node.push_to("b", Value::from("3")), Some(2));
        assert_eq!(
            node.get("b"),
            Some(&Value::List(vec!["1".into(), "2".into(), "3".into()]))
        );
    }

    #[test]
    fn remove_keeps_order() {
        let mut node = Node::from([("a", "1"), ("b", "2"), ("c", "3")]);
        node.remove("b");
        assert_eq!(node.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }
}
