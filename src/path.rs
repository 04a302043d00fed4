//! Key path queries over a tree
//!
//! A path is a list of keys separated by dots, like `channel.item.title`.
//! Each key is looked up in the node reached by the previous keys. When a key
//! reaches a list, the rest of the path is applied to every item of the list
//! and the found values are collected into a new list, so
//! `items.v` on `{items: [{v: "1"}, {v: "2"}]}` gives `["1", "2"]`.
//!
//! A path which does not lead anywhere gives `None`: missing data is expected
//! in semi-structured documents and is not an error.
//!
//! The typed queries coerce the found value into the requested shape:
//!
//! |found      |[`string_at`]    |[`array_at`]         |[`node_at`]        |
//! |-----------|-----------------|---------------------|-------------------|
//! |text       |the text         |one-item list        |`{__text: text}`   |
//! |node       |its inner text   |one-item list        |the node           |
//! |list       |first item, as above|the list          |first item, as above|

use std::borrow::Cow;

use crate::node::{Node, Value, TEXT_KEY};

/// Separator of the keys in a path
pub const SEPARATOR: char = '.';

/// Returns the value found at `path`, as is
pub fn value_at<'a>(node: &'a Node, path: &str) -> Option<Cow<'a, Value>> {
    let mut keys = path.split(SEPARATOR);
    let first = keys.next()?;
    let mut current = Cow::Borrowed(node.get(first)?);
    for key in keys {
        current = match current {
            Cow::Borrowed(value) => lookup(value, key)?,
            Cow::Owned(value) => Cow::Owned(lookup(&value, key)?.into_owned()),
        };
    }
    Some(current)
}

/// Returns the text found at `path`
pub fn string_at<'a>(node: &'a Node, path: &str) -> Option<Cow<'a, str>> {
    match value_at(node, path)? {
        Cow::Borrowed(value) => text_of(value),
        Cow::Owned(value) => text_of(&value).map(|text| Cow::Owned(text.into_owned())),
    }
}

/// Returns the values found at `path` as a list
pub fn array_at<'a>(node: &'a Node, path: &str) -> Option<Cow<'a, [Value]>> {
    Some(match value_at(node, path)? {
        Cow::Borrowed(Value::List(items)) => Cow::Borrowed(items.as_slice()),
        Cow::Borrowed(value) => Cow::Borrowed(std::slice::from_ref(value)),
        Cow::Owned(Value::List(items)) => Cow::Owned(items),
        Cow::Owned(value) => Cow::Owned(vec![value]),
    })
}

/// Returns the node found at `path`
pub fn node_at<'a>(node: &'a Node, path: &str) -> Option<Cow<'a, Node>> {
    match value_at(node, path)? {
        Cow::Borrowed(value) => node_of(value),
        Cow::Owned(value) => node_of(&value).map(|node| Cow::Owned(node.into_owned())),
    }
}

/// Looks up `key` in a node, or in every item of a list
fn lookup<'a>(value: &'a Value, key: &str) -> Option<Cow<'a, Value>> {
    match value {
        Value::Node(node) => node.get(key).map(Cow::Borrowed),
        Value::Text(_) => None,
        Value::List(items) => {
            let mut found = Vec::new();
            for item in items {
                match lookup(item, key).map(Cow::into_owned) {
                    Some(Value::List(values)) => found.extend(values),
                    Some(value) => found.push(value),
                    None => {}
                }
            }
            if found.is_empty() {
                None
            } else {
                Some(Cow::Owned(Value::List(found)))
            }
        }
    }
}

fn text_of(value: &Value) -> Option<Cow<str>> {
    match value {
        Value::Text(text) => Some(Cow::Borrowed(text)),
        Value::Node(node) => node.inner_text(),
        Value::List(items) => match items.first()? {
            Value::List(_) => None,
            first => text_of(first),
        },
    }
}

fn node_of(value: &Value) -> Option<Cow<Node>> {
    match value {
        Value::Node(node) => Some(Cow::Borrowed(node)),
        Value::Text(text) => Some(Cow::Owned(Node::from([(TEXT_KEY, text.as_str())]))),
        Value::List(items) => match items.first()? {
            Value::List(_) => None,
            first => node_of(first),
        },
    }
}

impl Node {
    /// Returns the value found at `path`, see [`value_at`]
    #[inline]
    pub fn value_at(&self, path: &str) -> Option<Cow<Value>> {
        value_at(self, path)
    }

    /// Returns the text found at `path`, see [`string_at`]
    #[inline]
    pub fn string_at(&self, path: &str) -> Option<Cow<str>> {
        string_at(self, path)
    }

    /// Returns the values found at `path` as a list, see [`array_at`]
    #[inline]
    pub fn array_at(&self, path: &str) -> Option<Cow<[Value]>> {
        array_at(self, path)
    }

    /// Returns the node found at `path`, see [`node_at`]
    #[inline]
    pub fn node_at(&self, path: &str) -> Option<Cow<Node>> {
        node_at(self, path)
    }
}
