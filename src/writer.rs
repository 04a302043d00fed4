//! A module to render a [`Node`] tree back to xml
//!
//! Rendering never fails and never modifies the tree. Attribute values and
//! texts are escaped with [`escape`]. Sibling elements and the parts of an
//! element content are separated by a line break, so a rendered tree built
//! again with the default [`Config`](crate::Config) gives the same tree.

use crate::escape::escape;
use crate::node::{Node, Value};

/// Name of the outermost element when the tree does not store one
pub const DEFAULT_ROOT_NAME: &str = "root";

/// Renders a tree as an xml string.
///
/// When the node has exactly one key and no stored name (for example a tree
/// built with the `wrap_root_node` option of [`Config`]), only its content
/// is rendered.
/// Otherwise the node itself is rendered as an element named after its
/// [`NAME_KEY`], or [`DEFAULT_ROOT_NAME`] if it has none.
///
/// # Examples
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use xml_dict::{to_string, Node, Value};
///
/// let node = Node::from([
///     ("__name", Value::from("a")),
///     ("_x", Value::from("1 < 2")),
///     ("b", Value::List(vec!["one".into(), "two".into()])),
/// ]);
///
/// assert_eq!(
///     to_string(&node),
///     "<a x=\"1 &lt; 2\"><b>one</b>\n<b>two</b></a>"
/// );
/// ```
///
/// [`Config`]: crate::Config
/// [`NAME_KEY`]: crate::node::NAME_KEY
pub fn to_string(node: &Node) -> String {
    let mut xml = String::new();
    if node.len() == 1 && node.node_name().is_none() {
        write_inner_xml(&mut xml, node);
    } else {
        let name = node.node_name().unwrap_or(DEFAULT_ROOT_NAME);
        write_element(&mut xml, name, node);
    }
    xml
}

/// Renders `value` as one or several elements named `name`
pub fn write_value(xml: &mut String, name: &str, value: &Value) {
    match value {
        Value::Text(text) => write_wrapped(xml, name, &escape(text.as_str())),
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    xml.push('\n');
                }
                write_value(xml, name, item);
            }
        }
        Value::Node(node) => write_element(xml, name, node),
    }
}

/// Renders comments, child elements and text of `node`
pub(crate) fn write_inner_xml(xml: &mut String, node: &Node) {
    let mut parts = Vec::new();
    for comment in node.comments() {
        parts.push(format!("<!--{}-->", escape(comment)));
    }
    for (name, value) in node.child_elements() {
        let mut part = String::new();
        write_value(&mut part, name, value);
        parts.push(part);
    }
    if let Some(text) = node.inner_text() {
        parts.push(escape(&*text).into_owned());
    }
    xml.push_str(&parts.join("\n"));
}

fn write_element(xml: &mut String, name: &str, node: &Node) {
    xml.push('<');
    xml.push_str(name);
    if let Some(attributes) = node.attributes() {
        for (key, value) in attributes {
            xml.push(' ');
            xml.push_str(&escape(key));
            xml.push_str("=\"");
            xml.push_str(&escape(value));
            xml.push('"');
        }
    }

    let mut inner = String::new();
    write_inner_xml(&mut inner, node);
    if inner.is_empty() {
        xml.push_str("/>");
    } else {
        xml.push('>');
        xml.push_str(&inner);
        xml.push_str("</");
        xml.push_str(name);
        xml.push('>');
    }
}

#[inline]
fn write_wrapped(xml: &mut String, name: &str, content: &str) {
    xml.push('<');
    xml.push_str(name);
    xml.push('>');
    xml.push_str(content);
    xml.push_str("</");
    xml.push_str(name);
    xml.push('>');
}
