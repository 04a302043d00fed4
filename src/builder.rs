//! A module to build a [`Node`] tree from xml events
//!
//! [`TreeBuilder`] is an [`EventHandler`]: it keeps a stack of open elements
//! and the text accumulated since the last element boundary. An element is
//! attached to its parent as soon as it starts, so that sibling elements with
//! the same name are promoted to a list in document order. When the element
//! ends, the slot it occupies in the parent is rewritten with the final value:
//! the collapsed text, the structured node, or nothing if the element is
//! stripped.

use std::io::BufRead;

use log::{debug, trace};
use quick_xml::Reader;

use crate::config::{AttributesMode, Config, NodeNameMode};
use crate::errors::{Error, Result};
use crate::node::{Node, Value, ATTRIBUTES_KEY, ATTRIBUTE_PREFIX, NAME_KEY, TEXT_KEY};
use crate::sax::{self, EventHandler};

/// Position of an open element in its parent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    /// The element is the root, it has no parent
    Root,
    /// The element is the value of the key with its name
    Key,
    /// The element is the item at the given index in the list under the key
    /// with its name
    Item(usize),
}

#[derive(Debug)]
struct OpenElement {
    name: String,
    node: Node,
    slot: Slot,
}

/// Builds a tree from xml events.
///
/// One builder is used for exactly one document. It owns a copy of its
/// [`Config`], so several builders created from the same configuration can
/// work on different threads.
///
/// # Examples
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use quick_xml::Reader;
/// use xml_dict::{Config, TreeBuilder, Value};
///
/// let builder = TreeBuilder::new(Config::default());
/// let root = builder.build(Reader::from_str("<a><b>1</b><b>2</b></a>")).unwrap();
///
/// assert_eq!(root.get("b"), Some(&Value::List(vec!["1".into(), "2".into()])));
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    config: Config,
    /// Open elements, the innermost last
    stack: Vec<OpenElement>,
    /// Text accumulated since the last element boundary
    text: Option<String>,
    /// The root element, once it is closed
    root: Option<(String, Node)>,
}

impl TreeBuilder {
    /// Creates a builder which will use the given configuration
    pub fn new(config: Config) -> TreeBuilder {
        TreeBuilder {
            config,
            stack: Vec::new(),
            text: None,
            root: None,
        }
    }

    /// Returns the configuration of the builder
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consumes all events of `reader` and returns the tree
    pub fn build<R: BufRead>(mut self, reader: Reader<R>) -> Result<Node> {
        sax::drive(reader, &mut self)?;
        self.finish()
    }

    /// Asynchronous version of [`build`](Self::build)
    #[cfg(feature = "async-tokio")]
    pub async fn build_async<R>(mut self, reader: Reader<R>) -> Result<Node>
    where
        R: tokio::io::AsyncBufRead + Unpin,
    {
        sax::drive_async(reader, &mut self).await?;
        self.finish()
    }

    /// Returns the tree after the end of input was reached.
    ///
    /// Fails if some elements are still open, or if no element was seen.
    pub fn finish(self) -> Result<Node> {
        if let Some(open) = self.stack.last() {
            return Err(Error::UnexpectedEof(open.name.clone()));
        }
        let (name, root) = self.root.ok_or(Error::NoRootElement)?;
        if self.config.wrap_root_node {
            Ok(Node::from([(name, root)]))
        } else {
            Ok(root)
        }
    }

    /// Stores the accumulated text into the innermost open element
    fn end_text(&mut self) {
        let text = match self.text.take() {
            Some(text) => text,
            None => return,
        };
        let text = if self.config.trim_whitespace {
            let trimmed = text.trim();
            if trimmed.len() == text.len() {
                text
            } else {
                trimmed.to_string()
            }
        } else {
            text
        };
        if text.is_empty() {
            return;
        }
        match self.stack.last_mut() {
            Some(top) => top.node.push_text(text),
            None => trace!("ignoring text outside of the root element"),
        }
    }

    /// Creates the node of a starting element with its name and attributes
    fn new_node(&self, name: &str, attributes: Vec<(String, String)>, is_root: bool) -> Node {
        let mut node = Node::new();
        match self.config.node_name_mode {
            NodeNameMode::RootOnly if is_root => {
                node.insert(NAME_KEY, name);
            }
            NodeNameMode::Always => {
                node.insert(NAME_KEY, name);
            }
            NodeNameMode::RootOnly | NodeNameMode::Never => {}
        }
        if attributes.is_empty() {
            return node;
        }
        match self.config.attributes_mode {
            AttributesMode::Prefixed => {
                for (key, value) in attributes {
                    node.insert(format!("{}{}", ATTRIBUTE_PREFIX, key), value);
                }
            }
            AttributesMode::Dictionary => {
                node.insert(ATTRIBUTES_KEY, attributes.into_iter().collect::<Node>());
            }
            AttributesMode::Unprefixed => {
                for (key, value) in attributes {
                    node.insert(key, value);
                }
            }
            AttributesMode::Discard => {}
        }
        node
    }

    /// Final value of a closed element, `None` if it should be removed
    fn close(&self, mut node: Node) -> Option<Value> {
        if node.has_attributes() || node.has_child_elements() || node.has_comments() {
            return Some(Value::Node(node));
        }
        let text = node.inner_text().map(|text| text.into_owned());
        match text {
            Some(text) if self.config.collapse_text_nodes => Some(Value::Text(text)),
            Some(_) => Some(Value::Node(node)),
            None if self.config.strip_empty_nodes => None,
            None if self.config.collapse_text_nodes => {
                node.insert(TEXT_KEY, "");
                Some(Value::Node(node))
            }
            None => Some(Value::Node(node)),
        }
    }
}

impl EventHandler for TreeBuilder {
    fn start_element(&mut self, name: &str, attributes: Vec<(String, String)>) -> Result<()> {
        self.end_text();

        let is_root = self.stack.is_empty();
        if is_root && self.root.is_some() {
            return Err(Error::ExtraRootElement(name.to_string()));
        }
        let node = self.new_node(name, attributes, is_root);

        let always_use_arrays = self.config.always_use_arrays;
        let slot = match self.stack.last_mut() {
            None => Slot::Root,
            Some(parent) => {
                // an empty node holds the slot until the element is closed
                let placeholder = Value::Node(Node::new());
                if always_use_arrays && !parent.node.contains_key(name) {
                    parent.node.insert(name, Value::List(vec![placeholder]));
                    Slot::Item(0)
                } else {
                    match parent.node.push_to(name, placeholder) {
                        Some(index) => Slot::Item(index),
                        None => Slot::Key,
                    }
                }
            }
        };
        trace!("<{}> opened at depth {} in {:?}", name, self.stack.len(), slot);

        self.stack.push(OpenElement {
            name: name.to_string(),
            node,
            slot,
        });
        Ok(())
    }

    fn end_element(&mut self, name: &str) -> Result<()> {
        self.end_text();

        let OpenElement {
            name: open_name,
            node,
            slot,
        } = match self.stack.pop() {
            Some(open) if open.name == name => open,
            Some(open) => {
                return Err(Error::EndEventMismatch {
                    expected: open.name,
                    found: name.to_string(),
                })
            }
            None => {
                return Err(Error::EndEventMismatch {
                    expected: String::new(),
                    found: name.to_string(),
                })
            }
        };

        if slot == Slot::Root {
            debug!("root element <{}> closed", open_name);
            self.root = Some((open_name, node));
            return Ok(());
        }

        let value = self.close(node);
        let parent = match self.stack.last_mut() {
            Some(parent) => &mut parent.node,
            None => unreachable!("only the root element has no parent"),
        };
        match (slot, value) {
            (Slot::Key, Some(value)) => {
                parent.insert(open_name, value);
            }
            (Slot::Key, None) => {
                parent.remove(&open_name);
            }
            (Slot::Item(index), value) => {
                if let Some(Value::List(items)) = parent.get_mut(&open_name) {
                    match value {
                        Some(value) => {
                            if let Some(item) = items.get_mut(index) {
                                *item = value;
                            }
                        }
                        None => {
                            // the element is always the last item: later siblings
                            // cannot start before it is closed
                            items.truncate(index);
                            if items.is_empty() {
                                parent.remove(&open_name);
                            } else if items.len() == 1 && !self.config.always_use_arrays {
                                // a single sibling is left, demote it to a bare value
                                if let Some(item) = items.pop() {
                                    parent.insert(open_name, item);
                                }
                            }
                        }
                    }
                }
            }
            (Slot::Root, _) => {}
        }
        Ok(())
    }

    fn characters(&mut self, text: &str) {
        self.text.get_or_insert_with(String::new).push_str(text);
    }

    fn comment(&mut self, text: &str) {
        if !self.config.preserve_comments {
            return;
        }
        match self.stack.last_mut() {
            Some(top) => top.node.push_comment(text.to_string()),
            None => trace!("ignoring comment outside of the root element"),
        }
    }

    fn parse_error(&mut self, error: &Error) {
        debug!(
            "dropping partial tree with {} open elements: {}",
            self.stack.len(),
            error
        );
        self.stack.clear();
        self.text = None;
        self.root = None;
    }
}
