//! Configurable conversion of xml documents into ordered dictionary trees.
//!
//! A document is read with [`quick_xml`] and turned into a [`Node`]: an
//! ordered mapping where child elements are stored under their names,
//! attributes under prefixed keys and text under a reserved key. Elements that
//! only contain text are collapsed into that text, empty elements are dropped
//! and repeated elements become lists. The tree can be queried with dotted key
//! paths and rendered back to xml.
//!
//! ## Reading
//!
//! ```
//! # use pretty_assertions::assert_eq;
//! use xml_dict::{from_str, Value};
//!
//! let xml = r#"
//!     <rss version="2.0">
//!         <channel>
//!             <title>News</title>
//!             <item><title>First</title></item>
//!             <item><title>Second</title><empty/></item>
//!         </channel>
//!     </rss>"#;
//!
//! let root = from_str(xml).unwrap();
//!
//! assert_eq!(root.node_name(), Some("rss"));
//! assert_eq!(root.get("_version"), Some(&Value::from("2.0")));
//! assert_eq!(root.string_at("channel.title").as_deref(), Some("News"));
//!
//! let titles = root.array_at("channel.item.title").unwrap();
//! assert_eq!(&*titles, &[Value::from("First"), Value::from("Second")]);
//! ```
//!
//! ## Configuration
//!
//! Every build takes its own copy of a [`Config`]:
//!
//! ```
//! # use pretty_assertions::assert_eq;
//! use xml_dict::{from_str_with_config, AttributesMode, Config, Node, Value};
//!
//! let mut config = Config::default();
//! config
//!     .attributes_mode(AttributesMode::Dictionary)
//!     .always_use_arrays(true);
//!
//! let root = from_str_with_config(r#"<a><b x="1"/></a>"#, &config).unwrap();
//!
//! let b = Node::from([("__attributes", Node::from([("x", "1")]))]);
//! assert_eq!(root.get("b"), Some(&Value::List(vec![b.into()])));
//! ```
//!
//! ## Writing
//!
//! ```
//! # use pretty_assertions::assert_eq;
//! use xml_dict::{from_str, to_string};
//!
//! let root = from_str(r#"<a x="1"><b>one</b><b>two</b></a>"#).unwrap();
//! assert_eq!(to_string(&root), "<a x=\"1\"><b>one</b>\n<b>two</b></a>");
//! ```
//!
//! # Features
//!
//! `xml-dict` supports these features that can be enabled in your `Cargo.toml`:
#![cfg_attr(
    feature = "document-features",
    cfg_attr(doc, doc = ::document_features::document_features!(
        feature_label = "<a id=\"{feature}\" href=\"#{feature}\"><strong><code>{feature}</code></strong></a>"
    ))
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
// Enable feature requirements in the docs from 1.57
// See https://stackoverflow.com/questions/61417452
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod builder;
pub mod config;
pub mod errors;
pub mod escape;
pub mod node;
pub mod path;
pub mod sax;
pub mod writer;

use std::io::BufRead;
use std::path::Path;

use quick_xml::Reader;

// reexports
pub use crate::builder::TreeBuilder;
pub use crate::config::{AttributesMode, Config, NodeNameMode};
pub use crate::errors::{Error, Result};
pub use crate::node::{Node, Value};
pub use crate::writer::to_string;

/// Builds a tree from an xml string with the default [`Config`]
pub fn from_str(xml: &str) -> Result<Node> {
    from_str_with_config(xml, &Config::DEFAULT)
}

/// Builds a tree from an xml string
pub fn from_str_with_config(xml: &str, config: &Config) -> Result<Node> {
    TreeBuilder::new(*config).build(Reader::from_str(xml))
}

/// Builds a tree from a buffered reader with the default [`Config`]
pub fn from_reader<R: BufRead>(reader: R) -> Result<Node> {
    from_reader_with_config(reader, &Config::DEFAULT)
}

/// Builds a tree from a buffered reader.
///
/// With the `encoding` feature the encoding is detected from the BOM or the
/// xml declaration, otherwise the input must be UTF-8.
pub fn from_reader_with_config<R: BufRead>(reader: R, config: &Config) -> Result<Node> {
    TreeBuilder::new(*config).build(Reader::from_reader(reader))
}

/// Builds a tree from the content of a file
pub fn from_file<P: AsRef<Path>>(path: P, config: &Config) -> Result<Node> {
    let reader = Reader::from_file(path)?;
    TreeBuilder::new(*config).build(reader)
}

/// Builds a tree from an asynchronous buffered reader
#[cfg(feature = "async-tokio")]
pub async fn from_reader_async<R>(reader: R, config: &Config) -> Result<Node>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    TreeBuilder::new(*config)
        .build_async(Reader::from_reader(reader))
        .await
}

/// Builds a tree from bytes in an encoding known by the caller.
///
/// A BOM at the start of `bytes` takes precedence over `encoding`. The
/// encoding declared in the document itself is ignored.
#[cfg(feature = "encoding")]
pub fn from_bytes_with_encoding(
    bytes: &[u8],
    encoding: &'static encoding_rs::Encoding,
    config: &Config,
) -> Result<Node> {
    let (xml, actual, malformed) = encoding.decode(bytes);
    if malformed {
        return Err(Error::Encoding(actual));
    }
    from_str_with_config(&xml, config)
}
