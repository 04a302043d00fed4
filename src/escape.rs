//! Manage xml character escapes
//!
//! Texts and attribute values are escaped and unescaped with the same rules
//! as the [`quick_xml`] reader applies when the document is read: the five
//! predefined entities and character references.
//!
//! ```
//! # use pretty_assertions::assert_eq;
//! use xml_dict::escape::{escape, unescape};
//!
//! assert_eq!(escape("<a & 'b'>"), "&lt;a &amp; &apos;b&apos;&gt;");
//! assert_eq!(unescape("&lt;a &amp; &#x62;&gt;").unwrap(), "<a & b>");
//! ```

pub use quick_xml::escape::{escape, unescape, EscapeError};
