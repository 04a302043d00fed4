//! Event-driven interface between an xml event source and a tree builder.
//!
//! The xml itself is tokenized by [`quick_xml::Reader`]. [`drive`] pulls events
//! from the reader, decodes names, unescapes text and attribute values, and
//! hands them to an [`EventHandler`] in document order.
//!
//! # Examples
//!
//! ```
//! use quick_xml::Reader;
//! use xml_dict::sax::{drive, EventHandler};
//! use xml_dict::Result;
//!
//! #[derive(Default)]
//! struct Counter {
//!     elements: usize,
//! }
//!
//! impl EventHandler for Counter {
//!     fn start_element(&mut self, _: &str, _: Vec<(String, String)>) -> Result<()> {
//!         self.elements += 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut counter = Counter::default();
//! drive(Reader::from_str("<root><a/><b/><c/></root>"), &mut counter).unwrap();
//! assert_eq!(counter.elements, 4);
//! ```

use std::io::BufRead;

use log::{debug, trace};
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::errors::{Error, Result};

/// A handler of xml events.
///
/// All methods have default implementations that ignore the event, so only
/// the interesting ones need to be overridden.
#[allow(unused_variables)]
pub trait EventHandler {
    /// Called when an element start tag is encountered. `attributes` holds
    /// `(qualified name, unescaped value)` pairs in document order.
    fn start_element(&mut self, name: &str, attributes: Vec<(String, String)>) -> Result<()> {
        Ok(())
    }

    /// Called when an element end tag is encountered, or after
    /// [`start_element`](Self::start_element) for a self-closing tag.
    fn end_element(&mut self, name: &str) -> Result<()> {
        Ok(())
    }

    /// Called for unescaped character data. Text of one element can be
    /// reported in several calls.
    fn characters(&mut self, text: &str) {}

    /// Called for the content of a CDATA section. Treated as character data
    /// by default.
    fn cdata(&mut self, text: &str) {
        self.characters(text)
    }

    /// Called for the content of a comment
    fn comment(&mut self, text: &str) {}

    /// Called once when the event source or the handler itself fails.
    /// No other method is called afterwards.
    fn parse_error(&mut self, error: &Error) {}
}

#[inline]
fn xml<E: Into<quick_xml::Error>>(error: E) -> Error {
    Error::Xml(error.into())
}

/// Applies the reader configuration expected by [`drive`]:
/// self-closing tags are expanded, end tag names are checked and
/// text is not trimmed (trimming is the business of the handler).
pub fn configure<R>(reader: &mut Reader<R>) {
    let config = reader.config_mut();
    config.expand_empty_elements = true;
    config.check_end_names = true;
    config.trim_text(false);
}

/// Reads all events from `reader` and dispatches them to `handler`.
///
/// Returns at the end of input. The first error stops reading, is reported
/// to [`EventHandler::parse_error`] and returned unchanged.
pub fn drive<R, H>(mut reader: Reader<R>, handler: &mut H) -> Result<()>
where
    R: BufRead,
    H: EventHandler + ?Sized,
{
    configure(&mut reader);
    let mut buf = Vec::new();
    loop {
        let result = match reader.read_event_into(&mut buf) {
            Ok(event) => dispatch(reader.decoder(), event, handler),
            Err(e) => Err(Error::Xml(e)),
        };
        match result {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(error) => {
                debug!(
                    "stopped at position {}: {}",
                    reader.buffer_position(),
                    error
                );
                handler.parse_error(&error);
                return Err(error);
            }
        }
        buf.clear();
    }
}

/// Asynchronous version of [`drive`] reading from a [`tokio::io::AsyncBufRead`].
#[cfg(feature = "async-tokio")]
pub async fn drive_async<R, H>(mut reader: Reader<R>, handler: &mut H) -> Result<()>
where
    R: tokio::io::AsyncBufRead + Unpin,
    H: EventHandler + ?Sized,
{
    configure(&mut reader);
    let mut buf = Vec::new();
    loop {
        let result = match reader.read_event_into_async(&mut buf).await {
            Ok(event) => dispatch(reader.decoder(), event, handler),
            Err(e) => Err(Error::Xml(e)),
        };
        match result {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(error) => {
                debug!(
                    "stopped at position {}: {}",
                    reader.buffer_position(),
                    error
                );
                handler.parse_error(&error);
                return Err(error);
            }
        }
        buf.clear();
    }
}

fn start_element<H>(decoder: Decoder, start: &BytesStart, handler: &mut H) -> Result<String>
where
    H: EventHandler + ?Sized,
{
    let qname = start.name();
    let name = decoder.decode(qname.as_ref()).map_err(xml)?;
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(xml)?;
        let key = decoder.decode(attr.key.as_ref()).map_err(xml)?;
        let value = attr.decode_and_unescape_value(decoder).map_err(xml)?;
        attributes.push((key.into_owned(), value.into_owned()));
    }
    handler.start_element(&name, attributes)?;
    Ok(name.into_owned())
}

/// Dispatches one event, returns `true` at the end of input
fn dispatch<H>(decoder: Decoder, event: Event, handler: &mut H) -> Result<bool>
where
    H: EventHandler + ?Sized,
{
    match event {
        Event::Start(e) => {
            start_element(decoder, &e, handler)?;
        }
        // not produced with `expand_empty_elements`, kept for readers configured otherwise
        Event::Empty(e) => {
            let name = start_element(decoder, &e, handler)?;
            handler.end_element(&name)?;
        }
        Event::End(e) => {
            let qname = e.name();
            let name = decoder.decode(qname.as_ref()).map_err(xml)?;
            handler.end_element(&name)?;
        }
        Event::Text(e) => {
            let text = e.unescape().map_err(xml)?;
            handler.characters(&text);
        }
        Event::CData(e) => {
            let text = decoder.decode(&e).map_err(xml)?;
            handler.cdata(&text);
        }
        Event::Comment(e) => {
            let text = decoder.decode(&e).map_err(xml)?;
            handler.comment(&text);
        }
        Event::Eof => return Ok(true),
        e => trace!("ignoring {:?}", e),
    }
    Ok(false)
}
