//! Error management module

use std::fmt;

/// The error type used by this crate.
///
/// Any error aborts the build that produced it: the partially built tree is
/// dropped and never handed to the caller.
#[derive(Debug)]
pub enum Error {
    /// The xml event source rejected the document: syntax errors, I/O errors,
    /// invalid attributes, undecodable text or unknown entity references.
    /// The error of the source is kept unchanged.
    Xml(quick_xml::Error),
    /// End event does not close the innermost open element
    EndEventMismatch {
        /// Expected end event
        expected: String,
        /// Found end event
        found: String,
    },
    /// Input ended while the element with the given name was still open
    UnexpectedEof(String),
    /// An element with the given name was found after the root element was closed
    ExtraRootElement(String),
    /// Input ended before any element was found
    NoRootElement,
    /// Input bytes are not valid in the encoding the caller declared
    #[cfg(feature = "encoding")]
    Encoding(&'static encoding_rs::Encoding),
}

impl From<quick_xml::Error> for Error {
    /// Creates a new `Error::Xml` from the given error
    #[inline]
    fn from(error: quick_xml::Error) -> Error {
        Error::Xml(error)
    }
}

/// A specialized `Result` type where the error is hard-wired to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Xml(quick_xml::Error::Io(e)) => write!(f, "I/O error: {}", e),
            Error::Xml(e) => write!(f, "malformed xml: {}", e),
            Error::EndEventMismatch { expected, found } => {
                write!(f, "Expecting </{}> found </{}>", expected, found)
            }
            Error::UnexpectedEof(e) => {
                write!(f, "Unexpected EOF: element <{}> is not closed", e)
            }
            Error::ExtraRootElement(e) => write!(
                f,
                "Element <{}> found after the root element, document can have only one root",
                e
            ),
            Error::NoRootElement => write!(f, "Document does not contain a root element"),
            #[cfg(feature = "encoding")]
            Error::Encoding(e) => write!(f, "Input is not valid {}", e.name()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Xml(e) => Some(e),
            _ => None,
        }
    }
}
