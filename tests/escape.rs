use pretty_assertions::assert_eq;
use std::borrow::Cow;
use xml_dict::escape::{escape, unescape, EscapeError};

#[test]
fn test_escape() {
    let unchanged = escape("test");
    assert_eq!(unchanged, Cow::Borrowed("test"));
    assert!(matches!(unchanged, Cow::Borrowed(_)));

    assert_eq!(escape("<test>"), "&lt;test&gt;");
    assert_eq!(escape("\"a\"bc"), "&quot;a&quot;bc");
    assert_eq!(escape("'a'bc"), "&apos;a&apos;bc");
    assert_eq!(escape("a&b"), "a&amp;b");
    assert_eq!(escape("&amp;"), "&amp;amp;");
    assert_eq!(escape("привет & мир"), "привет &amp; мир");
}

#[test]
fn test_unescape() {
    let unchanged = unescape("test");
    assert!(matches!(unchanged, Ok(Cow::Borrowed("test"))));

    assert_eq!(unescape("&lt;&amp;test&apos;&quot;\r&gt;").unwrap(), "<&test'\"\r>");
    assert_eq!(unescape("&#x30;").unwrap(), "0");
    assert_eq!(unescape("&#49;").unwrap(), "1");
    assert_eq!(unescape("&#x1F600;").unwrap(), "😀");
}

#[test]
fn test_unescape_errors() {
    assert!(matches!(
        unescape("&lt;&foo;"),
        Err(EscapeError::UnrecognizedEntity(_, name)) if name == "foo"
    ));
    assert!(matches!(
        unescape("a &amp"),
        Err(EscapeError::UnterminatedEntity(_))
    ));
    for invalid in ["&#0;", "&#xD800;", "&#x;", "&#+65;", "&#x+41;", "&#-65;"] {
        assert!(
            matches!(unescape(invalid), Err(EscapeError::InvalidCharRef(_))),
            "{} should be rejected",
            invalid
        );
    }
}

/// Entities found in documents are rejected by the builder the same way
#[test]
fn signed_char_ref_in_document() {
    assert!(xml_dict::from_str("<a>&#+65;</a>").is_err());
}

#[test]
fn unescape_reverts_escape() {
    for raw in ["", "plain", "<a href=\"x\">it's & more</a>", "&amp;&lt;", "ünïcödé <>"] {
        assert_eq!(unescape(&escape(raw)).unwrap(), raw);
    }
}
