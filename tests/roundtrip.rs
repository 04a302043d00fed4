//! A tree rendered to xml and built again with the same config gives the same tree

use pretty_assertions::assert_eq;
use xml_dict::{
    from_str, from_str_with_config, to_string, AttributesMode, Config, Node, NodeNameMode, Value,
};

fn roundtrip(config: &Config, xml: &str) -> Node {
    let tree = from_str_with_config(xml, config).unwrap();
    let rendered = to_string(&tree);
    let again = from_str_with_config(&rendered, config)
        .unwrap_or_else(|e| panic!("cannot build rendered xml {:?}: {}", rendered, e));
    assert_eq!(again, tree, "rendered as {:?}", rendered);
    assert_same_key_order(&again, &tree);
    tree
}

/// `Node` equality ignores key order, so compare keys of every node explicitly
fn assert_same_key_order(actual: &Node, expected: &Node) {
    assert_eq!(
        actual.keys().collect::<Vec<_>>(),
        expected.keys().collect::<Vec<_>>()
    );
    for (key, value) in expected {
        if let Some(other) = actual.get(key) {
            assert_same_value_order(other, value);
        }
    }
}

fn assert_same_value_order(actual: &Value, expected: &Value) {
    match (actual, expected) {
        (Value::Node(actual), Value::Node(expected)) => assert_same_key_order(actual, expected),
        (Value::List(actual), Value::List(expected)) => {
            for (actual, expected) in actual.iter().zip(expected) {
                assert_same_value_order(actual, expected);
            }
        }
        _ => {}
    }
}

const DOCUMENT: &str = r#"
<library name="city &amp; county">
    <!-- opening hours are in local time -->
    <book id="1" lang="en">
        <title>Rust &lt;in&gt; action</title>
        <author>A. Author</author>
        <author>B. Author</author>
    </book>
    <book id="2">
        <title><![CDATA[Tags & "quotes"]]></title>
        <summary>first line
second line</summary>
    </book>
    <closed/>
    opened daily
</library>"#;

#[test]
fn default_config() {
    roundtrip(&Config::default(), DOCUMENT);
}

#[test]
fn preserved_comments() {
    let mut config = Config::default();
    config.preserve_comments(true);

    let tree = roundtrip(&config, DOCUMENT);
    assert_eq!(
        tree.comments().collect::<Vec<_>>(),
        vec![" opening hours are in local time "]
    );
}

#[test]
fn wrapped_root() {
    let mut config = Config::default();
    config.wrap_root_node(true);

    let tree = roundtrip(&config, DOCUMENT);
    assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["library"]);
}

#[test]
fn dictionary_attributes() {
    let mut config = Config::default();
    config.attributes_mode(AttributesMode::Dictionary);

    roundtrip(&config, DOCUMENT);
}

#[test]
fn arrays_and_names() {
    let mut config = Config::default();
    config
        .always_use_arrays(true)
        .node_name_mode(NodeNameMode::Always);

    roundtrip(&config, DOCUMENT);
}

/// Text of several segments is rendered joined and read back as one segment
#[test]
fn mixed_content_is_joined() {
    let config = Config::default();
    let tree = from_str_with_config("<a>one<b>x</b>two</a>", &config).unwrap();
    let rendered = to_string(&tree);
    assert_eq!(rendered, "<a><b>x</b>\none\ntwo</a>");

    let again = from_str_with_config(&rendered, &config).unwrap();
    assert_eq!(again.inner_text(), tree.inner_text());
}

/// Removing an empty repeated element leaves a bare value, as if it never repeated
#[test]
fn stripped_repeated_element() {
    let tree = roundtrip(&Config::default(), "<a><b>1</b><b/></a>");
    assert_eq!(tree.get("b"), Some(&Value::from("1")));
    assert_eq!(to_string(&tree), "<a><b>1</b></a>");
}

#[test]
fn stripped_repeated_element_keeps_order() {
    let tree = roundtrip(&Config::default(), "<a><b>1</b><c>2</c><b></b><d>3</d></a>");
    assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["__name", "b", "c", "d"]);
}

#[test]
fn key_order_is_compared() {
    let tree = from_str("<a><b>1</b><c>2</c></a>").unwrap();
    let reordered = from_str("<a><c>2</c><b>1</b></a>").unwrap();
    assert_eq!(tree, reordered);

    let result = std::panic::catch_unwind(|| assert_same_key_order(&reordered, &tree));
    assert!(result.is_err());
}
