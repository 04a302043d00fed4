use pretty_assertions::assert_eq;
use xml_dict::node::TEXT_KEY;
use xml_dict::{from_str, Node, Value};

const FEED: &str = r#"
<feed>
    <title>Updates</title>
    <entry id="1">
        <title>First</title>
        <tag>a</tag>
        <tag>b</tag>
    </entry>
    <entry id="2">
        <title>Second</title>
        <tag>c</tag>
    </entry>
    <entry id="3">
        <link href="http://example.com/"/>
    </entry>
</feed>"#;

#[test]
fn single_values() {
    let feed = from_str(FEED).unwrap();

    assert_eq!(feed.string_at("title").as_deref(), Some("Updates"));
    assert_eq!(feed.value_at("title").as_deref(), Some(&Value::from("Updates")));
    assert_eq!(
        feed.node_at("title").as_deref(),
        Some(&Node::from([(TEXT_KEY, "Updates")]))
    );
    assert_eq!(
        feed.array_at("title").as_deref(),
        Some(&[Value::from("Updates")][..])
    );
}

#[test]
fn lists_are_traversed() {
    let feed = from_str(FEED).unwrap();

    assert_eq!(
        feed.array_at("entry._id").as_deref(),
        Some(&[Value::from("1"), Value::from("2"), Value::from("3")][..])
    );
    assert_eq!(
        feed.array_at("entry.title").as_deref(),
        Some(&[Value::from("First"), Value::from("Second")][..])
    );
    assert_eq!(
        feed.array_at("entry.tag").as_deref(),
        Some(&[Value::from("a"), Value::from("b"), Value::from("c")][..])
    );
    assert_eq!(
        feed.string_at("entry.link._href").as_deref(),
        Some("http://example.com/")
    );
}

#[test]
fn first_item_of_list() {
    let feed = from_str(FEED).unwrap();

    assert_eq!(feed.string_at("entry.title").as_deref(), Some("First"));
    assert_eq!(feed.string_at("entry._id").as_deref(), Some("1"));

    let entry = feed.node_at("entry").unwrap();
    assert_eq!(entry.get("_id"), Some(&Value::from("1")));
}

#[test]
fn missing_paths() {
    let feed = from_str(FEED).unwrap();

    assert_eq!(feed.value_at("subtitle"), None);
    assert_eq!(feed.value_at("title.text"), None);
    assert_eq!(feed.value_at("entry.author"), None);
    assert_eq!(feed.string_at("entry."), None);
    assert_eq!(feed.array_at(".title"), None);
    assert_eq!(feed.node_at("entry.link.missing"), None);
}

#[test]
fn free_functions() {
    let feed = from_str(FEED).unwrap();

    assert_eq!(
        xml_dict::path::string_at(&feed, "entry.title"),
        feed.string_at("entry.title")
    );
    assert_eq!(
        xml_dict::path::value_at(&feed, "entry.tag"),
        feed.value_at("entry.tag")
    );
}
