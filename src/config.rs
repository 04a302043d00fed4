//! Configuration of the tree building

/// Where attributes of an element are stored in its [`Node`](crate::Node).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serialize", derive(serde::Deserialize, serde::Serialize))]
pub enum AttributesMode {
    /// Each attribute is stored as a key of the element with the
    /// [`ATTRIBUTE_PREFIX`](crate::node::ATTRIBUTE_PREFIX) prepended, so
    /// `<a x="1"/>` becomes `{_x: "1"}`.
    #[default]
    Prefixed,
    /// All attributes are stored as a dictionary under the
    /// [`ATTRIBUTES_KEY`](crate::node::ATTRIBUTES_KEY).
    Dictionary,
    /// Each attribute is stored as a key of the element as is. Attributes
    /// can collide with child elements of the same name.
    Unprefixed,
    /// Attributes are dropped.
    Discard,
}

/// Which nodes carry the original element name under the
/// [`NAME_KEY`](crate::node::NAME_KEY).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serialize", derive(serde::Deserialize, serde::Serialize))]
pub enum NodeNameMode {
    /// Only the root element
    #[default]
    RootOnly,
    /// Every element that remains a node
    Always,
    /// No element
    Never,
}

/// A struct that holds a configuration of the tree building.
///
/// Each [`TreeBuilder`] owns a copy of the configuration, so one value can be
/// shared as a template by any number of concurrent builds.
///
/// # Example
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use xml_dict::{AttributesMode, Config};
///
/// let mut config = Config::default();
/// config.attributes_mode(AttributesMode::Dictionary).preserve_comments(true);
///
/// assert_eq!(config.attributes_mode, AttributesMode::Dictionary);
/// assert!(config.collapse_text_nodes);
/// ```
///
/// [`TreeBuilder`]: crate::TreeBuilder
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serialize", derive(serde::Deserialize, serde::Serialize))]
#[non_exhaustive]
pub struct Config {
    /// Whether an element without attributes, child elements and comments
    /// that contains text is replaced by that text.
    ///
    /// When set to `true`, `<a><b>hello</b></a>` becomes `{b: "hello"}`,
    /// otherwise it becomes `{b: {__text: "hello"}}`.
    ///
    /// Default: `true`
    pub collapse_text_nodes: bool,

    /// Whether an element without attributes, child elements, comments and
    /// text is removed from its parent.
    ///
    /// When this is `false` and `collapse_text_nodes` is `true`, such an
    /// element is kept with an empty text: `<a><b/></a>` becomes
    /// `{b: {__text: ""}}`.
    ///
    /// Default: `true`
    pub strip_empty_nodes: bool,

    /// Whether leading and trailing whitespace is removed from text before
    /// it is stored. Text that is empty after trimming is not stored.
    ///
    /// Default: `true`
    pub trim_whitespace: bool,

    /// Whether every child element is stored in a list, even if it does not
    /// repeat.
    ///
    /// Default: `false`
    pub always_use_arrays: bool,

    /// Whether comments are stored under the
    /// [`COMMENTS_KEY`](crate::node::COMMENTS_KEY) of the enclosing element.
    ///
    /// Default: `false`
    pub preserve_comments: bool,

    /// Whether the root node is wrapped into another node, under a key equal
    /// to the root element name.
    ///
    /// Default: `false`
    pub wrap_root_node: bool,

    /// Where attributes are stored.
    ///
    /// Default: [`AttributesMode::Prefixed`]
    pub attributes_mode: AttributesMode,

    /// Which nodes carry their element name.
    ///
    /// Default: [`NodeNameMode::RootOnly`]
    pub node_name_mode: NodeNameMode,
}

impl Config {
    /// The default configuration
    pub const DEFAULT: Config = Config {
        collapse_text_nodes: true,
        strip_empty_nodes: true,
        trim_whitespace: true,
        always_use_arrays: false,
        preserve_comments: false,
        wrap_root_node: false,
        attributes_mode: AttributesMode::Prefixed,
        node_name_mode: NodeNameMode::RootOnly,
    };

    /// Sets the `collapse_text_nodes` field
    pub fn collapse_text_nodes(&mut self, value: bool) -> &mut Self {
        self.collapse_text_nodes = value;
        self
    }

    /// Sets the `strip_empty_nodes` field
    pub fn strip_empty_nodes(&mut self, value: bool) -> &mut Self {
        self.strip_empty_nodes = value;
        self
    }

    /// Sets the `trim_whitespace` field
    pub fn trim_whitespace(&mut self, value: bool) -> &mut Self {
        self.trim_whitespace = value;
        self
    }

    /// Sets the `always_use_arrays` field
    pub fn always_use_arrays(&mut self, value: bool) -> &mut Self {
        self.always_use_arrays = value;
        self
    }

    /// Sets the `preserve_comments` field
    pub fn preserve_comments(&mut self, value: bool) -> &mut Self {
        self.preserve_comments = value;
        self
    }

    /// Sets the `wrap_root_node` field
    pub fn wrap_root_node(&mut self, value: bool) -> &mut Self {
        self.wrap_root_node = value;
        self
    }

    /// Sets the `attributes_mode` field
    pub fn attributes_mode(&mut self, mode: AttributesMode) -> &mut Self {
        self.attributes_mode = mode;
        self
    }

    /// Sets the `node_name_mode` field
    pub fn node_name_mode(&mut self, mode: NodeNameMode) -> &mut Self {
        self.node_name_mode = mode;
        self
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Config::DEFAULT
    }
}
