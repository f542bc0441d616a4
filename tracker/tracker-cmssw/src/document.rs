//! In-memory document tree.
//!
//! A [`DocNode`] is a named node with ordered `(name, value)` attributes,
//! optional text and ordered children. Builders only ever append; numeric
//! values are stored already formatted.

/// DDL namespace.
pub const DDL_NAMESPACE: &str = "http://www.cern.ch/cms/DDL";
/// XML schema-instance namespace as referenced by DDL files.
pub const XSI_NAMESPACE: &str = "http://www.cern.ch/www.w3.org/2001/XMLSchema-instance";
/// Schema location relative to a CMSSW release.
pub const DDL_SCHEMA_LOCATION: &str =
    "http://www.cern.ch/cms/DDL ../../../DetectorDescription/Schema/DDLSchema.xsd";

/// One node of a document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocNode {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<DocNode>,
}

impl DocNode {
    /// Create a node without attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a `DDDefinition` root carrying the DDL namespace declarations.
    #[must_use]
    pub fn dd_definition() -> Self {
        let mut root = Self::new("DDDefinition");
        root.attr("xmlns", DDL_NAMESPACE)
            .attr("xmlns:xsi", XSI_NAMESPACE)
            .attr("xsi:schemaLocation", DDL_SCHEMA_LOCATION);
        root
    }

    /// Append an attribute.
    pub fn attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child and return it.
    pub fn child(&mut self, name: impl Into<String>) -> &mut DocNode {
        self.children.push(DocNode::new(name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append a child carrying a single `name` attribute, the common reference form.
    pub fn named_child(&mut self, node: &str, name: impl Into<String>) -> &mut DocNode {
        self.child(node).attr("name", name)
    }

    /// Node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of the first attribute called `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text content.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[DocNode] {
        &self.children
    }

    /// Children called `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DocNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First child called `name`.
    #[must_use]
    pub fn first_child(&self, name: &str) -> Option<&DocNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Total number of nodes in this subtree, including this one.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DocNode::node_count).sum::<usize>()
    }
}
