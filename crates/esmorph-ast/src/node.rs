//! ESTree-shaped syntax tree nodes.
//!
//! `Node` mirrors the ESTree JSON layout closely enough that a tree produced by any
//! ESTree parser (acorn, espree, ...) can be deserialized directly and handed to the
//! rewrite stage. The `type` field selects the variant; location fields such as
//! `start`, `end` and `loc` are ignored on the dedicated variants.
//!
//! Kinds without a dedicated variant (`ThisExpression`, `FunctionDeclaration`,
//! `IfStatement`, ...) land in [`Node::Other`]. Their fields are kept verbatim,
//! except that nested nodes are parsed into `Node`s so a walk reaches every
//! member access and template literal in the program.
//!
//! Parents own their children exclusively (`Box<Node>` / `Vec<Node>`), so a
//! replacement written into a slot drops the old subtree.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::node_kind::NodeKind;

/// A syntax tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    // =========================================================================
    // Program and statements
    // =========================================================================
    /// Root of a parsed script or module.
    Program {
        body: Vec<Node>,
        /// `"script"` or `"module"`
        #[serde(rename = "sourceType", default, skip_serializing_if = "Option::is_none")]
        source_type: Option<String>,
    },

    /// `expr;`
    ExpressionStatement { expression: Box<Node> },

    /// `{ body }`
    BlockStatement { body: Vec<Node> },

    /// `return argument;`
    ReturnStatement {
        #[serde(default)]
        argument: Option<Box<Node>>,
    },

    /// `var a = 1, b;`
    VariableDeclaration {
        declarations: Vec<Node>,
        kind: VariableKind,
    },

    /// Single `id = init` entry of a `VariableDeclaration`.
    VariableDeclarator {
        id: Box<Node>,
        #[serde(default)]
        init: Option<Box<Node>>,
    },

    // =========================================================================
    // Names and literals
    // =========================================================================
    /// `foo`
    Identifier { name: String },

    /// `#foo` in `this.#foo`
    PrivateIdentifier { name: String },

    /// `'a'`, `1`, `true`, `null`, `/re/g`
    Literal {
        value: LiteralValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        regex: Option<RegexLiteral>,
        /// Decimal digits of a `BigInt` literal (`value` is `null` then).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bigint: Option<String>,
    },

    /// `` `a${b}c` ``
    ///
    /// `quasis.len() == expressions.len() + 1`: text segments strictly interleave
    /// with substitutions, starting and ending with (possibly empty) text.
    TemplateLiteral {
        quasis: Vec<TemplateElement>,
        expressions: Vec<Node>,
    },

    /// `` tag`a${b}` ``; `quasi` is always a `TemplateLiteral`.
    TaggedTemplateExpression { tag: Box<Node>, quasi: Box<Node> },

    // =========================================================================
    // Expressions
    // =========================================================================
    /// `object.property` when `computed` is false, `object[property]` otherwise.
    ///
    /// A non-computed access always has an `Identifier` (or `PrivateIdentifier`)
    /// property naming the field.
    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        computed: bool,
        #[serde(default)]
        optional: bool,
    },

    /// `left operator right`
    BinaryExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// `left = right`, `left += right`, ...
    AssignmentExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// `callee(arguments)`
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
        #[serde(default)]
        optional: bool,
    },

    /// `[a, , b]`; holes are `None`.
    ArrayExpression { elements: Vec<Option<Node>> },

    /// `test ? consequent : alternate`
    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },

    /// Any kind without a dedicated variant. Tried only after every tagged
    /// variant failed.
    #[serde(untagged)]
    Other(OtherNode),
}

/// Node of a kind the rewrite rules never inspect.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherNode {
    /// ESTree `type` name
    pub type_name: String,
    /// Remaining fields, in input order.
    pub fields: Vec<(String, OtherField)>,
}

/// One field of an [`OtherNode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OtherField {
    /// An object with a string `type`.
    Node(Node),
    /// A non-empty array of nodes and `null` holes (`params`, `body`, `elements`).
    Nodes(Vec<Option<Node>>),
    /// Anything else: flags, names, operators, locations.
    Value(Value),
}

impl OtherNode {
    pub fn new(type_name: impl Into<String>, fields: Vec<(String, OtherField)>) -> Self {
        OtherNode {
            type_name: type_name.into(),
            fields,
        }
    }

    /// Field named `key`, if present.
    pub fn field(&self, key: &str) -> Option<&OtherField> {
        self.fields
            .iter()
            .find_map(|(name, field)| (name == key).then_some(field))
    }
}

fn is_node_object(value: &Value) -> bool {
    value.get("type").is_some_and(Value::is_string)
}

impl OtherField {
    fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        if is_node_object(&value) {
            return serde_json::from_value(value).map(Self::Node);
        }
        match value {
            Value::Array(items)
                if items.iter().any(is_node_object)
                    && items.iter().all(|item| item.is_null() || is_node_object(item)) =>
            {
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::Null => Ok(None),
                        item => serde_json::from_value(item).map(Some),
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Self::Nodes)
            }
            value => Ok(Self::Value(value)),
        }
    }
}

impl<'de> Deserialize<'de> for OtherNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = serde_json::Map::<String, Value>::deserialize(deserializer)?;

        let mut type_name = None;
        let mut fields = Vec::with_capacity(object.len());
        for (key, value) in object {
            if key == "type" {
                type_name = value.as_str().map(str::to_owned);
                continue;
            }
            let field = OtherField::from_json(value).map_err(D::Error::custom)?;
            fields.push((key, field));
        }

        let type_name = type_name.ok_or_else(|| D::Error::missing_field("type"))?;
        // A known kind reaching this point had malformed fields
        if NodeKind::from_name(&type_name).is_some() {
            return Err(D::Error::custom(format_args!("invalid `{type_name}` node")));
        }
        Ok(OtherNode { type_name, fields })
    }
}

impl Serialize for OtherNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("type", &self.type_name)?;
        for (key, field) in &self.fields {
            map.serialize_entry(key, field)?;
        }
        map.end()
    }
}

/// Value carried by a `Literal` node.
///
/// Regular expression literals carry an opaque value (ESTree serializes the
/// runtime `RegExp` as `{}` or `null`) alongside the `regex` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Opaque(Value),
}

impl LiteralValue {
    /// String payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// `regex` payload of a regular expression literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexLiteral {
    pub pattern: String,
    pub flags: String,
}

/// `var` / `let` / `const`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

/// Static text segment of a template literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct TemplateElement {
    pub value: TemplateElementValue,
    #[serde(default)]
    pub tail: bool,
}

/// Raw and escape-decoded text of a template segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateElementValue {
    pub raw: String,
    /// `None` only for invalid escapes inside tagged templates.
    #[serde(default)]
    pub cooked: Option<String>,
}

impl TemplateElement {
    /// Segment whose raw and cooked text are identical.
    pub fn new(text: impl Into<String>, tail: bool) -> Self {
        let text = text.into();
        TemplateElement {
            value: TemplateElementValue {
                raw: text.clone(),
                cooked: Some(text),
            },
            tail,
        }
    }

    /// Escape-decoded text of the segment.
    pub fn cooked(&self) -> &str {
        self.value.cooked.as_deref().unwrap_or_default()
    }
}
