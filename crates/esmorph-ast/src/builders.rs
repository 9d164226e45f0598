//! Builder helpers for node construction.
//!
//! Synthesized literals carry no `raw` text; printers derive it from `value`.

use crate::node::{LiteralValue, Node, TemplateElement, VariableKind};

impl Node {
    /// Create an identifier node
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    /// Create a private identifier node (`#name`)
    pub fn private_identifier(name: impl Into<String>) -> Self {
        Self::PrivateIdentifier { name: name.into() }
    }

    /// Create a literal node
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal {
            value: value.into(),
            raw: None,
            regex: None,
            bigint: None,
        }
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::literal(LiteralValue::String(s.into()))
    }

    /// Create a numeric literal
    pub fn number(n: f64) -> Self {
        Self::literal(LiteralValue::Number(n))
    }

    /// Create a binary expression
    pub fn binary(left: Self, op: impl Into<String>, right: Self) -> Self {
        Self::BinaryExpression {
            operator: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a non-optional member access
    pub fn member(object: Self, property: Self, computed: bool) -> Self {
        Self::MemberExpression {
            object: Box::new(object),
            property: Box::new(property),
            computed,
            optional: false,
        }
    }

    /// Create a template literal from its text segments and substitutions.
    ///
    /// Marks the last segment as the tail.
    pub fn template<S: Into<String>>(
        quasis: impl IntoIterator<Item = S>,
        expressions: Vec<Self>,
    ) -> Self {
        let mut quasis: Vec<TemplateElement> = quasis
            .into_iter()
            .map(|text| TemplateElement::new(text, false))
            .collect();
        if let Some(last) = quasis.last_mut() {
            last.tail = true;
        }
        Self::TemplateLiteral {
            quasis,
            expressions,
        }
    }

    /// Create a tagged template expression
    pub fn tagged_template(tag: Self, quasi: Self) -> Self {
        Self::TaggedTemplateExpression {
            tag: Box::new(tag),
            quasi: Box::new(quasi),
        }
    }

    /// Create a call expression
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::CallExpression {
            callee: Box::new(callee),
            arguments: args,
            optional: false,
        }
    }

    /// Create an assignment expression
    pub fn assign(target: Self, value: Self) -> Self {
        Self::AssignmentExpression {
            operator: "=".to_string(),
            left: Box::new(target),
            right: Box::new(value),
        }
    }

    /// Create a single-declarator variable declaration
    pub fn var_decl(kind: VariableKind, name: impl Into<String>, init: Option<Self>) -> Self {
        Self::VariableDeclaration {
            declarations: vec![Self::VariableDeclarator {
                id: Box::new(Self::identifier(name)),
                init: init.map(Box::new),
            }],
            kind,
        }
    }

    /// Create an expression statement
    pub fn expression_statement(expr: Self) -> Self {
        Self::ExpressionStatement {
            expression: Box::new(expr),
        }
    }

    /// Create a program root
    pub fn program(body: Vec<Self>) -> Self {
        Self::Program {
            body,
            source_type: None,
        }
    }
}
