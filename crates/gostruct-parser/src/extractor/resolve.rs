//! Type resolver: renders a type node as canonical text.
//!
//! The node kind is classified into the closed [`TypeShape`] set first, so
//! every supported shape has exactly one rendering rule and everything else
//! falls into [`TypeShape::Unsupported`].

use ast_grep_core::{Doc, Node};

use super::helpers::{expect_field, is_separator, line_of};
use crate::error::ParserError;

/// Rendered type text plus the outermost wrapper flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub text: String,
    pub is_slice: bool,
    pub is_pointer: bool,
}

impl TypeRef {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_slice: false,
            is_pointer: false,
        }
    }

    fn slice(text: String) -> Self {
        Self {
            text,
            is_slice: true,
            is_pointer: false,
        }
    }

    /// `*T` over this type. The pointer wrapper replaces the inner flags.
    #[must_use]
    pub fn pointer_to(self) -> Self {
        Self {
            text: format!("*{}", self.text),
            is_slice: false,
            is_pointer: true,
        }
    }
}

const FUNC_PLACEHOLDER: &str = "/*func*/";
const STRUCT_PLACEHOLDER: &str = "/*struct*/";
const INTERFACE_PLACEHOLDER: &str = "interface{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Receive,
}

impl ChanDir {
    const fn prefix(self) -> &'static str {
        match self {
            Self::Both => "chan ",
            Self::Send => "chan<- ",
            Self::Receive => "<-chan ",
        }
    }
}

/// Syntactic kinds of type expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    Named,
    Qualified,
    Generic,
    Array,
    Slice,
    Map,
    Pointer,
    Channel,
    Function,
    StructLiteral,
    InterfaceLiteral,
    Variadic,
    Parenthesized,
    Unsupported,
}

impl TypeShape {
    #[must_use]
    pub fn classify(kind: &str) -> Self {
        match kind {
            "type_identifier" => Self::Named,
            "qualified_type" => Self::Qualified,
            "generic_type" => Self::Generic,
            "array_type" => Self::Array,
            "slice_type" => Self::Slice,
            "map_type" => Self::Map,
            "pointer_type" => Self::Pointer,
            "channel_type" => Self::Channel,
            "function_type" => Self::Function,
            "struct_type" => Self::StructLiteral,
            "interface_type" => Self::InterfaceLiteral,
            "variadic_parameter_declaration" => Self::Variadic,
            "parenthesized_type" => Self::Parenthesized,
            _ => Self::Unsupported,
        }
    }
}

/// Resolve a type node to its canonical text and outermost flags.
///
/// # Errors
/// `MalformedArrayLength` when an array bound is not an integer literal,
/// `UnsupportedTypeShape` for kinds outside [`TypeShape`].
pub fn resolve<D: Doc>(node: &Node<D>) -> Result<TypeRef, ParserError> {
    let kind = node.kind();
    match TypeShape::classify(&kind) {
        TypeShape::Named => Ok(TypeRef::plain(node.text())),
        TypeShape::Qualified => {
            let package = expect_field(node, "package")?;
            let name = expect_field(node, "name")?;
            Ok(TypeRef::plain(format!("{}.{}", package.text(), name.text())))
        }
        TypeShape::Generic => {
            let base = resolve(&expect_field(node, "type")?)?;
            let args = expect_field(node, "type_arguments")?;
            Ok(TypeRef::plain(format!(
                "{}[{}]",
                base.text,
                type_arguments(&args)?.join(", ")
            )))
        }
        TypeShape::Array => {
            let length = expect_field(node, "length")?;
            if length.kind().as_ref() != "int_literal" {
                return Err(ParserError::MalformedArrayLength {
                    text: node.text().to_string(),
                    line: line_of(node),
                });
            }
            let element = resolve(&expect_field(node, "element")?)?;
            Ok(TypeRef::slice(format!("[{}]{}", length.text(), element.text)))
        }
        TypeShape::Slice => {
            let element = resolve(&expect_field(node, "element")?)?;
            Ok(TypeRef::slice(format!("[]{}", element.text)))
        }
        TypeShape::Map => {
            let key = resolve(&expect_field(node, "key")?)?;
            let value = resolve(&expect_field(node, "value")?)?;
            Ok(TypeRef::plain(format!("map[{}]{}", key.text, value.text)))
        }
        TypeShape::Pointer => Ok(resolve(&inner_type(node)?)?.pointer_to()),
        TypeShape::Channel => {
            let value = resolve(&expect_field(node, "value")?)?;
            Ok(TypeRef::plain(format!(
                "{}{}",
                channel_direction(node).prefix(),
                value.text
            )))
        }
        TypeShape::Function => Ok(TypeRef::plain(FUNC_PLACEHOLDER)),
        TypeShape::StructLiteral => Ok(TypeRef::plain(STRUCT_PLACEHOLDER)),
        TypeShape::InterfaceLiteral => Ok(TypeRef::plain(INTERFACE_PLACEHOLDER)),
        TypeShape::Variadic => {
            let element = resolve(&expect_field(node, "type")?)?;
            Ok(TypeRef::plain(format!("...{}", element.text)))
        }
        TypeShape::Parenthesized => resolve(&inner_type(node)?),
        TypeShape::Unsupported => Err(ParserError::UnsupportedTypeShape {
            kind: kind.to_string(),
            text: node.text().to_string(),
            line: line_of(node),
        }),
    }
}

/// Direction from the token layout: `<-chan T`, `chan<- T` or `chan T`.
fn channel_direction<D: Doc>(node: &Node<D>) -> ChanDir {
    let mut tokens = node.children().map(|c| c.kind().to_string());
    match (tokens.next().as_deref(), tokens.next().as_deref()) {
        (Some("<-"), _) => ChanDir::Receive,
        (Some("chan"), Some("<-")) => ChanDir::Send,
        _ => ChanDir::Both,
    }
}

/// The single type child of a wrapper without a named field (`*T`, `(T)`).
fn inner_type<'r, D: Doc>(node: &Node<'r, D>) -> Result<Node<'r, D>, ParserError> {
    node.children()
        .find(|c| {
            let kind = c.kind();
            !matches!(kind.as_ref(), "*" | "(" | ")" | "comment")
        })
        .ok_or_else(|| ParserError::MalformedDeclaration {
            line: line_of(node),
            reason: format!("`{}` node has no inner type", node.kind()),
        })
}

/// Render a `type_arguments` list. Type-set elements (`A | B`) keep their
/// union syntax.
fn type_arguments<D: Doc>(node: &Node<D>) -> Result<Vec<String>, ParserError> {
    let mut rendered = Vec::new();
    for arg in node.children() {
        let kind = arg.kind();
        if is_separator(&kind) {
            continue;
        }
        if kind.as_ref() == "type_elem" {
            let members = arg
                .children()
                .filter(|c| c.kind().as_ref() != "|")
                .map(|c| resolve(&c).map(|t| t.text))
                .collect::<Result<Vec<_>, _>>()?;
            rendered.push(members.join(" | "));
        } else {
            rendered.push(resolve(&arg)?.text);
        }
    }
    Ok(rendered)
}
