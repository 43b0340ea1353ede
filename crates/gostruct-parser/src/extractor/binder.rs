//! Declaration binder: turns the top-level declarations of one file into
//! records.
//!
//! Methods are collected separately keyed by their receiver text; binding
//! them to structs happens in the assembler once every file of the package
//! has been processed.

use ast_grep_core::{Doc, Node};

use super::ExtractOptions;
use super::docs::{leading_docs, trailing_comment};
use super::helpers::{
    children_of_kind, declared_names, expect_field, is_separator, line_of, unquote,
};
use super::resolve::resolve;
use crate::error::ParserError;
use crate::types::{
    Constant, Field, Function, Interface, Method, Param, Struct, Variable, render_signature,
};

/// Records bound from one or more files, each list in discovery order.
#[derive(Debug, Default)]
pub(super) struct FileDeclarations {
    pub imports: Vec<String>,
    pub structs: Vec<Struct>,
    pub interfaces: Vec<Interface>,
    pub functions: Vec<Function>,
    /// Methods not yet attached to a struct.
    pub methods: Vec<Method>,
    pub variables: Vec<Variable>,
    pub constants: Vec<Constant>,
}

impl FileDeclarations {
    /// Append everything from `other` after the records already held.
    pub(super) fn absorb(&mut self, other: Self) {
        self.imports.extend(other.imports);
        self.structs.extend(other.structs);
        self.interfaces.extend(other.interfaces);
        self.functions.extend(other.functions);
        self.methods.extend(other.methods);
        self.variables.extend(other.variables);
        self.constants.extend(other.constants);
    }
}

/// Bind every top-level declaration under a `source_file` root.
///
/// # Errors
/// Propagates the first type resolution or shape failure.
pub(super) fn bind_file<D: Doc>(
    root: &Node<D>,
    options: &ExtractOptions,
) -> Result<FileDeclarations, ParserError> {
    let mut decls = FileDeclarations::default();
    for node in root.children() {
        match node.kind().as_ref() {
            "import_declaration" => decls.imports.extend(process_import_declaration(&node)),
            "type_declaration" => process_type_declaration(&node, &mut decls)?,
            "function_declaration" => decls.functions.push(process_function(&node, options)?),
            "method_declaration" => decls.methods.push(process_method(&node, options)?),
            "const_declaration" => decls.constants.extend(process_const_declaration(&node)),
            "var_declaration" => decls.variables.extend(process_var_declaration(&node)?),
            _ => {}
        }
    }
    Ok(decls)
}

/// A spec's own doc group, or the enclosing declaration's when it has none.
fn spec_docs<D: Doc>(spec: &Node<D>, decl_docs: &[String]) -> Vec<String> {
    let own = leading_docs(spec);
    if own.is_empty() {
        decl_docs.to_vec()
    } else {
        own
    }
}

// ── import_declaration ────────────────────────────────────────────

fn process_import_declaration<D: Doc>(node: &Node<D>) -> Vec<String> {
    let mut specs = children_of_kind(node, "import_spec");
    for list in children_of_kind(node, "import_spec_list") {
        specs.extend(children_of_kind(&list, "import_spec"));
    }
    specs
        .iter()
        .filter_map(|spec| spec.field("path"))
        .map(|path| unquote(&path.text()))
        .collect()
}

// ── type_declaration ──────────────────────────────────────────────

fn process_type_declaration<D: Doc>(
    node: &Node<D>,
    decls: &mut FileDeclarations,
) -> Result<(), ParserError> {
    let specs: Vec<_> = node
        .children()
        .filter(|c| matches!(c.kind().as_ref(), "type_spec" | "type_alias"))
        .collect();
    if specs.is_empty() {
        return Err(ParserError::MalformedDeclaration {
            line: line_of(node),
            reason: "type declaration has no type spec".to_string(),
        });
    }

    let decl_docs = leading_docs(node);
    for spec in &specs {
        let name = expect_field(spec, "name")?.text().to_string();
        let underlying = expect_field(spec, "type")?;
        match underlying.kind().as_ref() {
            "struct_type" => decls.structs.push(Struct {
                fields: process_struct_fields(&underlying)?,
                methods: Vec::new(),
                docs: spec_docs(spec, &decl_docs),
                name,
            }),
            "interface_type" => decls.interfaces.push(Interface {
                methods: process_interface_methods(&underlying)?,
                docs: spec_docs(spec, &decl_docs),
                name,
            }),
            other => tracing::trace!(name = %name, kind = %other, "skipping non-record type"),
        }
    }
    Ok(())
}

fn process_struct_fields<D: Doc>(struct_type: &Node<D>) -> Result<Vec<Field>, ParserError> {
    let Some(list) = struct_type
        .children()
        .find(|c| c.kind().as_ref() == "field_declaration_list")
    else {
        return Ok(Vec::new());
    };

    let mut fields = Vec::new();
    for decl in children_of_kind(&list, "field_declaration") {
        fields.extend(process_field_declaration(&decl)?);
    }
    Ok(fields)
}

/// One `field_declaration` yields a field per declared name, or a single
/// unnamed field when the member is embedded.
fn process_field_declaration<D: Doc>(node: &Node<D>) -> Result<Vec<Field>, ParserError> {
    let names = children_of_kind(node, "field_identifier");
    let mut ty = resolve(&expect_field(node, "type")?)?;
    // embedded `*T` keeps its star outside the type node
    if names.is_empty() && node.children().any(|c| c.kind().as_ref() == "*") {
        ty = ty.pointer_to();
    }

    let embedded = Field {
        name: String::new(),
        ty: ty.text,
        tag: node
            .field("tag")
            .map(|tag| unquote(&tag.text()))
            .unwrap_or_default(),
        private: false,
        pointer: ty.is_pointer,
        slice: ty.is_slice,
        docs: leading_docs(node),
        comment: trailing_comment(node),
    };
    if names.is_empty() {
        return Ok(vec![embedded]);
    }

    Ok(names
        .iter()
        .map(|ident| {
            let name = ident.text().to_string();
            Field {
                private: Field::is_private_name(&name),
                name,
                ..embedded.clone()
            }
        })
        .collect())
}

fn process_interface_methods<D: Doc>(
    interface_type: &Node<D>,
) -> Result<Vec<Method>, ParserError> {
    interface_type
        .children()
        .filter(|c| matches!(c.kind().as_ref(), "method_elem" | "method_spec"))
        .map(|elem| {
            let name = expect_field(&elem, "name")?.text().to_string();
            let (params, returns) = signature_parts(&elem)?;
            Ok(Method {
                receiver: String::new(),
                signature: render_signature(&name, &params, &returns),
                name,
                params,
                returns,
                docs: leading_docs(&elem),
                body: None,
            })
        })
        .collect()
}

// ── Signatures ────────────────────────────────────────────────────

/// Parameters and results of a function, method or interface method.
fn signature_parts<D: Doc>(node: &Node<D>) -> Result<(Vec<Param>, Vec<Param>), ParserError> {
    let params = process_parameter_list(&expect_field(node, "parameters")?)?;
    let returns = match node.field("result") {
        None => Vec::new(),
        Some(result) if result.kind().as_ref() == "parameter_list" => {
            process_parameter_list(&result)?
        }
        Some(result) => vec![Param::unnamed(resolve(&result)?.text)],
    };
    Ok((params, returns))
}

fn process_parameter_list<D: Doc>(list: &Node<D>) -> Result<Vec<Param>, ParserError> {
    let mut params = Vec::new();
    for decl in list.children() {
        match decl.kind().as_ref() {
            "parameter_declaration" => {
                let ty = resolve(&expect_field(&decl, "type")?)?.text;
                let names = declared_names(&decl);
                if names.is_empty() {
                    params.push(Param::unnamed(ty));
                } else {
                    params.extend(names.into_iter().map(|name| Param::new(name, ty.clone())));
                }
            }
            "variadic_parameter_declaration" => {
                let ty = resolve(&decl)?.text;
                params.push(match decl.field("name") {
                    Some(name) => Param::new(name.text(), ty),
                    None => Param::unnamed(ty),
                });
            }
            _ => {}
        }
    }
    Ok(params)
}

fn capture_body<D: Doc>(node: &Node<D>, options: &ExtractOptions) -> Option<String> {
    if !options.include_bodies {
        return None;
    }
    node.field("body").map(|body| body.text().to_string())
}

// ── function_declaration ──────────────────────────────────────────

fn process_function<D: Doc>(
    node: &Node<D>,
    options: &ExtractOptions,
) -> Result<Function, ParserError> {
    let name = expect_field(node, "name")?.text().to_string();
    let (params, returns) = signature_parts(node)?;
    Ok(Function {
        signature: render_signature(&name, &params, &returns),
        name,
        params,
        returns,
        docs: leading_docs(node),
        body: capture_body(node, options),
    })
}

// ── method_declaration ────────────────────────────────────────────

fn process_method<D: Doc>(node: &Node<D>, options: &ExtractOptions) -> Result<Method, ParserError> {
    let receiver_list = expect_field(node, "receiver")?;
    let receiver_decl = receiver_list
        .children()
        .find(|c| c.kind().as_ref() == "parameter_declaration")
        .ok_or_else(|| ParserError::MalformedDeclaration {
            line: line_of(node),
            reason: "method has an empty receiver list".to_string(),
        })?;
    let receiver = resolve(&expect_field(&receiver_decl, "type")?)?.text;

    let name = expect_field(node, "name")?.text().to_string();
    let (params, returns) = signature_parts(node)?;
    Ok(Method {
        receiver,
        signature: render_signature(&name, &params, &returns),
        name,
        params,
        returns,
        docs: leading_docs(node),
        body: capture_body(node, options),
    })
}

// ── const_declaration ─────────────────────────────────────────────

fn process_const_declaration<D: Doc>(node: &Node<D>) -> Vec<Constant> {
    let decl_docs = leading_docs(node);
    children_of_kind(node, "const_spec")
        .iter()
        .flat_map(|spec| process_const_spec(spec, &decl_docs))
        .collect()
}

/// Names pair positionally with the initializer list; a name without a
/// value (implicit repetition, `iota` continuation) gets an empty value.
fn process_const_spec<D: Doc>(spec: &Node<D>, decl_docs: &[String]) -> Vec<Constant> {
    let docs = spec_docs(spec, decl_docs);
    let values: Vec<String> = spec
        .field("value")
        .map(|list| {
            list.children()
                .filter(|c| !is_separator(&c.kind()))
                .map(|value| render_value(&value).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    declared_names(spec)
        .into_iter()
        .enumerate()
        .map(|(i, name)| Constant {
            name,
            value: values.get(i).cloned().unwrap_or_default(),
            docs: docs.clone(),
        })
        .collect()
}

/// Best-effort rendering of a constant initializer. `None` for any shape
/// outside literals, identifiers, binary expressions and one-argument calls.
fn render_value<D: Doc>(node: &Node<D>) -> Option<String> {
    match node.kind().as_ref() {
        "int_literal" | "float_literal" | "imaginary_literal" | "rune_literal"
        | "interpreted_string_literal" | "raw_string_literal" | "true" | "false" | "nil"
        | "iota" | "identifier" => Some(node.text().to_string()),
        "binary_expression" => {
            let left = render_value(&node.field("left")?)?;
            let operator = node.field("operator")?.text().to_string();
            let right = render_value(&node.field("right")?)?;
            Some(format!("{left} {operator} {right}"))
        }
        "call_expression" => {
            let callee = render_value(&node.field("function")?)?;
            let args: Vec<_> = node
                .field("arguments")?
                .children()
                .filter(|c| !is_separator(&c.kind()))
                .collect();
            let [arg] = args.as_slice() else {
                return None;
            };
            Some(format!("{callee}({})", render_value(arg)?))
        }
        _ => None,
    }
}

// ── var_declaration ───────────────────────────────────────────────

fn process_var_declaration<D: Doc>(node: &Node<D>) -> Result<Vec<Variable>, ParserError> {
    let decl_docs = leading_docs(node);
    let mut specs = children_of_kind(node, "var_spec");
    for list in children_of_kind(node, "var_spec_list") {
        specs.extend(children_of_kind(&list, "var_spec"));
    }

    let mut variables = Vec::new();
    for spec in &specs {
        let ty = match spec.field("type") {
            Some(ty) => resolve(&ty)?.text,
            None => String::new(),
        };
        let docs = spec_docs(spec, &decl_docs);
        variables.extend(declared_names(spec).into_iter().map(|name| Variable {
            name,
            ty: ty.clone(),
            docs: docs.clone(),
        }));
    }
    Ok(variables)
}
