//! Package assembler: merges the declarations of every file of a package and
//! attaches methods to their structs by receiver name.

use std::collections::{BTreeSet, HashMap};

use super::binder::FileDeclarations;
use crate::types::Package;

/// Build the package record from its merged declarations.
///
/// Methods bind by the receiver's base name (one `*` and any type arguments
/// removed). A method whose receiver names no struct of this package is
/// dropped. When two structs share a name the first one receives the
/// methods.
pub(super) fn assemble(name: &str, decls: FileDeclarations) -> Package {
    let FileDeclarations {
        imports,
        mut structs,
        interfaces,
        functions,
        methods,
        variables,
        constants,
    } = decls;

    let mut by_name: HashMap<String, usize> = HashMap::with_capacity(structs.len());
    for (index, record) in structs.iter().enumerate() {
        if by_name.contains_key(&record.name) {
            tracing::warn!(
                package = name,
                structure = %record.name,
                "duplicate struct name; methods bind to the first declaration"
            );
            continue;
        }
        by_name.insert(record.name.clone(), index);
    }

    let mut dropped = 0usize;
    for method in methods {
        match by_name.get(method.receiver_base_name()) {
            Some(&index) => structs[index].methods.push(method),
            None => {
                tracing::debug!(
                    package = name,
                    receiver = %method.receiver,
                    method = %method.name,
                    "no struct for receiver; dropping method"
                );
                dropped += 1;
            }
        }
    }

    let imports: Vec<String> = imports
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    tracing::debug!(
        package = name,
        structs = structs.len(),
        interfaces = interfaces.len(),
        functions = functions.len(),
        dropped_methods = dropped,
        "assembled package"
    );

    Package {
        name: name.to_string(),
        imports,
        structs,
        functions,
        variables,
        constants,
        interfaces,
    }
}
