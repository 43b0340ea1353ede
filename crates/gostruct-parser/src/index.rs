//! Name lookups over an extracted [`Package`].
//!
//! Every map keeps the first record of a given name, the same rule the
//! assembler uses when binding methods.

use std::collections::HashMap;

use crate::types::{Constant, Field, Function, Interface, Package, Struct, Variable};

/// Borrowed by-name view of one package.
#[derive(Debug)]
pub struct PackageIndex<'a> {
    package: &'a Package,
    structs: HashMap<&'a str, StructIndex<'a>>,
    functions: HashMap<&'a str, &'a Function>,
    interfaces: HashMap<&'a str, &'a Interface>,
    variables: HashMap<&'a str, &'a Variable>,
    constants: HashMap<&'a str, &'a Constant>,
}

/// A struct plus its fields by name. Embedded fields are not indexed.
#[derive(Debug, Clone)]
pub struct StructIndex<'a> {
    record: &'a Struct,
    fields: HashMap<&'a str, &'a Field>,
}

fn by_name<'a, T>(items: &'a [T], name: impl Fn(&'a T) -> &'a str) -> HashMap<&'a str, &'a T> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        map.entry(name(item)).or_insert(item);
    }
    map
}

impl<'a> StructIndex<'a> {
    #[must_use]
    pub fn new(record: &'a Struct) -> Self {
        let named: Vec<&Field> = record.fields.iter().filter(|f| !f.name.is_empty()).collect();
        let mut fields = HashMap::with_capacity(named.len());
        for field in named {
            fields.entry(field.name.as_str()).or_insert(field);
        }
        Self { record, fields }
    }

    #[must_use]
    pub const fn record(&self) -> &'a Struct {
        self.record
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'a Field> {
        self.fields.get(name).copied()
    }
}

impl<'a> PackageIndex<'a> {
    #[must_use]
    pub fn new(package: &'a Package) -> Self {
        let mut structs = HashMap::with_capacity(package.structs.len());
        for record in &package.structs {
            structs
                .entry(record.name.as_str())
                .or_insert_with(|| StructIndex::new(record));
        }
        Self {
            package,
            structs,
            functions: by_name(&package.functions, |f| f.name.as_str()),
            interfaces: by_name(&package.interfaces, |i| i.name.as_str()),
            variables: by_name(&package.variables, |v| v.name.as_str()),
            constants: by_name(&package.constants, |c| c.name.as_str()),
        }
    }

    #[must_use]
    pub const fn package(&self) -> &'a Package {
        self.package
    }

    #[must_use]
    pub fn structure(&self, name: &str) -> Option<&StructIndex<'a>> {
        self.structs.get(name)
    }

    /// Field `field` of struct `structure`.
    #[must_use]
    pub fn field(&self, structure: &str, field: &str) -> Option<&'a Field> {
        self.structure(structure)?.field(field)
    }

    #[must_use]
    pub fn function(&self, name: &str) -> Option<&'a Function> {
        self.functions.get(name).copied()
    }

    #[must_use]
    pub fn interface(&self, name: &str) -> Option<&'a Interface> {
        self.interfaces.get(name).copied()
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&'a Variable> {
        self.variables.get(name).copied()
    }

    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&'a Constant> {
        self.constants.get(name).copied()
    }
}

impl Package {
    /// By-name view of this package.
    #[must_use]
    pub fn index(&self) -> PackageIndex<'_> {
        PackageIndex::new(self)
    }
}
