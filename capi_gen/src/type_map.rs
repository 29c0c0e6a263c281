//! Native type to C type resolution.
//!
//! The generator only ever asks one question of the type layer: "what is the
//! C spelling of this native type at the flat boundary?". [`TypeMapper`] is
//! that seam; [`TypeMapTable`] is the table-driven implementation fed from a
//! type-map file.

use capi_types::{NativeType, TypeMapFile};
use indexmap::IndexMap;

/// Resolution of one native type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    /// ABI-stable spelling used in wrapper signatures.
    pub c_type: String,
}

pub trait TypeMapper {
    /// Returns `None` when the type cannot cross the flat boundary.
    fn type_map(&self, ty: &NativeType) -> Option<TypeMap>;
}

/* Identity mappings every table starts with */
const BUILTIN_C_TYPES: &[&str] = &[
    "void",
    "bool",
    "char",
    "signed char",
    "unsigned char",
    "short",
    "unsigned short",
    "int",
    "unsigned",
    "unsigned int",
    "long",
    "unsigned long",
    "long long",
    "unsigned long long",
    "float",
    "double",
    "size_t",
    "int8_t",
    "int16_t",
    "int32_t",
    "int64_t",
    "uint8_t",
    "uint16_t",
    "uint32_t",
    "uint64_t",
    "void*",
    "const char*",
];

/// Collapse whitespace and glue `*`/`&` to the preceding token, so
/// `const  char *` and `const char*` look up the same entry.
pub fn normalize_spelling(spelling: &str) -> String {
    spelling
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(" *", "*")
        .replace(" &", "&")
}

pub fn is_void(ty: &NativeType) -> bool {
    normalize_spelling(ty.as_str()) == "void"
}

#[derive(Debug, Clone, Default)]
pub struct TypeMapTable {
    entries: IndexMap<String, TypeMap>,
}

impl TypeMapTable {
    /* Empty table: every lookup fails until entries are added */
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        for c_type in BUILTIN_C_TYPES {
            table.insert(c_type, *c_type);
        }
        table
    }

    /* Builtins first, file entries override them */
    pub fn from_file(file: &TypeMapFile) -> Self {
        let mut table = Self::with_builtins();
        for entry in &file.types {
            table.insert(entry.native.as_str(), entry.c_type.clone());
        }
        table
    }

    pub fn insert(&mut self, native: &str, c_type: impl Into<String>) {
        self.entries.insert(
            normalize_spelling(native),
            TypeMap {
                c_type: c_type.into(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TypeMapper for TypeMapTable {
    fn type_map(&self, ty: &NativeType) -> Option<TypeMap> {
        self.entries.get(&normalize_spelling(ty.as_str())).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capi_types::TypeMapEntry;

    #[test]
    fn test_normalize_spelling() {
        assert_eq!(normalize_spelling("  const   char  * "), "const char*");
        assert_eq!(normalize_spelling("const String &"), "const String&");
        assert_eq!(normalize_spelling("Node * *"), "Node**");
        assert_eq!(normalize_spelling("unsigned\tint"), "unsigned int");
    }

    #[test]
    fn test_builtins_map_to_themselves() {
        let table = TypeMapTable::with_builtins();
        let map = table.type_map(&NativeType::new("unsigned  int")).unwrap();
        assert_eq!(map.c_type, "unsigned int");
        assert!(table.type_map(&NativeType::new("const char *")).is_some());
    }

    #[test]
    fn test_unknown_type_is_unmapped() {
        let table = TypeMapTable::with_builtins();
        assert!(table.type_map(&NativeType::new("std::string")).is_none());
        assert!(TypeMapTable::new().type_map(&NativeType::new("int")).is_none());
    }

    #[test]
    fn test_file_entries_override_builtins() {
        let file = TypeMapFile {
            types: vec![
                TypeMapEntry {
                    native: NativeType::new("bool"),
                    c_type: "unsigned char".to_string(),
                },
                TypeMapEntry {
                    native: NativeType::new("const String &"),
                    c_type: "const char*".to_string(),
                },
            ],
        };
        let table = TypeMapTable::from_file(&file);

        assert_eq!(table.type_map(&NativeType::new("bool")).unwrap().c_type, "unsigned char");
        assert_eq!(
            table.type_map(&NativeType::new("const String&")).unwrap().c_type,
            "const char*"
        );
        assert_eq!(table.len(), BUILTIN_C_TYPES.len() + 1);
    }

    #[test]
    fn test_is_void() {
        assert!(is_void(&NativeType::void()));
        assert!(is_void(&NativeType::new(" void ")));
        assert!(!is_void(&NativeType::new("void*")));
    }
}
