//! Builtin primitive types.

pub const VOID: &str = "void";
pub const BOOL: &str = "bool";
pub const STRING: &str = "string";
pub const INT32: &str = "int32";

/// Type of real literals. Not a declarable name.
pub const REAL_TYPE_NAME: &str = "real64";

/// Every builtin type name, in registration order.
pub const BUILTIN_TYPE_NAMES: [&str; 9] = [
    VOID, BOOL, STRING, "int8", "int16", INT32, "uint8", "uint16", "uint32",
];

/// Builtin types that may be used as array indices.
pub const INDEXER_TYPE_NAMES: [&str; 6] = ["int8", "int16", INT32, "uint8", "uint16", "uint32"];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TYPE_NAMES.contains(&name)
}

pub fn is_indexer(name: &str) -> bool {
    INDEXER_TYPE_NAMES.contains(&name)
}
