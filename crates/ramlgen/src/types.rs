/*!
Type vocabulary translation.

Two closed lookup tables map native type-descriptor names onto the two
target vocabularies: RAML named-parameter types and JSON-Schema
primitive types. Unknown names degrade to the documented fallback with
a diagnostic; neither lookup can fail.
*/

use ramlgen_metadata::TypeDescriptor;
use tracing::debug;

/// JSON-Schema type used for any name the table does not cover
const JSON_FALLBACK: &str = "object";

/// The JSON-Schema "null" member added for optional reference/nullable types
const JSON_NULL: &str = "null";

/// Maps a native type name onto the RAML named-parameter vocabulary
/// (`string`, `number`, `integer`, `boolean`, `date`).
///
/// Returns `None` for unmapped names; such parameters are rendered
/// without a type and excluded from query strings.
pub fn raml_parameter_type(descriptor: &TypeDescriptor) -> Option<&'static str> {
    let mapped = match descriptor.name.to_ascii_lowercase().as_str() {
        "string" => Some("string"),
        "int16" | "int32" => Some("integer"),
        "int64" | "single" | "float" | "double" => Some("number"),
        "datetime" => Some("date"),
        "boolean" => Some("boolean"),
        _ => None,
    };

    if mapped.is_none() {
        debug!(type_name = %descriptor.name, "no RAML parameter type for native type");
    }

    mapped
}

/// Maps a native type name onto the JSON-Schema primitive vocabulary.
///
/// Unmapped names fall back to `object`. The result is the ordered type
/// set for a schema property: `[mapped, "null"]` when the property is
/// not required and its type is a reference type or was nullable,
/// otherwise just `[mapped]`.
pub fn json_schema_types(descriptor: &TypeDescriptor, is_required: bool) -> Vec<String> {
    let mapped = json_schema_type(descriptor);

    if !is_required && (descriptor.reference || descriptor.nullable) {
        vec![mapped.to_string(), JSON_NULL.to_string()]
    } else {
        vec![mapped.to_string()]
    }
}

/// The single JSON-Schema type name for a descriptor, without null-widening.
pub fn json_schema_type(descriptor: &TypeDescriptor) -> &'static str {
    match descriptor.name.to_ascii_lowercase().as_str() {
        "string" => "string",
        "single" | "float" | "double" => "number",
        "int16" | "int32" | "int64" | "uint16" | "uint32" | "uint64" => "integer",
        "boolean" => "boolean",
        _ => {
            debug!(type_name = %descriptor.name, "no JSON schema type for native type, using fallback");
            JSON_FALLBACK
        }
    }
}
