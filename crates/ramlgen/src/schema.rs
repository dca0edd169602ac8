/*!
JSON-Schema (draft-04) body generation.

A resource type becomes one schema document. Embedded resource types
are flattened into a single `definitions` map at the document root and
referenced with `#/definitions/{title}`; a visited set keyed by title
makes the traversal safe for shared types and recursive embeddings.
*/

use std::collections::{BTreeMap, BTreeSet};

use ramlgen_metadata::{ApiPropertyDocumentation, ResourceTypeInfo};
use serde::Serialize;

use crate::error::RamlResult;
use crate::types::{json_schema_type, json_schema_types};

const DRAFT_04_SCHEMA: &str = "http://json-schema.org/draft-04/schema#";

/// A JSON-Schema document for one resource type
#[derive(Debug, Clone, Serialize)]
pub struct JsonSchema {
    #[serde(rename = "$schema")]
    pub schema: String,

    pub description: String,

    #[serde(rename = "type")]
    pub schema_type: String,

    /// Ids of required properties, in declaration order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, JsonSchemaProperty>>,

    /// One entry per distinct embedded-resource title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<BTreeMap<String, JsonSchemaDefinition>>,
}

/// One schema property: either a type set or a `$ref`, never both
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JsonSchemaProperty {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,

    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl JsonSchemaProperty {
    fn typed(types: Vec<String>) -> Self {
        Self {
            types: Some(types),
            reference: None,
        }
    }

    // All definitions sit at the document root, so the ref path is fixed.
    fn reference(title: &str) -> Self {
        Self {
            types: None,
            reference: Some(format!("#/definitions/{title}")),
        }
    }
}

/// One entry in the flat `definitions` map
#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaDefinition {
    #[serde(rename = "type")]
    pub types: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, JsonSchemaProperty>>,
}

/// Generates JSON-Schema documents for resource types
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Build the schema document for a resource type.
    pub fn generate<R: ResourceTypeInfo + ?Sized>(resource: &R) -> JsonSchema {
        let mut schema = JsonSchema {
            schema: DRAFT_04_SCHEMA.to_string(),
            description: format!(
                "Schema for {}. {}",
                resource.title(),
                resource.description().unwrap_or_default()
            ),
            schema_type: json_schema_type(resource.type_name()).to_string(),
            required: None,
            properties: None,
            definitions: None,
        };

        let properties = resource.properties();
        if properties.is_empty() {
            return schema;
        }

        schema.required = required_ids(properties);
        schema.properties = Some(property_map(properties));

        let mut definitions = BTreeMap::new();
        let mut visited = BTreeSet::new();
        collect_definitions(properties, &mut visited, &mut definitions);
        if !definitions.is_empty() {
            schema.definitions = Some(definitions);
        }

        schema
    }

    /// The schema document as compact JSON text, ready to embed as a
    /// YAML scalar.
    pub fn schema_json<R: ResourceTypeInfo + ?Sized>(resource: &R) -> RamlResult<String> {
        Ok(serde_json::to_string(&Self::generate(resource))?)
    }
}

fn property_map(properties: &[ApiPropertyDocumentation]) -> BTreeMap<String, JsonSchemaProperty> {
    properties
        .iter()
        .map(|property| {
            let schema_property = match &property.embedded_resource {
                Some(embedded) => JsonSchemaProperty::reference(&embedded.title),
                None => JsonSchemaProperty::typed(json_schema_types(
                    &property.property_type,
                    property.is_required == Some(true),
                )),
            };
            (property.id.clone(), schema_property)
        })
        .collect()
}

fn required_ids(properties: &[ApiPropertyDocumentation]) -> Option<Vec<String>> {
    let ids: Vec<String> = properties
        .iter()
        .filter(|property| property.is_required == Some(true))
        .map(|property| property.id.clone())
        .collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

// Depth-first over embedded resources. The visited set is keyed by
// title and consulted before descending, so recursion depth is bounded
// by the number of distinct titles; first occurrence wins.
fn collect_definitions(
    properties: &[ApiPropertyDocumentation],
    visited: &mut BTreeSet<String>,
    definitions: &mut BTreeMap<String, JsonSchemaDefinition>,
) {
    for property in properties {
        let Some(embedded) = &property.embedded_resource else {
            continue;
        };
        if !visited.insert(embedded.title.clone()) {
            continue;
        }

        let definition = JsonSchemaDefinition {
            types: json_schema_types(&embedded.type_name, property.is_required == Some(true)),
            required: required_ids(&embedded.properties),
            properties: if embedded.properties.is_empty() {
                None
            } else {
                Some(property_map(&embedded.properties))
            },
        };
        definitions.insert(embedded.title.clone(), definition);

        collect_definitions(&embedded.properties, visited, definitions);
    }
}
