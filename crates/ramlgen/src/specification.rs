use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Complete RAML 0.8 specification for one API.
///
/// Built fresh per generation run. The wire format is not this struct
/// serialized directly: resources are promoted to top-level keys by
/// [`crate::export`], per the RAML resource layout.
#[derive(Debug, Clone, Default)]
pub struct RamlSpec {
    /// API title
    pub title: Option<String>,

    /// API version label
    pub version: Option<String>,

    /// Base URI all resource paths hang off
    pub base_uri: Option<String>,

    /// Default media type, when the caller sets one
    pub media_type: Option<String>,

    /// Supported protocols, when the caller sets them
    pub protocols: Option<Vec<String>>,

    /// User-documentation sections, when the caller sets them
    pub documentation: Option<Vec<RamlDocumentation>>,

    /// Resources keyed by path; a path is either a base path or a
    /// media-type-extension path, never both for one resource
    pub resources: BTreeMap<String, RamlResource>,
}

impl RamlSpec {
    /// Create a new specification carrying the basic information block
    pub fn new(title: &str, version: &str, base_uri: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            version: Some(version.to_string()),
            base_uri: Some(base_uri.to_string()),
            ..Self::default()
        }
    }
}

/// One user-documentation section
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RamlDocumentation {
    pub title: String,
    pub content: String,
}

/// One RAML resource: a path with its parameters and methods
#[derive(Debug, Clone, Default)]
pub struct RamlResource {
    /// Display name shown by RAML tooling
    pub display_name: Option<String>,

    /// Free-text description
    pub description: Option<String>,

    /// URI parameters keyed by parameter id
    pub uri_parameters: BTreeMap<String, RamlNamedParameter>,

    /// Methods keyed by lower-case verb ("get", "post", ...)
    pub methods: BTreeMap<String, RamlMethod>,
}

// RAML renders each verb as its own key on the resource (get:, post:),
// not nested under a wrapper, so the method map is flattened here.
impl Serialize for RamlResource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(display_name) = &self.display_name {
            map.serialize_entry("displayName", display_name)?;
        }
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        if !self.uri_parameters.is_empty() {
            map.serialize_entry("uriParameters", &self.uri_parameters)?;
        }
        for (verb, method) in &self.methods {
            map.serialize_entry(verb, method)?;
        }
        map.end()
    }
}

/// One method (verb) on a resource
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RamlMethod {
    /// Method description (action notes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Query parameters; present only for bodyless verbs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_parameters: Option<BTreeMap<String, RamlNamedParameter>>,

    /// Request body schema; present only for body-carrying verbs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<RamlBody>,

    /// Responses keyed by status code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<BTreeMap<u16, RamlResponse>>,
}

/// One response on a method
#[derive(Debug, Clone, Default, Serialize)]
pub struct RamlResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<RamlBody>,
}

/// A method or response body; JSON only
#[derive(Debug, Clone, Serialize)]
pub struct RamlBody {
    #[serde(rename = "application/json")]
    pub json_schema: RamlSchema,
}

impl RamlBody {
    /// Wrap pre-serialized JSON-Schema text as a JSON body
    pub fn json(schema: String) -> Self {
        Self {
            json_schema: RamlSchema { schema },
        }
    }
}

/// Pre-serialized schema text carried as a YAML scalar
#[derive(Debug, Clone, Serialize)]
pub struct RamlSchema {
    pub schema: String,
}

/// RAML named parameter, used for both URI and query-string parameters
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RamlNamedParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// RAML parameter type; `None` when the native type has no mapping
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,

    /// Closed set of allowed values (list constraint)
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    /// Lower bound (range constraint)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Upper bound (range constraint)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Set to `Some(true)` only for repeatable parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<bool>,

    /// Set to `Some(true)` only for required parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_serializes_methods_as_inline_verb_keys() {
        let mut resource = RamlResource {
            display_name: Some("Widgets".to_string()),
            ..RamlResource::default()
        };
        resource.methods.insert(
            "get".to_string(),
            RamlMethod {
                description: Some("List widgets".to_string()),
                ..RamlMethod::default()
            },
        );
        resource.methods.insert("post".to_string(), RamlMethod::default());

        let yaml = serde_yaml::to_string(&resource).unwrap();
        assert!(yaml.contains("displayName: Widgets"));
        assert!(yaml.contains("get:"));
        assert!(yaml.contains("post:"));
        assert!(!yaml.contains("methods"));
    }

    #[test]
    fn resource_omits_absent_fields() {
        let resource = RamlResource::default();
        let yaml = serde_yaml::to_string(&resource).unwrap();
        assert!(!yaml.contains("description"));
        assert!(!yaml.contains("uriParameters"));
    }

    #[test]
    fn named_parameter_uses_raml_key_names() {
        let parameter = RamlNamedParameter {
            display_name: Some("Name".to_string()),
            param_type: Some("string".to_string()),
            enum_values: Some(vec!["a".to_string(), "b".to_string()]),
            required: Some(true),
            ..RamlNamedParameter::default()
        };

        let yaml = serde_yaml::to_string(&parameter).unwrap();
        assert!(yaml.contains("displayName: Name"));
        assert!(yaml.contains("type: string"));
        assert!(yaml.contains("enum:"));
        assert!(yaml.contains("required: true"));
        assert!(!yaml.contains("repeat"));
        assert!(!yaml.contains("minimum"));
    }

    #[test]
    fn body_nests_schema_under_the_json_media_type() {
        let method = RamlMethod {
            body: Some(RamlBody::json("{\"type\":\"object\"}".to_string())),
            ..RamlMethod::default()
        };

        let yaml = serde_yaml::to_string(&method).unwrap();
        assert!(yaml.contains("application/json"));
        assert!(yaml.contains("schema:"));
    }
}
