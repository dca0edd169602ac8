/*!
Named-parameter construction and the per-route working set.

A working set partitions a resource's properties against one route
template: properties named by a `{token}` in the path become URI
parameters, the rest are query-string candidates.
*/

use ramlgen_metadata::{ApiPropertyDocumentation, ApiResourceDocumentation, PropertyConstraint};

use crate::error::{RamlError, RamlResult};
use crate::media_type::MEDIA_TYPE_EXTENSION_KEY;
use crate::specification::RamlNamedParameter;
use crate::types::raml_parameter_type;
use crate::utils::{ensure_starts_with, path_params};

/// Builds the RAML named parameter for one property: type mapping,
/// constraint translation, and the tri-state repeat/required flags.
pub fn named_parameter(property: &ApiPropertyDocumentation) -> RamlNamedParameter {
    let mut parameter = RamlNamedParameter {
        display_name: property.title.clone(),
        description: property.description.clone(),
        param_type: raml_parameter_type(&property.property_type).map(str::to_string),
        ..RamlNamedParameter::default()
    };

    if property.allow_multiple == Some(true) {
        parameter.repeat = Some(true);
    }
    if property.is_required == Some(true) {
        parameter.required = Some(true);
    }

    match &property.constraint {
        Some(PropertyConstraint::List { values }) => {
            parameter.enum_values = Some(values.clone());
        }
        Some(PropertyConstraint::Range { min, max }) => {
            parameter.minimum = *min;
            parameter.maximum = *max;
        }
        None => {}
    }

    parameter
}

/// One property resolved against a route template
#[derive(Debug, Clone)]
pub struct RamlWorkingParameter {
    /// Property id, the eventual map key
    pub key: String,
    /// Resolved RAML type; `None` for unmapped native types
    pub raml_type: Option<String>,
    /// Whether the property is named by a path token
    pub is_path_param: bool,
    /// The built named parameter
    pub parameter: RamlNamedParameter,
}

/// Path and non-path parameters for one (route, resource) pair.
#[derive(Debug, Clone)]
pub struct RamlWorkingSet {
    base_path: String,
    media_type_extension_path: String,
    parameters: Vec<RamlWorkingParameter>,
}

impl RamlWorkingSet {
    /// Partition `resource`'s properties against `path`.
    ///
    /// Fails with an invalid-argument error when the path is empty.
    /// Duplicate property ids are not detected here; the later map
    /// insert decides (last write wins).
    pub fn build(path: &str, resource: &ApiResourceDocumentation) -> RamlResult<Self> {
        if path.is_empty() {
            return Err(RamlError::invalid_argument("path", "must not be empty"));
        }

        let base_path = ensure_starts_with(path, "/");
        let media_type_extension_path = format!(
            "{}{{{}}}",
            base_path.trim_end_matches('/'),
            MEDIA_TYPE_EXTENSION_KEY
        );

        let tokens = path_params(path);
        let parameters = resource
            .properties
            .iter()
            .map(|property| {
                let parameter = named_parameter(property);
                RamlWorkingParameter {
                    key: property.id.clone(),
                    raml_type: parameter.param_type.clone(),
                    is_path_param: tokens.contains(&property.id.to_ascii_lowercase()),
                    parameter,
                }
            })
            .collect();

        Ok(Self {
            base_path,
            media_type_extension_path,
            parameters,
        })
    }

    /// The route path, normalized to start with `/`
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The base path with the reserved `{mediaTypeExtension}` token appended
    pub fn media_type_extension_path(&self) -> &str {
        &self.media_type_extension_path
    }

    /// Both paths a resource for this route may live under
    pub fn available_paths(&self) -> [&str; 2] {
        [&self.base_path, &self.media_type_extension_path]
    }

    /// Parameters named by a path token
    pub fn path_params(&self) -> impl Iterator<Item = &RamlWorkingParameter> {
        self.parameters.iter().filter(|p| p.is_path_param)
    }

    /// Parameters not named by any path token (query-string candidates)
    pub fn non_path_params(&self) -> impl Iterator<Item = &RamlWorkingParameter> {
        self.parameters.iter().filter(|p| !p.is_path_param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramlgen_metadata::TypeDescriptor;

    fn property(id: &str) -> ApiPropertyDocumentation {
        ApiPropertyDocumentation {
            id: id.to_string(),
            title: None,
            description: None,
            property_type: TypeDescriptor::value("string"),
            is_required: None,
            allow_multiple: None,
            constraint: None,
            embedded_resource: None,
        }
    }

    fn resource(properties: Vec<ApiPropertyDocumentation>) -> ApiResourceDocumentation {
        ApiResourceDocumentation {
            title: "Widget".to_string(),
            description: None,
            type_name: TypeDescriptor::reference("Widget"),
            properties,
            actions: Vec::new(),
            return_type: None,
        }
    }

    #[test]
    fn build_rejects_empty_path() {
        let err = RamlWorkingSet::build("", &resource(Vec::new())).unwrap_err();
        assert!(err.to_string().contains("`path`"));
    }

    #[test]
    fn base_path_is_normalized() {
        let cases = [
            ("api/foo", "/api/foo"),
            ("/api/foo", "/api/foo"),
            ("api/{foo}", "/api/{foo}"),
            ("/api/{foo}/bar", "/api/{foo}/bar"),
        ];
        for (path, expected) in cases {
            let ws = RamlWorkingSet::build(path, &resource(Vec::new())).unwrap();
            assert_eq!(ws.base_path(), expected, "path {path}");
        }
    }

    #[test]
    fn media_type_extension_path_trims_trailing_slash() {
        let cases = [
            ("api/foo", "/api/foo{mediaTypeExtension}"),
            ("/api/foo/", "/api/foo{mediaTypeExtension}"),
            ("/api/{foo}/", "/api/{foo}{mediaTypeExtension}"),
            ("api/{foo}/bar/", "/api/{foo}/bar{mediaTypeExtension}"),
        ];
        for (path, expected) in cases {
            let ws = RamlWorkingSet::build(path, &resource(Vec::new())).unwrap();
            assert_eq!(ws.media_type_extension_path(), expected, "path {path}");
        }
    }

    #[test]
    fn partitions_path_and_query_parameters() {
        let ws = RamlWorkingSet::build(
            "/api/{a}/{b}",
            &resource(vec![property("a"), property("b"), property("c")]),
        )
        .unwrap();

        let path_keys: Vec<_> = ws.path_params().map(|p| p.key.as_str()).collect();
        let query_keys: Vec<_> = ws.non_path_params().map(|p| p.key.as_str()).collect();
        assert_eq!(path_keys, ["a", "b"]);
        assert_eq!(query_keys, ["c"]);
    }

    #[test]
    fn path_token_matching_is_case_insensitive() {
        let ws = RamlWorkingSet::build("/api/{Id}", &resource(vec![property("id")])).unwrap();
        assert_eq!(ws.path_params().count(), 1);
    }

    #[test]
    fn both_partitions_are_empty_without_properties() {
        let ws = RamlWorkingSet::build("/path", &resource(Vec::new())).unwrap();
        assert_eq!(ws.path_params().count(), 0);
        assert_eq!(ws.non_path_params().count(), 0);
    }

    #[test]
    fn named_parameter_sets_basics_and_type() {
        let mut prop = property("name");
        prop.title = Some("Name".to_string());
        prop.description = Some("The name".to_string());

        let parameter = named_parameter(&prop);
        assert_eq!(parameter.display_name.as_deref(), Some("Name"));
        assert_eq!(parameter.description.as_deref(), Some("The name"));
        assert_eq!(parameter.param_type.as_deref(), Some("string"));
    }

    #[test]
    fn named_parameter_leaves_unmapped_types_untyped() {
        let mut prop = property("blob");
        prop.property_type = TypeDescriptor::reference("CustomThing");
        assert!(named_parameter(&prop).param_type.is_none());
    }

    #[test]
    fn named_parameter_tri_state_flags_default_to_absent() {
        for flag in [None, Some(false)] {
            let mut prop = property("p");
            prop.allow_multiple = flag;
            prop.is_required = flag;
            let parameter = named_parameter(&prop);
            assert!(parameter.repeat.is_none());
            assert!(parameter.required.is_none());
        }

        let mut prop = property("p");
        prop.allow_multiple = Some(true);
        prop.is_required = Some(true);
        let parameter = named_parameter(&prop);
        assert_eq!(parameter.repeat, Some(true));
        assert_eq!(parameter.required, Some(true));
    }

    #[test]
    fn list_constraint_sets_enum_only() {
        let mut prop = property("p");
        prop.constraint = Some(PropertyConstraint::List {
            values: vec!["foo".to_string(), "bar".to_string()],
        });

        let parameter = named_parameter(&prop);
        assert_eq!(
            parameter.enum_values,
            Some(vec!["foo".to_string(), "bar".to_string()])
        );
        assert!(parameter.minimum.is_none());
        assert!(parameter.maximum.is_none());
    }

    #[test]
    fn range_constraint_sets_bounds_only() {
        let mut prop = property("p");
        prop.constraint = Some(PropertyConstraint::Range {
            min: Some(10.0),
            max: Some(100.0),
        });

        let parameter = named_parameter(&prop);
        assert!(parameter.enum_values.is_none());
        assert_eq!(parameter.minimum, Some(10.0));
        assert_eq!(parameter.maximum, Some(100.0));
    }
}
