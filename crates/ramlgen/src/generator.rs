use std::collections::BTreeMap;

use ramlgen_metadata::{ApiAction, ApiDocumentation, ApiResourceDocumentation};
use tracing::info;

use crate::{
    config::RamlConfig,
    error::RamlResult,
    media_type::{apply_media_type_extensions, MEDIA_TYPE_EXTENSION_KEY},
    parameters::RamlWorkingSet,
    schema::SchemaGenerator,
    specification::{RamlBody, RamlMethod, RamlResource, RamlResponse, RamlSpec},
};

/// Main RAML specification generator.
///
/// Walks every (resource, action, relative path) triple of the input
/// documentation and merges it into a deduplicated resource tree. The
/// input graph is never mutated; each call builds a fresh spec.
pub struct RamlGenerator {
    config: RamlConfig,
}

impl RamlGenerator {
    /// Create a new generator with the given configuration
    pub fn new(config: RamlConfig) -> Self {
        Self { config }
    }

    /// Generate a RAML specification from API documentation.
    ///
    /// An empty resource list yields an empty spec, not an error.
    pub fn generate(&self, documentation: &ApiDocumentation) -> RamlResult<RamlSpec> {
        let mut spec = RamlSpec::new(
            &documentation.title,
            &documentation.api_version,
            &documentation.api_base_url,
        );

        for resource in &documentation.resources {
            for action in &resource.actions {
                for path in &action.relative_paths {
                    self.process_route(&mut spec, resource, action, path)?;
                }
            }
        }

        Ok(spec)
    }

    /// Merge one (resource, action, path) triple into the spec
    fn process_route(
        &self,
        spec: &mut RamlSpec,
        resource: &ApiResourceDocumentation,
        action: &ApiAction,
        path: &str,
    ) -> RamlResult<()> {
        let working_set = RamlWorkingSet::build(path, resource)?;

        // A resource already routed under its media-type-extension path
        // must be reused, not re-created under the base path.
        let (mut raml_resource, existing_key) = match working_set
            .available_paths()
            .into_iter()
            .find_map(|candidate| spec.resources.remove_entry(candidate))
        {
            Some((key, existing)) => (existing, Some(key)),
            None => (
                RamlResource {
                    display_name: Some(resource.title.clone()),
                    description: resource.description.clone(),
                    ..RamlResource::default()
                },
                None,
            ),
        };

        for param in working_set.path_params() {
            if let Some(existing) = raml_resource.uri_parameters.get(&param.key) {
                if *existing != param.parameter {
                    info!(key = %param.key, "replacing existing uri parameter with differing value");
                }
            }
            raml_resource
                .uri_parameters
                .insert(param.key.clone(), param.parameter.clone());
        }

        apply_media_type_extensions(
            action,
            &mut raml_resource.uri_parameters,
            &self.config.allowed_extensions,
        );

        let verb = action.verb.to_ascii_lowercase();
        if raml_resource.methods.contains_key(&verb) {
            info!(%verb, %path, "replacing existing method for verb");
        }
        raml_resource
            .methods
            .insert(verb, self.build_method(resource, action, &working_set)?);

        let key = match existing_key {
            Some(key) => key,
            None if raml_resource
                .uri_parameters
                .contains_key(MEDIA_TYPE_EXTENSION_KEY) =>
            {
                working_set.media_type_extension_path().to_string()
            }
            None => working_set.base_path().to_string(),
        };
        spec.resources.insert(key, raml_resource);

        Ok(())
    }

    /// Build the method for one action on one route
    fn build_method(
        &self,
        resource: &ApiResourceDocumentation,
        action: &ApiAction,
        working_set: &RamlWorkingSet,
    ) -> RamlResult<RamlMethod> {
        let mut method = RamlMethod {
            description: action.notes.clone(),
            ..RamlMethod::default()
        };

        if self.config.is_bodyless(&action.verb) {
            // Properties without a RAML type mapping cannot be rendered
            // as query parameters and are dropped.
            let query_parameters: BTreeMap<_, _> = working_set
                .non_path_params()
                .filter(|param| param.raml_type.is_some())
                .map(|param| (param.key.clone(), param.parameter.clone()))
                .collect();
            if !query_parameters.is_empty() {
                method.query_parameters = Some(query_parameters);
            }
        } else {
            method.body = Some(RamlBody::json(SchemaGenerator::schema_json(resource)?));
        }

        method.responses = self.build_responses(resource, action)?;

        Ok(method)
    }

    /// Build the response map for one action
    fn build_responses(
        &self,
        resource: &ApiResourceDocumentation,
        action: &ApiAction,
    ) -> RamlResult<Option<BTreeMap<u16, RamlResponse>>> {
        if action.status_codes.is_empty() {
            info!(resource = %resource.title, "resource has no status codes");
            return Ok(None);
        }

        let mut responses = BTreeMap::new();
        for status_code in &action.status_codes {
            let mut response = RamlResponse {
                description: Some(status_code.full_description()),
                body: None,
            };

            if let Some(return_type) = &resource.return_type {
                if renders_return_body(status_code.code) {
                    response.body = Some(RamlBody::json(SchemaGenerator::schema_json(
                        return_type.as_ref(),
                    )?));
                }
            }

            responses.insert(status_code.code, response);
        }

        Ok(Some(responses))
    }
}

/// Whether a response with this status code carries the return-type
/// body: any 2xx except 204 No Content.
fn renders_return_body(code: u16) -> bool {
    (200..300).contains(&code) && code != 204
}
