/*!
Media type extension resolution.

`mediaTypeExtension` is a reserved RAML path token: appending a known
file extension to a route is equivalent to sending the matching accept
header (e.g. appending `.json` == `accept: application/json`). This
module derives that parameter from an action's declared content types.
*/

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use ramlgen_metadata::ApiAction;
use tracing::{debug, warn};

use crate::specification::RamlNamedParameter;

/// The reserved parameter key, used verbatim as both the URI-template
/// token and the parameter-map key.
pub const MEDIA_TYPE_EXTENSION_KEY: &str = "mediaTypeExtension";

/// Derives the reserved `mediaTypeExtension` parameter for an action
/// and inserts it into `uri_parameters`.
///
/// No-op when the reserved key is already present. Content types whose
/// extension cannot be resolved, or whose extension is not in the
/// allow-list, are skipped with a diagnostic; resolution problems never
/// escape this function.
pub fn apply_media_type_extensions(
    action: &ApiAction,
    uri_parameters: &mut BTreeMap<String, RamlNamedParameter>,
    allowed_extensions: &BTreeSet<String>,
) {
    if uri_parameters.contains_key(MEDIA_TYPE_EXTENSION_KEY) {
        return;
    }

    // (content type, extension) pairs in declaration order
    let mut extensions: Vec<(String, String)> = Vec::new();
    for content_type in &action.content_types {
        let Some(extension) = canonical_extension(content_type) else {
            warn!(%content_type, "no known file extension for content type");
            continue;
        };

        if !allowed_extensions.contains(&extension) {
            debug!(%content_type, %extension, "extension not in allow-list, skipping");
            continue;
        }

        if extensions.iter().any(|(ct, _)| ct == content_type) {
            continue;
        }
        extensions.push((content_type.clone(), extension));
    }

    if extensions.is_empty() {
        return;
    }

    // e.g. "Use .json to specify application/json or .xml to specify text/xml"
    let message = format!(
        "Use {}",
        extensions
            .iter()
            .map(|(content_type, extension)| format!("{extension} to specify {content_type}"))
            .collect::<Vec<_>>()
            .join(" or ")
    );

    uri_parameters.insert(
        MEDIA_TYPE_EXTENSION_KEY.to_string(),
        RamlNamedParameter {
            description: Some(message),
            enum_values: Some(extensions.into_iter().map(|(_, extension)| extension).collect()),
            ..RamlNamedParameter::default()
        },
    );
}

/// The canonical (".json" form) extension for a content type, looked up
/// in the MIME registry.
fn canonical_extension(content_type: &str) -> Option<String> {
    mime_guess::get_mime_extensions_str(content_type)
        .and_then(|extensions| extensions.first())
        .map(|extension| format!(".{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(content_types: &[&str]) -> ApiAction {
        ApiAction {
            verb: "GET".to_string(),
            relative_paths: vec!["/things".to_string()],
            content_types: content_types.iter().map(|s| s.to_string()).collect(),
            status_codes: Vec::new(),
            notes: None,
        }
    }

    fn allow(extensions: &[&str]) -> BTreeSet<String> {
        extensions.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_known_extensions_with_description() {
        let mut uri_parameters = BTreeMap::new();
        apply_media_type_extensions(
            &action(&["application/json", "text/xml"]),
            &mut uri_parameters,
            &allow(&[".json", ".xml", ".jsv"]),
        );

        let parameter = uri_parameters
            .get(MEDIA_TYPE_EXTENSION_KEY)
            .expect("reserved parameter should be present");
        let enum_values = parameter.enum_values.as_ref().unwrap();
        assert!(enum_values.contains(&".json".to_string()));
        assert!(enum_values.contains(&".xml".to_string()));
        assert_eq!(
            parameter.description.as_deref(),
            Some("Use .json to specify application/json or .xml to specify text/xml")
        );
    }

    #[test]
    fn skips_extensions_outside_the_allow_list() {
        let mut uri_parameters = BTreeMap::new();
        apply_media_type_extensions(
            &action(&["application/json", "text/xml"]),
            &mut uri_parameters,
            &allow(&[".json"]),
        );

        let parameter = uri_parameters.get(MEDIA_TYPE_EXTENSION_KEY).unwrap();
        assert_eq!(parameter.enum_values, Some(vec![".json".to_string()]));
    }

    #[test]
    fn unresolvable_content_types_are_skipped_not_fatal() {
        let mut uri_parameters = BTreeMap::new();
        apply_media_type_extensions(
            &action(&["application/x-nonexistent-subtype-zz", "application/json"]),
            &mut uri_parameters,
            &allow(&[".json"]),
        );

        let parameter = uri_parameters.get(MEDIA_TYPE_EXTENSION_KEY).unwrap();
        assert_eq!(parameter.enum_values, Some(vec![".json".to_string()]));
    }

    #[test]
    fn no_parameter_when_nothing_resolves() {
        let mut uri_parameters = BTreeMap::new();
        apply_media_type_extensions(
            &action(&["application/x-nonexistent-subtype-zz"]),
            &mut uri_parameters,
            &allow(&[".json"]),
        );
        assert!(uri_parameters.is_empty());
    }

    #[test]
    fn existing_reserved_key_is_left_untouched() {
        let mut uri_parameters = BTreeMap::new();
        uri_parameters.insert(
            MEDIA_TYPE_EXTENSION_KEY.to_string(),
            RamlNamedParameter {
                description: Some("existing".to_string()),
                ..RamlNamedParameter::default()
            },
        );

        apply_media_type_extensions(
            &action(&["application/json"]),
            &mut uri_parameters,
            &allow(&[".json"]),
        );

        let parameter = uri_parameters.get(MEDIA_TYPE_EXTENSION_KEY).unwrap();
        assert_eq!(parameter.description.as_deref(), Some("existing"));
        assert!(parameter.enum_values.is_none());
    }
}
