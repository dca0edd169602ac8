/*!
Export functionality for RAML specifications.

RAML 0.8 renders resources as top-level keys next to the basic
information block, so the spec is flattened into a single-level ordered
mapping before YAML encoding: an explicit field list first, then every
resource-map entry promoted to its own key (no `resources` wrapper).
*/

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::RamlResult;
use crate::specification::RamlSpec;

/// Export service for RAML specifications
pub struct RamlExporter;

impl RamlExporter {
    /// Flatten a spec into a single-level ordered mapping.
    pub fn flatten(spec: &RamlSpec) -> RamlResult<Mapping> {
        let mut output = Mapping::new();

        insert_if_present(&mut output, "title", &spec.title)?;
        insert_if_present(&mut output, "version", &spec.version)?;
        insert_if_present(&mut output, "baseUri", &spec.base_uri)?;
        insert_if_present(&mut output, "mediaType", &spec.media_type)?;
        insert_if_present(&mut output, "protocols", &spec.protocols)?;
        insert_if_present(&mut output, "documentation", &spec.documentation)?;

        for (path, resource) in &spec.resources {
            output.insert(Value::String(path.clone()), serde_yaml::to_value(resource)?);
        }

        Ok(output)
    }

    /// Render a spec as YAML, optionally prefixed with one literal
    /// header line (e.g. `#%RAML 0.8`) supplied by the caller.
    pub fn to_yaml(spec: &RamlSpec, header: Option<&str>) -> RamlResult<String> {
        let body = serde_yaml::to_string(&Self::flatten(spec)?)?;
        Ok(match header {
            Some(header) => format!("{header}\n{body}"),
            None => body,
        })
    }

    /// Write the YAML artifact to a file.
    pub fn save_to_file<P: AsRef<Path>>(
        spec: &RamlSpec,
        path: P,
        header: Option<&str>,
    ) -> RamlResult<()> {
        fs::write(path.as_ref(), Self::to_yaml(spec, header)?)?;
        Ok(())
    }
}

fn insert_if_present<T: Serialize>(
    output: &mut Mapping,
    key: &str,
    value: &Option<T>,
) -> RamlResult<()> {
    if let Some(value) = value {
        output.insert(Value::String(key.to_string()), serde_yaml::to_value(value)?);
    }
    Ok(())
}
