/*!
# ramlgen

RAML 0.8 specification generation from an API metadata model.

Given an [`ApiDocumentation`](ramlgen_metadata::ApiDocumentation) graph
from a metadata provider, this crate builds a RAML 0.8 resource tree —
URI/query parameters partitioned per route, the reserved
`mediaTypeExtension` parameter derived from content types, and JSON
Schema bodies with cycle-safe embedded-type flattening — and renders it
as YAML.

## Usage

```rust
use ramlgen::{RamlConfig, RamlExporter, RamlGenerator};
use ramlgen_metadata::ApiDocumentation;

let documentation = ApiDocumentation {
    title: "My API".to_string(),
    api_version: "v1".to_string(),
    api_base_url: "http://localhost:8080".to_string(),
    resources: Vec::new(),
};

let generator = RamlGenerator::new(RamlConfig::default());
let spec = generator.generate(&documentation).unwrap();
let yaml = RamlExporter::to_yaml(&spec, Some("#%RAML 0.8")).unwrap();
assert!(yaml.starts_with("#%RAML 0.8"));
```
*/

// Re-export main types
pub use crate::{
    config::RamlConfig,
    error::{RamlError, RamlResult},
    export::RamlExporter,
    generator::RamlGenerator,
    media_type::MEDIA_TYPE_EXTENSION_KEY,
    schema::{JsonSchema, SchemaGenerator},
    specification::RamlSpec,
};

// Core modules
pub mod config;
pub mod error;
pub mod generator;
pub mod specification;

// Parameter and schema generation
pub mod media_type;
pub mod parameters;
pub mod schema;
pub mod types;

// Export functionality
pub mod export;

// Utilities
pub mod utils;
