//! # ramlgen-metadata
//!
//! The API metadata model consumed by the `ramlgen` specification
//! generator. An external provider (route introspection, annotations,
//! hand-written descriptors) builds an [`ApiDocumentation`] graph; the
//! generator reads it without mutation and renders a RAML 0.8 document
//! from it.
//!
//! Embedded resource types are shared through [`std::rc::Rc`], so one
//! type description can appear under several properties (and the same
//! title can recur at any nesting depth) without duplication.

use std::rc::Rc;

/// Complete documentation for one API, the root of the input graph.
#[derive(Debug, Clone)]
pub struct ApiDocumentation {
    /// API title
    pub title: String,
    /// API version label (e.g. "v1")
    pub api_version: String,
    /// Base URL every relative path hangs off
    pub api_base_url: String,
    /// Documented resources, in provider order
    pub resources: Vec<ApiResourceDocumentation>,
}

/// One documented resource: its type shape plus the actions served on it.
#[derive(Debug, Clone)]
pub struct ApiResourceDocumentation {
    /// Display title, also the stable key for embedded-type deduplication
    pub title: String,
    /// Free-text description
    pub description: Option<String>,
    /// Native type descriptor of the resource itself
    pub type_name: TypeDescriptor,
    /// Request properties of the resource
    pub properties: Vec<ApiPropertyDocumentation>,
    /// Actions (verb + routes) served for this resource
    pub actions: Vec<ApiAction>,
    /// Response type returned by the actions, when declared
    pub return_type: Option<Rc<ApiResourceType>>,
}

/// The type-shaped view of a resource, as consumed by schema generation.
///
/// Both a resource's own request shape and its declared return type are
/// described this way; properties may embed further resource types.
#[derive(Debug, Clone)]
pub struct ApiResourceType {
    pub title: String,
    pub description: Option<String>,
    pub type_name: TypeDescriptor,
    pub properties: Vec<ApiPropertyDocumentation>,
}

/// Common accessor surface over [`ApiResourceType`] and
/// [`ApiResourceDocumentation`], so consumers can document either
/// without converting between them.
pub trait ResourceTypeInfo {
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn type_name(&self) -> &TypeDescriptor;
    fn properties(&self) -> &[ApiPropertyDocumentation];
}

impl ResourceTypeInfo for ApiResourceType {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn type_name(&self) -> &TypeDescriptor {
        &self.type_name
    }

    fn properties(&self) -> &[ApiPropertyDocumentation] {
        &self.properties
    }
}

impl ResourceTypeInfo for ApiResourceDocumentation {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn type_name(&self) -> &TypeDescriptor {
        &self.type_name
    }

    fn properties(&self) -> &[ApiPropertyDocumentation] {
        &self.properties
    }
}

/// One documented property of a resource type.
#[derive(Debug, Clone)]
pub struct ApiPropertyDocumentation {
    /// Stable identifier; matched (case-insensitively) against `{name}`
    /// tokens in route templates
    pub id: String,
    /// Display title
    pub title: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Native type descriptor
    pub property_type: TypeDescriptor,
    /// Tri-state required flag; `None` is treated as `false`
    pub is_required: Option<bool>,
    /// Tri-state repeatability flag; `None` is treated as `false`
    pub allow_multiple: Option<bool>,
    /// Declared value constraint, if any
    pub constraint: Option<PropertyConstraint>,
    /// Embedded structured type, when the property is itself a resource
    pub embedded_resource: Option<Rc<ApiResourceType>>,
}

/// Declared constraint on a property's values.
#[derive(Debug, Clone)]
pub enum PropertyConstraint {
    /// Closed set of allowed values
    List { values: Vec<String> },
    /// Numeric range; either bound may be open
    Range { min: Option<f64>, max: Option<f64> },
}

/// One action (HTTP verb) served for a resource.
#[derive(Debug, Clone)]
pub struct ApiAction {
    /// HTTP verb, e.g. "GET"
    pub verb: String,
    /// Route templates this action answers on; may contain `{name}` tokens
    pub relative_paths: Vec<String>,
    /// Content types the action accepts/produces
    pub content_types: Vec<String>,
    /// Documented response status codes
    pub status_codes: Vec<ApiStatusCode>,
    /// Free-text notes rendered as the method description
    pub notes: Option<String>,
}

/// A documented response status code.
#[derive(Debug, Clone)]
pub struct ApiStatusCode {
    pub code: u16,
    pub name: String,
    pub description: Option<String>,
}

impl ApiStatusCode {
    /// Renders `"{name} - {description}"`, or just the name when no
    /// description was provided.
    pub fn full_description(&self) -> String {
        match self.description.as_deref() {
            Some(description) => format!("{} - {}", self.name, description),
            None => self.name.clone(),
        }
    }
}

/// Native type descriptor supplied by the metadata provider.
///
/// `name` is the provider's type-name token ("string", "int32",
/// "datetime", or any custom name). Nullable value types arrive already
/// unwrapped: `name` holds the underlying type and `nullable` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: String,
    /// The source type was a nullable wrapper around `name`
    pub nullable: bool,
    /// The source type is a reference (object) type
    pub reference: bool,
}

impl TypeDescriptor {
    /// A plain value type.
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            reference: false,
        }
    }

    /// A nullable value type, already unwrapped to its underlying name.
    pub fn nullable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: true,
            reference: false,
        }
    }

    /// A reference (object) type.
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            reference: true,
        }
    }
}
