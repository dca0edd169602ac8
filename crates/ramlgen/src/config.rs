use std::collections::BTreeSet;

/// Configuration for RAML specification generation.
///
/// Both tables are caller-supplied data: the host decides which file
/// extensions its routes answer on and which verbs carry a request
/// body.
#[derive(Debug, Clone)]
pub struct RamlConfig {
    /// File extensions (".json" form) eligible for the reserved
    /// `mediaTypeExtension` URI parameter
    pub allowed_extensions: BTreeSet<String>,

    /// Upper-case verbs that carry query parameters instead of a
    /// request body
    pub bodyless_verbs: BTreeSet<String>,
}

impl Default for RamlConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: [".json", ".xml"].iter().map(|s| s.to_string()).collect(),
            bodyless_verbs: ["GET", "HEAD", "OPTIONS", "DELETE"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl RamlConfig {
    /// Create a configuration with the default tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow an additional media type extension (".jsv" form)
    pub fn with_allowed_extension(mut self, extension: &str) -> Self {
        self.allowed_extensions.insert(extension.to_string());
        self
    }

    /// Replace the extension allow-list
    pub fn with_allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Mark an additional verb as bodyless
    pub fn with_bodyless_verb(mut self, verb: &str) -> Self {
        self.bodyless_verbs.insert(verb.to_ascii_uppercase());
        self
    }

    /// Whether a verb carries query parameters instead of a request body
    pub fn is_bodyless(&self, verb: &str) -> bool {
        self.bodyless_verbs.contains(&verb.to_ascii_uppercase())
    }
}
