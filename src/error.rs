use thiserror::Error;

#[derive(Error, Debug)]
pub enum K6GenError {
    #[error("Failed to serialize {owner}, key = {key}: {source}")]
    Serialization {
        owner: String,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to render {scope}")]
    Render {
        scope: String,
        #[source]
        source: Box<K6GenError>,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Failed to load scenario: {0}")]
    ScenarioLoadError(String),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl K6GenError {
    /// Wrap a child failure with the scope it happened in
    pub fn in_scope(self, scope: impl Into<String>) -> Self {
        K6GenError::Render {
            scope: scope.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping every `Render` wrapper
    pub fn root_cause(&self) -> &K6GenError {
        match self {
            K6GenError::Render { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, K6GenError>;
