use std::fmt;

#[derive(Debug)]
pub enum FormError {
    /// Dropdown value is not one of the field's options
    InvalidOption {
        field: String,
        value: String,
        options: Vec<String>,
    },

    /// Number or date value in a format its input cannot produce
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// Field name is not part of the selected form type
    UnknownField { field: String, form_type: String },

    /// Script file could not be read
    ScriptRead { path: String, source: std::io::Error },

    /// Script file is not a valid session script
    ScriptParse { path: String, source: serde_yaml::Error },

    /// Writing rendered output or a submission failed
    Io(std::io::Error),

    /// JSON serialization failed
    Json { context: String, source: serde_json::Error },

    /// Interactive input that is not a known command
    UnknownCommand(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::InvalidOption {
                field,
                value,
                options,
            } => {
                write!(
                    f,
                    "'{}' is not an option for {} (expected one of: {})",
                    value,
                    field,
                    options.join(", ")
                )
            }
            FormError::InvalidValue {
                field,
                value,
                expected,
            } => {
                write!(f, "'{}' is not valid for {} (expected {})", value, field, expected)
            }
            FormError::UnknownField { field, form_type } => {
                write!(f, "'{}' is not a field of {}", field, form_type)
            }
            FormError::ScriptRead { path, source } => {
                write!(f, "Failed to read script {}: {}", path, source)
            }
            FormError::ScriptParse { path, source } => {
                write!(f, "Invalid script {}: {}", path, source)
            }
            FormError::Io(source) => write!(f, "I/O error: {}", source),
            FormError::Json { context, source } => {
                write!(f, "JSON error ({}): {}", context, source)
            }
            FormError::UnknownCommand(cmd) => {
                write!(f, "Unknown command '{}' (try 'help')", cmd)
            }
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::ScriptRead { source, .. } => Some(source),
            FormError::ScriptParse { source, .. } => Some(source),
            FormError::Io(source) => Some(source),
            FormError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FormError {
    fn from(e: std::io::Error) -> Self {
        FormError::Io(e)
    }
}
