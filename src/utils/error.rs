use thiserror::Error;

/// Reply sent for every failure whose cause must stay out of the chat.
pub const GENERIC_FAILURE_REPLY: &str =
    "❌ Lo siento, ocurrió un error al procesar tu solicitud. Por favor, revisa la consola para más detalles.";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Reply failed: {message}")]
    ReplyError { message: String },

    #[error("Permission denied: owner-only command")]
    PermissionDenied,

    #[error("Wrong number of arguments: expected {expected}, got {actual}")]
    ArityError {
        usage: String,
        expected: usize,
        actual: usize,
    },

    #[error("Validation error on '{field}' ({value}): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Service '{id}' already exists in category '{category}'")]
    DuplicateIdError { category: String, id: String },

    #[error("Category '{category}' not found")]
    CategoryNotFound { category: String },

    #[error("Service '{id}' not found in category '{category}'")]
    ServiceNotFound { category: String, id: String },
}

impl CatalogError {
    /// Failures of the machinery rather than of the request itself.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            CatalogError::IoError(_)
                | CatalogError::SerializationError(_)
                | CatalogError::ConfigError { .. }
                | CatalogError::ReplyError { .. }
        )
    }

    /// Text shown to the chat user. Internal failures collapse into one generic reply.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::PermissionDenied => {
                "❌ Lo siento, este comando solo puede ser utilizado por el propietario del bot."
                    .to_string()
            }
            CatalogError::ArityError { usage, .. } => {
                format!("❌ Formato incorrecto. Usa: {}", usage)
            }
            CatalogError::ValidationError { field, value, reason } => {
                format!("❌ Valor inválido para \"{}\" ({}): {}.", field, value, reason)
            }
            CatalogError::DuplicateIdError { category, id } => format!(
                "❌ El servicio con ID \"{}\" ya existe en la categoría \"{}\".",
                id, category
            ),
            CatalogError::CategoryNotFound { category } => {
                format!("❌ La categoría \"{}\" no existe.", category)
            }
            CatalogError::ServiceNotFound { category, id } => format!(
                "❌ No se encontró el servicio con ID \"{}\" en la categoría \"{}\".",
                id, category
            ),
            _ => GENERIC_FAILURE_REPLY.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_their_cause() {
        let io = CatalogError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "/secret/configbot.json",
        ));
        assert!(io.is_internal());
        assert_eq!(io.user_message(), GENERIC_FAILURE_REPLY);
        assert!(!io.user_message().contains("secret"));

        let parse = serde_json::from_str::<serde_json::Value>("{not json")
            .map_err(CatalogError::from)
            .unwrap_err();
        assert!(parse.is_internal());
        assert_eq!(parse.user_message(), GENERIC_FAILURE_REPLY);
    }

    #[test]
    fn request_errors_name_the_offending_values() {
        let dup = CatalogError::DuplicateIdError {
            category: "STREAMING".to_string(),
            id: "netflix1".to_string(),
        };
        assert!(!dup.is_internal());
        let message = dup.user_message();
        assert!(message.contains("netflix1"));
        assert!(message.contains("STREAMING"));

        let missing = CatalogError::CategoryNotFound {
            category: "GHOST".to_string(),
        };
        assert_eq!(missing.user_message(), "❌ La categoría \"GHOST\" no existe.");
    }
}
