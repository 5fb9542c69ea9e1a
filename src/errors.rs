use thiserror::Error;

/// Registrar Error Types
#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Authorization request failed: {0}")]
    AuthorizationRequest(String),

    #[error("Remote registration failed: {0}")]
    Registration(String),

    #[error("Token store error: {0}")]
    Store(String),
}

impl From<RegistrarError> for String {
    fn from(err: RegistrarError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RegistrarError::AuthorizationRequest("prompt dismissed".to_string());
        assert_eq!(
            err.to_string(),
            "Authorization request failed: prompt dismissed"
        );

        let err = RegistrarError::Store("disk full".to_string());
        let msg: String = err.into();
        assert_eq!(msg, "Token store error: disk full");
    }
}
