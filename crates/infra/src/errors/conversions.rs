//! Conversions from external infrastructure errors into domain errors.

use gobarber_domain::GoBarberError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub GoBarberError);

impl From<InfraError> for GoBarberError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<GoBarberError> for InfraError {
    fn from(value: GoBarberError) -> Self {
        InfraError(value)
    }
}

trait IntoGoBarberError {
    fn into_gobarber(self) -> GoBarberError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → GoBarberError */
/* -------------------------------------------------------------------------- */

impl IntoGoBarberError for HttpError {
    fn into_gobarber(self) -> GoBarberError {
        if self.is_timeout() {
            return GoBarberError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return GoBarberError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return GoBarberError::MalformedPayload(self.to_string());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message = status.canonical_reason().unwrap_or("unknown status").to_string();

            return match code {
                401 | 403 => GoBarberError::Auth(format!("HTTP {code} {message}")),
                _ => GoBarberError::Status { status: code, message },
            };
        }

        if self.is_builder() {
            return GoBarberError::Config(format!("invalid HTTP request: {self}"));
        }

        GoBarberError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_gobarber())
    }
}
