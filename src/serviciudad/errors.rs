//! Error taxonomy. Every variant is terminal for the attempt that produced it and
//! its `Display` text is the localized message shown to the user.

use thiserror::Error;

/// Transport-level failures produced by the request helpers before any HTTP status
/// is available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("request timed out")]
    Timeout,
    #[error("unable to reach the server: {0}")]
    Network(String),
    #[error("failed to build request: {0}")]
    Build(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("No se puede conectar con el servidor. Verifique que el servidor esté corriendo: docker-compose up -d")]
    Connection,
    #[error("Tiempo de espera agotado. Verifique que el servidor esté corriendo.")]
    Timeout,
    #[error("Usuario o contraseña incorrectos. Intente nuevamente.")]
    InvalidCredentials,
    #[error("Error al verificar credenciales (HTTP {status})")]
    Verification { status: u16 },
    #[error("Ya hay un inicio de sesión en curso.")]
    InProgress,
}

impl From<RequestError> for LoginError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Timeout => Self::Timeout,
            RequestError::Network(_) | RequestError::Build(_) => Self::Connection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("Por favor ingrese un número de identificación válido de 10 dígitos. Ejemplo: 0001234567")]
    Validation,
    #[error("Error de autenticación. Verifique las credenciales de la API.")]
    Auth,
    #[error("No se encontraron datos para el cliente {client_id}. Verifique que el ID sea correcto.")]
    NotFound { client_id: String },
    #[error("Demasiadas solicitudes. Se excedió el límite de 100 requests por minuto. Por favor espere un momento.")]
    RateLimited,
    #[error("Error del servidor: {}", .message.as_deref().unwrap_or("Error interno"))]
    Server { message: Option<String> },
    #[error("Error del servidor (HTTP {status})")]
    Http { status: u16 },
    #[error("La solicitud tardó demasiado tiempo. Verifique que el servidor esté corriendo: docker-compose ps")]
    Timeout,
    #[error("Error al consultar la deuda. No se puede conectar con el servidor: {0}")]
    Network(String),
    #[error("Respuesta inválida del servidor: {0}")]
    Parse(String),
    #[error("Ya hay una consulta en curso.")]
    InProgress,
    #[error("Su sesión ha finalizado. Por favor inicie sesión nuevamente.")]
    SessionExpired,
}

impl InquiryError {
    /// Heading of the error panel.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation => "Formato inválido",
            Self::Timeout => "Tiempo de espera agotado",
            Self::SessionExpired => "Sesión finalizada",
            _ => "Error en la consulta",
        }
    }

    /// Whether the failure happened locally, without reaching the network.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

impl From<RequestError> for InquiryError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Timeout => Self::Timeout,
            RequestError::Network(message) | RequestError::Build(message) => {
                Self::Network(message)
            }
        }
    }
}
