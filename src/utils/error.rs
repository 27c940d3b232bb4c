use thiserror::Error;

/// Flat taxonomy of everything that can go wrong in a dashboard action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    UnprocessableEntity,
    InternalServerError,
    ServiceUnavailable,
    Timeout,
    NetworkConnection,
    Unexpected,
    Unknown,
    EmptyField,
    BadInput,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorKind {
    /// Maps an HTTP status returned by the API to a kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::UnprocessableEntity,
            500 => ErrorKind::InternalServerError,
            503 => ErrorKind::ServiceUnavailable,
            _ => ErrorKind::Unknown,
        }
    }

    /// Static message shown to the seller.
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Esse tipo de requisição não é válida.",
            ErrorKind::Unauthorized => "Seu acesso expirou. Entre novamente.",
            ErrorKind::Forbidden => "Essa ação não é permitida.",
            ErrorKind::NotFound => "Recurso não encontrado.",
            ErrorKind::Conflict => "Houve um conflito ao tentar realizar a ação.",
            ErrorKind::UnprocessableEntity => "Esse tipo de requisição não é válida.",
            ErrorKind::InternalServerError => "Erro no servidor.",
            ErrorKind::ServiceUnavailable => "O serviço não está disponível.",
            ErrorKind::Timeout => {
                "Conexão lenta. Sem resposta do servidor dentro do limite de tempo."
            }
            ErrorKind::NetworkConnection => "Não foi possível se conectar ao servidor.",
            ErrorKind::Unexpected => "Erro inesperado... Tente novamente.",
            ErrorKind::Unknown => "Erro desconhecido... Tente novamente.",
            ErrorKind::EmptyField => "Campo obrigatório.",
            ErrorKind::BadInput => "Insira um título de até 60 caractere",
            ErrorKind::Config => "Configuração inválida.",
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Timeout
                | ErrorKind::NetworkConnection
                | ErrorKind::InternalServerError
                | ErrorKind::ServiceUnavailable
        )
    }
}

#[derive(Error, Debug)]
pub enum DashError {
    #[error("API responded with status {status}: {message}")]
    ApiStatus {
        kind: ErrorKind,
        status: u16,
        message: String,
    },

    #[error("HTTP transport error: {source}")]
    Transport {
        kind: ErrorKind,
        #[source]
        source: reqwest::Error,
    },

    #[error("Identity provider error: {message}")]
    Auth { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid config value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Field '{field}' is required")]
    EmptyField { field: String },

    #[error("Invalid value for '{field}': {reason}")]
    BadInput { field: String, reason: String },
}

impl From<reqwest::Error> for DashError {
    fn from(source: reqwest::Error) -> Self {
        let kind = if source.is_timeout() {
            ErrorKind::Timeout
        } else if source.is_connect() || source.is_request() {
            ErrorKind::NetworkConnection
        } else if source.is_decode() || source.is_body() {
            ErrorKind::Unexpected
        } else if let Some(status) = source.status() {
            ErrorKind::from_status(status.as_u16())
        } else {
            ErrorKind::Unknown
        };
        DashError::Transport { kind, source }
    }
}

impl DashError {
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        DashError::ApiStatus {
            kind: ErrorKind::from_status(status),
            status,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DashError::ApiStatus { kind, .. } | DashError::Transport { kind, .. } => *kind,
            DashError::Auth { .. } => ErrorKind::Unauthorized,
            DashError::CsvError(_) | DashError::IoError(_) | DashError::SerializationError(_) => {
                ErrorKind::Unexpected
            }
            DashError::ConfigError { .. }
            | DashError::InvalidConfigValueError { .. }
            | DashError::MissingConfigError { .. } => ErrorKind::Config,
            DashError::EmptyField { .. } => ErrorKind::EmptyField,
            DashError::BadInput { .. } => ErrorKind::BadInput,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.kind() {
            ErrorKind::EmptyField | ErrorKind::BadInput => ErrorSeverity::Medium,
            ErrorKind::Config => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    pub fn user_friendly_message(&self) -> &'static str {
        self.kind().user_message()
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Unauthorized => "Check the identity provider settings or refresh ACCESS_TOKEN",
            ErrorKind::Config => "Check API_URL and the identity provider variables",
            ErrorKind::EmptyField | ErrorKind::BadInput => "Fix the highlighted input and submit again",
            kind if kind.is_retryable() => "Submit the action again in a few moments",
            _ => "Verify the request and try again",
        }
    }

    /// Exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorKind::from_status(400), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(422), ErrorKind::UnprocessableEntity);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::InternalServerError);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::ServiceUnavailable);
        assert_eq!(ErrorKind::from_status(502), ErrorKind::Unknown);
        assert_eq!(ErrorKind::from_status(418), ErrorKind::Unknown);
    }

    #[test]
    fn test_user_messages_are_static() {
        let err = DashError::from_status(500, "boom");
        assert_eq!(err.user_friendly_message(), "Erro no servidor.");
        assert!(err.is_retryable());

        let err = DashError::from_status(409, "dup");
        assert_eq!(
            err.user_friendly_message(),
            "Houve um conflito ao tentar realizar a ação."
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let validation = DashError::EmptyField {
            field: "titles".to_string(),
        };
        assert_eq!(validation.exit_code(), 2);

        let config = DashError::MissingConfigError {
            field: "api_url".to_string(),
        };
        assert_eq!(config.exit_code(), 3);

        assert_eq!(DashError::from_status(404, "").exit_code(), 1);
    }
}
