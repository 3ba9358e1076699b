use thiserror::Error;

use crate::dates::DateError;

/// Everything that can go wrong between a screen and the backend.
///
/// Screens never branch on the variant: each one collapses to the same kind
/// of alert through [`Error::alert_message`]. The variant only matters for the
/// log line.
#[derive(Debug, Error)]
pub enum Error {
    #[error("falha de comunicação: {0}")]
    Transport(String),
    #[error("o servidor respondeu {status}: {body}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("armazenamento local indisponível: {0}")]
    Storage(String),
}

impl Error {
    /// Text shown in the alert after a failed `action`, e.g.
    /// `"cadastrar o candidato"`.
    pub fn alert_message(&self, action: &str) -> String {
        match self {
            Error::Validation(e) => e.to_string(),
            _ => format!("Ocorreu um erro ao {action}."),
        }
    }

    /// Raw server payload of a non-2xx response.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            Error::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

/// Local form check that blocked a submission before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Preencha todos os campos obrigatórios ({0}).")]
    MissingField(&'static str),
    #[error("O campo {0} deve conter uma URL válida.")]
    InvalidUrl(&'static str),
    #[error("O campo {field} deve estar no formato DD/MM/AAAA.")]
    InvalidDate {
        field: &'static str,
        #[source]
        source: DateError,
    },
    #[error("Selecione um valor para {0}.")]
    MissingChoice(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
