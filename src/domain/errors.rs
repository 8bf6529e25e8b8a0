use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),
}

pub type DomainResult<T> = Result<T, DomainError>;
