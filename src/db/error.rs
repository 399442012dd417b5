use thiserror::Error;

#[derive(Error, Debug)]
#[allow(unused)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Database connection error: {0}")]
    ConnectionError(String),
}
