use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("signal log error: {0}")]
    Store(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("notification error: {0}")]
    Notify(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
