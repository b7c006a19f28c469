use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined, either in the
    /// process environment or in a `.env` file next to the binary.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but holds no usable value.
    #[error("Environment variable {0} is empty")]
    EmptyEnvVar(String),
}
