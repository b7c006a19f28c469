use crate::error::{config::ConfigError, AppError};

const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";

pub struct Config {
    pub discord_token: String,
}

impl Config {
    /// Loads the bot configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - Token present and non-empty
    /// - `Err(AppError::ConfigErr)` - `DISCORD_TOKEN` missing or blank
    pub fn from_env() -> Result<Self, AppError> {
        let discord_token = std::env::var(DISCORD_TOKEN_VAR)
            .map_err(|_| ConfigError::MissingEnvVar(DISCORD_TOKEN_VAR.to_string()))?;

        Ok(Self::from_token(discord_token)?)
    }

    fn from_token(discord_token: String) -> Result<Self, ConfigError> {
        let discord_token = discord_token.trim().to_string();
        if discord_token.is_empty() {
            return Err(ConfigError::EmptyEnvVar(DISCORD_TOKEN_VAR.to_string()));
        }

        Ok(Self { discord_token })
    }
}
