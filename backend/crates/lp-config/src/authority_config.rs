use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTHORITY_TIMEOUT_SECS, DEFAULT_VERIFY_PATH,
    MAX_AUTHORITY_TIMEOUT_SECS, MIN_AUTHORITY_TIMEOUT_SECS,
};

use serde::Deserialize;

/// External credential authority endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthorityConfig {
    /// e.g. "https://auth.example.com"; logins are refused while unset
    pub base_url: Option<String>,
    pub verify_path: String,
    pub timeout_secs: u64,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            verify_path: String::from(DEFAULT_VERIFY_PATH),
            timeout_secs: DEFAULT_AUTHORITY_TIMEOUT_SECS,
        }
    }
}

impl AuthorityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref base_url) = self.base_url
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            return Err(ConfigError::authority(format!(
                "authority.base_url must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        if !self.verify_path.starts_with('/') {
            return Err(ConfigError::authority(format!(
                "authority.verify_path must start with '/', got '{}'",
                self.verify_path
            )));
        }

        if self.timeout_secs < MIN_AUTHORITY_TIMEOUT_SECS
            || self.timeout_secs > MAX_AUTHORITY_TIMEOUT_SECS
        {
            return Err(ConfigError::authority(format!(
                "authority.timeout_secs must be {}-{}, got {}",
                MIN_AUTHORITY_TIMEOUT_SECS, MAX_AUTHORITY_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Full verification URL, if an authority is configured.
    pub fn verify_url(&self) -> Option<String> {
        self.base_url
            .as_ref()
            .map(|base| format!("{}{}", base.trim_end_matches('/'), self.verify_path))
    }
}
