use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Absence selects demo mode; it is never a startup failure.
    pub openai_api_key: Option<String>,
    pub openai_org_id: Option<String>,
    pub openai_model: String,
    /// Bounded timeout for the outbound generation call.
    pub request_timeout: Duration,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when `REQUEST_TIMEOUT_SECS`, `HOST` or `PORT` are
    /// present but unparseable. A missing `OPENAI_API_KEY` is not an error.
    pub fn from_env() -> Result<Self, String> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let openai_org_id = env::var("OPENAI_ORG_ID").ok();
        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| format!("REQUEST_TIMEOUT_SECS: {e}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| format!("PORT: {e}"))?,
            Err(_) => DEFAULT_PORT,
        };
        let bind_addr = format!("{host}:{port}")
            .parse::<SocketAddr>()
            .map_err(|e| format!("HOST/PORT: {e}"))?;

        Ok(Self {
            openai_api_key,
            openai_org_id,
            openai_model,
            request_timeout: Duration::from_secs(timeout_secs),
            bind_addr,
        })
    }
}
