use std::error::Error;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,sqlx=warn";

/// Where log events go. Console output is always on; Loki shipping is added
/// when `LOKI_URL` is set and `LOKI_ENABLED` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub filter: String,
    pub loki: Option<LokiTarget>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LokiTarget {
    pub url: String,
    pub service: String,
    pub environment: String,
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let loki_enabled = lookup("LOKI_ENABLED")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let loki = match (loki_enabled, lookup("LOKI_URL")) {
            (false, _) => None,
            (true, None) => return Err("LOKI_ENABLED is true but LOKI_URL is not set".to_string()),
            (true, Some(url)) => Some(LokiTarget {
                url,
                service: lookup("SERVICE_NAME").unwrap_or_else(|| "stock-strategy".to_string()),
                environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            }),
        };

        Ok(Self {
            filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            loki,
        })
    }
}

/// Installs the global subscriber. With the `loki` feature and a Loki target
/// this must run inside the tokio runtime, since the shipper is a spawned task.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn Error>> {
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::new(&config.filter))
        .with(fmt::layer());

    #[cfg(feature = "loki")]
    let registry = registry.with(loki_layer(config.loki.as_ref())?);

    registry.try_init()?;

    match &config.loki {
        Some(target) if cfg!(feature = "loki") => {
            tracing::info!("Logging to console and Loki at {}", target.url)
        }
        Some(_) => tracing::warn!("LOKI_ENABLED is set but the binary was built without `loki`"),
        None => tracing::info!("Logging to console"),
    }
    Ok(())
}

#[cfg(feature = "loki")]
fn loki_layer(target: Option<&LokiTarget>) -> Result<Option<tracing_loki::Layer>, Box<dyn Error>> {
    let Some(target) = target else {
        return Ok(None);
    };

    let (layer, task) = tracing_loki::builder()
        .label("service", &target.service)?
        .label("environment", &target.environment)?
        .build_url(url::Url::parse(&target.url)?)?;
    tokio::spawn(task);
    Ok(Some(layer))
}
