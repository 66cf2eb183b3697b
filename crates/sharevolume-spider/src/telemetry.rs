use crate::config::Config;
use crate::stock::sec::{source_url, Cik};
use tracing::{debug, trace};

/// CIK the diagnostic ping asks about (Biogen).
pub const PING_CIK: &str = "0000875045";

/// Fire a single, unrelayed GET at the SEC endpoint and forget about it.
///
/// Only runs when `config.telemetry` is set. The response is never read and cannot affect what
/// is displayed; errors are logged at trace level and dropped. Must be called within a tokio
/// runtime.
pub fn ping(config: &Config) -> Option<tokio::task::JoinHandle<()>> {
    if !config.telemetry {
        trace!("telemetry disabled; skipping ping");
        return None;
    }

    let cik = Cik::parse(PING_CIK).ok()?;
    let url = source_url(&config.sec_base, &cik);
    let user_agent = config.user_agent.clone();

    debug!("sending telemetry ping to {url}");
    Some(tokio::spawn(async move {
        let client = match reqwest::ClientBuilder::new().user_agent(user_agent).build() {
            Ok(client) => client,
            Err(err) => {
                trace!("telemetry client failed to build, error({err})");
                return;
            }
        };
        match client.get(&url).send().await {
            Ok(response) => trace!("telemetry ping answered {}", response.status()),
            Err(err) => trace!("telemetry ping failed, error({err})"),
        }
    }))
}
