use postboard_common::LogFormat;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str =
    "postboard_api=info,postboard_store=info,postboard_common=info,tower_http=info";

/// Installs the global subscriber. `RUST_LOG` overrides the default directives.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
