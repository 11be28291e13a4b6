pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

#[cfg(target_arch = "wasm32")]
/// Setup the logging system for the browser.
/// Installs the panic hook and a [`tracing-web`] console writer with the performance layer.
pub fn setup() -> Result<(), LogError> {
    console_error_panic_hook::set_once();

    #[cfg(feature = "dev-logging")]
    {
        use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
        use tracing_subscriber::fmt::time::UtcTime;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_timer(UtcTime::rfc_3339())
            .with_writer(tracing_web::MakeConsoleWriter)
            .with_span_events(FmtSpan::ACTIVE);
        let perf_layer =
            tracing_web::performance_layer().with_details_from_fields(Pretty::default());

        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(perf_layer)
            .try_init()
            .map_err(|e| LogError::TracingSubscriber(Box::new(e)))?;
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
/// Setup the logging system for native builds (tests, tooling).
/// Installs [`color_eyre`] and a [`tracing-subscriber`] fmt subscriber.
/// `RUST_LOG` defaults to `huddle=debug` when unset.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    color_eyre::install().map_err(LogError::ColorEyre)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("huddle=debug"));
    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
