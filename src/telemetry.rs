/// Initialize tracing/logging according to RUST_LOG and WEBINFO_LOG_FORMAT.
/// - Defaults to `info` if `RUST_LOG` is unset
/// - Supports `WEBINFO_LOG_FORMAT=json` for JSON logs (stderr)
///
/// Logs always go to stderr so the extracted record on stdout stays parseable.
pub fn init_tracing() {
    use tracing_subscriber::prelude::*; // for .with()
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let builder = tracing_subscriber::registry().with(filter);

    match std::env::var("WEBINFO_LOG_FORMAT").as_deref() {
        Ok("json") => {
            let _ = builder.with(fmt_layer.json().flatten_event(true)).try_init();
        }
        _ => {
            let _ = builder.with(fmt_layer.compact()).try_init();
        }
    }
}
