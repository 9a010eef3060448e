//! Tracing setup

use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the config sets one.
///
/// Log lines go to stderr, which is the terminal the TUI draws on, so the
/// default only lets warnings through. Dialog transitions log at `debug`.
pub const DEFAULT_LOG_FILTER: &str = "user_details_tui=warn";

/// Install the global subscriber. `RUST_LOG` wins over `fallback`.
pub fn init(fallback: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Run `f` under a thread-local subscriber using `filter`, returning what it logged
#[cfg(test)]
pub fn capture<T>(filter: &str, f: impl FnOnce() -> T) -> (T, String) {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let sink = Sink::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::registry().with(EnvFilter::new(filter)).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(move || writer.clone()),
    );
    let result = tracing::subscriber::with_default(subscriber, f);
    let output = String::from_utf8_lossy(&sink.0.lock().unwrap()).into_owned();
    (result, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_passes_warnings() {
        let ((), output) = capture(DEFAULT_LOG_FILTER, || {
            tracing::warn!("config fallback");
            tracing::info!("dialog opened");
        });
        assert!(output.contains("config fallback"));
        assert!(!output.contains("dialog opened"));
    }
}
