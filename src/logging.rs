//! Structured JSON logging.
//!
//! One JSON object per line on stdout. Event fields are flattened to the top
//! level, and each line carries `timestamp`, `level`, `threadId` and `target`.

use crate::error::{CounterError, Result};
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

/// Build the JSON subscriber writing to `writer` at `level` and above.
pub fn json_subscriber<W>(level: Level, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_thread_ids(true)
        .with_max_level(level)
        .with_writer(writer)
        .finish()
}

/// Install the process-wide stdout subscriber. Call once, before any event.
pub fn init(level: Level) -> Result<()> {
    tracing::subscriber::set_global_default(json_subscriber(level, std::io::stdout))
        .map_err(|e| CounterError::Config(format!("failed to install logger: {}", e)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::json_subscriber;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = SharedBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` with a thread-local JSON subscriber and return everything it logged.
    pub(crate) fn capture(level: Level, f: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let subscriber = json_subscriber(level, buffer.clone());
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }
}
