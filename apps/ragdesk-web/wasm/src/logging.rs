//! `tracing` output for the browser console.
//!
//! Events are formatted by `tracing-subscriber`'s fmt layer and each
//! formatted line is handed to the console method matching its level.

use std::io::{self, Write};

use tracing::level_filters::LevelFilter;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the console subscriber. Later calls are no-ops.
pub fn init(level: &str) {
    let filter = parse_level(level);
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(filter)
        .without_time()
        .with_target(false)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(%filter, "console logging ready");
    }
}

fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::INFO)
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and logs it when dropped.
struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = console_line(&self.buffer) else {
            return;
        };
        let line = JsValue::from_str(&line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

fn console_line(buffer: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buffer);
    let line = text.trim_end();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}
