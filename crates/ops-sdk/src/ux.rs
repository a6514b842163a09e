use crate::error::Result;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// User-facing output. Diagnostics go through `tracing`; anything the user
/// is meant to read goes through here.
pub struct Ux {
    out: Box<dyn Write + Send>,
}

impl Ux {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self { out: Box::new(out) }
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Write `text` followed by a newline and flush.
    pub fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Cloneable in-memory sink. Every clone shares the same buffer, so one can
/// be handed to [`Ux::new`] and another kept to read what was printed.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        let mut buf = self.0.lock().unwrap_or_else(|e| e.into_inner());
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
