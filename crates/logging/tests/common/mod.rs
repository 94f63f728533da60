//! Shared helpers for the integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use chanlog::{ConsoleConfig, Core};

/// In-memory writer shared between the five console sinks, so tests observe
/// the interleaved output of the whole table in dispatch order.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("lock").clone()).expect("utf-8")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Builds an owned core with the console table installed over a shared
/// buffer, returning both.
pub fn console_core(config: ConsoleConfig) -> (Core, SharedBuf) {
    let buf = SharedBuf::default();
    let mut core = Core::new();
    config.install(&mut core, || Box::new(buf.clone()));
    (core, buf)
}
