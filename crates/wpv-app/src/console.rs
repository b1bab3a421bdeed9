//! Console sinks and capture.
//!
//! Every console call goes through a [`Console`] handle, which holds one sink
//! per [`ConsoleLevel`]. Out of the box each sink forwards to `tracing`.
//! While the preview is mounted a [`ConsoleCapture`] swaps each sink for a
//! wrapper that forwards to the previous sink and then records the call in a
//! [`LogBuffer`]. Dropping the capture puts the previous sinks back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use wpv_core::{format_args, ConsoleArg, ConsoleLevel, ConsoleLog};

// ─────────────────────────────────────────────────────────────────────────────
// Sinks
// ─────────────────────────────────────────────────────────────────────────────

/// Destination for console calls of one level
pub trait ConsoleSink: Send + Sync {
    fn write(&self, level: ConsoleLevel, args: &[ConsoleArg]);

    /// Downcast hook used when restoring after a capture
    fn as_capture(&self) -> Option<&CapturingSink> {
        None
    }
}

/// The real output sink: console calls become `tracing` events
#[derive(Debug, Default)]
pub struct TracingSink;

impl ConsoleSink for TracingSink {
    fn write(&self, level: ConsoleLevel, args: &[ConsoleArg]) {
        let text = format_args(args)
            .into_iter()
            .map(|part| part.text)
            .collect::<String>();
        match level {
            ConsoleLevel::Log => tracing::info!(target: "wpv::console", "{}", text),
            ConsoleLevel::Info => tracing::info!(target: "wpv::console", "[info] {}", text),
            ConsoleLevel::Warn => tracing::warn!(target: "wpv::console", "{}", text),
            ConsoleLevel::Error => tracing::error!(target: "wpv::console", "{}", text),
        }
    }
}

/// Wrapper installed by [`ConsoleCapture`]
pub struct CapturingSink {
    inner: Arc<dyn ConsoleSink>,
    buffer: LogBuffer,
    attached: AtomicBool,
}

impl CapturingSink {
    /// Whether calls are still being recorded
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }
}

impl ConsoleSink for CapturingSink {
    fn write(&self, level: ConsoleLevel, args: &[ConsoleArg]) {
        self.inner.write(level, args);
        if self.is_attached() {
            self.buffer.push(ConsoleLog::new(level, format_args(args)));
        }
    }

    fn as_capture(&self) -> Option<&CapturingSink> {
        Some(self)
    }
}

/// Skip over capture wrappers that have already been released
fn peel(mut sink: Arc<dyn ConsoleSink>) -> Arc<dyn ConsoleSink> {
    loop {
        let next = match sink.as_capture() {
            Some(capture) if !capture.is_attached() => capture.inner.clone(),
            _ => return sink,
        };
        sink = next;
    }
}

fn same_sink(a: &Arc<dyn ConsoleSink>, b: &Arc<dyn ConsoleSink>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

// ─────────────────────────────────────────────────────────────────────────────
// Console
// ─────────────────────────────────────────────────────────────────────────────

type SinkTable = [Arc<dyn ConsoleSink>; 4];

/// Cloneable handle to the shared per-level sink table.
///
/// Clones share the same table, so a capture installed through one handle
/// is seen by every other handle.
#[derive(Clone)]
pub struct Console {
    sinks: Arc<Mutex<SinkTable>>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl Console {
    /// Console whose sinks all forward to `tracing`
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    /// Console using `sink` for every level
    pub fn with_sink(sink: Arc<dyn ConsoleSink>) -> Self {
        Self {
            sinks: Arc::new(Mutex::new([
                sink.clone(),
                sink.clone(),
                sink.clone(),
                sink,
            ])),
        }
    }

    fn table(&self) -> MutexGuard<'_, SinkTable> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current sink for `level`
    pub fn sink(&self, level: ConsoleLevel) -> Arc<dyn ConsoleSink> {
        self.table()[level.slot()].clone()
    }

    /// Replace the sink for `level`, returning the previous one
    pub fn set_sink(&self, level: ConsoleLevel, sink: Arc<dyn ConsoleSink>) -> Arc<dyn ConsoleSink> {
        std::mem::replace(&mut self.table()[level.slot()], sink)
    }

    /// Send a call to the current sink for `level`.
    ///
    /// The table lock is released before the sink runs, so sinks may log.
    pub fn write(&self, level: ConsoleLevel, args: &[ConsoleArg]) {
        let sink = self.sink(level);
        sink.write(level, args);
    }

    pub fn log(&self, args: &[ConsoleArg]) {
        self.write(ConsoleLevel::Log, args);
    }

    pub fn warn(&self, args: &[ConsoleArg]) {
        self.write(ConsoleLevel::Warn, args);
    }

    pub fn error(&self, args: &[ConsoleArg]) {
        self.write(ConsoleLevel::Error, args);
    }

    pub fn info(&self, args: &[ConsoleArg]) {
        self.write(ConsoleLevel::Info, args);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LogBuffer
// ─────────────────────────────────────────────────────────────────────────────

/// Shared, append-only list of captured console calls
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<Vec<ConsoleLog>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ConsoleLog>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, entry: ConsoleLog) {
        self.lock().push(entry);
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current entries
    pub fn snapshot(&self) -> Vec<ConsoleLog> {
        self.lock().clone()
    }

    /// Borrow the entries without copying them
    pub fn with_entries<R>(&self, f: impl FnOnce(&[ConsoleLog]) -> R) -> R {
        f(&self.lock())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ConsoleCapture
// ─────────────────────────────────────────────────────────────────────────────

/// Guard that records console calls into a buffer while it is alive.
///
/// Installing saves the four current sinks and replaces each with a
/// [`CapturingSink`]. Dropping the guard puts the saved sinks back if our
/// wrapper is still the active one. If another capture was installed on top
/// of ours and is still alive, our wrapper is only detached: it keeps
/// forwarding but stops recording, and the outer capture skips it when it
/// restores.
pub struct ConsoleCapture {
    console: Console,
    saved: SinkTable,
    installed: [Arc<dyn ConsoleSink>; 4],
    wrappers: [Arc<CapturingSink>; 4],
}

impl ConsoleCapture {
    pub fn install(console: &Console, buffer: LogBuffer) -> Self {
        let mut table = console.table();
        let saved: SinkTable = table.clone();

        let wrappers: [Arc<CapturingSink>; 4] = std::array::from_fn(|slot| {
            Arc::new(CapturingSink {
                inner: saved[slot].clone(),
                buffer: buffer.clone(),
                attached: AtomicBool::new(true),
            })
        });
        let installed: [Arc<dyn ConsoleSink>; 4] =
            std::array::from_fn(|slot| wrappers[slot].clone() as Arc<dyn ConsoleSink>);

        for (slot, sink) in installed.iter().enumerate() {
            table[slot] = sink.clone();
        }
        drop(table);

        tracing::debug!("Console capture installed");
        Self {
            console: console.clone(),
            saved,
            installed,
            wrappers,
        }
    }
}

impl Drop for ConsoleCapture {
    fn drop(&mut self) {
        for wrapper in &self.wrappers {
            wrapper.attached.store(false, Ordering::Release);
        }

        let mut table = self.console.table();
        let mut restored = 0;
        for slot in 0..table.len() {
            if same_sink(&table[slot], &self.installed[slot]) {
                table[slot] = peel(self.saved[slot].clone());
                restored += 1;
            }
        }
        drop(table);

        if restored == self.installed.len() {
            tracing::debug!("Console capture removed");
        } else {
            tracing::debug!(
                "Console capture detached ({} of {} sinks restored)",
                restored,
                self.installed.len()
            );
        }
    }
}
