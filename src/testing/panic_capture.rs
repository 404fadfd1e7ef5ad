//! Panic capture for the invoking thread
//!
//! A single process-wide hook is installed on first use. While a
//! [`PanicCapture`] guard is alive on a thread, panics raised on that thread
//! are recorded instead of printed; every other thread keeps the previous
//! hook's behavior.

use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::sync::Once;

static INSTALL_HOOK: Once = Once::new();

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static LAST_PANIC: RefCell<Option<PanicRecord>> = const { RefCell::new(None) };
}

/// What the hook saw when the entry point panicked
#[derive(Debug, Clone)]
pub(crate) struct PanicRecord {
    pub(crate) message: String,
    pub(crate) location: Option<String>,
    pub(crate) backtrace: Option<String>,
}

fn install_hook() {
    INSTALL_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if !CAPTURING.with(Cell::get) {
                previous(info);
                return;
            }

            let backtrace = Backtrace::capture();
            let record = PanicRecord {
                message: payload_message(info.payload()),
                location: info
                    .location()
                    .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column())),
                backtrace: match backtrace.status() {
                    std::backtrace::BacktraceStatus::Captured => Some(backtrace.to_string()),
                    _ => None,
                },
            };
            LAST_PANIC.with(|last| *last.borrow_mut() = Some(record));
        }));
    });
}

/// Extract the text of a panic payload
pub(crate) fn payload_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// Whether panics on this thread are currently recorded instead of reported
#[cfg(test)]
pub(crate) fn is_capturing() -> bool {
    CAPTURING.with(Cell::get)
}

/// Scoped panic capture; restores the previous state on drop
pub(crate) struct PanicCapture {
    was_capturing: bool,
}

impl PanicCapture {
    pub(crate) fn start() -> Self {
        install_hook();
        LAST_PANIC.with(|last| last.borrow_mut().take());
        let was_capturing = CAPTURING.with(|c| c.replace(true));
        Self { was_capturing }
    }

    /// Take the record of the most recent captured panic
    pub(crate) fn take(&self) -> Option<PanicRecord> {
        LAST_PANIC.with(|last| last.borrow_mut().take())
    }
}

impl Drop for PanicCapture {
    fn drop(&mut self) {
        CAPTURING.with(|c| c.set(self.was_capturing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_panic() {
        let guard = PanicCapture::start();
        let result = std::panic::catch_unwind(|| panic!("boom {}", 42));
        assert!(result.is_err());

        let record = guard.take().expect("panic should be recorded");
        assert_eq!(record.message, "boom 42");
        assert!(record.location.unwrap().contains("panic_capture.rs"));
    }

    #[test]
    fn test_guard_restores_flag() {
        {
            let _guard = PanicCapture::start();
            assert!(CAPTURING.with(Cell::get));
        }
        assert!(!CAPTURING.with(Cell::get));
    }

    #[test]
    fn test_payload_message_variants() {
        let s: Box<dyn std::any::Any + Send> = Box::new("static");
        assert_eq!(payload_message(&*s), "static");

        let s: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(payload_message(&*s), "owned");

        let s: Box<dyn std::any::Any + Send> = Box::new(7u8);
        assert_eq!(payload_message(&*s), "Box<dyn Any>");
    }
}
