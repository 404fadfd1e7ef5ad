//! Output capture buffers
//!
//! Two writers share one [`Capture`]: each appends to its own channel and to
//! the combined transcript, so interleaving is kept in write order.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Bytes written during one invocation
#[derive(Debug, Default, Clone)]
pub(crate) struct Capture {
    pub(crate) stdout: Vec<u8>,
    pub(crate) stderr: Vec<u8>,
    pub(crate) combined: Vec<u8>,
}

#[derive(Debug, Clone, Copy)]
enum Channel {
    Stdout,
    Stderr,
}

/// Writer feeding one channel of a shared [`Capture`]
pub(crate) struct CaptureWriter {
    shared: Rc<RefCell<Capture>>,
    channel: Channel,
}

impl CaptureWriter {
    /// Create the stdout/stderr writer pair over a fresh capture
    pub(crate) fn pair() -> (Rc<RefCell<Capture>>, CaptureWriter, CaptureWriter) {
        let shared = Rc::new(RefCell::new(Capture::default()));
        let stdout = CaptureWriter {
            shared: Rc::clone(&shared),
            channel: Channel::Stdout,
        };
        let stderr = CaptureWriter {
            shared: Rc::clone(&shared),
            channel: Channel::Stderr,
        };
        (shared, stdout, stderr)
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut capture = self.shared.borrow_mut();
        match self.channel {
            Channel::Stdout => capture.stdout.extend_from_slice(buf),
            Channel::Stderr => capture.stderr.extend_from_slice(buf),
        }
        capture.combined.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_and_interleaving() {
        let (shared, mut out, mut err) = CaptureWriter::pair();

        write!(out, "one ").unwrap();
        write!(err, "two ").unwrap();
        write!(out, "three").unwrap();

        let capture = shared.borrow();
        assert_eq!(capture.stdout, b"one three");
        assert_eq!(capture.stderr, b"two ");
        assert_eq!(capture.combined, b"one two three");
    }
}
