use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

// =============================================================================
// Shared console handle
// =============================================================================

/// Which stream a recorded line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Out,
    Err,
}

#[derive(Debug, Default)]
struct Transcript {
    lines: Vec<(Stream, String)>,
    echo: bool,
}

/// Handle every example writes its narration through.
///
/// Clones share one transcript, so a receiver, a command and the invoker
/// that triggers it all append to the same ordered record. When echo is on
/// each line is printed as soon as it is said.
#[derive(Debug, Clone, Default)]
pub struct Console {
    inner: Rc<RefCell<Transcript>>,
}

impl Console {
    /// Records and prints.
    pub fn echoing() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Transcript {
                lines: Vec::new(),
                echo: true,
            })),
        }
    }

    /// Records only.
    pub fn recording() -> Self {
        Self::default()
    }

    pub fn say(&self, line: impl Into<String>) {
        self.push(Stream::Out, line.into());
    }

    /// Diagnostic output, printed to stderr when echoing.
    pub fn warn(&self, line: impl Into<String>) {
        self.push(Stream::Err, line.into());
    }

    fn push(&self, stream: Stream, line: String) {
        let mut transcript = self.inner.borrow_mut();
        if transcript.echo {
            // A closed pipe only loses the echo; the transcript keeps the line.
            let _ = match stream {
                Stream::Out => writeln!(io::stdout().lock(), "{line}"),
                Stream::Err => writeln!(io::stderr().lock(), "{line}"),
            };
        }
        transcript.lines.push((stream, line));
    }

    /// All recorded lines regardless of stream, in order.
    pub fn lines(&self) -> Vec<String> {
        self.inner
            .borrow()
            .lines
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn lines_on(&self, stream: Stream) -> Vec<String> {
        self.inner
            .borrow()
            .lines
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn last(&self) -> Option<String> {
        self.inner.borrow().lines.last().map(|(_, line)| line.clone())
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.inner
            .borrow()
            .lines
            .iter()
            .any(|(_, line)| line.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().lines.clear();
    }
}
