//! Output sinks for human-readable results.
//!
//! Presenters only format and emit; they never make decisions. Domain services
//! write to `&mut dyn Presenter` so the binary can print to stdout and tests
//! can inspect the lines.

/// Line-oriented output sink.
pub trait Presenter {
    fn line(&mut self, line: &str);

    /// Section title followed by its entries.
    fn section(&mut self, title: &str) {
        self.line("");
        self.line(title);
    }
}

/// Writes every line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Buffers lines in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryPresenter {
    lines: Vec<String>,
}

impl MemoryPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if any emitted line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Presenter for MemoryPresenter {
    fn line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
