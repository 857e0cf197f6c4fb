//! Line-oriented output sink.
//!
//! Programs append to a [Transcript]; the host drains it after every call and renders the
//! entries to the terminal.

/// A single piece of output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// A full line.
    Line(String),
    /// Text that precedes an input on the same line.
    Prompt(String),
}

impl Entry {
    pub fn text(&self) -> &str {
        match self {
            Entry::Line(text) | Entry::Prompt(text) => text,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn say(&mut self, line: impl Into<String>) {
        self.entries.push(Entry::Line(line.into()));
    }

    pub fn blank(&mut self) {
        self.say(String::new());
    }

    pub fn prompt(&mut self, text: impl Into<String>) {
        self.entries.push(Entry::Prompt(text.into()));
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Removes and returns everything written so far.
    pub fn drain(&mut self) -> Vec<Entry> {
        std::mem::take(&mut self.entries)
    }

    /// Returns the last prompt written, if any.
    pub fn last_prompt(&self) -> Option<&str> {
        self.entries.iter().rev().find_map(|entry| match entry {
            Entry::Prompt(text) => Some(text.as_str()),
            Entry::Line(_) => None,
        })
    }

    /// True if any entry contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|entry| entry.text().contains(needle))
    }

    /// Renders the transcript the way a terminal would show it.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                Entry::Line(text) => {
                    out.push_str(text);
                    out.push('\n');
                }
                Entry::Prompt(text) => out.push_str(text),
            }
        }
        out
    }
}
