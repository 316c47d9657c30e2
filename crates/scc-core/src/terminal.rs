pub const BANNER: &str = "SERVER CONTROL CENTER v1.0.0";
pub const BANNER_HINT: &str = "Type 'help' to see available commands";
pub const CLEARED_BANNER: &str = "Terminal cleared";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Accent,
    Heading,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

impl Segment {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputLine {
    pub segments: Vec<Segment>,
}

impl OutputLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Tone::Plain)
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            segments: vec![Segment::new(text, tone)],
        }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn push(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.segments.push(Segment::new(text, tone));
        self
    }

    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalOutput {
    Text(String),
    Block(Vec<OutputLine>),
}

impl TerminalOutput {
    pub fn lines(&self) -> Vec<OutputLine> {
        match self {
            Self::Text(text) => text.split('\n').map(OutputLine::plain).collect(),
            Self::Block(lines) => lines.clone(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Block(_) => None,
        }
    }

    pub fn plain_text(&self) -> String {
        self.lines()
            .iter()
            .map(OutputLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TerminalEntry {
    pub input: Option<String>,
    pub output: Option<TerminalOutput>,
    pub is_error: bool,
    pub is_system: bool,
}

impl TerminalEntry {
    pub fn input(text: impl Into<String>) -> Self {
        Self {
            input: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn output(output: TerminalOutput) -> Self {
        Self {
            output: Some(output),
            ..Self::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::output(TerminalOutput::Text(text.into()))
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            is_system: true,
            ..Self::text(text)
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::text(text)
        }
    }
}

/// Append-only session transcript; only [`Transcript::clear`] shrinks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TerminalEntry>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            entries: vec![
                TerminalEntry::system(BANNER),
                TerminalEntry::system(BANNER_HINT),
            ],
        }
    }
}

impl Transcript {
    pub fn push(&mut self, entry: TerminalEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries = vec![TerminalEntry::system(CLEARED_BANNER)];
    }

    pub fn entries(&self) -> &[TerminalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TerminalEntry> {
        self.entries.last()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_transcript_shows_banner() {
        let transcript = Transcript::default();
        let texts: Vec<Option<&str>> = transcript
            .entries()
            .iter()
            .map(|entry| entry.output.as_ref().and_then(TerminalOutput::as_text))
            .collect();
        assert_eq!(texts, vec![Some(BANNER), Some(BANNER_HINT)]);
        assert!(transcript.entries().iter().all(|entry| entry.is_system));
    }

    #[test]
    fn clear_leaves_a_single_system_entry() {
        let mut transcript = Transcript::default();
        transcript.push(TerminalEntry::input("help"));
        transcript.clear();
        assert_eq!(transcript.entries(), &[TerminalEntry::system(CLEARED_BANNER)]);
    }

    #[test]
    fn block_output_flattens_segments() {
        let output = TerminalOutput::Block(vec![
            OutputLine::plain("a").push("b", Tone::Accent),
            OutputLine::blank(),
        ]);
        assert_eq!(output.plain_text(), "ab\n");
    }
}
