// In-memory terminal for capturing exercise output

use std::io;

/// Where a transcript line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Written by the exercise
    Output,
    /// Fed to the exercise as input
    Input,
}

/// A line of transcript text with its origin
#[derive(Debug, Clone)]
pub struct TranscriptLine {
    pub text: String,
    pub origin: Origin,
}

/// Captures everything an exercise prints
#[derive(Debug, Clone)]
pub struct Transcript {
    pub lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    /// Print without newline
    pub fn print(&mut self, text: &str) {
        if let Some(last) = self.lines.last_mut() {
            if last.origin == Origin::Output {
                last.text.push_str(text);
                return;
            }
        }
        self.lines.push(TranscriptLine {
            text: text.to_string(),
            origin: Origin::Output,
        });
    }

    /// Record a line that was fed as input
    pub fn echo_input(&mut self, line: &str) {
        self.lines.push(TranscriptLine {
            text: format!("{}\n", line),
            origin: Origin::Input,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        self.styled_output().into_iter().map(|(s, _)| s).collect()
    }

    /// Output lines paired with their origin
    pub fn styled_output(&self) -> Vec<(String, Origin)> {
        self.lines
            .iter()
            .flat_map(|tl| {
                // Split by newlines to handle several prints in one chunk
                let mut result: Vec<(String, Origin)> = tl
                    .text
                    .split('\n')
                    .map(|s| (s.to_string(), tl.origin))
                    .collect();
                // Remove trailing empty string if text ended with newline
                if result.last().is_some_and(|(s, _)| s.is_empty()) {
                    result.pop();
                }
                result
            })
            .collect()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.print(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_prints_join_until_newline() {
        let mut t = Transcript::new();
        write!(t, "The total ").unwrap();
        writeln!(t, "is 8.").unwrap();
        write!(t, "done").unwrap();
        assert_eq!(t.get_output(), vec!["The total is 8.", "done"]);
    }

    #[test]
    fn test_input_lines_are_separate() {
        let mut t = Transcript::new();
        t.print("Next number?\n");
        t.echo_input("5");
        t.print("Next number?\n");
        let styled = t.styled_output();
        assert_eq!(styled.len(), 3);
        assert_eq!(styled[1], ("5".to_string(), Origin::Input));
        assert_eq!(styled[2].1, Origin::Output);
    }

    #[test]
    fn test_empty() {
        let t = Transcript::default();
        assert!(t.is_empty());
        assert!(t.get_output().is_empty());
    }
}
