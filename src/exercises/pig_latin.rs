//! Pig latin line translator
//!
//! A line is split on whitespace and each token is rewritten independently:
//!
//! - a token containing anything other than ASCII letters is copied unchanged
//! - a legal token with no vowel is copied unchanged
//! - a legal token starting with a vowel gets `way` appended (`apple` → `appleway`)
//! - otherwise the leading consonants move to the end followed by `ay`
//!   (`the` → `ethay`)
//!
//! With the `qu` cluster rule a `u` directly after `q` does not count as a
//! vowel, so `quick` becomes `ickquay` rather than `uickqay`.
//!
//! # Trailing artifacts
//!
//! [`ArtifactPolicy::TrailingChar`] reproduces the classic exercise, whose
//! tokenizer left a stray delimiter on the end of each token: the final
//! character of every token is ignored by the legality check and dropped from
//! rearranged output. Whitespace tokenization never leaves such a character,
//! so the default [`ArtifactPolicy::None`] uses the whole token.

use crate::errors::ExerciseError;
use crate::prompt::Prompter;
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "enter ur pig latin: ";

/// How the final character of a token is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtifactPolicy {
    /// Every character belongs to the word
    #[default]
    None,
    /// The final character is a delimiter artifact and is not part of the word
    TrailingChar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    pub artifact: ArtifactPolicy,
    /// Treat `qu` as a consonant cluster
    pub qu_cluster: bool,
}

impl Default for Translator {
    fn default() -> Self {
        Translator {
            artifact: ArtifactPolicy::None,
            qu_cluster: true,
        }
    }
}

/// Case-insensitive check for A, E, I, O, U
pub fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// One rewritten token, borrowed from the input
enum Rewrite<'a> {
    Unchanged(&'a str),
    VowelFirst(&'a str),
    Rotated { head: &'a str, tail: &'a str },
}

impl fmt::Display for Rewrite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rewrite::Unchanged(token) => f.write_str(token),
            Rewrite::VowelFirst(body) => write!(f, "{}way", body),
            Rewrite::Rotated { head, tail } => write!(f, "{}{}ay", tail, head),
        }
    }
}

impl Translator {
    pub fn new(artifact: ArtifactPolicy, qu_cluster: bool) -> Self {
        Translator {
            artifact,
            qu_cluster,
        }
    }

    /// The part of `token` that counts as the word
    fn body<'a>(&self, token: &'a str) -> &'a str {
        match self.artifact {
            ArtifactPolicy::None => token,
            ArtifactPolicy::TrailingChar => match token.char_indices().last() {
                Some((last, _)) => &token[..last],
                None => token,
            },
        }
    }

    /// True when every character of the word body is an ASCII letter
    pub fn is_legal_word(&self, token: &str) -> bool {
        self.body(token).chars().all(|c| c.is_ascii_alphabetic())
    }

    /// Byte index of the first vowel in `token`, or `None` if it has none
    pub fn find_first_vowel(&self, token: &str) -> Option<usize> {
        let mut prev = None;
        for (i, ch) in token.char_indices() {
            let clustered =
                self.qu_cluster && matches!(prev, Some('q' | 'Q')) && ch.eq_ignore_ascii_case(&'u');
            if is_vowel(ch) && !clustered {
                return Some(i);
            }
            prev = Some(ch);
        }
        None
    }

    fn rewrite<'a>(&self, token: &'a str, vowel: Option<usize>) -> Rewrite<'a> {
        let body = self.body(token);
        match vowel {
            None => Rewrite::Unchanged(token),
            Some(0) => Rewrite::VowelFirst(body),
            Some(at) => {
                // A vowel found in the artifact position leaves an empty tail
                let at = at.min(body.len());
                if !body.is_char_boundary(at) {
                    return Rewrite::Unchanged(token);
                }
                let (head, tail) = body.split_at(at);
                Rewrite::Rotated { head, tail }
            }
        }
    }

    /// Write the rearranged form of a legal `token` whose first vowel is at `vowel`
    pub fn rearrange_word<W: Write>(
        &self,
        token: &str,
        vowel: Option<usize>,
        out: &mut W,
    ) -> io::Result<()> {
        write!(out, "{}", self.rewrite(token, vowel))
    }

    fn write_token<W: Write>(&self, token: &str, out: &mut W) -> io::Result<()> {
        if self.is_legal_word(token) {
            self.rearrange_word(token, self.find_first_vowel(token), out)
        } else {
            out.write_all(token.as_bytes())
        }
    }

    /// Translate a single token
    pub fn translate_word(&self, token: &str) -> String {
        if self.is_legal_word(token) {
            self.rewrite(token, self.find_first_vowel(token)).to_string()
        } else {
            token.to_string()
        }
    }

    /// Translate `line` token by token, writing each result to `out` as it is
    /// produced. Tokens are separated by a single space.
    ///
    /// Returns the number of tokens written.
    pub fn translate_line<W: Write>(&self, line: &str, out: &mut W) -> io::Result<usize> {
        let mut count = 0;
        for token in line.split_whitespace() {
            if count > 0 {
                out.write_all(b" ")?;
            }
            self.write_token(token, out)?;
            count += 1;
        }
        Ok(count)
    }
}

/// Prompt for a line and print its translation
pub fn run_pig_latin<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    translator: &Translator,
) -> Result<(), ExerciseError> {
    let line = prompter.get_line(PROMPT)?;
    let out = prompter.writer();
    let tokens = translator.translate_line(&line, out)?;
    writeln!(out)?;
    debug!(tokens, "translated line");
    Ok(())
}
