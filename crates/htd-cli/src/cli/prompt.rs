//! Line-based interactive prompts.

use anyhow::{bail, Result};
use std::io::{self, BufRead, Stdout, StdinLock, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the trimmed answer. Errors on end of input.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        match self.read_answer(question)? {
            Some(answer) => Ok(answer),
            None => bail!("no answer for {:?} (end of input)", question.trim()),
        }
    }

    /// True only for `y`/`Y`. End of input declines.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self
            .read_answer(question)?
            .is_some_and(|a| a.eq_ignore_ascii_case("y")))
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn read_answer(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
