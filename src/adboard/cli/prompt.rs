//! Line-based prompts. End of input always means "cancel" so piping an
//! empty stdin never publishes or deletes anything.

use colored::Colorize;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChoice {
    Pay,
    Back,
    Cancel,
}

pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line, `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks for a field value. An empty answer keeps `current`.
    pub fn ask(&mut self, label: &str, hint: &str, current: &str) -> io::Result<Option<String>> {
        if current.is_empty() {
            write!(self.output, "{} {}: ", label.bold(), format!("({})", hint).dimmed())?;
        } else {
            write!(self.output, "{} [{}]: ", label.bold(), current)?;
        }
        self.output.flush()?;

        Ok(self.read_line()?.map(|answer| {
            if answer.trim().is_empty() {
                current.to_string()
            } else {
                answer
            }
        }))
    }

    /// Yes/no question defaulting to no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{} [y/N] ", question)?;
        self.output.flush()?;
        Ok(matches!(
            self.read_line()?.map(|a| a.trim().to_lowercase()).as_deref(),
            Some("y") | Some("yes")
        ))
    }

    pub fn payment(&mut self) -> io::Result<PaymentChoice> {
        loop {
            write!(self.output, "[p]ay / [b]ack / [c]ancel: ")?;
            self.output.flush()?;
            let answer = match self.read_line()? {
                Some(answer) => answer.trim().to_lowercase(),
                None => return Ok(PaymentChoice::Cancel),
            };
            match answer.as_str() {
                "p" | "pay" => return Ok(PaymentChoice::Pay),
                "b" | "back" => return Ok(PaymentChoice::Back),
                "c" | "cancel" => return Ok(PaymentChoice::Cancel),
                _ => writeln!(self.output, "Please answer p, b or c.")?,
            }
        }
    }
}
