use pdfcsv_core::error::PdfcsvError;
use std::io::{BufRead, Write};

/// Line-oriented question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print `question` without a newline and read one answer line.
    ///
    /// Only the line terminator is removed from the answer.
    pub fn ask(&mut self, question: &str) -> Result<String, PdfcsvError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PdfcsvError::Input(format!(
                "end of input while waiting for: {}",
                question.trim_end()
            )));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Use `given` if present, otherwise ask and convert the answer.
    pub fn value_or_ask<T: From<String>>(
        &mut self,
        given: Option<T>,
        question: &str,
    ) -> Result<T, PdfcsvError> {
        match given {
            Some(value) => Ok(value),
            None => self.ask(question).map(T::from),
        }
    }
}
