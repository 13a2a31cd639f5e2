//! Line-oriented question and answer session for collage parameters
//!
//! Each question mirrors one field of the collector and every answer, empty or
//! not, is handed to it. An empty line therefore clears the directory, title and
//! format and turns grayscale off, while grid and size keep their value because
//! empty text is malformed. End of input counts as a cancelled question.

use crate::io::error::{CollageError, Result};
use crate::params::ParameterCollector;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Answers accepted as "yes" for the grayscale question
pub const AFFIRMATIVE_ANSWERS: [&str; 3] = ["yes", "y", "да"];

/// Whether `answer` switches grayscale on
pub fn parse_confirmation(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&answer.as_str())
}

/// Asks for every parameter in turn over a reader and writer pair
pub struct PromptSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    /// Create a session reading answers from `input` and writing questions to `output`
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question` and read one trimmed line, or `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns an error if writing the question or reading the answer fails
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}: ").map_err(terminal_error)?;
        self.output.flush().map_err(terminal_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(terminal_error)?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Ask all six questions and feed the answers into `collector`
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written
    pub fn collect(&mut self, collector: &mut ParameterCollector) -> Result<()> {
        let current = collector.parameters().clone();

        let directory = self.ask("Image directory")?;
        collector.set_directory(directory.map(PathBuf::from));

        let title = self.ask("Title")?;
        collector.set_title(title.as_deref());

        let grid = current.grid;
        if let Some(text) = self.ask(&format!(
            "Grid as rows x cols [{}x{}]",
            grid.rows, grid.cols
        ))? {
            collector.set_grid(&text);
        }

        let grayscale = self.ask("Convert to grayscale? yes/no")?;
        collector.set_grayscale(grayscale.as_deref().is_some_and(parse_confirmation));

        let canvas = current.canvas;
        if let Some(text) = self.ask(&format!(
            "Collage size as width x height [{}x{}]",
            canvas.width, canvas.height
        ))? {
            collector.set_canvas_size(&text);
        }

        let format = self.ask("Output format (png, jpeg, bmp, ...)")?;
        collector.set_format(format.as_deref());

        Ok(())
    }
}

fn terminal_error(source: std::io::Error) -> CollageError {
    CollageError::FileSystem {
        path: PathBuf::from("<terminal>"),
        operation: "prompt",
        source,
    }
}
