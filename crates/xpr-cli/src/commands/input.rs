use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use xpr_lib::{ErrorPrinter, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("expression is required: use a positional argument or -f/--file")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct InputArgs {
    pub expr: Option<String>,
    pub file: Option<PathBuf>,
}

/// Expression text plus the file it came from, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub text: String,
    pub path: Option<String>,
}

impl InputArgs {
    pub fn load(&self) -> Result<Input, InputError> {
        if let Some(text) = &self.expr {
            return Ok(Input {
                text: text.clone(),
                path: None,
            });
        }

        let Some(path) = &self.file else {
            return Err(InputError::Missing);
        };

        if path.as_os_str() == "-" {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(InputError::Stdin)?;
            return Ok(Input { text, path: None });
        }

        let display = path.to_string_lossy().into_owned();
        let text = fs::read_to_string(path).map_err(|source| InputError::File {
            path: display.clone(),
            source,
        })?;
        Ok(Input {
            text,
            path: Some(display),
        })
    }
}

impl Input {
    pub fn render_error(&self, error: &ParseError, color: bool) -> String {
        let mut printer = ErrorPrinter::new(error)
            .source(&self.text)
            .colored(color);
        if let Some(path) = &self.path {
            printer = printer.path(path);
        }
        printer.render()
    }
}

/// Print `error: {msg}` and exit with status 1.
pub fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}
