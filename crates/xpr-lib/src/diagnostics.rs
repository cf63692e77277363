//! Builder-pattern printer for rendering parse errors against their source.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use xpr_core::ParseError;

pub struct ErrorPrinter<'e, 's> {
    error: &'e ParseError,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e ParseError) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    /// Text the error was produced from. Without it only the message is printed.
    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return write!(w, "{}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(char_span(source, self.error.index)));

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report = [Level::ERROR
            .primary_title(&self.error.description)
            .element(snippet)];

        write!(w, "{}", renderer.render(&report))
    }
}

/// Byte range of the character at `index`; empty at end of input.
fn char_span(source: &str, index: usize) -> Range<usize> {
    match source.char_indices().nth(index) {
        Some((start, ch)) => start..start + ch.len_utf8(),
        None => source.len()..source.len(),
    }
}

/// Access to [`ErrorPrinter`] from a [`ParseError`].
pub trait ParseErrorExt {
    fn printer(&self) -> ErrorPrinter<'_, '_>;
}

impl ParseErrorExt for ParseError {
    fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }
}
