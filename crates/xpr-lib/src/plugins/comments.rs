use xpr_core::ParseError;

use super::Plugin;
use crate::engine::Engine;
use crate::hooks::{HookEnv, HookPoint};

/// Treats `// line` and `/* block */` comments as whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Comments;

impl Comments {
    pub const NAME: &'static str = "comments";
}

impl Plugin for Comments {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn init(&self, engine: &mut Engine) {
        engine.hooks_mut().add(HookPoint::GobbleSpaces, skip_comment);
    }
}

/// Consumes one comment at the cursor. Surrounding whitespace is left to the
/// parser, which re-runs this hook until nothing more is consumed.
fn skip_comment(env: &mut HookEnv<'_, '_>) -> Result<(), ParseError> {
    let parser = &mut *env.parser;

    if parser.starts_with("//") {
        while parser.current().is_some_and(|ch| ch != '\n') {
            parser.advance(1);
        }
        return Ok(());
    }

    if parser.starts_with("/*") {
        let start = parser.index();
        parser.advance(2);
        loop {
            if parser.starts_with("*/") {
                parser.advance(2);
                return Ok(());
            }
            if parser.is_eof() {
                return Err(ParseError::new("Unclosed comment", start));
            }
            parser.advance(1);
        }
    }

    Ok(())
}
