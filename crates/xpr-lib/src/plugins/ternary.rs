use xpr_core::{Expr, ParseError};

use super::Plugin;
use crate::engine::Engine;
use crate::hooks::{HookEnv, HookPoint};

/// `test ? consequent : alternate` as a `ConditionalExpression`.
///
/// Nested conditionals in the alternate position group to the right:
/// `a ? b : c ? d : e` is `a ? b : (c ? d : e)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ternary;

impl Ternary {
    pub const NAME: &'static str = "ternary";
}

impl Plugin for Ternary {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn init(&self, engine: &mut Engine) {
        engine.hooks_mut().add(HookPoint::AfterExpression, gobble_conditional);
    }
}

fn gobble_conditional(env: &mut HookEnv<'_, '_>) -> Result<(), ParseError> {
    if env.parser.current() != Some('?') {
        return Ok(());
    }
    let Some(test) = env.node.take() else {
        return Ok(());
    };
    let parser = &mut *env.parser;
    parser.advance(1);

    let Some(consequent) = parser.gobble_expression()? else {
        return Err(parser.error("Expected expression"));
    };
    if parser.current() != Some(':') {
        return Err(parser.error("Expected :"));
    }
    parser.advance(1);

    let Some(alternate) = parser.gobble_expression()? else {
        return Err(parser.error("Expected expression"));
    };

    env.node = Some(Expr::conditional(test, consequent, alternate));
    Ok(())
}
