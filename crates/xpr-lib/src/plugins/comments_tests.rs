use indoc::indoc;
use xpr_core::AstPrinter;

use super::Comments;
use crate::Engine;

fn engine() -> Engine {
    let mut engine = Engine::new();
    engine.register_plugin(&Comments).unwrap();
    engine
}

#[track_caller]
fn dump(src: &str) -> String {
    let ast = engine().parse(src).unwrap();
    AstPrinter::new(ast.as_ref()).dump()
}

#[test]
fn line_comment() {
    insta::assert_snapshot!(dump("a // skip all this"), @"Identifier a");
}

#[test]
fn block_comments_between_tokens() {
    insta::assert_snapshot!(dump("a /* x */ + /* y */ /* z */ b"), @r"
    BinaryExpression +
      Identifier a
      Identifier b
    ");
}

#[test]
fn comments_across_lines() {
    let src = indoc! {"
        // leading
        f(
          a, // first
          b  /* second */
        )
    "};

    insta::assert_snapshot!(dump(src), @r"
    CallExpression
      Identifier f
      Identifier a
      Identifier b
    ");
}

#[test]
fn division_is_untouched() {
    insta::assert_snapshot!(dump("a / b"), @r"
    BinaryExpression /
      Identifier a
      Identifier b
    ");
}

#[test]
fn only_comments() {
    insta::assert_snapshot!(dump("/* nothing */ // here"), @"(empty)");
}

#[test]
fn unclosed_block_comment() {
    let err = engine().parse("a + /* b").unwrap_err();

    assert_eq!(err.description, "Unclosed comment");
    assert_eq!(err.index, 4);
}
