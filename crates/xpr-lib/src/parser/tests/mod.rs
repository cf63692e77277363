mod hooks_tests;

use xpr_core::{AstPrinter, Expr, ParseError};

use crate::Engine;

/// Parses `src` and dumps the tree, panicking on a parse error.
#[track_caller]
fn dump_with(engine: &Engine, src: &str) -> String {
    let ast = parse_with(engine, src);
    AstPrinter::new(ast.as_ref()).dump()
}

#[track_caller]
fn dump(src: &str) -> String {
    dump_with(&Engine::new(), src)
}

#[track_caller]
fn parse_with(engine: &Engine, src: &str) -> Option<Expr> {
    match engine.parse(src) {
        Ok(ast) => ast,
        Err(err) => panic!("expected `{src}` to parse, got: {err}"),
    }
}

#[track_caller]
fn parse(src: &str) -> Expr {
    match parse_with(&Engine::new(), src) {
        Some(ast) => ast,
        None => panic!("expected `{src}` to produce a node"),
    }
}

#[track_caller]
fn error_with(engine: &Engine, src: &str) -> ParseError {
    match engine.parse(src) {
        Ok(ast) => panic!("expected `{src}` to fail, got: {ast:?}"),
        Err(err) => err,
    }
}

#[track_caller]
fn error(src: &str) -> ParseError {
    error_with(&Engine::new(), src)
}
