use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use xpr_core::Expr;

use super::{dump_with, error, error_with, parse_with};
use crate::{Engine, HookPoint};

#[test]
fn gobble_spaces_hook_extends_whitespace() {
    let src = "a // skip all this";
    assert_eq!(error(src).description, "Expected expression after /");

    let mut engine = Engine::new();
    engine.hooks_mut().add(HookPoint::GobbleSpaces, |env| {
        if env.parser.starts_with("//") {
            let rest = env.parser.remaining();
            env.parser.advance(rest);
        }
        Ok(())
    });

    insta::assert_snapshot!(dump_with(&engine, src), @"Identifier a");
}

#[test]
fn gobble_spaces_resumes_after_hook() {
    let mut engine = Engine::new();
    engine.hooks_mut().add(HookPoint::GobbleSpaces, |env| {
        if env.parser.current() == Some('#') {
            env.parser.advance(1);
        }
        Ok(())
    });

    insta::assert_snapshot!(dump_with(&engine, "a # # + # b"), @r"
    BinaryExpression +
      Identifier a
      Identifier b
    ");
}

#[test]
fn gobble_expression_hook_at_front_wins() {
    let src = "fn( 4 * 2";
    assert_eq!(error(src).description, "Expected )");

    let later_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&later_calls);

    let mut engine = Engine::new();
    engine.hooks_mut().add(HookPoint::GobbleExpression, move |env| {
        counter.fetch_add(1, Ordering::SeqCst);
        env.node = Some(Expr::identifier("wrong"));
        Ok(())
    });
    engine.hooks_mut().add_first(HookPoint::GobbleExpression, |env| {
        if env.parser.current() == Some('f') {
            env.parser.advance(9);
            env.node = Some(Expr::identifier("custom"));
        }
        Ok(())
    });

    insta::assert_snapshot!(dump_with(&engine, src), @"Identifier custom");
    assert_eq!(later_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn after_expression_hook_replaces_node() {
    let mut engine = Engine::new();
    engine.hooks_mut().add(HookPoint::AfterExpression, |env| {
        if env.node.is_some() {
            env.node = Some(Expr::identifier("overruled"));
        }
        Ok(())
    });

    insta::assert_snapshot!(dump_with(&engine, "1 + 2"), @"Identifier overruled");
}

#[test]
fn after_expression_hooks_all_run() {
    let mut engine = Engine::new();
    engine
        .hooks_mut()
        .add(HookPoint::AfterExpression, |env| {
            if let Some(node) = env.node.take() {
                env.node = Some(Expr::unary("-", node));
            }
            Ok(())
        })
        .add(HookPoint::AfterExpression, |env| {
            if let Some(node) = env.node.take() {
                env.node = Some(Expr::unary("!", node));
            }
            Ok(())
        });

    insta::assert_snapshot!(dump_with(&engine, "a"), @r"
    UnaryExpression !
      UnaryExpression -
        Identifier a
    ");
}

#[test]
fn gobble_token_hook_supplies_token() {
    let src = "...";
    assert!(error(src).description.contains("period"));

    let mut engine = Engine::new();
    engine.hooks_mut().add(HookPoint::GobbleToken, |env| {
        if env.parser.starts_with("...") {
            env.parser.advance(3);
            env.node = Some(Expr::identifier("spread"));
        }
        Ok(())
    });
    engine.hooks_mut().add(HookPoint::GobbleToken, |env| {
        env.node = Some(Expr::identifier("wrong"));
        Ok(())
    });

    insta::assert_snapshot!(dump_with(&engine, src), @"Identifier spread");
}

#[test]
fn gobble_token_hook_inside_binary_expression() {
    let mut engine = Engine::new();
    engine.hooks_mut().add(HookPoint::GobbleToken, |env| {
        if env.parser.current() == Some('@') {
            env.parser.advance(1);
            let name = env.parser.gobble_identifier()?;
            env.node = Some(Expr::call(Expr::identifier("attr"), vec![name]));
        }
        Ok(())
    });

    insta::assert_snapshot!(dump_with(&engine, "@id + 1"), @r"
    BinaryExpression +
      CallExpression
        Identifier attr
        Identifier id
      Literal 1
    ");
}

#[test]
fn after_token_sees_every_token_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);

    let mut engine = Engine::new();
    engine.hooks_mut().add(HookPoint::AfterToken, move |env| {
        let name = env.node.as_ref().map(Expr::type_name);
        log.lock().unwrap().push(name);
        Ok(())
    });

    parse_with(&engine, "a + 1 * !c(3) || d.e");

    assert_eq!(
        *seen.lock().unwrap(),
        [
            Some("Identifier"),
            Some("CallExpression"),
            Some("UnaryExpression"),
            Some("MemberExpression"),
        ]
    );
}

#[test]
fn after_token_can_rewrite_tokens() {
    let mut engine = Engine::new();
    engine.hooks_mut().add(HookPoint::AfterToken, |env| {
        if let Some(Expr::Identifier { name }) = &mut env.node {
            name.make_ascii_uppercase();
        }
        Ok(())
    });

    insta::assert_snapshot!(dump_with(&engine, "a.b + c"), @r"
    BinaryExpression +
      MemberExpression
        Identifier a
        Identifier b
      Identifier C
    ");
}

#[test]
fn before_and_after_all() {
    let before = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&before);

    let mut engine = Engine::new();
    engine
        .hooks_mut()
        .add(HookPoint::BeforeAll, move |env| {
            counter.fetch_add(1, Ordering::SeqCst);
            assert_eq!(env.parser.index(), 0);
            assert!(env.node.is_none());
            Ok(())
        })
        .add(HookPoint::AfterAll, |env| {
            if env.node.is_none() {
                env.node = Some(Expr::identifier("nothing"));
            }
            Ok(())
        });

    insta::assert_snapshot!(dump_with(&engine, ""), @"Identifier nothing");
    insta::assert_snapshot!(dump_with(&engine, "x"), @"Identifier x");
    assert_eq!(before.load(Ordering::SeqCst), 2);
}

#[test]
fn hook_error_aborts_parse() {
    let mut engine = Engine::new();
    engine.hooks_mut().add(HookPoint::AfterToken, |env| {
        if let Some(Expr::Identifier { name }) = &env.node
            && name == "forbidden"
        {
            return Err(env.parser.error("Forbidden identifier"));
        }
        Ok(())
    });

    let err = error_with(&engine, "a + forbidden");
    assert_eq!(err.description, "Forbidden identifier");
    assert_eq!(err.index, 13);
}

#[test]
fn same_hook_under_several_points() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let hook = crate::Hook::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let mut engine = Engine::new();
    engine.hooks_mut().extend([
        (HookPoint::BeforeAll, hook.clone()),
        (HookPoint::AfterAll, hook.clone()),
        (HookPoint::AfterAll, hook),
    ]);

    parse_with(&engine, "a");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
