use std::sync::{Arc, Mutex};

use xpr_core::Expr;

use crate::{Engine, Hook, HookEnv, HookPoint, Hooks, Parser};

fn recorder(log: &Arc<Mutex<Vec<&'static str>>>, label: &'static str) -> Hook {
    let log = Arc::clone(log);
    Hook::new(move |_| {
        log.lock().unwrap().push(label);
        Ok(())
    })
}

#[test]
fn hook_point_names() {
    let names: Vec<_> = HookPoint::ALL.iter().map(|p| p.as_str()).collect();

    insta::assert_debug_snapshot!(names, @r#"
    [
        "before-all",
        "after-all",
        "gobble-spaces",
        "gobble-expression",
        "after-expression",
        "gobble-token",
        "after-token",
    ]
    "#);
}

#[test]
fn hook_point_round_trips_through_str() {
    for point in HookPoint::ALL {
        assert_eq!(point.to_string().parse::<HookPoint>(), Ok(point));
    }
}

#[test]
fn unknown_hook_point() {
    let err = "before-each".parse::<HookPoint>().unwrap_err();
    insta::assert_snapshot!(err, @"unknown hook `before-each`");
}

#[test]
fn search_points() {
    let search: Vec<_> = HookPoint::ALL.into_iter().filter(|p| p.is_search()).collect();
    assert_eq!(search, [HookPoint::GobbleExpression, HookPoint::GobbleToken]);
}

#[test]
fn get_without_hooks_is_empty() {
    let hooks = Hooks::new();

    assert!(hooks.get(HookPoint::AfterToken).is_empty());
    assert!(hooks.is_empty());
    assert_eq!(hooks.len(), 0);
}

#[test]
fn registration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut hooks = Hooks::new();
    hooks
        .add_hook(HookPoint::AfterAll, recorder(&log, "second"))
        .add_hook(HookPoint::AfterAll, recorder(&log, "third"))
        .add_hook_first(HookPoint::AfterAll, recorder(&log, "first"));

    let engine = Engine::new();
    let mut parser = Parser::new(&engine, "");
    let mut env = HookEnv {
        parser: &mut parser,
        node: None,
    };
    hooks.run(HookPoint::AfterAll, &mut env).unwrap();

    assert_eq!(*log.lock().unwrap(), ["first", "second", "third"]);
    assert_eq!(hooks.len(), 3);
}

#[test]
fn same_hook_registered_twice_runs_twice() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let hook = recorder(&log, "hook");

    let mut hooks = Hooks::new();
    hooks
        .add_hook(HookPoint::BeforeAll, hook.clone())
        .add_hook(HookPoint::BeforeAll, hook.clone());

    let stored = hooks.get(HookPoint::BeforeAll);
    assert_eq!(stored.len(), 2);
    assert!(stored[0].ptr_eq(&hook));
    assert!(stored[1].ptr_eq(&hook));

    let engine = Engine::new();
    let mut parser = Parser::new(&engine, "");
    let mut env = HookEnv {
        parser: &mut parser,
        node: None,
    };
    hooks.run(HookPoint::BeforeAll, &mut env).unwrap();

    assert_eq!(log.lock().unwrap().len(), 2);
}

#[test]
fn run_stops_at_first_error() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut hooks = Hooks::new();
    hooks
        .add(HookPoint::AfterAll, |env| Err(env.parser.error("boom")))
        .add_hook(HookPoint::AfterAll, recorder(&log, "never"));

    let engine = Engine::new();
    let mut parser = Parser::new(&engine, "abc");
    parser.advance(2);
    let mut env = HookEnv {
        parser: &mut parser,
        node: None,
    };
    let err = hooks.run(HookPoint::AfterAll, &mut env).unwrap_err();

    assert_eq!(err.to_string(), "boom at character 2");
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn run_threads_node_through_callbacks() {
    let mut hooks = Hooks::new();
    hooks
        .add(HookPoint::AfterExpression, |env| {
            env.node = Some(Expr::identifier("a"));
            Ok(())
        })
        .add(HookPoint::AfterExpression, |env| {
            assert_eq!(env.node, Some(Expr::identifier("a")));
            env.node = Some(Expr::identifier("b"));
            Ok(())
        });

    let engine = Engine::new();
    let mut parser = Parser::new(&engine, "");
    let mut env = HookEnv {
        parser: &mut parser,
        node: None,
    };
    hooks.run(HookPoint::AfterExpression, &mut env).unwrap();

    assert_eq!(env.node, Some(Expr::identifier("b")));
}

#[test]
fn debug_lists_counts() {
    let mut hooks = Hooks::new();
    hooks
        .add(HookPoint::GobbleToken, |_| Ok(()))
        .add(HookPoint::GobbleToken, |_| Ok(()))
        .add(HookPoint::AfterAll, |_| Ok(()));

    insta::assert_snapshot!(format!("{hooks:?}"), @r#"{"gobble-token": 2, "after-all": 1}"#);
}
