//! Host-provided names are declared in the root scope.

use ecma_freevars::AmbientNamespace;
use ecma_ir::{BinaryOp, NodeId, StringInterner};
use pretty_assertions::assert_eq;

use crate::common::{at, check, check_bare, messages, Fixture};

#[test]
fn ecmascript_globals_resolve_at_any_depth() {
    let interner = StringInterner::new();
    let source = "function f() { return function () { return Math.max(undefined, valueOf); }; }";
    let mut t = Fixture::new(&interner, source);

    let math = t.ident("Math", 0);
    let max = t.b.member(math, "max");
    let undefined = t.ident("undefined", 0);
    let value_of = t.ident("valueOf", 0);
    let call = t.b.call(max, &[undefined, value_of]);
    let inner_return = t.b.ret(call);
    let inner = t.b.function_expr(NodeId::INVALID, &[], &[inner_return]);
    let outer_return = t.b.ret(inner);
    let name = t.binding("f", 0);
    let f = t.b.function_decl(name, &[], &[outer_return]);
    let program = t.finish(&[f]);

    let free = check(&program, &AmbientNamespace::ecmascript(&interner), &interner).unwrap();
    assert!(free.is_empty(), "{free:?}");
}

#[test]
fn every_ancestor_namespace_contributes() {
    let interner = StringInterner::new();
    let source = "function f() { return window + navigator + toString; }";
    let mut t = Fixture::new(&interner, source);

    let window = t.ident("window", 0);
    let navigator = t.ident("navigator", 0);
    let to_string = t.ident("toString", 0);
    let left = t.b.binary(BinaryOp::Add, window, navigator);
    let sum = t.b.binary(BinaryOp::Add, left, to_string);
    let ret = t.b.ret(sum);
    let name = t.binding("f", 0);
    let f = t.b.function_decl(name, &[], &[ret]);
    let program = t.finish(&[f]);

    let prototype = AmbientNamespace::from_strs(&interner, &["toString"]);
    let navigator_proto =
        AmbientNamespace::from_strs(&interner, &["navigator"]).with_parent(prototype);
    let global = AmbientNamespace::from_strs(&interner, &["window"]).with_parent(navigator_proto);

    assert!(check(&program, &global, &interner).unwrap().is_empty());

    // Without the outermost ancestor, only its name is missing.
    let truncated = AmbientNamespace::from_strs(&interner, &["window"])
        .with_parent(AmbientNamespace::from_strs(&interner, &["navigator"]));
    let free = check(&program, &truncated, &interner).unwrap();
    assert_eq!(messages(&free, &interner), vec!["toString is not defined"]);
    assert_eq!(free[0].span, at(source, "toString", 0));
}

#[test]
fn globals_are_free_without_an_ambient_namespace() {
    let interner = StringInterner::new();
    let source = "Math;";
    let mut t = Fixture::new(&interner, source);
    let stmt = t.use_stmt("Math", 0);
    let program = t.finish(&[stmt]);

    let free = check_bare(&program, &interner);
    assert_eq!(messages(&free, &interner), vec!["Math is not defined"]);
}

#[test]
fn unknown_host_names_are_still_reported() {
    let interner = StringInterner::new();
    let source = "document.title;";
    let mut t = Fixture::new(&interner, source);
    let document = t.ident("document", 0);
    let title = t.b.member(document, "title");
    let stmt = t.b.expr_stmt(title);
    let program = t.finish(&[stmt]);

    let free = check(&program, &AmbientNamespace::ecmascript(&interner), &interner).unwrap();
    assert_eq!(messages(&free, &interner), vec!["document is not defined"]);
}
