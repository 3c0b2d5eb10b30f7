//! Declarations, closures and the scopes each construct opens.

use ecma_ir::{BinaryOp, NodeId, StringInterner};
use pretty_assertions::assert_eq;

use crate::common::{at, check_bare, messages, Fixture};

#[test]
fn use_before_declaration_in_same_scope() {
    let interner = StringInterner::new();
    let source = "function f() { return x; } var x;";
    let mut t = Fixture::new(&interner, source);

    let ret = t.return_ident("x", 0);
    let name = t.binding("f", 0);
    let f = t.b.function_decl(name, &[], &[ret]);
    let x = t.binding("x", 1);
    let var = t.b.var(x, NodeId::INVALID);
    let program = t.finish(&[f, var]);

    assert!(check_bare(&program, &interner).is_empty());
}

#[test]
fn closure_captures_later_declaration() {
    let interner = StringInterner::new();
    let source = "function outer() { function inner() { return y; } var y; }";
    let mut t = Fixture::new(&interner, source);

    let ret = t.return_ident("y", 0);
    let inner_name = t.binding("inner", 0);
    let inner = t.b.function_decl(inner_name, &[], &[ret]);
    let y = t.binding("y", 1);
    let var = t.b.var(y, NodeId::INVALID);
    let outer_name = t.binding("outer", 0);
    let outer = t.b.function_decl(outer_name, &[], &[inner, var]);
    let program = t.finish(&[outer]);

    assert!(check_bare(&program, &interner).is_empty());
}

#[test]
fn undeclared_name_is_reported_once_at_first_use() {
    let interner = StringInterner::new();
    let source = "function f() { return zzz + zzz; }";
    let mut t = Fixture::new(&interner, source);

    let first = t.ident("zzz", 0);
    let second = t.ident("zzz", 1);
    let sum = t.b.binary(BinaryOp::Add, first, second);
    let ret = t.b.ret(sum);
    let name = t.binding("f", 0);
    let f = t.b.function_decl(name, &[], &[ret]);
    let program = t.finish(&[f]);

    let free = check_bare(&program, &interner);
    assert_eq!(messages(&free, &interner), vec!["zzz is not defined"]);
    assert_eq!(free[0].span, at(source, "zzz", 0));
}

#[test]
fn promotion_keeps_the_innermost_location() {
    let interner = StringInterner::new();
    let source = "function a1() { function a2() { function a3() { return deep; } } }";
    let mut t = Fixture::new(&interner, source);

    let ret = t.return_ident("deep", 0);
    let a3_name = t.binding("a3", 0);
    let a3 = t.b.function_decl(a3_name, &[], &[ret]);
    let a2_name = t.binding("a2", 0);
    let a2 = t.b.function_decl(a2_name, &[], &[a3]);
    let a1_name = t.binding("a1", 0);
    let a1 = t.b.function_decl(a1_name, &[], &[a2]);
    let program = t.finish(&[a1]);

    let free = check_bare(&program, &interner);
    assert_eq!(free.len(), 1);
    assert_eq!(free[0].span, at(source, "deep", 0));
}

#[test]
fn outer_reference_location_is_not_overwritten() {
    let interner = StringInterner::new();
    let source = "function f() { zzz; function g() { return zzz; } }";
    let mut t = Fixture::new(&interner, source);

    let outer_use = t.use_stmt("zzz", 0);
    let ret = t.return_ident("zzz", 1);
    let g_name = t.binding("g", 0);
    let g = t.b.function_decl(g_name, &[], &[ret]);
    let f_name = t.binding("f", 0);
    let f = t.b.function_decl(f_name, &[], &[outer_use, g]);
    let program = t.finish(&[f]);

    let free = check_bare(&program, &interner);
    assert_eq!(free.len(), 1);
    assert_eq!(free[0].span, at(source, "zzz", 0));
}

#[test]
fn function_declaration_name_is_visible_around_it() {
    let interner = StringInterner::new();
    let source = "foo(); function foo() { return foo; }";
    let mut t = Fixture::new(&interner, source);

    let callee = t.ident("foo", 0);
    let call = t.b.call(callee, &[]);
    let call_stmt = t.b.expr_stmt(call);
    let name = t.binding("foo", 1);
    let ret = t.return_ident("foo", 2);
    let foo = t.b.function_decl(name, &[], &[ret]);
    let program = t.finish(&[call_stmt, foo]);

    assert!(check_bare(&program, &interner).is_empty());
}

#[test]
fn function_expression_name_is_visible_only_inside() {
    let interner = StringInterner::new();
    let source = "var h = function fact(n) { return n + fact(n); }; fact;";
    let mut t = Fixture::new(&interner, source);

    let fact_name = t.binding("fact", 0);
    let n = t.binding("n", 0);
    let n_use = t.ident("n", 1);
    let callee = t.ident("fact", 1);
    let arg = t.ident("n", 2);
    let call = t.b.call(callee, &[arg]);
    let sum = t.b.binary(BinaryOp::Add, n_use, call);
    let ret = t.b.ret(sum);
    let fact = t.b.function_expr(fact_name, &[n], &[ret]);
    let h = t.binding("h", 0);
    let var = t.b.var(h, fact);
    let outer_use = t.use_stmt("fact", 2);
    let program = t.finish(&[var, outer_use]);

    let free = check_bare(&program, &interner);
    assert_eq!(messages(&free, &interner), vec!["fact is not defined"]);
    assert_eq!(free[0].span, at(source, "fact", 2));
}

#[test]
fn parameters_are_local_to_their_function() {
    let interner = StringInterner::new();
    let source = "function f(a, b) { return a + b; } a;";
    let mut t = Fixture::new(&interner, source);

    let a = t.binding("a", 0);
    let b = t.binding("b", 0);
    let a_use = t.ident("a", 1);
    let b_use = t.ident("b", 1);
    let sum = t.b.binary(BinaryOp::Add, a_use, b_use);
    let ret = t.b.ret(sum);
    let name = t.binding("f", 0);
    let f = t.b.function_decl(name, &[a, b], &[ret]);
    let outer_use = t.use_stmt("a", 2);
    let program = t.finish(&[f, outer_use]);

    let free = check_bare(&program, &interner);
    assert_eq!(messages(&free, &interner), vec!["a is not defined"]);
    assert_eq!(free[0].span, at(source, "a", 2));
}

#[test]
fn function_locals_do_not_leak() {
    let interner = StringInterner::new();
    let source = "function f() { var local; } local;";
    let mut t = Fixture::new(&interner, source);

    let local = t.binding("local", 0);
    let var = t.b.var(local, NodeId::INVALID);
    let name = t.binding("f", 0);
    let f = t.b.function_decl(name, &[], &[var]);
    let outer_use = t.use_stmt("local", 1);
    let program = t.finish(&[f, outer_use]);

    let free = check_bare(&program, &interner);
    assert_eq!(messages(&free, &interner), vec!["local is not defined"]);
}

#[test]
fn redeclaration_is_not_an_error() {
    let interner = StringInterner::new();
    let source = "function f(x) { var x; return x; }";
    let mut t = Fixture::new(&interner, source);

    let param = t.binding("x", 0);
    let x = t.binding("x", 1);
    let var = t.b.var(x, NodeId::INVALID);
    let ret = t.return_ident("x", 2);
    let name = t.binding("f", 0);
    let f = t.b.function_decl(name, &[param], &[var, ret]);
    let program = t.finish(&[f]);

    assert!(check_bare(&program, &interner).is_empty());
}

#[test]
fn destructuring_parameters_declare_every_leaf() {
    let interner = StringInterner::new();
    let source = "function f({ k: x }, [y, , ...z], w = fallback) { return x + y + z + w; }";
    let mut t = Fixture::new(&interner, source);

    let x = t.binding("x", 0);
    let object = t.b.object_pattern(&[("k", x)]);
    let y = t.binding("y", 0);
    let z = t.binding("z", 0);
    let rest = t.b.rest(z);
    let array = t.b.array_pattern(&[y, NodeId::INVALID, rest]);
    let w = t.binding("w", 0);
    let fallback = t.ident("fallback", 0);
    let defaulted = t.b.with_default(w, fallback);

    let mut sum = t.ident("x", 1);
    for name in ["y", "z", "w"] {
        let term = t.ident(name, 1);
        sum = t.b.binary(BinaryOp::Add, sum, term);
    }
    let ret = t.b.ret(sum);
    let name = t.binding("f", 0);
    let f = t.b.function_decl(name, &[object, array, defaulted], &[ret]);
    let program = t.finish(&[f]);

    let free = check_bare(&program, &interner);
    assert_eq!(messages(&free, &interner), vec!["fallback is not defined"]);
}

#[test]
fn arguments_exists_inside_functions_only() {
    let interner = StringInterner::new();
    let source = "function f() { return arguments; } var g = () => arguments; arguments;";
    let mut t = Fixture::new(&interner, source);

    let ret = t.return_ident("arguments", 0);
    let name = t.binding("f", 0);
    let f = t.b.function_decl(name, &[], &[ret]);
    let arrow_body = t.ident("arguments", 1);
    let arrow = t.b.arrow_expr(&[], arrow_body);
    let g = t.binding("g", 0);
    let var = t.b.var(g, arrow);
    let outer_use = t.use_stmt("arguments", 2);
    let program = t.finish(&[f, var, outer_use]);

    let free = check_bare(&program, &interner);
    assert_eq!(messages(&free, &interner), vec!["arguments is not defined"]);
    assert_eq!(free[0].span, at(source, "arguments", 2));
}

#[test]
fn catch_parameter_is_scoped_to_the_handler() {
    let interner = StringInterner::new();
    let source = "try { } catch (e) { e; } e;";
    let mut t = Fixture::new(&interner, source);

    let e = t.binding("e", 0);
    let inner_use = t.use_stmt("e", 1);
    let try_stmt = t.b.try_stmt(&[], e, &[inner_use], None);
    let outer_use = t.use_stmt("e", 2);
    let program = t.finish(&[try_stmt, outer_use]);

    let free = check_bare(&program, &interner);
    assert_eq!(messages(&free, &interner), vec!["e is not defined"]);
    assert_eq!(free[0].span, at(source, "e", 2));
}

#[test]
fn catch_handler_sees_enclosing_declarations() {
    let interner = StringInterner::new();
    let source = "var log; try { } catch (e) { log(e); } finally { log; }";
    let mut t = Fixture::new(&interner, source);

    let log = t.binding("log", 0);
    let var = t.b.var(log, NodeId::INVALID);
    let e = t.binding("e", 0);
    let callee = t.ident("log", 1);
    let arg = t.ident("e", 1);
    let call = t.b.call(callee, &[arg]);
    let call_stmt = t.b.expr_stmt(call);
    let finally_use = t.use_stmt("log", 2);
    let try_stmt = t.b.try_stmt(&[], e, &[call_stmt], Some(&[finally_use][..]));
    let program = t.finish(&[var, try_stmt]);

    assert!(check_bare(&program, &interner).is_empty());
}

#[test]
fn accessors_and_methods_open_scopes() {
    let interner = StringInterner::new();
    let source = "var o = { get v() { return hidden; }, set v(val) { val; }, \
                  m(p) { return p + arguments; } }; val; p;";
    let mut t = Fixture::new(&interner, source);

    let hidden = t.return_ident("hidden", 0);
    let getter = t.b.getter("v", &[hidden]);
    let val = t.binding("val", 0);
    let val_use = t.use_stmt("val", 1);
    let setter = t.b.setter("v", val, &[val_use]);
    let p = t.binding("p", 0);
    let p_use = t.ident("p", 1);
    let arguments = t.ident("arguments", 0);
    let sum = t.b.binary(BinaryOp::Add, p_use, arguments);
    let ret = t.b.ret(sum);
    let method = t.b.method("m", &[p], &[ret]);
    let object = t.b.object(&[getter, setter, method]);
    let o = t.binding("o", 0);
    let var = t.b.var(o, object);
    let val_outer = t.use_stmt("val", 2);
    let p_outer = t.use_stmt("p", 2);
    let program = t.finish(&[var, val_outer, p_outer]);

    let free = check_bare(&program, &interner);
    assert_eq!(
        messages(&free, &interner),
        vec![
            "hidden is not defined",
            "val is not defined",
            "p is not defined",
        ]
    );
    assert_eq!(free[1].span, at(source, "val", 2));
    assert_eq!(free[2].span, at(source, "p", 2));
}

#[test]
fn property_keys_are_not_references() {
    let interner = StringInterner::new();
    let source = "var o = { key: 1 }; o.missing;";
    let mut t = Fixture::new(&interner, source);

    let one = t.b.number(1.0);
    let property = t.b.property("key", one);
    let object = t.b.object(&[property]);
    let o = t.binding("o", 0);
    let var = t.b.var(o, object);
    let o_use = t.ident("o", 1);
    let member = t.b.member(o_use, "missing");
    let stmt = t.b.expr_stmt(member);
    let program = t.finish(&[var, stmt]);

    assert!(check_bare(&program, &interner).is_empty());
}
