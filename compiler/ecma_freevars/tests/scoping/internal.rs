//! Broken invariants abort the check.

use ecma_diagnostic::ErrorCode;
use ecma_freevars::{check_program, AmbientNamespace, FreeVariable, InternalError};
use ecma_ir::{NodeId, StringInterner};
use pretty_assertions::assert_eq;

use crate::common::{check, Fixture};

#[test]
fn unresolved_synthetic_reference_is_internal_error() {
    let interner = StringInterner::new();
    let source = "zzz;";
    let mut t = Fixture::new(&interner, source);

    let user = t.use_stmt("zzz", 0);
    let generated = t.b.synthetic_ident("$tmp");
    let generated_stmt = t.b.expr_stmt(generated);
    let program = t.finish(&[user, generated_stmt]);

    let mut free: Vec<FreeVariable> = Vec::new();
    let result = check_program(&mut free, &program, &AmbientNamespace::empty(), &interner);

    assert_eq!(
        result,
        Err(InternalError::GeneratedVariableNotDefined {
            name: "$tmp".to_owned(),
        })
    );
    assert!(free.is_empty(), "nothing is reported after an internal error");
}

#[test]
fn synthetic_reference_to_synthetic_binding_is_fine() {
    let interner = StringInterner::new();
    let mut t = Fixture::new(&interner, "");

    let binding = t.b.synthetic_binding("$v");
    let var = t.b.var(binding, NodeId::INVALID);
    let generated = t.b.synthetic_ident("$v");
    let ret = t.b.ret(generated);
    let func = t.b.function_expr(NodeId::INVALID, &[], &[var, ret]);
    let stmt = t.b.expr_stmt(func);
    let program = t.finish(&[stmt]);

    assert_eq!(check(&program, &AmbientNamespace::empty(), &interner), Ok(Vec::new()));
}

#[test]
fn synthetic_reference_to_ambient_name_is_fine() {
    let interner = StringInterner::new();
    let mut t = Fixture::new(&interner, "");

    let generated = t.b.synthetic_ident("undefined");
    let stmt = t.b.expr_stmt(generated);
    let program = t.finish(&[stmt]);

    let ambient = AmbientNamespace::ecmascript(&interner);
    assert_eq!(check(&program, &ambient, &interner), Ok(Vec::new()));
}

#[test]
fn internal_error_renders_as_ice_diagnostic() {
    let error = InternalError::GeneratedVariableNotDefined {
        name: "$tmp".to_owned(),
    };
    assert_eq!(error.to_string(), "generated variable $tmp is not defined");

    let diag = error.into_diagnostic();
    assert_eq!(diag.code, ErrorCode::E9001);
    assert_eq!(
        diag.message,
        "internal compiler error: generated variable $tmp is not defined"
    );
    assert!(diag.labels.is_empty());
}
