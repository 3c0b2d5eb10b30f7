//! The free variable walk.
//!
//! One depth-first pass over the tree. Scope-introducing nodes open a frame
//! in the [`ScopeStack`], binding identifiers declare into the active frame
//! and identifier expressions reference from it. Everything else is walked
//! through unchanged.

use ecma_diagnostic::{Diagnostic, DiagnosticConfig};
use ecma_ir::visitor::{walk_list, walk_node, walk_opt, Visitor};
use ecma_ir::{
    Name, NodeArena, NodeId, NodeKind, NodeRange, Program, Span, StringInterner, UnaryOp,
};
use ecma_stack::ensure_sufficient_stack;

use crate::{AmbientNamespace, DiagnosticReporter, InternalError, Reporter, ScopeStack};

/// Report every identifier in `program` that no enclosing scope declares
/// and `ambient` does not provide.
///
/// Free variables reach `reporter` after the walk, ordered by offset, one
/// per name (at its first use).
///
/// # Errors
///
/// An [`InternalError`] if the tree breaks an invariant that earlier passes
/// guarantee. Nothing is reported in that case.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = program.arena.len()))]
pub fn check_program(
    reporter: &mut impl Reporter,
    program: &Program,
    ambient: &AmbientNamespace,
    interner: &StringInterner,
) -> Result<(), InternalError> {
    let mut checker = FreeVariableChecker::new(interner);

    let root = checker.scopes.push();
    for name in ambient.names_in_chain() {
        checker.scopes.declare(name, None);
    }
    walk_opt(&mut checker, program.root, &program.arena)?;
    let free = checker.scopes.pop(root)?;

    tracing::debug!(count = free.len(), "free variables");
    for error in free {
        reporter.report_error(error);
    }
    Ok(())
}

/// [`check_program`] into `E2001` diagnostics against `source`, without an
/// error limit.
pub fn check_program_diagnostics(
    program: &Program,
    ambient: &AmbientNamespace,
    interner: &StringInterner,
    source: &str,
) -> Result<Vec<Diagnostic>, InternalError> {
    let mut reporter =
        DiagnosticReporter::with_config(source, interner, DiagnosticConfig::unlimited());
    check_program(&mut reporter, program, ambient, interner)?;
    Ok(reporter.finish())
}

/// Name and location bound by `id`, if it is a `BindingIdentifier`.
pub fn binding_name(arena: &NodeArena, id: NodeId) -> Option<(Name, Option<Span>)> {
    let id = id.valid()?;
    match *arena.kind(id) {
        NodeKind::BindingIdentifier(name) => Some((name, arena.span(id))),
        _ => None,
    }
}

struct FreeVariableChecker<'a> {
    scopes: ScopeStack<'a>,
    /// The implicit `arguments` binding of every function.
    arguments: Name,
}

impl<'a> FreeVariableChecker<'a> {
    fn new(interner: &'a StringInterner) -> Self {
        FreeVariableChecker {
            scopes: ScopeStack::new(interner),
            arguments: interner.intern("arguments"),
        }
    }

    fn check_node(&mut self, id: NodeId, arena: &NodeArena) -> Result<(), InternalError> {
        match *arena.kind(id) {
            NodeKind::FunctionDeclaration { name, params, body } => {
                // Visible to the enclosing scope, not bound inside the body.
                if let Some((name, span)) = binding_name(arena, name) {
                    self.scopes.declare(name, span);
                }
                self.check_function(NodeId::INVALID, params, body, arena)
            }
            NodeKind::FunctionExpression { name, params, body } => {
                self.check_function(name, params, body, arena)
            }
            NodeKind::ArrowFunction { params, body } | NodeKind::Method { params, body, .. } => {
                self.check_function(NodeId::INVALID, params, body, arena)
            }
            NodeKind::GetAccessor { .. }
            | NodeKind::SetAccessor { .. }
            | NodeKind::Catch { .. } => {
                let scope = self.scopes.push();
                walk_node(self, id, arena)?;
                self.scopes.pop(scope)?;
                Ok(())
            }
            NodeKind::BindingIdentifier(name) => {
                self.scopes.declare(name, arena.span(id));
                Ok(())
            }
            NodeKind::IdentifierExpression(name) => {
                self.scopes.reference(name, arena.span(id));
                Ok(())
            }
            NodeKind::Unary {
                op: UnaryOp::TypeOf,
                operand,
            } => {
                // `typeof x` may probe a name that is never declared; treat it
                // as a declaration for the whole active scope.
                if let NodeKind::IdentifierExpression(name) = *arena.kind(operand) {
                    self.scopes.declare(name, arena.span(operand));
                    Ok(())
                } else {
                    walk_node(self, id, arena)
                }
            }
            _ => walk_node(self, id, arena),
        }
    }

    /// Function-like scope: the expression name (if any), `arguments` and
    /// the parameters are declared inside it.
    fn check_function(
        &mut self,
        name: NodeId,
        params: NodeRange,
        body: NodeId,
        arena: &NodeArena,
    ) -> Result<(), InternalError> {
        let scope = self.scopes.push();
        walk_opt(self, name, arena)?;
        self.scopes.declare(self.arguments, None);
        walk_list(self, params, arena)?;
        walk_opt(self, body, arena)?;
        self.scopes.pop(scope)?;
        Ok(())
    }
}

impl<'ast> Visitor<'ast> for FreeVariableChecker<'_> {
    type Error = InternalError;

    fn visit_node(&mut self, id: NodeId, arena: &'ast NodeArena) -> Result<(), InternalError> {
        ensure_sufficient_stack(|| self.check_node(id, arena))
    }
}
