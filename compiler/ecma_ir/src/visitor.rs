//! Tree visitor.
//!
//! A single [`Visitor`] trait with one dispatch point, `visit_node`. Its
//! default calls [`walk_node`], which visits every child of the node
//! depth-first, left to right. Passes override `visit_node`, handle the kinds
//! they care about, and fall back to `walk_node` for everything else, so a
//! new pass-through kind only needs a `walk_node` arm.
//!
//! Visiting is fallible: a pass that detects a broken internal invariant
//! returns `Err` and the walk unwinds immediately.
//!
//! # Example
//!
//! ```text
//! struct CountReferences {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountReferences {
//!     type Error = Infallible;
//!
//!     fn visit_node(&mut self, id: NodeId, arena: &'ast NodeArena) -> Result<(), Infallible> {
//!         if let NodeKind::IdentifierExpression(_) = arena.kind(id) {
//!             self.count += 1;
//!         }
//!         walk_node(self, id, arena)
//!     }
//! }
//! ```

use crate::{NodeArena, NodeId, NodeKind, NodeRange};

/// Tree visitor. The tree is immutable; the visitor may mutate itself.
pub trait Visitor<'ast> {
    /// Error that aborts the walk.
    type Error;

    /// Visit one node. Default: visit its children.
    fn visit_node(&mut self, id: NodeId, arena: &'ast NodeArena) -> Result<(), Self::Error> {
        walk_node(self, id, arena)
    }
}

/// Visit `id` unless it is [`NodeId::INVALID`].
#[inline]
pub fn walk_opt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: NodeId,
    arena: &'ast NodeArena,
) -> Result<(), V::Error> {
    match id.valid() {
        Some(id) => visitor.visit_node(id, arena),
        None => Ok(()),
    }
}

/// Visit every entry of a child list in order, skipping holes.
pub fn walk_list<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    range: NodeRange,
    arena: &'ast NodeArena,
) -> Result<(), V::Error> {
    for &id in arena.list(range) {
        walk_opt(visitor, id, arena)?;
    }
    Ok(())
}

/// Visit the children of `id` in source order.
pub fn walk_node<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: NodeId,
    arena: &'ast NodeArena,
) -> Result<(), V::Error> {
    match *arena.kind(id) {
        NodeKind::Script { items: list }
        | NodeKind::FunctionBody { stmts: list }
        | NodeKind::ObjectPattern { fields: list }
        | NodeKind::ArrayPattern { elements: list }
        | NodeKind::Block { stmts: list }
        | NodeKind::VariableStatement { declarations: list }
        | NodeKind::ArrayLiteral { elements: list }
        | NodeKind::ObjectLiteral { properties: list }
        | NodeKind::Comma { exprs: list } => walk_list(visitor, list, arena),

        NodeKind::FunctionDeclaration { name, params, body }
        | NodeKind::FunctionExpression { name, params, body } => {
            walk_opt(visitor, name, arena)?;
            walk_list(visitor, params, arena)?;
            walk_opt(visitor, body, arena)
        }
        NodeKind::ArrowFunction { params, body } | NodeKind::Method { params, body, .. } => {
            walk_list(visitor, params, arena)?;
            walk_opt(visitor, body, arena)
        }
        NodeKind::SetAccessor { param, body, .. } => {
            walk_opt(visitor, param, arena)?;
            walk_opt(visitor, body, arena)
        }
        NodeKind::Catch {
            binding: first,
            body: second,
        }
        | NodeKind::BindingElement {
            binding: first,
            initializer: second,
        }
        | NodeKind::VariableDeclaration {
            binding: first,
            initializer: second,
        }
        | NodeKind::While {
            test: first,
            body: second,
        }
        | NodeKind::DoWhile {
            body: first,
            test: second,
        }
        | NodeKind::ComputedPropertyAssignment {
            key: first,
            value: second,
        }
        | NodeKind::ComputedMember {
            object: first,
            property: second,
        }
        | NodeKind::Binary {
            left: first,
            right: second,
            ..
        }
        | NodeKind::Assignment {
            target: first,
            value: second,
            ..
        } => {
            walk_opt(visitor, first, arena)?;
            walk_opt(visitor, second, arena)
        }

        NodeKind::GetAccessor { body: child, .. }
        | NodeKind::ObjectPatternField { element: child, .. }
        | NodeKind::RestParameter { binding: child }
        | NodeKind::ExpressionStatement { expr: child }
        | NodeKind::Return { argument: child }
        | NodeKind::Labelled { body: child, .. }
        | NodeKind::Throw { argument: child }
        | NodeKind::PropertyAssignment { value: child, .. }
        | NodeKind::Member { object: child, .. }
        | NodeKind::Unary { operand: child, .. }
        | NodeKind::Update { operand: child, .. }
        | NodeKind::Paren { expr: child }
        | NodeKind::Spread { argument: child } => walk_opt(visitor, child, arena),

        NodeKind::If {
            test,
            consequent,
            alternate,
        }
        | NodeKind::Conditional {
            test,
            consequent,
            alternate,
        } => {
            walk_opt(visitor, test, arena)?;
            walk_opt(visitor, consequent, arena)?;
            walk_opt(visitor, alternate, arena)
        }
        NodeKind::For {
            init,
            test,
            update,
            body,
        } => {
            walk_opt(visitor, init, arena)?;
            walk_opt(visitor, test, arena)?;
            walk_opt(visitor, update, arena)?;
            walk_opt(visitor, body, arena)
        }
        NodeKind::ForIn { left, right, body } => {
            walk_opt(visitor, left, arena)?;
            walk_opt(visitor, right, arena)?;
            walk_opt(visitor, body, arena)
        }
        NodeKind::Switch {
            discriminant,
            cases,
        } => {
            walk_opt(visitor, discriminant, arena)?;
            walk_list(visitor, cases, arena)
        }
        NodeKind::CaseClause { test, body } => {
            walk_opt(visitor, test, arena)?;
            walk_list(visitor, body, arena)
        }
        NodeKind::Try {
            block,
            handler,
            finalizer,
        } => {
            walk_opt(visitor, block, arena)?;
            walk_opt(visitor, handler, arena)?;
            walk_opt(visitor, finalizer, arena)
        }
        NodeKind::Call { callee, args } | NodeKind::New { callee, args } => {
            walk_opt(visitor, callee, arena)?;
            walk_list(visitor, args, arena)
        }

        // Leaves
        NodeKind::BindingIdentifier(_)
        | NodeKind::IdentifierExpression(_)
        | NodeKind::Break { .. }
        | NodeKind::Continue { .. }
        | NodeKind::Empty
        | NodeKind::Debugger
        | NodeKind::Literal(_)
        | NodeKind::This => Ok(()),
    }
}
