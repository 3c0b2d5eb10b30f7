//! Node kinds of the lowered program tree.
//!
//! By the time a tree reaches the checking passes, modules, classes and
//! block-scoped declarations have been rewritten into functions and
//! `var`-style bindings. `NodeKind` is the closed set of what remains.
//!
//! Property keys, member names and statement labels are plain `Name`s:
//! they never name a variable.

mod operators;

pub use operators::{AssignOp, BinaryOp, UnaryOp, UpdateOp};

use crate::{Name, NodeId, NodeRange};

/// Literal values. Numbers are stored as `f64` bits to keep `Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Null,
    Bool(bool),
    Number(u64),
    String(Name),
    RegExp(Name),
}

impl Literal {
    pub fn number(value: f64) -> Self {
        Literal::Number(value.to_bits())
    }
}

/// One node of the lowered tree.
///
/// Optional children use [`NodeId::INVALID`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    // Scope-introducing constructs
    /// Program root.
    Script { items: NodeRange },
    /// `function name(params) body` in statement position.
    FunctionDeclaration {
        name: NodeId,
        params: NodeRange,
        body: NodeId,
    },
    /// `function name?(params) body` in expression position; `name` is
    /// `INVALID` when anonymous.
    FunctionExpression {
        name: NodeId,
        params: NodeRange,
        body: NodeId,
    },
    /// `(params) => body`; `body` is a `FunctionBody` or an expression.
    ArrowFunction { params: NodeRange, body: NodeId },
    /// Object literal method `key(params) { ... }`.
    Method {
        key: Name,
        params: NodeRange,
        body: NodeId,
    },
    /// `get key() { ... }`
    GetAccessor { key: Name, body: NodeId },
    /// `set key(param) { ... }`
    SetAccessor {
        key: Name,
        param: NodeId,
        body: NodeId,
    },
    /// `catch (binding) body`
    Catch { binding: NodeId, body: NodeId },
    FunctionBody { stmts: NodeRange },

    // Name-producing leaves
    /// A name being bound: variable declarator target, parameter, pattern
    /// leaf, function name, catch parameter.
    BindingIdentifier(Name),
    /// A name being read or written.
    IdentifierExpression(Name),

    // Binding patterns
    ObjectPattern { fields: NodeRange },
    /// `key: element` inside an object pattern.
    ObjectPatternField { key: Name, element: NodeId },
    /// Holes are `INVALID` entries.
    ArrayPattern { elements: NodeRange },
    /// `binding = initializer` (parameters and pattern elements).
    BindingElement { binding: NodeId, initializer: NodeId },
    /// `...binding`
    RestParameter { binding: NodeId },

    // Statements
    Block { stmts: NodeRange },
    VariableStatement { declarations: NodeRange },
    VariableDeclaration { binding: NodeId, initializer: NodeId },
    ExpressionStatement { expr: NodeId },
    Return { argument: NodeId },
    If {
        test: NodeId,
        consequent: NodeId,
        alternate: NodeId,
    },
    While { test: NodeId, body: NodeId },
    DoWhile { body: NodeId, test: NodeId },
    For {
        init: NodeId,
        test: NodeId,
        update: NodeId,
        body: NodeId,
    },
    ForIn {
        left: NodeId,
        right: NodeId,
        body: NodeId,
    },
    Switch { discriminant: NodeId, cases: NodeRange },
    /// `test` is `INVALID` for `default:`.
    CaseClause { test: NodeId, body: NodeRange },
    Labelled { label: Name, body: NodeId },
    /// `label` is `Name::EMPTY` when absent.
    Break { label: Name },
    Continue { label: Name },
    Throw { argument: NodeId },
    Try {
        block: NodeId,
        handler: NodeId,
        finalizer: NodeId,
    },
    Empty,
    Debugger,

    // Expressions
    Literal(Literal),
    This,
    /// Holes are `INVALID` entries.
    ArrayLiteral { elements: NodeRange },
    ObjectLiteral { properties: NodeRange },
    PropertyAssignment { key: Name, value: NodeId },
    ComputedPropertyAssignment { key: NodeId, value: NodeId },
    /// `object.property`
    Member { object: NodeId, property: Name },
    /// `object[property]`
    ComputedMember { object: NodeId, property: NodeId },
    Call { callee: NodeId, args: NodeRange },
    New { callee: NodeId, args: NodeRange },
    Unary { op: UnaryOp, operand: NodeId },
    Update {
        op: UpdateOp,
        prefix: bool,
        operand: NodeId,
    },
    Binary {
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
    },
    Assignment {
        op: AssignOp,
        target: NodeId,
        value: NodeId,
    },
    Conditional {
        test: NodeId,
        consequent: NodeId,
        alternate: NodeId,
    },
    Comma { exprs: NodeRange },
    Paren { expr: NodeId },
    Spread { argument: NodeId },
}
