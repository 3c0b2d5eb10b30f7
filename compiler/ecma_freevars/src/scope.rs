//! Scope table.
//!
//! Scopes nest strictly, so the open frames are a stack: the last entry is
//! the active scope and the only one that is ever written. Each frame keeps
//! two maps with insert-if-absent semantics:
//!
//! - `declarations`: name -> location of its first declaration
//! - `references`: name -> location of its first unresolved use
//!
//! Resolution is deferred to [`ScopeStack::pop`]. By then the whole subtree
//! of the frame has been visited, so every declaration it will ever have is
//! known, regardless of textual order. Whatever the frame cannot resolve is
//! promoted to the parent; whatever the root cannot resolve is free.

use std::collections::hash_map::Entry;
use std::fmt;

use ecma_ir::{Name, Span, StringInterner};
use rustc_hash::FxHashMap;

use crate::{FreeVariable, InternalError};

/// Handle to an open scope, returned by [`ScopeStack::push`].
///
/// Ids are never reused within one stack, so a stale handle is detected.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeId(u32);

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope #{}", self.0)
    }
}

/// One lexical frame. `None` locations belong to synthesized nodes.
#[derive(Debug)]
struct Scope {
    id: ScopeId,
    declarations: FxHashMap<Name, Option<Span>>,
    references: FxHashMap<Name, Option<Span>>,
}

impl Scope {
    fn new(id: ScopeId) -> Self {
        Scope {
            id,
            declarations: FxHashMap::default(),
            references: FxHashMap::default(),
        }
    }

    /// References with no declaration in this frame.
    fn unresolved(&self) -> impl Iterator<Item = (Name, Option<Span>)> + '_ {
        self.references
            .iter()
            .filter(|(name, _)| !self.declarations.contains_key(name))
            .map(|(&name, &span)| (name, span))
    }
}

/// The chain of open scopes, root first.
pub struct ScopeStack<'a> {
    scopes: Vec<Scope>,
    next_id: u32,
    interner: &'a StringInterner,
}

impl<'a> ScopeStack<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        ScopeStack {
            scopes: Vec::new(),
            next_id: 0,
            interner,
        }
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The active scope, if any is open.
    pub fn active(&self) -> Option<ScopeId> {
        self.scopes.last().map(|scope| scope.id)
    }

    /// Open a child of the active scope (or the root, if none is open).
    pub fn push(&mut self) -> ScopeId {
        let id = ScopeId(self.next_id);
        self.next_id += 1;
        self.scopes.push(Scope::new(id));
        tracing::trace!(%id, depth = self.scopes.len(), "push scope");
        id
    }

    /// Declare `name` in the active scope. The first declaration wins;
    /// redeclaring is not an error here. Empty names are ignored.
    pub fn declare(&mut self, name: Name, span: Option<Span>) {
        if name.is_empty() {
            return;
        }
        if let Some(scope) = self.scopes.last_mut() {
            scope.declarations.entry(name).or_insert(span);
        }
    }

    /// Record a use of `name` in the active scope. The first use wins.
    pub fn reference(&mut self, name: Name, span: Option<Span>) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.references.entry(name).or_insert(span);
        }
    }

    /// Close the active scope, which must be `expected`, and validate it.
    ///
    /// A child scope promotes each unresolved reference into its parent,
    /// unless the parent already holds a reference to that name (the inner
    /// location is the earlier one to report). The root returns its
    /// unresolved references as [`FreeVariable`]s sorted by offset; for any
    /// other scope the result is empty.
    ///
    /// # Errors
    ///
    /// - [`InternalError::ScopeMismatch`] if `expected` is not active.
    /// - [`InternalError::GeneratedVariableNotDefined`] if a reference
    ///   without a location reaches the root unresolved.
    pub fn pop(&mut self, expected: ScopeId) -> Result<Vec<FreeVariable>, InternalError> {
        let active = self.active();
        if active != Some(expected) {
            return Err(InternalError::ScopeMismatch { expected, active });
        }
        let Some(scope) = self.scopes.pop() else {
            return Err(InternalError::ScopeMismatch { expected, active });
        };
        tracing::trace!(
            id = %scope.id,
            declarations = scope.declarations.len(),
            references = scope.references.len(),
            "pop scope"
        );

        match self.scopes.last_mut() {
            Some(parent) => {
                for (name, span) in scope.unresolved() {
                    if let Entry::Vacant(slot) = parent.references.entry(name) {
                        tracing::trace!(
                            name = self.interner.lookup(name),
                            into = %parent.id,
                            "promote unresolved reference"
                        );
                        slot.insert(span);
                    }
                }
                Ok(Vec::new())
            }
            None => free_variables(&scope, self.interner),
        }
    }
}

/// Unresolved references of the root, in source order.
fn free_variables(
    root: &Scope,
    interner: &StringInterner,
) -> Result<Vec<FreeVariable>, InternalError> {
    let mut free = Vec::new();
    for (name, span) in root.unresolved() {
        match span {
            Some(span) => free.push(FreeVariable::not_defined(name, span)),
            None => {
                return Err(InternalError::GeneratedVariableNotDefined {
                    name: interner.lookup(name).to_owned(),
                })
            }
        }
    }
    free.sort_by_key(|var| (var.span.start, var.span.end));
    Ok(free)
}
