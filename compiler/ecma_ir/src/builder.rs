//! Programmatic construction of lowered trees.
//!
//! Upstream lowering passes and tests build trees through [`TreeBuilder`]
//! rather than pushing raw [`NodeKind`]s. Identifier nodes take an explicit
//! span (or none, for synthesized names); composite nodes get the span
//! covering their located children.

use crate::{
    AssignOp, BinaryOp, Literal, Name, NodeArena, NodeId, NodeKind, Program, Span,
    StringInterner, UnaryOp,
};

pub struct TreeBuilder<'a> {
    arena: NodeArena,
    interner: &'a StringInterner,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        TreeBuilder {
            arena: NodeArena::new(),
            interner,
        }
    }

    /// The arena built so far.
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    /// Allocate a raw node.
    pub fn alloc(&mut self, kind: NodeKind, span: Option<Span>) -> NodeId {
        self.arena.alloc(kind, span)
    }

    /// Span covering every located node in `ids`.
    fn cover(&self, ids: &[NodeId]) -> Option<Span> {
        ids.iter()
            .filter_map(|id| id.valid())
            .filter_map(|id| self.arena.span(id))
            .reduce(Span::merge)
    }

    fn composite(&mut self, kind: NodeKind, children: &[NodeId]) -> NodeId {
        let span = self.cover(children);
        self.arena.alloc(kind, span)
    }

    // Names

    /// Identifier reference at `span`.
    pub fn ident(&mut self, text: &str, span: Span) -> NodeId {
        let name = self.name(text);
        self.arena
            .alloc(NodeKind::IdentifierExpression(name), Some(span))
    }

    /// Identifier reference introduced by a compiler pass (no location).
    pub fn synthetic_ident(&mut self, text: &str) -> NodeId {
        let name = self.name(text);
        self.arena.alloc(NodeKind::IdentifierExpression(name), None)
    }

    /// Binding occurrence at `span`.
    pub fn binding(&mut self, text: &str, span: Span) -> NodeId {
        let name = self.name(text);
        self.arena
            .alloc(NodeKind::BindingIdentifier(name), Some(span))
    }

    /// Binding introduced by a compiler pass (no location).
    pub fn synthetic_binding(&mut self, text: &str) -> NodeId {
        let name = self.name(text);
        self.arena.alloc(NodeKind::BindingIdentifier(name), None)
    }

    // Functions and other scopes

    fn body(&mut self, stmts: &[NodeId]) -> NodeId {
        let stmts_range = self.arena.alloc_list(stmts);
        self.composite(NodeKind::FunctionBody { stmts: stmts_range }, stmts)
    }

    /// `function name(params) { body }`
    pub fn function_decl(
        &mut self,
        name: NodeId,
        params: &[NodeId],
        body: &[NodeId],
    ) -> NodeId {
        let body_id = self.body(body);
        let params_range = self.arena.alloc_list(params);
        self.composite(
            NodeKind::FunctionDeclaration {
                name,
                params: params_range,
                body: body_id,
            },
            &[name, body_id],
        )
    }

    /// `function name?(params) { body }`; pass `NodeId::INVALID` for an
    /// anonymous expression.
    pub fn function_expr(&mut self, name: NodeId, params: &[NodeId], body: &[NodeId]) -> NodeId {
        let body_id = self.body(body);
        let params_range = self.arena.alloc_list(params);
        self.composite(
            NodeKind::FunctionExpression {
                name,
                params: params_range,
                body: body_id,
            },
            &[name, body_id],
        )
    }

    /// `(params) => { body }`
    pub fn arrow(&mut self, params: &[NodeId], body: &[NodeId]) -> NodeId {
        let body_id = self.body(body);
        self.arrow_expr(params, body_id)
    }

    /// `(params) => expr`
    pub fn arrow_expr(&mut self, params: &[NodeId], body: NodeId) -> NodeId {
        let params_range = self.arena.alloc_list(params);
        let mut children = params.to_vec();
        children.push(body);
        self.composite(
            NodeKind::ArrowFunction {
                params: params_range,
                body,
            },
            &children,
        )
    }

    /// Object literal method `key(params) { body }`.
    pub fn method(&mut self, key: &str, params: &[NodeId], body: &[NodeId]) -> NodeId {
        let key = self.name(key);
        let body_id = self.body(body);
        let params_range = self.arena.alloc_list(params);
        self.composite(
            NodeKind::Method {
                key,
                params: params_range,
                body: body_id,
            },
            &[body_id],
        )
    }

    /// `get key() { body }`
    pub fn getter(&mut self, key: &str, body: &[NodeId]) -> NodeId {
        let key = self.name(key);
        let body_id = self.body(body);
        self.composite(NodeKind::GetAccessor { key, body: body_id }, &[body_id])
    }

    /// `set key(param) { body }`
    pub fn setter(&mut self, key: &str, param: NodeId, body: &[NodeId]) -> NodeId {
        let key = self.name(key);
        let body_id = self.body(body);
        self.composite(
            NodeKind::SetAccessor {
                key,
                param,
                body: body_id,
            },
            &[param, body_id],
        )
    }

    /// `try { block } catch (binding) { handler } finally { finalizer }`;
    /// `binding == INVALID` omits the catch clause, `finalizer == None` the
    /// finally block.
    pub fn try_stmt(
        &mut self,
        block: &[NodeId],
        binding: NodeId,
        handler: &[NodeId],
        finalizer: Option<&[NodeId]>,
    ) -> NodeId {
        let block_id = self.block(block);
        let handler_id = if binding.is_valid() {
            let handler_body = self.block(handler);
            self.composite(
                NodeKind::Catch {
                    binding,
                    body: handler_body,
                },
                &[binding, handler_body],
            )
        } else {
            NodeId::INVALID
        };
        let finalizer_id = match finalizer {
            Some(stmts) => self.block(stmts),
            None => NodeId::INVALID,
        };
        self.composite(
            NodeKind::Try {
                block: block_id,
                handler: handler_id,
                finalizer: finalizer_id,
            },
            &[block_id, handler_id, finalizer_id],
        )
    }

    // Patterns

    /// `{ key: element, ... }` in binding position.
    pub fn object_pattern(&mut self, fields: &[(&str, NodeId)]) -> NodeId {
        let field_ids: Vec<NodeId> = fields
            .iter()
            .map(|&(key, element)| {
                let key = self.name(key);
                self.composite(NodeKind::ObjectPatternField { key, element }, &[element])
            })
            .collect();
        let range = self.arena.alloc_list(&field_ids);
        self.composite(NodeKind::ObjectPattern { fields: range }, &field_ids)
    }

    /// `[elements]` in binding position; `INVALID` entries are holes.
    pub fn array_pattern(&mut self, elements: &[NodeId]) -> NodeId {
        let range = self.arena.alloc_list(elements);
        self.composite(NodeKind::ArrayPattern { elements: range }, elements)
    }

    /// `binding = initializer` in a parameter list or pattern.
    pub fn with_default(&mut self, binding: NodeId, initializer: NodeId) -> NodeId {
        self.composite(
            NodeKind::BindingElement {
                binding,
                initializer,
            },
            &[binding, initializer],
        )
    }

    /// `...binding`
    pub fn rest(&mut self, binding: NodeId) -> NodeId {
        self.composite(NodeKind::RestParameter { binding }, &[binding])
    }

    // Statements

    pub fn block(&mut self, stmts: &[NodeId]) -> NodeId {
        let stmts_range = self.arena.alloc_list(stmts);
        self.composite(NodeKind::Block { stmts: stmts_range }, stmts)
    }

    /// `var binding = initializer;` (`initializer` may be `INVALID`).
    pub fn var(&mut self, binding: NodeId, initializer: NodeId) -> NodeId {
        let declaration = self.composite(
            NodeKind::VariableDeclaration {
                binding,
                initializer,
            },
            &[binding, initializer],
        );
        self.var_statement(&[declaration])
    }

    pub fn var_statement(&mut self, declarations: &[NodeId]) -> NodeId {
        let range = self.arena.alloc_list(declarations);
        self.composite(
            NodeKind::VariableStatement {
                declarations: range,
            },
            declarations,
        )
    }

    pub fn expr_stmt(&mut self, expr: NodeId) -> NodeId {
        self.composite(NodeKind::ExpressionStatement { expr }, &[expr])
    }

    /// `return argument;` (`argument` may be `INVALID`).
    pub fn ret(&mut self, argument: NodeId) -> NodeId {
        self.composite(NodeKind::Return { argument }, &[argument])
    }

    pub fn if_stmt(&mut self, test: NodeId, consequent: NodeId, alternate: NodeId) -> NodeId {
        self.composite(
            NodeKind::If {
                test,
                consequent,
                alternate,
            },
            &[test, consequent, alternate],
        )
    }

    pub fn throw(&mut self, argument: NodeId) -> NodeId {
        self.composite(NodeKind::Throw { argument }, &[argument])
    }

    // Expressions

    pub fn number(&mut self, value: f64) -> NodeId {
        self.arena
            .alloc(NodeKind::Literal(Literal::number(value)), None)
    }

    pub fn string(&mut self, value: &str) -> NodeId {
        let value = self.name(value);
        self.arena
            .alloc(NodeKind::Literal(Literal::String(value)), None)
    }

    pub fn unary(&mut self, op: UnaryOp, operand: NodeId) -> NodeId {
        self.composite(NodeKind::Unary { op, operand }, &[operand])
    }

    /// `typeof operand`
    pub fn type_of(&mut self, operand: NodeId) -> NodeId {
        self.unary(UnaryOp::TypeOf, operand)
    }

    pub fn binary(&mut self, op: BinaryOp, left: NodeId, right: NodeId) -> NodeId {
        self.composite(NodeKind::Binary { op, left, right }, &[left, right])
    }

    /// `target = value`
    pub fn assign(&mut self, target: NodeId, value: NodeId) -> NodeId {
        self.composite(
            NodeKind::Assignment {
                op: AssignOp::Assign,
                target,
                value,
            },
            &[target, value],
        )
    }

    pub fn call(&mut self, callee: NodeId, args: &[NodeId]) -> NodeId {
        let args_range = self.arena.alloc_list(args);
        let mut children = vec![callee];
        children.extend_from_slice(args);
        self.composite(
            NodeKind::Call {
                callee,
                args: args_range,
            },
            &children,
        )
    }

    /// `object.property`
    pub fn member(&mut self, object: NodeId, property: &str) -> NodeId {
        let property = self.name(property);
        self.composite(NodeKind::Member { object, property }, &[object])
    }

    /// `[elements]`; `INVALID` entries are holes.
    pub fn array(&mut self, elements: &[NodeId]) -> NodeId {
        let range = self.arena.alloc_list(elements);
        self.composite(NodeKind::ArrayLiteral { elements: range }, elements)
    }

    pub fn object(&mut self, properties: &[NodeId]) -> NodeId {
        let range = self.arena.alloc_list(properties);
        self.composite(NodeKind::ObjectLiteral { properties: range }, properties)
    }

    /// `key: value` inside an object literal.
    pub fn property(&mut self, key: &str, value: NodeId) -> NodeId {
        let key = self.name(key);
        self.composite(NodeKind::PropertyAssignment { key, value }, &[value])
    }

    /// Wrap top-level items in a `Script` and return the finished program.
    pub fn finish(mut self, items: &[NodeId]) -> Program {
        let range = self.arena.alloc_list(items);
        let root = self.composite(NodeKind::Script { items: range }, items);
        Program::new(self.arena, root)
    }
}
