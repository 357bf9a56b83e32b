//! The binder implementation.
//!
//! Walks one compilation unit and records a binding key for every
//! identifier it can resolve:
//! - declaration names of types, type parameters, fields, methods,
//!   constructors, parameters and locals
//! - type references, by import, package, nesting and `java.lang` rules
//! - simple names, through the block scope chain, then fields of the
//!   enclosing types and their supertypes
//! - method invocations, by receiver, arity and argument descriptors
//!
//! Labels, package names and anything unresolvable stay unbound.

use crate::descriptor::{number_literal_kind, ResolvedType};
use crate::environment::{Environment, MethodInfo, TypeContext, TypeRef, TypeVariable};
use crate::scope::{LocalVariable, Scope};
use j2d_ast::*;
use j2d_core::intern::StringInterner;
use j2d_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use rustc_hash::FxHashMap;

/// Binding keys by identifier node id, for one compilation unit.
#[derive(Debug, Default)]
pub struct Bindings {
    keys: FxHashMap<NodeId, String>,
}

impl Bindings {
    pub fn get(&self, id: NodeId) -> Option<&str> {
        self.keys.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.keys.iter().map(|(id, key)| (*id, key.as_str()))
    }

    fn insert(&mut self, id: NodeId, key: String) {
        self.keys.insert(id, key);
    }
}

impl ResolvedNames for Bindings {
    fn binding_key(&self, name: &Identifier) -> Option<&str> {
        self.get(name.data.id)
    }
}

enum MethodLookup {
    Found { key: String, return_type: Option<ResolvedType> },
    Ambiguous,
    NotFound,
}

pub struct Binder<'e> {
    env: &'e Environment,
    interner: &'e StringInterner,
    file_name: String,
    bindings: Bindings,
    diagnostics: DiagnosticCollection,
    context: TypeContext,
    scopes: Vec<Scope>,
    /// Key of the method whose body is being bound; locals are keyed under it.
    owner_key: Option<String>,
    local_counts: FxHashMap<String, u32>,
}

impl<'e> Binder<'e> {
    pub fn new(env: &'e Environment, interner: &'e StringInterner) -> Self {
        Self {
            env,
            interner,
            file_name: String::new(),
            bindings: Bindings::default(),
            diagnostics: DiagnosticCollection::new(),
            context: TypeContext::default(),
            scopes: Vec::new(),
            owner_key: None,
            local_counts: FxHashMap::default(),
        }
    }

    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn into_bindings(self) -> Bindings {
        self.bindings
    }

    // ========================================================================
    // Compilation unit and declarations
    // ========================================================================

    pub fn bind_compilation_unit(&mut self, unit: &CompilationUnit<'_>) {
        self.file_name = unit.file_name.clone();
        self.context = TypeContext::for_unit(unit, self.interner);
        for declaration in unit.types {
            self.bind_type_declaration(declaration);
        }
    }

    fn text(&self, name: &Identifier) -> &'e str {
        self.interner.resolve(name.text)
    }

    fn bind(&mut self, name: &Identifier, key: String) {
        self.bindings.insert(name.data.id, key);
    }

    fn bind_type_declaration(&mut self, declaration: &TypeDeclaration<'_>) {
        let binary_name = self.context.binary_name_of(self.text(&declaration.name));
        let type_key = crate::descriptor::type_key(&binary_name);
        self.bind(&declaration.name, type_key.clone());

        let saved = self.context.clone();
        self.context.enclosing.push(binary_name);
        for parameter in declaration.type_parameters {
            let name = self.text(&parameter.name).to_string();
            self.bind(&parameter.name, format!("{}:T{};", type_key, name));
            self.context.type_variables.push(TypeVariable { name, owner_key: type_key.clone() });
        }
        for parameter in declaration.type_parameters {
            for bound in parameter.bounds {
                self.bind_type_node(bound);
            }
        }
        if let Some(superclass) = declaration.superclass {
            self.bind_type_node(superclass);
        }
        for interface in declaration.interfaces {
            self.bind_type_node(interface);
        }

        for member in declaration.members {
            match member {
                BodyDeclaration::Field(field) => self.bind_field(field, &type_key),
                BodyDeclaration::Method(method) => self.bind_method(method, &type_key),
                BodyDeclaration::Type(nested) => self.bind_type_declaration(nested),
                BodyDeclaration::Initializer(initializer) => {
                    let name = if initializer.modifiers.contains(ModifierFlags::STATIC) { "<clinit>" } else { "<init>" };
                    self.enter_body(format!("{}.{}()V", type_key, name));
                    self.bind_block(&initializer.body);
                    self.exit_body();
                }
            }
        }
        self.context = saved;
    }

    fn bind_field(&mut self, field: &FieldDeclaration<'_>, type_key: &str) {
        self.bind_type_node(field.type_node);
        let type_ref = TypeRef::from_node(field.type_node, self.interner);
        for fragment in field.fragments {
            let descriptor = self
                .env
                .descriptor_of(&self.context, &type_ref.clone().with_dimensions(fragment.extra_dimensions));
            let key = format!("{}.{}){}", type_key, self.text(&fragment.name), descriptor);
            self.bind(&fragment.name, key);
            if let Some(initializer) = fragment.initializer {
                self.bind_expression(initializer);
            }
        }
    }

    fn bind_method(&mut self, method: &MethodDeclaration<'_>, type_key: &str) {
        let info = MethodInfo::from_declaration(method, self.interner);
        let method_key = self.env.method_key(&self.context, type_key, &info);
        let method_context = self.env.method_context(&self.context, type_key, &info);

        if method.is_constructor() {
            self.bind(&method.name, type_key.to_string());
        } else {
            self.bind(&method.name, method_key.clone());
        }

        let saved = std::mem::replace(&mut self.context, method_context);
        for parameter in method.type_parameters {
            let key = format!("{}:T{};", method_key, self.text(&parameter.name));
            self.bind(&parameter.name, key);
            for bound in parameter.bounds {
                self.bind_type_node(bound);
            }
        }
        if let Some(return_type) = method.return_type {
            self.bind_type_node(return_type);
        }
        for thrown in method.thrown_exceptions {
            self.bind_type_node(thrown);
        }

        self.enter_body(method_key);
        for parameter in method.parameters {
            self.bind_variable_declaration(parameter);
        }
        if let Some(body) = method.body {
            self.bind_block(body);
        }
        self.exit_body();
        self.context = saved;
    }

    fn enter_body(&mut self, owner_key: String) {
        self.owner_key = Some(owner_key);
        self.local_counts.clear();
        self.scopes.clear();
        self.scopes.push(Scope::new());
    }

    fn exit_body(&mut self) {
        self.owner_key = None;
        self.scopes.clear();
    }

    // ========================================================================
    // Locals
    // ========================================================================

    fn bind_variable_declaration(&mut self, declaration: &SingleVariableDeclaration<'_>) {
        self.bind_type_node(declaration.type_node);
        let mut type_ref = TypeRef::from_node(declaration.type_node, self.interner);
        if declaration.is_varargs {
            type_ref = type_ref.with_dimensions(1);
        }
        let resolved = self.env.resolve_type(&self.context, &type_ref);
        self.declare_local(&declaration.name, resolved);
    }

    fn bind_fragments(&mut self, type_node: &TypeNode<'_>, fragments: &[VariableDeclarationFragment<'_>]) {
        self.bind_type_node(type_node);
        let type_ref = TypeRef::from_node(type_node, self.interner);
        for fragment in fragments {
            if let Some(initializer) = fragment.initializer {
                self.bind_expression(initializer);
            }
            let resolved = self
                .env
                .resolve_type(&self.context, &type_ref.clone().with_dimensions(fragment.extra_dimensions));
            self.declare_local(&fragment.name, resolved);
        }
    }

    /// `<methodKey>#<name>#<n>`, `n` counting earlier locals of the same
    /// name in the same method.
    fn declare_local(&mut self, name: &Identifier, type_ref: Option<ResolvedType>) {
        let Some(owner_key) = &self.owner_key else { return };
        let text = self.text(name);
        let count = self.local_counts.entry(text.to_string()).or_insert(0);
        let key = format!("{}#{}#{}", owner_key, text, count);
        *count += 1;
        self.bind(name, key.clone());
        if self.scopes.is_empty() {
            self.scopes.push(Scope::new());
        }
        if let Some(scope) = self.scopes.last_mut() {
            scope.declare(text.to_string(), LocalVariable { key, type_ref });
        }
    }

    fn with_scope(&mut self, f: impl FnOnce(&mut Self)) {
        self.scopes.push(Scope::new());
        f(self);
        self.scopes.pop();
    }

    /// A local, parameter or field visible under `name`.
    fn resolve_variable(&self, name: &str) -> Option<(String, Option<ResolvedType>)> {
        for scope in self.scopes.iter().rev() {
            if let Some(local) = scope.get(name) {
                return Some((local.key.clone(), local.type_ref.clone()));
            }
        }
        for enclosing in self.context.enclosing.iter().rev() {
            if let Some((owner, field)) = self.env.find_field(enclosing, name) {
                let key = self.env.field_key(owner, field);
                return Some((key, self.env.resolve_type(&owner.context, &field.type_ref)));
            }
        }
        None
    }

    // ========================================================================
    // Types
    // ========================================================================

    fn bind_type_node(&mut self, node: &TypeNode<'_>) {
        match node {
            TypeNode::Primitive(_) => {}
            TypeNode::Simple(simple) => {
                let segments: Vec<String> = simple
                    .qualifier
                    .iter()
                    .chain(std::iter::once(&simple.name))
                    .map(|segment| self.text(segment).to_string())
                    .collect();
                if let Some(key) = self.env.resolve_type_name(&self.context, &segments).and_then(|t| t.key()) {
                    self.bind(&simple.name, key);
                }
            }
            TypeNode::Parameterized(parameterized) => {
                self.bind_type_node(parameterized.base);
                for argument in parameterized.type_arguments {
                    self.bind_type_node(argument);
                }
            }
            TypeNode::Array(array) => self.bind_type_node(array.element_type),
            TypeNode::Wildcard(wildcard) => {
                if let Some(bound) = wildcard.bound {
                    self.bind_type_node(bound);
                }
            }
        }
    }

    fn resolve_type_node(&self, node: &TypeNode<'_>) -> Option<ResolvedType> {
        self.env.resolve_type(&self.context, &TypeRef::from_node(node, self.interner))
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn bind_block(&mut self, block: &Block<'_>) {
        self.with_scope(|binder| {
            for statement in block.statements {
                binder.bind_statement(statement);
            }
        });
    }

    fn bind_statement(&mut self, statement: &Statement<'_>) {
        match statement {
            Statement::Block(block) => self.bind_block(block),
            Statement::Empty(_) => {}
            Statement::Expression(statement) => self.bind_expression(statement.expression),
            Statement::VariableDeclaration(declaration) => {
                self.bind_fragments(declaration.type_node, declaration.fragments)
            }
            // Local classes are not bound.
            Statement::TypeDeclaration(_) => {}
            Statement::If(statement) => {
                self.bind_expression(statement.expression);
                self.bind_nested_statement(statement.then_statement);
                if let Some(else_statement) = statement.else_statement {
                    self.bind_nested_statement(else_statement);
                }
            }
            Statement::While(statement) => {
                self.bind_expression(statement.expression);
                self.bind_nested_statement(statement.body);
            }
            Statement::Do(statement) => {
                self.bind_nested_statement(statement.body);
                self.bind_expression(statement.expression);
            }
            Statement::For(statement) => self.with_scope(|binder| {
                for initializer in statement.initializers {
                    binder.bind_expression(initializer);
                }
                if let Some(expression) = statement.expression {
                    binder.bind_expression(expression);
                }
                for updater in statement.updaters {
                    binder.bind_expression(updater);
                }
                binder.bind_nested_statement(statement.body);
            }),
            Statement::EnhancedFor(statement) => {
                self.bind_expression(statement.expression);
                self.with_scope(|binder| {
                    binder.bind_variable_declaration(&statement.parameter);
                    binder.bind_nested_statement(statement.body);
                });
            }
            Statement::Switch(statement) => {
                self.bind_expression(statement.expression);
                self.with_scope(|binder| {
                    for statement in statement.statements {
                        binder.bind_statement(statement);
                    }
                });
            }
            Statement::SwitchCase(case) => {
                if let Some(expression) = case.expression {
                    self.bind_expression(expression);
                }
            }
            Statement::Break(_) | Statement::Continue(_) => {}
            Statement::Return(statement) => {
                if let Some(expression) = statement.expression {
                    self.bind_expression(expression);
                }
            }
            Statement::Throw(statement) => self.bind_expression(statement.expression),
            Statement::Try(statement) => {
                self.bind_block(&statement.body);
                for clause in statement.catch_clauses {
                    self.with_scope(|binder| {
                        binder.bind_variable_declaration(&clause.exception);
                        binder.bind_block(&clause.body);
                    });
                }
                if let Some(finally) = &statement.finally {
                    self.bind_block(finally);
                }
            }
            Statement::Labeled(statement) => self.bind_statement(statement.body),
            Statement::Synchronized(statement) => {
                self.bind_expression(statement.expression);
                self.bind_block(&statement.body);
            }
            Statement::Assert(statement) => {
                self.bind_expression(statement.expression);
                if let Some(message) = statement.message {
                    self.bind_expression(message);
                }
            }
            Statement::ConstructorInvocation(invocation) => {
                for argument in invocation.arguments {
                    self.bind_expression(argument);
                }
            }
        }
    }

    /// A declaration directly under `if`/`while` lives in its own scope.
    fn bind_nested_statement(&mut self, statement: &Statement<'_>) {
        self.with_scope(|binder| binder.bind_statement(statement));
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn bind_expression(&mut self, expression: &Expression<'_>) {
        match expression {
            Expression::Name(name) => self.bind_name(name),
            Expression::NumberLiteral(_)
            | Expression::BooleanLiteral(_)
            | Expression::StringLiteral(_)
            | Expression::CharacterLiteral(_)
            | Expression::NullLiteral(_)
            | Expression::This(_)
            | Expression::Super(_) => {}
            Expression::Parenthesized(parenthesized) => self.bind_expression(parenthesized.expression),
            Expression::Assignment(assignment) => {
                self.bind_expression(assignment.left);
                self.bind_expression(assignment.right);
            }
            Expression::Infix(infix) => {
                self.bind_expression(infix.left);
                self.bind_expression(infix.right);
            }
            Expression::Prefix(prefix) => self.bind_expression(prefix.operand),
            Expression::Postfix(postfix) => self.bind_expression(postfix.operand),
            Expression::Cast(cast) => {
                self.bind_type_node(cast.type_node);
                self.bind_expression(cast.expression);
            }
            Expression::MethodInvocation(invocation) => self.bind_invocation(invocation),
            Expression::ClassInstanceCreation(creation) => {
                self.bind_type_node(creation.type_node);
                for argument in creation.arguments {
                    self.bind_expression(argument);
                }
            }
            Expression::FieldAccess(access) => {
                self.bind_expression(access.expression);
                let field_name = self.text(&access.name);
                let receiver = self.static_type(access.expression);
                if let Some(class_name) = receiver.as_ref().and_then(|t| t.class_name()) {
                    if let Some((owner, field)) = self.env.find_field(class_name, field_name) {
                        let key = self.env.field_key(owner, field);
                        self.bind(&access.name, key);
                    }
                }
            }
            Expression::ArrayAccess(access) => {
                self.bind_expression(access.array);
                self.bind_expression(access.index);
            }
            Expression::ArrayCreation(creation) => {
                self.bind_type_node(creation.element_type);
                for dimension in creation.dimensions {
                    self.bind_expression(dimension);
                }
                if let Some(initializer) = creation.initializer {
                    for element in initializer.expressions {
                        self.bind_expression(element);
                    }
                }
            }
            Expression::ArrayInitializer(initializer) => {
                for element in initializer.expressions {
                    self.bind_expression(element);
                }
            }
            Expression::Conditional(conditional) => {
                self.bind_expression(conditional.condition);
                self.bind_expression(conditional.when_true);
                self.bind_expression(conditional.when_false);
            }
            Expression::VariableDeclaration(declaration) => {
                self.bind_fragments(declaration.type_node, declaration.fragments)
            }
            Expression::TypeOperand(operand) => self.bind_type_node(operand.type_node),
        }
    }

    fn bind_name(&mut self, name: &Identifier) {
        let text = self.text(name);
        if let Some((key, _)) = self.resolve_variable(text) {
            self.bind(name, key);
            return;
        }
        let type_key = self
            .env
            .resolve_type_name(&self.context, &[text.to_string()])
            .and_then(|t| t.key());
        match type_key {
            Some(key) => self.bind(name, key),
            None => self.report(name, &messages::CANNOT_RESOLVE_SYMBOL_0),
        }
    }

    fn report(&mut self, name: &Identifier, message: &j2d_diagnostics::DiagnosticMessage) {
        let text = self.text(name);
        self.diagnostics
            .add(Diagnostic::with_location(&self.file_name, name.data.range, message, &[text]));
    }

    fn bind_invocation(&mut self, invocation: &MethodInvocation<'_>) {
        if let Some(receiver) = invocation.expression {
            self.bind_expression(receiver);
        }
        for argument in invocation.type_arguments {
            self.bind_type_node(argument);
        }
        for argument in invocation.arguments {
            self.bind_expression(argument);
        }
        match self.lookup_method(invocation) {
            MethodLookup::Found { key, .. } => self.bind(&invocation.name, key),
            MethodLookup::Ambiguous => self.report(&invocation.name, &messages::AMBIGUOUS_INVOCATION_OF_0),
            MethodLookup::NotFound => self.report(&invocation.name, &messages::CANNOT_RESOLVE_SYMBOL_0),
        }
    }

    /// Candidate receiver classes, in the order Java searches them.
    fn receiver_classes(&self, invocation: &MethodInvocation<'_>) -> Vec<String> {
        match invocation.expression {
            None => self.context.enclosing.iter().rev().cloned().collect(),
            Some(Expression::Super(_)) => self
                .context
                .enclosing
                .last()
                .and_then(|current| self.env.type_info(current))
                .and_then(|info| {
                    let superclass = info.superclass.as_ref()?;
                    self.env.resolve_type(&info.context, superclass)
                })
                .and_then(|t| t.class_name().map(str::to_string))
                .into_iter()
                .collect(),
            Some(Expression::Name(name)) => {
                let text = self.text(name);
                let resolved = match self.resolve_variable(text) {
                    Some((_, type_ref)) => type_ref,
                    None => self.env.resolve_type_name(&self.context, &[text.to_string()]),
                };
                resolved.and_then(|t| t.class_name().map(str::to_string)).into_iter().collect()
            }
            Some(receiver) => self
                .static_type(receiver)
                .and_then(|t| t.class_name().map(str::to_string))
                .into_iter()
                .collect(),
        }
    }

    fn lookup_method(&self, invocation: &MethodInvocation<'_>) -> MethodLookup {
        let name = self.text(&invocation.name);
        let candidates = self
            .receiver_classes(invocation)
            .iter()
            .map(|class_name| self.env.find_methods(class_name, name))
            .find(|methods| !methods.is_empty())
            .unwrap_or_default();

        let applicable: Vec<_> = candidates
            .into_iter()
            .filter(|(_, method)| method.accepts_arity(invocation.arguments.len()))
            .collect();
        let chosen = match applicable.len() {
            0 => return MethodLookup::NotFound,
            1 => applicable[0],
            _ => {
                let arguments: Option<Vec<String>> = invocation
                    .arguments
                    .iter()
                    .map(|argument| self.static_type(argument).map(|t| t.descriptor()))
                    .collect();
                let Some(arguments) = arguments else { return MethodLookup::Ambiguous };
                let exact: Vec<_> = applicable
                    .into_iter()
                    .filter(|(owner, method)| {
                        let context = self.env.method_context(&owner.context, &owner.key, method);
                        self.env.parameter_descriptors(&context, method) == arguments
                    })
                    .collect();
                match exact.as_slice() {
                    [single] => *single,
                    _ => return MethodLookup::Ambiguous,
                }
            }
        };

        let (owner, method) = chosen;
        let context = self.env.method_context(&owner.context, &owner.key, method);
        MethodLookup::Found {
            key: self.env.method_key(&owner.context, &owner.key, method),
            return_type: method
                .return_type
                .as_ref()
                .and_then(|return_type| self.env.resolve_type(&context, return_type)),
        }
    }

    /// The statically evident type of an expression, where one is known
    /// without full type checking.
    fn static_type(&self, expression: &Expression<'_>) -> Option<ResolvedType> {
        match expression {
            Expression::NumberLiteral(literal) => Some(ResolvedType::Primitive(number_literal_kind(literal.token))),
            Expression::BooleanLiteral(_) => Some(ResolvedType::Primitive(SyntaxKind::BooleanKeyword)),
            Expression::CharacterLiteral(_) => Some(ResolvedType::Primitive(SyntaxKind::CharKeyword)),
            Expression::StringLiteral(_) => Some(ResolvedType::Class("java.lang.String".to_string())),
            Expression::Name(name) => self.resolve_variable(self.text(name)).and_then(|(_, t)| t),
            Expression::This(_) => self.context.enclosing.last().cloned().map(ResolvedType::Class),
            Expression::Parenthesized(parenthesized) => self.static_type(parenthesized.expression),
            Expression::Cast(cast) => self.resolve_type_node(cast.type_node),
            Expression::ClassInstanceCreation(creation) => self.resolve_type_node(creation.type_node),
            Expression::Assignment(assignment) => self.static_type(assignment.left),
            Expression::ArrayAccess(access) => self.static_type(access.array).and_then(|t| t.component()),
            Expression::MethodInvocation(invocation) => match self.lookup_method(invocation) {
                MethodLookup::Found { return_type, .. } => return_type,
                _ => None,
            },
            Expression::FieldAccess(access) => {
                let receiver = self.static_type(access.expression)?;
                let (owner, field) = self.env.find_field(receiver.class_name()?, self.text(&access.name))?;
                self.env.resolve_type(&owner.context, &field.type_ref)
            }
            _ => None,
        }
    }
}
