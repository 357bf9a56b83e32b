//! The Java parser implementation.
//!
//! A recursive descent parser over the token stream of [`Scanner`]. Nodes
//! are allocated in the caller's arena; every node receives a [`NodeId`]
//! that is unique within the compilation unit.

use bumpalo::Bump;
use j2d_ast::node::*;
use j2d_ast::syntax_kind::SyntaxKind;
use j2d_ast::types::*;
use j2d_core::intern::StringInterner;
use j2d_core::text::TextRange;
use j2d_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};
use j2d_scanner::{Scanner, ScannerState};

use crate::precedence::{get_binary_operator_precedence, OperatorPrecedence};
use crate::utilities::*;

/// Maximum recursion depth to prevent stack overflow on deeply nested input.
const MAX_RECURSION_DEPTH: u32 = 200;

/// Move a Vec into the arena as a slice.
fn alloc_vec_in<T>(arena: &Bump, vec: Vec<T>) -> &[T] {
    if vec.is_empty() {
        return &[];
    }
    arena.alloc_slice_fill_iter(vec)
}

/// A parsed compilation unit together with everything the scanner and
/// parser reported while producing it.
pub struct ParsedUnit<'a> {
    pub unit: CompilationUnit<'a>,
    pub diagnostics: DiagnosticCollection,
}

struct ParserState {
    scanner: ScannerState,
    prev_token_end: u32,
    next_node_id: u32,
    diagnostics: usize,
    recursion_depth: u32,
}

pub struct Parser<'a> {
    arena: &'a Bump,
    interner: &'a StringInterner,
    scanner: Scanner,
    file_name: String,
    source_len: u32,
    diagnostics: DiagnosticCollection,
    /// Tracks recursion depth to prevent stack overflow on deeply nested input.
    recursion_depth: u32,
    next_node_id: u32,
    /// End of the last consumed token; node ranges close here.
    prev_token_end: u32,
}

/// Parses one Java source file.
pub fn parse_compilation_unit<'a>(
    arena: &'a Bump,
    interner: &'a StringInterner,
    file_name: &str,
    source_text: &str,
) -> ParsedUnit<'a> {
    Parser::new(arena, interner, file_name, source_text).parse()
}

impl<'a> Parser<'a> {
    pub fn new(
        arena: &'a Bump,
        interner: &'a StringInterner,
        file_name: &str,
        source_text: &str,
    ) -> Self {
        Self {
            arena,
            interner,
            scanner: Scanner::new(source_text),
            file_name: file_name.to_string(),
            source_len: source_text.chars().count() as u32,
            diagnostics: DiagnosticCollection::new(),
            recursion_depth: 0,
            next_node_id: 0,
            prev_token_end: 0,
        }
    }

    pub fn parse(mut self) -> ParsedUnit<'a> {
        self.next_token();

        let package = if self.current_token() == SyntaxKind::PackageKeyword {
            Some(self.parse_package_declaration())
        } else {
            None
        };

        let mut imports = Vec::new();
        while self.current_token() == SyntaxKind::ImportKeyword {
            imports.push(self.parse_import_declaration());
        }

        let mut types = Vec::new();
        while self.current_token() != SyntaxKind::EndOfFileToken {
            let start = self.token_pos();
            if self.parse_optional(SyntaxKind::SemicolonToken) {
                continue;
            }
            if let Some(declaration) = self.parse_top_level_type() {
                types.push(declaration);
            }
            if self.token_pos() == start {
                self.next_token();
            }
        }

        let mut data = self.finish_node(SyntaxKind::CompilationUnit, 0);
        data.range.end = self.source_len;
        let unit = CompilationUnit {
            data,
            package,
            imports: alloc_vec_in(self.arena, imports),
            types: alloc_vec_in(self.arena, types),
            file_name: self.file_name.clone(),
        };

        let mut diagnostics = DiagnosticCollection::new();
        for mut diagnostic in self.scanner.take_diagnostics().into_diagnostics() {
            diagnostic.file.get_or_insert_with(|| self.file_name.clone());
            diagnostics.add(diagnostic);
        }
        diagnostics.extend(self.diagnostics.into_diagnostics());
        diagnostics.sort();

        ParsedUnit { unit, diagnostics }
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn current_token(&self) -> SyntaxKind { self.scanner.token() }

    #[inline]
    fn token_pos(&self) -> u32 { self.scanner.token_start() as u32 }

    #[inline]
    fn token_end(&self) -> u32 { self.scanner.token_end() as u32 }

    fn next_token(&mut self) -> SyntaxKind {
        self.prev_token_end = self.token_end();
        self.scanner.scan()
    }

    fn expect_token(&mut self, kind: SyntaxKind) -> bool {
        if self.current_token() == kind {
            self.next_token();
            true
        } else {
            let text = kind.token_text().unwrap_or("token");
            self.error(&messages::_0_EXPECTED, &[text]);
            false
        }
    }

    fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.current_token() == kind {
            self.next_token();
            true
        } else {
            false
        }
    }

    fn error(&mut self, message: &DiagnosticMessage, args: &[&str]) {
        let range = TextRange::new(self.token_pos(), self.token_end());
        self.diagnostics.add(Diagnostic::with_location(&self.file_name, range, message, args));
    }

    fn error_unexpected_token(&mut self) {
        let text = self
            .current_token()
            .token_text()
            .map(str::to_string)
            .unwrap_or_else(|| self.scanner.token_value().to_string());
        self.error(&messages::UNEXPECTED_TOKEN_0, &[&text]);
    }

    fn finish_node(&mut self, kind: SyntaxKind, pos: u32) -> NodeData {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        NodeData {
            kind,
            range: TextRange::new(pos, self.prev_token_end.max(pos)),
            id,
        }
    }

    /// Runs `f` speculatively; scanner position, node ids and diagnostics are
    /// rewound afterwards whatever `f` consumed.
    fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let state = ParserState {
            scanner: self.scanner.save_state(),
            prev_token_end: self.prev_token_end,
            next_node_id: self.next_node_id,
            diagnostics: self.diagnostics.len(),
            recursion_depth: self.recursion_depth,
        };
        let result = f(self);
        self.scanner.restore_state(state.scanner);
        self.prev_token_end = state.prev_token_end;
        self.next_node_id = state.next_node_id;
        self.diagnostics.truncate(state.diagnostics);
        self.recursion_depth = state.recursion_depth;
        result
    }

    fn next_token_is(&mut self, kind: SyntaxKind) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            p.current_token() == kind
        })
    }

    fn skip_balanced(&mut self, open: SyntaxKind, close: SyntaxKind) {
        let mut depth = 0u32;
        loop {
            let token = self.current_token();
            if token == SyntaxKind::EndOfFileToken {
                return;
            }
            self.next_token();
            if token == open {
                depth += 1;
            } else if token == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Names
    // ========================================================================

    fn parse_identifier(&mut self) -> Identifier {
        let pos = self.token_pos();
        if self.current_token() == SyntaxKind::Identifier {
            let text = self.interner.intern(self.scanner.token_value());
            self.next_token();
            Identifier { data: self.finish_node(SyntaxKind::SimpleName, pos), text }
        } else {
            self.error(&messages::IDENTIFIER_EXPECTED, &[]);
            self.missing_identifier()
        }
    }

    fn missing_identifier(&mut self) -> Identifier {
        let pos = self.token_pos();
        let text = self.interner.intern("");
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        Identifier {
            data: NodeData { kind: SyntaxKind::SimpleName, range: TextRange::new(pos, pos), id },
            text,
        }
    }

    fn parse_package_declaration(&mut self) -> PackageDeclaration<'a> {
        let pos = self.token_pos();
        self.next_token();
        self.skip_annotations();
        let mut name = vec![self.parse_identifier()];
        while self.parse_optional(SyntaxKind::DotToken) {
            name.push(self.parse_identifier());
        }
        self.expect_token(SyntaxKind::SemicolonToken);
        PackageDeclaration {
            data: self.finish_node(SyntaxKind::PackageDeclaration, pos),
            name: alloc_vec_in(self.arena, name),
        }
    }

    fn parse_import_declaration(&mut self) -> ImportDeclaration<'a> {
        let pos = self.token_pos();
        self.next_token();
        let is_static = self.parse_optional(SyntaxKind::StaticKeyword);
        let mut name = Vec::new();
        let mut on_demand = false;
        loop {
            name.push(self.parse_identifier());
            if !self.parse_optional(SyntaxKind::DotToken) {
                break;
            }
            if self.parse_optional(SyntaxKind::AsteriskToken) {
                on_demand = true;
                break;
            }
        }
        self.expect_token(SyntaxKind::SemicolonToken);
        ImportDeclaration {
            data: self.finish_node(SyntaxKind::ImportDeclaration, pos),
            name: alloc_vec_in(self.arena, name),
            is_static,
            on_demand,
        }
    }

    // ========================================================================
    // Modifiers and annotations
    // ========================================================================

    /// Annotations are accepted and dropped.
    fn skip_annotation(&mut self) {
        self.next_token();
        self.parse_identifier();
        while self.current_token() == SyntaxKind::DotToken
            && self.next_token_is(SyntaxKind::Identifier)
        {
            self.next_token();
            self.parse_identifier();
        }
        if self.current_token() == SyntaxKind::OpenParenToken {
            self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
        }
    }

    fn skip_annotations(&mut self) {
        while self.is_start_of_annotation() {
            self.skip_annotation();
        }
    }

    fn is_start_of_annotation(&mut self) -> bool {
        self.current_token() == SyntaxKind::AtToken
            && !self.next_token_is(SyntaxKind::InterfaceKeyword)
    }

    fn parse_modifiers(&mut self) -> ModifierFlags {
        let mut flags = ModifierFlags::NONE;
        loop {
            let token = self.current_token();
            if token == SyntaxKind::AtToken {
                if !self.is_start_of_annotation() {
                    return flags;
                }
                self.skip_annotation();
            } else if token.is_modifier_keyword() && !self.is_modifier_used_as_statement(token) {
                flags |= ModifierFlags::from_keyword(token);
                self.next_token();
            } else {
                return flags;
            }
        }
    }

    /// `synchronized (x) {}` and `default:` start statements, not declarations.
    fn is_modifier_used_as_statement(&mut self, token: SyntaxKind) -> bool {
        match token {
            SyntaxKind::SynchronizedKeyword => self.next_token_is(SyntaxKind::OpenParenToken),
            SyntaxKind::DefaultKeyword => self.next_token_is(SyntaxKind::ColonToken),
            _ => false,
        }
    }

    // ========================================================================
    // Type declarations
    // ========================================================================

    fn parse_top_level_type(&mut self) -> Option<TypeDeclaration<'a>> {
        let pos = self.token_pos();
        let modifiers = self.parse_modifiers();
        match self.current_token() {
            SyntaxKind::ClassKeyword | SyntaxKind::InterfaceKeyword => {
                Some(self.parse_type_declaration(pos, modifiers))
            }
            SyntaxKind::EnumKeyword => {
                self.error(&messages::ENUM_DECLARATIONS_ARE_NOT_SUPPORTED, &[]);
                self.skip_declaration_body();
                None
            }
            SyntaxKind::AtToken => {
                self.error(&messages::ANNOTATION_TYPES_ARE_NOT_SUPPORTED, &[]);
                self.skip_declaration_body();
                None
            }
            _ => {
                self.error(&messages::CLASS_INTERFACE_OR_ENUM_EXPECTED, &[]);
                None
            }
        }
    }

    fn skip_declaration_body(&mut self) {
        while !matches!(
            self.current_token(),
            SyntaxKind::OpenBraceToken | SyntaxKind::EndOfFileToken
        ) {
            self.next_token();
        }
        self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
    }

    fn parse_type_declaration(&mut self, pos: u32, modifiers: ModifierFlags) -> TypeDeclaration<'a> {
        let is_interface = self.current_token() == SyntaxKind::InterfaceKeyword;
        self.next_token();
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameters();

        let mut superclass = None;
        let mut interfaces = Vec::new();
        if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            if is_interface {
                interfaces = self.parse_type_list();
            } else {
                superclass = Some(self.parse_type_ref());
            }
        }
        if self.parse_optional(SyntaxKind::ImplementsKeyword) {
            interfaces.extend(self.parse_type_list());
        }

        let members = self.parse_class_body();
        TypeDeclaration {
            data: self.finish_node(SyntaxKind::TypeDeclaration, pos),
            modifiers,
            is_interface,
            name,
            type_parameters,
            superclass,
            interfaces: alloc_vec_in(self.arena, interfaces),
            members,
        }
    }

    fn parse_type_parameters(&mut self) -> NodeList<'a, TypeParameter<'a>> {
        if self.current_token() != SyntaxKind::LessThanToken {
            return &[];
        }
        self.next_token();
        let mut parameters = Vec::new();
        loop {
            let pos = self.token_pos();
            self.skip_annotations();
            let name = self.parse_identifier();
            let mut bounds = Vec::new();
            if self.parse_optional(SyntaxKind::ExtendsKeyword) {
                bounds.push(self.parse_type());
                while self.parse_optional(SyntaxKind::AmpersandToken) {
                    bounds.push(self.parse_type());
                }
            }
            parameters.push(TypeParameter {
                data: self.finish_node(SyntaxKind::TypeParameter, pos),
                name,
                bounds: alloc_vec_in(self.arena, bounds),
            });
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect_token(SyntaxKind::GreaterThanToken);
        alloc_vec_in(self.arena, parameters)
    }

    fn parse_type_list(&mut self) -> Vec<TypeNode<'a>> {
        let mut types = vec![self.parse_type()];
        while self.parse_optional(SyntaxKind::CommaToken) {
            types.push(self.parse_type());
        }
        types
    }

    fn parse_class_body(&mut self) -> NodeList<'a, BodyDeclaration<'a>> {
        self.expect_token(SyntaxKind::OpenBraceToken);
        let mut members = Vec::new();
        while !matches!(
            self.current_token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_pos();
            if let Some(member) = self.parse_member() {
                members.push(member);
            }
            if self.token_pos() == start {
                self.next_token();
                while !is_member_recovery_point(self.current_token()) {
                    self.next_token();
                }
            }
        }
        self.expect_token(SyntaxKind::CloseBraceToken);
        alloc_vec_in(self.arena, members)
    }

    fn parse_member(&mut self) -> Option<BodyDeclaration<'a>> {
        let pos = self.token_pos();
        if self.parse_optional(SyntaxKind::SemicolonToken) {
            return None;
        }
        let modifiers = self.parse_modifiers();
        match self.current_token() {
            SyntaxKind::OpenBraceToken => {
                let body = self.parse_block();
                return Some(BodyDeclaration::Initializer(Initializer {
                    data: self.finish_node(SyntaxKind::Initializer, pos),
                    modifiers,
                    body,
                }));
            }
            SyntaxKind::ClassKeyword | SyntaxKind::InterfaceKeyword => {
                return Some(BodyDeclaration::Type(self.parse_type_declaration(pos, modifiers)));
            }
            SyntaxKind::EnumKeyword => {
                self.error(&messages::ENUM_DECLARATIONS_ARE_NOT_SUPPORTED, &[]);
                self.skip_declaration_body();
                return None;
            }
            SyntaxKind::AtToken => {
                self.error(&messages::ANNOTATION_TYPES_ARE_NOT_SUPPORTED, &[]);
                self.skip_declaration_body();
                return None;
            }
            _ => {}
        }

        let type_parameters = self.parse_type_parameters();

        // Constructor: `Name(`
        if self.current_token() == SyntaxKind::Identifier
            && self.next_token_is(SyntaxKind::OpenParenToken)
        {
            let name = self.parse_identifier();
            let method = self.parse_method_rest(pos, modifiers, type_parameters, None, name);
            return Some(BodyDeclaration::Method(method));
        }

        let type_node = self.parse_type_ref();
        let name = self.parse_identifier();
        if self.current_token() == SyntaxKind::OpenParenToken {
            let method = self.parse_method_rest(pos, modifiers, type_parameters, Some(type_node), name);
            return Some(BodyDeclaration::Method(method));
        }

        let fragments = self.parse_fragments(name);
        self.expect_token(SyntaxKind::SemicolonToken);
        Some(BodyDeclaration::Field(FieldDeclaration {
            data: self.finish_node(SyntaxKind::FieldDeclaration, pos),
            modifiers,
            type_node,
            fragments,
        }))
    }

    fn parse_method_rest(
        &mut self,
        pos: u32,
        modifiers: ModifierFlags,
        type_parameters: NodeList<'a, TypeParameter<'a>>,
        return_type: OptionalNode<'a, TypeNode<'a>>,
        name: Identifier,
    ) -> MethodDeclaration<'a> {
        let parameters = self.parse_parameters();
        // Legacy `int m()[]` form.
        self.parse_dimensions();
        let thrown_exceptions = if self.parse_optional(SyntaxKind::ThrowsKeyword) {
            self.parse_type_list()
        } else {
            Vec::new()
        };
        let body = if self.current_token() == SyntaxKind::OpenBraceToken {
            Some(&*self.arena.alloc(self.parse_block()))
        } else {
            self.expect_token(SyntaxKind::SemicolonToken);
            None
        };
        MethodDeclaration {
            data: self.finish_node(SyntaxKind::MethodDeclaration, pos),
            modifiers,
            type_parameters,
            return_type,
            name,
            parameters,
            thrown_exceptions: alloc_vec_in(self.arena, thrown_exceptions),
            body,
        }
    }

    fn parse_parameters(&mut self) -> NodeList<'a, SingleVariableDeclaration<'a>> {
        self.expect_token(SyntaxKind::OpenParenToken);
        let mut parameters: Vec<SingleVariableDeclaration<'a>> = Vec::new();
        if self.current_token() != SyntaxKind::CloseParenToken {
            loop {
                let parameter = self.parse_single_variable_declaration(true);
                if parameters.last().is_some_and(|previous| previous.is_varargs) {
                    self.error(&messages::VARARGS_MUST_BE_LAST, &[]);
                }
                parameters.push(parameter);
                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
            }
        }
        self.expect_token(SyntaxKind::CloseParenToken);
        alloc_vec_in(self.arena, parameters)
    }

    fn parse_single_variable_declaration(&mut self, allow_varargs: bool) -> SingleVariableDeclaration<'a> {
        let pos = self.token_pos();
        let modifiers = self.parse_modifiers();
        let mut type_node = self.parse_type_ref();
        let is_varargs = allow_varargs && self.parse_optional(SyntaxKind::DotDotDotToken);
        let name = self.parse_identifier();
        let dimensions = self.parse_dimensions();
        if dimensions > 0 {
            type_node = self.wrap_in_array(type_node, dimensions, pos);
        }
        SingleVariableDeclaration {
            data: self.finish_node(SyntaxKind::SingleVariableDeclaration, pos),
            modifiers,
            type_node,
            is_varargs,
            name,
        }
    }

    fn parse_fragments(&mut self, first: Identifier) -> NodeList<'a, VariableDeclarationFragment<'a>> {
        let mut fragments = vec![self.parse_fragment_rest(first)];
        while self.parse_optional(SyntaxKind::CommaToken) {
            let name = self.parse_identifier();
            fragments.push(self.parse_fragment_rest(name));
        }
        alloc_vec_in(self.arena, fragments)
    }

    fn parse_fragment_rest(&mut self, name: Identifier) -> VariableDeclarationFragment<'a> {
        let pos = name.data.range.pos;
        let extra_dimensions = self.parse_dimensions();
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            let value = self.parse_variable_initializer();
            Some(&*self.arena.alloc(value))
        } else {
            None
        };
        VariableDeclarationFragment {
            data: self.finish_node(SyntaxKind::VariableDeclarationFragment, pos),
            name,
            extra_dimensions,
            initializer,
        }
    }

    fn parse_variable_initializer(&mut self) -> Expression<'a> {
        if self.current_token() == SyntaxKind::OpenBraceToken {
            Expression::ArrayInitializer(self.parse_array_initializer())
        } else {
            self.parse_expression()
        }
    }

    fn parse_array_initializer(&mut self) -> ArrayInitializer<'a> {
        let pos = self.token_pos();
        self.expect_token(SyntaxKind::OpenBraceToken);
        let mut expressions = Vec::new();
        while !matches!(
            self.current_token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            expressions.push(self.parse_variable_initializer());
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect_token(SyntaxKind::CloseBraceToken);
        ArrayInitializer {
            data: self.finish_node(SyntaxKind::ArrayInitializer, pos),
            expressions: alloc_vec_in(self.arena, expressions),
        }
    }

    // ========================================================================
    // Types
    // ========================================================================

    fn parse_type_ref(&mut self) -> &'a TypeNode<'a> {
        let type_node = self.parse_type();
        self.arena.alloc(type_node)
    }

    fn parse_type(&mut self) -> TypeNode<'a> {
        let pos = self.token_pos();
        let base = self.parse_non_array_type();
        let dimensions = self.parse_dimensions();
        if dimensions == 0 {
            return base;
        }
        TypeNode::Array(ArrayType {
            element_type: self.arena.alloc(base),
            dimensions,
            data: self.finish_node(SyntaxKind::ArrayType, pos),
        })
    }

    /// Counts `[]` pairs; stops before a `[` that opens an index expression.
    fn parse_dimensions(&mut self) -> u32 {
        let mut dimensions = 0;
        while self.current_token() == SyntaxKind::OpenBracketToken
            && self.next_token_is(SyntaxKind::CloseBracketToken)
        {
            self.next_token();
            self.next_token();
            dimensions += 1;
        }
        dimensions
    }

    fn wrap_in_array(&mut self, element: &'a TypeNode<'a>, dimensions: u32, pos: u32) -> &'a TypeNode<'a> {
        let (element_type, dimensions) = match element {
            TypeNode::Array(array) => (array.element_type, array.dimensions + dimensions),
            _ => (element, dimensions),
        };
        self.arena.alloc(TypeNode::Array(ArrayType {
            data: self.finish_node(SyntaxKind::ArrayType, pos),
            element_type,
            dimensions,
        }))
    }

    fn parse_non_array_type(&mut self) -> TypeNode<'a> {
        self.skip_annotations();
        let pos = self.token_pos();
        let token = self.current_token();
        if token.is_primitive_type_keyword() {
            self.next_token();
            return TypeNode::Primitive(PrimitiveType {
                data: self.finish_node(SyntaxKind::PrimitiveType, pos),
                keyword: token,
            });
        }
        if token != SyntaxKind::Identifier {
            self.error(&messages::TYPE_EXPECTED, &[]);
            let name = self.missing_identifier();
            return TypeNode::Simple(SimpleType {
                data: self.finish_node(SyntaxKind::SimpleType, pos),
                qualifier: &[],
                name,
            });
        }

        let mut qualifier = Vec::new();
        let mut name = self.parse_identifier();
        while self.current_token() == SyntaxKind::DotToken
            && self.next_token_is(SyntaxKind::Identifier)
        {
            self.next_token();
            let segment = self.parse_identifier();
            qualifier.push(std::mem::replace(&mut name, segment));
        }
        let simple = TypeNode::Simple(SimpleType {
            data: self.finish_node(SyntaxKind::SimpleType, pos),
            qualifier: alloc_vec_in(self.arena, qualifier),
            name,
        });

        if self.current_token() != SyntaxKind::LessThanToken {
            return simple;
        }
        let type_arguments = self.parse_type_arguments();
        TypeNode::Parameterized(ParameterizedType {
            base: self.arena.alloc(simple),
            type_arguments,
            data: self.finish_node(SyntaxKind::ParameterizedType, pos),
        })
    }

    /// `<A, B>`; the diamond `<>` yields an empty list.
    fn parse_type_arguments(&mut self) -> NodeList<'a, TypeNode<'a>> {
        self.expect_token(SyntaxKind::LessThanToken);
        let mut arguments = Vec::new();
        if self.current_token() != SyntaxKind::GreaterThanToken {
            loop {
                arguments.push(self.parse_type_argument());
                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
            }
        }
        self.expect_token(SyntaxKind::GreaterThanToken);
        alloc_vec_in(self.arena, arguments)
    }

    fn parse_type_argument(&mut self) -> TypeNode<'a> {
        if self.current_token() != SyntaxKind::QuestionToken {
            return self.parse_type();
        }
        let pos = self.token_pos();
        self.next_token();
        let (bound, is_upper_bound) = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            (Some(self.parse_type_ref()), true)
        } else if self.parse_optional(SyntaxKind::SuperKeyword) {
            (Some(self.parse_type_ref()), false)
        } else {
            (None, true)
        };
        TypeNode::Wildcard(WildcardType {
            data: self.finish_node(SyntaxKind::WildcardType, pos),
            bound,
            is_upper_bound,
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_block(&mut self) -> Block<'a> {
        let pos = self.token_pos();
        self.expect_token(SyntaxKind::OpenBraceToken);
        let statements = self.parse_statements();
        self.expect_token(SyntaxKind::CloseBraceToken);
        Block { data: self.finish_node(SyntaxKind::Block, pos), statements }
    }

    fn parse_statements(&mut self) -> NodeList<'a, Statement<'a>> {
        let mut statements = Vec::new();
        while !matches!(
            self.current_token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_pos();
            statements.push(self.parse_statement());
            if self.token_pos() == start {
                self.skip_to_next_statement();
            }
        }
        alloc_vec_in(self.arena, statements)
    }

    fn skip_to_next_statement(&mut self) {
        self.next_token();
        while !is_statement_recovery_point(self.current_token()) {
            self.next_token();
        }
    }

    fn parse_statement_ref(&mut self) -> &'a Statement<'a> {
        let statement = self.parse_statement();
        self.arena.alloc(statement)
    }

    fn parse_statement(&mut self) -> Statement<'a> {
        self.recursion_depth += 1;
        let statement = if self.recursion_depth > MAX_RECURSION_DEPTH {
            self.error(&messages::MAXIMUM_NESTING_DEPTH_EXCEEDED, &[]);
            let pos = self.token_pos();
            Statement::Empty(self.finish_node(SyntaxKind::EmptyStatement, pos))
        } else {
            self.parse_statement_worker()
        };
        self.recursion_depth -= 1;
        statement
    }

    fn parse_statement_worker(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        match self.current_token() {
            SyntaxKind::OpenBraceToken => Statement::Block(self.parse_block()),
            SyntaxKind::SemicolonToken => {
                self.next_token();
                Statement::Empty(self.finish_node(SyntaxKind::EmptyStatement, pos))
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::DoKeyword => self.parse_do_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::BreakKeyword | SyntaxKind::ContinueKeyword => self.parse_break_or_continue(),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::TryKeyword => self.parse_try_statement(),
            SyntaxKind::AssertKeyword => self.parse_assert_statement(),
            SyntaxKind::SynchronizedKeyword if self.next_token_is(SyntaxKind::OpenParenToken) => {
                self.parse_synchronized_statement()
            }
            SyntaxKind::CaseKeyword | SyntaxKind::DefaultKeyword => {
                let text = self.current_token().token_text().unwrap_or("case");
                self.error(&messages::ORPHANED_0, &[text]);
                self.parse_switch_label()
            }
            SyntaxKind::ThisKeyword | SyntaxKind::SuperKeyword
                if self.next_token_is(SyntaxKind::OpenParenToken) =>
            {
                self.parse_constructor_invocation()
            }
            SyntaxKind::Identifier if self.next_token_is(SyntaxKind::ColonToken) => {
                self.parse_labeled_statement()
            }
            SyntaxKind::ClassKeyword | SyntaxKind::InterfaceKeyword => {
                let declaration = self.parse_type_declaration(pos, ModifierFlags::NONE);
                Statement::TypeDeclaration(self.arena.alloc(declaration))
            }
            token if token.is_modifier_keyword() || token == SyntaxKind::AtToken => {
                let modifiers = self.parse_modifiers();
                if matches!(
                    self.current_token(),
                    SyntaxKind::ClassKeyword | SyntaxKind::InterfaceKeyword
                ) {
                    let declaration = self.parse_type_declaration(pos, modifiers);
                    return Statement::TypeDeclaration(self.arena.alloc(declaration));
                }
                self.parse_local_variable_declaration(pos, modifiers)
            }
            _ if self.is_start_of_local_variable_declaration() => {
                self.parse_local_variable_declaration(pos, ModifierFlags::NONE)
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// A type followed by a name. Types and expressions share a prefix
    /// (`a.b.c`, `List<X>` vs `a < b`) so this is decided speculatively.
    fn is_start_of_local_variable_declaration(&mut self) -> bool {
        let token = self.current_token();
        if token != SyntaxKind::Identifier && !token.is_primitive_type_keyword() {
            return false;
        }
        self.look_ahead(|p| {
            let diagnostics = p.diagnostics.len();
            p.parse_type();
            p.diagnostics.len() == diagnostics && p.current_token() == SyntaxKind::Identifier
        })
    }

    fn parse_local_variable_declaration(&mut self, pos: u32, modifiers: ModifierFlags) -> Statement<'a> {
        let type_node = self.parse_type_ref();
        let name = self.parse_identifier();
        let fragments = self.parse_fragments(name);
        self.expect_token(SyntaxKind::SemicolonToken);
        Statement::VariableDeclaration(VariableDeclarationStatement {
            data: self.finish_node(SyntaxKind::VariableDeclarationStatement, pos),
            modifiers,
            type_node,
            fragments,
        })
    }

    fn parse_expression_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        if self.current_token() == SyntaxKind::ElseKeyword
            || self.current_token() == SyntaxKind::CatchKeyword
            || self.current_token() == SyntaxKind::FinallyKeyword
        {
            self.error(&messages::STATEMENT_EXPECTED, &[]);
            self.next_token();
            return Statement::Empty(self.finish_node(SyntaxKind::EmptyStatement, pos));
        }
        let reported = self.diagnostics.len();
        let expression = self.parse_expression();
        if !is_statement_expression(&expression) && self.diagnostics.len() == reported {
            self.diagnostics.add(Diagnostic::with_location(
                &self.file_name,
                expression.data().range,
                &messages::NOT_A_STATEMENT,
                &[],
            ));
        }
        self.expect_token(SyntaxKind::SemicolonToken);
        Statement::Expression(ExpressionStatement {
            data: self.finish_node(SyntaxKind::ExpressionStatement, pos),
            expression: self.arena.alloc(expression),
        })
    }

    fn parse_parenthesized_condition(&mut self) -> &'a Expression<'a> {
        self.expect_token(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression_ref();
        self.expect_token(SyntaxKind::CloseParenToken);
        expression
    }

    fn parse_if_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        self.next_token();
        let expression = self.parse_parenthesized_condition();
        let then_statement = self.parse_statement_ref();
        let else_statement = if self.parse_optional(SyntaxKind::ElseKeyword) {
            Some(self.parse_statement_ref())
        } else {
            None
        };
        Statement::If(IfStatement {
            data: self.finish_node(SyntaxKind::IfStatement, pos),
            expression,
            then_statement,
            else_statement,
        })
    }

    fn parse_while_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        self.next_token();
        let expression = self.parse_parenthesized_condition();
        let body = self.parse_statement_ref();
        Statement::While(WhileStatement {
            data: self.finish_node(SyntaxKind::WhileStatement, pos),
            expression,
            body,
        })
    }

    fn parse_do_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        self.next_token();
        let body = self.parse_statement_ref();
        self.expect_token(SyntaxKind::WhileKeyword);
        let expression = self.parse_parenthesized_condition();
        self.expect_token(SyntaxKind::SemicolonToken);
        Statement::Do(DoStatement {
            data: self.finish_node(SyntaxKind::DoStatement, pos),
            body,
            expression,
        })
    }

    fn parse_for_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        self.next_token();
        self.expect_token(SyntaxKind::OpenParenToken);

        let mut initializers = Vec::new();
        if self.current_token() != SyntaxKind::SemicolonToken {
            let token = self.current_token();
            if token == SyntaxKind::FinalKeyword
                || token == SyntaxKind::AtToken
                || self.is_start_of_local_variable_declaration()
            {
                let declaration_pos = self.token_pos();
                let modifiers = self.parse_modifiers();
                let type_node = self.parse_type_ref();
                let name = self.parse_identifier();

                if self.parse_optional(SyntaxKind::ColonToken) {
                    let parameter = SingleVariableDeclaration {
                        data: self.finish_node(SyntaxKind::SingleVariableDeclaration, declaration_pos),
                        modifiers,
                        type_node,
                        is_varargs: false,
                        name,
                    };
                    let expression = self.parse_expression_ref();
                    self.expect_token(SyntaxKind::CloseParenToken);
                    let body = self.parse_statement_ref();
                    return Statement::EnhancedFor(EnhancedForStatement {
                        data: self.finish_node(SyntaxKind::EnhancedForStatement, pos),
                        parameter,
                        expression,
                        body,
                    });
                }

                let fragments = self.parse_fragments(name);
                initializers.push(Expression::VariableDeclaration(VariableDeclarationExpression {
                    data: self.finish_node(SyntaxKind::VariableDeclarationExpression, declaration_pos),
                    modifiers,
                    type_node,
                    fragments,
                }));
            } else {
                initializers = self.parse_expression_list(SyntaxKind::SemicolonToken);
            }
        }
        self.expect_token(SyntaxKind::SemicolonToken);

        let expression = if self.current_token() != SyntaxKind::SemicolonToken {
            Some(self.parse_expression_ref())
        } else {
            None
        };
        self.expect_token(SyntaxKind::SemicolonToken);

        let updaters = self.parse_expression_list(SyntaxKind::CloseParenToken);
        self.expect_token(SyntaxKind::CloseParenToken);
        let body = self.parse_statement_ref();

        Statement::For(ForStatement {
            data: self.finish_node(SyntaxKind::ForStatement, pos),
            initializers: alloc_vec_in(self.arena, initializers),
            expression,
            updaters: alloc_vec_in(self.arena, updaters),
            body,
        })
    }

    fn parse_expression_list(&mut self, terminator: SyntaxKind) -> Vec<Expression<'a>> {
        let mut expressions = Vec::new();
        if self.current_token() == terminator {
            return expressions;
        }
        loop {
            expressions.push(self.parse_expression());
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        expressions
    }

    fn parse_switch_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        self.next_token();
        let expression = self.parse_parenthesized_condition();
        self.expect_token(SyntaxKind::OpenBraceToken);

        let mut statements = Vec::new();
        while !matches!(
            self.current_token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_pos();
            if matches!(
                self.current_token(),
                SyntaxKind::CaseKeyword | SyntaxKind::DefaultKeyword
            ) {
                statements.push(self.parse_switch_label());
            } else {
                statements.push(self.parse_statement());
            }
            if self.token_pos() == start {
                self.skip_to_next_statement();
            }
        }
        self.expect_token(SyntaxKind::CloseBraceToken);

        Statement::Switch(SwitchStatement {
            data: self.finish_node(SyntaxKind::SwitchStatement, pos),
            expression,
            statements: alloc_vec_in(self.arena, statements),
        })
    }

    fn parse_switch_label(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        let is_default = self.current_token() == SyntaxKind::DefaultKeyword;
        self.next_token();
        let expression = if is_default { None } else { Some(self.parse_expression_ref()) };
        if self.current_token() == SyntaxKind::MinusGreaterThanToken {
            self.error_unexpected_token();
            self.next_token();
        } else {
            self.expect_token(SyntaxKind::ColonToken);
        }
        Statement::SwitchCase(SwitchCase {
            data: self.finish_node(SyntaxKind::SwitchCase, pos),
            expression,
        })
    }

    fn parse_return_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        self.next_token();
        let expression = if self.current_token() != SyntaxKind::SemicolonToken {
            Some(self.parse_expression_ref())
        } else {
            None
        };
        self.expect_token(SyntaxKind::SemicolonToken);
        Statement::Return(ReturnStatement {
            data: self.finish_node(SyntaxKind::ReturnStatement, pos),
            expression,
        })
    }

    fn parse_break_or_continue(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        let is_break = self.current_token() == SyntaxKind::BreakKeyword;
        self.next_token();
        let label = if self.current_token() == SyntaxKind::Identifier {
            Some(self.parse_identifier())
        } else {
            None
        };
        self.expect_token(SyntaxKind::SemicolonToken);
        if is_break {
            Statement::Break(BreakStatement { data: self.finish_node(SyntaxKind::BreakStatement, pos), label })
        } else {
            Statement::Continue(ContinueStatement {
                data: self.finish_node(SyntaxKind::ContinueStatement, pos),
                label,
            })
        }
    }

    fn parse_throw_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        self.next_token();
        let expression = self.parse_expression_ref();
        self.expect_token(SyntaxKind::SemicolonToken);
        Statement::Throw(ThrowStatement {
            data: self.finish_node(SyntaxKind::ThrowStatement, pos),
            expression,
        })
    }

    fn parse_try_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        self.next_token();
        if self.current_token() == SyntaxKind::OpenParenToken {
            // try-with-resources
            self.error_unexpected_token();
            self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
        }
        let body = self.parse_block();

        let mut catch_clauses = Vec::new();
        while self.current_token() == SyntaxKind::CatchKeyword {
            let catch_pos = self.token_pos();
            self.next_token();
            self.expect_token(SyntaxKind::OpenParenToken);
            let exception = self.parse_catch_parameter();
            self.expect_token(SyntaxKind::CloseParenToken);
            let catch_body = self.parse_block();
            catch_clauses.push(CatchClause {
                data: self.finish_node(SyntaxKind::CatchClause, catch_pos),
                exception,
                body: catch_body,
            });
        }

        let finally = if self.parse_optional(SyntaxKind::FinallyKeyword) {
            Some(self.parse_block())
        } else {
            None
        };
        if catch_clauses.is_empty() && finally.is_none() {
            self.error(&messages::_0_EXPECTED, &["catch"]);
        }

        Statement::Try(TryStatement {
            data: self.finish_node(SyntaxKind::TryStatement, pos),
            body,
            catch_clauses: alloc_vec_in(self.arena, catch_clauses),
            finally,
        })
    }

    fn parse_catch_parameter(&mut self) -> SingleVariableDeclaration<'a> {
        let pos = self.token_pos();
        let modifiers = self.parse_modifiers();
        let type_node = self.parse_type_ref();
        if self.current_token() == SyntaxKind::BarToken {
            // multi-catch
            self.error_unexpected_token();
            while self.parse_optional(SyntaxKind::BarToken) {
                self.parse_type();
            }
        }
        let name = self.parse_identifier();
        SingleVariableDeclaration {
            data: self.finish_node(SyntaxKind::SingleVariableDeclaration, pos),
            modifiers,
            type_node,
            is_varargs: false,
            name,
        }
    }

    fn parse_labeled_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        let label = self.parse_identifier();
        self.expect_token(SyntaxKind::ColonToken);
        let body = self.parse_statement_ref();
        Statement::Labeled(LabeledStatement {
            data: self.finish_node(SyntaxKind::LabeledStatement, pos),
            label,
            body,
        })
    }

    fn parse_synchronized_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        self.next_token();
        let expression = self.parse_parenthesized_condition();
        let body = self.parse_block();
        Statement::Synchronized(SynchronizedStatement {
            data: self.finish_node(SyntaxKind::SynchronizedStatement, pos),
            expression,
            body,
        })
    }

    fn parse_assert_statement(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        self.next_token();
        let expression = self.parse_expression_ref();
        let message = if self.parse_optional(SyntaxKind::ColonToken) {
            Some(self.parse_expression_ref())
        } else {
            None
        };
        self.expect_token(SyntaxKind::SemicolonToken);
        Statement::Assert(AssertStatement {
            data: self.finish_node(SyntaxKind::AssertStatement, pos),
            expression,
            message,
        })
    }

    fn parse_constructor_invocation(&mut self) -> Statement<'a> {
        let pos = self.token_pos();
        let is_super = self.current_token() == SyntaxKind::SuperKeyword;
        self.next_token();
        let arguments = self.parse_arguments();
        self.expect_token(SyntaxKind::SemicolonToken);
        let kind = if is_super {
            SyntaxKind::SuperConstructorInvocation
        } else {
            SyntaxKind::ConstructorInvocation
        };
        Statement::ConstructorInvocation(ConstructorInvocation {
            data: self.finish_node(kind, pos),
            is_super,
            arguments,
        })
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn parse_expression_ref(&mut self) -> &'a Expression<'a> {
        let expression = self.parse_expression();
        self.arena.alloc(expression)
    }

    pub fn parse_expression(&mut self) -> Expression<'a> {
        self.recursion_depth += 1;
        let expression = if self.recursion_depth > MAX_RECURSION_DEPTH {
            self.error(&messages::MAXIMUM_NESTING_DEPTH_EXCEEDED, &[]);
            Expression::Name(self.missing_identifier())
        } else {
            self.parse_assignment_expression()
        };
        self.recursion_depth -= 1;
        expression
    }

    fn parse_assignment_expression(&mut self) -> Expression<'a> {
        let pos = self.token_pos();
        let left = self.parse_conditional_expression();
        let operator = self.current_token();
        if !operator.is_assignment_operator() {
            return left;
        }
        self.next_token();
        let right = self.parse_expression_ref();
        Expression::Assignment(Assignment {
            data: self.finish_node(SyntaxKind::Assignment, pos),
            left: self.arena.alloc(left),
            operator,
            right,
        })
    }

    fn parse_conditional_expression(&mut self) -> Expression<'a> {
        let pos = self.token_pos();
        let condition = self.parse_binary_expression(OperatorPrecedence::Lowest);
        if !self.parse_optional(SyntaxKind::QuestionToken) {
            return condition;
        }
        let when_true = self.parse_expression_ref();
        self.expect_token(SyntaxKind::ColonToken);
        self.recursion_depth += 1;
        let when_false = if self.recursion_depth > MAX_RECURSION_DEPTH {
            self.error(&messages::MAXIMUM_NESTING_DEPTH_EXCEEDED, &[]);
            self.parse_binary_expression(OperatorPrecedence::Lowest)
        } else {
            self.parse_conditional_expression()
        };
        self.recursion_depth -= 1;
        Expression::Conditional(ConditionalExpression {
            data: self.finish_node(SyntaxKind::ConditionalExpression, pos),
            condition: self.arena.alloc(condition),
            when_true,
            when_false: self.arena.alloc(when_false),
        })
    }

    /// Each operator of a chain nests the tree one level deeper, so the
    /// chain counts against the recursion limit. Past the limit the rest of
    /// the chain is still consumed but no longer attached.
    fn parse_binary_expression(&mut self, min_precedence: OperatorPrecedence) -> Expression<'a> {
        let pos = self.token_pos();
        let depth = self.recursion_depth;
        let mut too_deep = false;
        let mut left = self.parse_unary_expression();
        loop {
            // `>` is scanned alone so generics close cleanly; widen it here.
            if self.current_token() == SyntaxKind::GreaterThanToken {
                self.scanner.rescan_greater_than_token();
            }
            let operator = self.current_token();
            let precedence = get_binary_operator_precedence(operator);
            if precedence == OperatorPrecedence::Invalid || precedence <= min_precedence {
                break;
            }
            self.next_token();
            let right = if operator == SyntaxKind::InstanceOfKeyword {
                let type_pos = self.token_pos();
                let type_node = self.parse_type_ref();
                Expression::TypeOperand(TypeOperand {
                    data: self.finish_node(SyntaxKind::TypeOperand, type_pos),
                    type_node,
                })
            } else {
                self.parse_binary_expression(precedence)
            };
            if too_deep {
                continue;
            }
            self.recursion_depth += 1;
            if self.recursion_depth > MAX_RECURSION_DEPTH {
                self.error(&messages::MAXIMUM_NESTING_DEPTH_EXCEEDED, &[]);
                too_deep = true;
                continue;
            }
            left = Expression::Infix(InfixExpression {
                data: self.finish_node(SyntaxKind::InfixExpression, pos),
                left: self.arena.alloc(left),
                operator,
                right: self.arena.alloc(right),
            });
        }
        self.recursion_depth = depth;
        left
    }

    fn parse_unary_expression(&mut self) -> Expression<'a> {
        let pos = self.token_pos();
        let operator = self.current_token();
        if is_prefix_operator(operator) {
            self.next_token();
            let operand = self.parse_nested_unary_operand();
            return Expression::Prefix(PrefixExpression {
                data: self.finish_node(SyntaxKind::PrefixExpression, pos),
                operator,
                operand: self.arena.alloc(operand),
            });
        }
        if operator == SyntaxKind::OpenParenToken && self.is_start_of_cast() {
            self.next_token();
            let type_node = self.parse_type_ref();
            self.expect_token(SyntaxKind::CloseParenToken);
            let expression = self.parse_nested_unary_operand();
            return Expression::Cast(CastExpression {
                data: self.finish_node(SyntaxKind::CastExpression, pos),
                type_node,
                expression: self.arena.alloc(expression),
            });
        }
        self.parse_postfix_expression()
    }

    /// Operand of a prefix operator or cast. Past the recursion limit the
    /// remaining prefix operators are skipped.
    fn parse_nested_unary_operand(&mut self) -> Expression<'a> {
        self.recursion_depth += 1;
        let operand = if self.recursion_depth > MAX_RECURSION_DEPTH {
            self.error(&messages::MAXIMUM_NESTING_DEPTH_EXCEEDED, &[]);
            while is_prefix_operator(self.current_token()) {
                self.next_token();
            }
            self.parse_postfix_expression()
        } else {
            self.parse_unary_expression()
        };
        self.recursion_depth -= 1;
        operand
    }

    fn is_start_of_cast(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            let primitive = p.current_token().is_primitive_type_keyword();
            if !primitive && p.current_token() != SyntaxKind::Identifier {
                return false;
            }
            let diagnostics = p.diagnostics.len();
            p.parse_type();
            if p.diagnostics.len() != diagnostics || p.current_token() != SyntaxKind::CloseParenToken {
                return false;
            }
            p.next_token();
            primitive || can_start_cast_operand(p.current_token())
        })
    }

    fn parse_postfix_expression(&mut self) -> Expression<'a> {
        let pos = self.token_pos();
        let mut expression = self.parse_member_expression();
        while matches!(
            self.current_token(),
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
        ) {
            let operator = self.current_token();
            self.next_token();
            expression = Expression::Postfix(PostfixExpression {
                data: self.finish_node(SyntaxKind::PostfixExpression, pos),
                operand: self.arena.alloc(expression),
                operator,
            });
        }
        expression
    }

    /// A primary followed by any number of `.name`, `.name(...)` and `[i]`.
    fn parse_member_expression(&mut self) -> Expression<'a> {
        let pos = self.token_pos();
        let mut expression = self.parse_primary_expression();
        loop {
            match self.current_token() {
                SyntaxKind::DotToken => {
                    self.next_token();
                    let type_arguments = if self.current_token() == SyntaxKind::LessThanToken {
                        self.parse_type_arguments()
                    } else {
                        &[]
                    };
                    if self.current_token() != SyntaxKind::Identifier {
                        // `.class`, `.this`, `.new`
                        self.error_unexpected_token();
                        break;
                    }
                    let name = self.parse_identifier();
                    expression = if self.current_token() == SyntaxKind::OpenParenToken {
                        let arguments = self.parse_arguments();
                        Expression::MethodInvocation(MethodInvocation {
                            data: self.finish_node(SyntaxKind::MethodInvocation, pos),
                            expression: Some(self.arena.alloc(expression)),
                            type_arguments,
                            name,
                            arguments,
                        })
                    } else {
                        Expression::FieldAccess(FieldAccess {
                            data: self.finish_node(SyntaxKind::FieldAccess, pos),
                            expression: self.arena.alloc(expression),
                            name,
                        })
                    };
                }
                SyntaxKind::OpenBracketToken => {
                    self.next_token();
                    let index = self.parse_expression_ref();
                    self.expect_token(SyntaxKind::CloseBracketToken);
                    expression = Expression::ArrayAccess(ArrayAccess {
                        data: self.finish_node(SyntaxKind::ArrayAccess, pos),
                        array: self.arena.alloc(expression),
                        index,
                    });
                }
                SyntaxKind::ColonColonToken | SyntaxKind::MinusGreaterThanToken => {
                    // Method references and lambdas.
                    self.error_unexpected_token();
                    break;
                }
                _ => break,
            }
        }
        expression
    }

    fn parse_primary_expression(&mut self) -> Expression<'a> {
        let pos = self.token_pos();
        match self.current_token() {
            SyntaxKind::NumericLiteral => {
                let token: &'a str = self.arena.alloc_str(self.scanner.token_value());
                self.next_token();
                Expression::NumberLiteral(NumberLiteral {
                    data: self.finish_node(SyntaxKind::NumberLiteral, pos),
                    token,
                })
            }
            SyntaxKind::StringLiteral => {
                let token: &'a str = self.arena.alloc_str(self.scanner.token_value());
                self.next_token();
                Expression::StringLiteral(StringLiteral {
                    data: self.finish_node(SyntaxKind::StringLiteralExpression, pos),
                    token,
                })
            }
            SyntaxKind::CharacterLiteral => {
                let token: &'a str = self.arena.alloc_str(self.scanner.token_value());
                self.next_token();
                Expression::CharacterLiteral(StringLiteral {
                    data: self.finish_node(SyntaxKind::CharacterLiteralExpression, pos),
                    token,
                })
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                let value = self.current_token() == SyntaxKind::TrueKeyword;
                self.next_token();
                Expression::BooleanLiteral(BooleanLiteral {
                    data: self.finish_node(SyntaxKind::BooleanLiteral, pos),
                    value,
                })
            }
            SyntaxKind::NullKeyword => {
                self.next_token();
                Expression::NullLiteral(self.finish_node(SyntaxKind::NullLiteral, pos))
            }
            SyntaxKind::ThisKeyword => {
                self.next_token();
                Expression::This(self.finish_node(SyntaxKind::ThisExpression, pos))
            }
            SyntaxKind::SuperKeyword => {
                self.next_token();
                Expression::Super(self.finish_node(SyntaxKind::SuperExpression, pos))
            }
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let expression = self.parse_expression_ref();
                self.expect_token(SyntaxKind::CloseParenToken);
                Expression::Parenthesized(ParenthesizedExpression {
                    data: self.finish_node(SyntaxKind::ParenthesizedExpression, pos),
                    expression,
                })
            }
            SyntaxKind::NewKeyword => self.parse_creation_expression(),
            SyntaxKind::Identifier => {
                let name = self.parse_identifier();
                if self.current_token() != SyntaxKind::OpenParenToken {
                    return Expression::Name(name);
                }
                let arguments = self.parse_arguments();
                Expression::MethodInvocation(MethodInvocation {
                    data: self.finish_node(SyntaxKind::MethodInvocation, pos),
                    expression: None,
                    type_arguments: &[],
                    name,
                    arguments,
                })
            }
            _ => {
                self.error(&messages::EXPRESSION_EXPECTED, &[]);
                Expression::Name(self.missing_identifier())
            }
        }
    }

    fn parse_creation_expression(&mut self) -> Expression<'a> {
        let pos = self.token_pos();
        self.next_token();
        let base = self.parse_non_array_type();
        let type_node: &'a TypeNode<'a> = self.arena.alloc(base);

        if self.current_token() == SyntaxKind::OpenBracketToken {
            let mut dimensions = Vec::new();
            let mut extra_dimensions = 0;
            while self.parse_optional(SyntaxKind::OpenBracketToken) {
                if self.parse_optional(SyntaxKind::CloseBracketToken) {
                    extra_dimensions += 1;
                    continue;
                }
                if extra_dimensions > 0 {
                    self.error(&messages::_0_EXPECTED, &["]"]);
                }
                dimensions.push(self.parse_expression());
                self.expect_token(SyntaxKind::CloseBracketToken);
            }
            let initializer = if self.current_token() == SyntaxKind::OpenBraceToken {
                let initializer = self.parse_array_initializer();
                Some(&*self.arena.alloc(initializer))
            } else {
                None
            };
            return Expression::ArrayCreation(ArrayCreation {
                data: self.finish_node(SyntaxKind::ArrayCreation, pos),
                element_type: type_node,
                dimensions: alloc_vec_in(self.arena, dimensions),
                extra_dimensions,
                initializer,
            });
        }

        let arguments = self.parse_arguments();
        let anonymous_body = if self.current_token() == SyntaxKind::OpenBraceToken {
            Some(self.parse_class_body())
        } else {
            None
        };
        Expression::ClassInstanceCreation(ClassInstanceCreation {
            data: self.finish_node(SyntaxKind::ClassInstanceCreation, pos),
            type_node,
            arguments,
            anonymous_body,
        })
    }

    fn parse_arguments(&mut self) -> NodeList<'a, Expression<'a>> {
        self.expect_token(SyntaxKind::OpenParenToken);
        let arguments = self.parse_expression_list(SyntaxKind::CloseParenToken);
        self.expect_token(SyntaxKind::CloseParenToken);
        alloc_vec_in(self.arena, arguments)
    }
}

/// Java only allows these expression forms to stand alone as statements.
fn is_statement_expression(expression: &Expression<'_>) -> bool {
    match expression {
        Expression::Assignment(_)
        | Expression::Postfix(_)
        | Expression::MethodInvocation(_)
        | Expression::ClassInstanceCreation(_) => true,
        Expression::Prefix(prefix) => matches!(
            prefix.operator,
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
        ),
        _ => false,
    }
}
