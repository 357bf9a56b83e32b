//! Translator integration tests.
//!
//! Each case parses and binds real Java source, translates it and checks
//! the printed Dart. Error cases check the error kind and the node it
//! names.

use bumpalo::Bump;
use j2d_ast as java;
use j2d_ast::{NoBindings, NodeData, SyntaxKind};
use j2d_binder::{Binder, Environment};
use j2d_core::StringInterner;
use j2d_dart_ast as dart;
use j2d_dart_ast::TokenType;
use j2d_parser::parse_compilation_unit;
use j2d_printer::print_unit;
use j2d_translator::*;

struct Translated {
    registry: BindingRegistry,
    units: Vec<dart::CompilationUnit>,
}

impl Translated {
    fn render(&self, index: usize) -> String {
        print_unit(self.registry.identifiers(), &self.units[index])
    }
}

/// Helper: parse, bind and translate a batch of `(file name, source)` pairs
/// through one registry.
fn translate_batch(files: &[(&str, &str)], policy: KeyPolicy, allow_syntax_errors: bool) -> Result<Translated, TranslateError> {
    let arena = Bump::new();
    let interner = StringInterner::new();
    let mut units = Vec::new();
    for (name, source) in files {
        let parsed = parse_compilation_unit(&arena, &interner, name, source);
        if !allow_syntax_errors {
            assert!(parsed.diagnostics.is_empty(), "syntax errors in {}: {:?}", name, parsed.diagnostics.diagnostics());
        }
        units.push(parsed.unit);
    }
    let mut env = Environment::new();
    for unit in &units {
        env.index_unit(unit, &interner);
    }
    let mut registry = BindingRegistry::new(policy);
    let mut translated = Vec::new();
    for unit in &units {
        let mut binder = Binder::new(&env, &interner);
        binder.bind_compilation_unit(unit);
        let bindings = binder.into_bindings();
        translated.push(translate_unit(unit, &interner, &bindings, &mut registry)?);
    }
    Ok(Translated { registry, units: translated })
}

fn translate_source(source: &str) -> Translated {
    translate_batch(&[("Main.java", source)], KeyPolicy::ResolvedOnly, false)
        .unwrap_or_else(|error| panic!("translation of {:?} failed: {}", source, error))
}

fn render(source: &str) -> String {
    translate_source(source).render(0)
}

fn translate_error(source: &str) -> TranslateError {
    match translate_batch(&[("Main.java", source)], KeyPolicy::ResolvedOnly, false) {
        Ok(translated) => panic!("expected an error, got {:?}", translated.render(0)),
        Err(error) => error,
    }
}

const BODY_PREFIX: &str = "class A {void f(int a, int b, bool c) {";

/// Helper: translate statements inside a method with parameters `a`, `b`
/// and `c`, and return the printed method body.
fn render_body(statements: &str) -> String {
    let rendered = render(&format!("class A {{ void f(int a, int b, boolean c) {{ {} }} }}", statements));
    rendered
        .strip_prefix(BODY_PREFIX)
        .and_then(|rest| rest.strip_suffix("}}"))
        .unwrap_or_else(|| panic!("unexpected rendering {:?}", rendered))
        .to_string()
}

fn first_statement(unit: &dart::CompilationUnit) -> &dart::Statement {
    let dart::ClassMember::Method(method) = &unit.declarations[0].members[0] else {
        panic!("expected a method");
    };
    &method.body.as_ref().expect("method body").statements[0]
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_empty_class() {
    assert_eq!(render("class A {}"), "class A {}");
    assert_eq!(render("package test; import java.util.List; class A {} class B {}"), "class A {} class B {}");
}

#[test]
fn test_type_parameters() {
    assert_eq!(render("class A<K, V extends String> {}"), "class A<K, V extends String> {}");
    assert_eq!(
        render("class Box<T extends Comparable<T>> { T value; }"),
        "class Box<T extends Comparable<T>> {T value;}"
    );
}

#[test]
fn test_constructor_and_instance_creation() {
    assert_eq!(
        render("class A { A(int p){} void foo(){ new A(123); } }"),
        "class A {A(int p) {} void foo() {new A(123);}}"
    );
}

#[test]
fn test_fields_and_methods() {
    assert_eq!(
        render("class A { private static int x = 1, y; public int size() { return x; } }"),
        "class A {int x = 1, y; int size() {return x;}}"
    );
}

#[test]
fn test_interface_methods_render_without_body() {
    assert_eq!(render("interface I { void run(); int size(); }"), "class I {void run(); int size();}");
    assert_eq!(render("abstract class A { abstract void run(); }"), "class A {void run();}");
}

#[test]
fn test_supertypes_and_throws_are_dropped() {
    assert_eq!(
        render("class A extends Base implements Runnable { void run() throws Exception {} }"),
        "class A {void run() {}}"
    );
}

#[test]
fn test_qualified_and_parameterized_types() {
    assert_eq!(
        render("class A { java.util.List<String> names; Map<String, List<Integer>> index; }"),
        "class A {java.util.List<String> names; Map<String, List<Integer>> index;}"
    );
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_method_invocations() {
    assert_eq!(
        render("class A { void foo(int p) { print(0); this.foo(0); foo(p); } }"),
        "class A {void foo(int p) {print(0); this.foo(0); foo(p);}}"
    );
}

#[test]
fn test_binary_operators() {
    let table = [
        ("+", "+"),
        ("-", "-"),
        ("*", "*"),
        ("/", "/"),
        ("%", "%"),
        ("<<", "<<"),
        (">>", ">>"),
        (">>>", ">>"),
        ("&", "&"),
        ("|", "|"),
        ("^", "^"),
        ("<", "<"),
        (">", ">"),
        ("<=", "<="),
        (">=", ">="),
        ("==", "=="),
        ("!=", "!="),
    ];
    for (java_operator, dart_operator) in table {
        assert_eq!(
            render_body(&format!("int x = a {} b;", java_operator)),
            format!("int x = a {} b;", dart_operator),
            "operator {}",
            java_operator
        );
    }
    assert_eq!(render_body("boolean x = c && c || c;"), "bool x = c && c || c;");
}

#[test]
fn test_both_right_shifts_share_one_token() {
    for source in ["class A { void f(int a) { int x = a >> 1; } }", "class A { void f(int a) { int x = a >>> 1; } }"] {
        let translated = translate_source(source);
        let dart::Statement::VariableDeclaration(declaration) = first_statement(&translated.units[0]) else {
            panic!("expected a declaration");
        };
        let Some(dart::Expression::Binary(binary)) = &declaration.variables.variables[0].initializer else {
            panic!("expected a binary initializer");
        };
        assert_eq!(binary.operator, TokenType::GtGt);
    }
}

#[test]
fn test_assignments() {
    assert_eq!(
        render_body("a = 3; a += b; a -= b; a *= b; a /= b; a %= b; a &= b; a |= b; a ^= b; a <<= 1; a >>= 1; a >>>= 1;"),
        "a = 3; a += b; a -= b; a *= b; a /= b; a %= b; a &= b; a |= b; a ^= b; a <<= 1; a >>= 1; a >>= 1;"
    );
}

#[test]
fn test_unary_operators() {
    assert_eq!(
        render_body("int x = -a; int y = +a; boolean z = !c; int w = ~a; a++; a--; ++a; --b;"),
        "int x = -a; int y = a; bool z = !c; int w = ~a; a++; a--; ++a; --b;"
    );
}

#[test]
fn test_stacked_negation_keeps_its_meaning() {
    assert_eq!(render_body("int x = - -a; int y = -+-a; int z = - --a;"), "int x = - -a; int y = - -a; int z = - --a;");
}

#[test]
fn test_java_precedence_is_kept_in_dart() {
    assert_eq!(
        render_body("boolean x = a < b & b < a; boolean y = a == b == c; int z = a & b ^ a | b;"),
        "bool x = (a < b) & (b < a); bool y = (a == b) == c; int z = a & b ^ a | b;"
    );
    assert_eq!(render_body("boolean x = c & a == b;"), "bool x = c & (a == b);");
}

#[test]
fn test_number_literals() {
    assert_eq!(
        render_body("long v = 1L; float w = 1f; double x = 1.0; long y = 0xBEEFL; double z = 1d; int h = 0xFD;"),
        "int v = 1; double w = 1.0; double x = 1.0; int y = 0xBEEF; double z = 1.0; int h = 0xFD;"
    );
    assert_eq!(render_body("boolean t = true; boolean f = false;"), "bool t = true; bool f = false;");
}

#[test]
fn test_primitive_aliasing() {
    assert_eq!(
        render("class A { byte a; char b; short c; long d; float e; boolean f; int g; double h; void run() {} }"),
        "class A {int a; int b; int c; int d; double e; bool f; int g; double h; void run() {}}"
    );
}

#[test]
fn test_cast_is_elided() {
    let translated = translate_source("class A { void f() { byte b = (byte) 0; } }");
    assert_eq!(translated.render(0), "class A {void f() {int b = 0;}}");
    let dart::Statement::VariableDeclaration(declaration) = first_statement(&translated.units[0]) else {
        panic!("expected a declaration");
    };
    assert!(matches!(
        &declaration.variables.variables[0].initializer,
        Some(dart::Expression::IntegerLiteral(literal)) if literal.lexeme == "0"
    ));
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_control_flow_statements() {
    assert_eq!(render_body("if (c) return; else { }"), "if (c) return; else {}");
    assert_eq!(render_body("if (c) a = 1;"), "if (c) a = 1;");
    assert_eq!(render_body("while (c) { a++; }"), "while (c) {a++;}");
    assert_eq!(render_body("do { } while (c);"), "do {} while (c);");
    assert_eq!(render_body(";"), ";");
    assert_eq!(render_body("assert c;"), "assert (c);");
    assert_eq!(render_body("{ int x = 1, y; }"), "{int x = 1, y;}");
}

#[test]
fn test_for_statements() {
    assert_eq!(render_body("for (int i = 0; i < b; i++) { }"), "for (int i = 0; i < b; i++) {}");
    assert_eq!(render_body("for (a = 0; ; ) { }"), "for (a = 0;;) {}");
    assert_eq!(render_body("for (;;) { }"), "for (;;) {}");
    assert_eq!(
        render("class A { void f(List<Integer> xs) { for (int x : xs) { } } }"),
        "class A {void f(List<Integer> xs) {for (int x in xs) {}}}"
    );
}

#[test]
fn test_switch_statement() {
    assert_eq!(
        render_body("switch (a) { case 1: a++; break; case 2: default: return; }"),
        "switch (a) {case 1: a++; break; case 2: default: return;}"
    );
    assert_eq!(render_body("switch (a) { }"), "switch (a) {}");
}

#[test]
fn test_try_and_throw() {
    assert_eq!(
        render_body("try { a++; } catch (Exception e) { throw e; } finally { }"),
        "try {a++;} on Exception catch (e) {throw e;} finally {}"
    );
}

#[test]
fn test_labels_are_flattened() {
    let translated = translate_source("class A { void f() { outer: inner: while (true) { break outer; continue inner; } } }");
    assert_eq!(translated.render(0), "class A {void f() {outer: inner: while (true) {break outer; continue inner;}}}");
    let dart::Statement::Labeled(labeled) = first_statement(&translated.units[0]) else {
        panic!("expected a labeled statement");
    };
    assert_eq!(labeled.labels.len(), 2);
    assert!(matches!(*labeled.statement, dart::Statement::While(_)));
    for label in &labeled.labels {
        assert_eq!(translated.registry.key_of(label), None);
    }
}

#[test]
fn test_synchronized_keeps_only_its_block() {
    assert_eq!(render_body("synchronized (this) { a++; }"), "{a++;}");
}

// ============================================================================
// Unsupported and malformed input
// ============================================================================

#[test]
fn test_instanceof_is_unsupported() {
    let error = translate_error("class A { boolean f(Object o) { return o instanceof A; } }");
    assert!(matches!(error, TranslateError::UnsupportedConstruct { .. }));
    assert_eq!(error.kind(), SyntaxKind::InstanceOfKeyword);
    assert!(error.to_string().contains("instanceof"), "{}", error);
}

#[test]
fn test_unsupported_constructs_name_their_kind() {
    let cases = [
        ("class A { String s = \"x\"; }", SyntaxKind::StringLiteralExpression),
        ("class A { char c = 'x'; }", SyntaxKind::CharacterLiteralExpression),
        ("class A { Object o = null; }", SyntaxKind::NullLiteral),
        ("class A { int x = (1); }", SyntaxKind::ParenthesizedExpression),
        ("class A { void f(boolean c) { int x = c ? 1 : 2; } }", SyntaxKind::ConditionalExpression),
        ("class A { void f(int[] xs) {} }", SyntaxKind::ArrayType),
        ("class A { List<?> xs; }", SyntaxKind::WildcardType),
        ("class A<T extends Number & Runnable> {}", SyntaxKind::TypeParameter),
        ("class A { void f() { for (a = 0, b = 0; ; ) {} } int a, b; }", SyntaxKind::ForStatement),
        ("class A { class B {} }", SyntaxKind::TypeDeclaration),
        ("class A { static { } }", SyntaxKind::Initializer),
        ("class A { <T> void f(T t) {} }", SyntaxKind::MethodDeclaration),
        ("class A { void f(int... xs) {} }", SyntaxKind::SingleVariableDeclaration),
        ("class A { void f(boolean c) { assert c : 1; } }", SyntaxKind::AssertStatement),
        ("class A { A() { this(1); } A(int x) {} }", SyntaxKind::ConstructorInvocation),
    ];
    for (source, kind) in cases {
        let error = translate_error(source);
        assert!(matches!(error, TranslateError::UnsupportedConstruct { .. }), "{}: {}", source, error);
        assert_eq!(error.kind(), kind, "{}", source);
    }
}

#[test]
fn test_case_outside_switch_is_malformed() {
    let result = translate_batch(
        &[("Main.java", "class T { void m() { case 1: foo(); } }")],
        KeyPolicy::ResolvedOnly,
        true,
    );
    let error = result.err().expect("orphaned case must fail");
    assert!(matches!(error, TranslateError::MalformedInput { kind: SyntaxKind::SwitchCase, .. }));
}

#[test]
fn test_statement_before_first_case_is_malformed() {
    let interner = StringInterner::new();
    let mut registry = BindingRegistry::default();
    let mut translator = Translator::new(&interner, &NoBindings, &mut registry);

    let selector = java::Expression::This(NodeData::new(SyntaxKind::ThisExpression, 8, 12));
    let statements = [java::Statement::Break(java::BreakStatement {
        data: NodeData::new(SyntaxKind::BreakStatement, 16, 22),
        label: None,
    })];
    let switch = java::Statement::Switch(java::SwitchStatement {
        data: NodeData::new(SyntaxKind::SwitchStatement, 0, 24),
        expression: &selector,
        statements: &statements,
    });
    let error = translator
        .translate(Some(JavaNode::Statement(&switch)))
        .expect_err("statement before a case label must fail");
    assert!(matches!(error, TranslateError::MalformedInput { kind: SyntaxKind::BreakStatement, .. }));
    assert_eq!(error.range().pos, 16);
}

#[test]
fn test_missing_node_translates_to_nothing() {
    let interner = StringInterner::new();
    let mut registry = BindingRegistry::default();
    let mut translator = Translator::new(&interner, &NoBindings, &mut registry);
    assert_eq!(translator.translate(None), Ok(None));

    let this = java::Expression::This(NodeData::new(SyntaxKind::ThisExpression, 0, 4));
    assert_eq!(
        translator.translate(Some(JavaNode::Expression(&this))),
        Ok(Some(DartNode::Expression(dart::Expression::This)))
    );
}

// ============================================================================
// Binding registry
// ============================================================================

#[test]
fn test_rename_method_within_unit() {
    let mut translated = translate_source("package test; class A { void foo(int p) {} void bar() { foo(1); this.foo(2); } }");
    assert_eq!(translated.registry.occurrences("Ltest/A;.foo(I)V#p#0").len(), 1);
    assert_eq!(translated.registry.rename_all("Ltest/A;.foo(I)V", "baz"), Ok(3));
    assert_eq!(translated.render(0), "class A {void baz(int p) {} void bar() {baz(1); this.baz(2);}}");
}

#[test]
fn test_rename_type_reaches_constructors_and_creations() {
    let mut translated = translate_source("package test; class A { A(int p){} void foo(){ new A(123); } }");
    assert_eq!(translated.registry.rename_all("Ltest/A;", "B"), Ok(3));
    assert_eq!(translated.render(0), "class B {B(int p) {} void foo() {new B(123);}}");
}

#[test]
fn test_unresolved_names_are_not_registered() {
    let translated = translate_source("class A { void f() { print(1); } }");
    assert!(translated.registry.occurrences("print").is_empty());
    assert!(translated.registry.collisions().is_empty());
}

#[test]
fn test_best_effort_keys_report_collisions() {
    let files = [
        ("A.java", "class A { void f() { print(1); } }"),
        ("B.java", "class B { void g() { print(2); } }"),
    ];
    let mut translated =
        translate_batch(&files, KeyPolicy::BestEffort, false).unwrap_or_else(|error| panic!("{}", error));
    assert_eq!(translated.registry.occurrences("print").len(), 2);
    assert_eq!(
        translated.registry.collisions(),
        vec![KeyCollision { key: "print".to_string(), scopes: vec!["A.java#A.f".to_string(), "B.java#B.g".to_string()] }]
    );
    assert!(translated.registry.rename_all("print", "log").is_err());
    assert_eq!(translated.render(1), "class B {void g() {print(2);}}");
}

#[test]
fn test_best_effort_collisions_within_one_file() {
    let files = [("A.java", "class A { void f() { print(1); } } class B { void g() { print(2); } }")];
    let mut translated =
        translate_batch(&files, KeyPolicy::BestEffort, false).unwrap_or_else(|error| panic!("{}", error));
    assert_eq!(
        translated.registry.collisions(),
        vec![KeyCollision { key: "print".to_string(), scopes: vec!["A.java#A.f".to_string(), "A.java#B.g".to_string()] }]
    );
    assert!(translated.registry.rename_all("print", "log").is_err());
    assert_eq!(translated.render(0), "class A {void f() {print(1);}} class B {void g() {print(2);}}");
}

#[test]
fn test_best_effort_key_within_one_member_renames() {
    let files = [("A.java", "class A { void f() { print(1); print(2); } }")];
    let mut translated =
        translate_batch(&files, KeyPolicy::BestEffort, false).unwrap_or_else(|error| panic!("{}", error));
    assert!(translated.registry.collisions().is_empty());
    assert_eq!(translated.registry.rename_all("print", "log"), Ok(2));
    assert_eq!(translated.render(0), "class A {void f() {log(1); log(2);}}");
}

#[derive(Default)]
struct CollectIdentifiers {
    identifiers: Vec<dart::SimpleIdentifier>,
    labels: Vec<dart::SimpleIdentifier>,
}

impl dart::DartVisitor for CollectIdentifiers {
    fn visit_identifier(&mut self, identifier: &dart::SimpleIdentifier) {
        self.identifiers.push(*identifier);
    }

    fn visit_label(&mut self, label: &dart::SimpleIdentifier) {
        self.labels.push(*label);
    }
}

#[test]
fn test_registry_only_holds_identifiers_of_the_tree() {
    let translated = translate_source(
        "package test; class A { int n; A(int m) { n = m; } int twice(int x) { outer: while (x > 0) { x--; continue outer; } return twice(x) * 2; } }",
    );
    let mut collect = CollectIdentifiers::default();
    dart::DartVisitor::visit_compilation_unit(&mut collect, &translated.units[0]);

    let registered: Vec<&dart::SimpleIdentifier> =
        collect.identifiers.iter().filter(|identifier| translated.registry.key_of(identifier).is_some()).collect();
    assert_eq!(registered.len(), translated.registry.occurrence_count());
    assert_eq!(collect.labels.len(), 2);
    assert!(collect.labels.iter().all(|label| translated.registry.key_of(label).is_none()));
    assert_eq!(translated.registry.occurrences("Ltest/A;.twice(I)I").len(), 2);
}
