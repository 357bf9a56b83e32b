//! Printer integration tests.
//!
//! Builds Dart trees by hand and checks the canonical rendering.

use j2d_dart_ast::*;
use j2d_nodebuilder::NodeBuilder;
use j2d_printer::{print_unit, Printer, PrinterOptions};

struct Fixture {
    table: IdentifierTable,
    builder: NodeBuilder,
}

impl Fixture {
    fn new() -> Self {
        Self { table: IdentifierTable::new(), builder: NodeBuilder::new() }
    }

    fn ident(&mut self, name: &str) -> SimpleIdentifier {
        SimpleIdentifier { id: self.table.create(name) }
    }

    fn name(&mut self, name: &str) -> Expression {
        Expression::Identifier(self.ident(name))
    }

    fn type_name(&mut self, name: &str) -> TypeName {
        let ident = self.ident(name);
        self.builder.type_name(ident)
    }

    fn int(&self, lexeme: &str) -> Expression {
        self.builder.integer_literal(lexeme)
    }

    fn variable(&mut self, name: &str, initializer: Option<Expression>) -> VariableDeclaration {
        VariableDeclaration { name: self.ident(name), initializer }
    }

    fn statement(&self, statement: &Statement) -> String {
        Printer::new(&self.table).print_statement_to_string(statement)
    }
}

fn empty_block() -> Statement {
    Statement::Block(Block::default())
}

#[test]
fn test_empty_unit_prints_nothing() {
    let table = IdentifierTable::new();
    assert_eq!(print_unit(&table, &CompilationUnit::default()), "");
    let mut printer = Printer::with_options(&table, PrinterOptions { trailing_newline: true });
    assert_eq!(printer.print_unit(&CompilationUnit::default()), "");
}

#[test]
fn test_class_with_type_parameters_and_constructor() {
    let mut f = Fixture::new();
    let k = f.ident("K");
    let v = f.ident("V");
    let string = f.type_name("String");
    let class_name = f.ident("A");
    let constructor_name = f.ident("A");
    let k_type = f.type_name("K");
    let k_param = f.ident("k");
    let v_type = f.type_name("V");
    let v_param = f.ident("v");
    let constructor = f.builder.method_declaration(
        None,
        constructor_name,
        vec![
            SimpleFormalParameter { type_name: k_type, identifier: k_param },
            SimpleFormalParameter { type_name: v_type, identifier: v_param },
        ],
        Some(Block::default()),
    );
    let class = f.builder.class_declaration(
        class_name,
        vec![TypeParameter { name: k, bound: None }, TypeParameter { name: v, bound: Some(string) }],
        vec![constructor],
    );
    let unit = CompilationUnit { declarations: vec![class] };
    assert_eq!(print_unit(&f.table, &unit), "class A<K, V extends String> {A(K k, V v) {}}");

    let mut printer = Printer::with_options(&f.table, PrinterOptions { trailing_newline: true });
    assert_eq!(printer.print_unit(&unit), "class A<K, V extends String> {A(K k, V v) {}}\n");
}

#[test]
fn test_fields_and_abstract_methods() {
    let mut f = Fixture::new();
    let int_type = f.type_name("int");
    let one = f.int("1");
    let x = f.variable("x", Some(one));
    let y = f.variable("y", None);
    let field = f.builder.field_declaration(f.builder.variable_list(int_type, vec![x, y]));
    let void_type = f.type_name("void");
    let run = f.ident("run");
    let method = f.builder.method_declaration(Some(void_type), run, Vec::new(), None);
    let class_name = f.ident("I");
    let class = f.builder.class_declaration(class_name, Vec::new(), vec![field, method]);
    let unit = CompilationUnit { declarations: vec![class] };
    assert_eq!(print_unit(&f.table, &unit), "class I {int x = 1, y; void run();}");
}

#[test]
fn test_for_statements() {
    let mut f = Fixture::new();
    let int_type = f.type_name("int");
    let zero = f.int("0");
    let i = f.variable("i", Some(zero));
    let variables = f.builder.variable_list(int_type, vec![i]);
    let i_use = f.name("i");
    let condition = f.builder.binary(i_use, TokenType::Lt, f.int("10"));
    let i_update = f.name("i");
    let updater = f.builder.postfix(i_update, TokenType::PlusPlus);
    let classic = f.builder.for_statement(Some(variables), None, Some(condition), vec![updater], empty_block());
    assert_eq!(f.statement(&classic), "for (int i = 0; i < 10; i++) {}");

    let forever = f.builder.for_statement(None, None, None, Vec::new(), empty_block());
    assert_eq!(f.statement(&forever), "for (;;) {}");

    let int_type = f.type_name("int");
    let x = f.ident("x");
    let xs = f.name("xs");
    let for_each = f.builder.for_each_statement(
        SimpleFormalParameter { type_name: int_type, identifier: x },
        xs,
        empty_block(),
    );
    assert_eq!(f.statement(&for_each), "for (int x in xs) {}");
}

#[test]
fn test_switch_statement() {
    let mut f = Fixture::new();
    let mut case = f.builder.switch_member(Some(f.int("1")));
    case.statements_mut().push(Statement::Break(BreakStatement { label: None }));
    let mut default = f.builder.switch_member(None);
    default.statements_mut().push(Statement::Return(ReturnStatement { expression: None }));
    let empty_case = f.builder.switch_member(Some(f.int("2")));
    let x = f.name("x");
    let switch = Statement::Switch(SwitchStatement { expression: x, members: vec![empty_case, case, default] });
    assert_eq!(f.statement(&switch), "switch (x) {case 2: case 1: break; default: return;}");
}

#[test]
fn test_try_labels_and_loops() {
    let mut f = Fixture::new();
    let exception_type = f.type_name("E");
    let e = f.ident("e");
    let try_statement = Statement::Try(TryStatement {
        body: Block::default(),
        catch_clauses: vec![CatchClause { exception_type, exception_parameter: e, body: Block::default() }],
        finally_block: Some(Block::default()),
    });
    assert_eq!(f.statement(&try_statement), "try {} on E catch (e) {} finally {}");

    let l1 = f.ident("l1");
    let l2 = f.ident("l2");
    let loop_statement = f.builder.while_statement(Expression::BooleanLiteral(true), empty_block());
    let labeled = f.builder.labeled_statement(vec![l1, l2], loop_statement);
    assert_eq!(f.statement(&labeled), "l1: l2: while (true) {}");

    let l1_again = f.ident("l1");
    let jump = Statement::Continue(ContinueStatement { label: Some(l1_again) });
    assert_eq!(f.statement(&jump), "continue l1;");

    let c = f.name("c");
    assert_eq!(f.statement(&f.builder.do_statement(empty_block(), c)), "do {} while (c);");
}

#[test]
fn test_simple_statements() {
    let mut f = Fixture::new();
    let x = f.name("x");
    assert_eq!(f.statement(&Statement::Assert(AssertStatement { condition: x })), "assert (x);");
    let e = f.name("e");
    assert_eq!(f.statement(&Statement::Throw(ThrowStatement { expression: e })), "throw e;");
    assert_eq!(f.statement(&Statement::Empty), ";");

    let a = f.name("a");
    let then_statement = Statement::Return(ReturnStatement { expression: Some(f.int("1")) });
    let if_statement = f.builder.if_statement(a, then_statement, Some(empty_block()));
    assert_eq!(f.statement(&if_statement), "if (a) return 1; else {}");

    let int_type = f.type_name("int");
    let one = f.int("1");
    let x = f.variable("x", Some(one));
    let y = f.variable("y", None);
    let declaration = f.builder.variable_statement(f.builder.variable_list(int_type, vec![x, y]));
    assert_eq!(f.statement(&declaration), "int x = 1, y;");
}

#[test]
fn test_expressions() {
    let mut f = Fixture::new();
    let print = f.ident("print");
    let call = f.builder.method_invocation(None, print, vec![f.builder.double_literal("1.0"), f.int("0xBEEF")]);
    let mut printer = Printer::new(&f.table);
    assert_eq!(printer.print_expression_to_string(&call), "print(1.0, 0xBEEF)");

    let foo = f.ident("foo");
    let this_call = f.builder.method_invocation(Some(Expression::This), foo, vec![f.int("0")]);
    let a_type = f.type_name("A");
    let creation = f.builder.instance_creation(a_type, vec![f.int("123")]);
    let v = f.name("v");
    let negated = f.builder.prefix(TokenType::Minus, v);
    let w = f.name("w");
    let assignment = f.builder.binary(w, TokenType::GtGtEq, negated);

    let mut printer = Printer::new(&f.table);
    assert_eq!(printer.print_expression_to_string(&this_call), "this.foo(0)");
    assert_eq!(printer.print_expression_to_string(&creation), "new A(123)");
    assert_eq!(printer.print_expression_to_string(&assignment), "w >>= -v");
}

#[test]
fn test_rename_shows_in_output() {
    let mut f = Fixture::new();
    let list = f.ident("List");
    let string = f.type_name("String");
    let type_name = f.builder.parameterized_type_name(list, vec![string]);
    let foo = f.ident("foo");
    let method = f.builder.method_declaration(Some(type_name), foo, Vec::new(), Some(Block::default()));
    let class_name = f.ident("A");
    let unit = CompilationUnit { declarations: vec![f.builder.class_declaration(class_name, Vec::new(), vec![method])] };
    assert_eq!(print_unit(&f.table, &unit), "class A {List<String> foo() {}}");

    f.table.set_name(foo.id, "foo2");
    assert_eq!(print_unit(&f.table, &unit), "class A {List<String> foo2() {}}");
}

#[test]
fn test_stacked_prefix_operators_stay_apart() {
    let mut f = Fixture::new();
    let x = f.name("x");
    let inner = f.builder.prefix(TokenType::Minus, x);
    let negated_twice = f.builder.prefix(TokenType::Minus, inner);
    let y = f.name("y");
    let decremented = f.builder.prefix(TokenType::MinusMinus, y);
    let negated_decrement = f.builder.prefix(TokenType::Minus, decremented);
    let z = f.name("z");
    let incremented = f.builder.prefix(TokenType::PlusPlus, z);
    let negated_increment = f.builder.prefix(TokenType::Minus, incremented);
    let b = f.name("b");
    let not_b = f.builder.prefix(TokenType::Bang, b);
    let not_not_b = f.builder.prefix(TokenType::Bang, not_b);

    let mut printer = Printer::new(&f.table);
    assert_eq!(printer.print_expression_to_string(&negated_twice), "- -x");
    assert_eq!(printer.print_expression_to_string(&negated_decrement), "- --y");
    assert_eq!(printer.print_expression_to_string(&negated_increment), "-++z");
    assert_eq!(printer.print_expression_to_string(&not_not_b), "!!b");
}

#[test]
fn test_binary_operands_follow_dart_precedence() {
    let mut f = Fixture::new();
    let (a, b, c, d) = (f.name("a"), f.name("b"), f.name("c"), f.name("d"));
    let left = f.builder.binary(a, TokenType::Lt, b);
    let right = f.builder.binary(c, TokenType::Lt, d);
    let mixed = f.builder.binary(left, TokenType::Amp, right);

    let (a, b, c) = (f.name("a"), f.name("b"), f.name("c"));
    let equal = f.builder.binary(a, TokenType::EqEq, b);
    let chained = f.builder.binary(equal, TokenType::EqEq, c);

    let (a, b, c, d) = (f.name("a"), f.name("b"), f.name("c"), f.name("d"));
    let product = f.builder.binary(b, TokenType::Star, c);
    let sum = f.builder.binary(a, TokenType::Plus, product);
    let difference = f.builder.binary(sum, TokenType::Minus, d);

    let (a, b, c) = (f.name("a"), f.name("b"), f.name("c"));
    let inner = f.builder.binary(b, TokenType::Minus, c);
    let right_nested = f.builder.binary(a, TokenType::Minus, inner);

    let (x, y, one, b) = (f.name("x"), f.name("y"), f.int("1"), f.name("b"));
    let assign_y = f.builder.binary(y, TokenType::Eq, one);
    let assign_x = f.builder.binary(x, TokenType::Eq, assign_y);
    let sum = f.builder.binary(f.int("1"), TokenType::Plus, f.int("2"));
    let negated_sum = f.builder.prefix(TokenType::Minus, sum);
    let flags = f.builder.binary(b, TokenType::BarEq, f.builder.binary(f.int("1"), TokenType::Lt, f.int("2")));

    let mut printer = Printer::new(&f.table);
    assert_eq!(printer.print_expression_to_string(&mixed), "(a < b) & (c < d)");
    assert_eq!(printer.print_expression_to_string(&chained), "(a == b) == c");
    assert_eq!(printer.print_expression_to_string(&difference), "a + b * c - d");
    assert_eq!(printer.print_expression_to_string(&right_nested), "a - (b - c)");
    assert_eq!(printer.print_expression_to_string(&assign_x), "x = y = 1");
    assert_eq!(printer.print_expression_to_string(&negated_sum), "-(1 + 2)");
    assert_eq!(printer.print_expression_to_string(&flags), "b |= 1 < 2");
}
