//! Batch-wide declaration index.
//!
//! Every file of a batch is indexed before any file is bound, so a call in
//! one file can resolve to a method declared in another. Only declarations
//! are recorded; member types are written down as they appear in source
//! ([`TypeRef`]) and resolved on demand, once the whole batch is known.

use crate::descriptor::{primitive_descriptor, type_key, ResolvedType};
use j2d_ast::*;
use j2d_core::intern::StringInterner;
use j2d_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use rustc_hash::{FxHashMap, FxHashSet};

/// Types of `java.lang` that resolve without an import.
const JAVA_LANG_TYPES: &[&str] = &[
    "ArithmeticException",
    "ArrayIndexOutOfBoundsException",
    "AssertionError",
    "Boolean",
    "Byte",
    "CharSequence",
    "Character",
    "Class",
    "ClassCastException",
    "Cloneable",
    "Comparable",
    "Deprecated",
    "Double",
    "Enum",
    "Error",
    "Exception",
    "Float",
    "FunctionalInterface",
    "IllegalArgumentException",
    "IllegalStateException",
    "IndexOutOfBoundsException",
    "Integer",
    "InterruptedException",
    "Iterable",
    "Long",
    "Math",
    "NullPointerException",
    "Number",
    "NumberFormatException",
    "Object",
    "Override",
    "Runnable",
    "RuntimeException",
    "Short",
    "StackOverflowError",
    "String",
    "StringBuffer",
    "StringBuilder",
    "SuppressWarnings",
    "System",
    "Thread",
    "Throwable",
    "UnsupportedOperationException",
    "Void",
];

/// A type as written in a declaration, before resolution. Type arguments
/// are dropped: keys use erased descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(SyntaxKind),
    Named(Vec<String>),
    Array(Box<TypeRef>, u32),
}

impl TypeRef {
    pub fn from_node(node: &TypeNode<'_>, interner: &StringInterner) -> TypeRef {
        match node {
            TypeNode::Primitive(primitive) => TypeRef::Primitive(primitive.keyword),
            TypeNode::Simple(simple) => TypeRef::Named(
                simple
                    .qualifier
                    .iter()
                    .chain(std::iter::once(&simple.name))
                    .map(|segment| interner.resolve(segment.text).to_string())
                    .collect(),
            ),
            TypeNode::Parameterized(parameterized) => TypeRef::from_node(parameterized.base, interner),
            TypeNode::Array(array) => {
                TypeRef::from_node(array.element_type, interner).with_dimensions(array.dimensions)
            }
            TypeNode::Wildcard(wildcard) => match wildcard.bound {
                Some(bound) if wildcard.is_upper_bound => TypeRef::from_node(bound, interner),
                _ => TypeRef::Named(vec!["java".into(), "lang".into(), "Object".into()]),
            },
        }
    }

    pub fn with_dimensions(self, extra: u32) -> TypeRef {
        match (self, extra) {
            (type_ref, 0) => type_ref,
            (TypeRef::Array(element, dimensions), extra) => TypeRef::Array(element, dimensions + extra),
            (type_ref, extra) => TypeRef::Array(Box::new(type_ref), extra),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImportInfo {
    pub segments: Vec<String>,
    pub on_demand: bool,
    pub is_static: bool,
}

#[derive(Debug, Clone)]
pub struct TypeVariable {
    pub name: String,
    pub owner_key: String,
}

/// Everything that decides what a simple type name means at some point of
/// a file.
#[derive(Debug, Clone, Default)]
pub struct TypeContext {
    /// Dotted package name; empty for the default package.
    pub package: String,
    pub imports: Vec<ImportInfo>,
    /// Binary names of the enclosing types, outermost first.
    pub enclosing: Vec<String>,
    /// Type variables in scope, outermost first.
    pub type_variables: Vec<TypeVariable>,
}

impl TypeContext {
    pub fn for_unit(unit: &CompilationUnit<'_>, interner: &StringInterner) -> Self {
        let package = unit
            .package
            .as_ref()
            .map(|package| join_names(package.name, interner, "."))
            .unwrap_or_default();
        let imports = unit
            .imports
            .iter()
            .map(|import| ImportInfo {
                segments: import.name.iter().map(|n| interner.resolve(n.text).to_string()).collect(),
                on_demand: import.on_demand,
                is_static: import.is_static,
            })
            .collect();
        Self { package, imports, enclosing: Vec::new(), type_variables: Vec::new() }
    }

    /// Binary name of a type declared directly in this context.
    pub fn binary_name_of(&self, simple_name: &str) -> String {
        match self.enclosing.last() {
            Some(outer) => format!("{}${}", outer, simple_name),
            None if self.package.is_empty() => simple_name.to_string(),
            None => format!("{}.{}", self.package, simple_name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldInfo {
    pub name: String,
    pub type_ref: TypeRef,
}

#[derive(Debug, Clone)]
pub struct MethodInfo {
    /// Empty for constructors.
    pub name: String,
    pub type_parameters: Vec<String>,
    pub parameters: Vec<TypeRef>,
    pub is_varargs: bool,
    /// `None` for constructors.
    pub return_type: Option<TypeRef>,
}

impl MethodInfo {
    pub fn from_declaration(method: &MethodDeclaration<'_>, interner: &StringInterner) -> Self {
        let parameters = method
            .parameters
            .iter()
            .map(|parameter| {
                let type_ref = TypeRef::from_node(parameter.type_node, interner);
                if parameter.is_varargs {
                    type_ref.with_dimensions(1)
                } else {
                    type_ref
                }
            })
            .collect();
        Self {
            name: if method.is_constructor() {
                String::new()
            } else {
                interner.resolve(method.name.text).to_string()
            },
            type_parameters: method
                .type_parameters
                .iter()
                .map(|parameter| interner.resolve(parameter.name.text).to_string())
                .collect(),
            parameters,
            is_varargs: method.parameters.last().is_some_and(|p| p.is_varargs),
            return_type: method.return_type.map(|node| TypeRef::from_node(node, interner)),
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }

    /// Whether a call with `count` arguments can reach this method.
    pub fn accepts_arity(&self, count: usize) -> bool {
        self.parameters.len() == count || (self.is_varargs && count + 1 >= self.parameters.len())
    }
}

#[derive(Debug, Clone)]
pub struct TypeInfo {
    pub binary_name: String,
    pub key: String,
    /// Resolution context inside the type body.
    pub context: TypeContext,
    pub superclass: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub fields: Vec<FieldInfo>,
    pub methods: Vec<MethodInfo>,
}

#[derive(Debug, Default)]
pub struct Environment {
    types: FxHashMap<String, TypeInfo>,
    diagnostics: DiagnosticCollection,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn type_info(&self, binary_name: &str) -> Option<&TypeInfo> {
        self.types.get(binary_name)
    }

    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    // ========================================================================
    // Indexing
    // ========================================================================

    pub fn index_unit(&mut self, unit: &CompilationUnit<'_>, interner: &StringInterner) {
        let context = TypeContext::for_unit(unit, interner);
        for declaration in unit.types {
            self.index_type(declaration, &context, &unit.file_name, interner);
        }
    }

    fn index_type(
        &mut self,
        declaration: &TypeDeclaration<'_>,
        outer: &TypeContext,
        file_name: &str,
        interner: &StringInterner,
    ) {
        let name = interner.resolve(declaration.name.text);
        let binary_name = outer.binary_name_of(name);
        if self.types.contains_key(&binary_name) {
            self.diagnostics.add(Diagnostic::with_location(
                file_name,
                declaration.name.data.range,
                &messages::DUPLICATE_CLASS_0,
                &[&binary_name],
            ));
            return;
        }

        let key = type_key(&binary_name);
        let mut context = outer.clone();
        context.enclosing.push(binary_name.clone());
        for parameter in declaration.type_parameters {
            context.type_variables.push(TypeVariable {
                name: interner.resolve(parameter.name.text).to_string(),
                owner_key: key.clone(),
            });
        }

        let mut fields = Vec::new();
        let mut methods = Vec::new();
        let mut member_types = Vec::new();
        for member in declaration.members {
            match member {
                BodyDeclaration::Field(field) => {
                    let type_ref = TypeRef::from_node(field.type_node, interner);
                    for fragment in field.fragments {
                        fields.push(FieldInfo {
                            name: interner.resolve(fragment.name.text).to_string(),
                            type_ref: type_ref.clone().with_dimensions(fragment.extra_dimensions),
                        });
                    }
                }
                BodyDeclaration::Method(method) => methods.push(MethodInfo::from_declaration(method, interner)),
                BodyDeclaration::Type(nested) => member_types.push(nested),
                BodyDeclaration::Initializer(_) => {}
            }
        }

        let (superclass, interfaces) = if declaration.is_interface {
            (None, declaration.interfaces.iter().map(|t| TypeRef::from_node(t, interner)).collect())
        } else {
            (
                declaration.superclass.map(|t| TypeRef::from_node(t, interner)),
                declaration.interfaces.iter().map(|t| TypeRef::from_node(t, interner)).collect(),
            )
        };

        self.types.insert(
            binary_name.clone(),
            TypeInfo {
                binary_name,
                key,
                context: context.clone(),
                superclass,
                interfaces,
                fields,
                methods,
            },
        );

        for nested in member_types {
            self.index_type(nested, &context, file_name, interner);
        }
    }

    // ========================================================================
    // Type resolution
    // ========================================================================

    pub fn resolve_type(&self, context: &TypeContext, type_ref: &TypeRef) -> Option<ResolvedType> {
        match type_ref {
            TypeRef::Primitive(keyword) => Some(ResolvedType::Primitive(*keyword)),
            TypeRef::Named(segments) => self.resolve_type_name(context, segments),
            TypeRef::Array(element, dimensions) => self
                .resolve_type(context, element)
                .map(|element| element.with_dimensions(*dimensions)),
        }
    }

    /// Descriptor of a declared type. Unresolvable names keep their source
    /// spelling so that signatures stay comparable.
    pub fn descriptor_of(&self, context: &TypeContext, type_ref: &TypeRef) -> String {
        if let Some(resolved) = self.resolve_type(context, type_ref) {
            return resolved.descriptor();
        }
        match type_ref {
            TypeRef::Named(segments) => type_key(&segments.join(".")),
            TypeRef::Array(element, dimensions) => {
                format!("{}{}", "[".repeat(*dimensions as usize), self.descriptor_of(context, element))
            }
            TypeRef::Primitive(keyword) => primitive_descriptor(*keyword).to_string(),
        }
    }

    pub fn resolve_type_name(&self, context: &TypeContext, segments: &[String]) -> Option<ResolvedType> {
        let (first, rest) = segments.split_first()?;
        if rest.is_empty() {
            return self.resolve_simple_type_name(context, first);
        }

        let dotted = segments.join(".");
        if self.types.contains_key(&dotted) {
            return Some(ResolvedType::Class(dotted));
        }
        if let Some(ResolvedType::Class(outer)) = self.resolve_simple_type_name(context, first) {
            let nested = rest.iter().fold(outer, |binary, segment| format!("{}${}", binary, segment));
            return Some(ResolvedType::Class(nested));
        }
        // A package-qualified library type.
        if first.starts_with(|c: char| c.is_ascii_lowercase()) {
            return Some(ResolvedType::Class(dotted));
        }
        None
    }

    fn resolve_simple_type_name(&self, context: &TypeContext, name: &str) -> Option<ResolvedType> {
        if let Some(variable) = context.type_variables.iter().rev().find(|v| v.name == name) {
            return Some(ResolvedType::Variable {
                name: variable.name.clone(),
                owner_key: variable.owner_key.clone(),
            });
        }

        for enclosing in context.enclosing.iter().rev() {
            if simple_name(enclosing) == name {
                return Some(ResolvedType::Class(enclosing.clone()));
            }
            let member = format!("{}${}", enclosing, name);
            if self.types.contains_key(&member) {
                return Some(ResolvedType::Class(member));
            }
        }

        let same_package = if context.package.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", context.package, name)
        };
        if self.types.contains_key(&same_package) {
            return Some(ResolvedType::Class(same_package));
        }

        let single = context
            .imports
            .iter()
            .filter(|import| !import.on_demand && !import.is_static)
            .find(|import| import.segments.last().is_some_and(|last| last == name));
        if let Some(import) = single {
            return Some(ResolvedType::Class(self.imported_binary_name(&import.segments)));
        }

        for import in context.imports.iter().filter(|import| import.on_demand && !import.is_static) {
            let candidate = format!("{}.{}", import.segments.join("."), name);
            if self.types.contains_key(&candidate) {
                return Some(ResolvedType::Class(candidate));
            }
        }

        if JAVA_LANG_TYPES.contains(&name) {
            return Some(ResolvedType::Class(format!("java.lang.{}", name)));
        }
        None
    }

    /// `import a.B.C;` may name a member type; prefer an indexed spelling.
    fn imported_binary_name(&self, segments: &[String]) -> String {
        let dotted = segments.join(".");
        if self.types.contains_key(&dotted) {
            return dotted;
        }
        for split in (1..segments.len()).rev() {
            let candidate = format!("{}${}", segments[..split].join("."), segments[split..].join("$"));
            if self.types.contains_key(&candidate) {
                return candidate;
            }
        }
        dotted
    }

    // ========================================================================
    // Keys
    // ========================================================================

    /// Context for a method's signature and body.
    pub fn method_context(&self, owner: &TypeContext, owner_key: &str, method: &MethodInfo) -> TypeContext {
        let mut context = owner.clone();
        if method.type_parameters.is_empty() {
            return context;
        }
        // Descriptors only spell the variable name, so the owner key can be
        // filled in after the signature is known.
        let mut signature_context = owner.clone();
        for name in &method.type_parameters {
            signature_context
                .type_variables
                .push(TypeVariable { name: name.clone(), owner_key: String::new() });
        }
        let method_key = self.method_key_in(&signature_context, owner_key, method);
        for name in &method.type_parameters {
            context
                .type_variables
                .push(TypeVariable { name: name.clone(), owner_key: method_key.clone() });
        }
        context
    }

    pub fn parameter_descriptors(&self, context: &TypeContext, method: &MethodInfo) -> Vec<String> {
        method.parameters.iter().map(|p| self.descriptor_of(context, p)).collect()
    }

    /// `Lpkg/T;.name(params)ret`; constructors have an empty name and `V`.
    pub fn method_key(&self, owner: &TypeContext, owner_key: &str, method: &MethodInfo) -> String {
        let context = self.method_context(owner, owner_key, method);
        self.method_key_in(&context, owner_key, method)
    }

    fn method_key_in(&self, context: &TypeContext, owner_key: &str, method: &MethodInfo) -> String {
        let parameters: String = self.parameter_descriptors(context, method).concat();
        let return_descriptor = match &method.return_type {
            Some(return_type) => self.descriptor_of(context, return_type),
            None => "V".to_string(),
        };
        format!("{}.{}({}){}", owner_key, method.name, parameters, return_descriptor)
    }

    /// `Lpkg/T;.name)descriptor`
    pub fn field_key(&self, owner: &TypeInfo, field: &FieldInfo) -> String {
        format!("{}.{}){}", owner.key, field.name, self.descriptor_of(&owner.context, &field.type_ref))
    }

    // ========================================================================
    // Member lookup
    // ========================================================================

    /// The type followed by its indexed supertypes, nearest first.
    pub fn supertypes(&self, binary_name: &str) -> Vec<&TypeInfo> {
        let mut result = Vec::new();
        let mut visited = FxHashSet::default();
        let mut pending = vec![binary_name.to_string()];
        while let Some(next) = pending.pop() {
            if !visited.insert(next.clone()) {
                continue;
            }
            let Some(info) = self.types.get(&next) else { continue };
            result.push(info);
            let supers = info.superclass.iter().chain(info.interfaces.iter());
            let resolved: Vec<String> = supers
                .filter_map(|s| self.resolve_type(&info.context, s))
                .filter_map(|s| s.class_name().map(str::to_string))
                .collect();
            pending.extend(resolved.into_iter().rev());
        }
        result
    }

    pub fn find_field(&self, binary_name: &str, name: &str) -> Option<(&TypeInfo, &FieldInfo)> {
        self.supertypes(binary_name)
            .into_iter()
            .find_map(|info| info.fields.iter().find(|f| f.name == name).map(|f| (info, f)))
    }

    /// Methods named `name` visible in a type. An override hides the
    /// supertype method with the same parameter descriptors.
    pub fn find_methods(&self, binary_name: &str, name: &str) -> Vec<(&TypeInfo, &MethodInfo)> {
        let mut seen = FxHashSet::default();
        let mut result = Vec::new();
        for info in self.supertypes(binary_name) {
            for method in info.methods.iter().filter(|m| !m.is_constructor() && m.name == name) {
                let context = self.method_context(&info.context, &info.key, method);
                if seen.insert(self.parameter_descriptors(&context, method)) {
                    result.push((info, method));
                }
            }
        }
        result
    }
}

fn join_names(names: &[Identifier], interner: &StringInterner, separator: &str) -> String {
    names.iter().map(|n| interner.resolve(n.text)).collect::<Vec<_>>().join(separator)
}

fn simple_name(binary_name: &str) -> &str {
    binary_name.rsplit(['.', '$']).next().unwrap_or(binary_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(package: &str) -> TypeContext {
        TypeContext { package: package.to_string(), ..TypeContext::default() }
    }

    #[test]
    fn simple_names() {
        assert_eq!(simple_name("a.b.C"), "C");
        assert_eq!(simple_name("a.B$C"), "C");
        assert_eq!(simple_name("C"), "C");
    }

    #[test]
    fn binary_names() {
        let mut ctx = context("test");
        assert_eq!(ctx.binary_name_of("Main"), "test.Main");
        ctx.enclosing.push("test.Main".into());
        assert_eq!(ctx.binary_name_of("Inner"), "test.Main$Inner");
        assert_eq!(context("").binary_name_of("A"), "A");
    }

    #[test]
    fn java_lang_and_unknown_names() {
        let env = Environment::new();
        let ctx = context("test");
        assert_eq!(
            env.resolve_type_name(&ctx, &["String".to_string()]),
            Some(ResolvedType::Class("java.lang.String".into()))
        );
        assert_eq!(env.resolve_type_name(&ctx, &["Unknown".to_string()]), None);
        assert_eq!(env.descriptor_of(&ctx, &TypeRef::Named(vec!["Unknown".into()])), "LUnknown;");
    }

    #[test]
    fn single_type_import() {
        let env = Environment::new();
        let mut ctx = context("test");
        ctx.imports.push(ImportInfo {
            segments: vec!["java".into(), "util".into(), "List".into()],
            on_demand: false,
            is_static: false,
        });
        let list = TypeRef::Named(vec!["List".into()]).with_dimensions(1);
        assert_eq!(env.descriptor_of(&ctx, &list), "[Ljava/util/List;");
    }

    #[test]
    fn arity() {
        let method = MethodInfo {
            name: "f".into(),
            type_parameters: Vec::new(),
            parameters: vec![TypeRef::Primitive(SyntaxKind::IntKeyword), TypeRef::Primitive(SyntaxKind::IntKeyword).with_dimensions(1)],
            is_varargs: true,
            return_type: Some(TypeRef::Primitive(SyntaxKind::VoidKeyword)),
        };
        assert!(method.accepts_arity(1));
        assert!(method.accepts_arity(2));
        assert!(method.accepts_arity(5));
        assert!(!method.accepts_arity(0));
    }
}
