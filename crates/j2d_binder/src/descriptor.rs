//! Type descriptors and key spelling.

use j2d_ast::SyntaxKind;

/// A type after name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    /// A class or interface by binary name (`pkg.Outer$Inner`).
    Class(String),
    /// A type variable and the key of the declaration that introduces it.
    Variable { name: String, owner_key: String },
    Primitive(SyntaxKind),
    Array(Box<ResolvedType>, u32),
}

impl ResolvedType {
    /// Erased signature descriptor: `I`, `[J`, `Ljava/lang/String;`, `TT;`.
    pub fn descriptor(&self) -> String {
        match self {
            ResolvedType::Class(binary_name) => type_key(binary_name),
            ResolvedType::Variable { name, .. } => format!("T{};", name),
            ResolvedType::Primitive(keyword) => primitive_descriptor(*keyword).to_string(),
            ResolvedType::Array(element, dimensions) => {
                format!("{}{}", "[".repeat(*dimensions as usize), element.descriptor())
            }
        }
    }

    /// Binding key of the type itself, when it has one.
    pub fn key(&self) -> Option<String> {
        match self {
            ResolvedType::Class(binary_name) => Some(type_key(binary_name)),
            ResolvedType::Variable { name, owner_key } => Some(format!("{}:T{};", owner_key, name)),
            ResolvedType::Primitive(_) | ResolvedType::Array(..) => None,
        }
    }

    pub fn class_name(&self) -> Option<&str> {
        match self {
            ResolvedType::Class(binary_name) => Some(binary_name),
            _ => None,
        }
    }

    pub fn with_dimensions(self, extra: u32) -> ResolvedType {
        match (self, extra) {
            (resolved, 0) => resolved,
            (ResolvedType::Array(element, dimensions), extra) => ResolvedType::Array(element, dimensions + extra),
            (resolved, extra) => ResolvedType::Array(Box::new(resolved), extra),
        }
    }

    /// The element type after indexing once.
    pub fn component(&self) -> Option<ResolvedType> {
        match self {
            ResolvedType::Array(element, 1) => Some((**element).clone()),
            ResolvedType::Array(element, dimensions) => Some(ResolvedType::Array(element.clone(), dimensions - 1)),
            _ => None,
        }
    }
}

/// `pkg.Outer$Inner` -> `Lpkg/Outer$Inner;`
pub fn type_key(binary_name: &str) -> String {
    format!("L{};", binary_name.replace('.', "/"))
}

pub fn primitive_descriptor(keyword: SyntaxKind) -> &'static str {
    match keyword {
        SyntaxKind::BooleanKeyword => "Z",
        SyntaxKind::ByteKeyword => "B",
        SyntaxKind::CharKeyword => "C",
        SyntaxKind::ShortKeyword => "S",
        SyntaxKind::IntKeyword => "I",
        SyntaxKind::LongKeyword => "J",
        SyntaxKind::FloatKeyword => "F",
        SyntaxKind::DoubleKeyword => "D",
        _ => "V",
    }
}

/// The primitive type of a numeric literal token, by its Java typing rules.
pub fn number_literal_kind(token: &str) -> SyntaxKind {
    let lower = token.to_ascii_lowercase();
    let radix_prefixed = lower.starts_with("0x") || lower.starts_with("0b");
    if lower.ends_with('l') {
        return SyntaxKind::LongKeyword;
    }
    if radix_prefixed {
        return SyntaxKind::IntKeyword;
    }
    if lower.ends_with('f') {
        return SyntaxKind::FloatKeyword;
    }
    if lower.ends_with('d') || lower.contains('.') || lower.contains('e') {
        return SyntaxKind::DoubleKeyword;
    }
    SyntaxKind::IntKeyword
}
