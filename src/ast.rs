use std::fmt;

/// Generic bottom-up rewriting of syntax trees.
///
/// [`modify::modify`] visits every child position of a [`modify::Node`]
/// before handing the node itself to a caller-supplied transformation. Macro
/// expansion and `unquote` substitution are both built on it.
pub mod modify;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: integers, floats, booleans and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A boolean literal value: `true` or `false`.
    Boolean(bool),
    /// A string literal with escapes already decoded.
    String(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Keep a fractional part so the text lexes back as a float.
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => {
                f.write_str("\"")?;
                for ch in s.chars() {
                    match ch {
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        '\r' => f.write_str("\\r")?,
                        other => write!(f, "{other}")?,
                    }
                }
                f.write_str("\"")
            },
        }
    }
}

/// A prefix operator: `!` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Not => "!",
                        Self::Negate => "-",
                    })
    }
}

/// A binary infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Subtract => "-",
                        Self::Multiply => "*",
                        Self::Divide => "/",
                        Self::Less => "<",
                        Self::Greater => ">",
                        Self::LessEqual => "<=",
                        Self::GreaterEqual => ">=",
                        Self::Equal => "==",
                        Self::NotEqual => "!=",
                    })
    }
}

/// A bare name, as used for bindings, parameters and variable references.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub line: usize,
}

impl Identifier {
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self { name: name.into(),
               line }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The root of a parsed source unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

/// A braced sequence of statements, as found in `if`, `while`, function and
/// macro bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
    pub line:       usize,
}

impl BlockStatement {
    /// Returns `true` if a `let` appears directly inside this block.
    ///
    /// Only such blocks need their own scope when evaluated.
    #[must_use]
    pub fn introduces_bindings(&self) -> bool {
        self.statements
            .iter()
            .any(|statement| matches!(statement, Statement::Let { .. }))
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name = value`
    Let {
        name:  Identifier,
        value: Expression,
        line:  usize,
    },
    /// `return value` or a bare `return`.
    Return {
        value: Option<Expression>,
        line:  usize,
    },
    /// An expression evaluated for its value.
    Expression {
        expr: Expression,
        line: usize,
    },
}

impl Statement {
    /// Returns the line number on which the statement begins.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Let { line, .. } | Self::Return { line, .. } | Self::Expression { line, .. } => {
                *line
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value}"),
            Self::Return { value: Some(value),
                           .. } => write!(f, "return {value}"),
            Self::Return { value: None, .. } => f.write_str("return"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every variant records the line it started on so that runtime errors can
/// point back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A variable reference.
    Identifier(Identifier),
    /// An integer, float, boolean or string literal.
    Literal {
        value: LiteralValue,
        line:  usize,
    },
    /// `!right` or `-right`
    Prefix {
        op:    PrefixOperator,
        right: Box<Self>,
        line:  usize,
    },
    /// `left op right`
    Infix {
        left:  Box<Self>,
        op:    InfixOperator,
        right: Box<Self>,
        line:  usize,
    },
    /// `name = value`, updating an existing binding.
    Assign {
        name:  Identifier,
        value: Box<Self>,
        line:  usize,
    },
    /// `if (condition) { ... } else { ... }`
    If {
        condition:   Box<Self>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
        line:        usize,
    },
    /// `while (condition) { ... }`
    While {
        condition: Box<Self>,
        body:      BlockStatement,
        line:      usize,
    },
    /// `fn(parameters) { body }`, named when bound directly by `let`.
    Function {
        parameters: Vec<Identifier>,
        body:       BlockStatement,
        name:       Option<String>,
        line:       usize,
    },
    /// `function(arguments)`
    Call {
        function:  Box<Self>,
        arguments: Vec<Self>,
        line:      usize,
    },
    /// `[elements]`
    Array {
        elements: Vec<Self>,
        line:     usize,
    },
    /// `left[index]`
    Index {
        left:  Box<Self>,
        index: Box<Self>,
        line:  usize,
    },
    /// `{key: value, ...}` in source order.
    Hash {
        pairs: Vec<(Self, Self)>,
        line:  usize,
    },
    /// `macro(parameters) { body }`
    Macro {
        parameters: Vec<Identifier>,
        body:       BlockStatement,
        line:       usize,
    },
}

impl Expression {
    /// Returns the line number associated with this expression.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier(Identifier { line, .. })
            | Self::Literal { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::Assign { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Function { line, .. }
            | Self::Call { line, .. }
            | Self::Array { line, .. }
            | Self::Index { line, .. }
            | Self::Hash { line, .. }
            | Self::Macro { line, .. } => *line,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Prefix { op, right, .. } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Assign { name, value, .. } => write!(f, "({name} = {value})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if ({condition}) {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::While { condition, body, .. } => write!(f, "while ({condition}) {{ {body} }}"),
            Self::Function { parameters, body, .. } => {
                write!(f, "fn(")?;
                write_separated(f, parameters)?;
                write!(f, ") {{ {body} }}")
            },
            Self::Call { function, arguments, .. } => {
                write!(f, "{function}(")?;
                write_separated(f, arguments)?;
                f.write_str(")")
            },
            Self::Array { elements, .. } => {
                f.write_str("[")?;
                write_separated(f, elements)?;
                f.write_str("]")
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Self::Hash { pairs, .. } => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
            Self::Macro { parameters, body, .. } => {
                write!(f, "macro(")?;
                write_separated(f, parameters)?;
                write!(f, ") {{ {body} }}")
            },
        }
    }
}

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            f.write_str("; ")?;
        }
        write!(f, "{statement}")?;
    }
    Ok(())
}
