use crate::{
    ast::{BlockStatement, Expression, Identifier, Program, Statement},
    error::RewriteError,
};

/// Any syntax tree position a transformation can be applied to.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Program),
    Statement(Statement),
    Block(BlockStatement),
    Expression(Expression),
}

impl Node {
    /// Returns the category name used in rewrite diagnostics.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Program(_) => "program",
            Self::Statement(_) => "statement",
            Self::Block(_) => "block",
            Self::Expression(Expression::Identifier(_)) => "identifier",
            Self::Expression(_) => "expression",
        }
    }

    /// Returns the line the node starts on, or 1 for an empty program.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Program(program) => program.statements.first().map_or(1, Statement::line_number),
            Self::Statement(statement) => statement.line_number(),
            Self::Block(block) => block.line,
            Self::Expression(expr) => expr.line_number(),
        }
    }
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Self::Program(program)
    }
}

impl From<Statement> for Node {
    fn from(statement: Statement) -> Self {
        Self::Statement(statement)
    }
}

impl From<BlockStatement> for Node {
    fn from(block: BlockStatement) -> Self {
        Self::Block(block)
    }
}

impl From<Expression> for Node {
    fn from(expr: Expression) -> Self {
        Self::Expression(expr)
    }
}

/// Rewrites a tree bottom-up.
///
/// Every child of `node` is rewritten first, recursively, and the rebuilt
/// node is then passed to `modifier`. A child replaced by a node of the wrong
/// category (for example a statement where an expression belongs) aborts the
/// whole rewrite with [`RewriteError::WrongCategory`]. Errors raised by
/// `modifier` itself are propagated unchanged.
///
/// # Parameters
/// - `node`: The root of the tree to rewrite.
/// - `modifier`: The transformation applied to every node.
///
/// # Returns
/// The rewritten root.
///
/// # Example
/// ```
/// use marmoset::{
///     ast::{
///         Expression, LiteralValue,
///         modify::{Node, modify},
///     },
///     error::RewriteError,
///     parse, tokenize,
/// };
///
/// let (program, errors) = parse(tokenize("1 + 2"));
/// assert!(errors.is_empty());
///
/// let mut one_to_two = |node: Node| -> Result<Node, RewriteError> {
///     match node {
///         Node::Expression(Expression::Literal { value: LiteralValue::Integer(1),
///                                                line, }) => {
///             Ok(Node::Expression(Expression::Literal { value: LiteralValue::Integer(2),
///                                                       line }))
///         },
///         other => Ok(other),
///     }
/// };
///
/// let rewritten = modify(Node::Program(program), &mut one_to_two).unwrap();
/// assert_eq!(rewritten, Node::Program(parse(tokenize("2 + 2")).0));
/// ```
pub fn modify<E, F>(node: Node, modifier: &mut F) -> Result<Node, E>
    where F: FnMut(Node) -> Result<Node, E>,
          E: From<RewriteError>
{
    let rebuilt = match node {
        Node::Program(program) => {
            Node::Program(Program { statements: modify_statements(program.statements, modifier)?, })
        },
        Node::Statement(statement) => Node::Statement(modify_statement_children(statement, modifier)?),
        Node::Block(block) => Node::Block(modify_block_children(block, modifier)?),
        Node::Expression(expr) => Node::Expression(modify_expression_children(expr, modifier)?),
    };

    modifier(rebuilt)
}

fn wrong_category<E>(expected: &'static str, found: &Node) -> E
    where E: From<RewriteError>
{
    RewriteError::WrongCategory { expected,
                                  found: found.category(),
                                  line: found.line_number() }.into()
}

fn rewrite_expression<E, F>(expr: Expression, modifier: &mut F) -> Result<Expression, E>
    where F: FnMut(Node) -> Result<Node, E>,
          E: From<RewriteError>
{
    match modify(Node::Expression(expr), modifier)? {
        Node::Expression(expr) => Ok(expr),
        other => Err(wrong_category("expression", &other)),
    }
}

fn rewrite_boxed<E, F>(expr: Box<Expression>, modifier: &mut F) -> Result<Box<Expression>, E>
    where F: FnMut(Node) -> Result<Node, E>,
          E: From<RewriteError>
{
    rewrite_expression(*expr, modifier).map(Box::new)
}

fn rewrite_identifier<E, F>(ident: Identifier, modifier: &mut F) -> Result<Identifier, E>
    where F: FnMut(Node) -> Result<Node, E>,
          E: From<RewriteError>
{
    match modify(Node::Expression(Expression::Identifier(ident)), modifier)? {
        Node::Expression(Expression::Identifier(ident)) => Ok(ident),
        other => Err(wrong_category("identifier", &other)),
    }
}

fn rewrite_block<E, F>(block: BlockStatement, modifier: &mut F) -> Result<BlockStatement, E>
    where F: FnMut(Node) -> Result<Node, E>,
          E: From<RewriteError>
{
    match modify(Node::Block(block), modifier)? {
        Node::Block(block) => Ok(block),
        other => Err(wrong_category("block", &other)),
    }
}

fn modify_statements<E, F>(statements: Vec<Statement>, modifier: &mut F) -> Result<Vec<Statement>, E>
    where F: FnMut(Node) -> Result<Node, E>,
          E: From<RewriteError>
{
    statements.into_iter()
              .map(|statement| match modify(Node::Statement(statement), modifier)? {
                  Node::Statement(statement) => Ok(statement),
                  other => Err(wrong_category("statement", &other)),
              })
              .collect()
}

fn modify_expressions<E, F>(exprs: Vec<Expression>, modifier: &mut F) -> Result<Vec<Expression>, E>
    where F: FnMut(Node) -> Result<Node, E>,
          E: From<RewriteError>
{
    exprs.into_iter()
         .map(|expr| rewrite_expression(expr, modifier))
         .collect()
}

fn modify_parameters<E, F>(parameters: Vec<Identifier>, modifier: &mut F) -> Result<Vec<Identifier>, E>
    where F: FnMut(Node) -> Result<Node, E>,
          E: From<RewriteError>
{
    parameters.into_iter()
              .map(|param| rewrite_identifier(param, modifier))
              .collect()
}

fn modify_block_children<E, F>(block: BlockStatement, modifier: &mut F) -> Result<BlockStatement, E>
    where F: FnMut(Node) -> Result<Node, E>,
          E: From<RewriteError>
{
    Ok(BlockStatement { statements: modify_statements(block.statements, modifier)?,
                        line:       block.line, })
}

fn modify_statement_children<E, F>(statement: Statement, modifier: &mut F) -> Result<Statement, E>
    where F: FnMut(Node) -> Result<Node, E>,
          E: From<RewriteError>
{
    Ok(match statement {
        Statement::Let { name, value, line } => {
            Statement::Let { name: rewrite_identifier(name, modifier)?,
                             value: rewrite_expression(value, modifier)?,
                             line }
        },
        Statement::Return { value, line } => {
            let value = value.map(|value| rewrite_expression(value, modifier))
                             .transpose()?;
            Statement::Return { value, line }
        },
        Statement::Expression { expr, line } => {
            Statement::Expression { expr: rewrite_expression(expr, modifier)?,
                                    line }
        },
    })
}

fn modify_expression_children<E, F>(expr: Expression, modifier: &mut F) -> Result<Expression, E>
    where F: FnMut(Node) -> Result<Node, E>,
          E: From<RewriteError>
{
    Ok(match expr {
        leaf @ (Expression::Identifier(_) | Expression::Literal { .. }) => leaf,
        Expression::Prefix { op, right, line } => {
            Expression::Prefix { op,
                                 right: rewrite_boxed(right, modifier)?,
                                 line }
        },
        Expression::Infix { left,
                            op,
                            right,
                            line, } => Expression::Infix { left: rewrite_boxed(left, modifier)?,
                                                           op,
                                                           right: rewrite_boxed(right, modifier)?,
                                                           line },
        Expression::Assign { name, value, line } => {
            Expression::Assign { name: rewrite_identifier(name, modifier)?,
                                 value: rewrite_boxed(value, modifier)?,
                                 line }
        },
        Expression::If { condition,
                         consequence,
                         alternative,
                         line, } => {
            let condition = rewrite_boxed(condition, modifier)?;
            let consequence = rewrite_block(consequence, modifier)?;
            let alternative = alternative.map(|block| rewrite_block(block, modifier))
                                         .transpose()?;
            Expression::If { condition,
                             consequence,
                             alternative,
                             line }
        },
        Expression::While { condition, body, line } => {
            Expression::While { condition: rewrite_boxed(condition, modifier)?,
                                body: rewrite_block(body, modifier)?,
                                line }
        },
        Expression::Function { parameters,
                               body,
                               name,
                               line, } => {
            Expression::Function { parameters: modify_parameters(parameters, modifier)?,
                                   body: rewrite_block(body, modifier)?,
                                   name,
                                   line }
        },
        Expression::Call { function,
                           arguments,
                           line, } => {
            Expression::Call { function: rewrite_boxed(function, modifier)?,
                               arguments: modify_expressions(arguments, modifier)?,
                               line }
        },
        Expression::Array { elements, line } => {
            Expression::Array { elements: modify_expressions(elements, modifier)?,
                                line }
        },
        Expression::Index { left, index, line } => {
            Expression::Index { left: rewrite_boxed(left, modifier)?,
                                index: rewrite_boxed(index, modifier)?,
                                line }
        },
        Expression::Hash { pairs, line } => {
            let pairs = pairs.into_iter()
                             .map(|(key, value)| -> Result<_, E> {
                                 Ok((rewrite_expression(key, modifier)?,
                                     rewrite_expression(value, modifier)?))
                             })
                             .collect::<Result<_, E>>()?;
            Expression::Hash { pairs, line }
        },
        Expression::Macro { parameters, body, line } => {
            Expression::Macro { parameters: modify_parameters(parameters, modifier)?,
                                body: rewrite_block(body, modifier)?,
                                line }
        },
    })
}
