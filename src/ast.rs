/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are built from integer literals, binary operators and
/// parentheses. They never contain statements, so evaluating one always
/// yields a number or a boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary operation. Both operands are always evaluated.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// A parenthesized expression.
    Group {
        /// The enclosed expression.
        expr: Box<Self>,
        /// Line number of the opening parenthesis.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use bounded_calc::ast::Expr;
    ///
    /// let expr = Expr::Number { value: 7, line: 5 };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. } | Self::BinaryOp { line, .. } | Self::Group { line, .. } => {
                *line
            },
        }
    }
}

/// Represents a statement.
///
/// A program is exactly one statement; loop and conditional bodies are
/// statements too, so they nest freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `if (condition) then statement else statement`
    If {
        /// The condition, coerced to truthiness.
        condition:   Expr,
        /// Evaluated when the condition holds.
        then_branch: Box<Self>,
        /// Evaluated otherwise.
        else_branch: Box<Self>,
        /// Line number of the `if` keyword.
        line:        usize,
    },
    /// `while (condition) do statement`
    While {
        /// The loop condition, checked before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number of the `while` keyword.
        line:      usize,
    },
    /// `for variable in range(bound) do statement`
    For {
        /// The loop variable. It is parsed but never bound.
        variable: String,
        /// The requested number of iterations.
        bound:    i64,
        /// The loop body.
        body:     Box<Self>,
        /// Line number of the `for` keyword.
        line:     usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
