use tracing::debug;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{store::VariableStore, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the variable store. Separate contexts never share
/// state, so several programs can be run side by side.
///
/// ## Usage
///
/// Create a context, hand it a parsed program through
/// [`Context::interpret`], then read the resulting variables through
/// [`Context::variables`] or take them with [`Context::into_variables`].
#[derive(Debug, Default)]
pub struct Context {
    variables: VariableStore,
}

impl Context {
    /// Creates a context with an empty variable store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context that continues from an existing store.
    #[must_use]
    pub const fn with_variables(variables: VariableStore) -> Self {
        Self { variables }
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Consumes the context and returns its variable store.
    #[must_use]
    pub fn into_variables(self) -> VariableStore {
        self.variables
    }

    /// Executes a parsed program.
    ///
    /// The only observable effect is on the variable store.
    ///
    /// # Errors
    /// Returns the first runtime error met; statements that already ran keep
    /// their effects.
    ///
    /// # Example
    /// ```
    /// use numscript::{
    ///     interpreter::{evaluator::core::Context, lexer::Lexer, parser::Parser, value::Value},
    /// };
    ///
    /// let program = Parser::new(Lexer::new("{ var x = 5; var y = x + 1; }")).unwrap()
    ///                                                                      .parse()
    ///                                                                      .unwrap();
    /// let mut context = Context::new();
    /// context.interpret(&program).unwrap();
    ///
    /// assert_eq!(context.variables().get("y"), Some(Value::Integer(6)));
    /// ```
    pub fn interpret(&mut self, root: &Node) -> EvalResult<()> {
        self.eval(root)?;
        Ok(())
    }

    /// Evaluates a node.
    ///
    /// Expressions return their value. Statements run for their effect on
    /// the store and return [`Value::Unknown`].
    pub fn eval(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::NumberLiteral { token } => Self::eval_number_literal(token),
            Node::UnaryOp { op, operand, line } => {
                let value = self.eval_operand(operand, *line)?;
                Ok(Self::eval_unary(*op, value))
            },
            Node::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let lval = self.eval_operand(left, *line)?;
                let rval = self.eval_operand(right, *line)?;
                Self::eval_binary(*op, lval, rval, *line)
            },
            Node::VariableRef { name, line } => self.eval_variable(name, *line),
            Node::Assignment { target, value, line } => {
                self.eval_assignment(target, value, *line)?;
                Ok(Value::Unknown)
            },
            Node::Block { statements } => {
                for statement in statements {
                    self.eval(statement)?;
                }
                Ok(Value::Unknown)
            },
            Node::NoOp => Ok(Value::Unknown),
        }
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// A statement node in operand position cannot come out of the parser,
    /// so meeting one is an internal error rather than a user error.
    fn eval_operand(&mut self, node: &Node, line: usize) -> EvalResult<Value> {
        let value = self.eval(node)?;
        if value.is_unknown() {
            return Err(RuntimeError::InternalInvariant { details: format!("statement {node:?} used as an operand"),
                                                         line:    node.line().unwrap_or(line), });
        }
        Ok(value)
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if it was never assigned.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.variables
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_owned(),
                                                             line })
    }

    fn eval_assignment(&mut self, target: &str, value: &Node, line: usize) -> EvalResult<()> {
        let value = self.eval_operand(value, line)?;
        debug!(name = target, %value, ty = value.type_name(), line, "assign");
        self.variables.set(target, value);
        Ok(())
    }
}
