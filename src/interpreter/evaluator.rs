use crate::{
    error::RuntimeError,
    interpreter::{lexer::Token, operator::Arity, stack::OperandStack},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a token sequence against a fresh operand stack.
///
/// Tokens are applied in order:
/// - integer literals push their value,
/// - fixed-arity operators pop their operands right-to-left, apply their
///   behavior, and push the single result back,
/// - stack-draining operators consume every unclaimed operand and push their
///   result back claimed, so a later draining operator only sees operands
///   that arrived after it.
///
/// After applying token `i`, the stack holds exactly the partial result of
/// the tokens up to and including `i`. After the last token the stack must
/// hold exactly one value, which becomes the result.
///
/// # Errors
/// Returns a `RuntimeError` when an operator pops more operands than the
/// stack holds, when an operator's behavior fails (division by zero,
/// negative square root, overflow, draining an empty stack), or when the
/// final stack depth is not exactly one.
///
/// # Example
/// ```
/// use postfixa::interpreter::{evaluator::eval, lexer::tokenize};
///
/// let tokens = tokenize("7 3 -").unwrap();
/// assert_eq!(eval(&tokens).unwrap(), 4);
/// ```
pub fn eval(tokens: &[(Token, usize)]) -> EvalResult<i64> {
    let mut operands = OperandStack::new();

    for (token, position) in tokens {
        match token {
            Token::Integer(value) => operands.push(*value),
            Token::Operator(op) => match op.arity() {
                Arity::Fixed(count) => {
                    let args = operands.pop_n(count, op.symbol(), *position)?;
                    operands.push(op.apply(&args, *position)?);
                },
                Arity::AllOperands => {
                    let args = operands.drain_unclaimed();
                    let result = op.apply(&args, *position)?;
                    // The result is claimed: the next draining operator
                    // starts fresh instead of consuming it again.
                    operands.push_claimed(result);
                },
            },
            // Whitespace is consumed by the lexer and never reaches here.
            Token::Ignored => {},
        }
    }

    operands.into_result()
}
