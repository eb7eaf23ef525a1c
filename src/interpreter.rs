/// The evaluator module applies tokens to the operand stack.
///
/// The evaluator walks the token sequence in order, pushes integer literals,
/// and applies operators by popping operands according to each operator's
/// arity. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Applies tokens in order against a fresh operand stack.
/// - Enforces the final-stack invariant: exactly one result value.
/// - Reports runtime errors such as division by zero or stack underflow.
pub mod evaluator;
/// The lexer module tokenizes an expression for evaluation.
///
/// The lexer (tokenizer) reads the raw expression text and produces a stream
/// of tokens, each corresponding to an integer literal or a registered
/// operator symbol. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their positions.
/// - Resolves operator symbols through the operator registry.
/// - Reports lexical errors for symbols that fit neither category.
pub mod lexer;
/// The operator module defines the operator registry and behaviors.
///
/// This module declares the closed set of operators, the static table that
/// maps textual symbols to them, and the arity rules that control how many
/// operands each operator consumes from the stack.
///
/// # Responsibilities
/// - Maps operator symbols to operator variants (exact, case-sensitive).
/// - Declares per-operator operand consumption, including whole-stack drain.
/// - Implements each operator's behavior over its popped operands.
pub mod operator;
/// The stack module defines the operand stack used during evaluation.
///
/// This module declares the LIFO sequence of intermediate integer values
/// that one evaluation run owns, together with the push, pop, and drain
/// operations the evaluator relies on.
///
/// # Responsibilities
/// - Stores intermediate results while an expression is evaluated.
/// - Pops fixed operand counts in right-to-left order, detecting underflow.
/// - Produces the final result, rejecting empty or overfull stacks.
pub mod stack;
