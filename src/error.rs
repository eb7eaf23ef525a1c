/// Tokenization errors.
///
/// Defines all error types that can occur while turning an expression string
/// into tokens. Parse errors cover symbols that are neither registered
/// operators nor valid integer literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include things like division by zero, operand stack underflow, or
/// leftover operands after the final token.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
