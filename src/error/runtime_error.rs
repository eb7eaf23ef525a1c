#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operator needed more operands than the stack holds.
    StackUnderflow {
        /// The symbol of the operator that was being applied.
        symbol:   &'static str,
        /// Byte offset of the operator within the expression.
        position: usize,
    },
    /// A stack-draining operator found no operands to consume.
    EmptyOperands {
        /// The symbol of the operator that was being applied.
        symbol:   &'static str,
        /// Byte offset of the operator within the expression.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the operator within the expression.
        position: usize,
    },
    /// Attempted to take the square root of a negative number.
    NegativeSquareRoot {
        /// The negative operand.
        value:    i64,
        /// Byte offset of the operator within the expression.
        position: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// Byte offset of the operator within the expression.
        position: usize,
    },
    /// Evaluation finished without producing a value.
    MissingResult,
    /// Operands were left on the stack after the final token.
    TrailingOperands {
        /// How many operands were left.
        count: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { symbol, position } => {
                write!(f, "Error at offset {position}: Operator '{symbol}' is missing operands.")
            },

            Self::EmptyOperands { symbol, position } => write!(f,
                                                               "Error at offset {position}: Operator '{symbol}' found no operands to consume."),

            Self::DivisionByZero { position } => {
                write!(f, "Error at offset {position}: Division by zero.")
            },

            Self::NegativeSquareRoot { value, position } => write!(f,
                                                                   "Error at offset {position}: Square root of negative number {value}."),

            Self::Overflow { position } => write!(f,
                                                  "Error at offset {position}: Integer overflow while trying to compute result."),

            Self::MissingResult => write!(f, "Error: Expression produced no result."),

            Self::TrailingOperands { count } => {
                write!(f, "Error: {count} operands were left on the stack.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
