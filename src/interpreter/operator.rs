use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Specifies how many operands an operator consumes from the stack.
///
/// - `Fixed(n)` means the operator pops exactly `n` operands.
/// - `AllOperands` means the operator drains every unclaimed operand
///   currently on the stack, however many there are; its own result does not
///   count as unclaimed for later drains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    AllOperands,
}

/// Defines the operator registry by generating the operator enum, a lookup
/// table and a symbol list.
///
/// Each entry provides:
/// - an enum variant name,
/// - a string symbol,
/// - an arity specification.
///
/// The macro produces:
/// - `Operator` (the closed operator enum),
/// - `OPERATOR_TABLE` (static table for symbol lookup),
/// - `OPERATOR_SYMBOLS` (public list of registered symbols),
/// - the `symbol` and `arity` accessors.
macro_rules! operators {
    (
        $(
            $variant:ident => {
                symbol: $symbol:literal,
                arity: $arity:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A registered operator, identified by its textual symbol.
        ///
        /// The operator set is closed: every operator the evaluator knows is
        /// a variant of this enum, and evaluation dispatches over it with an
        /// exhaustive match.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Operator {
            $(
                #[doc = concat!("`", $symbol, "`")]
                $variant,
            )*
        }

        struct OperatorDef {
            symbol: &'static str,
            op:     Operator,
        }

        static OPERATOR_TABLE: &[OperatorDef] = &[
            $(
                OperatorDef { symbol: $symbol, op: Operator::$variant },
            )*
        ];

        /// The symbols of every registered operator.
        pub const OPERATOR_SYMBOLS: &[&str] = &[
            $($symbol,)*
        ];

        impl Operator {
            /// Returns the textual symbol this operator is registered under.
            #[must_use]
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)*
                }
            }
            /// Returns how many operands this operator consumes.
            #[must_use]
            pub const fn arity(self) -> Arity {
                match self {
                    $(Self::$variant => $arity,)*
                }
            }
        }
    };
}

operators! {
    Add  => { symbol: "+",    arity: Arity::Fixed(2) },
    Sub  => { symbol: "-",    arity: Arity::Fixed(2) },
    Mul  => { symbol: "*",    arity: Arity::Fixed(2) },
    Div  => { symbol: "/",    arity: Arity::Fixed(2) },
    Sqrt => { symbol: "SQRT", arity: Arity::Fixed(1) },
    Max  => { symbol: "MAX",  arity: Arity::AllOperands },
}

/// Looks up a symbol in the operator registry.
///
/// Lookup is an exact, case-sensitive match against the registered symbols.
/// The registry is built once, at compile time, and never mutated, so it is
/// safe to consult from any number of threads.
///
/// # Example
/// ```
/// use postfixa::interpreter::operator::{Operator, lookup};
///
/// assert_eq!(lookup("MAX"), Some(Operator::Max));
/// assert_eq!(lookup("max"), None);
/// ```
#[must_use]
pub fn lookup(symbol: &str) -> Option<Operator> {
    OPERATOR_TABLE.iter()
                  .find(|def| def.symbol == symbol)
                  .map(|def| def.op)
}

impl Operator {
    /// Applies this operator to the operands popped for it.
    ///
    /// `operands` holds the consumed values in stack order, bottom first: for
    /// fixed-arity operators the left operand comes first and the right
    /// operand (the one pushed last) comes last. For `Max` the slice holds
    /// the entire drained stack.
    ///
    /// Division truncates toward zero. `Sqrt` computes the integer square
    /// root, truncated toward zero. `Max` yields the largest of its operands.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing by zero.
    /// - `NegativeSquareRoot` when taking the square root of a negative
    ///   number.
    /// - `EmptyOperands` when `Max` receives no operands at all.
    /// - `Overflow` when a result does not fit in an `i64`.
    ///
    /// # Panics
    /// Panics if `operands` holds fewer values than a fixed arity requires;
    /// the evaluator always pops operands to match [`Operator::arity`] before
    /// calling this.
    ///
    /// # Example
    /// ```
    /// use postfixa::interpreter::operator::Operator;
    ///
    /// let result = Operator::Sub.apply(&[7, 3], 0).unwrap();
    /// assert_eq!(result, 4);
    /// ```
    pub fn apply(self, operands: &[i64], position: usize) -> EvalResult<i64> {
        match self {
            Self::Add => operands[0].checked_add(operands[1])
                                    .ok_or(RuntimeError::Overflow { position }),

            Self::Sub => operands[0].checked_sub(operands[1])
                                    .ok_or(RuntimeError::Overflow { position }),

            Self::Mul => operands[0].checked_mul(operands[1])
                                    .ok_or(RuntimeError::Overflow { position }),

            Self::Div => {
                if operands[1] == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                operands[0].checked_div(operands[1])
                           .ok_or(RuntimeError::Overflow { position })
            },

            Self::Sqrt => {
                if operands[0] < 0 {
                    return Err(RuntimeError::NegativeSquareRoot { value: operands[0],
                                                                  position });
                }
                Ok(operands[0].isqrt())
            },

            Self::Max => operands.iter()
                                 .copied()
                                 .max()
                                 .ok_or(RuntimeError::EmptyOperands { symbol: self.symbol(),
                                                                      position }),
        }
    }
}
