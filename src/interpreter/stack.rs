use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// The operand stack: a last-in-first-out sequence of intermediate integer
/// values used during evaluation.
///
/// Each evaluation run owns exactly one `OperandStack`; no state survives
/// beyond the run, and separate runs never share one.
///
/// Operands pushed by literals and fixed-arity results are unclaimed. A
/// stack-draining operation consumes exactly the unclaimed operands and
/// pushes its result back claimed, so the next draining operation starts
/// from a clean slate. Fixed-arity pops are unaffected by claims.
#[derive(Debug)]
pub struct OperandStack {
    values:  Vec<i64>,
    /// How many values at the bottom of the stack are claimed.
    claimed: usize,
}

#[allow(clippy::new_without_default)]
impl OperandStack {
    /// Creates a new, empty operand stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { values:  Vec::new(),
               claimed: 0, }
    }

    /// Pushes a value onto the top of the stack.
    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Pushes a value and marks everything now on the stack as claimed.
    ///
    /// Claimed operands are skipped by later [`Self::drain_unclaimed`] calls
    /// but pop normally through [`Self::pop_n`].
    pub fn push_claimed(&mut self, value: i64) {
        self.values.push(value);
        self.claimed = self.values.len();
    }

    /// Pops exactly `count` operands off the top of the stack.
    ///
    /// The returned values keep their stack order, bottom first, so the
    /// operand pushed last (the right operand) comes last in the result.
    /// Claimed values pop like any other.
    ///
    /// # Errors
    /// Returns `StackUnderflow` if the stack holds fewer than `count` values.
    /// `symbol` and `position` identify the operator being applied for error
    /// reporting.
    ///
    /// # Example
    /// ```
    /// use postfixa::interpreter::stack::OperandStack;
    ///
    /// let mut operands = OperandStack::new();
    /// operands.push(7);
    /// operands.push(3);
    ///
    /// assert_eq!(operands.pop_n(2, "-", 4).unwrap(), vec![7, 3]);
    /// assert!(operands.pop_n(1, "-", 4).is_err());
    /// ```
    pub fn pop_n(&mut self,
                 count: usize,
                 symbol: &'static str,
                 position: usize)
                 -> EvalResult<Vec<i64>> {
        if self.values.len() < count {
            return Err(RuntimeError::StackUnderflow { symbol, position });
        }

        let popped = self.values.split_off(self.values.len() - count);
        self.claimed = self.claimed.min(self.values.len());

        Ok(popped)
    }

    /// Drains every unclaimed operand currently on the stack, bottom first.
    ///
    /// Draining when everything is claimed (or the stack is empty) yields an
    /// empty vector; whether that is an error is the caller's decision.
    ///
    /// # Example
    /// ```
    /// use postfixa::interpreter::stack::OperandStack;
    ///
    /// let mut operands = OperandStack::new();
    /// operands.push(4);
    /// operands.push(5);
    ///
    /// assert_eq!(operands.drain_unclaimed(), vec![4, 5]);
    ///
    /// operands.push_claimed(5);
    /// operands.push(1);
    /// operands.push(2);
    ///
    /// // The claimed 5 stays put; only the newer operands are drained.
    /// assert_eq!(operands.drain_unclaimed(), vec![1, 2]);
    /// ```
    pub fn drain_unclaimed(&mut self) -> Vec<i64> {
        self.values.split_off(self.claimed)
    }

    /// Consumes the stack and returns the final evaluation result.
    ///
    /// A fully evaluated expression leaves exactly one operand behind.
    ///
    /// # Errors
    /// - `MissingResult` if the stack is empty.
    /// - `TrailingOperands` if more than one operand is left.
    pub fn into_result(self) -> EvalResult<i64> {
        match self.values.as_slice() {
            [] => Err(RuntimeError::MissingResult),
            [value] => Ok(*value),
            values => Err(RuntimeError::TrailingOperands { count: values.len() }),
        }
    }
}
