//! # postfixa
//!
//! postfixa is a Reverse Polish Notation (RPN) expression evaluator written
//! in Rust. It tokenizes, classifies, and evaluates whitespace-delimited
//! postfix expressions over signed integers, such as `4 2 +` or
//! `5 3 4 2 9 1 MAX`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator, lexer};

/// Provides unified error types for tokenization and evaluation.
///
/// This module defines all errors that can be raised while turning an
/// expression string into a result. It standardizes error reporting and
/// carries detailed information about failures, including the offending
/// symbol and its position in the expression.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, operator resolution, the operand stack,
/// and error handling to provide a complete pipeline for Reverse Polish
/// Notation evaluation. It exposes the building blocks behind the crate's
/// public [`calculate`] entry point.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, operator registry, evaluator,
///   and operand stack.
/// - Provides entry points for tokenizing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates an RPN expression and returns the resulting integer.
///
/// This function tokenizes the provided expression string and applies each
/// token in order to a fresh operand stack: integer literals are pushed,
/// operators pop operands according to their arity and push their result.
/// The single operand left on the stack at the end is the result.
///
/// Every call is independent: the operand stack is owned by the call and no
/// state survives between invocations.
///
/// # Errors
/// Returns an error if tokenization fails, or if any runtime error occurs
/// during evaluation.
///
/// # Examples
/// ```
/// use postfixa::calculate;
///
/// // Operands come first, the operator follows.
/// let result = calculate("4 2 +");
/// assert_eq!(result.unwrap(), 6);
///
/// // Example with an intentional error (unknown symbol).
/// let result = calculate("4 two +");
/// assert!(result.is_err());
/// ```
pub fn calculate(expression: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let tokens = lexer::tokenize(expression)?;
    let result = evaluator::eval(&tokens)?;

    Ok(result)
}
