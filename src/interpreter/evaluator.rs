/// Binary operator evaluation logic.
///
/// Handles arithmetic and comparisons between numbers and booleans.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the per-run context and statement
/// dispatch.
pub mod core;

/// Evaluation of `if` statements.
pub mod conditional;

/// Evaluation of `while` statements.
///
/// Runs the body while the condition holds, never more than the iteration
/// cap.
pub mod while_loop;

/// Evaluation of `for` statements.
///
/// Runs the body a clamped number of times and recovers from faults in the
/// body.
pub mod for_loop;

/// Utility functions for evaluation.
///
/// Provides truthiness coercion and other helpers shared by evaluation logic.
pub mod utils;
