/// Numeric conversion helpers.
///
/// This module promotes integers to floating point for division and mixed
/// comparisons, and turns a requested loop count into the number of
/// iterations actually run.
pub mod num;
