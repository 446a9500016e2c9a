//! Error type for division in rings with zero divisors.

/// Errors raised by inversion and division.
///
/// Division is the only partial operation of the algebras in this
/// workspace; every other operation is total over all `f64` bit
/// patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DivisionError {
    /// The element being inverted is a zero divisor.
    #[error("zero divisor")]
    ZeroDivisor,

    /// The denominator of a quotient is a zero divisor.
    #[error("zero divisor denominator")]
    ZeroDivisorDenominator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_operand() {
        assert_eq!(DivisionError::ZeroDivisor.to_string(), "zero divisor");
        assert_eq!(
            DivisionError::ZeroDivisorDenominator.to_string(),
            "zero divisor denominator"
        );
    }
}
