//! Character counter severity.

/// Lengths above this are shown as a warning.
pub const WARNING_THRESHOLD: usize = 7_000;

/// Lengths above this are shown as an error.
pub const ERROR_THRESHOLD: usize = 9_000;

/// Visual severity of the live character counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CounterTier {
    #[default]
    Neutral,
    Warning,
    Error,
}

impl CounterTier {
    pub fn for_length(len: usize) -> Self {
        if len > ERROR_THRESHOLD {
            CounterTier::Error
        } else if len > WARNING_THRESHOLD {
            CounterTier::Warning
        } else {
            CounterTier::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(CounterTier::for_length(0), CounterTier::Neutral);
        assert_eq!(CounterTier::for_length(7_000), CounterTier::Neutral);
        assert_eq!(CounterTier::for_length(7_001), CounterTier::Warning);
        assert_eq!(CounterTier::for_length(9_000), CounterTier::Warning);
        assert_eq!(CounterTier::for_length(9_001), CounterTier::Error);
        assert_eq!(CounterTier::for_length(50_000), CounterTier::Error);
    }
}
