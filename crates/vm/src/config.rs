//! Engine configuration.

/// Tunables for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of instructions a single run may execute.
    ///
    /// `None` runs until the program halts or faults. A program that loops
    /// forever will never return without a limit.
    pub step_limit: Option<u64>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop a run with [`Fault::StepLimitExceeded`](crate::Fault::StepLimitExceeded)
    /// once `limit` instructions have executed.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        assert_eq!(EngineConfig::default().step_limit, None);
    }

    #[test]
    fn builder_sets_limit() {
        assert_eq!(EngineConfig::new().with_step_limit(50).step_limit, Some(50));
    }
}
