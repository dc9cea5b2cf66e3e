/// Where a single username submission currently is.
///
/// `Idle -> Validating -> Checking -> Writing -> Succeeded`, with `Failed`
/// reachable from any working phase. Both terminal phases fall back to
/// `Idle` on the next edit or submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClaimPhase {
    #[default]
    Idle,
    Validating,
    Checking,
    Writing,
    Succeeded,
    Failed,
}

impl ClaimPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Checking => "checking",
            Self::Writing => "writing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl std::fmt::Display for ClaimPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
