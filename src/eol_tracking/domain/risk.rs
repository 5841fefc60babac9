use serde::Serialize;

/// Number of days remaining below which a component is classified as
/// `warning`. This window is part of the risk taxonomy, not configuration.
pub const WARNING_WINDOW_DAYS: i64 = 365;

/// Risk level for a tracked component, derived from its days-remaining
/// figure. The taxonomy is closed: every component lands in exactly one
/// of these three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// EOL is at least a year away.
    Safe,
    /// EOL is within the warning window (including today).
    Warning,
    /// EOL has passed, or no EOL date could be determined.
    Expired,
}

impl RiskLevel {
    /// Classifies an optional signed day-count into a risk level.
    ///
    /// Policy, evaluated in order:
    /// 1. Absent day-count: `Expired` (undeterminable, assume the worst).
    /// 2. Negative day-count: `Expired` (the EOL date has passed).
    /// 3. Below the warning window: `Warning`. Day 0 (EOL today) lands
    ///    here; only negative counts signal "already past".
    /// 4. Otherwise: `Safe`. Day 365 exactly lands here.
    pub fn classify(days_remaining: Option<i64>) -> Self {
        match days_remaining {
            None => RiskLevel::Expired,
            Some(days) if days < 0 => RiskLevel::Expired,
            Some(days) if days < WARNING_WINDOW_DAYS => RiskLevel::Warning,
            Some(_) => RiskLevel::Safe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Warning => "warning",
            RiskLevel::Expired => "expired",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "safe" => Ok(RiskLevel::Safe),
            "warning" => Ok(RiskLevel::Warning),
            "expired" => Ok(RiskLevel::Expired),
            _ => Err(format!(
                "Invalid risk level: {}. Please specify 'safe', 'warning' or 'expired'",
                s
            )),
        }
    }
}
