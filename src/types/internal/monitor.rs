use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a monitored-user entry
///
/// The monitor only ever creates entries as `Active`; all transitions out
/// of `Active` are operator decisions made through the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitoredStatus {
    Active,
    Resolved,
    FalsePositive,
}

impl MonitoredStatus {
    /// String stored in the monitored_users.status column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::FalsePositive => "false_positive",
        }
    }
}

impl fmt::Display for MonitoredStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MonitoredStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "resolved" => Ok(Self::Resolved),
            "false_positive" => Ok(Self::FalsePositive),
            other => Err(InvalidStatusError(other.to_string())),
        }
    }
}

/// Returned when an operator submits a status outside the closed set
#[derive(Debug, thiserror::Error)]
#[error("Invalid monitored status: {0}")]
pub struct InvalidStatusError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        assert_eq!("active".parse::<MonitoredStatus>().unwrap(), MonitoredStatus::Active);
        assert_eq!("resolved".parse::<MonitoredStatus>().unwrap(), MonitoredStatus::Resolved);
        assert_eq!(
            "false_positive".parse::<MonitoredStatus>().unwrap(),
            MonitoredStatus::FalsePositive
        );
    }

    #[test]
    fn rejects_unknown_or_differently_cased_statuses() {
        assert!("Active".parse::<MonitoredStatus>().is_err());
        assert!("dismissed".parse::<MonitoredStatus>().is_err());
    }
}
