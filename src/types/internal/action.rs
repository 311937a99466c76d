use std::fmt;
use std::str::FromStr;

/// Action types tracked by the anomaly monitor
///
/// The audit_records table stores the action as a plain string tag, but
/// thresholds are keyed on this closed enum so adding a monitored action
/// type is a compile-time change rather than a stringly-typed map entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Login,
    Authenticated,
}

impl AuditAction {
    /// All action types, in the order sweeps evaluate them
    pub const ALL: [AuditAction; 5] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Login,
        Self::Authenticated,
    ];

    /// String tag stored in the audit_records.action column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Login => "LOGIN",
            Self::Authenticated => "AUTHENTICATED",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = UnknownActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            "LOGIN" => Ok(Self::Login),
            "AUTHENTICATED" => Ok(Self::Authenticated),
            other => Err(UnknownActionError(other.to_string())),
        }
    }
}

/// Returned when an incoming action tag is not part of the closed set
#[derive(Debug, thiserror::Error)]
#[error("Unknown action type: {0}")]
pub struct UnknownActionError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("CREATE".parse::<AuditAction>().unwrap(), AuditAction::Create);
        assert_eq!("delete".parse::<AuditAction>().unwrap(), AuditAction::Delete);
        assert_eq!("Login".parse::<AuditAction>().unwrap(), AuditAction::Login);
    }

    #[test]
    fn rejects_unknown_tags() {
        assert!("CHECKOUT".parse::<AuditAction>().is_err());
        assert!("".parse::<AuditAction>().is_err());
    }

    #[test]
    fn tag_round_trips_through_display() {
        for action in AuditAction::ALL {
            assert_eq!(action.to_string().parse::<AuditAction>().unwrap(), action);
        }
    }
}
