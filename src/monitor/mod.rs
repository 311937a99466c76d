// Monitor layer - sliding-window anomaly detection over the audit log
//
// The ActivityMonitor runs a periodic sweep: for every configured action
// type it asks the ActivitySource for users whose recent action count meets
// that action's threshold and escalates them into the monitored-users
// table. Escalation is one-directional; entries are only dispositioned by
// operators.
mod activity_monitor;
mod handle;
mod source;

pub use activity_monitor::{ActivityMonitor, SweepSummary};
pub use handle::MonitorHandle;
pub use source::{ActivitySource, UserActionCount};
