use crate::content::WidgetContentRecord;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Opaque handle for one home-screen placement of the widget. Identifiers are
/// assigned and owned by the host; this crate never creates or retires them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

/// Which widget element launches the application when tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapTarget {
    Word,
    Root,
}

impl Default for TapTarget {
    fn default() -> Self {
        TapTarget::Word
    }
}

impl std::fmt::Display for TapTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TapTarget::Word => write!(f, "widget_word"),
            TapTarget::Root => write!(f, "widget_root"),
        }
    }
}

/// A repeating timer registration. `key` identifies the registration: the
/// host replaces any prior registration carrying the same key instead of
/// stacking a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatingTimer {
    pub delay: Duration,
    pub interval: Duration,
    pub key: &'static str,
}

/// Capabilities the host platform provides to the widget. The handler is
/// written entirely against this trait so it runs unchanged over a real
/// platform binding or a recording fake.
///
/// Host calls have no failure surface; a commit that the platform drops is
/// invisible to the widget.
pub trait WidgetHost: Send + Sync {
    /// Push both text fields into the instance's display surface.
    fn render_instance(&self, id: InstanceId, record: &WidgetContentRecord);
    /// Attach the tap-to-open binding on the given element of the instance.
    fn bind_tap(&self, id: InstanceId, target: TapTarget);
    /// Install (or replace) the repeating refresh timer.
    fn register_repeating_timer(&self, timer: RepeatingTimer);
}
