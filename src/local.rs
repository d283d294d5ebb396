use crate::content::WidgetContentRecord;
use crate::host::{InstanceId, RepeatingTimer, TapTarget, WidgetHost};
use crate::launch::launch_host_app;
use crate::schedule::RefreshScheduler;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-process widget host: renders land in an inspectable surface map, tap
/// bindings are tracked per instance and timer registrations route into a
/// [`RefreshScheduler`]. Each timer fire redelivers the refresh signal given
/// at construction, the way the platform redelivers the update broadcast to
/// the handler.
pub struct LocalWidgetHost {
    scheduler: RefreshScheduler,
    app_command: String,
    refresh_signal: Arc<dyn Fn() + Send + Sync>,
    surface: Mutex<HashMap<InstanceId, WidgetContentRecord>>,
    taps: Mutex<HashMap<InstanceId, TapTarget>>,
}

impl LocalWidgetHost {
    pub fn new(
        scheduler: RefreshScheduler,
        app_command: String,
        refresh_signal: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            scheduler,
            app_command,
            refresh_signal: Arc::new(refresh_signal),
            surface: Mutex::new(HashMap::new()),
            taps: Mutex::new(HashMap::new()),
        }
    }

    /// Last committed render for an instance, if it has ever been rendered.
    pub fn rendered(&self, id: InstanceId) -> Option<WidgetContentRecord> {
        self.surface.lock().unwrap().get(&id).cloned()
    }

    /// Snapshot of all committed renders.
    pub fn surface_snapshot(&self) -> HashMap<InstanceId, WidgetContentRecord> {
        self.surface.lock().unwrap().clone()
    }

    pub fn tap_binding(&self, id: InstanceId) -> Option<TapTarget> {
        self.taps.lock().unwrap().get(&id).copied()
    }

    /// Deliver a tap on an instance. A bound instance launches the host
    /// application; an unbound one is ignored.
    pub fn activate(&self, id: InstanceId) -> anyhow::Result<()> {
        match self.tap_binding(id) {
            Some(target) => {
                tracing::info!(id = id.0, %target, "widget tapped, opening application");
                launch_host_app(&self.app_command)
            }
            None => Ok(()),
        }
    }
}

impl WidgetHost for LocalWidgetHost {
    fn render_instance(&self, id: InstanceId, record: &WidgetContentRecord) {
        self.surface.lock().unwrap().insert(id, record.clone());
    }

    fn bind_tap(&self, id: InstanceId, target: TapTarget) {
        self.taps.lock().unwrap().insert(id, target);
    }

    fn register_repeating_timer(&self, timer: RepeatingTimer) {
        let signal = self.refresh_signal.clone();
        self.scheduler
            .register_repeating(timer.key, timer.delay, timer.interval, move || signal());
    }
}
