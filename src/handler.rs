use crate::content::WidgetContentRecord;
use crate::host::{InstanceId, RepeatingTimer, WidgetHost};
use crate::settings::Settings;
use crate::store::WidgetStore;

/// Key under which the refresh timer is registered. Re-registering under this
/// key replaces the previous registration.
pub const REFRESH_TIMER_KEY: &str = "widget:refresh";

/// Handles the host callbacks for the word-of-the-day widget: refresh every
/// instance from the store and keep the periodic refresh timer armed.
pub struct WidgetRefreshHandler {
    settings: Settings,
}

impl WidgetRefreshHandler {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Host callback, fired when instances are placed and on every refresh
    /// timer tick. Renders the current store content into each instance,
    /// binds the tap target and re-arms the timer.
    pub fn on_update(&self, host: &dyn WidgetHost, instances: &[InstanceId], store: &dyn WidgetStore) {
        let record = WidgetContentRecord::from_store(store);
        for &id in instances {
            host.render_instance(id, &record);
            host.bind_tap(id, self.settings.tap_target);
            if self.settings.debug_logging {
                tracing::debug!(id = id.0, word = %record.word, "widget instance refreshed");
            }
        }
        self.schedule_refresh(host);
    }

    /// Host callback, fired once when the first instance is placed. Safe to
    /// call again after removal/re-placement cycles; the timer registration
    /// is simply replaced.
    pub fn on_enabled(&self, host: &dyn WidgetHost) {
        self.schedule_refresh(host);
    }

    /// Arm the repeating refresh timer with the configured delay and
    /// interval. Inexact firing is fine; the widget only shows a daily word.
    pub fn schedule_refresh(&self, host: &dyn WidgetHost) {
        let timer = RepeatingTimer {
            delay: self.settings.first_fire_delay(),
            interval: self.settings.refresh_interval(),
            key: REFRESH_TIMER_KEY,
        };
        host.register_repeating_timer(timer);
        tracing::debug!(
            "widget refresh scheduled every {} seconds",
            timer.interval.as_secs()
        );
    }
}
