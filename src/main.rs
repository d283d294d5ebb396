use std::sync::mpsc;
use std::sync::Mutex;

use word_widget::handler::WidgetRefreshHandler;
use word_widget::host::InstanceId;
use word_widget::local::LocalWidgetHost;
use word_widget::logging;
use word_widget::schedule::RefreshScheduler;
use word_widget::settings::Settings;
use word_widget::store::JsonFileStore;

const SETTINGS_FILE: &str = "settings.json";

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging);

    // The channel stands in for the platform's broadcast delivery: the
    // scheduler thread sends, this thread dispatches back into the handler.
    let (tx, rx) = mpsc::channel::<()>();
    let tx = Mutex::new(tx);

    let scheduler = RefreshScheduler::new();
    let host = LocalWidgetHost::new(scheduler, settings.app_command.clone(), move || {
        let _ = tx.lock().unwrap().send(());
    });
    let handler = WidgetRefreshHandler::new(settings.clone());

    // One demo instance; a real host supplies the ids of every placement.
    let instances = [InstanceId(1)];

    handler.on_enabled(&host);
    let store = JsonFileStore::load(&settings.store_path)?;
    handler.on_update(&host, &instances, &store);
    if let Some(record) = host.rendered(instances[0]) {
        tracing::info!(word = %record.word, "widget showing");
    }

    // Dispatch loop: one invocation per timer fire, never overlapping.
    while rx.recv().is_ok() {
        let store = JsonFileStore::load(&settings.store_path)?;
        handler.on_update(&host, &instances, &store);
        if let Some(record) = host.rendered(instances[0]) {
            tracing::info!(word = %record.word, "widget refreshed");
        }
    }
    Ok(())
}
