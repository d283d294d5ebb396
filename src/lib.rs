pub mod content;
pub mod handler;
pub mod host;
pub mod launch;
pub mod local;
pub mod logging;
pub mod schedule;
pub mod settings;
pub mod store;
