use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn write(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match &self.prefix {
            Some(prefix) => println!("[{timestamp}][{prefix}] {message}"),
            None => println!("[{timestamp}] {message}"),
        }
    }
}

/// Installs the process-wide logger. Later calls are ignored; messages
/// logged before initialization are dropped.
pub fn init(prefix: Option<String>) {
    let _ = LOGGER.set(Logger { prefix });
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.write(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
