//! BevyLogger — LogPrinter поверх bevy::log (tracing)
//!
//! Симуляция пишет через свой глобальный logger, клиент направляет
//! сообщения в LogPlugin из DefaultPlugins.

use gallery_simulation::{LogLevel, LogPrinter};

pub struct BevyLogger;

impl LogPrinter for BevyLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => bevy::log::debug!("{}", message),
            LogLevel::Info => bevy::log::info!("{}", message),
            LogLevel::Warning => bevy::log::warn!("{}", message),
            LogLevel::Error => bevy::log::error!("{}", message),
        }
    }
}
