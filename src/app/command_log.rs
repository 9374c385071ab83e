//! Begrenztes Command-Log zur Nachverfolgung ausgeführter Commands.

use super::AppCommand;
use std::collections::VecDeque;

/// Ringpuffer der zuletzt ausgeführten Commands.
///
/// Bei Überlauf wird die ältere Hälfte auf einmal verworfen.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    limit: usize,
}

impl CommandLog {
    /// Standard-Obergrenze der Einträge.
    pub const DEFAULT_LIMIT: usize = 1000;

    /// Erstellt ein leeres Command-Log mit Standard-Obergrenze.
    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    /// Erstellt ein leeres Command-Log mit eigener Obergrenze (min. 2).
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(2);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() >= self.limit {
            self.entries.drain(..self.limit / 2);
        }
        self.entries.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Alle Einträge, älteste zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_drops_oldest_half_on_overflow() {
        let mut log = CommandLog::with_limit(10);
        for _ in 0..10 {
            log.record(AppCommand::RemoveLastPoint);
        }
        assert_eq!(log.len(), 10);

        log.record(AppCommand::ResetMode);
        assert_eq!(log.len(), 6);
        assert_eq!(log.last(), Some(&AppCommand::ResetMode));
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = CommandLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert_eq!(log.iter().count(), 0);
    }
}
