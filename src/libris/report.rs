//! # Reporting
//!
//! User feedback leaves the core through a [`Reporter`] handed to the
//! [`Catalog`](crate::api::Catalog) at construction. The core never prints.
//!
//! - The binary plugs in a console reporter that colors messages by level.
//! - Tests plug in a [`MessageLog`] and assert on what was reported.
//!
//! Internal diagnostics (paths, byte counts, timings) go to `tracing` instead; a
//! reporter only ever sees messages meant for the person using the catalog.

use crate::commands::{CmdMessage, MessageLevel};
use std::cell::RefCell;

pub trait Reporter {
    fn report(&self, message: CmdMessage);

    fn info(&self, content: impl Into<String>) {
        self.report(CmdMessage::info(content));
    }

    fn success(&self, content: impl Into<String>) {
        self.report(CmdMessage::success(content));
    }

    fn warning(&self, content: impl Into<String>) {
        self.report(CmdMessage::warning(content));
    }

    fn error(&self, content: impl Into<String>) {
        self.report(CmdMessage::error(content));
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, message: CmdMessage) {
        (**self).report(message);
    }
}

/// Collects every reported message in order.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: RefCell<Vec<CmdMessage>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<CmdMessage> {
        self.messages.borrow().clone()
    }

    /// Contents of the messages reported at `level`.
    pub fn at_level(&self, level: MessageLevel) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|m| m.level == level)
            .map(|m| m.content.clone())
            .collect()
    }

    pub fn contains(&self, level: MessageLevel, needle: &str) -> bool {
        self.at_level(level).iter().any(|c| c.contains(needle))
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl Reporter for MessageLog {
    fn report(&self, message: CmdMessage) {
        self.messages.borrow_mut().push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_messages_in_order() {
        let log = MessageLog::new();
        log.info("one");
        log.error("two");
        log.success("three");

        let levels: Vec<_> = log.messages().into_iter().map(|m| m.level).collect();
        assert_eq!(
            levels,
            vec![MessageLevel::Info, MessageLevel::Error, MessageLevel::Success]
        );
        assert_eq!(log.at_level(MessageLevel::Error), vec!["two".to_string()]);
    }

    #[test]
    fn reports_through_a_reference() {
        let log = MessageLog::new();
        let by_ref = &log;
        by_ref.warning("careful");
        assert!(log.contains(MessageLevel::Warning, "careful"));

        log.clear();
        assert!(log.messages().is_empty());
    }
}
