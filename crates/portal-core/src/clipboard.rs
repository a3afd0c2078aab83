//! Subscription Link Copying
//!
//! Copies a field's value to the system clipboard and flashes the copy
//! button's success style for a fixed window afterwards.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// How long the copy button keeps its success style
pub const ACK_WINDOW: Duration = Duration::from_millis(2000);

/// Field the value is copied from
pub trait CopySource {
    /// Current value, or `None` when the field is absent from the page
    fn value(&self) -> Option<String>;

    /// Select the field's text. Purely cosmetic.
    fn select(&self);
}

/// Destination for the asynchronous clipboard write
#[async_trait(?Send)]
pub trait ClipboardSink {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Visual acknowledgement on the copy button. Both transitions are
/// idempotent, so overlapping reverts settle on the same style.
pub trait AckSurface {
    fn acknowledge(&self);
    fn reset(&self);
}

/// Fire-and-forget timer; there is no cancellation handle
pub trait AckTimer {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

/// Copy the source field's value to the clipboard.
///
/// The acknowledgement engages only after the write resolves, and reverts
/// after [`ACK_WINDOW`]. A missing field is a complete no-op; a failed
/// write never acknowledges and leaves only a developer diagnostic.
pub async fn copy_with_ack<A>(
    source: &dyn CopySource,
    clipboard: &dyn ClipboardSink,
    ack: &A,
    timer: &dyn AckTimer,
) where
    A: AckSurface + Clone + 'static,
{
    let Some(text) = source.value() else {
        return;
    };
    source.select();

    match clipboard.write_text(&text).await {
        Ok(()) => {
            ack.acknowledge();
            let ack = ack.clone();
            timer.after(ACK_WINDOW, Box::new(move || ack.reset()));
        }
        Err(err) => {
            tracing::debug!(error = %err, "clipboard write failed, skipping acknowledgement");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct TestSource {
        value: Option<String>,
        selected: Cell<bool>,
    }

    impl TestSource {
        fn new(value: &str) -> Self {
            Self {
                value: Some(value.into()),
                selected: Cell::new(false),
            }
        }

        fn absent() -> Self {
            Self {
                value: None,
                selected: Cell::new(false),
            }
        }
    }

    impl CopySource for TestSource {
        fn value(&self) -> Option<String> {
            self.value.clone()
        }

        fn select(&self) {
            self.selected.set(true);
        }
    }

    #[derive(Default)]
    struct TestClipboard {
        wrote: RefCell<Option<String>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl ClipboardSink for TestClipboard {
        async fn write_text(&self, text: &str) -> Result<()> {
            if self.fail {
                return Err(PortalError::Clipboard("write denied".into()));
            }
            *self.wrote.borrow_mut() = Some(text.into());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct TestAck(Rc<Cell<bool>>);

    impl AckSurface for TestAck {
        fn acknowledge(&self) {
            self.0.set(true);
        }

        fn reset(&self) {
            self.0.set(false);
        }
    }

    #[derive(Default)]
    struct ManualTimer(RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>);

    impl ManualTimer {
        fn fire_next(&self) {
            let (_, callback) = self.0.borrow_mut().remove(0);
            callback();
        }
    }

    impl AckTimer for ManualTimer {
        fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
            self.0.borrow_mut().push((delay, callback));
        }
    }

    #[tokio::test]
    async fn test_copies_exact_value_and_reverts_after_window() {
        let source = TestSource::new("https://portal.example:8443/sub/abc");
        let clipboard = TestClipboard::default();
        let ack = TestAck::default();
        let timer = ManualTimer::default();

        copy_with_ack(&source, &clipboard, &ack, &timer).await;

        assert_eq!(
            clipboard.wrote.borrow().as_deref(),
            Some("https://portal.example:8443/sub/abc")
        );
        assert!(source.selected.get());
        assert!(ack.0.get());
        assert_eq!(timer.0.borrow()[0].0, ACK_WINDOW);

        timer.fire_next();
        assert!(!ack.0.get());
    }

    #[tokio::test]
    async fn test_failed_write_never_acknowledges() {
        let source = TestSource::new("https://portal.example:8443/sub/abc");
        let clipboard = TestClipboard {
            wrote: RefCell::new(None),
            fail: true,
        };
        let ack = TestAck::default();
        let timer = ManualTimer::default();

        copy_with_ack(&source, &clipboard, &ack, &timer).await;

        assert!(clipboard.wrote.borrow().is_none());
        assert!(!ack.0.get());
        assert!(timer.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_absent_field_is_a_no_op() {
        let source = TestSource::absent();
        let clipboard = TestClipboard::default();
        let ack = TestAck::default();
        let timer = ManualTimer::default();

        copy_with_ack(&source, &clipboard, &ack, &timer).await;

        assert!(clipboard.wrote.borrow().is_none());
        assert!(!source.selected.get());
        assert!(timer.0.borrow().is_empty());
    }
}
