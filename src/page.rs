// src/page.rs
// Document-level state shared by every carousel on a page

use tokio::sync::watch;

/// Host page visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// The host page. Owns the visibility state and hands out subscriptions.
#[derive(Debug, Clone)]
pub struct Page {
    visibility: watch::Sender<Visibility>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Visibility::Visible)
    }
}

impl Page {
    pub fn new(initial: Visibility) -> Self {
        let (visibility, _) = watch::channel(initial);
        Self { visibility }
    }

    pub fn visibility(&self) -> Visibility {
        *self.visibility.borrow()
    }

    /// Publish a visibility change to every subscribed carousel
    pub fn set_visibility(&self, visibility: Visibility) {
        self.visibility.send_replace(visibility);
    }

    /// Acquire a per-instance subscription; dropping it unsubscribes
    pub fn subscribe(&self) -> VisibilitySubscription {
        VisibilitySubscription {
            rx: self.visibility.subscribe(),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.visibility.receiver_count()
    }
}

/// One carousel's handle on page visibility changes
#[derive(Debug)]
pub struct VisibilitySubscription {
    rx: watch::Receiver<Visibility>,
}

impl VisibilitySubscription {
    pub fn current(&self) -> Visibility {
        *self.rx.borrow()
    }

    /// Wait for the next change. `None` once the page is gone.
    pub async fn changed(&mut self) -> Option<Visibility> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}
