use crate::error::{NotificationError, Result};
use crate::models::notification::Notification;

/// An owned, ordered sequence of notifications sharing one channel type.
///
/// Use `NotificationContainer<Channel>` to mix channels. The container is not
/// synchronized; share it across threads only behind a lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContainer<C> {
    notifications: Vec<Notification<C>>,
}

impl<C> Default for NotificationContainer<C> {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
        }
    }
}

impl<C> NotificationContainer<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the end. No deduplication, no capacity limit.
    pub fn add(&mut self, notification: Notification<C>) {
        self.notifications.push(notification);
        log::debug!("Added notification, container now holds {}", self.notifications.len());
    }

    pub fn get(&self, index: usize) -> Result<&Notification<C>> {
        self.notifications.get(index).ok_or_else(|| {
            let len = self.notifications.len();
            log::warn!("Rejected notification lookup at index {} (len {})", index, len);
            NotificationError::OutOfRange { index, len }
        })
    }

    pub fn has_any(&self) -> bool {
        !self.notifications.is_empty()
    }

    /// Sorts ascending by timestamp. Equal timestamps keep insertion order.
    pub fn sort(&mut self) {
        self.notifications.sort_by(|a, b| a.compare_timestamp(b));
        log::debug!("Sorted {} notifications by timestamp", self.notifications.len());
    }

    /// Read-only view of the current sequence. Mutation goes through `add` and `sort`.
    pub fn list(&self) -> &[Notification<C>] {
        &self.notifications
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification<C>> {
        self.notifications.iter()
    }
}

impl<'a, C> IntoIterator for &'a NotificationContainer<C> {
    type Item = &'a Notification<C>;
    type IntoIter = std::slice::Iter<'a, Notification<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.notifications.iter()
    }
}

impl<C> IntoIterator for NotificationContainer<C> {
    type Item = Notification<C>;
    type IntoIter = std::vec::IntoIter<Notification<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.notifications.into_iter()
    }
}

impl<C> Extend<Notification<C>> for NotificationContainer<C> {
    fn extend<I: IntoIterator<Item = Notification<C>>>(&mut self, iter: I) {
        for notification in iter {
            self.add(notification);
        }
    }
}

impl<C> FromIterator<Notification<C>> for NotificationContainer<C> {
    fn from_iter<I: IntoIterator<Item = Notification<C>>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}
