//! Notification and Dialog State
//!
//! Transient UI state machines: toast notifications with auto-dismiss, and a
//! generic dialog open/close machine whose payload survives the close
//! transition for a short interval so menu handlers and exit animations can
//! still read it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::AppStore;

/// How long a toast stays up before auto-dismissing
pub const TOAST_DISMISS_MS: u32 = 4000;

/// Delay between closing a dialog and clearing its payload
pub const DIALOG_CLEAR_DELAY_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast info",
            ToastLevel::Success => "toast success",
            ToastLevel::Error => "toast error",
        }
    }
}

/// A transient toast notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Push a toast and schedule its auto-dismiss
pub fn push_toast(store: AppStore, level: ToastLevel, message: impl Into<String>) {
    use crate::store::AppStateStoreFields;

    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast {
        id,
        level,
        message: message.into(),
    });

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DISMISS_MS).await;
        store.toasts().write().retain(|t| t.id != id);
    });
}

/// Dismiss a toast by id
pub fn dismiss_toast(store: AppStore, id: u32) {
    use crate::store::AppStateStoreFields;
    store.toasts().write().retain(|t| t.id != id);
}

/// Dialog open/close state machine.
///
/// `close()` flips `open` but keeps the payload; `clear(epoch)` drops the
/// payload only if no re-open happened since the close was scheduled. This
/// keeps the payload readable from handlers that run synchronously with the
/// close transition.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogState<T> {
    open: bool,
    payload: Option<T>,
    epoch: u32,
}

impl<T> Default for DialogState<T> {
    fn default() -> Self {
        DialogState {
            open: false,
            payload: None,
            epoch: 0,
        }
    }
}

impl<T> DialogState<T> {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn open(&mut self, payload: T) {
        self.open = true;
        self.payload = Some(payload);
        self.epoch += 1;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Clear the payload scheduled from `close()`. A stale epoch (the dialog
    /// was re-opened meanwhile) makes this a no-op, as does a dialog that is
    /// open again.
    pub fn clear(&mut self, epoch: u32) {
        if !self.open && self.epoch == epoch {
            self.payload = None;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }
}

/// Close a dialog and schedule the payload clear after the fixed delay
pub fn close_with_delay<T>(
    dialog: ReadSignal<DialogState<T>>,
    set_dialog: WriteSignal<DialogState<T>>,
) where
    T: Clone + Send + Sync + 'static,
{
    let epoch = dialog.get_untracked().epoch();
    set_dialog.update(|d| d.close());
    spawn_local(async move {
        TimeoutFuture::new(DIALOG_CLEAR_DELAY_MS).await;
        // No-op if the owning view has been unmounted meanwhile
        let _ = set_dialog.try_update(|d| d.clear(epoch));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_sets_payload() {
        let mut dialog = DialogState::closed();
        dialog.open("item");

        assert!(dialog.is_open());
        assert_eq!(dialog.payload(), Some(&"item"));
    }

    #[test]
    fn test_close_keeps_payload_until_clear() {
        let mut dialog = DialogState::closed();
        dialog.open(42u32);
        let epoch = dialog.epoch();

        dialog.close();
        // A handler running synchronously with close() still sees the payload
        assert!(!dialog.is_open());
        assert_eq!(dialog.payload(), Some(&42));

        dialog.clear(epoch);
        assert_eq!(dialog.payload(), None);
    }

    #[test]
    fn test_stale_clear_is_noop_after_reopen() {
        let mut dialog = DialogState::closed();
        dialog.open(1u32);
        let stale_epoch = dialog.epoch();
        dialog.close();

        // Re-opened before the scheduled clear fired
        dialog.open(2u32);
        dialog.clear(stale_epoch);

        assert!(dialog.is_open());
        assert_eq!(dialog.payload(), Some(&2));
    }

    #[test]
    fn test_clear_while_open_is_noop() {
        let mut dialog = DialogState::closed();
        dialog.open(7u32);
        let epoch = dialog.epoch();

        dialog.clear(epoch);
        assert_eq!(dialog.payload(), Some(&7));
    }
}
