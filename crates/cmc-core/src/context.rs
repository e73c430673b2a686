//! Cooperative cancellation for in-flight requests.
//!
//! A [`Context`] is handed to every request. Requests built from a context
//! that is already canceled fail before anything is sent; a cancel that
//! arrives while the transport is waiting aborts the send.

use tokio::sync::watch;

/// Cancellation context for a single call or a group of calls.
#[derive(Debug, Clone, Default)]
pub struct Context {
  canceled: Option<watch::Receiver<bool>>,
}

/// Cancels every [`Context`] cloned from the one it was created with.
#[derive(Debug)]
pub struct CancelHandle {
  tx: watch::Sender<bool>,
}

impl Context {
  /// A context that is never canceled
  pub fn background() -> Self {
    Self::default()
  }

  /// A cancellable context and the handle that cancels it
  pub fn with_cancel() -> (Self, CancelHandle) {
    let (tx, rx) = watch::channel(false);
    (Self { canceled: Some(rx) }, CancelHandle { tx })
  }

  /// Whether cancel has already been requested
  pub fn is_canceled(&self) -> bool {
    self.canceled.as_ref().is_some_and(|rx| *rx.borrow())
  }

  /// Resolves once the context is canceled. Never resolves for a background
  /// context or when the handle was dropped without canceling.
  pub async fn canceled(&self) {
    let Some(rx) = self.canceled.as_ref() else {
      return std::future::pending().await;
    };

    let mut rx = rx.clone();
    let closed = rx.wait_for(|canceled| *canceled).await.is_err();
    if closed {
      std::future::pending::<()>().await;
    }
  }
}

impl CancelHandle {
  /// Cancel the associated contexts
  pub fn cancel(&self) {
    self.tx.send_replace(true);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[test]
  fn test_background_is_never_canceled() {
    assert!(!Context::background().is_canceled());
  }

  #[tokio::test]
  async fn test_cancel_wakes_waiters() {
    let (ctx, handle) = Context::with_cancel();
    let waiter = ctx.clone();
    assert!(!ctx.is_canceled());

    let task = tokio::spawn(async move { waiter.canceled().await });
    handle.cancel();

    tokio::time::timeout(Duration::from_secs(1), task).await.unwrap().unwrap();
    assert!(ctx.is_canceled());
  }

  #[tokio::test]
  async fn test_dropped_handle_does_not_cancel() {
    let (ctx, handle) = Context::with_cancel();
    drop(handle);

    let res = tokio::time::timeout(Duration::from_millis(50), ctx.canceled()).await;
    assert!(res.is_err());
    assert!(!ctx.is_canceled());
  }
}
