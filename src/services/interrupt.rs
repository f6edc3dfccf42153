use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Set from the Ctrl-C handler thread, observed by the scan loop.
///
/// Besides polling, [`CancelFlag::sleep`] parks the caller and wakes it as
/// soon as the flag is set.
#[derive(Clone, Default)]
pub struct CancelFlag(Arc<(Mutex<bool>, Condvar)>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let (lock, cvar) = &*self.0;
        *lock.lock().unwrap_or_else(PoisonError::into_inner) = true;
        cvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        let (lock, _) = &*self.0;
        *lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks for `timeout` unless cancelled first. Returns whether the flag is set.
    pub fn sleep(&self, timeout: Duration) -> bool {
        let (lock, cvar) = &*self.0;
        // A deadline past what `Instant` can represent means "until cancelled".
        let deadline = Instant::now().checked_add(timeout);
        let mut cancelled = lock.lock().unwrap_or_else(PoisonError::into_inner);
        while !*cancelled {
            cancelled = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    cvar.wait_timeout(cancelled, deadline - now)
                        .unwrap_or_else(PoisonError::into_inner)
                        .0
                }
                None => cvar.wait(cancelled).unwrap_or_else(PoisonError::into_inner),
            };
        }
        *cancelled
    }
}

/// Routes SIGINT/Ctrl-C into a fresh [`CancelFlag`] instead of killing the process.
pub fn install() -> anyhow::Result<CancelFlag> {
    let flag = CancelFlag::new();
    let handler_flag = flag.clone();
    ctrlc::set_handler(move || {
        tracing::warn!("interrupt received");
        handler_flag.cancel();
    })?;
    Ok(flag)
}
