use log::{debug, error, warn};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError<E> {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("submit action failed: {0}")]
    Action(E),
}

/// Runs a submit action and tracks whether one is pending, so the trigger can be
/// disabled and a progress indicator shown.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct Submitter {
    submitting: Arc<AtomicBool>,
}

impl Submitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Runs `action`, holding the submitting flag until it settles.
    ///
    /// The flag is released on success, on error and if the future is dropped or
    /// panics. A call made while another submission is pending does not run its action.
    pub async fn submit<F, Fut, T, E>(&self, action: F) -> Result<T, SubmitError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let Some(_guard) = SubmittingGuard::acquire(&self.submitting) else {
            warn!("Submit ignored, a submission is already in flight");
            return Err(SubmitError::InFlight);
        };

        debug!("Submitting");
        match action().await {
            Ok(value) => {
                debug!("Submit finished");
                Ok(value)
            }
            Err(e) => {
                error!("Submit action failed");
                Err(SubmitError::Action(e))
            }
        }
    }
}

struct SubmittingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
