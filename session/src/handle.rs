//! The future handed back for each submitted mutation.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;

use crate::error::{PipelineError, PipelineResult};
use crate::result::MutationOutcome;

/// Completes when the mutation has been submitted or has failed.
///
/// Dropping the handle does not cancel the mutation.
#[derive(Debug)]
pub struct MutationHandle {
    inner: JoinHandle<PipelineResult<bool>>,
}

impl MutationHandle {
    pub(crate) fn new(inner: JoinHandle<PipelineResult<bool>>) -> Self {
        Self { inner }
    }

    /// Wait for completion and reduce the result to an outcome.
    pub async fn outcome(self) -> MutationOutcome {
        MutationOutcome::from(self.await)
    }

    /// Whether the worker has finished.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

impl Future for MutationHandle {
    type Output = PipelineResult<bool>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.inner).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(join_error)) => Poll::Ready(Err(PipelineError::internal(format!(
                "mutation worker failed: {join_error}"
            )))),
        }
    }
}
