use crate::ApiError;
use futures::future::{AbortHandle, Abortable};
use std::future::Future;

/// Keeps an in-flight request alive. Dropping the guard (or calling
/// [`RequestGuard::cancel`]) aborts the request, which then resolves to
/// [`ApiError::Cancelled`].
#[derive(Debug)]
pub struct RequestGuard {
    handle: AbortHandle,
}

impl RequestGuard {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Wrap an API call so its owner can abort it.
pub fn guarded<F, T>(request: F) -> (impl Future<Output = Result<T, ApiError>>, RequestGuard)
where
    F: Future<Output = Result<T, ApiError>>,
{
    let (handle, registration) = AbortHandle::new_pair();
    let abortable = Abortable::new(request, registration);
    let fut = async move {
        match abortable.await {
            Ok(result) => result,
            Err(_aborted) => Err(ApiError::Cancelled),
        }
    };
    (fut, RequestGuard { handle })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn completes_while_guard_is_held() {
        let (fut, guard) = guarded(async { Ok::<_, ApiError>(7) });
        assert_eq!(block_on(fut).unwrap(), 7);
        assert!(!guard.is_cancelled());
    }

    #[test]
    fn cancel_resolves_to_cancelled() {
        let (fut, guard) = guarded(futures::future::pending::<Result<(), ApiError>>());
        guard.cancel();
        assert!(block_on(fut).unwrap_err().is_cancelled());
    }

    #[test]
    fn dropping_guard_cancels() {
        let (fut, guard) = guarded(futures::future::pending::<Result<(), ApiError>>());
        drop(guard);
        assert!(matches!(block_on(fut), Err(ApiError::Cancelled)));
    }
}
