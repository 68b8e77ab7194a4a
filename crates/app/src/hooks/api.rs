use carelink_client::{guarded, ApiClient, ApiError, RequestGuard};
use dioxus::prelude::*;
use shared_ui::{ErrorPanel, LoadingPanel};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// Fetch through the shared client. Re-running aborts the previous request
/// and unmounting aborts the current one, so a stale response can never
/// overwrite a newer one. Errors arrive as display-ready messages.
pub fn use_api<T, F, Fut>(mut fetch: F) -> Resource<Result<T, String>>
where
    T: 'static,
    F: FnMut(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let client = use_context::<ApiClient>();
    let in_flight: Rc<RefCell<Option<RequestGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));

    {
        let in_flight = in_flight.clone();
        use_drop(move || {
            in_flight.borrow_mut().take();
        });
    }

    use_resource(move || {
        let (request, guard) = guarded(fetch(client.clone()));
        // Replacing the slot drops, and so aborts, the previous run.
        in_flight.borrow_mut().replace(guard);
        async move {
            request.await.map_err(|e| {
                tracing::debug!(error = %e, "api request failed");
                e.friendly_message()
            })
        }
    })
}

/// Render the loading and error states of a fetched value and hand the data
/// to `view`.
pub fn fetched<T: 'static>(
    resource: Resource<Result<T, String>>,
    view: impl FnOnce(&T) -> Element,
) -> Element {
    let mut retry = resource;
    let state = resource.read();
    match &*state {
        None => rsx! { LoadingPanel {} },
        Some(Err(message)) => rsx! {
            ErrorPanel { message: message.clone(), on_retry: move |_| retry.restart() }
        },
        Some(Ok(value)) => view(value),
    }
}
