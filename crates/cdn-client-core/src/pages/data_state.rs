use futures::channel::oneshot;
use tracing::error;

use crate::FetchError;

#[derive(Debug)]
pub struct AwaitingType<T>(pub oneshot::Receiver<Result<T, FetchError>>);

#[derive(Debug, Default)]
pub enum DataState<T> {
    #[default]
    None,
    AwaitingResponse(AwaitingType<T>),
    Present(T),
    Failed(String),
}

impl<T> DataState<T> {
    /// Starts a load unless data is already present, awaited, or failed
    ///
    /// Note: F needs to return AwaitingType<T> and not T because it needs to
    /// be able to be pending and T is not
    pub fn start_load<F>(&mut self, fetch_fn: F)
    where
        F: FnOnce() -> AwaitingType<T>,
    {
        if self.is_none() {
            *self = DataState::AwaitingResponse(fetch_fn());
        }
    }

    /// Pumps an awaited response
    ///
    /// Returns the error when the request completed unsuccessfully on this
    /// poll so the caller can surface it exactly once.
    pub fn poll(&mut self) -> Option<FetchError> {
        let DataState::AwaitingResponse(rx) = self else {
            return None;
        };
        match rx.0.try_recv() {
            Ok(Some(Ok(data))) => {
                *self = DataState::Present(data);
                None
            }
            Ok(Some(Err(e))) => {
                *self = DataState::Failed(e.to_string());
                Some(e)
            }
            Ok(None) => None, // Still pending
            Err(e) => {
                let err_msg = format!("Error receiving on channel. Error: {e:?}");
                error!("{err_msg}");
                *self = DataState::Failed(err_msg.clone());
                Some(FetchError::Transport(anyhow::anyhow!(err_msg)))
            }
        }
    }

    pub fn present(&self) -> Option<&T> {
        match self {
            DataState::Present(data) => Some(data),
            _ => None,
        }
    }

    /// Resets to [`DataState::None`] so the next `start_load` fetches again
    pub fn reset(&mut self) {
        *self = DataState::None;
    }

    /// Returns `true` if the data state is [`Present`].
    ///
    /// [`Present`]: DataState::Present
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(..))
    }

    /// Returns `true` if the data state is [`None`].
    ///
    /// [`None`]: DataState::None
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<T> AsRef<DataState<T>> for DataState<T> {
    fn as_ref(&self) -> &DataState<T> {
        self
    }
}

impl<T> AsMut<DataState<T>> for DataState<T> {
    fn as_mut(&mut self) -> &mut DataState<T> {
        self
    }
}
