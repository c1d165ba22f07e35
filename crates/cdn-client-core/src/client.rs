use anyhow::{anyhow, Context};
use cdn_shared::{const_config::path::PathSpec, resp::Envelope, session::SessionContext};
use closure_traits::{ChannelCallBack, ChannelCallBackOutput};
use futures::channel::oneshot;
use reqwest::{Method, StatusCode};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::info;

pub mod api;

pub const DUMMY_ARGUMENT: &[(&str, &str)] = &[("", "")];

#[derive(Debug, Clone)]
pub struct Client {
    api_client: reqwest::Client,
    inner: Arc<Mutex<ClientInner>>,
}

#[derive(Debug)]
struct ClientInner {
    api_base_url: String,
    session: SessionContext,
}

impl Default for Client {
    fn default() -> Self {
        Self::new("http://localhost:8080".to_string())
    }
}

/// How a request failed
///
/// The two variants are surfaced to the user the same way but transport
/// failures are additionally logged with their full context.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The backend answered but reported a failure in the payload's `error`
    /// field
    #[error("{0}")]
    Api(String),
    /// The request failed before a usable payload existed
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl ClientInner {
    #[tracing::instrument]
    fn new(api_base_url: String) -> Self {
        Self {
            api_base_url,
            session: SessionContext::Anonymous,
        }
    }
}

impl Client {
    #[tracing::instrument(name = "NEW CLIENT-CORE")]
    pub fn new(api_base_url: String) -> Self {
        // In the browser the user cookie rides along on its own; natively the
        // cookie store carries it between requests
        #[cfg(not(target_arch = "wasm32"))]
        let api_client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Unable to create reqwest client");
        #[cfg(target_arch = "wasm32")]
        let api_client = reqwest::Client::new();
        Self {
            api_client,
            inner: Arc::new(Mutex::new(ClientInner::new(api_base_url))),
        }
    }

    /// Applies the raw value of the `user` cookie, folding any decode failure
    /// into an anonymous session, and returns the resulting context
    #[tracing::instrument(skip(raw_cookie))]
    pub fn apply_user_cookie(&self, raw_cookie: Option<&str>) -> SessionContext {
        let session = SessionContext::from_cookie(raw_cookie);
        self.inner.lock().expect("mutex poisoned").session = session.clone();
        session
    }

    pub fn session(&self) -> SessionContext {
        self.inner.lock().expect("mutex poisoned").session.clone()
    }

    pub fn is_admin(&self) -> bool {
        self.inner.lock().expect("mutex poisoned").session.is_admin()
    }

    #[tracing::instrument(skip(args, on_done))]
    fn initiate_request<T, F, O>(&self, path_spec: PathSpec, args: &T, on_done: F)
    where
        T: serde::Serialize + Debug,
        F: ChannelCallBack<O>,
        O: ChannelCallBackOutput,
    {
        // GET and DELETE carry their arguments in the query string
        let sends_query = path_spec.method == Method::GET || path_spec.method == Method::DELETE;
        let mut request = self
            .api_client
            .request(path_spec.method, self.path_to_url(path_spec.path));
        request = if sends_query {
            request.query(&args)
        } else {
            request.json(&args)
        };
        reqwest_cross::fetch(request, on_done)
    }

    fn send_request_expect_envelope<F, T, E>(
        &self,
        path_spec: PathSpec,
        args: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<Result<E::Data, FetchError>>
    where
        T: serde::Serialize + Debug,
        F: UiCallBack,
        E: Envelope + serde::de::DeserializeOwned + Send + Debug + 'static,
        E::Data: Send + Debug + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async {
            let msg = process_envelope::<E>(resp).await;
            tx.send(msg).expect("failed to send oneshot msg");
            ui_notify();
        };
        self.initiate_request(path_spec, args, on_done);
        rx
    }

    fn send_multipart_expect_envelope<F, E>(
        &self,
        path_spec: PathSpec,
        form: reqwest::multipart::Form,
        ui_notify: F,
    ) -> oneshot::Receiver<Result<E::Data, FetchError>>
    where
        F: UiCallBack,
        E: Envelope + serde::de::DeserializeOwned + Send + Debug + 'static,
        E::Data: Send + Debug + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async {
            let msg = process_envelope::<E>(resp).await;
            tx.send(msg).expect("failed to send oneshot msg");
            ui_notify();
        };
        let request = self
            .api_client
            .request(path_spec.method, self.path_to_url(path_spec.path))
            .multipart(form);
        reqwest_cross::fetch(request, on_done);
        rx
    }

    #[tracing::instrument(ret)]
    fn path_to_url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            &self
                .inner
                .lock()
                .expect("failed to unlock client mutex")
                .api_base_url
        )
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_envelope<E>(
    response: reqwest::Result<reqwest::Response>,
) -> Result<E::Data, FetchError>
where
    E: Envelope + serde::de::DeserializeOwned + Debug,
    E::Data: Debug,
{
    let (response, status) = extract_response(response)?;
    if status == StatusCode::OK {
        let envelope: E = response
            .json()
            .await
            .context("failed to parse result as json")
            .map_err(FetchError::from)?;
        envelope.into_result().map_err(FetchError::Api)
    } else {
        Err(handle_error(response).await.into())
    }
}

#[tracing::instrument(ret)]
async fn handle_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    debug_assert!(
        !status.is_success(),
        "this is supposed to be an error, right? Status code is: {status}"
    );
    let Ok(body) = response.text().await else {
        return anyhow!("failed to get response body");
    };
    if body.is_empty() {
        anyhow!("request failed with status code: {status} and no body")
    } else {
        anyhow!("{body}")
    }
}

/// Provides a way to standardize the error message
#[tracing::instrument(ret, err(Debug))]
fn extract_response(
    response: reqwest::Result<reqwest::Response>,
) -> Result<(reqwest::Response, StatusCode), FetchError> {
    if response.is_err() {
        info!("Response is err: {:#?}", response);
    }
    let response = response.context("failed to send request")?;
    let status = response.status();
    Ok((response, status))
}

pub trait UiCallBack: 'static + Send + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + Send + FnOnce() {}

/// Used by the pages to wake the host UI each time a request completes
///
/// Clone is required because a wake gets handed to every request a page
/// starts
pub trait WakeFn: Fn() + Clone + Send + Sync + 'static {}
impl<T> WakeFn for T where T: Fn() + Clone + Send + Sync + 'static {}

#[cfg(not(target_arch = "wasm32"))]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> + Send {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> + Send {}
}

#[cfg(target_arch = "wasm32")]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> {}
}
