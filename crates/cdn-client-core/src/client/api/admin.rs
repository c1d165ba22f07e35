use cdn_shared::{const_config::path::PATH_USERS, resp::UsersResponse, user::UserRecord};
use futures::channel::oneshot;

use crate::{
    client::{FetchError, UiCallBack, DUMMY_ARGUMENT},
    Client,
};

impl Client {
    /// Fetches the users with access to the CDN
    ///
    /// Callers are expected to consult the session's admin check first so non
    /// admins never issue the request. That gate is cosmetic though, the
    /// backend enforces authorization on its side.
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_users<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<Result<Vec<UserRecord>, FetchError>> {
        self.send_request_expect_envelope::<_, _, UsersResponse>(
            PATH_USERS,
            &DUMMY_ARGUMENT,
            ui_notify,
        )
    }
}
