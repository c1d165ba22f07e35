use cdn_shared::{file_ref::FileRef, session::SessionContext, user::UserRecord};
use tracing::error;

use crate::{
    pages::{
        action::{ActionOutcome, ActionState, RowAction},
        data_state::{AwaitingType, DataState},
        notify::{Notification, Notifications},
        upload::{UploadController, UploadOutcome},
    },
    Client, FetchError, WakeFn,
};

/// A rendered file entry
///
/// Activating the row opens `url` in a new browsing context; `label` is the
/// final path segment of the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub label: String,
    pub url: String,
}

/// A rendered user entry with the target of its revoke action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub label: String,
    pub user_id: String,
}

/// State for the main dashboard screen
///
/// Owns the file and user collections, the upload controller, the row action
/// state machine and the queue of notifications for the host to display.
/// [`ListingPage::poll`] drives everything; the host calls it once per tick
/// or wake.
///
/// The rendered rows are always an order preserving projection of the most
/// recent successful fetch. Nothing is inserted or removed client side;
/// mutations trigger a [`ListingPage::refresh`] which refetches.
#[derive(Debug)]
pub struct ListingPage {
    session: SessionContext,
    files: DataState<Vec<FileRef>>,
    /// `None` when the session is not the admin so the fetch is never issued
    users: Option<DataState<Vec<UserRecord>>>,
    upload: UploadController,
    action: ActionState,
    notifications: Notifications,
}

impl ListingPage {
    pub fn new(session: SessionContext) -> Self {
        let users = session.is_admin().then(DataState::default);
        Self {
            session,
            files: DataState::default(),
            users,
            upload: UploadController::default(),
            action: ActionState::default(),
            notifications: Notifications::default(),
        }
    }

    /// Drives the page: starts any missing fetches and pumps everything in
    /// flight
    ///
    /// The file and user fetches are started independently and race against
    /// the network in whatever order it resolves them.
    pub fn poll<W: WakeFn>(&mut self, client: &Client, wake: W) {
        self.files
            .start_load(|| AwaitingType(client.get_files(wake.clone())));
        if let Some(users) = &mut self.users {
            users.start_load(|| AwaitingType(client.list_users(wake.clone())));
        }

        let files_err = self.files.poll();
        if let Some(e) = files_err {
            self.notify_failure("loading files", e);
        }
        let users_err = self.users.as_mut().and_then(DataState::poll);
        if let Some(e) = users_err {
            self.notify_failure("loading users", e);
        }

        match self.upload.poll() {
            Some(UploadOutcome::Uploaded) => self.refresh(),
            Some(UploadOutcome::Failed(e)) => self.notify_failure("upload", e),
            None => {}
        }
        match self.action.poll() {
            Some(ActionOutcome::Completed) => self.refresh(),
            Some(ActionOutcome::Failed(e)) => self.notify_failure("delete", e),
            None => {}
        }
    }

    /// Rows for the file list, `None` until a fetch succeeds
    pub fn file_rows(&self) -> Option<Vec<FileRow>> {
        self.files.present().map(|files| {
            files
                .iter()
                .map(|file| FileRow {
                    label: file.display_name().to_string(),
                    url: file.url().to_string(),
                })
                .collect()
        })
    }

    /// Rows for the user list, `None` for non admins and before a fetch
    /// succeeds
    pub fn user_rows(&self) -> Option<Vec<UserRow>> {
        self.users
            .as_ref()
            .and_then(DataState::present)
            .map(|users| {
                users
                    .iter()
                    .map(|user| UserRow {
                        label: user.display_label(),
                        user_id: user.id.clone(),
                    })
                    .collect()
            })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn upload(&mut self) -> &mut UploadController {
        &mut self.upload
    }

    /// Starts the confirmation flow for a row's delete trigger
    pub fn request_row_action(&mut self, action: RowAction) {
        self.action.request(action);
    }

    /// The question the host must get an answer for before calling
    /// [`ListingPage::resolve_confirmation`]
    pub fn pending_confirmation(&self) -> Option<&RowAction> {
        self.action.pending_confirmation()
    }

    /// Applies the user's yes/no answer; declining sends nothing
    pub fn resolve_confirmation<W: WakeFn>(&mut self, confirmed: bool, client: &Client, wake: W) {
        self.action.resolve(confirmed, client, wake);
    }

    /// Submits the upload, warning (without a request) when no file is
    /// selected
    pub fn submit_upload<W: WakeFn>(&mut self, client: &Client, wake: W) {
        if let Some(warning) = self.upload.submit(client, wake) {
            self.notifications.push(warning);
        }
    }

    /// Resets the collections so the next poll refetches
    ///
    /// Called after a successful mutation instead of reloading the whole
    /// page.
    pub fn refresh(&mut self) {
        self.files.reset();
        if let Some(users) = &mut self.users {
            users.reset();
        }
    }

    /// Next notification to display as a blocking dialog, if any
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notifications.pop()
    }

    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    /// Surfaces both failure kinds to the user the same way; transport
    /// failures additionally keep their full context in the logs
    fn notify_failure(&mut self, context: &str, e: FetchError) {
        match e {
            FetchError::Api(msg) => self.notifications.push(Notification::error(msg)),
            FetchError::Transport(e) => {
                error!("transport failure during {context}: {e:#}");
                self.notifications.push(Notification::error(format!(
                    "{context} failed: the server could not be reached"
                )));
            }
        }
    }
}
