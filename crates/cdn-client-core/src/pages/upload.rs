use crate::{
    pages::{data_state::AwaitingType, notify::Notification},
    Client, FetchError, WakeFn,
};

/// The file the user picked; at most one may be selected at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Drives the upload flow: pick a file, submit it, report the outcome
///
/// Selection feedback is decoupled from submission: the status label updates
/// on every selection change whether or not an upload ever happens.
#[derive(Debug, Default)]
pub struct UploadController {
    selection: Option<SelectedFile>,
    in_flight: Option<AwaitingType<()>>,
}

#[derive(Debug)]
pub(crate) enum UploadOutcome {
    Uploaded,
    Failed(FetchError),
}

impl UploadController {
    /// Replaces the current selection
    pub fn select(&mut self, file: SelectedFile) {
        self.selection = Some(file);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    /// Feedback label for the file picker, present once a file is chosen
    pub fn status_label(&self) -> Option<String> {
        self.selection
            .as_ref()
            .map(|file| format!("SELECTED {}", file.name))
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Submits the selected file
    ///
    /// When nothing is selected no request is sent and the warning to surface
    /// is returned instead.
    pub(crate) fn submit<W: WakeFn>(&mut self, client: &Client, wake: W) -> Option<Notification> {
        if self.in_flight.is_some() {
            return None; // Already uploading
        }
        let Some(file) = self.selection.as_ref() else {
            return Some(Notification::warning("Please select a file to upload"));
        };
        self.in_flight = Some(AwaitingType(client.upload_file(file, wake)));
        None
    }

    /// Pumps the in flight upload if any
    pub(crate) fn poll(&mut self) -> Option<UploadOutcome> {
        let rx = self.in_flight.as_mut()?;
        let outcome = match rx.0.try_recv() {
            Ok(Some(Ok(()))) => {
                self.selection = None;
                UploadOutcome::Uploaded
            }
            Ok(Some(Err(e))) => UploadOutcome::Failed(e),
            Ok(None) => return None, // Still pending
            Err(e) => UploadOutcome::Failed(FetchError::Transport(anyhow::anyhow!(
                "Error receiving on channel. Error: {e:?}"
            ))),
        };
        self.in_flight = None;
        Some(outcome)
    }
}
