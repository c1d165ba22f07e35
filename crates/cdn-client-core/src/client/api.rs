use cdn_shared::{
    const_config::path::{PATH_DELETE, PATH_FILES, PATH_UPLOAD},
    file_ref::FileRef,
    req_args::DeleteReqArgs,
    resp::{FilesResponse, MutationAck},
};
use futures::channel::oneshot;
use reqwest::multipart::{Form, Part};

use crate::{
    client::{FetchError, UiCallBack, DUMMY_ARGUMENT},
    pages::upload::SelectedFile,
    Client,
};

pub mod admin;

impl Client {
    /// Fetches the full ordered collection of stored file references
    #[tracing::instrument(skip(ui_notify))]
    pub fn get_files<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<Result<Vec<FileRef>, FetchError>> {
        self.send_request_expect_envelope::<_, _, FilesResponse>(
            PATH_FILES,
            &DUMMY_ARGUMENT,
            ui_notify,
        )
    }

    /// Submits the selected file as a multipart form under the `file` field
    #[tracing::instrument(skip(file, ui_notify), fields(file_name = %file.name))]
    pub fn upload_file<F: UiCallBack>(
        &self,
        file: &SelectedFile,
        ui_notify: F,
    ) -> oneshot::Receiver<Result<(), FetchError>> {
        let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = Form::new().part("file", part);
        self.send_multipart_expect_envelope::<_, MutationAck>(PATH_UPLOAD, form, ui_notify)
    }

    /// Deletes a stored file or revokes a user's access depending on the args
    #[tracing::instrument(skip(ui_notify))]
    pub fn delete<F: UiCallBack>(
        &self,
        args: DeleteReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<Result<(), FetchError>> {
        self.send_request_expect_envelope::<_, _, MutationAck>(PATH_DELETE, &args, ui_notify)
    }
}
