use cdn_shared::req_args::DeleteReqArgs;

use crate::{pages::data_state::AwaitingType, Client, FetchError, WakeFn};

/// A mutation a row's delete trigger can request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    DeleteFile { filename: String },
    RevokeUser { user_id: String },
}

impl RowAction {
    /// Question for the blocking confirmation dialog
    pub fn confirm_prompt(&self) -> &'static str {
        match self {
            RowAction::DeleteFile { .. } => "Are you sure you want to delete this file?",
            RowAction::RevokeUser { .. } => {
                "Are you sure you want to remove access from this user?"
            }
        }
    }

    fn req_args(&self) -> DeleteReqArgs {
        match self {
            RowAction::DeleteFile { filename } => DeleteReqArgs::File {
                filename: filename.clone(),
            },
            RowAction::RevokeUser { user_id } => DeleteReqArgs::User {
                user_id: user_id.clone(),
            },
        }
    }
}

/// Progress of a row mutation
///
/// `Idle -> AwaitingConfirmation -> InFlight` and then back to `Idle`, either
/// via a listing refresh on success or with a notification on failure.
/// Declining the confirmation returns straight to `Idle` with no request
/// sent.
#[derive(Debug, Default)]
pub enum ActionState {
    #[default]
    Idle,
    AwaitingConfirmation(RowAction),
    InFlight(AwaitingType<()>),
}

#[derive(Debug)]
pub(crate) enum ActionOutcome {
    Completed,
    Failed(FetchError),
}

impl ActionState {
    /// Moves to awaiting confirmation, ignored while a mutation is underway
    pub(crate) fn request(&mut self, action: RowAction) {
        if matches!(self, ActionState::Idle) {
            *self = ActionState::AwaitingConfirmation(action);
        }
    }

    /// The action the host must get a yes/no answer for, if any
    pub fn pending_confirmation(&self) -> Option<&RowAction> {
        match self {
            ActionState::AwaitingConfirmation(action) => Some(action),
            _ => None,
        }
    }

    /// Applies the user's answer to the pending confirmation
    pub(crate) fn resolve<W: WakeFn>(&mut self, confirmed: bool, client: &Client, wake: W) {
        let ActionState::AwaitingConfirmation(action) = &*self else {
            return;
        };
        if confirmed {
            let rx = client.delete(action.req_args(), wake);
            *self = ActionState::InFlight(AwaitingType(rx));
        } else {
            *self = ActionState::Idle;
        }
    }

    /// Pumps the in flight mutation if any
    pub(crate) fn poll(&mut self) -> Option<ActionOutcome> {
        let ActionState::InFlight(rx) = self else {
            return None;
        };
        let outcome = match rx.0.try_recv() {
            Ok(Some(Ok(()))) => ActionOutcome::Completed,
            Ok(Some(Err(e))) => ActionOutcome::Failed(e),
            Ok(None) => return None, // Still pending
            Err(e) => ActionOutcome::Failed(FetchError::Transport(anyhow::anyhow!(
                "Error receiving on channel. Error: {e:?}"
            ))),
        };
        *self = ActionState::Idle;
        Some(outcome)
    }
}
