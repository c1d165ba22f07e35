//! State holders for the screens of the dashboard, kept free of any UI
//! framework so the flows can be driven and tested headlessly
//!
//! The host shell owns a [`ListingPage`], calls [`ListingPage::poll`] on every
//! tick or wake, renders the rows it exposes, and routes user interactions
//! (file selection, upload button, delete triggers, confirmation answers)
//! back into it.

pub mod action;
pub mod data_state;
pub mod listing;
pub mod notify;
pub mod upload;

pub use action::{ActionState, RowAction};
pub use data_state::{AwaitingType, DataState};
pub use listing::{FileRow, ListingPage, UserRow};
pub use notify::{Notification, NotificationLevel};
pub use upload::{SelectedFile, UploadController};
