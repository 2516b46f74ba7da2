mod event_form;
mod order;
mod permissions;

pub use event_form::EventForm;
pub use order::OrderEditor;
pub use permissions::PermissionEditor;
