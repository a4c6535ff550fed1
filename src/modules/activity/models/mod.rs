pub mod activity_event;

pub use activity_event::{ActivityEvent, ActivityReceipt};
