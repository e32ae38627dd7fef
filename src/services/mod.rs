pub mod ghanapost;

pub use ghanapost::{LookupError, LookupService};
