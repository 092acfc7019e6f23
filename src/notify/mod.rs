pub mod message;
pub mod traits;
pub mod ultramsg;

pub use message::format_message;
pub use traits::{DryRunNotifier, Notifier};
pub use ultramsg::UltraMsgNotifier;
