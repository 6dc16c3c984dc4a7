pub mod subscription;
pub mod use_viewport_interaction;

pub use subscription::EventSubscription;
pub use use_viewport_interaction::use_viewport_interaction;
