pub mod confirmation;
pub mod dispatch;
pub mod enquire;
pub mod listings;
pub mod schema;
pub mod show;
