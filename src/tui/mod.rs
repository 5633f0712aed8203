pub mod activity_list;
pub mod form;
pub mod model;
pub mod update;
pub mod view;

// Re-exports for convenience
pub use activity_list::*;
pub use form::*;
pub use model::*;
pub use update::*;
pub use view::*;
