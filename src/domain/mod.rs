pub mod event;
pub mod events;

// Re-exports for convenience
pub use event::*;
pub use events::*;
