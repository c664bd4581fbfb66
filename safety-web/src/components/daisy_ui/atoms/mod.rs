pub mod badge;
pub mod button;
pub mod progress;

pub use badge::*;
pub use button::*;
pub use progress::*;
