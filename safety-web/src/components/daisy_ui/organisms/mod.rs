pub mod hero;
pub mod toast;

pub use hero::*;
pub use toast::*;
