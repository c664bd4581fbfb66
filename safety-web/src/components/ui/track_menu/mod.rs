mod card;
#[cfg(test)]
mod tests;
mod view;

pub use card::{TrackCard, TrackCardProps};
pub use view::{TrackMenu, TrackMenuProps};
