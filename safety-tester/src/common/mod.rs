pub mod loader;
pub mod util;

pub use loader::FileLoader;
pub use util::{parse_seeds, split_csv};
