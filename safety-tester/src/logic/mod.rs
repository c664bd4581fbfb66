pub mod checks;
pub mod policy;
pub mod reports;
pub mod runner;
pub mod tester;

pub use checks::Check;
pub use policy::Strategy;
pub use tester::{CheckResult, QuizTester};
