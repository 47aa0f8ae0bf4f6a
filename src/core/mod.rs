pub mod platform;
pub mod runner;
pub mod timing;

pub use runner::{CommandInvocation, run};
pub use timing::TimingRecord;
