mod restart;

pub use restart::run_restart;
