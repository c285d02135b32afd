mod runner;

pub use runner::Runner;
