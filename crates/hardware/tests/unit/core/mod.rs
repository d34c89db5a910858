
/// Execution tests.
pub mod cpu;
