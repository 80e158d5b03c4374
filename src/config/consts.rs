/// Number of integers in the demo sequence
pub const DEFAULT_SEQUENCE_LENGTH: usize = 10;
/// Outer loop bound of the strided write pass
pub const DEFAULT_ITERATIONS: usize = 10;
/// Inner loop step; larger than the sequence, so only index 0 is visited
pub const DEFAULT_STRIDE: usize = 1024;
/// Largest sequence a loaded workload may allocate (1Mi elements)
pub const MAX_SEQUENCE_LENGTH: usize = 1 << 20;
/// Largest outer loop bound a loaded workload may request (64Ki passes)
pub const MAX_ITERATIONS: usize = 1 << 16;
/// Filter directive for the stderr log subscriber
pub const DEFAULT_LOG_FILTER: &str = "warn";
