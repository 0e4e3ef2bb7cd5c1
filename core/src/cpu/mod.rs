// Re-export state types
pub mod state;
pub use state::{CpuStateTrait, FlagState, TmState};

// The TM CPU core
pub mod tm;
pub use tm::Tm;
