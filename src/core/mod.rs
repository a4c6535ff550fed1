pub mod cpu;
pub mod error;

pub use cpu::detect_cpu_count;
pub use error::{AppError, Result};
