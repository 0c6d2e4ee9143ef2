pub mod config;
pub mod core;
pub mod keyboard;
pub mod practice;

pub use crate::core::{add_jamo, classify, compose_all, handle_backspace, JamoKind};
pub use crate::practice::{keystrokes_for, PracticeSession};
