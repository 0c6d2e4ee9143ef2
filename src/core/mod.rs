//! 한글 조합 엔진 핵심 모듈

pub mod composer;
pub mod jamo;
pub mod unicode;

pub use composer::{add_jamo, compose_all, handle_backspace};
pub use jamo::{classify, JamoKind};
