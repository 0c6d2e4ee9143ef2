//! 두벌식 가상 자판 매핑 모듈

pub mod layout;

pub use layout::{jamo_to_key, key_to_jamo, shift_jamo};
