//! 결과 표 단위 정의 모음.

pub mod display;

pub use display::DisplayUnit;
