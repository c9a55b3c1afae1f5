//! 태양광 자가소비/판매 경제성 계산 모듈 모음.

pub mod engine;
pub mod fields;
pub mod inputs;

pub use engine::*;
pub use fields::*;
pub use inputs::*;
