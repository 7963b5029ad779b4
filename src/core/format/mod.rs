//! # 계수 텍스트 형식
//!
//! 채널당 한 줄, R → G → B 순서:
//!
//! ```text
//! DCT_R = "v0,v1,...,v4095"
//! DCT_G = "..."
//! DCT_B = "..."
//! ```

pub mod writer;
pub mod parser;

pub use writer::*;
pub use parser::*;
