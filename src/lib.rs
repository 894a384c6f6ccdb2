//! # lsb_trail 库
//!
//! 本库包含基于像素遍历的 LSB 隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod constants;
pub mod handler;
pub mod steganography;
pub mod traversal;
