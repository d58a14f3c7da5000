//! # lsb_stego 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：`codec` 提供编码与解码入口，
//! 其余模块负责比特引擎、容器字段以及命令行外壳。

// 声明库包含的所有模块。

pub mod cli;
pub mod codec;
pub mod constants;
pub mod container;
pub mod error;
pub mod handler;
pub mod shell;
pub mod steganography;

pub use codec::{decode, encode};
pub use error::{Result, StegoError};
