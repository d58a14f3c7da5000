//! # 错误类型模块
//!
//! 编解码核心返回的错误。容量不足与 I/O 故障是两种不同的变体，
//! 调用方可以据此区分“载体太小”和“文件损坏”。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// 载荷无法放入载体。`required` 为载荷所需的比特数，`available` 为载体扣除固定开销后的字节数。
    #[error("Target file too small to fit payload (required: {required}, available: {available})")]
    Capacity { required: u64, available: u64 },

    /// 打开、读取或写入任一文件失败，包括解码时载体字节提前耗尽。
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// 扩展名字段不是合法的 UTF-8。
    #[error("Extension field is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, StegoError>;
