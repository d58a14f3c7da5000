//! # 命令处理逻辑模块
//!
//! 包含处理 `encode`、`decode` 与 `capacity` 子命令的高级业务逻辑。
//! 本模块负责调用编解码核心、把核心错误转换为面向用户的消息，并报告结果。

use crate::cli::{CapacityArgs, DecodeArgs, EncodeArgs};
use crate::codec::{self, capacity_of};
use crate::error::StegoError;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;

/// 将核心错误包装为面向用户的 `anyhow::Error`，原始错误保留在错误链中。
///
/// 容量不足与文件故障使用不同的提示，调用方仍可通过 `downcast_ref::<StegoError>()` 区分。
fn user_error(err: StegoError) -> anyhow::Error {
    let message = match &err {
        StegoError::Capacity {
            required,
            available,
        } => format!(
            "Encoding failed! Target file too small to fit payload. \nRequired: {}, Available: {}",
            required.to_string().red().bold(),
            available.to_string().green().bold()
        ),
        StegoError::Io(_) | StegoError::Encoding(_) => {
            "Something went wrong with the files!".to_string()
        }
    };
    anyhow::Error::new(err).context(message)
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取载体或载荷文件，或无法写入输出文件。
/// * 载体没有足够的空间容纳载荷。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    codec::encode(&args.carrier, &args.payload, &args.output).map_err(user_error)?;

    println!(
        "The file has been successfully hidden and saved: {}",
        args.output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 恢复出的文件名为 `output_name` 加上图像中保存的扩展名。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取隐写图像，或图像中的数据不完整。
/// * 保存的扩展名不是合法的 UTF-8。
/// * 无法写入恢复的文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let target = codec::decode(&args.stego, &args.output_name).map_err(user_error)?;

    println!(
        "The file has been successfully recovered and saved: {}",
        target.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑：打印载体最多能隐藏的字节数。
///
/// # Errors
///
/// 无法读取载体文件的元数据时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let carrier_len = fs::metadata(&args.carrier)
        .with_context(|| {
            format!(
                "Unable to read carrier file: {}",
                args.carrier.to_string_lossy().red().bold()
            )
        })?
        .len();

    println!(
        "{} can hide up to {} bytes",
        args.carrier.to_string_lossy().green().bold(),
        capacity_of(carrier_len).to_string().green().bold()
    );

    Ok(())
}
