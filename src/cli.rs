//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 交互式 shell 的每一行输入也复用这里的参数结构。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，可将任意文件隐藏在 BMP 图像的像素数据中，并在之后恢复。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，可将任意文件隐藏在 BMP 图像的像素数据中，并在之后恢复。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将文件隐藏到载体图像中。
    Encode(EncodeArgs),

    /// 从隐写图像中恢复文件。
    Decode(DecodeArgs),

    /// 显示载体图像最多能隐藏多少字节。
    Capacity(CapacityArgs),

    /// 启动交互式命令行。
    Shell,
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用于隐写的载体图像 (BMP)。
    pub carrier: PathBuf,

    /// 要隐藏的文件，其扩展名会一并保存。
    pub payload: PathBuf,

    /// 隐写完成后的输出图像路径，已存在时会被覆盖。
    pub output: PathBuf,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏文件的图像路径。
    pub stego: PathBuf,

    /// 恢复文件的路径 (不含扩展名)，扩展名从图像中读取。
    pub output_name: PathBuf,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 载体图像路径。
    pub carrier: PathBuf,
}
