//! # 交互式命令行模块
//!
//! 逐行读取命令并执行，直到遇到 `exit` 或输入结束。
//! 每一行按空白切分后交给 `clap` 解析，参数结构与一次性子命令相同。

use crate::cli::{CapacityArgs, DecodeArgs, EncodeArgs};
use crate::handler::{handle_capacity, handle_decode, handle_encode};
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::{BufRead, Write};

const USAGE: &str = "encode <file-used-for-encoding> <file-to-be-encoded> <output-file>
decode <encoded-file> <output-file-name>
capacity <file-used-for-encoding>
exit - to exit the program.";

const KNOWN_COMMANDS: [&str; 4] = ["encode", "decode", "capacity", "exit"];

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Parser, Debug)]
enum ShellCommand {
    Encode(EncodeArgs),
    Decode(DecodeArgs),
    Capacity(CapacityArgs),
    Exit,
}

/// 运行交互式命令行，从 `input` 读取命令，把提示与错误写入 `out`。
///
/// 单条命令失败不会终止循环。
///
/// # Errors
///
/// 只有读取 `input` 或写入 `out` 失败时才返回错误。
pub fn run_shell<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<()> {
    writeln!(out, "Welcome to the LSB steganography shell!")?;
    writeln!(out, "\nSupported commands:\n{USAGE}\n")?;

    let mut line = String::new();
    loop {
        writeln!(out, "Enter command:")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&name) = tokens.first() else {
            continue;
        };

        let command = match ShellLine::try_parse_from(tokens.iter().copied()) {
            Ok(parsed) => parsed.command,
            Err(_) if KNOWN_COMMANDS.contains(&name) => {
                writeln!(out, "{}\n", "Invalid number of arguments!".red())?;
                continue;
            }
            Err(_) => {
                writeln!(
                    out,
                    "{} Supported commands:\n{USAGE}\n",
                    "Invalid command!".red()
                )?;
                continue;
            }
        };

        let result = match command {
            ShellCommand::Encode(args) => {
                writeln!(out, "Encoding...")?;
                handle_encode(args)
            }
            ShellCommand::Decode(args) => {
                writeln!(out, "Decoding...")?;
                handle_decode(args)
            }
            ShellCommand::Capacity(args) => handle_capacity(args),
            ShellCommand::Exit => break,
        };

        if let Err(err) = result {
            writeln!(out, "{err:#}\n")?;
        }
    }

    Ok(())
}
