use clap::Parser;

use lsb_stego::{
    cli::{Cli, Commands},
    handler::{handle_capacity, handle_decode, handle_encode},
    shell::run_shell,
};

/// 程序的主入口点
///
/// 初始化日志，解析命令行参数，并根据指定的子命令将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => handle_encode(args),
        Commands::Decode(args) => handle_decode(args),
        Commands::Capacity(args) => handle_capacity(args),
        Commands::Shell => {
            let stdin = std::io::stdin();
            run_shell(stdin.lock(), std::io::stdout())
        }
    }
}
