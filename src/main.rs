mod cli;
mod error;
mod model;
mod prompt;
mod session;
mod store;
mod ui;

use chrono::Local;
use clap::Parser;

use cli::{Cli, Commands};
use prompt::Console;
use session::Session;

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 无子命令：默认进入交互会话
    let command = cli.command.unwrap_or(Commands::Session);

    match command {
        Commands::Session => run_session(),
    }
}

fn run_session() {
    let today = Local::now().date_naive();
    let tasks = model::seed_tasks(today);
    let mut session = Session::new(Console::stdio(), tasks, today);

    // 正常退出走菜单 [0]；只有控制台 I/O 失败才会走到这里
    if let Err(e) = session.run() {
        eprintln!("Session ended: {}", e);
        std::process::exit(1);
    }
}
