mod commands;
mod terminal;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use commands::{Command, HELP};
use reviewdesk_core::{ConsoleBuilder, ConsoleConfig, UiEvent, ViewController};
use terminal::{TerminalRenderer, notes_block};

#[derive(Debug, Parser)]
#[command(
    name = "reviewdesk",
    version,
    about = "Review console: local review notes and the task list from the tasks API"
)]
struct Args {
    /// 設定ファイル（なければ既定値で起動）
    #[arg(long, short, default_value = "reviewdesk.toml")]
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // (A) 設定（--config、省略時はカレントの reviewdesk.toml）
    let Args {
        config: config_path,
    } = Args::parse();
    let config = ConsoleConfig::load_or_default(&config_path)?;

    // (B) ログは stderr へ（stdout は画面描画用）
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(
        config = %config_path.display(),
        api = %config.api_base_url,
        "starting reviewdesk"
    );

    // (C) 組み立てと起動
    let initial_note = config.initial_note.clone();
    let controller = ConsoleBuilder::new(config).build(TerminalRenderer::stdout())?;
    controller.start(&initial_note);
    println!("{HELP}");

    // (D) 1 行 = 1 イベント
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !run_command(&controller, commands::parse(&line)).await {
            break;
        }
    }

    tracing::info!("bye");
    Ok(())
}

/// コマンドを 1 つ処理する。終了なら false
async fn run_command(
    controller: &ViewController<TerminalRenderer<std::io::Stdout>>,
    command: Command,
) -> bool {
    match command {
        Command::Event(event) => controller.dispatch(event).await,
        Command::Note(text) => {
            controller.dispatch(UiEvent::NoteInput(text)).await;
            controller.dispatch(UiEvent::NoteSubmitted).await;
        }
        Command::Notes => println!("{}", notes_block(&controller.notes()).trim_end()),
        Command::Help => println!("{HELP}"),
        Command::Quit => return false,
        Command::Empty => {}
        Command::Unknown(line) => println!("unknown command: {line} (help で一覧)"),
    }
    true
}
