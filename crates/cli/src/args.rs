// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "file_stats",
    version = crate::VERSION,
    about = "ファイルサイズ/行数/単語数/文字数の解析ツール"
)]
pub struct Args {
    /// 解析するファイル（複数指定時は順番に解析）
    #[arg(required = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub behavior: BehaviorArgs,
}

#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// 出力フォーマット
    #[arg(short, long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 最長単語も表示する
    #[arg(long, help_heading = "出力")]
    pub longest_word: bool,
}

#[derive(clap::Args, Debug)]
pub struct BehaviorArgs {
    /// 最初のエラーで中断する
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// ログ出力を詳細にする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
