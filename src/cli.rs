// src/cli.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;
use tag_depth_core::LineWindow;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "tag_depth",
    version = crate::VERSION,
    about = "div / DashboardLayout の入れ子の深さを行ごとに表示する診断ツール"
)]
pub struct Args {
    /// 走査するファイル
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// 出力する行範囲（N-M, N-, N; 複数指定可）。指定すると既定の範囲 541-609,1461- を置き換える
    #[arg(
        long = "window",
        value_name = "RANGE",
        value_delimiter = ',',
        conflicts_with = "all"
    )]
    pub windows: Vec<LineWindow>,

    /// すべての行を出力する
    #[arg(long)]
    pub all: bool,

    /// ログを詳細にする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
