use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shalloc", version, about = "Shadow share allocation assistant CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Reset,
    Grades {
        #[command(subcommand)]
        command: GradeCommands,
    },
    Value {
        #[command(subcommand)]
        command: ValueCommands,
    },
    Roster {
        #[command(subcommand)]
        command: RosterCommands,
    },
    Params {
        #[command(subcommand)]
        command: ParamCommands,
    },
    Preview,
    Compute,
    Show,
    Export {
        #[arg(long, help = "Write the report to a file instead of stdout")]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum GradeCommands {
    List,
    Set {
        grade: String,
        #[arg(long)]
        units: f64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ValueCommands {
    Set { amount: f64 },
}

#[derive(Subcommand, Debug)]
pub enum RosterCommands {
    Import { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum ParamCommands {
    Set {
        #[arg(long)]
        profit: Option<f64>,
        #[arg(long)]
        reserve_ratio: Option<f64>,
        #[arg(long)]
        share_percent: Option<f64>,
        #[arg(long)]
        treasury_reserve: Option<f64>,
    },
}
