use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fsw")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the inferred template and index for each filename
    Infer(InferArgs),
    /// Group filenames into imagesets sharing a template
    Group(GroupArgs),
    /// List every file on disk belonging to the same sequence as FRAME
    Expand(ExpandArgs),
}

#[derive(clap::Args, Debug)]
pub struct InferArgs {
    /// Filenames to analyse
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Emit one JSON object per name instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::Args, Debug)]
pub struct GroupArgs {
    /// Filenames to group; read from stdin, one per line, when omitted
    pub names: Vec<String>,

    /// Emit the imagesets as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::Args, Debug)]
pub struct ExpandArgs {
    /// A frame of the sequence to expand
    pub frame: PathBuf,

    /// Emit the paths as a JSON array instead of one per line
    #[arg(long)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
