mod cli;

use clap::Parser;
use cli::{Args, Commands};
use eyre::Result;
use framesweep::{find_matching_frames, group_by_template, infer_template};
use std::io::BufRead;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let verbose = match &args.command {
        Commands::Infer(a) => a.verbose,
        Commands::Group(a) => a.verbose,
        Commands::Expand(a) => a.verbose,
    };

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    // diagnostics on stderr so piped stdout carries data only
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::Infer(a) => run_infer(a),
        Commands::Group(a) => run_group(a),
        Commands::Expand(a) => run_expand(a),
    }
}

fn run_infer(args: cli::InferArgs) -> Result<()> {
    for name in &args.names {
        let inferred = infer_template(name);
        if args.json {
            let line = match &inferred {
                Some((template, index)) => serde_json::json!({
                    "name": name,
                    "template": template.to_string(),
                    "index": index,
                }),
                None => serde_json::json!({
                    "name": name,
                    "template": null,
                    "index": null,
                }),
            };
            println!("{line}");
        } else {
            match &inferred {
                Some((template, index)) => println!("{name} -> {template} (index {index})"),
                None => println!("{name} -> no template"),
            }
        }
    }
    Ok(())
}

fn run_group(args: cli::GroupArgs) -> Result<()> {
    let names = if args.names.is_empty() {
        read_names_from_stdin()?
    } else {
        args.names
    };

    let sets = group_by_template(&names);
    if args.json {
        println!("{}", serde_json::to_string(&sets)?);
    } else {
        for set in &sets {
            let indices = set
                .indices()
                .iter()
                .map(|index| match index {
                    Some(i) => i.to_string(),
                    None => "-".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            println!("{}: {}", set.key(), indices);
        }
    }
    Ok(())
}

fn run_expand(args: cli::ExpandArgs) -> Result<()> {
    let frames = find_matching_frames(&args.frame)?;
    if args.json {
        println!("{}", serde_json::to_string(&frames)?);
    } else {
        for frame in &frames {
            println!("{}", frame.display());
        }
    }
    Ok(())
}

fn read_names_from_stdin() -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if !line.is_empty() {
            names.push(line);
        }
    }
    Ok(names)
}
