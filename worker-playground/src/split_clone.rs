use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use worker_core::clone_kind::CloneKind;
use worker_core::command::CloneCommand;
use worker_core::config::clone_config::CloneConfig;
use worker_core::config::ConfigBuilder;
use worker_core::ext::init_logger_with_filter;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long)]
    kind: Option<CloneKind>,
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let Args { kind, config, log } = Args::parse();
    init_logger_with_filter(log.as_str());
    let mut builder = CloneConfig::builder();
    if let Some(path) = config {
        info!("load clone config from {}", path.display());
        builder = builder.add_toml_file(&path)?;
    }
    let command = CloneCommand::new(builder.build()?);
    let invocation = command.dispatch(kind)?;
    let (kind, initializer) = invocation.into_parts();
    info!("{} initializer {:?} ready for clone runner", kind, initializer);
    Ok(())
}
