//! Init command - Write the built-in starter tree to a file

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    adapters::JsonFileRepository,
    cli::output::print_kv,
    ports::TreeRepository,
    tree::bootstrap,
};

#[derive(Parser, Debug)]
#[command(about = "Write the starter animal tree")]
pub struct InitArgs {
    /// Where to write the tree
    pub tree: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: InitArgs) -> Result<()> {
    if args.tree.exists() && !args.force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            args.tree.display()
        );
    }

    let root = bootstrap::animals();
    JsonFileRepository::new().save(&root, &args.tree)?;

    println!("✅ Tree written to {}", args.tree.display());
    print_kv("Questions", &root.question_count().to_string());
    print_kv("Animals", &root.animal_count().to_string());
    Ok(())
}
