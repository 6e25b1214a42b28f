//! Validate command - Check a tree file against the document grammar

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    Error,
    app::App,
    cli::output::{print_kv, print_section},
};

#[derive(Parser, Debug)]
#[command(about = "Check that a tree file can be loaded")]
pub struct ValidateArgs {
    /// Tree file to check
    pub tree: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    let codec = App::new().codec(&args.tree);

    match codec.try_load() {
        Ok(root) => {
            print_section(&format!("{} is valid", args.tree.display()));
            print_kv("Questions", &root.question_count().to_string());
            print_kv("Animals", &root.animal_count().to_string());
            print_kv("Depth", &root.depth().to_string());
            Ok(())
        }
        Err(Error::Schema(schema)) => {
            print_section(&format!("{} is not a valid tree", args.tree.display()));
            print_kv("Path", schema.path());
            print_kv("Problem", &schema.to_string());
            bail!("schema validation failed at {}", schema.path())
        }
        Err(error) => Err(error.into()),
    }
}
