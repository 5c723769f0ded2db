//! Inspect command - classify a single card without moving it

use crate::cli::error::HelpfulError;
use cardsort::sorter::{Classifier, Registry};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the inspect command
#[derive(Debug)]
pub struct InspectArgs {
    pub file: PathBuf,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    file: &'a Path,
    product: Option<&'static str>,
    category: Option<&'static str>,
}

/// Execute the inspect command
pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    if !args.file.is_file() {
        return Err(HelpfulError::file_not_found(&args.file).into());
    }

    let registry = Registry::builtin()?;
    let classifier = Classifier::new(&registry)?;

    let data = fs::read(&args.file)?;
    let classification = classifier.classify(&data);

    if args.json {
        let report = InspectReport {
            file: &args.file,
            product: classification.map(|c| c.product),
            category: classification.map(|c| c.category),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match classification {
            Some(c) => println!("{}: {}/{}", args.file.display(), c.product, c.category),
            None => println!("{}: no match", args.file.display()),
        }
    }

    Ok(())
}
