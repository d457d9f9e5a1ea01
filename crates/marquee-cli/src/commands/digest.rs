use std::error::Error;

use clap::Args;
use marquee_rank::{analyze_loaded, report_digest};

use super::InputArgs;

#[derive(Args, Debug)]
pub struct DigestArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: &DigestArgs) -> Result<(), Box<dyn Error>> {
    let config = args.input.config()?;
    let loaded = args.input.load(&config)?;
    let report = analyze_loaded(&loaded, &config.analysis)?;
    println!("{}", report_digest(&report)?);
    Ok(())
}
