use std::error::Error;

use clap::Args;
use marquee_ingest::validate_columns;

use super::InputArgs;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: &ValidateArgs) -> Result<(), Box<dyn Error>> {
    let config = args.input.config()?;
    let loaded = args.input.load(&config)?;
    match validate_columns(&loaded.table) {
        Ok(()) => {
            println!(
                "ok: {} rows, {} columns ({})",
                loaded.table.len(),
                loaded.table.columns.len(),
                loaded.format.as_str()
            );
            Ok(())
        }
        Err(err) => {
            println!("missing required columns: {}", err.missing.join(", "));
            Err(Box::new(err))
        }
    }
}
