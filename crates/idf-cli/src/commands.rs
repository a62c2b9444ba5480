use anyhow::Result;

use idf_cli::pipeline::{PipelineConfig, PipelineOutcome, run_pipeline};
use idf_cli::summary::columns_table;

use crate::cli::RunArgs;

pub fn run_columns() -> Result<()> {
    println!("{}", columns_table());
    Ok(())
}

pub fn run_integrity(args: &RunArgs) -> Result<PipelineOutcome> {
    let config = PipelineConfig::new(&args.input, &args.output)
        .with_file_name(args.file_name.clone())
        .with_dry_run(args.dry_run);
    run_pipeline(&config)
}
