//! `postcraft plan` command implementation.

use std::path::PathBuf;

use clap::Args;
use postcraft_images::InsertionPlan;

use super::input::load_content;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the plan command.
#[derive(Args)]
pub(crate) struct PlanArgs {
    /// Article to inspect: a JSON backend response or a markdown file.
    input: PathBuf,

    /// Number of images to place.
    #[arg(short = 'n', long, default_value_t = 3)]
    count: usize,

    /// Enable verbose output (show detailed logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PlanArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let content = load_content(&self.input)?;
        let body = content.content.replace("\r\n", "\n");
        let lines: Vec<&str> = body.split('\n').collect();
        let plan = InsertionPlan::compute(&lines, self.count);

        output.plan(&self.input, lines.len(), &plan);
        output.appended_images(self.count, &plan);

        Ok(())
    }
}
