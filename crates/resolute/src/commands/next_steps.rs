//! Next-steps command implementation

use camino::Utf8PathBuf;
use clap::Args;
use resolute_core::generation;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `next-steps` subcommand.
#[derive(Args, Debug)]
pub struct NextStepsArgs {
    /// Generated steps (`-` for stdin)
    pub input: Utf8PathBuf,

    /// Treat the input as raw generated text (bulleted list ending in `-----`)
    #[arg(long)]
    pub raw: bool,
}

#[derive(Serialize)]
struct NextStepsOutput {
    steps: Vec<String>,
    dropped: usize,
}

/// Keep the well-formed next steps. No deduplication is applied.
#[instrument(name = "cmd_next_steps", skip_all, fields(input = %args.input, raw = args.raw))]
pub fn cmd_next_steps(
    args: NextStepsArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let content = super::read_input(&args.input, max_input)?;
    let items = if args.raw {
        generation::parse_generated_list(&content)
    } else {
        super::non_empty_lines(&content)
    };

    let steps = generation::filter_next_steps(&items);
    let output = NextStepsOutput {
        dropped: items.len() - steps.len(),
        steps,
    };
    debug!(kept = output.steps.len(), dropped = output.dropped, "executing next-steps command");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for step in &output.steps {
            println!("{step}");
        }
    }
    Ok(())
}
