//! Prompt command implementation

use clap::{Args, Subcommand};
use resolute_core::generation::{self, NEXT_STEPS_TEMPERATURE, PROMPT_SEED_COUNT, RESOLUTION_TEMPERATURE};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `prompt` subcommand.
#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Which prompt to build.
    #[command(subcommand)]
    pub kind: PromptKind,
}

/// Prompt kinds.
#[derive(Subcommand, Debug)]
pub enum PromptKind {
    /// Ask for resolutions similar to existing ones
    Resolutions {
        /// Existing resolutions; a random sample is quoted in the prompt
        #[arg(required = true)]
        seeds: Vec<String>,

        /// How many seeds to quote
        #[arg(long, default_value_t = PROMPT_SEED_COUNT)]
        sample: usize,
    },
    /// Ask for steps toward a goal
    NextSteps {
        /// The goal
        goal: String,
    },
}

#[derive(Serialize)]
struct PromptOutput {
    prompt: String,
    temperature: f64,
}

/// Print a generation prompt and its sampling temperature.
#[instrument(name = "cmd_prompt", skip_all)]
pub fn cmd_prompt(args: PromptArgs, global_json: bool) -> anyhow::Result<()> {
    let output = match args.kind {
        PromptKind::Resolutions { seeds, sample } => {
            let similar = generation::sample_seeds(&seeds, sample.max(1));
            debug!(sampled = similar.len(), "building resolution prompt");
            PromptOutput {
                prompt: generation::resolution_prompt(&similar),
                temperature: RESOLUTION_TEMPERATURE,
            }
        }
        PromptKind::NextSteps { goal } => PromptOutput {
            prompt: generation::next_steps_prompt(&goal),
            temperature: NEXT_STEPS_TEMPERATURE,
        },
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.prompt);
    }
    Ok(())
}
