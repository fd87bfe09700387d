//! Command implementations.

use std::io::Read;
use std::sync::Arc;

use anyhow::Context;
use camino::Utf8Path;
use resolute_core::{Config, EmbeddedLexicon, FileLexicon, Lexicon, Normalizer};

pub mod dedup;
pub mod info;
pub mod next_steps;
pub mod normalize;
pub mod prompt;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod similarity;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() != "-" {
        return read_input_file(path, max_bytes);
    }

    let mut content = String::new();
    let stdin = std::io::stdin();
    match max_bytes {
        Some(max) => {
            stdin
                .lock()
                .take(max as u64 + 1)
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            if content.len() > max {
                anyhow::bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            stdin
                .lock()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
        }
    }
    Ok(content)
}

/// Split a list file into trimmed, non-empty lines.
pub fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the normalizer described by `config`.
///
/// Uses the embedded lexicon unless `lexicon_file` is set.
pub async fn build_normalizer(config: &Config) -> anyhow::Result<Normalizer> {
    let lexicon: Arc<dyn Lexicon> = match config.lexicon_file {
        Some(ref path) => Arc::new(
            FileLexicon::load(path)
                .await
                .with_context(|| format!("failed to load lexicon file {path}"))?,
        ),
        None => Arc::new(EmbeddedLexicon::new()),
    };
    tracing::debug!(lexicon = lexicon.name(), "normalizer ready");
    Ok(Normalizer::new(lexicon))
}
