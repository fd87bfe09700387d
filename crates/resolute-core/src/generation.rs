//! Prompt building and output parsing for the generation backend.
//!
//! The backend itself is an opaque text-completion service. These helpers
//! build the few-shot prompts sent to it and turn its free-form reply into
//! candidate phrases for [`DedupEngine`](crate::dedup::DedupEngine).

use rand::seq::IndexedRandom;

use crate::dedup::MAX_CANDIDATES;
use crate::quality;

/// Separator between examples in prompts and generated output.
pub const SEPARATOR: &str = "-----";

/// Default sampling temperature for resolution suggestions.
pub const RESOLUTION_TEMPERATURE: f64 = 0.8;

/// Default sampling temperature for next-step suggestions.
pub const NEXT_STEPS_TEMPERATURE: f64 = 0.5;

/// Number of seed phrases quoted in a resolution prompt.
pub const PROMPT_SEED_COUNT: usize = 2;

const RESOLUTION_EXAMPLES: &str = r#"Here are some New Year's Resolutions similar to "Improve my social anxiety":
- Improve my mental health
- Be a more positive person
- Go outside more
- Make more friends
-----
Here are some New Year's Resolutions similar to "Limit time I spend on screens" and "Stop playing video games":
- Spend less time on social media
- Get more exercise
- Read more books
- Get more sleep
-----
Here are some New Year's Resolutions similar to "Save more money":
- Ask for a raise
- Eat out less
- Find a purpose in life
-----
Here are some New Year's Resolutions similar to "Find a physical activity I enjoy" and "Eat healthier food":
- Sit less and move more
- Get more quality sleep
- Cook more meals at home
- Spend more time outdoors
-----
"#;

const NEXT_STEPS_EXAMPLES: &str = "Goal: Spend less money
Steps to take:
- Create a budget for the year
- Stop relying on credit cards
- Track all of your spending, including small purchases
- Plan your meals and shopping each week to avoid eating out
-----
Goal: Lose weight
Steps to take:
- Get a gym membership
- Hire a personal trainer to improve your form
- Choose a diet and stick to it
- Be consistent
-----
Goal: Play fewer video games
Steps to take:
- Spend more time outside with friends and family
- Limit your screen time
- Uninstall games you spend too much time on
-----
";

/// Join items into an English list.
///
/// `["a"]` gives `a`, `["a", "b"]` gives `a and b`, and three or more give
/// `a, b, and c` (or `a, b and c` without the Oxford comma).
pub fn comma_list<S: AsRef<str>>(items: &[S], oxford: bool) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init.iter().map(|s| s.as_ref()).collect::<Vec<&str>>().join(", ");
            let conjunction = if oxford && items.len() > 2 {
                ", and "
            } else {
                " and "
            };
            format!("{head}{conjunction}{}", last.as_ref())
        }
    }
}

/// Pick up to `count` distinct seeds at random.
pub fn sample_seeds<S: AsRef<str>>(seeds: &[S], count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    seeds
        .choose_multiple(&mut rng, count.min(seeds.len()))
        .map(|s| s.as_ref().to_string())
        .collect()
}

/// Build the prompt asking for resolutions similar to `similar`.
pub fn resolution_prompt<S: AsRef<str>>(similar: &[S]) -> String {
    let quoted: Vec<String> = similar
        .iter()
        .map(|s| format!("\"{}\"", s.as_ref()))
        .collect();
    format!(
        "{RESOLUTION_EXAMPLES}Here are some New Year's Resolutions similar to {}:",
        comma_list(&quoted, true)
    )
}

/// Build the prompt asking for steps toward `goal`.
pub fn next_steps_prompt(goal: &str) -> String {
    format!("{NEXT_STEPS_EXAMPLES}Goal: {goal}\nSteps to take:")
}

/// Split raw generated text into candidate phrases.
///
/// Output without a separator is treated as runaway generation and yields
/// nothing. Otherwise only the block before the first separator is used:
/// one phrase per non-empty line, bullets and leading whitespace stripped,
/// at most [`MAX_CANDIDATES`] phrases.
pub fn parse_generated_list(text: &str) -> Vec<String> {
    let Some((block, _)) = text.split_once(SEPARATOR) else {
        tracing::debug!("generated text has no separator");
        return Vec::new();
    };

    block
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| strip_bullet(line).to_string())
        .take(MAX_CANDIDATES)
        .collect()
}

/// Strip a leading `-` bullet and surrounding leading whitespace.
fn strip_bullet(line: &str) -> &str {
    let line = line.strip_prefix('-').unwrap_or(line);
    line.trim_start()
}

/// Keep the well-formed next-step suggestions, in order.
///
/// Next steps are not deduplicated; only the stricter punctuation check
/// ([`quality::is_clean_step`]) applies.
pub fn filter_next_steps<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.as_ref())
        .filter(|item: &&str| quality::is_clean_step(item))
        .map(str::to_string)
        .collect()
}
