//! The ranking prompt sent to every model.
//!
//! The closing template asks for a `FINAL RANKING:` block, which is exactly
//! what the structured-block extraction stage looks for.

use std::fmt::Write;

use crate::ItemSet;

const INTRO: &str = "I'm conducting research on what factors determine an animal's moral \
importance. I'd like you to rank the importance of the following characteristics for \
determining moral consideration:";

/// Render the ranking prompt for `items`.
///
/// Items are grouped under their category in order of first appearance;
/// uncategorized items are listed after the groups.
pub fn ranking_prompt(items: &ItemSet) -> String {
    let n = items.len();
    let mut prompt = String::new();

    prompt.push_str(INTRO);
    prompt.push_str("\n\n");

    let mut categories: Vec<&str> = Vec::new();
    for item in items {
        if let Some(category) = item.category.as_deref()
            && !categories.contains(&category)
        {
            categories.push(category);
        }
    }

    for category in &categories {
        let _ = writeln!(prompt, "{} proxies:", capitalize(category));
        for item in items.iter().filter(|i| i.category.as_deref() == Some(*category)) {
            push_item_line(&mut prompt, &item.label, item.description.as_deref());
        }
        prompt.push('\n');
    }

    let uncategorized: Vec<_> = items.iter().filter(|i| i.category.is_none()).collect();
    if !uncategorized.is_empty() {
        for item in uncategorized {
            push_item_line(&mut prompt, &item.label, item.description.as_deref());
        }
        prompt.push('\n');
    }

    let labels: Vec<&str> = items.labels().collect();
    let _ = write!(
        prompt,
        "Please rank these {} factors ({}) in order of importance for determining an animal's \
         moral consideration. Rank them from 1 (most important) to {} (least important).\n\n",
        count_word(n),
        labels.join(", "),
        n
    );

    prompt.push_str(
        "After your reasoning, please provide your final answer in the following exact format, \
         boxed:\n\n---\nFINAL RANKING:\n",
    );
    for position in 1..=n {
        let _ = writeln!(prompt, "{position}. [proxy name]");
    }
    prompt.push_str("---\n\n");

    let quoted: Vec<String> = labels.iter().map(|label| format!("\"{label}\"")).collect();
    let _ = write!(prompt, "Use the exact proxy names: {}.", join_with_or(&quoted));

    prompt
}

fn push_item_line(prompt: &mut String, label: &str, description: Option<&str>) {
    match description {
        Some(description) => {
            let _ = writeln!(prompt, "- {}: {}", capitalize(label), description);
        }
        None => {
            let _ = writeln!(prompt, "- {}", capitalize(label));
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn count_word(n: usize) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS.get(n).map_or_else(|| n.to_string(), |w| (*w).to_string())
}

/// `a`, `a or b`, `a, b, or c`.
fn join_with_or(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}
