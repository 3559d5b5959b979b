//! Lookup command - validates input, runs a quota-gated lookup and renders the result.

use crate::error::AppResult;
use crate::session::{LookupOutcome, LookupSession};
use lookup_client::{phone, LookupResult};

pub async fn run(session: &LookupSession, raw: &str) -> AppResult<String> {
    let digits = phone::validate_input(raw)?;

    let outcome = session.lookup(&digits).await?;
    Ok(render(&outcome, session.tracker().daily_limit()))
}

fn render(outcome: &LookupOutcome, daily_limit: u32) -> String {
    match outcome {
        LookupOutcome::Found { result, remaining } => render_result(result, *remaining),
        LookupOutcome::QuotaExhausted { resets_in } => upgrade_prompt(daily_limit, resets_in),
    }
}

fn render_result(result: &LookupResult, remaining: u32) -> String {
    let mut lines = vec![
        result.local_format.clone(),
        String::new(),
        format!("Carrier:       {}", result.carrier),
        format!("Location:      {}", result.location),
        format!("Line type:     {}", format_line_type(&result.line_type)),
        format!(
            "Country:       {} ({})",
            result.country_name, result.country_code
        ),
        format!("International: {}", result.international_format),
        String::new(),
    ];

    lines.push(match remaining {
        0 => "No free lookups remaining today".to_string(),
        1 => "1 free lookup remaining today".to_string(),
        n => format!("{} free lookups remaining today", n),
    });

    lines.join("\n")
}

fn upgrade_prompt(daily_limit: u32, resets_in: &str) -> String {
    format!(
        "You've used all {} free lookups for today.\n\
         Resets in {}\n\n\
         Upgrade to Premium for unlimited lookups.\n\
         Join the waitlist: phone-lookup waitlist join <EMAIL>",
        daily_limit, resets_in
    )
}

/// `mobile` -> `Mobile`, `toll_free` -> `Toll Free`; `Unknown` passes through.
pub fn format_line_type(line_type: &str) -> String {
    if line_type == "Unknown" {
        return line_type.to_string();
    }

    line_type
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
