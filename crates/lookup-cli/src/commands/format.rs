//! Format command - shows how input is masked as it is typed.

use lookup_client::phone;

pub fn run(input: &str) -> String {
    let formatted = phone::format_as_typed(input);
    let verdict = if phone::is_valid(input) {
        "valid"
    } else {
        "incomplete"
    };

    format!("{} ({})", formatted, verdict)
}
