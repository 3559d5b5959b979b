//! Number normalization and provider-result merging.

use crate::provider::ProviderValidation;
use lookup_client::{phone, LookupResult};

/// US country calling code.
pub const US_COUNTRY_CODE: &str = "1";

/// A requested number in the two shapes the relay needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNumber {
    /// Digits as submitted
    pub cleaned: String,
    /// Digits with the leading country code
    pub full: String,
}

impl NormalizedNumber {
    /// Strip non-digits and prefix the US country code unless already present.
    pub fn parse(raw: &str) -> Self {
        let cleaned = phone::clean(raw);
        let full = if cleaned.starts_with(US_COUNTRY_CODE) {
            cleaned.clone()
        } else {
            format!("{}{}", US_COUNTRY_CODE, cleaned)
        };

        Self { cleaned, full }
    }

    /// Result used wherever the provider leaves a field out.
    pub fn defaults(&self) -> LookupResult {
        LookupResult {
            valid: true,
            number: self.cleaned.clone(),
            local_format: format_local(&self.cleaned),
            international_format: format!("+{}", self.full),
            country_prefix: "+1".into(),
            country_code: "US".into(),
            country_name: "United States".into(),
            location: "Unknown".into(),
            carrier: "Unknown".into(),
            line_type: "Unknown".into(),
        }
    }
}

/// Format as `(DDD) DDD-DDDD`.
///
/// Accepts ten digits, or eleven with a leading `1`; anything else is
/// returned unchanged.
pub fn format_local(number: &str) -> String {
    let clean = phone::clean(number);

    let national = match clean.len() {
        10 => clean.as_str(),
        11 if clean.starts_with('1') => &clean[1..],
        _ => return number.to_string(),
    };

    format!(
        "({}) {}-{}",
        &national[..3],
        &national[3..6],
        &national[6..]
    )
}

/// Overlay provider fields onto the defaults for `number`.
///
/// A provider field wins when present and non-empty.
pub fn merge(provider: ProviderValidation, number: &NormalizedNumber) -> LookupResult {
    let defaults = number.defaults();

    LookupResult {
        valid: provider.valid,
        number: pick(provider.number, defaults.number),
        local_format: pick(provider.local_format, defaults.local_format),
        international_format: pick(provider.international_format, defaults.international_format),
        country_prefix: pick(provider.country_prefix, defaults.country_prefix),
        country_code: pick(provider.country_code, defaults.country_code),
        country_name: pick(provider.country_name, defaults.country_name),
        location: pick(provider.location, defaults.location),
        carrier: pick(provider.carrier, defaults.carrier),
        line_type: pick(provider.line_type, defaults.line_type),
    }
}

fn pick(value: Option<String>, default: String) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or(default)
}
