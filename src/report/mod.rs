//! Plain-text reporting for fit results.
//!
//! Formatting lives here so the numeric code stays free of presentation
//! concerns.

use crate::data::MaskedLineDataset;
use crate::fit::FitResult;

/// Summary of a fit: data coverage, component parameters and fit quality.
pub fn format_fit_summary(result: &FitResult, masked: &MaskedLineDataset) -> String {
    let fit = result.fit();
    let mut out = String::new();

    out.push_str("=== Line profile fit ===\n");
    out.push_str(&format!(
        "Pixels: n={} | unmasked={} | masked={}\n",
        masked.len(),
        masked.mask().unmasked_count(),
        masked.mask().masked_count(),
    ));
    out.push_str(&format!("Best trial: #{}\n", result.trial));

    out.push_str("\nComponents:\n");
    for c in result.instance.components() {
        let kind = c.profile.kind();
        let params = kind
            .param_names()
            .iter()
            .zip(c.profile.params())
            .map(|(name, value)| format!("{name}={value:.4}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("  {:<14} {:<12} {}\n", c.name, kind.display_name(), params));
    }

    out.push_str("\nFit quality:\n");
    out.push_str(&format!("  chi_squared         = {:.4}\n", fit.chi_squared()));
    out.push_str(&format!("  reduced_chi_squared = {:.4}\n", fit.reduced_chi_squared()));
    out.push_str(&format!("  noise_normalization = {:.4}\n", fit.noise_normalization()));
    out.push_str(&format!("  log_likelihood      = {:.4}\n", result.log_likelihood));

    out
}
