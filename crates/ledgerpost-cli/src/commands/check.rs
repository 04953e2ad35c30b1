//! Seed validation command

use std::path::Path;

use anyhow::{bail, Context, Result};
use ledgerpost_core::{seed, validate_insights, SeedIssue};

/// Validate the seed, returning the issues found. Errors only if the seed
/// cannot be read or parsed.
pub fn check_seed(path: Option<&Path>) -> Result<Vec<SeedIssue>> {
    let insights = match path {
        Some(path) => seed::load_insights(path)
            .with_context(|| format!("Failed to load seed {}", path.display()))?,
        None => seed::embedded_insights().context("Built-in insight seed is invalid")?,
    };
    seed::embedded_services().context("Built-in services catalog is invalid")?;

    Ok(validate_insights(&insights))
}

pub fn cmd_check(path: Option<&Path>, json: bool) -> Result<()> {
    let issues = check_seed(path)?;

    if json {
        let report = serde_json::json!({
            "ok": issues.is_empty(),
            "issues": issues
                .iter()
                .map(|i| serde_json::json!({"fatal": i.is_fatal(), "message": i.to_string()}))
                .collect::<Vec<_>>(),
        });
        super::print_json(&report)?;
    } else {
        let source = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in seed".to_string());
        println!("🔍 Checking {}...", source);

        for issue in &issues {
            if issue.is_fatal() {
                println!("   ❌ {}", issue);
            } else {
                println!("   ⚠️  {}", issue);
            }
        }

        if issues.is_empty() {
            println!("✅ Seed is valid");
        }
    }

    if !issues.is_empty() {
        let fatal = issues.iter().filter(|i| i.is_fatal()).count();
        bail!(
            "Seed has {} issue(s), {} of which stop the server from starting",
            issues.len(),
            fatal
        );
    }

    Ok(())
}
