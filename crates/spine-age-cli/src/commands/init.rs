//! The `spine-age init` command.

use std::path::Path;

use anyhow::Result;

use spine_age_core::config::LOCAL_CONFIG_FILE;

pub fn execute() -> Result<()> {
    if Path::new(LOCAL_CONFIG_FILE).exists() {
        println!("{LOCAL_CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(LOCAL_CONFIG_FILE, SAMPLE_CONFIG)?;
        println!("Created {LOCAL_CONFIG_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {LOCAL_CONFIG_FILE} to choose where logs and reports go");
    println!("  2. Run: spine-age questions");
    println!("  3. Run: spine-age assess --age 35 --email you@example.com --report");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# spine-age configuration

# Estimator table: "age-adjusted" (default) or "classic"
policy = "age-adjusted"

# Directory for per-email progress logs (user_progress_<email>.txt)
log_dir = "progress"

# Directory for Spine_Age_Report.pdf / Spine_Age_Report.html
output_dir = "reports"

# Report documents written by `assess --report`: "pdf", "html" or "all"
format = "pdf"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use spine_age_core::config::SpineAgeConfig;

    #[test]
    fn sample_config_parses() {
        let config: SpineAgeConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.log_dir, std::path::PathBuf::from("progress"));
    }
}
