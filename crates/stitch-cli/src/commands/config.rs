//! `stitch config`: inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::List if output.is_json() => output.json(&config)?,

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&render(&config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_renders_every_section() {
        let rendered = render(&AppConfig::default()).unwrap();
        assert!(rendered.contains("[generator]"));
        assert!(rendered.contains("migrations_dir = \"migrations\""));
        assert!(rendered.contains("[output]"));
    }

    #[test]
    fn rendered_config_reads_back() {
        let mut config = AppConfig::default();
        config.generator.migrations_dir = "db/migrate".into();
        let rendered = render(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
