use super::Context;
use anyhow::{Context as _, Result, anyhow};
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Display current merged configuration
    Show {
        /// Output format: json, toml, yaml
        #[arg(short, long, default_value = "toml")]
        format: String,

        /// Only show one section or key, e.g. `search` or `search.anchoring`
        #[arg(short, long, value_name = "KEY")]
        section: Option<String>,
    },
}

pub fn execute(args: &ConfigArgs, ctx: &Context) -> Result<()> {
    match &args.command {
        ConfigCommand::Show { format, section } => {
            ctx.output
                .verbose(&format!("Rendering merged configuration as {format}"));
            let merged = match section {
                Some(key) => ctx
                    .config
                    .get_section(key)
                    .with_context(|| format!("Configuration key '{key}' not found"))?,
                None => ctx.config.get_full_config()?,
            };

            // Scalars print bare; tables and lists go through the serializer
            if let Some(scalar) = scalar_text(&merged) {
                println!("{scalar}");
                return Ok(());
            }

            let rendered = match format.to_lowercase().as_str() {
                "json" => serde_json::to_string_pretty(&merged)?,
                "toml" => toml::to_string_pretty(&merged)?,
                "yaml" | "yml" => serde_yml::to_string(&merged)?,
                _ => {
                    return Err(anyhow!(
                        "Unsupported format: {}. Use json, toml, or yaml",
                        format
                    ));
                }
            };
            println!("{}", rendered.trim_end());
        }
    }

    Ok(())
}

fn scalar_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
