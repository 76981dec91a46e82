//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let banner = &ctx.config.banner;
    ctx.output.header("Current Configuration");

    ctx.output.info("[banner]");
    ctx.output.kv("max_height", &banner.max_height);

    ctx.output.info("[banner.labels]");
    ctx.output.kv("trending", &banner.labels.trending);
    ctx.output.kv("play", &banner.labels.play);
    ctx.output.kv("more_info", &banner.labels.more_info);

    ctx.output.info("[banner.crossfade]");
    ctx.output
        .kv("duration_ms", &banner.crossfade.duration_ms.to_string());
    ctx.output
        .kv("enter_scale", &banner.crossfade.enter_scale.to_string());
    ctx.output
        .kv("exit_scale", &banner.crossfade.exit_scale.to_string());
    ctx.output.kv("ease", banner.crossfade.ease.css());

    ctx.output.info("[banner.stagger]");
    match banner.stagger() {
        Ok(stagger) => {
            for (block, delay) in stagger.iter() {
                ctx.output.list_item(&format!(
                    "{} at {}ms",
                    block.as_str(),
                    delay.as_millis()
                ));
            }
        }
        Err(e) => ctx.output.warn(&e.to_string()),
    }

    ctx.output.info("[preview]");
    ctx.output
        .kv("step_ms", &ctx.config.preview.step_ms.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}
