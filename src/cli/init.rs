use crate::cli::InitArgs;
use crate::config::Config;
use anyhow::bail;
use tracing::info;

pub fn execute(args: InitArgs) -> anyhow::Result<()> {
    if args.config.exists() && !args.force {
        bail!(
            "Config file {:?} already exists (use --force to overwrite)",
            args.config
        );
    }

    let yaml = serde_yaml::to_string(&Config::default())?;
    std::fs::write(&args.config, yaml)?;

    info!("Wrote default config to {:?}", args.config);
    Ok(())
}
