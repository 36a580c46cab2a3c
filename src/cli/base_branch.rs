use crate::cli::BaseBranchArgs;
use crate::git::{CommandRunner, ShellRunner};
use crate::resolve::find_speculative_base_branch;
use tracing::info;

pub async fn execute(args: BaseBranchArgs) -> anyhow::Result<()> {
    let mut config = super::load_or_default(&args.config)?;

    if let Some(target) = args.target {
        config.target = target;
    }
    if let Some(branches) = args.branches {
        config.branches = branches;
    }

    config.validate()?;

    let runner = ShellRunner;
    let current = runner
        .run(&config.target, "git rev-parse --abbrev-ref HEAD")
        .await?;

    match find_speculative_base_branch(&current, &config.branches)? {
        Some(base) => println!("{}", base),
        None => info!("No candidate branches configured"),
    }

    Ok(())
}
