use crate::cli::ResolveArgs;
use crate::git::ShellRunner;
use crate::resolve::pr_info_for_speculative_branch;
use tracing::{error, info};

pub async fn execute(args: ResolveArgs) -> anyhow::Result<()> {
    let mut config = super::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(target) = args.target {
        config.target = target;
    }
    if let Some(remote) = args.remote {
        config.remote = remote;
    }
    if let Some(branches) = args.branches {
        config.branches = branches;
    }

    config.validate()?;

    let runner = ShellRunner;
    let info = pr_info_for_speculative_branch(
        &runner,
        &config.target,
        &config.branches,
        &config.remote,
    )
    .await?;

    match &info {
        Some(info) => info!(
            "Speculative PR {}..{}: {} added, {} changed, {} removed",
            info.base.sha,
            info.head.sha,
            info.files.added.len(),
            info.files.changed.len(),
            info.files.removed.len()
        ),
        None => info!("No speculative branch context"),
    }

    // `null` on stdout when there is nothing to report; consumers treat it
    // as a normal skip
    let json = if args.pretty {
        serde_json::to_string_pretty(&info)?
    } else {
        serde_json::to_string(&info)?
    };
    println!("{}", json);

    if args.fail_on_none && info.is_none() {
        error!("Exiting with error: no speculative branch context");
        std::process::exit(1);
    }

    Ok(())
}
