use anyhow::Result;
use clap::Parser;

use tagbump::config;
use tagbump::git::Git2Repository;
use tagbump::ui;
use tagbump::workflow;

#[derive(clap::Parser)]
#[command(
    name = "tagbump",
    about = "Increment the remote version tag of a git repository and push it"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        help = "Root directory of the repository to bump (defaults to the current directory)"
    )]
    dir: Option<String>,

    #[arg(long, help = "Increment the major release version")]
    major: bool,

    #[arg(long, help = "Increment the minor release version")]
    minor: bool,

    #[arg(long, help = "Preview the bump without creating or pushing a tag")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("tagbump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("cannot load configuration: {}", e));
            std::process::exit(1);
        }
    };
    let quiet = config.behavior.quiet;
    let remote = config.remote.name.as_str();

    let dir = args.dir.as_deref().unwrap_or(".");
    let repo = match Git2Repository::open(dir) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("unable to open repository at '{}': {}", dir, e));
            std::process::exit(1);
        }
    };

    if !quiet {
        ui::display_status(&format!("Listing references on remote '{}'", remote));
    }

    let plan = match workflow::plan(&repo, remote, args.major, args.minor) {
        Ok(plan) => plan,
        Err(e) => {
            ui::display_error(&format!("failed to bump version tag: {}", e));
            std::process::exit(1);
        }
    };

    if !quiet {
        match plan.previous {
            Some(previous) => {
                ui::display_status(&format!("Latest version tag at remote: {}", previous))
            }
            None => ui::display_status("No version tags found at remote, starting from v0.0.0"),
        }
        ui::display_plan(plan.previous.as_ref(), &plan.next);
    }

    if args.dry_run {
        ui::display_status("Dry run: no tag was created or pushed");
        return Ok(());
    }

    if let Err(e) = workflow::publish(&repo, remote, &plan.next) {
        ui::display_error(&format!("failed to publish tag '{}': {}", plan.next, e));
        std::process::exit(1);
    }

    if !quiet {
        ui::display_success(&format!("Created tag {} locally", plan.next));
    }
    ui::display_success(&format!("Tag {} pushed to remote '{}'", plan.next, remote));

    Ok(())
}
