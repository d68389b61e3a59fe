//! CFB - Entry Point
//!
//! Binary entry point for the configuration backup tool.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cfb create [--meta KEY=VALUE]...` | Back up the current configuration |
//! | `cfb list` | Show stored backups, newest first |
//! | `cfb restore <TIMESTAMP>` / `cfb restore --latest` | Restore a backup |
//! | `cfb delete <TIMESTAMP>` | Delete one backup |
//! | `cfb delete-all` | Delete every backup |

use cfb::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cfb::run(cli).await
}
