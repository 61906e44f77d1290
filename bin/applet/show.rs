use crate::{build::Build, config::LevelConfig};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use std::{fs, path::PathBuf};
use tracing::{info, instrument};

/// Prints a level and where its piece may go from the start.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Show {
    /// Path to the level configuration.
    level: PathBuf,
}

impl Show {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let config: LevelConfig = fs::read_to_string(&self.level)
            .with_context(|| format!("failed to read `{}`", self.level.display()))?
            .parse()?;

        let level = config.build()?;
        let board = level.board();
        let piece = board.piece_at(level.start())?;

        info!(
            rows = board.rows(),
            columns = board.columns(),
            start = %level.start(),
            end = %level.end(),
            %piece,
            "level loaded"
        );

        for to in board.destinations(level.start()) {
            info!(%to, "reachable");
        }

        println!("{:#}", board);

        Ok(())
    }
}
