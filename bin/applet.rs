use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod play;
mod show;

#[derive(From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Show(show::Show),
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => Ok(a.execute()?),
            Applet::Show(a) => Ok(a.execute()?),
        }
    }
}
