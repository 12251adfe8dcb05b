use anyhow::Result;

pub mod git;
pub mod readme;

pub trait Command {
    fn run(&self) -> Result<()>;
}
