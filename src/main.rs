use crate::prelude::*;

mod cli;
mod prelude;

fn main() -> Result<()> {
    cli::run()
}
