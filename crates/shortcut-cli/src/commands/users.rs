//! `users`

use super::Context;
use crate::output::{print_json, OutputFormat};

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let users = ctx.steam.users()?;
    match ctx.output {
        OutputFormat::Term => {
            for user in &users {
                println!("{}", user);
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&users),
    }
}
