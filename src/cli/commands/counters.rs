use super::super::{Ctx, render, to_json_pretty};
use crate::Result;

pub(crate) fn handle(ctx: &mut Ctx) -> Result<()> {
    if ctx.json {
        println!("{}", to_json_pretty(ctx.register.counters())?);
        return Ok(());
    }

    let entries: Vec<_> = ctx.register.counters().iter().collect();
    println!("{}", render::render_counters(&entries));
    Ok(())
}
