use super::super::{Ctx, render, to_json_pretty};
use crate::Result;

pub(crate) fn handle(ctx: &mut Ctx) -> Result<()> {
    let total = ctx.register.letters().count();
    let active = ctx.register.filter(|l| l.is_active()).count();
    let void = total - active;
    let series = ctx.register.counters().len();

    if ctx.json {
        println!(
            "{}",
            to_json_pretty(&serde_json::json!({
                "total": total,
                "active": active,
                "void": void,
                "series": series,
            }))?
        );
    } else {
        println!("{}", render::render_status(total, active, void, series));
    }
    Ok(())
}
