use super::super::{Ctx, IssueArgs, render, to_json_pretty};
use crate::Result;

pub(crate) fn handle(ctx: &mut Ctx, args: IssueArgs) -> Result<()> {
    let letter = ctx.register.issue(
        args.classification,
        args.date,
        &args.subject,
        args.party.as_deref(),
    )?;

    if ctx.json {
        println!("{}", to_json_pretty(&letter)?);
    } else {
        println!("{}", render::render_issued(&letter));
    }
    Ok(())
}
