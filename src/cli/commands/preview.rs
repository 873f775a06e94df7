use super::super::{Ctx, PreviewArgs, to_json_pretty};
use crate::Result;
use crate::core::today;

pub(crate) fn handle(ctx: &mut Ctx, args: PreviewArgs) -> Result<()> {
    let year = args
        .date
        .map(|d| d.year())
        .or(args.year)
        .unwrap_or_else(|| today().year());

    let next = ctx.register.peek_next(args.classification, year);
    let display = ctx.register.peek_next_display(args.classification, year);

    if ctx.json {
        println!(
            "{}",
            to_json_pretty(&serde_json::json!({
                "classification": args.classification,
                "year": year,
                "next_no": next,
                "next_display": display,
            }))?
        );
    } else {
        // Preview only: nothing is reserved until `lr issue`.
        println!("{display}");
    }
    Ok(())
}
