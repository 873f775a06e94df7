use super::super::{Ctx, ListArgs, SearchArgs, render, to_json_pretty};
use crate::Result;
use crate::core::Letter;

pub(crate) fn handle_list(ctx: &mut Ctx, args: ListArgs) -> Result<()> {
    let query = args.query.join(" ").trim().to_lowercase();
    let limit = args.limit.unwrap_or(usize::MAX);

    let shown: Vec<&Letter> = ctx
        .register
        .filter(|letter| {
            if let Some(c) = args.classification
                && letter.classification() != c
            {
                return false;
            }
            if let Some(y) = args.year
                && letter.year() != y
            {
                return false;
            }
            if let Some(s) = args.status
                && letter.status() != s
            {
                return false;
            }
            query.is_empty() || matches_query(letter, &query)
        })
        .take(limit)
        .collect();

    if ctx.json {
        println!("{}", to_json_pretty(&shown)?);
        return Ok(());
    }

    let total = ctx.register.letters().count();
    let active = ctx.register.filter(|l| l.is_active()).count();
    println!(
        "{}",
        render::render_list(&shown, total, active, total - active)
    );
    Ok(())
}

pub(crate) fn handle_search(ctx: &mut Ctx, args: SearchArgs) -> Result<()> {
    handle_list(
        ctx,
        ListArgs {
            classification: None,
            year: None,
            status: None,
            limit: args.limit,
            query: args.query,
        },
    )
}

/// Case-insensitive match over the fields a user would scan for:
/// number, classification label, subject, party, date, status.
fn matches_query(letter: &Letter, query: &str) -> bool {
    let hay = format!(
        "{} {} {} {} {} {}",
        letter.display(),
        letter.classification().label(),
        letter.subject(),
        letter.party().unwrap_or(""),
        render::format_date(letter.letter_date()),
        letter.status().as_str()
    )
    .to_lowercase();
    hay.contains(query)
}
