use super::super::{Ctx, to_json_pretty};
use crate::Result;
use crate::core::LetterId;

pub(crate) fn handle(ctx: &mut Ctx, id: &str) -> Result<()> {
    let id = LetterId::parse(id)?;
    let display = ctx.register.find(id).map(|l| l.display().to_string());

    let purged = ctx.register.purge(id)?;
    if ctx.json {
        println!(
            "{}",
            to_json_pretty(&serde_json::json!({ "id": id, "purged": purged }))?
        );
        if !purged {
            std::process::exit(1);
        }
        return Ok(());
    }

    match display {
        Some(display) if purged => {
            println!("✓ Purged {display}");
            println!("  The record is gone; its number stays consumed.");
        }
        _ => {
            println!("✗ No letter with id {id}");
            std::process::exit(1);
        }
    }
    Ok(())
}
