use super::super::{Ctx, to_json_pretty};
use crate::Result;
use crate::core::LetterId;

pub(crate) fn handle(ctx: &mut Ctx, id: &str) -> Result<()> {
    let id = LetterId::parse(id)?;
    let display = ctx.register.find(id).map(|l| l.display().to_string());

    let voided = ctx.register.void(id)?;
    if ctx.json {
        println!(
            "{}",
            to_json_pretty(&serde_json::json!({ "id": id, "voided": voided }))?
        );
        if !voided {
            std::process::exit(1);
        }
        return Ok(());
    }

    match display {
        Some(display) if voided => {
            println!("✓ Voided {display}");
            println!("  The register number stays recorded; the sequence is unchanged.");
        }
        _ => {
            println!("✗ No letter with id {id}");
            std::process::exit(1);
        }
    }
    Ok(())
}
