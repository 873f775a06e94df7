use super::super::{Ctx, ResetArgs};
use crate::Result;
use crate::core::ValidationError;

pub(crate) fn handle(ctx: &mut Ctx, args: ResetArgs) -> Result<()> {
    if !args.force {
        return Err(crate::Error::Core(
            ValidationError {
                field: "reset",
                reason: "wiping deletes every letter and counter; pass --force to confirm".into(),
            }
            .into(),
        ));
    }

    ctx.register.reset()?;
    println!("✓ Register wiped");
    Ok(())
}
