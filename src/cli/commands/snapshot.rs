use std::fs;

use super::super::{Ctx, ExportArgs, ImportArgs};
use crate::Result;
use crate::storage::StorageError;

pub(crate) fn handle_export(ctx: &mut Ctx, args: ExportArgs) -> Result<()> {
    let json = ctx.register.export_json()?;

    match args.output {
        Some(path) => {
            fs::write(&path, &json).map_err(|e| StorageError::Write {
                path: path.clone(),
                source: e,
            })?;
            println!("✓ Exported register to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub(crate) fn handle_import(ctx: &mut Ctx, args: ImportArgs) -> Result<()> {
    let contents = fs::read_to_string(&args.input).map_err(|e| StorageError::Read {
        path: args.input.clone(),
        source: e,
    })?;

    ctx.register.restore_snapshot(&contents)?;
    println!(
        "✓ Imported {} letters, {} counters from {}",
        ctx.register.letters().count(),
        ctx.register.counters().len(),
        args.input.display()
    );
    Ok(())
}
