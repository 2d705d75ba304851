use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse<'a> {
    path: &'a str,
    in_memory: bool,
    foreign_keys: bool,
}

/// Handle `exprdb init`. Opening the context already applied the schema.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let database = &ctx.config.database;
    tracing::info!(path = %database.path, "store ready");
    output(
        &InitResponse {
            path: &database.path,
            in_memory: database.is_in_memory(),
            foreign_keys: database.foreign_keys,
        },
        flags.format,
    )
}
