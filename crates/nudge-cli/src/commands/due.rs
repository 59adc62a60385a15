use crate::cli::GlobalFlags;
use crate::cli::root_commands::DueArgs;
use crate::commands::shared::parse::timestamp_or_now;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nudge due`.
pub async fn handle(args: &DueArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = timestamp_or_now(args.now.as_deref(), "now")?;
    let prompts = ctx.queue.query(now).await?;
    output(&prompts, flags.format)
}
