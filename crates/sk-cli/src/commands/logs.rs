use sk_config::SkConfig;
use sk_core::purge::PurgeRequest;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LogsArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::reporter::TerminalReporter;
use crate::ui;

/// Handle `sk logs <action>`.
///
/// Bad input is rejected before the store is opened, so a typo never
/// creates a database file.
pub async fn handle(args: &LogsArgs, config: &SkConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = build_request(args);
    request.validate()?;

    let ctx = AppContext::init(config).await?;
    let reporter = TerminalReporter::new(ui::prefs(), flags.quiet);
    let report = ctx.purge().execute(&request, &reporter).await?;

    output(&report, flags.format)
}

fn build_request(args: &LogsArgs) -> PurgeRequest {
    PurgeRequest {
        action: args.action.clone(),
        log_type: args.log_type.clone(),
        before: args.before.clone(),
        after: args.after.clone(),
        assume_yes: args.yes,
    }
}
