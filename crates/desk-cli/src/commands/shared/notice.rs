use desk_core::responses::ActionNotice;
use desk_store::StoreError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Whether a failed action should abort the command instead of being
/// reported as a notice.
///
/// Rejected input and a refused session cannot succeed on retry.
const fn is_fatal(error: &StoreError) -> bool {
    matches!(error, StoreError::Validation(_) | StoreError::Unauthorized)
}

/// Unwrap an action result, printing a notice for recoverable failures.
///
/// Returns `Ok(None)` after the notice is printed; the caller should stop
/// without printing anything else.
pub fn or_notice<T>(
    action: &str,
    result: Result<T, StoreError>,
    flags: &GlobalFlags,
) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) if is_fatal(&error) => Err(error.into()),
        Err(error) => {
            output(&notice(action, &error), flags.format)?;
            Ok(None)
        }
    }
}

/// Fetch the collection. Returns `false` if a notice was printed instead.
pub async fn load(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<bool> {
    let result = ctx.board.refresh().await.map(|_| ());
    Ok(or_notice("fetch", result, flags)?.is_some())
}

fn notice(action: &str, error: &StoreError) -> ActionNotice {
    ActionNotice {
        ok: false,
        action: action.to_string(),
        notice: format!("{action} failed: {error}"),
    }
}
