use serde::Serialize;
use stay_session::{FileSessionStore, SessionStore, StoredSession};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConfirmationArgs;
use crate::context::AppContext;
use crate::output::output;

const NO_ENQUIRY_MESSAGE: &str = "No enquiry has been submitted yet.";

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ConfirmationView {
    Stored(StoredSession),
    Empty { message: &'static str },
}

#[derive(Debug, Serialize)]
struct ClearResponse {
    cleared: bool,
}

/// Handle `stay confirmation`.
pub fn handle(
    args: &ConfirmationArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.clear {
        let cleared = ctx.session.get().is_some();
        ctx.session.clear()?;
        return output(&ClearResponse { cleared }, flags.format);
    }

    show(&ctx.session, flags)
}

/// Print the stored result of the last successful enquiry.
pub fn show(session: &FileSessionStore, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&view(session.load()), flags.format)
}

fn view(stored: Option<StoredSession>) -> ConfirmationView {
    stored.map_or(
        ConfirmationView::Empty {
            message: NO_ENQUIRY_MESSAGE,
        },
        ConfirmationView::Stored,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use stay_core::entities::SubmissionResult;

    use super::*;

    #[test]
    fn empty_session_explains_itself() {
        let rendered = serde_json::to_value(view(None)).expect("serialize");
        assert_eq!(rendered, json!({"message": NO_ENQUIRY_MESSAGE}));
    }

    #[test]
    fn stored_session_shows_payload_verbatim() {
        let stored = StoredSession {
            stored_at: "2024-06-01T10:00:00Z".parse().expect("timestamp"),
            payload: SubmissionResult::new(json!({"id": "enq-1"})),
        };
        let rendered = serde_json::to_value(view(Some(stored))).expect("serialize");
        assert_eq!(rendered["payload"], json!({"id": "enq-1"}));
        assert_eq!(rendered["stored_at"], json!("2024-06-01T10:00:00Z"));
    }
}
