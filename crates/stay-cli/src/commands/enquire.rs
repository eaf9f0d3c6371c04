use anyhow::bail;
use serde::Serialize;
use stay_api::{ApiClient, EnquiryApi};
use stay_core::entities::EstablishmentId;
use stay_core::enums::Route;
use stay_core::validation::ValidationErrors;
use stay_enquiry::{
    EnquiryWorkflow, RecordingNavigator, SubmitOutcome, SubmitRejected,
};
use stay_session::FileSessionStore;

use crate::cli::root_commands::EnquireArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::confirmation;
use crate::context::AppContext;
use crate::output::{heading, output};

type CliWorkflow = EnquiryWorkflow<ApiClient, FileSessionStore, RecordingNavigator>;

/// One table row per failed field, keyed by the label shown on the form.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct FieldErrorRow<'a> {
    field: &'static str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct EnquiryNotSent {
    establishment_id: String,
    establishment: &'static str,
    field_errors: ValidationErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<String>,
}

/// Handle `stay enquire <id>`.
pub async fn handle(
    args: &EnquireArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut workflow = EnquiryWorkflow::new(
        EstablishmentId::new(args.id.as_str()),
        ctx.schema(),
        ctx.api.clone(),
        ctx.session.clone(),
        RecordingNavigator::new(),
    );

    workflow.activate().await;
    heading(&title(workflow.establishment().name()), flags.format);

    workflow.set_full_name(args.full_name.clone().unwrap_or_default());
    workflow.set_email_address(args.email_address.clone().unwrap_or_default());
    workflow.set_check_in(args.check_in.clone().unwrap_or_default());
    workflow.set_check_out(args.check_out.clone().unwrap_or_default());

    let ticket = match workflow.begin_submit() {
        Ok(ticket) => ticket,
        Err(rejected) => return not_sent(&workflow, &rejected, flags),
    };

    let result = tokio::select! {
        result = ctx.api.create_enquiry(ticket.payload()) => result,
        _ = tokio::signal::ctrl_c() => {
            workflow.close();
            bail!("enquiry cancelled before the backend responded");
        }
    };

    match workflow.finish_submit(ticket, result) {
        SubmitOutcome::Navigated(Route::Confirmation) => {
            let (_, session, _) = workflow.into_parts();
            confirmation::show(&session, flags)
        }
        SubmitOutcome::Navigated(route) => bail!("unexpected navigation to {route}"),
        SubmitOutcome::Rejected(rejected) => not_sent(&workflow, &rejected, flags),
        SubmitOutcome::Failed { notice } => {
            report(&workflow, flags)?;
            bail!("{notice}")
        }
        SubmitOutcome::Discarded => bail!("enquiry form was closed before the backend responded"),
    }
}

fn error_rows(errors: &ValidationErrors) -> Vec<FieldErrorRow<'_>> {
    errors
        .iter()
        .map(|error| FieldErrorRow {
            field: error.field.label(),
            message: &error.message,
        })
        .collect()
}

fn title(establishment_name: &str) -> String {
    format!("Book your stay at {establishment_name}")
}

fn not_sent(
    workflow: &CliWorkflow,
    rejected: &SubmitRejected,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    report(workflow, flags)?;
    match rejected {
        SubmitRejected::Invalid(errors) => bail!(
            "enquiry not sent: {} field(s) need attention",
            errors.len()
        ),
        other => bail!("enquiry not sent: {other}"),
    }
}

fn report(workflow: &CliWorkflow, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        if !workflow.field_errors().is_empty() {
            output(&error_rows(workflow.field_errors()), flags.format)?;
        }
        if let Some(notice) = workflow.notice() {
            println!("{notice}");
        }
        return Ok(());
    }

    output(
        &EnquiryNotSent {
            establishment_id: workflow.establishment_id().to_string(),
            establishment: workflow.establishment().as_str(),
            field_errors: workflow.field_errors().clone(),
            notice: workflow.notice().map(str::to_string),
        },
        flags.format,
    )
}
