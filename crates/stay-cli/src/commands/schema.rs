use schemars::schema_for;
use stay_core::entities::EnquiryPayload;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `stay schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for!(EnquiryPayload);
    // Schemas are emitted as JSON in every format.
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&schema, format)
}
