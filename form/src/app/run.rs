//! One run of the form host: load, mount, edit, report

use deploy_api::models::DeployRecordDto;
use serde::Serialize;
use tracing::info;

use crate::app::args::CliArgs;
use crate::errors::FormError;
use crate::filesys::file::File;
use crate::form::context::MemoryContext;
use crate::form::controller::{FormEvent, FormOptions, SshDeployForm};
use crate::logs::{init_logging, LogOptions};
use crate::models::error_map::ErrorMap;
use crate::models::record::DeployRecord;
use crate::storage::settings::FormSettings;

/// Final record and error map of a run
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub record: DeployRecordDto,
    pub errors: ErrorMap,
    pub valid: bool,
}

/// Load the record, mount the form and apply every edit in order
pub async fn run(args: &CliArgs) -> Result<RunOutcome, FormError> {
    let settings = match &args.settings {
        Some(path) => FormSettings::load(&File::new(path)).await?,
        None => FormSettings::default(),
    };

    let log_options = LogOptions {
        log_level: args.log_level.unwrap_or(settings.log_level),
        json_format: settings.json_logs,
    };
    if let Err(e) = init_logging(log_options) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let events = args
        .edits
        .iter()
        .map(|raw| raw.parse::<FormEvent>())
        .collect::<Result<Vec<_>, _>>()?;

    let record = match &args.record {
        Some(path) => {
            let dto: DeployRecordDto = File::new(path).read_json().await?;
            info!("Loaded deployment record from {}", path.display());
            DeployRecord::from(dto)
        }
        None => DeployRecord::default(),
    };

    apply(&settings, record, events, args).await
}

async fn apply(
    settings: &FormSettings,
    record: DeployRecord,
    events: Vec<FormEvent>,
    args: &CliArgs,
) -> Result<RunOutcome, FormError> {
    let form = SshDeployForm::new(FormOptions::from(settings));
    let mut ctx = MemoryContext::new(record);

    form.mount(&mut ctx);
    let report = form.handle_all(&mut ctx, events);

    let (record, errors) = ctx.into_parts();
    let dto = DeployRecordDto::from(&record);

    if let Some(path) = &args.out {
        File::new(path).write_json(&dto).await?;
        info!("Wrote deployment record to {}", path.display());
    }

    Ok(RunOutcome {
        record: dto,
        errors,
        valid: report.is_valid(),
    })
}
