use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use miller_columns::kernel::services::adapters::{ensure_settings_file, load_settings_from};
use miller_columns::kernel::services::ports::{rejection_message, MessageTable, Settings};
use miller_columns::kernel::{Action, LayoutState, Store};
use miller_columns::models::Layout;

mod logging;

const USAGE: &str = "usage: millerctl <layout.json> [actions.json]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(layout_path) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let settings = ensure_settings_file()
        .ok()
        .and_then(|path| load_settings_from(&path))
        .unwrap_or_default();
    let logging = logging::init(settings.log_filter.as_deref());
    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    let actions_path = args.get(1).map(Path::new);
    match run(Path::new(layout_path), actions_path, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "millerctl failed");
            eprintln!("millerctl: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    layout_path: &Path,
    actions_path: Option<&Path>,
    settings: &Settings,
) -> Result<(), Box<dyn Error>> {
    let layout: Layout = serde_json::from_str(&std::fs::read_to_string(layout_path)?)?;
    layout.validate()?;

    let actions: Vec<Action> = match actions_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Vec::new(),
    };
    tracing::info!(
        columns = layout.len(),
        actions = actions.len(),
        "replaying actions"
    );

    let messages = MessageTable::from_settings(settings);
    let mut store = Store::new(LayoutState::new(layout, settings));
    for (index, action) in actions.into_iter().enumerate() {
        let result = store.dispatch(action);
        if let Some(rejection) = result.rejection {
            eprintln!("action {index}: {}", rejection_message(rejection, &messages));
        }
    }

    println!("{}", serde_json::to_string_pretty(store.layout())?);
    Ok(())
}
