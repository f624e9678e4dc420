//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value with its source
//! (`default`, `file` or `env`):
//!
//! ```json
//! {
//!   "opponents": { "value": 1, "source": "default" },
//!   "seed": { "value": null, "source": "default" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails and
/// `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "opponents": {
            "value": config.opponents,
            "source": sources.opponents,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "think_ms": {
            "value": config.think_ms,
            "source": sources.think_ms,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
