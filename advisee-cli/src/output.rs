//! Output helpers shared by commands

use serde::Serialize;

#[derive(Serialize)]
struct JsonOut<T> {
    ok: bool,
    data: T,
}

/// Print `data` as a JSON envelope, or run `human` to print it for people
pub fn print_one<T: Serialize>(json: bool, data: T, human: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        human(&data);
    }
    Ok(())
}

/// Text progress bar, e.g. `[#####-----]`
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
