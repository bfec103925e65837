use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Append an entry to the invocation history log
pub fn record(entry: &str) -> Result<()> {
    // Determine data directory (respecting XDG)
    let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from(".local/share"));
    let log_dir = data_dir.join("draftsmith");
    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join("history.log");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    writeln!(
        file,
        "[{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        entry
    )?;
    Ok(())
}
