use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::sheet::xlsx::render_xlsx;
use crate::sheet::SheetDocument;
use std::path::Path;

/// Render a report document to XLSX.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, out } = cmd {
        let doc = SheetDocument::open(&Path::new(&cfg.output_dir).join(file))?;
        render_xlsx(&doc, Path::new(out))?;
    }

    Ok(())
}
