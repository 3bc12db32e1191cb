//! External HTML→PDF rasterization.
//!
//! The rasterizer is an external collaborator (WeasyPrint by default): it
//! reads well-formed HTML on stdin and writes the PDF itself. This module is
//! a thin process adapter with no retries; failures carry the renderer's
//! stderr so the operator sees the real diagnostic.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::core::CotizaError;

/// Handle on the external renderer command.
pub struct PdfEngine {
    command: String,
}

impl Default for PdfEngine {
    fn default() -> Self {
        Self::new("weasyprint")
    }
}

impl PdfEngine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Pipe the markup to the renderer and let it write `output_path`.
    pub fn render_to_file(&self, html: &str, output_path: &Path) -> Result<(), CotizaError> {
        tracing::debug!(command = %self.command, output = %output_path.display(), "rasterizing document");
        let mut child = Command::new(&self.command)
            .arg("-") // read HTML from stdin
            .arg(output_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CotizaError::Pdf(format!("failed to start `{}`: {e}", self.command)))?;

        // The child exits on stdin EOF, so write then drop the handle.
        if let Some(stdin) = child.stdin.take() {
            let mut stdin = stdin;
            stdin.write_all(html.as_bytes())?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| CotizaError::Pdf(format!("renderer did not finish: {e}")))?;
        if !output.status.success() {
            return Err(CotizaError::Pdf(format!(
                "`{}` exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}
