//! File-level conversion operations.
//!
//! Each operation takes an already-loaded document, builds the complete output
//! text, and writes it to `<output_folder>/<base>_converted.<ext>`, replacing
//! any existing file.

use crate::codegen::{OutlineGenerator, ScriptGenerator};
use crate::config::OutputFormat;
use crate::debug_println;
use crate::document::{load_document, ProgramDocument};
use crate::error::{ConvertError, ErrorKind, Result};
use crate::outline::OutlineTree;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the document's URScript wrapped in a function definition
pub fn urpx_to_script(
    document: &ProgramDocument,
    output_folder: &Path,
    source_base_name: &str,
) -> Result<PathBuf> {
    let script = ScriptGenerator::new().generate(document, source_base_name);
    let path = output_path(output_folder, source_base_name, OutputFormat::Script);
    write_output(&path, &script)?;
    Ok(path)
}

/// Write the indented outline of the document's program tree
pub fn urpx_to_txt(
    document: &ProgramDocument,
    output_folder: &Path,
    source_base_name: &str,
) -> Result<PathBuf> {
    let tree = OutlineTree::from_document(document);
    let outline = OutlineGenerator::new().generate(&tree);
    let path = output_path(output_folder, source_base_name, OutputFormat::Text);
    write_output(&path, &outline)?;
    Ok(path)
}

/// Load `input` and run the conversion selected by `format`
pub fn convert_file(input: &Path, output_folder: &Path, format: OutputFormat) -> Result<PathBuf> {
    let document = load_document(input)?;
    let base_name = source_base_name(input);
    debug_println!("converting {} to {}", input.display(), format);
    match format {
        OutputFormat::Script => urpx_to_script(&document, output_folder, &base_name),
        OutputFormat::Text => urpx_to_txt(&document, output_folder, &base_name),
    }
}

/// File name of `path` without its extension
pub fn source_base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Deterministic destination for a converted file
pub fn output_path(output_folder: &Path, source_base_name: &str, format: OutputFormat) -> PathBuf {
    output_folder.join(format!("{}{}", source_base_name, format.file_suffix()))
}

/// Replace `path` with `contents` in one step. The text goes to a sibling
/// `.tmp` file first so a failed write never leaves a truncated output behind.
fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(folder) = path.parent().filter(|folder| !folder.as_os_str().is_empty()) {
        if !folder.is_dir() {
            return Err(ConvertError::new(
                ErrorKind::OutputFolderNotFound,
                format!("{} is not an existing directory", folder.display()),
            ));
        }
    }

    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    if let Err(err) = fs::write(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(ConvertError::from(err)
            .with_note(format!("while writing {}", temp_path.display())));
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(
            ConvertError::from(err).with_note(format!("while replacing {}", path.display()))
        );
    }

    debug_println!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
