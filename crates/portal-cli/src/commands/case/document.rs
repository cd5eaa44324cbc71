use std::path::Path;

use anyhow::Context;
use portal_chat::{ACCEPTED_MIME_TYPES, MAX_ATTACHMENT_BYTES};
use portal_core::entities::{NewDocument, format_file_size};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, path: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new_document = describe_file(Path::new(path))?;
    let mut cases = ctx.cases()?;
    let case_id = cases.require_case(id)?.id.clone();
    let document = cases.add_document(&case_id, new_document)?;
    output(&document, flags.format)
}

/// Metadata for a local file, held to the same limits as chat attachments.
fn describe_file(path: &Path) -> anyhow::Result<NewDocument> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    if !meta.is_file() {
        anyhow::bail!("'{}' is not a file", path.display());
    }
    if meta.len() > MAX_ATTACHMENT_BYTES {
        anyhow::bail!(
            "'{}' is {}; the limit is {}",
            path.display(),
            format_file_size(meta.len()),
            format_file_size(MAX_ATTACHMENT_BYTES)
        );
    }

    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    if !ACCEPTED_MIME_TYPES.contains(&mime_type.as_str()) {
        anyhow::bail!(
            "'{}' has unsupported type {mime_type}; accepted: {}",
            path.display(),
            ACCEPTED_MIME_TYPES.join(", ")
        );
    }

    let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    Ok(NewDocument {
        name: path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
        mime_type,
        size: meta.len(),
        url: absolute.display().to_string(),
    })
}
