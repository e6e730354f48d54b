use crate::name::infer_template;
use eyre::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand one frame path into every file of its sequence that exists on
/// disk, in ascending index order.
///
/// The template is inferred from the file name alone; the containing
/// directory is then listed once and an entry is kept when its name is an
/// exact fixed-width instance of the template. Paths come back joined to the
/// input's parent, so a bare input name yields bare names. A path with no
/// inferable template is returned unchanged as a singleton, without touching
/// the filesystem.
///
/// The listing is a single snapshot; a file created after the listing is not
/// seen. Listing errors (missing or unreadable directory) propagate to the
/// caller.
pub fn find_matching_frames(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();

    let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
        return Ok(vec![path.to_path_buf()]);
    };
    let Some((template, _)) = infer_template(name) else {
        tracing::debug!(name, "no template; passing the path through");
        return Ok(vec![path.to_path_buf()]);
    };

    let parent = path.parent().unwrap_or(Path::new(""));
    let scan_dir = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    let mut frames = Vec::new();
    for entry in fs::read_dir(scan_dir)? {
        let entry = entry?;
        if let Some(entry_name) = entry.file_name().to_str()
            && let Some(index) = template.index_of(entry_name)
        {
            frames.push((index, parent.join(entry_name)));
        }
    }
    frames.sort_by_key(|(index, _)| *index);

    tracing::debug!(
        template = %template,
        dir = %scan_dir.display(),
        frames = frames.len(),
        "matched sequence files"
    );
    Ok(frames.into_iter().map(|(_, frame)| frame).collect())
}
