//! Turns scanned file paths into typed asset records.

use crate::collate::locale_cmp;
use asset_viewer_api::{AssetKind, AssetRecord};
use std::path::{Component, Path};
use tracing::warn;

/// Keep the paths whose extension names a model or texture and describe them
/// relative to `base_dir`, ordered by file name.
///
/// Anything else is left out of the result: unknown or missing extensions,
/// paths outside `base_dir`, and names that are not valid UTF-8 (those could
/// never be requested back through `/assets`).
pub fn classify<I, P>(paths: I, base_dir: &Path) -> Vec<AssetRecord>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut records: Vec<AssetRecord> = paths
        .into_iter()
        .filter_map(|path| classify_path(path.as_ref(), base_dir))
        .collect();

    records.sort_by(|a, b| locale_cmp(&a.filename, &b.filename));
    records
}

/// Classify a single path; `None` when it is not a servable asset.
pub fn classify_path(path: &Path, base_dir: &Path) -> Option<AssetRecord> {
    let extension = path.extension()?.to_str()?;
    let kind = AssetKind::from_extension(extension)?;

    let Some(filename) = path.file_name()?.to_str().map(str::to_string) else {
        warn!("Ignoring {:?}: file name is not valid UTF-8", path);
        return None;
    };
    let name = filename
        .strip_suffix(extension)
        .and_then(|stem| stem.strip_suffix('.'))?
        .to_string();

    let Some(served) = served_path(path, base_dir) else {
        warn!("Ignoring {:?}: not a UTF-8 path under {:?}", path, base_dir);
        return None;
    };

    Some(AssetRecord {
        name,
        filename,
        kind,
        path: served,
    })
}

/// Base-relative form of `path`: every component prefixed with `/`.
///
/// Backslashes inside names become `/` as well, so the result never carries
/// a platform separator. `None` when a component is not valid UTF-8.
pub fn served_path(path: &Path, base_dir: &Path) -> Option<String> {
    let relative = path.strip_prefix(base_dir).ok()?;

    let mut served = String::new();
    for component in relative.components() {
        let Component::Normal(part) = component else {
            return None;
        };
        served.push('/');
        served.push_str(&part.to_str()?.replace('\\', "/"));
    }

    (!served.is_empty()).then_some(served)
}

/// Base-relative form of `path` without the leading slash, as listed by the
/// plain path listing.
pub fn relative_path(path: &Path, base_dir: &Path) -> Option<String> {
    served_path(path, base_dir).map(|served| served[1..].to_string())
}
