use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use arc_swap::ArcSwap;
use chrono::Utc;
use log::{debug, info, warn};
use crate::common::common::system_time_to_timestamp;
use crate::content::enums::content_error::ContentError;
use crate::content::enums::content_section::ContentSection;
use crate::content::enums::resource_kind::ResourceKind;
use crate::content::structs::content_index::ContentIndex;
use crate::content::structs::content_snapshot::{ContentSnapshot, ResourceMap};
use crate::content::structs::refresh_summary::RefreshSummary;
use crate::content::structs::resource_descriptor::ResourceDescriptor;

/// First-line marker of an executable page.
pub const DIRECTIVE_MARKER: &[u8] = b"#!";

/// Page files with this suffix are access-control sidecars, never served.
pub const ALLOWED_SUFFIX: &str = ".allowed";

impl ContentIndex {
    pub fn new<P: Into<PathBuf>, F: Into<PathBuf>>(pages_root: P, files_root: F) -> ContentIndex
    {
        ContentIndex {
            pages_root: pages_root.into(),
            files_root: files_root.into(),
            snapshot: ArcSwap::from_pointee(ContentSnapshot::default()),
        }
    }

    /// The currently published snapshot. Holding it keeps it alive across refreshes.
    pub fn snapshot(&self) -> Arc<ContentSnapshot>
    {
        self.snapshot.load_full()
    }

    pub fn lookup(&self, path: &str) -> Option<Arc<ResourceDescriptor>>
    {
        self.snapshot.load().lookup(path)
    }

    /// Rescans both roots and publishes the result only if both scans succeed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn refresh(&self) -> Result<RefreshSummary, ContentError>
    {
        let pages = Self::scan_section(&self.pages_root, ContentSection::Pages)
            .inspect_err(|error| warn!("[INDEX] Refresh failed, keeping previous index: {error}"))?;
        let files = Self::scan_section(&self.files_root, ContentSection::Files)
            .inspect_err(|error| warn!("[INDEX] Refresh failed, keeping previous index: {error}"))?;

        let summary = RefreshSummary::count(&pages).merge(RefreshSummary::count(&files));
        let now = Utc::now().timestamp();
        self.snapshot.store(Arc::new(ContentSnapshot {
            pages: Arc::new(pages),
            files: Arc::new(files),
            pages_scanned_at: now,
            files_scanned_at: now,
        }));
        info!("[INDEX] Refreshed content index - {summary}");
        Ok(summary)
    }

    pub fn refresh_pages(&self) -> Result<RefreshSummary, ContentError>
    {
        self.refresh_section(ContentSection::Pages)
    }

    pub fn refresh_files(&self) -> Result<RefreshSummary, ContentError>
    {
        self.refresh_section(ContentSection::Files)
    }

    fn refresh_section(&self, section: ContentSection) -> Result<RefreshSummary, ContentError>
    {
        let root = match section {
            ContentSection::Pages => &self.pages_root,
            ContentSection::Files => &self.files_root,
        };
        let scanned = Arc::new(
            Self::scan_section(root, section)
                .inspect_err(|error| warn!("[INDEX] Refresh of {} failed, keeping previous index: {error}", section.prefix()))?
        );
        let summary = RefreshSummary::count(&scanned);
        let now = Utc::now().timestamp();

        // The other section may be refreshed concurrently; rcu retries the merge
        // against whatever is published at swap time.
        self.snapshot.rcu(|current| {
            let mut next = ContentSnapshot::clone(current);
            match section {
                ContentSection::Pages => {
                    next.pages = scanned.clone();
                    next.pages_scanned_at = now;
                }
                ContentSection::Files => {
                    next.files = scanned.clone();
                    next.files_scanned_at = now;
                }
            }
            next
        });
        info!("[INDEX] Refreshed {} - {summary}", section.prefix());
        Ok(summary)
    }

    pub fn scan_section(root: &Path, section: ContentSection) -> Result<ResourceMap, ContentError>
    {
        let failure = |source: std::io::Error| ContentError::RefreshFailure { root: root.to_path_buf(), source };
        let root = fs::canonicalize(root).map_err(failure)?;
        let metadata = fs::metadata(&root).map_err(failure)?;
        if !metadata.is_dir() {
            return Err(failure(std::io::Error::new(std::io::ErrorKind::NotADirectory, "content root is not a directory")));
        }

        let mut map = ResourceMap::new();
        let prefix = section.prefix().to_string();
        map.insert(prefix.clone(), Arc::new(ResourceDescriptor {
            logical_path: prefix.clone(),
            kind: ResourceKind::Directory,
            location: root.clone(),
            modified: metadata.modified().map(system_time_to_timestamp).unwrap_or(0),
            size: 0,
        }));
        Self::scan_directory(&root, &prefix, section, &mut map)?;
        Ok(map)
    }

    fn scan_directory(directory: &Path, logical: &str, section: ContentSection, map: &mut ResourceMap) -> Result<(), ContentError>
    {
        let failure = |source: std::io::Error| ContentError::RefreshFailure { root: directory.to_path_buf(), source };
        for entry in fs::read_dir(directory).map_err(failure)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) if is_vanished(&error) => continue,
                Err(error) => return Err(failure(error)),
            };
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                debug!("[INDEX] Skipping non UTF-8 name in {}", directory.display());
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            let location = entry.path();
            let link_metadata = match fs::symlink_metadata(&location) {
                Ok(link_metadata) => link_metadata,
                Err(error) if is_vanished(&error) => {
                    debug!("[INDEX] {} disappeared during scan", location.display());
                    continue;
                }
                Err(error) => return Err(failure(error)),
            };
            let metadata = if link_metadata.file_type().is_symlink() {
                match fs::metadata(&location) {
                    Ok(target) if target.is_file() => target,
                    Ok(_) => {
                        debug!("[INDEX] Not following directory symlink {}", location.display());
                        continue;
                    }
                    Err(_) => {
                        debug!("[INDEX] Skipping dangling symlink {}", location.display());
                        continue;
                    }
                }
            } else {
                link_metadata
            };

            let logical_path = format!("{logical}/{name}");
            let modified = metadata.modified().map(system_time_to_timestamp).unwrap_or(0);

            if metadata.is_dir() {
                map.insert(logical_path.clone(), Arc::new(ResourceDescriptor {
                    logical_path: logical_path.clone(),
                    kind: ResourceKind::Directory,
                    location: location.clone(),
                    modified,
                    size: 0,
                }));
                match Self::scan_directory(&location, &logical_path, section, map) {
                    Err(ContentError::RefreshFailure { root, source }) if root == location && is_vanished(&source) => {
                        debug!("[INDEX] {} disappeared during scan", location.display());
                        map.remove(&logical_path);
                    }
                    result => result?,
                }
                continue;
            }
            if !metadata.is_file() {
                continue;
            }

            let kind = match section {
                ContentSection::Pages => {
                    if name.ends_with(ALLOWED_SUFFIX) {
                        continue;
                    }
                    if is_executable(&metadata) && has_directive_marker(&location) {
                        ResourceKind::DynamicPage
                    } else {
                        ResourceKind::StaticPage
                    }
                }
                ContentSection::Files => ResourceKind::StaticFile,
            };

            map.insert(logical_path.clone(), Arc::new(ResourceDescriptor {
                logical_path,
                kind,
                location,
                modified,
                size: metadata.len(),
            }));
        }
        Ok(())
    }
}

/// Whether the file's first line starts with the directive marker.
/// Entries removed between listing and inspection are skipped, not fatal.
pub fn is_vanished(error: &std::io::Error) -> bool
{
    error.kind() == std::io::ErrorKind::NotFound
}

pub fn has_directive_marker(path: &Path) -> bool
{
    let mut marker = [0u8; 2];
    match fs::File::open(path).and_then(|mut file| file.read_exact(&mut marker)) {
        Ok(_) => marker == DIRECTIVE_MARKER,
        Err(_) => false
    }
}

#[cfg(unix)]
pub fn is_executable(metadata: &fs::Metadata) -> bool
{
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
pub fn is_executable(_metadata: &fs::Metadata) -> bool
{
    false
}
