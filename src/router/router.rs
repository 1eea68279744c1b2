use std::fmt::Write;
use crate::content::enums::resource_kind::ResourceKind;
use crate::content::structs::content_snapshot::ContentSnapshot;
use crate::content::structs::resource_descriptor::ResourceDescriptor;

pub const INDEX_PATH: &str = "/page/index.mu";

/// Served for `/page/index.mu` when the pages directory has no index of its own.
pub const DEFAULT_INDEX: &str = ">Default Home Page

This node is serving pages using rns-page-node, but index.mu was not found.
Please add an index.mu file to customize the home page.
";

/// Canonical form of a requested path, or `None` if it can never resolve.
///
/// Empty paths and `/` mean the home page. Repeated slashes collapse, `.`
/// segments and trailing slashes are dropped. Paths with a `..` segment or a
/// NUL byte are rejected outright.
pub fn normalize_path(path: &str) -> Option<String>
{
    if path.contains('\0') {
        return None;
    }
    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            segment => segments.push(segment),
        }
    }
    if segments.is_empty() {
        return Some(INDEX_PATH.to_string());
    }
    Some(format!("/{}", segments.join("/")))
}

/// The logical path one level up, `None` for a section root.
pub fn parent_path(path: &str) -> Option<&str>
{
    let (parent, _) = path.rsplit_once('/')?;
    if parent.is_empty() { None } else { Some(parent) }
}

pub fn display_name(path: &str) -> &str
{
    path.rsplit('/').next().unwrap_or(path)
}

pub fn render_listing(snapshot: &ContentSnapshot, directory: &ResourceDescriptor) -> Vec<u8>
{
    let mut page = String::new();
    let _ = writeln!(page, ">Index of {}\n", sanitize(&directory.logical_path));
    if let Some(parent) = parent_path(&directory.logical_path) {
        let _ = writeln!(page, "`[..`:{}]", escape_micron(parent));
    }
    let children = snapshot.children(&directory.logical_path);
    if children.is_empty() {
        page.push_str("This directory is empty.\n");
    }
    for child in children {
        let name = escape_micron(display_name(&child.logical_path));
        let target = escape_micron(&child.logical_path);
        match child.kind {
            ResourceKind::Directory => {
                let _ = writeln!(page, "`[{name}/`:{target}]  {}", child.kind);
            }
            kind => {
                let _ = writeln!(page, "`[{name}`:{target}]  {kind}, {}", format_size(child.size));
            }
        }
    }
    page.into_bytes()
}

pub fn not_found_page(path: &str) -> Vec<u8>
{
    format!(">Not Found\n\nThe path {} does not exist on this node.\n", sanitize(path)).into_bytes()
}

pub fn execution_error_page(path: &str) -> Vec<u8>
{
    format!(">Page Error\n\nThe page {} could not be generated.\n", sanitize(path)).into_bytes()
}

pub fn timeout_page(path: &str) -> Vec<u8>
{
    format!(">Page Timeout\n\nThe page {} took too long to generate.\n", sanitize(path)).into_bytes()
}

pub fn format_size(bytes: u64) -> String
{
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1000 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1000.0;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

fn sanitize(path: &str) -> String
{
    path.chars().filter(|c| !c.is_control()).collect()
}

fn escape_micron(text: &str) -> String
{
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars().filter(|c| !c.is_control()) {
        if matches!(c, '`' | '\\' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
