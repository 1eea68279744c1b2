#[cfg(test)]
mod content_tests {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use crate::content::enums::content_section::ContentSection;
    use crate::content::enums::resource_kind::ResourceKind;
    use crate::content::structs::content_index::ContentIndex;

    fn write(path: &Path, data: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, data).unwrap();
    }

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn create_tree() -> (TempDir, ContentIndex) {
        let temp = tempfile::tempdir().unwrap();
        let pages = temp.path().join("pages");
        let files = temp.path().join("files");
        write(&pages.join("index.mu"), ">Welcome\n");
        write(&pages.join("about/team.mu"), ">Team\n");
        write(&pages.join("secret.mu.allowed"), "abcdef\n");
        write(&pages.join(".hidden.mu"), "hidden\n");
        write(&files.join("readme.txt"), "hello");
        write(&files.join("archive/old.bin"), "0123456789");
        let index = ContentIndex::new(pages, files);
        (temp, index)
    }

    #[test]
    fn test_section_of_path() {
        assert_eq!(ContentSection::of_path("/page"), Some(ContentSection::Pages));
        assert_eq!(ContentSection::of_path("/page/index.mu"), Some(ContentSection::Pages));
        assert_eq!(ContentSection::of_path("/file/a.txt"), Some(ContentSection::Files));
        assert_eq!(ContentSection::of_path("/pages/index.mu"), None);
        assert_eq!(ContentSection::of_path("/other"), None);
    }

    #[test]
    fn test_refresh_builds_index() {
        let (_temp, index) = create_tree();
        let summary = index.refresh().unwrap();
        assert_eq!(summary.static_pages, 2);
        assert_eq!(summary.files, 2);
        assert_eq!(summary.directories, 4);

        let page = index.lookup("/page/index.mu").unwrap();
        assert_eq!(page.kind, ResourceKind::StaticPage);
        assert!(page.location.is_absolute());
        assert_eq!(page.size, 9);

        let file = index.lookup("/file/archive/old.bin").unwrap();
        assert_eq!(file.kind, ResourceKind::StaticFile);
        assert_eq!(file.size, 10);

        assert_eq!(index.lookup("/page/about").unwrap().kind, ResourceKind::Directory);
        assert_eq!(index.lookup("/page").unwrap().kind, ResourceKind::Directory);
        assert!(index.lookup("/page/secret.mu.allowed").is_none());
        assert!(index.lookup("/page/.hidden.mu").is_none());
    }

    #[test]
    fn test_children_lists_only_immediate_entries() {
        let (_temp, index) = create_tree();
        index.refresh().unwrap();
        let snapshot = index.snapshot();
        let children: Vec<String> = snapshot.children("/page").iter().map(|d| d.logical_path.clone()).collect();
        assert_eq!(children, vec![String::from("/page/about"), String::from("/page/index.mu")]);
        let nested: Vec<String> = snapshot.children("/page/about").iter().map(|d| d.logical_path.clone()).collect();
        assert_eq!(nested, vec![String::from("/page/about/team.mu")]);
    }

    #[test]
    fn test_removed_files_disappear_on_refresh() {
        let (temp, index) = create_tree();
        index.refresh().unwrap();
        fs::remove_file(temp.path().join("files/readme.txt")).unwrap();
        index.refresh().unwrap();
        assert!(index.lookup("/file/readme.txt").is_none());
    }

    #[test]
    fn test_failed_refresh_keeps_previous_snapshot() {
        let (temp, index) = create_tree();
        index.refresh().unwrap();
        fs::remove_dir_all(temp.path().join("pages")).unwrap();
        assert!(index.refresh().is_err());
        assert!(index.refresh_pages().is_err());
        assert!(index.lookup("/page/index.mu").is_some());
    }

    #[test]
    fn test_section_refresh_keeps_other_section() {
        let (temp, index) = create_tree();
        index.refresh().unwrap();
        write(&temp.path().join("pages/new.mu"), ">New\n");
        write(&temp.path().join("files/new.txt"), "new");
        index.refresh_pages().unwrap();
        assert!(index.lookup("/page/new.mu").is_some());
        assert!(index.lookup("/file/readme.txt").is_some());
        assert!(index.lookup("/file/new.txt").is_none());
        index.refresh_files().unwrap();
        assert!(index.lookup("/file/new.txt").is_some());
    }

    #[test]
    fn test_old_snapshot_survives_refresh() {
        let (temp, index) = create_tree();
        index.refresh().unwrap();
        let before = index.snapshot();
        fs::remove_file(temp.path().join("pages/index.mu")).unwrap();
        index.refresh().unwrap();
        assert!(before.lookup("/page/index.mu").is_some());
        assert!(index.lookup("/page/index.mu").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_dynamic_page_classification() {
        let (temp, index) = create_tree();
        let pages = temp.path().join("pages");
        write(&pages.join("dynamic.mu"), "#!/bin/sh\necho hi\n");
        make_executable(&pages.join("dynamic.mu"));
        write(&pages.join("not_marked.mu"), "echo hi\n");
        make_executable(&pages.join("not_marked.mu"));
        write(&pages.join("not_executable.mu"), "#!c=0\n>Cached page\n");
        write(&temp.path().join("files/script.sh"), "#!/bin/sh\n");
        make_executable(&temp.path().join("files/script.sh"));
        index.refresh().unwrap();

        assert_eq!(index.lookup("/page/dynamic.mu").unwrap().kind, ResourceKind::DynamicPage);
        assert_eq!(index.lookup("/page/not_marked.mu").unwrap().kind, ResourceKind::StaticPage);
        assert_eq!(index.lookup("/page/not_executable.mu").unwrap().kind, ResourceKind::StaticPage);
        assert_eq!(index.lookup("/file/script.sh").unwrap().kind, ResourceKind::StaticFile);
    }

    #[test]
    fn test_only_missing_entries_count_as_vanished() {
        use std::io::{Error, ErrorKind};
        use crate::content::impls::content_index::is_vanished;
        assert!(is_vanished(&Error::from(ErrorKind::NotFound)));
        assert!(!is_vanished(&Error::from(ErrorKind::PermissionDenied)));
        assert!(!is_vanished(&Error::from(ErrorKind::NotADirectory)));
    }
}
