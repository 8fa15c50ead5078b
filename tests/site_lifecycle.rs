//! Store-level lifecycle tests for site configurations.

use std::fs;

use nginx_site_admin::sites::{SaveRequest, SiteError, SiteStore};

mod common;
use common::{site_dirs, SiteDirs};

fn store(dirs: &SiteDirs) -> SiteStore {
    SiteStore::new(
        dirs.available.clone(),
        dirs.enabled.clone(),
        vec!["default".to_string()],
    )
}

fn save_request(path: &std::path::Path, port: u32) -> SaveRequest {
    SaveRequest {
        path: path.display().to_string(),
        port,
        autoindex: true,
        custom_404: None,
    }
}

#[test]
fn test_save_then_list_round_trip() {
    let dirs = site_dirs();
    let store = store(&dirs);

    let saved = store.save(&save_request(&dirs.webroot, 8080)).unwrap();

    let entries = store.registry().list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, saved.name);
    assert_eq!(entries[0].root, dirs.webroot.display().to_string());
    assert_eq!(entries[0].port, Some(8080));

    let link = dirs.enabled.join(&saved.name);
    let metadata = fs::symlink_metadata(&link).unwrap();
    assert!(metadata.file_type().is_symlink());
    assert_eq!(
        fs::read_link(&link).unwrap(),
        dirs.available.join(&saved.name)
    );
}

#[test]
fn test_port_conflict_and_self_exclusion() {
    let dirs = site_dirs();
    let store = store(&dirs);
    let other = dirs.root.path().join("other");
    fs::create_dir(&other).unwrap();

    let saved = store.save(&save_request(&dirs.webroot, 8080)).unwrap();

    let err = store.save(&save_request(&other, 8080)).unwrap_err();
    assert!(matches!(err, SiteError::PortConflict(8080)));

    let registry = store.registry();
    assert!(registry.is_port_in_use(8080, None));
    assert!(!registry.is_port_in_use(8080, Some(&saved.name)));
}

#[test]
fn test_delete_twice_reports_not_found() {
    let dirs = site_dirs();
    let store = store(&dirs);

    let saved = store.save(&save_request(&dirs.webroot, 8080)).unwrap();
    store.delete(&saved.name).unwrap();

    assert!(!dirs.available.join(&saved.name).exists());
    assert!(fs::symlink_metadata(dirs.enabled.join(&saved.name)).is_err());

    let err = store.delete(&saved.name).unwrap_err();
    assert!(matches!(err, SiteError::NotFound(name) if name == saved.name));
}

#[test]
fn test_update_port_rewrites_listen() {
    let dirs = site_dirs();
    let store = store(&dirs);

    let saved = store.save(&save_request(&dirs.webroot, 8080)).unwrap();
    store.update_port(&saved.name, 9090).unwrap();

    let entries = store.registry().list();
    assert_eq!(entries[0].port, Some(9090));

    // A same-value update is indistinguishable from a missing directive
    // and fails the same way.
    let err = store.update_port(&saved.name, 9090).unwrap_err();
    assert!(matches!(err, SiteError::NoChange));
}

#[test]
fn test_update_port_respects_other_entries() {
    let dirs = site_dirs();
    let store = store(&dirs);
    let other = dirs.root.path().join("other");
    fs::create_dir(&other).unwrap();

    let first = store.save(&save_request(&dirs.webroot, 8080)).unwrap();
    store.save(&save_request(&other, 9191)).unwrap();

    let err = store.update_port(&first.name, 9191).unwrap_err();
    assert!(matches!(err, SiteError::PortConflict(9191)));
}

#[test]
fn test_update_port_unknown_name() {
    let dirs = site_dirs();
    let err = store(&dirs).update_port("no-such-site", 9090).unwrap_err();
    assert!(matches!(err, SiteError::NotFound(_)));
}

#[test]
fn test_boundary_ports_rejected_before_conflict_check() {
    let dirs = site_dirs();
    let store = store(&dirs);
    store.save(&save_request(&dirs.webroot, 8080)).unwrap();

    for port in [0, 65536] {
        let err = store.save(&save_request(&dirs.webroot, port)).unwrap_err();
        assert!(
            matches!(err, SiteError::InvalidInput { field: "port", .. }),
            "port {port} must fail input validation, got {err}"
        );
    }
}

#[test]
fn test_save_rejects_non_directory_path() {
    let dirs = site_dirs();
    let store = store(&dirs);

    let err = store
        .save(&save_request(std::path::Path::new("/no/such/dir"), 8080))
        .unwrap_err();
    assert!(matches!(err, SiteError::InvalidPath(_)));

    // Hostile input degrades to a path that cannot be a directory.
    let err = store
        .save(&SaveRequest {
            path: "$(reboot)".to_string(),
            port: 8080,
            autoindex: false,
            custom_404: None,
        })
        .unwrap_err();
    assert!(matches!(err, SiteError::InvalidPath(_)));
}

#[test]
fn test_custom_404_only_rendered_when_present() {
    let dirs = site_dirs();
    let store = store(&dirs);
    let page = dirs.webroot.join("404.html");
    fs::write(&page, "gone").unwrap();

    let saved = store
        .save(&SaveRequest {
            path: dirs.webroot.display().to_string(),
            port: 8080,
            autoindex: false,
            custom_404: Some(page.display().to_string()),
        })
        .unwrap();
    let document = fs::read_to_string(dirs.available.join(&saved.name)).unwrap();
    assert!(document.contains(&format!("error_page 404 {};", page.display())));

    let other = dirs.root.path().join("other");
    fs::create_dir(&other).unwrap();
    let saved = store
        .save(&SaveRequest {
            path: other.display().to_string(),
            port: 8081,
            autoindex: false,
            custom_404: Some("/no/such/404.html".to_string()),
        })
        .unwrap();
    let document = fs::read_to_string(dirs.available.join(&saved.name)).unwrap();
    assert!(!document.contains("error_page"));
}

#[test]
fn test_protected_entry_survives_delete_and_update() {
    let dirs = site_dirs();
    let store = store(&dirs);
    fs::write(
        dirs.available.join("default"),
        "server {\n    listen 80;\n    root /var/www/html;\n}\n",
    )
    .unwrap();

    assert!(matches!(
        store.delete("default").unwrap_err(),
        SiteError::Protected(_)
    ));
    assert!(matches!(
        store.update_port("default", 9090).unwrap_err(),
        SiteError::Protected(_)
    ));
    assert!(dirs.available.join("default").exists());
}

#[test]
fn test_full_scenario() {
    let dirs = site_dirs();
    let store = store(&dirs);
    let other = dirs.root.path().join("other");
    fs::create_dir(&other).unwrap();

    let saved = store.save(&save_request(&dirs.webroot, 8080)).unwrap();

    let entries = store.registry().list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].root, dirs.webroot.display().to_string());
    assert_eq!(entries[0].port, Some(8080));

    assert!(matches!(
        store.save(&save_request(&other, 8080)).unwrap_err(),
        SiteError::PortConflict(8080)
    ));

    store.update_port(&saved.name, 9090).unwrap();
    assert_eq!(store.registry().list()[0].port, Some(9090));

    store.delete(&saved.name).unwrap();
    assert!(store.registry().list().is_empty());
}
