//! Server-block document rendering.
//!
//! The grammar is fixed: directive order matters because the registry
//! extracts `root` and `listen` back out of the rendered text.

use std::path::Path;

/// Render a complete server block for one served directory.
///
/// The `error_page` line is emitted only when a custom 404 page is given
/// and the file actually exists.
pub fn render_site_document(
    root: &str,
    port: u16,
    autoindex: bool,
    custom_404: Option<&str>,
) -> String {
    let autoindex = if autoindex { "on" } else { "off" };

    let mut document = String::new();
    document.push_str("server {\n");
    document.push_str(&format!("    listen {port};\n"));
    document.push_str("    server_name localhost;\n\n");
    document.push_str(&format!("    root {root};\n"));
    document.push_str("    index index.html index.htm index.php;\n\n");
    document.push_str(&format!("    autoindex {autoindex};\n\n"));

    if let Some(page) = custom_404 {
        if !page.is_empty() && Path::new(page).exists() {
            document.push_str(&format!("    error_page 404 {page};\n\n"));
        }
    }

    document.push_str("    location ~ \\.php$ {\n");
    document.push_str("        include snippets/fastcgi-php.conf;\n");
    document.push_str("        fastcgi_pass unix:/var/run/php/php7.4-fpm.sock;\n");
    document.push_str("    }\n\n");
    document.push_str("    location ~ /\\.ht {\n");
    document.push_str("        deny all;\n");
    document.push_str("    }\n");
    document.push_str("}\n");
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shape() {
        let doc = render_site_document("/srv/app", 8080, true, None);
        assert!(doc.starts_with("server {\n"));
        assert!(doc.contains("    listen 8080;\n"));
        assert!(doc.contains("    root /srv/app;\n"));
        assert!(doc.contains("    autoindex on;\n"));
        assert!(doc.contains("fastcgi_pass unix:/var/run/php/php7.4-fpm.sock;"));
        assert!(doc.contains("location ~ /\\.ht {\n        deny all;\n    }"));
        assert!(doc.ends_with("}\n"));
        assert!(!doc.contains("error_page"));
    }

    #[test]
    fn test_autoindex_off() {
        let doc = render_site_document("/srv/app", 80, false, None);
        assert!(doc.contains("    autoindex off;\n"));
    }

    #[test]
    fn test_error_page_requires_existing_file() {
        // A path that does not exist is silently dropped.
        let doc = render_site_document("/srv/app", 8080, false, Some("/no/such/404.html"));
        assert!(!doc.contains("error_page"));

        let page = tempfile::NamedTempFile::new().unwrap();
        let page_path = page.path().to_string_lossy().into_owned();
        let doc = render_site_document("/srv/app", 8080, false, Some(&page_path));
        assert!(doc.contains(&format!("    error_page 404 {page_path};\n")));
    }
}
