/// Site-level switches for the portfolio page.
///
/// Server settings (address, site root, reload port) come from
/// `[package.metadata.leptos]` through `leptos::config::get_configuration`;
/// this struct only covers what the page itself renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    /// The resume download is unfinished and stays hidden unless enabled here.
    pub show_resume_download: bool,
    pub resume_href: &'static str,
}

impl SiteConfig {
    pub const fn new() -> Self {
        Self {
            show_resume_download: false,
            resume_href: "/resume.pdf",
        }
    }

    pub const fn with_resume_download(mut self, show: bool) -> Self {
        self.show_resume_download = show;
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_download_dormant_by_default() {
        let config = SiteConfig::default();
        assert!(!config.show_resume_download);
        assert_eq!(config.resume_href, "/resume.pdf");
    }

    #[test]
    fn test_builder_overrides() {
        let config = SiteConfig::new().with_resume_download(true);
        assert!(config.show_resume_download);
        assert_eq!(config.resume_href, SiteConfig::default().resume_href);
    }

    #[test]
    fn test_leptos_metadata_matches_shell() {
        // shell() links /pkg/portfolio-site.css
        let manifest = include_str!("../Cargo.toml");
        assert!(manifest.contains(r#"output-name = "portfolio-site""#));
        assert!(manifest.contains(r#"site-pkg-dir = "pkg""#));
        assert!(manifest.contains(r#"assets-dir = "public""#));
        assert!(manifest.contains(r#"tailwind-input-file = "input.css""#));
    }
}
