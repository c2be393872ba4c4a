use crate::error::AssetMirrorError;
use crate::manifest::AssetDescriptor;
use std::path::{Path, PathBuf};

/// Fixed category directories under the assets root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Images,
    Icons,
    Logos,
    Fonts,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 4] = [
        AssetCategory::Images,
        AssetCategory::Icons,
        AssetCategory::Logos,
        AssetCategory::Fonts,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            AssetCategory::Images => "images",
            AssetCategory::Icons => "icons",
            AssetCategory::Logos => "logos",
            AssetCategory::Fonts => "fonts",
        }
    }

    /// Three-way classification by type tag. Note that `icon` assets are
    /// routed into `logos/`, not `icons/`; the `icons/` directory is created
    /// alongside the others but never selected as a write target. This
    /// mirrors the taxonomy of the upstream manifest format.
    pub fn from_type_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("font") => AssetCategory::Fonts,
            Some("icon") | Some("logo") => AssetCategory::Logos,
            _ => AssetCategory::Images,
        }
    }
}

/// The on-disk layout: four category directories under a single root.
#[derive(Debug, Clone)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn category_dir(&self, category: AssetCategory) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// Creates every category directory, including the unused `icons/`.
    /// Must run before any fetch is attempted.
    pub fn ensure_directories(&self) -> Result<(), AssetMirrorError> {
        for category in AssetCategory::ALL {
            std::fs::create_dir_all(self.category_dir(category))?;
        }
        Ok(())
    }

    /// Resolves the destination path for one descriptor: category directory
    /// from the type tag, filename from the descriptor or the URL.
    pub fn destination(&self, descriptor: &AssetDescriptor) -> Result<PathBuf, AssetMirrorError> {
        let filename = resolve_filename(descriptor)?;
        let category = AssetCategory::from_type_tag(descriptor.kind.as_deref());
        Ok(self.category_dir(category).join(filename))
    }
}

/// Resolves the destination filename for a descriptor.
///
/// An explicit non-empty `filename` wins; otherwise the final path segment of
/// the URL is used. Either way the candidate is percent-decoded and anything
/// from the first `?` onwards is stripped, so `.../logo%20final.png?v=2`
/// resolves to `logo final.png`.
pub fn resolve_filename(descriptor: &AssetDescriptor) -> Result<String, AssetMirrorError> {
    let url = descriptor
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AssetMirrorError::AssetResolution {
            url: "<missing url>".to_string(),
            reason: "descriptor has no url".to_string(),
        })?;

    let candidate = match descriptor.filename.as_deref().filter(|f| !f.is_empty()) {
        Some(explicit) => explicit.to_string(),
        None => filename_from_url(url)?,
    };

    let decoded = urlencoding::decode(&candidate).map_err(|e| {
        AssetMirrorError::AssetResolution {
            url: url.to_string(),
            reason: format!("filename {:?} is not valid percent-encoded UTF-8: {}", candidate, e),
        }
    })?;
    let name = decoded.split('?').next().unwrap_or_default().to_string();

    ensure_single_path_segment(&name, url)?;
    Ok(name)
}

/// Extracts the final non-empty path segment of the URL.
fn filename_from_url(url: &str) -> Result<String, AssetMirrorError> {
    let parsed = url::Url::parse(url).map_err(|e| AssetMirrorError::AssetResolution {
        url: url.to_string(),
        reason: format!("invalid URL: {}", e),
    })?;
    parsed
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .next_back()
        .map(|s| s.to_string())
        .ok_or_else(|| AssetMirrorError::AssetResolution {
            url: url.to_string(),
            reason: "URL has no path segment to derive a filename from".to_string(),
        })
}

/// Rejects resolved names that would escape the category directory: path
/// separators, `.`/`..`, and absolute paths are all per-item errors.
fn ensure_single_path_segment(name: &str, url: &str) -> Result<(), AssetMirrorError> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(AssetMirrorError::AssetResolution {
            url: url.to_string(),
            reason: format!("unsafe filename {:?}: must be a single path segment", name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(url: &str, filename: Option<&str>, kind: Option<&str>) -> AssetDescriptor {
        AssetDescriptor {
            url: Some(url.to_string()),
            filename: filename.map(str::to_string),
            kind: kind.map(str::to_string),
        }
    }

    #[test]
    fn test_font_type_maps_to_fonts() {
        assert_eq!(
            AssetCategory::from_type_tag(Some("font")),
            AssetCategory::Fonts
        );
    }

    #[test]
    fn test_icon_and_logo_types_map_to_logos() {
        assert_eq!(
            AssetCategory::from_type_tag(Some("icon")),
            AssetCategory::Logos
        );
        assert_eq!(
            AssetCategory::from_type_tag(Some("logo")),
            AssetCategory::Logos
        );
    }

    #[test]
    fn test_other_and_missing_types_map_to_images() {
        assert_eq!(
            AssetCategory::from_type_tag(Some("image")),
            AssetCategory::Images
        );
        assert_eq!(
            AssetCategory::from_type_tag(Some("video")),
            AssetCategory::Images
        );
        assert_eq!(AssetCategory::from_type_tag(None), AssetCategory::Images);
    }

    #[test]
    fn test_filename_derived_from_url_is_decoded_and_query_stripped() {
        let d = descriptor("https://x/y/logo%20final.png?v=2", None, None);
        assert_eq!(resolve_filename(&d).unwrap(), "logo final.png");
    }

    #[test]
    fn test_explicit_filename_wins_over_url() {
        let d = descriptor("https://x/y/ignored.png", Some("hero.png"), None);
        assert_eq!(resolve_filename(&d).unwrap(), "hero.png");
    }

    #[test]
    fn test_empty_explicit_filename_falls_back_to_url() {
        let d = descriptor("https://x/y/fallback.png", Some(""), None);
        assert_eq!(resolve_filename(&d).unwrap(), "fallback.png");
    }

    #[test]
    fn test_missing_url_is_a_resolution_error() {
        let d = AssetDescriptor {
            url: None,
            filename: Some("orphan.png".to_string()),
            kind: None,
        };
        assert!(matches!(
            resolve_filename(&d),
            Err(AssetMirrorError::AssetResolution { .. })
        ));
    }

    #[test]
    fn test_url_without_path_segment_is_a_resolution_error() {
        let d = descriptor("https://example.com/", None, None);
        assert!(matches!(
            resolve_filename(&d),
            Err(AssetMirrorError::AssetResolution { .. })
        ));
    }

    #[test]
    fn test_traversal_filenames_are_rejected() {
        for bad in ["../evil.png", "/etc/passwd", "a/b.png", "..", "%2e%2e%2fup.png"] {
            let d = descriptor("https://x/y/z.png", Some(bad), None);
            assert!(
                matches!(
                    resolve_filename(&d),
                    Err(AssetMirrorError::AssetResolution { .. })
                ),
                "filename {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_destination_combines_category_and_filename() {
        let layout = AssetLayout::new("/srv/assets");
        let d = descriptor("https://cdn.example.com/fonts/display.woff2", None, Some("font"));
        assert_eq!(
            layout.destination(&d).unwrap(),
            PathBuf::from("/srv/assets/fonts/display.woff2")
        );
    }

    #[test]
    fn test_ensure_directories_creates_all_four() {
        let dir = tempfile::tempdir().expect("tempdir");
        let layout = AssetLayout::new(dir.path().join("assets"));
        layout.ensure_directories().expect("create dirs");

        for name in ["images", "icons", "logos", "fonts"] {
            assert!(
                dir.path().join("assets").join(name).is_dir(),
                "{} should exist",
                name
            );
        }
    }
}
