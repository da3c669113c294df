//! Backend URL resolution
//!
//! Everything lives on one origin: the generation endpoint and the static
//! asset root that generated image paths are relative to.

use adforge_core::prelude::*;
use url::Url;

pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";
pub const DEFAULT_GENERATE_PATH: &str = "/api/generate";
pub const DEFAULT_STATIC_PATH: &str = "/static/";

/// Resolved backend URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    origin: Url,
    generate: Url,
    static_root: Url,
}

impl Endpoints {
    /// Resolve endpoints against `origin` using the default paths
    pub fn new(origin: &str) -> Result<Self> {
        Self::with_paths(origin, DEFAULT_GENERATE_PATH, DEFAULT_STATIC_PATH)
    }

    pub fn with_paths(origin: &str, generate_path: &str, static_path: &str) -> Result<Self> {
        let origin_url =
            Url::parse(origin.trim()).map_err(|e| Error::invalid_origin(origin, e.to_string()))?;
        if origin_url.cannot_be_a_base() {
            return Err(Error::invalid_origin(origin, "not a hierarchical URL"));
        }
        if !matches!(origin_url.scheme(), "http" | "https") {
            return Err(Error::invalid_origin(
                origin,
                format!("unsupported scheme '{}'", origin_url.scheme()),
            ));
        }

        let generate = join_path(&origin_url, generate_path)
            .map_err(|e| Error::invalid_origin(origin, e.to_string()))?;

        // The static root must end with '/' so that joining keeps the prefix
        let mut static_path = static_path.trim().to_string();
        if !static_path.ends_with('/') {
            static_path.push('/');
        }
        let static_root = join_path(&origin_url, &static_path)
            .map_err(|e| Error::invalid_origin(origin, e.to_string()))?;

        Ok(Self {
            origin: origin_url,
            generate,
            static_root,
        })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// `POST` target for submissions
    pub fn generate_url(&self) -> &Url {
        &self.generate
    }

    /// Address of a generated image: static root + server-supplied relative path.
    ///
    /// The path is appended verbatim, never resolved as a URL reference, so
    /// schemes or hosts inside it cannot move the address off the backend.
    pub fn asset_url(&self, image_path: &str) -> String {
        let relative = image_path.trim().trim_start_matches('/');
        format!("{}{}", self.static_root, relative)
    }
}

fn join_path(origin: &Url, path: &str) -> std::result::Result<Url, url::ParseError> {
    let path = path.trim();
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    origin.join(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::new(DEFAULT_ORIGIN).unwrap();
        assert_eq!(
            endpoints.generate_url().as_str(),
            "http://localhost:5000/api/generate"
        );
        assert_eq!(
            endpoints.asset_url("outputs/speed.png"),
            "http://localhost:5000/static/outputs/speed.png"
        );
    }

    #[test]
    fn test_asset_url_strips_leading_slash() {
        let endpoints = Endpoints::new("http://localhost:5000/").unwrap();
        assert_eq!(
            endpoints.asset_url("/speed.png"),
            "http://localhost:5000/static/speed.png"
        );
    }

    #[test]
    fn test_custom_static_path_without_trailing_slash() {
        let endpoints =
            Endpoints::with_paths("https://gen.example", "v2/generate", "/assets").unwrap();
        assert_eq!(
            endpoints.generate_url().as_str(),
            "https://gen.example/v2/generate"
        );
        assert_eq!(
            endpoints.asset_url("a/b.png"),
            "https://gen.example/assets/a/b.png"
        );
    }

    #[test]
    fn test_asset_url_never_leaves_static_root() {
        let endpoints = Endpoints::new("http://localhost:5000").unwrap();
        assert_eq!(
            endpoints.asset_url("angle:speed.png"),
            "http://localhost:5000/static/angle:speed.png"
        );
        assert_eq!(
            endpoints.asset_url("http://cdn.example/x.png"),
            "http://localhost:5000/static/http://cdn.example/x.png"
        );
        assert_eq!(
            endpoints.asset_url("//cdn.example/x.png"),
            "http://localhost:5000/static/cdn.example/x.png"
        );
    }

    #[test]
    fn test_origin_path_is_replaced_by_absolute_paths() {
        let endpoints = Endpoints::new("http://10.0.0.2:8080/ui/index.html").unwrap();
        assert_eq!(
            endpoints.generate_url().as_str(),
            "http://10.0.0.2:8080/api/generate"
        );
    }

    #[test]
    fn test_invalid_origins_are_rejected() {
        assert!(Endpoints::new("localhost:5000").is_err());
        assert!(Endpoints::new("not a url").is_err());
        assert!(Endpoints::new("ftp://files.example").is_err());
        assert!(matches!(
            Endpoints::new("mailto:me@example.com"),
            Err(Error::InvalidOrigin { .. })
        ));
    }
}
