//! Output format resolution from file suffixes.

use crate::error::ConvertError;
use std::fmt;
use std::path::Path;

/// One of the supported output file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Bmp,
    Ico,
    Gif,
    Pcx,
    Dcx,
    Png,
    Tiff,
    Wbmp,
    Xbm,
    Xpm,
}

/// Suffix table consulted by [`OutputFormat::from_path`]. Matching is exact
/// and case-sensitive, so `.PNG` does not resolve.
const SUFFIXES: [(&str, OutputFormat); 10] = [
    (".bmp", OutputFormat::Bmp),
    (".ico", OutputFormat::Ico),
    (".gif", OutputFormat::Gif),
    (".pcx", OutputFormat::Pcx),
    (".dcx", OutputFormat::Dcx),
    (".png", OutputFormat::Png),
    (".tiff", OutputFormat::Tiff),
    (".wbmp", OutputFormat::Wbmp),
    (".xbm", OutputFormat::Xbm),
    (".xpm", OutputFormat::Xpm),
];

impl OutputFormat {
    /// Resolve the output format from the path's literal suffix.
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let name = path.to_string_lossy();
        SUFFIXES
            .iter()
            .find(|(suffix, _)| name.ends_with(suffix))
            .map(|&(_, format)| format)
            .ok_or_else(|| ConvertError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }

    /// Lowercase suffix associated with this format, including the dot.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Bmp => ".bmp",
            Self::Ico => ".ico",
            Self::Gif => ".gif",
            Self::Pcx => ".pcx",
            Self::Dcx => ".dcx",
            Self::Png => ".png",
            Self::Tiff => ".tiff",
            Self::Wbmp => ".wbmp",
            Self::Xbm => ".xbm",
            Self::Xpm => ".xpm",
        }
    }

    /// Short uppercase name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bmp => "BMP",
            Self::Ico => "ICO",
            Self::Gif => "GIF",
            Self::Pcx => "PCX",
            Self::Dcx => "DCX",
            Self::Png => "PNG",
            Self::Tiff => "TIFF",
            Self::Wbmp => "WBMP",
            Self::Xbm => "XBM",
            Self::Xpm => "XPM",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_supported_suffix() {
        for (suffix, expected) in SUFFIXES {
            let name = format!("out{suffix}");
            let resolved = OutputFormat::from_path(Path::new(&name));
            assert_eq!(resolved.unwrap(), expected, "suffix {suffix}");
        }
    }

    #[test]
    fn unknown_suffix_is_unsupported() {
        let err = OutputFormat::from_path(Path::new("result.jpg")).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedFormat { .. }));
        assert!(err.to_string().contains("result.jpg"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(OutputFormat::from_path(Path::new("OUT.PNG")).is_err());
        assert!(OutputFormat::from_path(Path::new("out.Tiff")).is_err());
    }

    #[test]
    fn missing_extension_is_unsupported() {
        assert!(OutputFormat::from_path(Path::new("plainfile")).is_err());
    }

    #[test]
    fn wbmp_does_not_collide_with_bmp() {
        let resolved = OutputFormat::from_path(Path::new("a.wbmp")).unwrap();
        assert_eq!(resolved, OutputFormat::Wbmp);
        assert_eq!(resolved.suffix(), ".wbmp");
    }
}
