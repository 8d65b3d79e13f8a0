//! The two flavours of generated project.
//!
//! Both share the same pipeline; they only differ in which metadata and
//! data-fetching packages get installed, the font query in the stylesheet,
//! and whether an entry point wrapping the app in a provider is written.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// react-helmet, Montserrat + Poppins
    #[default]
    Classic,
    /// react-helmet-async + axios, Poppins only, HelmetProvider entry point
    Async,
}

impl Variant {
    /// Runtime packages installed after the generator has run.
    #[must_use]
    pub fn runtime_dependencies(self) -> &'static [&'static str] {
        match self {
            Self::Classic => &["react-router-dom", "react-helmet"],
            Self::Async => &["react-router-dom", "react-helmet-async", "axios"],
        }
    }

    /// The package that provides `<Helmet>` in the generated home page.
    #[must_use]
    pub fn metadata_package(self) -> &'static str {
        match self {
            Self::Classic => "react-helmet",
            Self::Async => "react-helmet-async",
        }
    }

    /// Query string appended to the Google Fonts css2 URL.
    #[must_use]
    pub fn font_query(self) -> &'static str {
        match self {
            Self::Classic => {
                "family=Montserrat:ital,wght@0,100..900;1,100..900&family=Poppins:ital,wght@0,100;0,200;0,300;0,400;0,500;0,600;0,700;0,800;0,900;1,100;1,200;1,300;1,400;1,500;1,600;1,700;1,800;1,900&display=swap"
            }
            Self::Async => "family=Poppins:wght@400;500;600;700&display=swap",
        }
    }

    /// Whether `src/index.js` is rewritten to mount a `HelmetProvider`.
    #[must_use]
    pub fn writes_entry_point(self) -> bool {
        matches!(self, Self::Async)
    }
}
