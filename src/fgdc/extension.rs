//! Accepted file extensions and their destination naming rules

use std::fmt;

/// Extensions considered when scanning a working directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    Xml,
    Txt,
    Html,
    Gce,
}

impl Extension {
    /// Every accepted extension, in the order sidecars are copied
    pub const ALL: [Extension; 4] = [Extension::Xml, Extension::Txt, Extension::Html, Extension::Gce];

    /// Extension including the leading dot
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Xml => ".xml",
            Extension::Txt => ".txt",
            Extension::Html => ".html",
            Extension::Gce => ".gce",
        }
    }

    /// Parse an extension with or without its leading dot
    ///
    /// Matching is case-sensitive.
    pub fn parse(ext: &str) -> Option<Extension> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Extension::ALL.iter().copied().find(|candidate| &candidate.as_str()[1..] == ext)
    }

    /// Name a sidecar with this extension receives inside the dataset directory
    ///
    /// The ISO sidecar is suffixed so it does not clash with the stripped record,
    /// which takes the plain `<dataset>.xml` name.
    pub fn sidecar_destination(&self, dataset_id: &str) -> String {
        match self {
            Extension::Xml => format!("{}_iso{}", dataset_id, self.as_str()),
            Extension::Txt | Extension::Html | Extension::Gce => {
                format!("{}{}", dataset_id, self.as_str())
            }
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
