//! Where the ontology comes from and how individuals are named.

use oxrdfio::RdfFormat;
use std::path::{Path, PathBuf};

/// Location of the ontology document.
#[derive(Debug, Clone)]
pub enum OntologySource {
    /// A document compiled into the binary.
    Embedded(&'static str),
    /// A document read from the file system when the ontology is loaded.
    File(PathBuf),
}

/// Configuration of an [`OntologyFacade`](crate::OntologyFacade).
///
/// ```
/// use osfgraph::OntologyConfig;
/// use oxrdfio::RdfFormat;
///
/// let config = OntologyConfig::from_file("ontology/osf.ttl", "http://example.org/onto#")
///     .with_instance_base("https://example.org/data/");
/// assert_eq!(config.format(), Some(RdfFormat::Turtle));
/// assert_eq!(config.instance_base(), "https://example.org/data/");
/// ```
#[derive(Debug, Clone)]
pub struct OntologyConfig {
    source: OntologySource,
    format: Option<RdfFormat>,
    namespace: String,
    instance_base: String,
}

impl OntologyConfig {
    /// Namespace of the OSF business object model.
    pub const OSF_NAMESPACE: &'static str =
        "http://dataconservancy.org/osf-business-object-model#";

    /// Default base IRI of OSF individuals.
    pub const OSF_INSTANCE_BASE: &'static str = "https://osf.io/";

    /// Configuration for a Turtle document compiled into the binary.
    pub fn embedded(document: &'static str, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        Self {
            source: OntologySource::Embedded(document),
            format: Some(RdfFormat::Turtle),
            instance_base: namespace.clone(),
            namespace,
        }
    }

    /// Configuration for a document on disk.
    ///
    /// The format is guessed from the file extension and can be overridden with [`with_format`](Self::with_format).
    pub fn from_file(path: impl AsRef<Path>, namespace: impl Into<String>) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = path
            .extension()
            .and_then(|extension| extension.to_str())
            .and_then(RdfFormat::from_extension);
        let namespace = namespace.into();
        Self {
            source: OntologySource::File(path),
            format,
            instance_base: namespace.clone(),
            namespace,
        }
    }

    /// The OSF business object model shipped with the crate.
    pub fn osf() -> Self {
        Self::embedded(
            include_str!("../ontology/osf.ttl"),
            Self::OSF_NAMESPACE,
        )
        .with_instance_base(Self::OSF_INSTANCE_BASE)
    }

    /// Sets the serialization format of the document.
    #[must_use]
    pub fn with_format(mut self, format: RdfFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the IRI relative identifiers of individuals are resolved against.
    ///
    /// Defaults to the ontology namespace.
    #[must_use]
    pub fn with_instance_base(mut self, instance_base: impl Into<String>) -> Self {
        self.instance_base = instance_base.into();
        self
    }

    #[inline]
    pub fn source(&self) -> &OntologySource {
        &self.source
    }

    #[inline]
    pub fn format(&self) -> Option<RdfFormat> {
        self.format
    }

    /// The ontology namespace, e.g. `http://example.org/onto#`.
    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn instance_base(&self) -> &str {
        &self.instance_base
    }
}
