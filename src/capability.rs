//! Startup check for the document backends
//!
//! The DOCX and PDF writers are optional Cargo features. A build without one
//! of them can still parse resumes, but generation must stop before any file
//! is written and tell the user how to get a complete build.

use std::fmt;

use thiserror::Error;

/// An output backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Docx,
    Pdf,
}

impl Backend {
    pub fn feature(&self) -> &'static str {
        match self {
            Backend::Docx => "docx",
            Backend::Pdf => "pdf",
        }
    }

    /// The crate implementing the backend
    pub fn library(&self) -> &'static str {
        match self {
            Backend::Docx => "docx-rs",
            Backend::Pdf => "printpdf",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.library())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("Missing dependency: {backend}. Run: {remedy}")]
    Missing { backend: Backend, remedy: String },
}

/// Which backends this build carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub docx: bool,
    pub pdf: bool,
}

impl Capabilities {
    /// Backends compiled into this binary
    pub fn detect() -> Self {
        Self {
            docx: cfg!(feature = "docx"),
            pdf: cfg!(feature = "pdf"),
        }
    }

    pub fn supports(&self, backend: Backend) -> bool {
        match backend {
            Backend::Docx => self.docx,
            Backend::Pdf => self.pdf,
        }
    }

    /// Fail with a remediation hint if the backend is unavailable
    pub fn require(&self, backend: Backend) -> Result<(), CapabilityError> {
        if self.supports(backend) {
            Ok(())
        } else {
            Err(CapabilityError::Missing {
                backend,
                remedy: format!(
                    "cargo install {} --features {}",
                    env!("CARGO_PKG_NAME"),
                    backend.feature()
                ),
            })
        }
    }

    /// Require every backend, in output order
    pub fn require_all(&self) -> Result<(), CapabilityError> {
        self.require(Backend::Docx)?;
        self.require(Backend::Pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build_has_both_backends() {
        let caps = Capabilities::detect();
        assert_eq!(caps.docx, cfg!(feature = "docx"));
        assert_eq!(caps.pdf, cfg!(feature = "pdf"));
    }

    #[test]
    fn test_require_missing_backend() {
        let caps = Capabilities {
            docx: true,
            pdf: false,
        };
        assert!(caps.require(Backend::Docx).is_ok());
        let err = caps.require(Backend::Pdf).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Missing dependency: printpdf"), "{}", message);
        assert!(message.contains("--features pdf"), "{}", message);
    }

    #[test]
    fn test_require_all_reports_first_missing() {
        let caps = Capabilities {
            docx: false,
            pdf: false,
        };
        assert!(matches!(
            caps.require_all(),
            Err(CapabilityError::Missing {
                backend: Backend::Docx,
                ..
            })
        ));
        assert!(Capabilities {
            docx: true,
            pdf: true
        }
        .require_all()
        .is_ok());
    }
}
