//! Data-source URIs (`protocol://path`) attached to layers.
//!
//! The viewer resolves these itself; here they are only checked for shape so
//! a broken link is caught before it is shared. `boss://` sources get a full
//! parse because their path encodes collection/experiment/channel.

mod boss;

pub use boss::{BossSource, Encoding};

use std::fmt;

use crate::error::{Result, StateError};

/// Protocols the viewer registers data-source factories for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Boss,
    Precomputed,
    Ndstore,
    Catmaid,
    Render,
    Python,
    N5,
    Zarr,
    Nifti,
    Dvid,
    Brainmaps,
}

impl Protocol {
    const ALL: [Protocol; 11] = [
        Protocol::Boss,
        Protocol::Precomputed,
        Protocol::Ndstore,
        Protocol::Catmaid,
        Protocol::Render,
        Protocol::Python,
        Protocol::N5,
        Protocol::Zarr,
        Protocol::Nifti,
        Protocol::Dvid,
        Protocol::Brainmaps,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Boss => "boss",
            Protocol::Precomputed => "precomputed",
            Protocol::Ndstore => "ndstore",
            Protocol::Catmaid => "catmaid",
            Protocol::Render => "render",
            Protocol::Python => "python",
            Protocol::N5 => "n5",
            Protocol::Zarr => "zarr",
            Protocol::Nifti => "nifti",
            Protocol::Dvid => "dvid",
            Protocol::Brainmaps => "brainmaps",
        }
    }

    fn from_scheme(scheme: &str) -> Option<Self> {
        Protocol::ALL.into_iter().find(|p| p.as_str() == scheme)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed layer source.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Boss(BossSource),
    /// Any other known protocol; the path is passed to the viewer untouched.
    Other { protocol: Protocol, path: String },
}

impl DataSource {
    pub fn parse(uri: &str) -> Result<Self> {
        let (scheme, path) = uri
            .split_once("://")
            .ok_or_else(|| StateError::invalid_source(uri, "expected <protocol>://<path>"))?;
        let protocol = Protocol::from_scheme(scheme).ok_or_else(|| {
            StateError::invalid_source(uri, format!("unsupported protocol {scheme:?}"))
        })?;
        if path.is_empty() {
            return Err(StateError::invalid_source(uri, "empty path"));
        }

        match protocol {
            Protocol::Boss => BossSource::parse(uri, path).map(DataSource::Boss),
            protocol => Ok(DataSource::Other {
                protocol,
                path: path.to_string(),
            }),
        }
    }

    pub fn protocol(&self) -> Protocol {
        match self {
            DataSource::Boss(_) => Protocol::Boss,
            DataSource::Other { protocol, .. } => *protocol,
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Boss(b) => write!(f, "{b}"),
            DataSource::Other { protocol, path } => {
                writeln!(f, "protocol:   {protocol}")?;
                write!(f, "path:       {path}")
            }
        }
    }
}
