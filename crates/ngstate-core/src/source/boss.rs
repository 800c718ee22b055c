//! `boss://` sources: `boss://http(s)://host/collection/experiment[/channel][?key=value&...]`.

use percent_encoding::percent_decode_str;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, StateError};

/// API version prefix used by the Boss REST endpoints.
const API_VERSION: &str = "v0.7";

/// Chunk encoding requested from the Boss tile service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Jpeg,
    Npz,
}

impl Encoding {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "jpeg" => Ok(Encoding::Jpeg),
            "npz" => Ok(Encoding::Npz),
            other => Err(StateError::InvalidEncoding(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Jpeg => "jpeg",
            Encoding::Npz => "npz",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BossSource {
    /// `scheme://host[:port]` of the Boss API server.
    pub base_url: String,
    pub collection: String,
    pub experiment: String,
    /// When absent the viewer picks the experiment's only channel.
    pub channel: Option<String>,
    pub encoding: Encoding,
    /// All query parameters, `encoding` included.
    pub parameters: BTreeMap<String, String>,
}

impl BossSource {
    /// Parses the part after `boss://`. `uri` is the full source, for errors.
    pub(crate) fn parse(uri: &str, path: &str) -> Result<Self> {
        if !(path.starts_with("http://") || path.starts_with("https://")) {
            return Err(StateError::invalid_source(
                uri,
                "boss source must start with http:// or https://",
            ));
        }

        let parsed = url::Url::parse(path)
            .map_err(|e| StateError::invalid_source(uri, format!("bad server URL: {e}")))?;
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| StateError::invalid_source(uri, "missing server host"))?;
        let base_url = match parsed.port() {
            Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
            None => format!("{}://{}", parsed.scheme(), host),
        };

        // Slice the raw text rather than using Url::path(), which would normalize segments.
        // The query comes off first: a '/' inside it must not start the volume path.
        let after_scheme = &path[path.find("://").map_or(0, |i| i + 3)..];
        let (authority_and_path, query) = match after_scheme.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (after_scheme, None),
        };
        let volume_path = match authority_and_path.find('/') {
            Some(i) => &authority_and_path[i + 1..],
            None => return Err(StateError::invalid_source(uri, "missing volume path")),
        };

        let segments: Vec<&str> = volume_path.split('/').collect();
        if !(2..=3).contains(&segments.len()) || segments.iter().any(|s| s.is_empty()) {
            return Err(StateError::invalid_source(
                uri,
                "expected collection/experiment[/channel]",
            ));
        }

        let parameters = parse_query(uri, query.unwrap_or(""))?;
        let encoding = match parameters.get("encoding") {
            Some(e) => Encoding::parse(e)?,
            None => Encoding::default(),
        };

        Ok(Self {
            base_url,
            collection: segments[0].to_string(),
            experiment: segments[1].to_string(),
            channel: segments.get(2).map(|s| s.to_string()),
            encoding,
            parameters,
        })
    }

    /// REST path for the experiment metadata.
    pub fn experiment_path(&self) -> String {
        format!(
            "/{API_VERSION}/collection/{}/experiment/{}/",
            self.collection, self.experiment
        )
    }

    /// REST path for the channel metadata, if a channel was named.
    pub fn channel_path(&self) -> Option<String> {
        self.channel.as_ref().map(|channel| {
            format!(
                "/{API_VERSION}/collection/{}/experiment/{}/channel/{}/",
                self.collection, self.experiment, channel
            )
        })
    }
}

impl fmt::Display for BossSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "protocol:   boss")?;
        writeln!(f, "server:     {}", self.base_url)?;
        writeln!(f, "collection: {}", self.collection)?;
        writeln!(f, "experiment: {}", self.experiment)?;
        writeln!(f, "channel:    {}", self.channel.as_deref().unwrap_or("(only channel)"))?;
        writeln!(f, "encoding:   {}", self.encoding.as_str())?;
        write!(f, "api:        {}{}", self.base_url, self.experiment_path())?;
        if let Some(channel_path) = self.channel_path() {
            write!(f, "\n            {}{}", self.base_url, channel_path)?;
        }
        Ok(())
    }
}

fn parse_query(uri: &str, query: &str) -> Result<BTreeMap<String, String>> {
    let mut out = BTreeMap::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let decode = |s: &str| {
            percent_decode_str(s)
                .decode_utf8()
                .map(|c| c.into_owned())
                .map_err(|_| StateError::invalid_source(uri, format!("bad query parameter {pair:?}")))
        };
        out.insert(decode(key)?, decode(value)?);
    }
    Ok(out)
}
