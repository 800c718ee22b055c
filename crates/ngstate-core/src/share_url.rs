//! Shareable link codec: `{prefix}#!{percent-encoded compact JSON state}`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Result, StateError};
use crate::state::ViewerState;

/// Public viewer deployment used when no prefix is configured.
pub const DEFAULT_VIEWER_PREFIX: &str = "https://neuroglancer-demo.appspot.com/";

/// Marks the start of the state in the URL fragment.
const FRAGMENT_MARKER: &str = "#!";

/// Escaped in the fragment: everything except ASCII alphanumerics and the
/// punctuation the viewer's own client leaves readable.
const FRAGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'@')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'!')
    .remove(b'+')
    .remove(b'=')
    .remove(b':')
    .remove(b';')
    .remove(b',')
    .remove(b'?')
    .remove(b'/')
    .remove(b'\'');

/// Compact JSON (no whitespace) for `state`.
pub fn to_compact_json(state: &ViewerState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Percent-encodes compact JSON for use after `#!`.
pub fn encode_fragment(json: &str) -> String {
    utf8_percent_encode(json, FRAGMENT).to_string()
}

/// Validates `state` and renders it as a link under `prefix`.
pub fn to_url(state: &ViewerState, prefix: &str) -> Result<String> {
    state.validate()?;
    let json = to_compact_json(state)?;
    let url = format!("{prefix}{FRAGMENT_MARKER}{}", encode_fragment(&json));
    tracing::debug!(
        layers = state.layers().len(),
        json_len = json.len(),
        url_len = url.len(),
        "encoded viewer state"
    );
    Ok(url)
}

/// Splits a link into its prefix and still-encoded state fragment.
pub fn split_url(url: &str) -> Result<(&str, &str)> {
    url.split_once(FRAGMENT_MARKER)
        .ok_or_else(|| StateError::MissingFragment(url.to_string()))
}

/// Decodes a link produced by [`to_url`] (or by the viewer itself).
pub fn from_url(url: &str) -> Result<ViewerState> {
    let (prefix, fragment) = split_url(url)?;
    let json = percent_decode_str(fragment).decode_utf8()?;
    let state: ViewerState = serde_json::from_str(&json)?;
    state.validate()?;
    tracing::debug!(prefix, layers = state.layers().len(), "decoded viewer state");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BlendMode, ImageLayer, Layout};

    #[test]
    fn encodes_json_punctuation() {
        assert_eq!(
            encode_fragment(r#"{"a":[1,2],"b":"x y"}"#),
            "%7B%22a%22:%5B1,2%5D,%22b%22:%22x%20y%22%7D"
        );
    }

    #[test]
    fn leaves_source_urls_readable() {
        assert_eq!(
            encode_fragment("boss://https://api.example.org/c/e?encoding=npz&x=1"),
            "boss://https://api.example.org/c/e?encoding=npz&x=1"
        );
    }

    #[test]
    fn encodes_non_ascii_as_utf8() {
        assert_eq!(encode_fragment("µ"), "%C2%B5");
    }

    #[test]
    fn empty_state_url() {
        let url = to_url(&ViewerState::new(), "https://viewer.example/").unwrap();
        assert_eq!(url, "https://viewer.example/#!%7B%22layers%22:%7B%7D%7D");
    }

    #[test]
    fn missing_fragment_is_an_error() {
        let err = from_url("https://neuroglancer-demo.appspot.com/").unwrap_err();
        assert!(matches!(err, StateError::MissingFragment(_)));
    }

    #[test]
    fn bad_json_is_an_error() {
        let err = from_url("https://viewer.example/#!%7B%22layers%22").unwrap_err();
        assert!(matches!(err, StateError::Json(_)));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let err = from_url("https://viewer.example/#!%FF%FE").unwrap_err();
        assert!(matches!(err, StateError::InvalidUtf8(_)));
    }

    #[test]
    fn decodes_old_boss_viewer_link() {
        let link = "https://viz.boss.neurodata.io/#!%7B%22layers%22:%7B%22image%22:%7B%22source%22:%22boss://https://api.boss.neurodata.io/bloss/bloss18/image?%22%2C%22type%22:%22image%22%2C%22blend%22:%22additive%22%7D%7D%2C%22navigation%22:%7B%22pose%22:%7B%22position%22:%7B%22voxelSize%22:%5B3.890000104904175%2C3.890000104904175%2C50%5D%2C%22voxelCoordinates%22:%5B42203.01171875%2C53001%2C160%5D%7D%7D%2C%22zoomFactor%22:3.890000104904175%7D%2C%22layout%22:%22xy%22%7D";
        let state = from_url(link).unwrap();
        assert_eq!(state.layout(), Some(Layout::Xy));
        assert_eq!(state.voxel_coordinates(), Some([42203.01171875, 53001.0, 160.0]));
        match state.layers().get("image") {
            Some(crate::state::Layer::Image(l)) => assert_eq!(l.blend, Some(BlendMode::Additive)),
            other => panic!("expected image layer, got {other:?}"),
        }
    }

    #[test]
    fn to_url_rejects_invalid_state() {
        let mut state = ViewerState::new();
        state
            .layers_mut()
            .insert("image", ImageLayer::new("boss://https://host/only"));
        assert!(to_url(&state, DEFAULT_VIEWER_PREFIX).is_err());
    }

    #[test]
    fn to_url_rejects_nan_perspective_zoom() {
        let mut state = ViewerState::new();
        state.perspective_zoom = Some(crate::state::Coord(f64::NAN));
        assert!(matches!(
            to_url(&state, DEFAULT_VIEWER_PREFIX),
            Err(StateError::NonFiniteCoordinate {
                field: "perspectiveZoom",
                ..
            })
        ));
    }
}
