//! Tests for argument parsing of every subcommand.

use super::{parse, parse_url};
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;
use ngstate_core::state::{BlendMode, Layout};

#[test]
fn cli_parse_demo() {
    match parse(&["ngstate", "demo"]) {
        CliCommand::Demo { prefix } => assert!(prefix.is_none()),
        _ => panic!("expected Demo"),
    }
}

#[test]
fn cli_parse_demo_prefix() {
    match parse(&["ngstate", "demo", "--prefix", "https://viz.boss.neurodata.io/"]) {
        CliCommand::Demo { prefix } => {
            assert_eq!(prefix.as_deref(), Some("https://viz.boss.neurodata.io/"))
        }
        _ => panic!("expected Demo with --prefix"),
    }
}

#[test]
fn cli_parse_url_defaults() {
    let args = parse_url(&["ngstate", "url"]);
    assert!(args.images.is_empty());
    assert!(args.segmentations.is_empty());
    assert!(args.layout.is_none());
    assert!(args.position.is_none());
    assert!(args.voxel_size.is_none());
    assert!(args.zoom.is_none());
    assert!(args.blend.is_none());
    assert!(args.opacity.is_none());
    assert!(args.prefix.is_none());
}

#[test]
fn cli_parse_url_full() {
    let args = parse_url(&[
        "ngstate",
        "url",
        "--image",
        "image=boss://https://api.boss.neurodata.io/bloss/bloss18/image",
        "--image",
        "em=precomputed://gs://bucket/em",
        "--segmentation",
        "seg=precomputed://gs://bucket/seg",
        "--layout",
        "xy-3d",
        "--position",
        "42000,53780,200",
        "--voxel-size",
        "3.89,3.89,50",
        "--zoom",
        "3.89",
        "--blend",
        "additive",
        "--opacity",
        "0.7",
    ]);
    let names: Vec<_> = args.images.iter().map(|ns| ns.name.as_str()).collect();
    assert_eq!(names, ["image", "em"]);
    assert_eq!(args.segmentations[0].source, "precomputed://gs://bucket/seg");
    assert_eq!(args.layout, Some(Layout::Xy3d));
    assert_eq!(args.position, Some([42000.0, 53780.0, 200.0]));
    assert_eq!(args.voxel_size, Some([3.89, 3.89, 50.0]));
    assert_eq!(args.zoom, Some(3.89));
    assert_eq!(args.blend, Some(BlendMode::Additive));
    assert_eq!(args.opacity, Some(0.7));
}

#[test]
fn cli_parse_url_negative_position() {
    let args = parse_url(&["ngstate", "url", "--position", "-5,0,12.5"]);
    assert_eq!(args.position, Some([-5.0, 0.0, 12.5]));
}

#[test]
fn cli_rejects_bad_layout() {
    assert!(Cli::try_parse_from(["ngstate", "url", "--layout", "diagonal"]).is_err());
}

#[test]
fn cli_rejects_bad_opacity() {
    assert!(Cli::try_parse_from(["ngstate", "url", "--opacity", "2"]).is_err());
}

#[test]
fn cli_rejects_non_positive_zoom() {
    assert!(Cli::try_parse_from(["ngstate", "url", "--zoom", "0"]).is_err());
    assert!(Cli::try_parse_from(["ngstate", "url", "--zoom", "NaN"]).is_err());
}

#[test]
fn cli_rejects_non_positive_voxel_size() {
    assert!(Cli::try_parse_from(["ngstate", "url", "--voxel-size", "4,4,0"]).is_err());
    assert!(Cli::try_parse_from(["ngstate", "url", "--voxel-size", "4,inf,40"]).is_err());
}

#[test]
fn cli_rejects_image_without_name() {
    assert!(Cli::try_parse_from(["ngstate", "url", "--image", "precomputed://gs://b/x"]).is_err());
}

#[test]
fn cli_parse_decode() {
    match parse(&["ngstate", "decode", "https://example.org/#!%7B%7D"]) {
        CliCommand::Decode { url, compact } => {
            assert_eq!(url, "https://example.org/#!%7B%7D");
            assert!(!compact);
        }
        _ => panic!("expected Decode"),
    }
}

#[test]
fn cli_parse_decode_compact() {
    match parse(&["ngstate", "decode", "--compact", "https://example.org/#!%7B%7D"]) {
        CliCommand::Decode { compact, .. } => assert!(compact),
        _ => panic!("expected Decode with --compact"),
    }
}

#[test]
fn cli_parse_source() {
    match parse(&["ngstate", "source", "boss://https://api.boss.neurodata.io/bloss/bloss18/image"]) {
        CliCommand::Source { uri } => {
            assert_eq!(uri, "boss://https://api.boss.neurodata.io/bloss/bloss18/image")
        }
        _ => panic!("expected Source"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["ngstate", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["ngstate", "man"]), CliCommand::Man));
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
