//! Tests for argument parsing, identifier decoding and the write-to-disk run

#[cfg(test)]
mod tests {
    use crate::common::write_sample_catalog;
    use clap::Parser;
    use robohash::ErrorKind;
    use robohash::io::cli::{Cli, decode_hex, init_tracing, run};
    use robohash::io::configuration::{CANVAS_SIZE, DEFAULT_CATALOG_DIR, DEFAULT_OUTPUT};
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests installing the subscriber twice keeps the first one without failing
    // Verified by panicking when a subscriber is already set
    #[test]
    fn test_init_tracing_is_repeatable() {
        let cli = Cli::try_parse_from(["robohash", "-q", "alice"]).expect("parse");
        init_tracing(&cli);
        init_tracing(&cli);
        assert!(tracing::dispatcher::has_been_set());
    }

    // Tests defaults for an identifier-only invocation
    // Verified by changing default paths
    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["robohash", "alice"]).expect("parse");
        assert_eq!(cli.identifier, "alice");
        assert_eq!(cli.set, "");
        assert_eq!(cli.background, "");
        assert_eq!(cli.catalog, PathBuf::from(DEFAULT_CATALOG_DIR));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.log_level(), "info");
        assert_eq!(cli.identifier_bytes().expect("bytes"), b"alice".to_vec());
    }

    // Tests every option is accepted in short form
    // Verified by removing short flags
    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "robohash", "-s", "any", "-b", "bg1", "-c", "cat", "-o", "x.png", "-x", "-v", "00ff",
        ])
        .expect("parse");
        assert_eq!(cli.set, "any");
        assert_eq!(cli.background, "bg1");
        assert_eq!(cli.catalog, PathBuf::from("cat"));
        assert_eq!(cli.output, PathBuf::from("x.png"));
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.identifier_bytes().expect("hex"), vec![0x00, 0xff]);
    }

    // Tests quiet and verbose cannot be combined
    // Verified by dropping the conflict
    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["robohash", "-q", "-v", "id"]).is_err());
        let cli = Cli::try_parse_from(["robohash", "-q", "id"]).expect("parse");
        assert_eq!(cli.log_level(), "error");
    }

    // Tests hex decoding accepts both cases and rejects malformed input
    // Verified by accepting signed digits
    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("").expect("empty"), Vec::<u8>::new());
        assert_eq!(decode_hex("DeadBeef").expect("mixed case"), vec![0xde, 0xad, 0xbe, 0xef]);

        for bad in ["abc", "zz", "+1", "0x"] {
            let err = decode_hex(bad).expect_err("malformed hex");
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "input {bad:?}");
        }
    }

    // Tests a run writes a canvas-sized PNG from an on-disk catalog
    // Verified by skipping the export
    #[test]
    fn test_run_writes_avatar() {
        let dir = TempDir::new().expect("temp dir");
        let catalog = dir.path().join("parts");
        write_sample_catalog(&catalog);
        let output = dir.path().join("out/avatar.png");

        let cli = Cli::try_parse_from([
            "robohash".into(),
            "-c".into(),
            catalog.into_os_string(),
            "-o".into(),
            output.clone().into_os_string(),
            "-b".into(),
            "any".into(),
            "bob".into(),
        ])
        .expect("parse");

        assert_eq!(run(&cli).expect("run"), output);
        let img = image::open(&output).expect("written png").to_rgba8();
        assert_eq!(img.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
    }

    // Tests a missing catalog surfaces as a catalog read failure
    // Verified by writing an empty image instead
    #[test]
    fn test_run_missing_catalog() {
        let dir = TempDir::new().expect("temp dir");
        let cli = Cli::try_parse_from([
            "robohash".into(),
            "-c".into(),
            dir.path().join("absent").into_os_string(),
            "-o".into(),
            dir.path().join("out.png").into_os_string(),
            std::ffi::OsString::from("carol"),
        ])
        .expect("parse");

        let err = run(&cli).expect_err("no catalog");
        assert_eq!(err.kind(), ErrorKind::CatalogReadFailure);
        assert!(!dir.path().join("out.png").exists());
    }
}
