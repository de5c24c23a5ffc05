//! Tests for command-line parsing, output naming and the frame driver

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;
    use std::path::PathBuf;
    use wavetile::SynthesisError;
    use wavetile::io::cli::{Cli, Synthesizer};
    use wavetile::io::configuration::{
        DEFAULT_CELL_PIXELS, DEFAULT_EXEMPLAR, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED, DEFAULT_WIDTH,
        PATTERN_SIZE,
    };

    // Tests CLI parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["wavetile"]);

        assert_eq!(cli.exemplar, DEFAULT_EXEMPLAR);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.cell_pixels, DEFAULT_CELL_PIXELS);
        assert_eq!(cli.pattern_size, PATTERN_SIZE);
        assert_eq!(cli.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(!cli.quiet);
        assert!(cli.output.is_none());
    }

    // Tests CLI parsing with every argument
    // Verified by swapping the width and height short flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "wavetile",
            "--exemplar",
            "maze",
            "-w",
            "10",
            "-H",
            "12",
            "--cell-pixels",
            "3",
            "--seed",
            "9",
            "--no-rotate",
            "--pattern-size",
            "2",
            "--steps-per-frame",
            "7",
            "--max-attempts",
            "2",
            "--output",
            "out/maze.png",
            "--visualize",
            "--verbose",
        ]);

        assert_eq!(cli.exemplar, "maze");
        assert_eq!((cli.width, cli.height), (10, 12));
        assert_eq!(cli.cell_pixels, 3);
        assert_eq!(cli.seed, 9);
        assert!(cli.no_rotate);
        assert_eq!(cli.steps_per_frame, 7);
        assert_eq!(cli.output, Some(PathBuf::from("out/maze.png")));
        assert!(cli.visualize);
        assert_eq!(cli.log_level(), LevelFilter::Debug);

        let config = cli.engine_config();
        assert_eq!(config.pattern_size, 2);
        assert!(!config.include_rotations);
        assert!(!config.include_reflections);
    }

    // Tests quiet and verbose cannot be combined
    // Verified by removing the conflict declaration
    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["wavetile", "--quiet", "--verbose"]).is_err());
        let quiet = Cli::parse_from(["wavetile", "-q"]);
        assert_eq!(quiet.log_level(), LevelFilter::Warn);
        assert!(!quiet.should_show_progress());
    }

    // Tests output naming for bundled names and file paths
    // Verified by placing bundled output next to a nonexistent directory
    #[test]
    fn test_output_paths() {
        let bundled = Cli::parse_from(["wavetile", "-e", "lake"]);
        assert_eq!(bundled.output_path(), PathBuf::from("lake_wfc.png"));
        assert_eq!(
            bundled.visualization_path(),
            PathBuf::from("lake_wfc_visualization.gif")
        );

        let file = Cli::parse_from(["wavetile", "-e", "images/rocks.png"]);
        assert_eq!(file.output_path(), PathBuf::from("images/rocks_wfc.png"));

        let explicit = Cli::parse_from(["wavetile", "-o", "a/b.png"]);
        assert_eq!(explicit.output_path(), PathBuf::from("a/b.png"));
        assert_eq!(
            explicit.visualization_path(),
            PathBuf::from("a/b_visualization.gif")
        );
    }

    // Tests unknown exemplars fail before anything runs
    // Verified by loading the default exemplar on unknown names
    #[test]
    fn test_unknown_exemplar() {
        let cli = Cli::parse_from(["wavetile", "-e", "no-such-exemplar"]);
        assert!(matches!(
            Synthesizer::new(cli),
            Err(SynthesisError::UnknownExemplar { .. })
        ));
    }

    // Tests zero steps per frame is rejected
    // Verified by removing the steps-per-frame check
    #[test]
    fn test_zero_steps_per_frame() {
        let cli = Cli::parse_from(["wavetile", "--steps-per-frame", "0"]);
        assert!(matches!(
            Synthesizer::new(cli),
            Err(SynthesisError::InvalidParameter {
                parameter: "steps_per_frame",
                ..
            })
        ));
    }

    // Tests a cell size that overflows the frame is rejected
    // Verified by sizing the frame with unchecked multiplication
    #[test]
    fn test_oversized_cell_pixels() {
        let cli = Cli::parse_from(["wavetile", "-w", "100", "-c", "500000"]);
        assert!(matches!(
            Synthesizer::new(cli),
            Err(SynthesisError::InvalidParameter {
                parameter: "cell_pixels",
                ..
            })
        ));
    }

    // Tests a full run writes the PNG and GIF at the requested size
    // Verified by skipping the PNG export
    #[test]
    fn test_run_writes_outputs() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("nested").join("bricks.png");
        let cli = Cli::parse_from([
            "wavetile".into(),
            "-e".into(),
            "bricks".into(),
            "-w".into(),
            "8".into(),
            "-H".into(),
            "6".into(),
            "-c".into(),
            "2".into(),
            "-q".into(),
            "-v".into(),
            "-o".into(),
            output.clone().into_os_string(),
        ]);

        let mut synthesizer = Synthesizer::new(cli).expect("synthesizer");
        let summary = synthesizer.run().expect("run");

        assert!(summary.attempts >= 1);
        assert_eq!(summary.output, output);
        assert!(output.exists());
        assert!(summary.visualization.as_ref().is_some_and(|path| path.exists()));
        assert_eq!(synthesizer.frame().dimensions(), (16, 12));

        let written = image::open(&output).expect("open output");
        assert_eq!((written.width(), written.height()), (16, 12));
        if summary.completed {
            assert!(synthesizer.engine().grid().is_fully_collapsed());
        }
    }
}
