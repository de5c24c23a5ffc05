//! Tests for the exemplars compiled into the binary

#[cfg(test)]
mod tests {
    use wavetile::SynthesisError;
    use wavetile::io::configuration::PATTERN_SIZE;
    use wavetile::io::exemplars::{available, is_bundled, load_bundled};

    // Tests every bundled exemplar loads and fits the default pattern size
    // Verified by giving one exemplar a ragged row
    #[test]
    fn test_all_bundled_load() {
        for name in available() {
            let exemplar = load_bundled(name).expect("bundled exemplar");
            assert!(exemplar.width() >= PATTERN_SIZE, "{name} too narrow");
            assert!(exemplar.height() >= PATTERN_SIZE, "{name} too short");
            assert!(exemplar.palette().len() >= 2, "{name} has one colour");
        }
    }

    // Tests the listed names and lookup agree
    // Verified by dropping an exemplar from the lookup table
    #[test]
    fn test_available_names() {
        assert_eq!(available(), vec!["flowers", "bricks", "maze", "lake"]);
        assert!(is_bundled("lake"));
        assert!(!is_bundled("Lake"));
    }

    // Tests labels follow legend order
    // Verified by sorting the palette
    #[test]
    fn test_legend_order() {
        let bricks = load_bundled("bricks").expect("bricks");
        assert_eq!(bricks.width(), 8);
        assert_eq!(bricks.height(), 6);
        assert_eq!(bricks.palette().first(), Some(&[178, 34, 34, 255]));
        assert_eq!(bricks.labels().get((0, 7)), Some(&1));
        assert_eq!(bricks.labels().get((0, 0)), Some(&0));
    }

    // Tests unknown names report the alternatives
    // Verified by returning the default exemplar instead
    #[test]
    fn test_unknown_selector() {
        let result = load_bundled("castle");
        let Err(SynthesisError::UnknownExemplar {
            selector,
            available,
        }) = result
        else {
            panic!("expected an unknown exemplar error");
        };
        assert_eq!(selector, "castle");
        assert_eq!(available.len(), 4);
    }
}
