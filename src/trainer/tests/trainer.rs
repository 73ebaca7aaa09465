use std::{fs, path::PathBuf};

use trainer::{ConfigError, Trainer, TrainerConfig, TrainerError};

fn trainer() -> Trainer {
    Trainer::new(&TrainerConfig::default()).unwrap()
}

#[test_log::test]
fn default_tables_compile() {
    let trainer = trainer();
    assert_eq!(trainer.edges().letters().count(), 22);
    assert_eq!(trainer.corners().letters().count(), 21);

    for table in [trainer.edges(), trainer.corners()] {
        for letter in table.letters() {
            let (setup, cleanup) = table.setup_algorithms(letter).unwrap();
            assert_eq!(cleanup, setup.inverse(), "{letter}");
            assert!(setup.len() <= 4, "{letter}: {setup}");
        }
    }
}

#[test_log::test]
fn buffer_letters_are_unknown() {
    let trainer = trainer();
    assert_eq!(
        trainer.edges().setup_algorithms('B'),
        Err(TrainerError::UnknownLetter('B'))
    );
    assert_eq!(
        trainer.corners().setup_algorithms('A'),
        Err(TrainerError::UnknownLetter('A'))
    );
}

#[test_log::test]
fn same_edge_twice_restores_the_cube() {
    for letter in trainer().edges().letters() {
        let mut trainer = trainer();
        trainer.do_edge(letter).unwrap();
        assert!(!trainer.is_solved(), "{letter}");
        trainer.do_edge(letter).unwrap();
        assert!(trainer.is_solved(), "{letter}");
    }
}

#[test_log::test]
fn same_corner_twice_restores_the_cube() {
    for letter in trainer().corners().letters() {
        let mut trainer = trainer();
        trainer.do_corner(letter).unwrap();
        assert!(!trainer.is_solved(), "{letter}");
        trainer.do_corner(letter).unwrap();
        assert!(trainer.is_solved(), "{letter}");
    }
}

#[test_log::test]
fn memo_solves_its_own_scramble() {
    let mut trainer = trainer();
    trainer.do_edges("X R O").unwrap();
    trainer.do_corners("WN").unwrap();
    assert!(!trainer.is_solved());

    // The corner swap moves two edges as well, so the whole memo is undone
    // in reverse: corners first.
    trainer.do_corners("N W").unwrap();
    trainer.do_edges("ORX").unwrap();
    assert!(trainer.is_solved());
}

#[test_log::test]
fn bad_letter_applies_nothing() {
    let mut trainer = trainer();
    trainer.scramble("R U F'").unwrap();
    let before = *trainer.cube();

    assert_eq!(
        trainer.do_edges("R X M"),
        Err(TrainerError::UnknownLetter('M'))
    );
    assert_eq!(trainer.check_edges("R X M"), Err(TrainerError::UnknownLetter('M')));
    assert_eq!(trainer.cube(), &before);

    assert!(trainer.scramble("R U2X").is_err());
    assert_eq!(trainer.cube(), &before);
}

#[test_log::test]
fn config_file() {
    let path: PathBuf =
        std::env::temp_dir().join(format!("trainer-config-{}.toml", std::process::id()));
    fs::write(
        &path,
        r#"
        [edge_setups]
        D = {}
        R = { next = "D", setup = "L" }
        X = { next = "D", setup = "L2" }
        "#,
    )
    .unwrap();

    let config = TrainerConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let mut trainer = Trainer::new(&config).unwrap();
    assert_eq!(trainer.edges().letters().collect::<String>(), "DRX");
    assert_eq!(
        trainer.edges().setup_algorithms('W'),
        Err(TrainerError::UnknownLetter('W'))
    );
    trainer.do_edges("RR").unwrap();
    assert!(trainer.is_solved());

    assert!(matches!(
        TrainerConfig::load(&path),
        Err(ConfigError::Io(_))
    ));
}

#[test_log::test]
fn cyclic_config_is_rejected() {
    let config: TrainerConfig = toml::from_str(
        r#"
        [corner_setups]
        V = {}
        A = { next = "B", setup = "R" }
        B = { next = "A", setup = "R'" }
        "#,
    )
    .unwrap();

    let err = Trainer::new(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Setup {
            table: "corner",
            source: TrainerError::SetupCycle('A'),
        }
    ));
}
