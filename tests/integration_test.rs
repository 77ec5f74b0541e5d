use borgify::source::run_lines;
use borgify::{Assimilator, Config, Input, Lexicon};
use std::fs::File;
use std::io::Write;

fn assimilator(config: Config) -> Assimilator {
    Assimilator::new(Lexicon::bundled().unwrap(), config).unwrap()
}

#[test]
fn case_transfer_through_the_pipeline() {
    let mut borg = assimilator(Config::quiet(42));
    assert_eq!(borg.transform_line("I"), "We");
    assert_eq!(borg.transform_line("HELP"), "PROVIDE INTERFACE ASSISTANCE");
    assert_eq!(borg.transform_line("Help"), "Provide interface assistance");
    assert_eq!(borg.transform_line("help"), "provide interface assistance");
    assert_eq!(borg.transform_line("banana!"), "banana!");
}

#[test]
fn idioms_resolve_before_words() {
    let mut borg = assimilator(Config::quiet(42));
    let out = borg.transform_line("I need to figure out the problem");
    assert_eq!(out, "We need to resolve the malfunction");
    assert!(!out.contains("figure"));

    // "look" alone is a verb, "look for" is an idiom.
    assert_eq!(borg.transform_line("Look for it. Look!"), "probe for it. Detect!");
}

#[test]
fn seeded_runs_are_identical() {
    let line = "My friends run the server. You will see the truth! I'm sure it works";
    let config = Config {
        phrase_chance: 0.5,
        seed: Some(1234),
        ..Config::default()
    };
    let mut first = assimilator(config.clone());
    let mut second = assimilator(config);
    for _ in 0..20 {
        assert_eq!(first.transform_line(line), second.transform_line(line));
    }
}

#[test]
fn injection_rate_matches_chance() {
    let n = 2000;
    let p = 0.12;
    let mut borg = assimilator(Config {
        phrase_chance: p,
        seed: Some(7),
        ..Config::default()
    });

    let injected = (0..n)
        .filter(|_| borg.transform_line("Run.").contains('<'))
        .count() as f64;

    let mean = n as f64 * p;
    let sd = (n as f64 * p * (1.0 - p)).sqrt();
    assert!(
        (injected - mean).abs() <= 3.0 * sd,
        "injected {injected} of {n}, expected about {mean}"
    );
}

#[test]
fn injected_phrase_is_decorated() {
    let mut borg = assimilator(Config {
        phrase_chance: 1.0,
        seed: Some(5),
        ..Config::default()
    });
    let out = borg.transform_line("Stop.");
    let phrase = out
        .strip_prefix("Halt. < ")
        .and_then(|rest| rest.strip_suffix(" >"))
        .expect("decorated phrase");
    assert!(borg.lexicon().phrases.iter().any(|p| p == phrase));
}

#[test]
fn file_input_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quote.txt");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "I’ll build a new network.").unwrap();
    writeln!(file, "  -- Jane Doe  ").unwrap();
    writeln!(file, "Give up? Never").unwrap();
    drop(file);

    let input = Input::resolve(&[path.to_string_lossy().into_owned()], true);
    assert_eq!(input, Input::File(path.clone()));

    let mut borg = assimilator(Config::quiet(3));
    let mut out = Vec::new();
    input.run(&mut borg, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "We will synthesize a recently assimilated collective link.\n  -- Jane Doe\ncease functioning? Never\n"
    );
}

#[test]
fn attribution_can_be_transformed() {
    let mut borg = assimilator(Config {
        skip_prefix: None,
        ..Config::quiet(3)
    });
    let mut out = Vec::new();
    run_lines(&mut borg, "-- Jane Doe\n".as_bytes(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "-- Jane Doe\n");

    let mut out = Vec::new();
    run_lines(&mut borg, "-- my mind\n".as_bytes(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "-- our neural array\n");
}

#[test]
fn custom_lexicon() {
    let lexicon = Lexicon::from_json(
        r#"{
            "phrases": ["BEEP."],
            "idioms": [["hang out", "idle"]],
            "verbs": {"idle": "standby"},
            "nouns": {"cat": "feline unit"}
        }"#,
    )
    .unwrap();
    let mut borg = Assimilator::new(lexicon, Config::quiet(0)).unwrap();
    // Idiom output is still looked up word by word.
    assert_eq!(borg.transform_line("Cats hang out with the Cat."), "Cats standby with the Feline unit.");
}
