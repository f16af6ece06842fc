use std::path::Path;

use parec::{simplify, Mode, Pipeline, PipelineError, Target};

fn write_source(dir: &Path, name: &str, src: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, src).expect("Could not write test source");
    path
}

#[test]
fn invalid_source_is_returned_unchanged() {
    let src = "def f(:\n    pass\n";
    let (text, log) = simplify(src);
    assert_eq!(text, src);
    assert_eq!(log.len(), 1);
    assert!(log[0].starts_with("parse failure at line 1"), "{log:?}");
}

#[test]
fn python2_and_stray_indentation_are_invalid() {
    for src in [
        "x = 1\n    y = 2\npass\n",
        "print \"hello\"\npass\n",
        "exec \"x = 1\"\n",
    ] {
        let (text, log) = simplify(src);
        assert_eq!(text, src);
        assert_eq!(log.len(), 1, "{log:?}");
        assert!(log[0].starts_with("parse failure at line"), "{log:?}");
    }
}

#[test]
fn clean_input_is_a_fixpoint() {
    let src = "import os\n\ndef main(path):\n    return os.path.exists(path)\n";
    let (first, log) = simplify(src);
    assert!(log.is_empty(), "{log:?}");
    let (second, log) = simplify(&first);
    assert!(log.is_empty(), "{log:?}");
    assert_eq!(first, second);
}

#[test]
fn simplifying_twice_changes_nothing() {
    let src = "if a:\n    pass\nelse:\n    x = 1\ndef f():\n    pass\n";
    let (first, log) = simplify(src);
    assert!(!log.is_empty());
    let (second, log) = simplify(&first);
    assert!(log.is_empty(), "{log:?}");
    assert_eq!(first, second);
}

#[test]
fn log_order_is_stable() {
    let src = "def f():\n    pass\nclass A:\n    pass\nwhile x:\n    pass\n";
    let (_, first) = simplify(src);
    let (_, second) = simplify(src);
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            "pass statement voided at line 2",
            "pass statement voided at line 4",
            "pass statement voided at line 6",
        ]
    );
}

#[test]
fn in_memory_pipeline_renders_manifest() {
    let pipeline = Pipeline::new_in_memory(Mode::Void);
    let outcome = pipeline.simplify("x = 1\npass\n");
    let rendered = pipeline.render(&outcome);
    assert!(rendered.starts_with("\"\"\"\n# --- SIMPLIFIED BY PARE :: VOID MODE ---\n"));
    assert!(rendered.contains("# pass statement voided at line 2\n"));
    assert!(rendered.ends_with("\"\"\"\nx = 1\n"));
}

#[test]
fn writes_sibling_file() {
    let dir = tempfile::tempdir().expect("Could not create temp dir");
    let src = write_source(dir.path(), "demo.py", "def main():\n    pass\n");

    let synthesized = Pipeline::new(Mode::Void)
        .execute_on_file(&src)
        .expect("Pipeline failed");
    let expected = dir.path().join("demo_void.py");
    assert_eq!(synthesized.target, Target::File(expected.clone()));

    let content = std::fs::read_to_string(&expected).expect("No output written");
    assert!(content.starts_with("\"\"\"\n# --- SIMPLIFIED BY PARE :: VOID MODE ---"));
    assert!(content.contains("# pass statement voided at line 2\n"));
    assert!(content.ends_with("\"\"\"\ndef main():\n    ...\n"));
    //source stays untouched
    assert_eq!(
        std::fs::read_to_string(&src).unwrap(),
        "def main():\n    pass\n"
    );
}

#[test]
fn resonance_file_carries_summary() {
    let dir = tempfile::tempdir().expect("Could not create temp dir");
    let src = write_source(dir.path(), "demo.py", "def main():\n    pass\n");

    let synthesized = Pipeline::new(Mode::Resonance)
        .execute_on_file(&src)
        .expect("Pipeline failed");
    let expected = dir.path().join("demo_resonance.py");
    assert_eq!(synthesized.target, Target::File(expected.clone()));

    let content = std::fs::read_to_string(&expected).expect("No output written");
    assert_eq!(
        content,
        "\"\"\"\n# --- SIMPLIFIED BY PARE :: RESONANCE MODE ---\n# No-ops voided, essentials echoed.\n# Success: Voided 1, Echoed 1 essentials.\n\"\"\"\ndef main():\n    ...\n    ...\n"
    );
}

#[test]
fn explicit_output_path() {
    let dir = tempfile::tempdir().expect("Could not create temp dir");
    let src = write_source(dir.path(), "demo.py", "x = 1\n");
    let out = dir.path().join("elsewhere.py");

    Pipeline::new(Mode::Void)
        .without_manifest()
        .with_target(Target::file(&out))
        .execute_on_file(&src)
        .expect("Pipeline failed");
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "x = 1\n");
    assert!(!dir.path().join("demo_void.py").exists());
}

#[test]
fn buffer_target_does_not_touch_disk() {
    let dir = tempfile::tempdir().expect("Could not create temp dir");
    let src = write_source(dir.path(), "demo.py", "pass\n");

    let synthesized = Pipeline::new_in_memory(Mode::Void)
        .without_manifest()
        .execute_on_file(&src)
        .expect("Pipeline failed");
    assert_eq!(synthesized.target, Target::Buffer("\n".to_owned()));
    assert!(!dir.path().join("demo_void.py").exists());
}

#[test]
fn missing_source() {
    let dir = tempfile::tempdir().expect("Could not create temp dir");
    let missing = dir.path().join("nope.py");
    let err = Pipeline::new(Mode::Void)
        .execute_on_file(&missing)
        .expect_err("Missing file should fail");
    assert!(matches!(err, PipelineError::MissingSource(p) if p == missing));
}

#[test]
fn invalid_source_writes_nothing() {
    let dir = tempfile::tempdir().expect("Could not create temp dir");
    let src = write_source(dir.path(), "broken.py", "if x\n    y = 1\n");

    let err = Pipeline::new(Mode::Void)
        .execute_on_file(&src)
        .expect_err("Invalid source should fail");
    match err {
        PipelineError::ParserError { src: text, errors } => {
            assert_eq!(text, "if x\n    y = 1\n");
            assert!(!errors.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("broken_void.py").exists());
}

#[test]
fn extensionless_source_gets_py() {
    assert_eq!(
        parec::sibling_file_name(Path::new("dir/script"), Mode::Resonance),
        Path::new("dir/script_resonance.py")
    );
}
