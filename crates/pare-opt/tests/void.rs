use pare_ast::SyntaxTree;
use pare_opt::{config::Config, ChangeKind, Optimized, Optimizer, Variant};

fn parse(src: &str) -> SyntaxTree {
    pare_tree_sitter_parser::parse_string(src).expect("Failed to parse source via tree-sitter")
}

fn void(src: &str) -> (String, Vec<String>) {
    //RUST_LOG=trace shows the single rules
    let _ = pretty_env_logger::try_init();
    let Optimized { tree, record } = Optimizer::default().run(Variant::Void, parse(src));
    (
        pare_fmt::Formater::format_ast(&tree).to_string(),
        record.descriptions(),
    )
}

#[test]
fn pass_between_statements() {
    let (text, log) = void("x = 1\npass\ny = 2\n");
    assert_eq!(text, "x = 1\ny = 2");
    assert_eq!(log, vec!["pass statement voided at line 2"]);
}

#[test]
fn function_of_passes_gets_one_placeholder() {
    let (text, log) = void("def f():\n    pass\n    pass\n");
    assert_eq!(text, "def f():\n    ...");
    assert_eq!(
        log,
        vec![
            "pass statement voided at line 2",
            "pass statement voided at line 3"
        ]
    );
}

#[test]
fn module_level_may_become_empty() {
    let (text, log) = void("pass\n");
    assert_eq!(text, "");
    assert_eq!(log.len(), 1);
}

#[test]
fn empty_if_is_removed() {
    let (text, log) = void("def f(x):\n    if x:\n        pass\n    return x\n");
    assert_eq!(text, "def f(x):\n    return x");
    assert_eq!(
        log,
        vec![
            "pass statement voided at line 3",
            "empty if block voided at line 2"
        ]
    );
}

#[test]
fn empty_if_removes_its_else() {
    let (text, log) = void("if a:\n    pass\nelse:\n    b()\nc()\n");
    assert_eq!(text, "c()");
    assert_eq!(log[1], "empty if block voided at line 1");
}

#[test]
fn empty_elif_truncates_chain() {
    let src = "if a:\n    x()\nelif b:\n    y()\nelif c:\n    pass\nelif d:\n    z()\nelse:\n    w()\n";
    let (text, log) = void(src);
    assert_eq!(text, "if a:\n    x()\nelif b:\n    y()");
    assert_eq!(
        log,
        vec![
            "pass statement voided at line 6",
            "empty elif block voided at line 5"
        ]
    );
}

#[test]
fn nested_empties_collapse() {
    let (text, log) = void("def f():\n    if a:\n        if b:\n            pass\n");
    assert_eq!(text, "def f():\n    ...");
    assert_eq!(
        log,
        vec![
            "pass statement voided at line 4",
            "empty if block voided at line 3",
            "empty if block voided at line 2"
        ]
    );
}

#[test]
fn other_blocks_keep_placeholder() {
    let (text, _log) = void("for i in x:\n    pass\nwhile y:\n    pass\nelse:\n    pass\n");
    assert_eq!(text, "for i in x:\n    ...\nwhile y:\n    ...\nelse:\n    ...");
}

#[test]
fn heuristics_in_rule_order() {
    let src = "x = \"# Empty string, skip\"\ntemp_value = 1\nif isinstance(item, (int, float)):\n    a()\nelif isinstance(item, str):\n    b()\n";
    let (_text, log) = void(src);
    assert_eq!(
        log,
        vec![
            "redundant comment voided - 'Empty string, skip'",
            "unused variable 'temp_value' voided",
            "redundant type checking logic simplified"
        ]
    );
}

#[test]
fn comments_never_reach_the_heuristic() {
    let (text, log) = void("# Empty string, skip\nx = 1\n");
    assert_eq!(text, "x = 1");
    assert!(log.is_empty());
}

#[test]
fn used_variable_is_not_reported() {
    let (_text, log) = void("temp_value = 1\nprint(temp_value)\n");
    assert!(log.is_empty());
}

#[test]
fn single_type_check_is_not_reported() {
    let (_text, log) = void("if isinstance(item, str):\n    a()\n");
    assert!(log.is_empty());
}

#[test]
fn rules_are_grouped_in_order() {
    let src = "temp_value = 1\nif a:\n    pass\npass\n";
    let Optimized { record, .. } = Optimizer::default().void(parse(src));
    let kinds: Vec<ChangeKind> = record.changes().iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ChangeKind::VoidedNoop,
            ChangeKind::VoidedNoop,
            ChangeKind::VoidedBlock,
            ChangeKind::VoidedVariable
        ]
    );
}

#[test]
fn configured_markers() {
    let mut config = Config::default();
    config.heuristics.tracked_variable = "scratch".to_owned();
    let optimizer = Optimizer::new(config);
    let Optimized { record, .. } = optimizer.void(parse("scratch = 2\ntemp_value = 1\n"));
    assert_eq!(record.descriptions(), vec!["unused variable 'scratch' voided"]);
}

#[test]
fn single_rule() {
    let optimizer = Optimizer::default();
    let result = optimizer.void_empty_blocks(parse("if a:\n    pass\n"));
    //pass is vacant as well, so the rule works without the no-op rule in front
    assert!(result.tree.is_empty());
    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].kind, ChangeKind::VoidedBlock);
}

#[test]
fn clean_input_is_untouched() {
    let src = "import os\n\ndef main(argv):\n    for a in argv:\n        print(a)\n    return 0";
    let (text, log) = void(src);
    assert_eq!(text, src);
    assert!(log.is_empty());
}

#[test]
fn comment_in_brackets_is_not_a_redundant_comment() {
    let (text, log) = void("x = (1,\n  # Empty string, skip\n  2)\n");
    assert_eq!(text, "x = (1,\n  2)");
    assert!(log.is_empty(), "{log:?}");
}

#[test]
fn comment_in_brackets_is_not_a_variable() {
    let (_text, log) = void("x = [1,  # temp_value\n 2]\n");
    assert!(log.is_empty(), "{log:?}");
}

#[test]
fn type_checks_match_regardless_of_spacing() {
    let src = "if isinstance(item,(int,float)):\n    a()\nelif isinstance(item,  str):\n    b()\n";
    let (text, log) = void(src);
    assert_eq!(log, vec!["redundant type checking logic simplified"]);
    //the output keeps the source layout
    assert!(text.starts_with("if isinstance(item,(int,float)):"), "{text}");
}

#[test]
fn block_with_two_passes_is_not_vacant() {
    let result = Optimizer::default().void_empty_blocks(parse("if x:\n    pass\n    pass\n"));
    assert!(result.changes.is_empty());
    assert!(matches!(result.tree.stmts.as_slice(), [pare_ast::Stmt::If(_)]));
}
