use pare_ast::{Block, Stmt, SyntaxTree};
use pare_common::Span;
use pare_fmt::{unparse, FormatConfig, Formater, Indentation};

///Small helper that parses some source into a AST, or panics if that doesn't work
fn parse(src: &str) -> SyntaxTree {
    pare_tree_sitter_parser::parse_string(src).expect("Failed to parse source via tree-sitter")
}

fn fmt(src: &str) -> String {
    Formater::format_ast(&parse(src)).to_string()
}

#[test]
fn simple_statements_stay() {
    assert_eq!(fmt("import os\nx = 1\nprint(x)\n"), "import os\nx = 1\nprint(x)");
}

#[test]
fn empty_module() {
    assert_eq!(fmt(""), "");
}

#[test]
fn normalizes_indentation() {
    let src = "def f(a):\n  if a:\n        return 1\n  return 2\n";
    assert_eq!(
        fmt(src),
        "def f(a):\n    if a:\n        return 1\n    return 2"
    );
}

#[test]
fn all_clauses_of_if() {
    let src = "if a:\n    x()\nelif b:\n    y()\nelse:\n    z()\n";
    assert_eq!(fmt(src), src.trim_end());
}

#[test]
fn try_except_finally() {
    let src = "try:\n    risky()\nexcept OSError as e:\n    log(e)\nexcept:\n    raise\nelse:\n    ok()\nfinally:\n    close()\n";
    assert_eq!(fmt(src), src.trim_end());
}

#[test]
fn decorators_and_blank_lines() {
    let src = "import functools\n@functools.cache\ndef f(x) -> int:\n    return x\nclass A(B):\n    y = 1\n    async def g(self):\n        async with lock:\n            await run()\n";
    let expected = "import functools\n\n@functools.cache\ndef f(x) -> int:\n    return x\n\nclass A(B):\n    y = 1\n\n    async def g(self):\n        async with lock:\n            await run()";
    assert_eq!(fmt(src), expected);
}

#[test]
fn match_statement() {
    let src = "match p:\n    case Point(x=0):\n        origin()\n    case _:\n        other()\n";
    assert_eq!(fmt(src), src.trim_end());
}

#[test]
fn loops_with_else() {
    let src = "for i in range(3):\n    use(i)\nelse:\n    done()\nwhile busy():\n    wait()\nelse:\n    done()\n";
    assert_eq!(fmt(src), src.trim_end());
}

#[test]
fn comments_are_dropped() {
    let src = "# header\nx = 1  # trailing\n# Empty string, skip\ny = 2\n";
    assert_eq!(fmt(src), "x = 1\ny = 2");
}

#[test]
fn inline_suite_is_expanded() {
    assert_eq!(fmt("if x: y = 1; z = 2\n"), "if x:\n    y = 1\n    z = 2");
}

#[test]
fn formatting_is_a_fixpoint() {
    let src = "import os\n@dec\nclass A:\n  def m(self):\n    if self.x:  return 1\n    else:\n      return 2\ndef g():\n    '''doc\n    string'''\n    for a, b in zip(x, y): print(a, b)\n";
    let once = fmt(src);
    let twice = fmt(&once);
    assert_eq!(once, twice);
}

#[test]
fn tabs() {
    let config = FormatConfig::default().with_indentation(Indentation::Tabs);
    let formatted = unparse(&parse("def f():\n    if x:\n        return 1\n"), &config);
    assert_eq!(formatted, "def f():\n\tif x:\n\t\treturn 1");
}

#[test]
fn two_spaces() {
    let config = FormatConfig::default().with_indentation(Indentation::Spaces(2));
    let formatted = unparse(&parse("def f():\n    return 1\n"), &config);
    assert_eq!(formatted, "def f():\n  return 1");
}

#[test]
fn placeholder_and_empty_block() {
    let tree = SyntaxTree::new(vec![Stmt::Placeholder]);
    assert_eq!(Formater::format_ast(&tree).to_string(), "...");

    //A body that got emptied by hand still prints as valid python
    let mut tree = parse("def f():\n    return 1\n");
    if let Stmt::Func(f) = &mut tree.stmts[0] {
        f.body = Block::new(Span::empty(), []);
    }
    assert_eq!(Formater::format_ast(&tree).to_string(), "def f():\n    ...");
}

#[test]
fn comments_inside_brackets_are_dropped() {
    let src = "x = (1,\n  # Empty string, skip\n  2)\ny = [1,  # temp_value\n 2]\n";
    assert_eq!(fmt(src), "x = (1,\n  2)\ny = [1,\n 2]");
}

#[test]
fn canonical_spacing() {
    let src = "@dec( 1 )\ndef f(a,b):\n    if isinstance(item,(int,float)):\n        x = (1,\n             2)\n";
    let config = FormatConfig::default().with_canonical_spacing(true);
    assert_eq!(
        unparse(&parse(src), &config),
        "@dec(1)\ndef f(a,b):\n    if isinstance(item, (int, float)):\n        x = (1, 2)"
    );
    //without the flag the source text is kept
    assert_eq!(
        unparse(&parse(src), &FormatConfig::default()),
        "@dec( 1 )\ndef f(a,b):\n    if isinstance(item,(int,float)):\n        x = (1,\n             2)"
    );
}
