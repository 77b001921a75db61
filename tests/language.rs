use std::{
    fs::{self},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use flux::{
    Error, EvalError, Locals, ParseError, Registry,
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, lexer::TokenKind},
};
use walkdir::WalkDir;

/// Locals every book example may refer to.
fn book_locals() -> Locals {
    [("w", 30.0), ("h", 20.0), ("psx", 300.0), ("margin", 8.0)].into_iter()
                                                                .map(|(n, v)| (n.to_string(), v))
                                                                .collect()
}

#[test]
fn book_examples_work() {
    let registry = Registry::with_builtins();
    let locals = book_locals();
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            for line in code.lines().filter(|line| !line.trim().is_empty()) {
                count += 1;
                let (source, expected) = match line.split_once('#') {
                    Some((source, expected)) => (source.trim(), Some(expected.trim())),
                    None => (line.trim(), None),
                };

                let value = flux::evaluate(source, &locals, &registry).unwrap_or_else(|e| {
                                panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                                       i + 1,
                                       path,
                                       source,
                                       e)
                            });

                if let Some(expected) = expected {
                    let expected: f64 = expected.parse().unwrap_or_else(|e| {
                                            panic!("Bad expected value `{expected}` in {path:?}: {e}")
                                        });
                    assert!((value - expected).abs() < 1e-9,
                            "Example `{source}` in {path:?} gave {value}, expected {expected}");
                }
            }
        }
    }

    assert!(count > 0, "No flux examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```flux") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval(src: &str) -> Result<f64, Error> {
    flux::evaluate(src, &Locals::new(), &Registry::with_builtins())
}

fn assert_value(src: &str, expected: f64) {
    match eval(src) {
        Ok(value) => assert!(value == expected || (value - expected).abs() < 1e-12,
                             "`{src}` gave {value}, expected {expected}"),
        Err(e) => panic!("Expression `{src}` failed: {e}"),
    }
}

fn assert_close(src: &str, expected: f64) {
    match eval(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "`{src}` gave {value}, expected {expected}"),
        Err(e) => panic!("Expression `{src}` failed: {e}"),
    }
}

fn assert_success(src: &str) {
    match eval(src) {
        Ok(value) => assert!(value != 0.0, "Expression `{src}` evaluated to 0"),
        Err(e) => panic!("Expression `{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = eval(src) {
        panic!("Expression `{src}` evaluated to {value} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2+3*4", 14.0);
    assert_value("10 - 2 - 3", 5.0);
    assert_value("12 / 4 / 3", 1.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("1 / 0", f64::INFINITY);
}

#[test]
fn modulo_and_wrapped_modulo() {
    assert_value("-10 % 3", -1.0);
    assert_value("-10 %% 3", 2.0);
    assert_value("10 %% 3", 1.0);
    assert_value("7.5 % 2", 1.5);
}

#[test]
fn power_and_floor_division() {
    assert_value("2**10", 1024.0);
    assert_value("7 // 2", 3.0);
    assert_value("-7 // 2", -4.0);
    assert_value("2 ** 3 ** 2", 64.0);
    assert_value("2 * 3 ** 2", 18.0);
}

#[test]
fn precedence_table_order() {
    // Bitwise operators bind looser than comparisons.
    assert_value("1 | 2 == 2", 1.0);
    // Comparisons bind looser than logical operators.
    assert_value("3 < 2 && 1", 0.0);
    // Min and max bind tighter than multiplication.
    assert_value("30 * 2 <? 100", 60.0);
    assert_value("1 + 1 == 2", 1.0);
    assert_value("0 ?? 7 + 1", 8.0);
    assert_value("1 << 2 + 1", 8.0);
}

#[test]
fn unary_operators() {
    assert_value("-3", -3.0);
    assert_value("- -3", 3.0);
    assert_value("+3", 3.0);
    assert_value("*3", 3.0);
    assert_value("/4", 0.25);
    assert_value("!0", 1.0);
    assert_value("!5", 0.0);
    assert_value("~0", -1.0);
    assert_value("~2.6", -4.0);
}

#[test]
fn comparisons_and_negations() {
    assert_value("2 < 3", 1.0);
    assert_value("3 <= 2", 0.0);
    assert_value("2 != 2", 0.0);
    assert_value("2 !< 3", 0.0);
    assert_value("3 !> 2", 0.0);
    assert_value("2 !<= 2", 0.0);
    assert_value("2 !>= 3", 1.0);
    assert_value("nan() !< 1", 1.0);
    assert_value("nan() >= 1", 0.0);
}

#[test]
fn logical_operators() {
    assert_value("2 && 3", 1.0);
    assert_value("0 || 0", 0.0);
    assert_value("0 => 0", 1.0);
    assert_value("1 => 0", 0.0);
}

#[test]
fn selection_operators() {
    assert_value("250 <? 100", 100.0);
    assert_value("250 >? 100", 250.0);
    assert_value("0 ?? 5", 5.0);
    assert_value("3 ?? 5", 3.0);
}

#[test]
fn bitwise_operators() {
    assert_value("6 & 3", 2.0);
    assert_value("6 | 3", 7.0);
    assert_value("6 ^ 3", 5.0);
    assert_value("1 << 4", 16.0);
    assert_value("256 >> 4", 16.0);
    assert_value("2.5 & 3", 3.0);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = Registry::new();
    let counter = Arc::clone(&calls);
    registry.register_function("tick", move |args: &[f64]| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(args.first().copied().unwrap_or(0.0))
            });

    for src in ["0 && tick(1)", "1 || tick(1)", "0 => tick(1)"] {
        let before = calls.load(Ordering::SeqCst);
        flux::evaluate(src, &Locals::new(), &registry).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), before + 1, "{src}");
    }
}

#[test]
fn conditional_evaluates_one_branch() {
    assert_value("1 ? 5 : undefined_name", 5.0);
    assert_value("0 ? undefined_name : 5", 5.0);
    assert_value("0 ? 1 : 0 ? 2 : 3", 3.0);
    assert_value("1 ? 0 ? 2 : 3 : 4", 3.0);
    assert_value("(1 ? 2 : 3) + 1", 3.0);
    assert_value("max(0 ? 1 : 2, 1)", 2.0);
}

#[test]
fn punctuation_is_never_merged() {
    let tokens = flux::tokenize("((1))@#").unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["(", "(", "1", ")", ")", "@", "#"]);

    for (i, token) in tokens.iter().enumerate() {
        let expected = if i == 2 {
            TokenKind::Number
        } else {
            TokenKind::Punctuation
        };
        assert_eq!(token.kind, expected, "token {i} `{}`", token.text);
        assert_eq!(token.position, i);
    }

    for op in ["**", "!<="] {
        let tokens = flux::tokenize(&format!("a {op} b")).unwrap();
        assert_eq!(tokens.len(), 3, "{op}");
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].text, op);
    }

    assert_value("((1))", 1.0);
}

#[test]
fn digit_separators() {
    let tokens = flux::tokenize("1'000").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "1'000");
    assert_value("1'000", 1000.0);
    assert_value("1'000'000.5", 1_000_000.5);
}

#[test]
fn builtin_functions() {
    assert_value("sin(0)", 0.0);
    assert_value("abs(-5)", 5.0);
    assert_value("sqrt(9)", 3.0);
    assert_value("round(2.5)", 3.0);
    assert_value("rint(2.5)", 2.0);
    assert_value("nearbyint(3.5)", 4.0);
    assert_value("sign(-42)", -1.0);
    assert_value("sign(0)", 0.0);
    assert_value("min(4, -2, 7)", -2.0);
    assert_value("max(4, -2, 7)", 7.0);
    assert_value("max(3)", 3.0);
    assert_value("clamp(5, 0, 3)", 3.0);
    assert_value("gcd(12, 18)", 6.0);
    assert_value("lcm(4, 6)", 12.0);
    assert_value("lerp(10, 20, 0.5)", 15.0);
    assert_value("midpoint(2, 4)", 3.0);
    assert_value("mod(-10, 3)", -1.0);
    assert_value("dim(5, 3)", 2.0);
    assert_value("dim(3, 5)", 0.0);
    assert_value("hypot(3, 4)", 5.0);
    assert_value("fma(2, 3, 4)", 10.0);
    assert_value("pow(2, 8)", 256.0);
    assert_value("log(e)", 1.0);
    assert_success("(pi > 3) && (pi < 4)");
    assert_success("abs(phi * phi - (phi + 1)) < 0.000001");
}

#[test]
fn special_functions() {
    assert_value("erf(0)", 0.0);
    assert_value("erfc(0)", 1.0);
    assert_close("erf(1)", 0.842_700_792_949_714_9);
    assert_close("tgamma(5)", 24.0);
    assert_close("tgamma(0.5)", 1.772_453_850_905_516);
    assert_close("lgamma(1)", 0.0);
    assert_close("lgamma(10)", 12.801_827_480_081_469);
    assert_close("beta(2, 3)", 1.0 / 12.0);
    assert_close("beta(-0.5, 1)", -2.0);
    assert_value("cyl_bessel_j(0, 0)", 1.0);
    assert_value("cyl_bessel_j(1, 0)", 0.0);
    assert_close("cyl_bessel_j(1, 1)", 0.440_050_585_744_933_5);
    assert_close("cyl_neumann(0, 1)", 0.088_256_964_215_676_96);
    assert_close("cyl_neumann(1.2, 1)", -0.781_212_821_300_288_7);
    assert_value("remainder(5, 2)", 1.0);
    assert_value("remainder(7, 2)", -1.0);
    assert_value("remainder(11, 3)", -1.0);
    assert_failure("beta(1)");
    assert_failure("cyl_neumann(1)");
}

#[test]
fn every_binary_operator_has_a_value() {
    for op in BinaryOperator::ALL {
        let value = Context::eval_binary(op, 7.0, 3.0);
        assert!(!value.is_nan(), "{op} gave NaN");
    }
    assert_eq!(Context::eval_binary(BinaryOperator::AbsDiff, 3.0, 10.0), 7.0);
}

#[test]
fn builtin_argument_errors() {
    assert_eq!(eval("sin(1, 2)"),
               Err(Error::Eval(EvalError::InvalidArity { function: "sin".to_string(),
                                                         expected: flux::Arity::Exact(1),
                                                         found:    2, })));
    assert_eq!(eval("min()"),
               Err(Error::Eval(EvalError::InvalidArity { function: "min".to_string(),
                                                         expected: flux::Arity::AtLeast(1),
                                                         found:    0, })));
    assert!(matches!(eval("clamp(1, 3, 0)"),
                     Err(Error::Eval(EvalError::InvalidArgument { .. }))));
    assert_failure("mod(1)");
    assert_failure("nan(1)");
}

#[test]
fn name_resolution_errors() {
    assert_eq!(eval("foo"),
               Err(Error::Eval(EvalError::UnknownIdentifier { name: "foo".to_string() })));
    assert_eq!(eval("foo(1)"),
               Err(Error::Eval(EvalError::UnknownFunction { name: "foo".to_string() })));
    // Arguments are evaluated before the function is looked up.
    assert_eq!(eval("foo(bar)"),
               Err(Error::Eval(EvalError::UnknownIdentifier { name: "bar".to_string() })));
}

#[test]
fn locals_shadow_constants() {
    let registry = Registry::with_builtins();
    let mut locals = Locals::new();
    assert_eq!(flux::evaluate("e", &locals, &registry).unwrap(), std::f64::consts::E);

    locals.insert("e".to_string(), 2.0);
    assert_eq!(flux::evaluate("e", &locals, &registry).unwrap(), 2.0);
}

#[test]
fn syntax_errors() {
    assert_eq!(eval("1 2"),
               Err(Error::Parse(ParseError::UnexpectedTrailingTokens { token:    "2".to_string(),
                                                                       position: 2, })));
    assert!(matches!(eval("1 +"),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(eval("(1 + 2"),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(eval("--3"), Err(Error::Parse(ParseError::InvalidOperator { .. }))));
    assert!(matches!(eval("1 +- 2"),
                     Err(Error::Parse(ParseError::InvalidOperator { .. }))));
    assert!(matches!(eval("1.2.3"), Err(Error::Parse(ParseError::InvalidNumber { .. }))));
    assert!(matches!(eval("1 ? 2"), Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(eval("1 ? 2 , 3"), Err(Error::Parse(ParseError::ExpectedToken { .. }))));
    assert_failure("max(1, 2,)");
    assert_failure(")");
    assert_failure("1 !! 2");
    assert_failure("   ");
}

#[test]
fn lexical_errors() {
    assert_eq!(eval("2 + \"3\""),
               Err(Error::Lex(flux::LexError { character: '"',
                                               position:  4, })));
}

#[test]
fn reparsing_is_deterministic() {
    let source = "max(w * 2 <? 100, 40) / 3 + sin(w) ?? 1";
    let first = flux::parse(source).unwrap();
    let second = flux::parse(source).unwrap();
    assert_eq!(first, second);

    let registry = Registry::with_builtins();
    let mut locals = Locals::new();
    locals.insert("w".to_string(), 17.0);
    let a = flux::evaluate(source, &locals, &registry).unwrap();
    let b = flux::evaluate(source, &locals, &registry).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn empty_source_is_zero() {
    assert_eq!(flux::evaluate("", &Locals::new(), &Registry::new()).unwrap(), 0.0);
}
