use flux::{Error, EvalError, Expr2, Expr3, Expr4, Expression, Locals, ParseError, Registry};

#[test]
fn parses_once_and_reuses_the_tree() {
    let registry = Registry::with_builtins();
    let mut expr = Expression::new("psx - 20");
    assert!(!expr.is_cached());

    expr.set_var("psx", 300.0);
    assert_eq!(expr.evaluate(&registry).unwrap(), 280.0);
    assert!(expr.is_cached());

    expr.set_var("psx", 100.0);
    assert_eq!(expr.evaluate(&registry).unwrap(), 80.0);
    assert_eq!(expr.ast().map(ToString::to_string).as_deref(), Some("(psx - 20)"));
}

#[test]
fn source_edits_wait_for_refresh() {
    let registry = Registry::new();
    let mut expr = Expression::new("1 + 1");
    assert_eq!(expr.evaluate(&registry).unwrap(), 2.0);

    *expr.source_mut() = "10 * 10".to_string();
    assert_eq!(expr.source(), "10 * 10");
    assert_eq!(expr.evaluate(&registry).unwrap(), 2.0);

    expr.refresh().unwrap();
    assert!(expr.is_cached());
    assert_eq!(expr.evaluate(&registry).unwrap(), 100.0);
}

#[test]
fn refresh_reports_syntax_errors_and_clears_cache() {
    let registry = Registry::new();
    let mut expr = Expression::new("1");
    expr.evaluate(&registry).unwrap();

    expr.source_mut().push_str(" +");
    assert!(matches!(expr.refresh(),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(!expr.is_cached());
    assert!(expr.evaluate(&registry).is_err());
}

#[test]
fn empty_expression() {
    let registry = Registry::new();
    let mut expr = Expression::default();
    assert_eq!(expr.evaluate(&registry).unwrap(), 0.0);
    assert!(!expr.is_cached());

    expr.refresh().unwrap();
    assert!(!expr.is_cached());
}

#[test]
fn evaluation_errors_keep_the_cache() {
    let registry = Registry::with_builtins();
    let mut expr = Expression::from("width / 2");
    assert_eq!(expr.evaluate(&registry),
               Err(Error::Eval(EvalError::UnknownIdentifier { name: "width".to_string() })));
    assert!(expr.is_cached());

    expr.set_var("width", 64.0);
    assert_eq!(expr.evaluate(&registry).unwrap(), 32.0);
}

#[test]
fn locals_can_be_replaced() {
    let registry = Registry::new();
    let mut expr = Expression::from(String::from("a * b"));

    let locals: Locals = [("a".to_string(), 3.0), ("b".to_string(), 4.0)].into_iter().collect();
    expr.set_locals(locals);
    assert_eq!(expr.evaluate(&registry).unwrap(), 12.0);

    expr.locals_mut().insert("b".to_string(), 5.0);
    assert_eq!(expr.locals().get("b"), Some(&5.0));
    assert_eq!(expr.evaluate(&registry).unwrap(), 15.0);
}

#[test]
fn from_number() {
    let registry = Registry::new();
    assert_eq!(Expression::from(2.5).evaluate(&registry).unwrap(), 2.5);
    assert_eq!(Expression::from(-4.0).evaluate(&registry).unwrap(), -4.0);
    assert_eq!(Expression::from(0.1).source(), "0.1");
}

#[test]
fn registry_registration() {
    let mut registry = Registry::new();
    assert!(registry.constant_names().is_empty());

    registry.register_constant("gap", 8.0);
    registry.register_constant("gap", 12.0);
    assert_eq!(registry.constant("gap"), Some(12.0));
    assert!(registry.contains_constant("gap"));
    assert!(!registry.contains_constant("pi"));

    registry.register_function("twice", |args: &[f64]| {
                flux::check_arity("twice", args, flux::Arity::Exact(1))?;
                Ok(args[0] * 2.0)
            });
    assert!(registry.contains_function("twice"));
    assert_eq!(flux::evaluate("twice(gap)", &Locals::new(), &registry).unwrap(), 24.0);
    assert!(matches!(flux::evaluate("twice(1, 2)", &Locals::new(), &registry),
                     Err(Error::Eval(EvalError::InvalidArity { .. }))));

    registry.register_function("twice", |_: &[f64]| Ok(0.0));
    assert_eq!(flux::evaluate("twice(gap)", &Locals::new(), &registry).unwrap(), 0.0);
    assert_eq!(registry.function_names(), ["twice"]);
}

#[test]
fn registry_builtins() {
    let registry = Registry::with_builtins();
    for name in ["e", "log2e", "log10e", "pi", "inv_pi", "inv_sqrtpi", "ln2", "ln10", "sqrt2",
                 "sqrt3", "inv_sqrt3", "egamma", "phi"]
    {
        assert!(registry.contains_constant(name), "missing constant {name}");
    }
    for name in flux::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS {
        assert!(registry.contains_function(name), "missing function {name}");
    }
    assert_eq!(registry.function_names().len(), 51);

    let mut functions_only = Registry::new();
    functions_only.add_builtin_functions();
    assert!(functions_only.contains_function("sin"));
    assert!(!functions_only.contains_constant("pi"));
}

#[test]
fn registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();

    let registry = Registry::with_builtins();
    std::thread::scope(|scope| {
        for i in 0..4 {
            let registry = &registry;
            scope.spawn(move || {
                     let mut expr = Expression::new("x * 2");
                     expr.set_var("x", f64::from(i));
                     assert_eq!(expr.evaluate(registry).unwrap(), f64::from(i) * 2.0);
                 });
        }
    });
}

#[test]
fn vector_from_template() {
    let registry = Registry::with_builtins();
    let mut size = Expr2::from_template("parent.{} - 2 * margin");
    assert_eq!(size.components()[0].source(), "parent.x - 2 * margin");
    assert_eq!(size.components()[1].source(), "parent.y - 2 * margin");

    size.set_var("parent.x", 640.0);
    size.set_var("parent.y", 480.0);
    size.set_var("margin", 8.0);
    assert_eq!(size.evaluate(&registry).unwrap(), [624.0, 464.0]);

    let color = Expr4::from_template("{}");
    let sources: Vec<_> = color.components().iter().map(Expression::source).collect();
    assert_eq!(sources, ["x", "y", "z", "w"]);
}

#[test]
fn vector_from_sources_and_values() {
    let registry = Registry::with_builtins();
    let mut position = Expr3::new(["1 + 1", "", "pi // 1"]);
    assert_eq!(position.evaluate(&registry).unwrap(), [2.0, 0.0, 3.0]);

    let mut fixed = Expr2::from_values([1.5, -2.0]);
    assert_eq!(fixed.evaluate(&registry).unwrap(), [1.5, -2.0]);

    fixed.components_mut()[1].source_mut().push_str(" * 3");
    fixed.refresh().unwrap();
    assert_eq!(fixed.evaluate(&registry).unwrap(), [1.5, -6.0]);
}

#[test]
fn vector_reports_first_error() {
    let registry = Registry::new();
    let mut v = Expr2::new(["a", "b"]);
    assert_eq!(v.evaluate(&registry),
               Err(Error::Eval(EvalError::UnknownIdentifier { name: "a".to_string() })));
}
