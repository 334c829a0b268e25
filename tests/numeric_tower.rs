use std::cmp::Ordering;

use expect_test::expect;
use symnum::error::NumberError;
use symnum::numbers::{Assumptions, Number, Real};
use symnum::sym_expr::{Expr, ExprKind};
use symnum::sympify::sympify;

fn rat(n: i64, d: i64) -> Number {
    Number::rational(n, d).unwrap()
}

#[test]
fn rationals_are_stored_in_lowest_terms() {
    assert_eq!(rat(2, -4), rat(-1, 2));
    assert_eq!(rat(6, 3), Number::int(2));
    for k in [-5i64, -1, 2, 7] {
        assert_eq!(rat(3 * k, 4 * k), rat(3, 4));
    }
    match rat(-3, 4) {
        Number::Rational(r) => {
            assert_eq!(r.numer().cmp0(), Ordering::Less);
            assert_eq!(r.denom().cmp0(), Ordering::Greater);
        }
        n => panic!("expected a rational, got {n:?}"),
    }
}

#[test]
fn denominator_one_collapses_to_integer() {
    assert!(matches!(rat(8, 2), Number::Integer(_)));
    assert!(matches!(rat(0, 5), Number::Integer(_)));
}

#[test]
fn exact_division_loses_no_precision() {
    let values = [rat(3, 7), rat(-2, 5), Number::int(4), rat(9, 4)];
    for a in &values {
        for b in &values {
            let quotient = a.div(b).unwrap();
            assert_eq!(&quotient * b, *a, "({a}) / ({b}) * ({b})");
        }
    }
}

#[test]
fn mixing_with_an_approximate_operand_promotes() {
    let a = rat(1, 3);
    let b = Real::from_f64(0.25);
    let sum = &a + &Number::Real(b.clone());
    assert!(matches!(sum, Number::Real(_)));
    assert_eq!(sum, Number::Real(&a.evalf() + &b));
}

#[test]
fn equal_exact_values_share_one_instance() {
    assert!(Number::int(5).ptr_eq(&Number::int(5)));
    assert!(Number::int(7_000_000_000i64).ptr_eq(&Number::int(7_000_000_000i64)));
    assert!(rat(3, 4).ptr_eq(&rat(3, 4)));
    assert!(!Number::int(5).ptr_eq(&Number::int(6)));
}

#[test]
fn comparison_agrees_with_exact_subtraction() {
    let values = [rat(-7, 3), Number::int(-2), Number::int(0), rat(1, 2), Number::int(2), rat(9, 4)];
    for a in &values {
        for b in &values {
            let expected = (a - b).cmp0();
            assert_eq!(a.compare(b), expected, "compare({a}, {b})");
        }
    }
}

#[test]
fn zero_denominators_and_zero_divisors_are_rejected() {
    assert_eq!(Number::rational(3, 0), Err(NumberError::InvalidDenominator));
    assert_eq!(rat(1, 2).div(&Number::int(0)), Err(NumberError::DivisionByZero));
    assert_eq!(
        Number::int(0).pow(&Number::int(-1)),
        Err(NumberError::DivisionByZero)
    );
    assert_eq!(
        Number::from_f64(1.5).div(&Number::from_f64(0.0)),
        Err(NumberError::DivisionByZero)
    );
}

#[test]
fn negative_integer_powers_of_rationals_stay_exact() {
    assert_eq!(rat(2, 3).pow(&Number::int(-2)).unwrap(), rat(9, 4));
    assert_eq!(Number::int(2).pow(&Number::int(10)).unwrap(), Number::int(1024));
    assert_eq!(rat(1, 2).pow(&Number::int(0)).unwrap(), Number::int(1));
}

#[test]
fn out_of_range_exponents_fall_back_to_approximate() {
    let huge = Number::int(2).pow(&Number::int(5_000_000_000i64)).unwrap();
    assert!(matches!(huge, Number::Real(_)));
    assert_eq!(huge.is_finite(), Some(false));
}

#[test]
fn fractional_exponents_promote() {
    let root = Number::int(4).pow(&rat(1, 2)).unwrap();
    assert!(matches!(root, Number::Real(_)));
    assert!((root.to_f64() - 2.0).abs() < 1e-12);
}

#[test]
fn sympified_rational_sum_folds_to_the_canonical_integer() {
    let sum = sympify("3/4").unwrap() + sympify("1/4").unwrap();
    let n = sum.as_number().expect("numeric result");
    assert!(n.ptr_eq(&Number::one()));
}

#[test]
fn sympified_decimal_plus_rational_is_approximate() {
    let sum = sympify("2.5").unwrap() + sympify("1/2").unwrap();
    let n = sum.as_number().expect("numeric result");
    assert!(matches!(n, Number::Real(_)));
    assert!((n.to_f64() - 3.0).abs() < 1e-12);
}

#[test]
fn sympify_accepts_the_literal_grammar() {
    assert_eq!(sympify(" -12 ").unwrap(), Expr::number(Number::int(-12)));
    assert_eq!(sympify("+3/9").unwrap(), Expr::number(rat(1, 3)));
    assert!(sympify("1e3").unwrap().as_number().is_some());
    assert!(sympify(".5").unwrap().as_number().is_some());
    assert!((sympify("2.5e-1").unwrap().as_number().unwrap().to_f64() - 0.25).abs() < 1e-12);
}

#[test]
fn sympify_rejects_everything_else() {
    for bad in ["five", "1.2.3", "", "2x", "--3", "1/ 2"] {
        assert!(
            matches!(sympify(bad), Err(NumberError::UnrecognizedNumericLiteral(_))),
            "sympify({bad:?})"
        );
    }
    assert_eq!(sympify("1/0"), Err(NumberError::InvalidDenominator));
}

#[test]
fn imaginary_literals_hand_off_to_the_symbolic_layer() {
    let z = sympify("3i").unwrap();
    match z.kind() {
        ExprKind::Mul(coefficient, unit) => {
            assert_eq!(coefficient.as_number(), Some(&Number::int(3)));
            assert_eq!(*unit, Expr::imaginary_unit());
        }
        k => panic!("expected a deferred product, got {k:?}"),
    }
    assert!(sympify("2.5j").unwrap().as_number().is_none());
    assert_eq!(sympify("1i").unwrap(), Expr::imaginary_unit());
}

#[test]
fn symbolic_operands_defer_instead_of_failing() {
    let x = Expr::symbol("x");
    assert_eq!(sympify(&x).unwrap(), x);

    let sum = &x + &sympify(2).unwrap();
    assert!(matches!(sum.kind(), ExprKind::Add(..)));

    // numeric fast paths on deferred constructors
    assert_eq!(&x * &Expr::one(), x);
    assert!((&x * &Expr::zero()).is_zero() == Some(true));
    assert_eq!(x.pow(&Expr::zero()).unwrap(), Expr::one());
    assert_eq!(x.pow(&Expr::one()).unwrap(), x);

    assert_eq!(x.div(&Expr::zero()), Err(NumberError::DivisionByZero));
    let quotient = x.div(&sympify(2).unwrap()).unwrap();
    assert!(matches!(quotient.kind(), ExprKind::Mul(..)));
}

#[test]
fn incomparable_kinds_report_none() {
    let x = Expr::symbol("x");
    let two = sympify(2).unwrap();
    assert_eq!(x.compare(&two), None);
    assert_eq!(x.compare(&Expr::symbol("y")), Some(Ordering::Less));
    assert_eq!(two.compare(&sympify("9/4").unwrap()), Some(Ordering::Less));
}

#[test]
fn nan_is_incomparable_and_of_unknown_sign() {
    let nan = Number::from_f64(f64::NAN);
    assert_eq!(nan.compare(&Number::int(0)), None);
    assert_eq!(nan.is_positive(), None);
    assert_eq!(nan.is_real(), None);
    assert_eq!(nan.is_finite(), Some(false));
}

#[test]
fn flags_are_definite_on_exact_values_and_guarded_on_reals() {
    let four = Number::int(4);
    assert_eq!(four.is_integer(), Some(true));
    assert_eq!(four.is_even(), Some(true));
    assert_eq!(four.is_odd(), Some(false));
    assert_eq!(four.is_positive(), Some(true));
    assert_eq!(four.is_nonnegative(), Some(true));

    let half = rat(1, 2);
    assert_eq!(half.is_integer(), Some(false));
    assert_eq!(half.is_rational(), Some(true));
    assert_eq!(half.is_even(), Some(false));

    let approx = Number::from_f64(2.5);
    assert_eq!(approx.is_integer(), None);
    assert_eq!(approx.is_rational(), None);
    assert_eq!(approx.is_real(), Some(true));
    assert_eq!(approx.is_finite(), Some(true));

    assert_eq!(Number::int(0).is_nonnegative(), Some(true));
    assert_eq!(Number::int(-2).is_nonnegative(), Some(false));

    let x = Expr::symbol("x");
    assert_eq!(x.is_zero(), None);
    assert_eq!(x.is_commutative(), Some(true));
    let sum = &x + &Expr::one();
    assert_eq!(sum.is_commutative(), Some(true));
}

#[test]
fn exact_display_round_trips_through_sympify() {
    for n in [Number::int(5), Number::int(-12), rat(-3, 4), rat(22, 7)] {
        let round_tripped = sympify(n.to_string()).unwrap();
        assert_eq!(round_tripped, Expr::number(n));
    }
}

#[test]
fn constructor_forms_are_stable() {
    expect![[r#"Integer(5)"#]].assert_eq(&format!("{:?}", Number::int(5)));
    expect![[r#"Rational(-3, 4)"#]].assert_eq(&format!("{:?}", rat(-3, 4)));
    let x = Expr::symbol("x");
    let e = (&x + &sympify(2).unwrap()).pow(&Expr::symbol("y")).unwrap();
    expect![[r#"Pow(Add(Symbol("x"), Integer(2)), Symbol("y"))"#]].assert_eq(&format!("{e:?}"));
    expect![[r#"(x + 2)^y"#]].assert_eq(&e.to_string());
}

#[test]
fn concurrent_construction_publishes_one_instance() {
    let numbers: Vec<Number> = std::thread::scope(|scope| {
        (0..8)
            .map(|_| scope.spawn(|| Number::int(987_654_321)))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    for n in &numbers[1..] {
        assert!(n.ptr_eq(&numbers[0]));
    }
}

#[test]
fn evalf_is_idempotent() {
    let half = rat(1, 2);
    let once = half.evalf();
    let twice = Number::Real(once.clone()).evalf();
    assert!(once.ptr_eq(&twice));
    assert_eq!(once.to_f64(), 0.5);
}

#[test]
fn working_precision_is_set_once_per_thread() {
    std::thread::scope(|scope| {
        scope
            .spawn(|| {
                assert_eq!(symnum::numbers::precision(), symnum::numbers::DEFAULT_PRECISION);
                assert!(symnum::numbers::set_precision(100));
                assert!(!symnum::numbers::set_precision(200));
                assert_eq!(rat(1, 3).evalf().prec(), 100);
            })
            .join()
            .unwrap();
    });
}

#[test]
fn numeric_wrappers_expose_zero_and_one() {
    use num_traits::{One, Zero};
    use symnum::numbers::Integer;

    assert!(Integer::zero().is_zero());
    assert!(Integer::one().is_one());
    assert!(Integer::zero().ptr_eq(&Integer::new(0)));
    assert!(Real::zero().is_zero());
    assert!(Real::one().is_one());
}
