use super::Optional;

#[test]
fn present_and_absent() {
    let value = Optional::present(7u32);
    assert!(value.is_present());
    assert!(!value.is_absent());
    assert_eq!(value, Optional::Present(7));

    let value = Optional::<u32>::absent();
    assert!(value.is_absent());
    assert!(!value.is_present());
    assert_eq!(value, Optional::Absent);
}

#[test]
fn default_is_absent() {
    // Non-`Default` payloads must still produce an absent default.
    struct NoDefault;
    assert!(Optional::<NoDefault>::default().is_absent());
}

#[test]
fn value_of_present() {
    assert_eq!(Optional::present(String::from("foo")).value(), "foo");
}

#[test]
#[should_panic(expected = "called `Optional::value()` on an `Absent` value")]
fn value_of_absent_panics() {
    let _ = Optional::<u64>::absent().value();
}

#[test]
fn total_accessors() {
    assert_eq!(Optional::present(1).value_or(2), 1);
    assert_eq!(Optional::absent().value_or(2), 2);
    assert_eq!(Optional::absent().value_or_else(|| 3), 3);
    assert_eq!(Optional::present(4).get(), Some(&4));
    assert_eq!(Optional::<i32>::absent().get(), None);
}

#[test]
fn present_and() {
    assert!(Optional::present(11u64).present_and(|y| *y > 10));
    assert!(!Optional::present(10u64).present_and(|y| *y > 10));
    assert!(!Optional::<u64>::absent().present_and(|_| true));
}

#[test]
fn map_and_then() {
    assert_eq!(Optional::present(2).map(|n| n * 10), Optional::Present(20));
    assert_eq!(Optional::<i32>::absent().map(|n| n * 10), Optional::Absent);

    let half = |n: i32| {
        if n % 2 == 0 {
            Optional::present(n / 2)
        } else {
            Optional::absent()
        }
    };

    assert_eq!(Optional::present(8).and_then(half), Optional::Present(4));
    assert_eq!(Optional::present(7).and_then(half), Optional::Absent);
    assert_eq!(Optional::absent().and_then(half), Optional::Absent);
}

#[test]
fn if_present_and_if_absent() {
    let mut seen = Vec::new();

    Optional::present(1).if_present(|n| seen.push(n));
    Optional::absent().if_present(|n| seen.push(n));
    assert_eq!(seen, [1]);

    let mut absent = 0;
    Optional::<i32>::absent().if_absent(|| absent += 1);
    Optional::present(1).if_absent(|| absent += 1);
    assert_eq!(absent, 1);
}

#[test]
fn borrows() {
    let mut value = Optional::present(vec![1, 2]);

    if let Optional::Present(v) = value.as_mut() {
        v.push(3);
    }

    assert_eq!(value.as_ref().map(Vec::len), Optional::Present(3));
    assert_eq!(value.value(), [1, 2, 3]);
}

#[test]
fn option_conversions() {
    assert_eq!(Optional::from(Some(1)), Optional::Present(1));
    assert_eq!(Optional::<i32>::from(None), Optional::Absent);
    assert_eq!(Option::from(Optional::present(1)), Some(1));
    assert_eq!(Optional::<i32>::absent().into_option(), None);
}

#[test]
fn ordering() {
    assert!(Optional::Absent < Optional::Present(i32::MIN));
    assert!(Optional::Present(1) < Optional::Present(2));
}
