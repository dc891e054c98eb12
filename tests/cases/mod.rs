use once_cell::sync::Lazy;
use tinycalc::Outcome;

pub struct TestCase {
    pub name: &'static str,
    pub lines: &'static [&'static str],
    /// Outcome of the last line.
    pub expected: Outcome,
}

pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "multiplication_before_addition",
            lines: &["1+2*3"],
            expected: Outcome::Value(7.0),
        },
        TestCase {
            name: "parentheses_first",
            lines: &["(1+2)*3"],
            expected: Outcome::Value(9.0),
        },
        TestCase {
            name: "power_is_right_associative",
            lines: &["2^3^2"],
            expected: Outcome::Value(512.0),
        },
        TestCase {
            name: "division_is_left_associative",
            lines: &["8/4/2"],
            expected: Outcome::Value(1.0),
        },
        TestCase {
            name: "subtraction_is_left_associative",
            lines: &["9 - 3 - 2"],
            expected: Outcome::Value(4.0),
        },
        TestCase {
            name: "square_root",
            lines: &["9√2"],
            expected: Outcome::Value(3.0),
        },
        TestCase {
            name: "root_binds_tighter_than_division",
            lines: &["4√2/2"],
            expected: Outcome::Value(1.0),
        },
        TestCase {
            name: "assignment_then_use",
            lines: &["x=5", "x+1"],
            expected: Outcome::Value(6.0),
        },
        TestCase {
            name: "assignment_yields_binding",
            lines: &["a = 2 ^ 3"],
            expected: Outcome::Assigned {
                name: 'a',
                value: 8.0,
            },
        },
        TestCase {
            name: "chained_assignment_binds_both",
            lines: &["x=y=3", "x*y"],
            expected: Outcome::Value(9.0),
        },
        TestCase {
            name: "rebinding",
            lines: &["c=1", "c=c+1", "c=c*3", "c"],
            expected: Outcome::Value(6.0),
        },
        TestCase {
            name: "upper_and_lower_case_are_distinct",
            lines: &["A=1", "a=2", "A-a"],
            expected: Outcome::Value(-1.0),
        },
        TestCase {
            name: "division_by_zero",
            lines: &["1/0"],
            expected: Outcome::Value(f64::INFINITY),
        },
    ]
});
