use fieldtree::validate::{is_balanced, matches_shape};
use fieldtree::{check, normalize, validate, Validity};

#[test]
fn test_valid_inputs() {
    let inputs = [
        "(id,created,employee(id,firstname,employeeType(id),lastname),location)",
        "(id,created,employee(id,firstname,employeeType(id,type(id,name)),lastname),location)",
        "(id,created,employee(id,firstname,employeeType(id,type(id,name,description(id,text))),lastname),location)",
        "(employee(employeeType(id)))",
        "( employee ( employeeType ( id ) ) )",
        "(id:1,created:today,employee(id:101,firstname:derek,employeeType(id:404),lastname:dupuis),location:nashua)",
        "(a)",
        "(a,b)",
    ];

    for input in inputs {
        assert!(validate(input), "expected valid: {}", input);
        assert_eq!(check(input), Validity::Valid);
    }
}

#[test]
fn test_invalid_inputs() {
    let inputs = [
        "()",                   // empty group
        "(employee())",         // empty nested group
        "(employee,location,)", // trailing comma
        "(,employee,location)", // leading comma
        "((employee)",          // unmatched opening
        "(employee))",          // unmatched closing
        "(employee()",          // ends inside an empty group
        "employee)",            // missing first paren
        "(employee",            // missing last paren
        "employee",             // missing both parens
    ];

    for input in inputs {
        assert!(!validate(input), "expected invalid: {}", input);
    }
}

#[test]
fn test_disallowed_characters() {
    for input in ["(first-name)", "(first_name)", "(a;b)", "(a.b)", "(\"a\")"] {
        assert_eq!(check(input), Validity::Malformed, "input: {}", input);
    }
}

#[test]
fn test_balance_fails_alone() {
    let input = normalize("(employee))");
    assert!(matches_shape(&input));
    assert!(!is_balanced(&input));
    assert!(!validate("(employee))"));
}

#[test]
fn test_shape_fails_alone() {
    let input = normalize("(,employee)");
    assert!(is_balanced(&input));
    assert!(!matches_shape(&input));
    assert!(!validate("(,employee)"));
}

#[test]
fn test_whitespace_and_case_validate_identically() {
    let pairs = [
        ("(employee(employeetype(id)))", "( employee ( employeetype ( id ) ) )"),
        ("(a,b(c))", "(A, B(\tC\n))"),
        ("(a,)", "( A , )"),
    ];

    for (plain, noisy) in pairs {
        assert_eq!(check(plain), check(noisy));
    }
}

#[test]
fn test_sibling_groups_pass_both_checks() {
    assert!(validate("(a(b)(c))"));
    assert!(validate("(a)(b)"));
}
