use super::*;

#[test]
fn test_parse_weights_accepts_fractions_and_spaces() {
    let weights = parse_weights("1, 0.5,2.25 ,1").unwrap();
    assert_eq!(weights, vec![1.0, 0.5, 2.25, 1.0]);
}

#[test]
fn test_parse_weights_rejects_non_numeric() {
    let err = parse_weights("1,x,1").unwrap_err();
    assert!(matches!(err, TopsisError::NonNumericWeights(ref t) if t == "x"));
}

#[test]
fn test_parse_weights_rejects_empty_entry() {
    let err = parse_weights("1,,1").unwrap_err();
    assert!(matches!(err, TopsisError::NonNumericWeights(_)));
}

#[test]
fn test_parse_weights_rejects_non_positive() {
    let err = parse_weights("1,0").unwrap_err();
    assert!(matches!(err, TopsisError::InvalidWeight { position: 2, .. }));
    let err = parse_weights("-1,1").unwrap_err();
    assert!(matches!(err, TopsisError::InvalidWeight { position: 1, .. }));
    let err = parse_weights("1,inf").unwrap_err();
    assert!(matches!(err, TopsisError::InvalidWeight { position: 2, .. }));
}

#[test]
fn test_parse_impacts() {
    let impacts = parse_impacts("+, -,+").unwrap();
    assert_eq!(
        impacts,
        vec![Impact::Beneficial, Impact::Cost, Impact::Beneficial]
    );
}

#[test]
fn test_parse_impacts_rejects_unknown_symbol() {
    let err = parse_impacts("+,*").unwrap_err();
    assert!(matches!(err, TopsisError::InvalidImpactSymbol(ref s) if s == "*"));
}
