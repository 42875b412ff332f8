#![allow(dead_code)]

use boxview::ir::BoundingBoxAnnotation;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Normalized values, including a little spill past the unit square.
pub fn arb_fraction() -> impl Strategy<Value = f64> {
    -0.5f64..1.5f64
}

pub fn arb_annotation() -> impl Strategy<Value = BoundingBoxAnnotation> {
    (
        -5i64..100,
        arb_fraction(),
        arb_fraction(),
        0.0f64..1.0,
        0.0f64..1.0,
    )
        .prop_map(|(class_id, xc, yc, w, h)| BoundingBoxAnnotation::new(class_id, xc, yc, w, h))
}

/// A label line that must be dropped: 1-4 or 6-8 numeric tokens.
pub fn arb_wrong_count_line() -> impl Strategy<Value = String> {
    prop_oneof![1usize..5, 6usize..9].prop_flat_map(|count| {
        prop::collection::vec(arb_fraction(), count).prop_map(|values| {
            values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
    })
}

/// A five-token line that must be dropped: one token is not a number, or
/// the class id has a fractional part.
pub fn arb_non_numeric_line() -> impl Strategy<Value = String> {
    let junk = (
        0usize..5,
        prop::sample::select(vec!["abc", "x1", "0.5.5", "1,5", "--1", "1e"]),
    )
        .prop_map(|(pos, token)| (pos, token.to_string()));
    let float_class = (0.1f64..99.9)
        .prop_filter("needs a fractional part", |v| v.fract() != 0.0)
        .prop_map(|v| (0usize, v.to_string()));

    (arb_annotation(), prop_oneof![junk, float_class]).prop_map(|(ann, (pos, token))| {
        let mut tokens: Vec<String> = label_line(&ann).split(' ').map(str::to_string).collect();
        tokens[pos] = token;
        tokens.join(" ")
    })
}

/// One line of a mixed file: either a well-formed row or a line to drop.
#[derive(Clone, Debug)]
pub enum MixedLine {
    Good(BoundingBoxAnnotation),
    Bad(String),
}

pub fn arb_mixed_lines(max: usize) -> impl Strategy<Value = Vec<MixedLine>> {
    prop::collection::vec(
        prop_oneof![
            arb_annotation().prop_map(MixedLine::Good),
            arb_wrong_count_line().prop_map(MixedLine::Bad),
            arb_non_numeric_line().prop_map(MixedLine::Bad),
        ],
        0..max,
    )
}

/// Formats a row the way a label file holds it. `{}` on f64 prints the
/// shortest string that reads back to the same value.
pub fn label_line(ann: &BoundingBoxAnnotation) -> String {
    format!(
        "{} {} {} {} {}",
        ann.class_id, ann.x_center, ann.y_center, ann.width, ann.height
    )
}

pub fn label_text(annotations: &[BoundingBoxAnnotation]) -> String {
    annotations
        .iter()
        .map(label_line)
        .collect::<Vec<_>>()
        .join("\n")
}
