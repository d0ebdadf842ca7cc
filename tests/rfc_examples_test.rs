// RFC 6570 example tables run through `expand`

use uritemplate::expand;

mod common;

fn run_fixture(file: &str) -> usize {
    let mut failures = Vec::new();
    let mut count = 0;

    for (section, example) in common::load_examples(file) {
        for (template, expected) in &example.testcases {
            count += 1;
            match expand(template, &example.variables) {
                Ok(actual) if expected.matches(&actual) => {}
                Ok(actual) => failures.push(format!(
                    "{}: {} -> {:?}, expected {:?}",
                    section, template, actual, expected
                )),
                Err(err) => failures.push(format!("{}: {} -> error {}", section, template, err)),
            }
        }
    }

    assert!(failures.is_empty(), "failures:\n{}", failures.join("\n"));
    count
}

#[test]
fn test_spec_examples_by_level() {
    let count = run_fixture("spec-examples.json");
    assert!(count > 60);
}

#[test]
fn test_spec_examples_by_section() {
    let count = run_fixture("spec-examples-by-section.json");
    assert!(count > 100);
}

#[test]
fn test_fixture_levels_are_recorded() {
    let examples = common::load_examples("spec-examples.json");
    let levels: Vec<Option<u8>> = examples.values().map(|example| example.level).collect();
    assert_eq!(levels, vec![Some(1), Some(2), Some(3), Some(4)]);
}
