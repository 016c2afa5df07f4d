//! End-to-end tests for the analysis pipeline.

use cleavescan::{analyze, analyze_with, AnalysisError, AnalysisOptions, Strand};

#[test]
fn test_analyze_forward_and_reverse_sites() {
    // ATCG matches forward at 0 and 4; CGAT at position 2 matches the
    // reverse strand (its reverse complement is ATCG).
    let report = analyze("ATCGATCG", "ATCG").unwrap();

    let summary: Vec<(usize, Strand)> = report
        .iter()
        .map(|s| (s.position(), s.strand()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, Strand::Forward),
            (2, Strand::Reverse),
            (4, Strand::Forward),
        ]
    );
    assert_eq!(report.sites()[1].matched().to_string(), "CGAT");
}

#[test]
fn test_analyze_report_is_strictly_ascending() {
    let report = analyze(&"GAATTCAT".repeat(16), "GAATTC").unwrap();
    assert!(!report.is_empty());

    let positions: Vec<usize> = report.iter().map(|s| s.position()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_analyze_empty_sequence() {
    assert_eq!(analyze("", "GAATTC").unwrap_err(), AnalysisError::EmptyInput);
    assert_eq!(
        analyze("   \n", "GAATTC").unwrap_err(),
        AnalysisError::EmptyInput
    );
}

#[test]
fn test_analyze_empty_agent() {
    assert_eq!(analyze("ACGT", "").unwrap_err(), AnalysisError::EmptyInput);
}

#[test]
fn test_analyze_invalid_sequence_character() {
    let err = analyze("ACGXACGT", "ACGT").unwrap_err();
    assert_eq!(
        err,
        AnalysisError::InvalidCharacter {
            character: 'X',
            index: 3
        }
    );
}

#[test]
fn test_analyze_invalid_pattern_symbol() {
    let err = analyze("ACGT", "AC?T").unwrap_err();
    assert_eq!(
        err,
        AnalysisError::InvalidPattern {
            character: '?',
            index: 2
        }
    );
}

#[test]
fn test_analyze_sequence_n_is_not_a_wildcard() {
    // The coinciding reverse match at position 1 loses the tie-break, so
    // the report holds a single forward site.
    let report = analyze("AATTN", "AT").unwrap();

    assert_eq!(report.len(), 1);
    let site = &report.sites()[0];
    assert_eq!(site.position(), 1);
    assert_eq!(site.strand(), Strand::Forward);
    assert_eq!(site.matched().to_string(), "AT");
    // Window covers the whole sequence: four A/T bases plus one N.
    assert_eq!(site.efficiency(), 0.1);
}

#[test]
fn test_analyze_palindromic_site_reported_once_as_forward() {
    let report = analyze("AAAGAATTCAAA", "EcoRI").unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report.sites()[0].position(), 3);
    assert_eq!(report.sites()[0].strand(), Strand::Forward);
    assert_eq!(report.sites()[0].matched().to_string(), "GAATTC");
}

#[test]
fn test_analyze_resolves_enzyme_names_case_insensitively() {
    let by_name = analyze("AAAGAATTCAAA", "ecori").unwrap();
    let by_pattern = analyze("AAAGAATTCAAA", "GAATTC").unwrap();
    assert_eq!(by_name, by_pattern);
}

#[test]
fn test_analyze_degenerate_enzyme_site() {
    // HincII recognizes GTYRAC: GTCAAC and GTTGAC both qualify.
    let report = analyze("GTCAACAAAGTTGAC", "HincII").unwrap();
    let positions: Vec<usize> = report.iter().map(|s| s.position()).collect();
    assert_eq!(positions, vec![0, 9]);
}

#[test]
fn test_analyze_normalizes_messy_input() {
    let report = analyze(" aaa gaattc\naaa ", "gaattc").unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.sites()[0].position(), 3);
}

#[test]
fn test_analyze_scores_are_deterministic() {
    let sequence = "GCGCGAATTCATATNNGAATTCGCGC";
    let first = analyze(sequence, "EcoRI").unwrap();
    let second = analyze(sequence, "EcoRI").unwrap();

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.efficiency().to_bits(), b.efficiency().to_bits());
    }
}

#[test]
fn test_analyze_scores_stay_in_unit_interval() {
    let report = analyze("GCGCNNATATGCGCNNATATGCGC", "NN").unwrap();
    assert!(!report.is_empty());
    for site in &report {
        assert!((0.0..=1.0).contains(&site.efficiency()));
    }
}

#[test]
fn test_analyze_with_sequence_too_long() {
    let options = AnalysisOptions {
        max_sequence_length: Some(10),
        ..Default::default()
    };
    let err = analyze_with(&"A".repeat(11), "AA", &options).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::SequenceTooLong {
            length: 11,
            limit: 10
        }
    );

    // At the bound the analysis proceeds.
    assert!(analyze_with(&"A".repeat(10), "AA", &options).is_ok());
}

#[test]
fn test_analyze_with_require_matches() {
    let options = AnalysisOptions {
        require_matches: true,
        ..Default::default()
    };
    assert_eq!(
        analyze_with("AAAA", "GGGG", &options).unwrap_err(),
        AnalysisError::EmptyReport
    );
    assert!(analyze_with("AAGG", "GG", &options).is_ok());
}

#[test]
fn test_analyze_empty_report_is_valid_by_default() {
    let report = analyze("AAAA", "GGGG").unwrap();
    assert!(report.is_empty());
    assert_eq!(report.len(), 0);
}

#[test]
fn test_analyze_parallel_equals_serial() {
    let sequence: String = "GAATTCATCCANNNNNNTGGAT".repeat(40);
    let serial = analyze(&sequence, "BstXI").unwrap();
    let parallel = analyze_with(
        &sequence,
        "BstXI",
        &AnalysisOptions {
            parallel: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(serial, parallel);
}

#[test]
fn test_analyze_custom_window_changes_scores() {
    // GC-rich flanks raise the score as the window widens.
    let sequence = "GCGCATATGCGC";
    let narrow = analyze_with(
        sequence,
        "ATAT",
        &AnalysisOptions {
            window: 0,
            ..Default::default()
        },
    )
    .unwrap();
    let wide = analyze_with(
        sequence,
        "ATAT",
        &AnalysisOptions {
            window: 4,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(narrow.sites()[0].efficiency(), 0.0);
    assert!(wide.sites()[0].efficiency() > 0.0);
}

#[test]
fn test_analyze_report_serializes_to_json() {
    let report = analyze("AAAGAATTCAAA", "EcoRI").unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["sites"][0]["position"], 3);
    assert_eq!(json["sites"][0]["matched"], "GAATTC");
    assert_eq!(json["sites"][0]["strand"], "forward");
}
