//! Integration tests for ruslex

use ruslex::*;

/// Sample text for testing
const SAMPLE_TEXT: &str = "\
Старый дом стоял у тихой реки. Белый снег лежал на старой крыше, и холодный \
ветер шумел в саду. Старый дом молчал. Зимой белый снег покрывал весь сад, \
и дети лепили снежную бабу у ворот.

Весной холодная река разливалась, и старый дом отражался в воде. Жители \
деревни любили старый дом и белый сад вокруг него.";

#[test]
fn test_full_pipeline() {
    let pipeline = AnalysisPipeline::default();
    let result = pipeline.run(SAMPLE_TEXT).unwrap();

    assert!(!result.dictionary.is_empty());
    assert!(result.statistics.total_tokens > 0);
    assert!(result.statistics.unique_lemmas <= result.statistics.total_words);
    assert!(result.meta.sentence_count >= 5);
    assert_eq!(result.meta.skipped_sentences, 0);

    // The dominant collocation surfaces at the top
    let QueryOutcome::Known(adjectives) = result.collocations.query("дом", 20) else {
        panic!("«дом» occurs throughout the text");
    };
    assert_eq!(adjectives[0].adjective, "старый");
    assert!(adjectives[0].count >= 3);
    assert!(!adjectives[0].examples.is_empty());
}

#[test]
fn test_dependency_example_sentence() {
    let pipeline = AnalysisPipeline::default();
    let result = pipeline.run("Старый дом стоял у реки.").unwrap();

    let dom = result
        .dictionary
        .iter()
        .find(|e| e.lemma == "дом")
        .expect("dictionary entry for «дом»");
    assert_eq!(dom.pos, PosTag::Noun);
    assert!(dom.count >= 1);

    let stary = result
        .dictionary
        .iter()
        .find(|e| e.lemma == "старый")
        .expect("dictionary entry for «старый»");
    assert_eq!(stary.pos, PosTag::Adjective);

    let QueryOutcome::Known(adjectives) = result.collocations.query("дом", 20) else {
        panic!("«дом» should be a known noun");
    };
    assert_eq!(adjectives.len(), 1);
    assert_eq!(adjectives[0].adjective, "старый");
    assert_eq!(adjectives[0].count, 1);
}

#[test]
fn test_window_fallback_on_fragmentary_input() {
    let pipeline = AnalysisPipeline::default();
    let result = pipeline.run("белый снег холодный ветер").unwrap();

    let QueryOutcome::Known(sneg) = result.collocations.query("снег", 20) else {
        panic!("«снег» should be a known noun");
    };
    assert!(sneg.iter().any(|e| e.adjective == "белый"));

    let QueryOutcome::Known(veter) = result.collocations.query("ветер", 20) else {
        panic!("«ветер» should be a known noun");
    };
    assert!(veter.iter().any(|e| e.adjective == "холодный"));
}

#[test]
fn test_unknown_noun_is_distinct_from_empty_list() {
    let pipeline = AnalysisPipeline::default();
    let result = pipeline.run("Дом стоял, и река шумела.").unwrap();

    // «река» was seen as a noun but collected no adjectives
    let outcome = result.collocations.query("река", 20);
    assert!(outcome.is_known());
    assert!(outcome.adjectives().unwrap().is_empty());

    // «облако» never occurred at all
    assert_eq!(
        result.collocations.query("облако", 20),
        QueryOutcome::UnknownNoun
    );
}

#[test]
fn test_prefix_search_recovers_from_unknown_noun() {
    let pipeline = AnalysisPipeline::default();
    let result = pipeline.run("Старый дом стоял. Маленький домик молчал.").unwrap();

    assert_eq!(result.collocations.query("до", 20), QueryOutcome::UnknownNoun);
    let candidates = result.collocations.search("до", 10);
    assert_eq!(candidates, vec!["дом", "домик"]);
}

#[test]
fn test_deterministic_json_output() {
    let pipeline = AnalysisPipeline::default();

    let a = pipeline.run(SAMPLE_TEXT).unwrap();
    let b = pipeline.run(SAMPLE_TEXT).unwrap();

    // Everything except wall-clock time is byte-identical
    let strip = |mut v: serde_json::Value| {
        v["meta"]["processing_time_ms"] = 0.0.into();
        serde_json::to_string(&v).unwrap()
    };
    let ja = strip(serde_json::from_str(&to_json(&a).unwrap()).unwrap());
    let jb = strip(serde_json::from_str(&to_json(&b).unwrap()).unwrap());
    assert_eq!(ja, jb);
}

#[test]
fn test_empty_and_unparseable_input() {
    let pipeline = AnalysisPipeline::default();

    assert!(matches!(
        pipeline.run("").unwrap_err(),
        AnalysisError::EmptyInput { .. }
    ));
    assert!(matches!(
        pipeline.run("!!! ... ???").unwrap_err(),
        AnalysisError::NoTokens { .. }
    ));
}

#[test]
fn test_dictionary_aggregates_surface_forms() {
    let pipeline = AnalysisPipeline::default();
    let result = pipeline
        .run("Старый дом стоял. Жители любили старый дом.")
        .unwrap();

    let dom = result.dictionary.iter().find(|e| e.lemma == "дом").unwrap();
    assert_eq!(dom.count, 2);
    assert!(dom.surface_forms.contains("дом"));
}

#[test]
fn test_statistics_pos_distribution_covers_all_tokens() {
    let pipeline = AnalysisPipeline::default();
    let result = pipeline.run(SAMPLE_TEXT).unwrap();

    let stats = &result.statistics;
    let distributed: usize = stats.pos_distribution.iter().map(|s| s.count).sum();
    assert_eq!(distributed, stats.total_tokens);

    let percent_total: f64 = stats.pos_distribution.iter().map(|s| s.percent).sum();
    assert!((percent_total - 100.0).abs() < 1e-9);
}

#[test]
fn test_custom_config_flows_through() {
    let cfg = AnalyzerConfig::default()
        .with_max_examples(1)
        .with_top_n(2);
    let pipeline = AnalysisPipeline::new(cfg).unwrap();
    let result = pipeline.run(SAMPLE_TEXT).unwrap();

    assert!(result.statistics.top_nouns.len() <= 2);
    for entry in &result.dictionary {
        assert!(entry.examples.len() <= 1);
    }
    for entries in result.collocations.noun_adj.values() {
        for entry in entries {
            assert!(entry.examples.len() <= 1);
        }
    }
}

#[test]
fn test_batch_analysis_matches_individual_runs() {
    let pipeline = AnalysisPipeline::default();
    let texts = ["Старый дом стоял.", "Белый снег лежал."];

    let batch = pipeline.analyze_batch(&texts);
    assert_eq!(batch.len(), 2);

    for (text, batched) in texts.iter().zip(&batch) {
        let single = pipeline.run(text).unwrap();
        let batched = batched.as_ref().unwrap();
        assert_eq!(single.meta.token_count, batched.meta.token_count);
        assert_eq!(
            single.collocations.unique_pairs,
            batched.collocations.unique_pairs
        );
    }
}

#[test]
fn test_query_interface_via_custom_analyzer() {
    // A fixed-output analyzer standing in for a dictionary-backed engine.
    struct Canned;

    impl MorphAnalyzer for Canned {
        fn analyze(&self, _text: &str) -> Result<Document> {
            let tokens = vec![
                Token::with_dependency("зелёная", "зелёный", PosTag::Adjective, 0, "amod", 1),
                Token::new("трава", "трава", PosTag::Noun, 1),
            ];
            Ok(Document::new(
                vec![Sentence::new("зелёная трава", 0, tokens)],
                1,
            ))
        }
    }

    let pipeline =
        AnalysisPipeline::with_analyzer(Canned, AnalyzerConfig::default()).unwrap();
    let result = pipeline.run("ignored").unwrap();

    assert_eq!(result.meta.skipped_sentences, 1);
    let QueryOutcome::Known(adjectives) = result.collocations.query("трава", 20) else {
        panic!("«трава» should be known");
    };
    assert_eq!(adjectives[0].adjective, "зелёный");
    assert!(adjectives[0].methods.dependency);
}
