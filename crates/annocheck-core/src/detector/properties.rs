//! Property tests for the detector.

use proptest::prelude::*;

use super::*;
use crate::table::{CellValue, TableBuilder};

const SUMMARY: &str = "待测摘要文本";

fn quiet() -> Detector {
    Detector::new(CheckConfig::default().with_echo(false))
}

/// A sentence body without delimiters, commas or surrounding whitespace.
fn arb_sentence() -> impl Strategy<Value = String> {
    "[a-z今天气好我们玩]{1,6}"
}

fn arb_text(max_sentences: usize) -> impl Strategy<Value = (Vec<String>, bool)> {
    (prop::collection::vec(arb_sentence(), 1..=max_sentences), any::<bool>())
}

fn join((sentences, trailing): &(Vec<String>, bool)) -> String {
    let mut text = sentences.join("。");
    if *trailing {
        text.push('。');
    }
    text
}

fn fluency_table(rows: &[(Option<String>, CellValue)]) -> Table {
    rows.iter()
        .fold(TableBuilder::new([SUMMARY, "Fluency"]), |builder, (summary, fluency)| {
            builder.row([CellValue::from(summary.clone()), fluency.clone()])
        })
        .build()
}

proptest! {
    #[test]
    fn prop_trailing_delimiter_does_not_add_sentence(text in arb_text(8)) {
        let (sentences, _) = &text;
        prop_assert_eq!(count_sentences(&join(&text), '。'), sentences.len());
    }

    #[test]
    fn prop_single_sentence_integer_rows_are_clean(
        rows in prop::collection::vec((arb_sentence(), any::<bool>(), 1i64..=5), 1..20)
    ) {
        let rows: Vec<_> = rows
            .into_iter()
            .map(|(sentence, trailing, score)| {
                let text = if trailing { format!("{}。", sentence) } else { sentence };
                (Some(text), CellValue::Int(score))
            })
            .collect();

        let errors = quiet().detect_for(&fluency_table(&rows), Criterion::Fluency).unwrap();
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn prop_forward_fill_carries_last_reference(
        first in arb_text(4),
        gap in 1usize..6,
    ) {
        let reference = join(&first);
        let mut rows = vec![(Some(reference.clone()), CellValue::text("x"))];
        rows.extend((0..gap).map(|_| (None, CellValue::text("x"))));

        let errors = quiet().detect_for(&fluency_table(&rows), Criterion::Fluency).unwrap();

        // One rating per row, so every row fails unless the text is one sentence.
        if first.0.len() == 1 {
            prop_assert!(errors.is_empty());
        } else {
            prop_assert_eq!(errors.len(), gap + 1);
            for (i, error) in errors.iter().enumerate() {
                prop_assert_eq!(error.row, i);
                prop_assert_eq!(&error.reference, &reference);
            }
        }
    }

    #[test]
    fn prop_header_names_never_reported(
        text in arb_text(6),
        name in prop::sample::select(vec!["Informativeness", "Non-redundancy", "Fluency"]),
        pad in " {0,3}",
    ) {
        let cell = CellValue::text(format!("{}{}{}", pad, name, pad));
        let rows = vec![(Some(join(&text)), cell)];

        let errors = quiet().detect_for(&fluency_table(&rows), Criterion::Fluency).unwrap();
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn prop_full_width_commas_count_like_commas(
        scores in prop::collection::vec((1u8..=5, any::<bool>()), 1..8)
    ) {
        let mut half = String::new();
        let mut mixed = String::new();
        for (i, (score, full_width)) in scores.iter().enumerate() {
            if i > 0 {
                half.push(',');
                mixed.push(if *full_width { '，' } else { ',' });
            }
            half.push_str(&score.to_string());
            mixed.push_str(&score.to_string());
        }

        prop_assert_eq!(
            RatingCell::Ratings(half).count(),
            RatingCell::Ratings(mixed).count()
        );
    }

    #[test]
    fn prop_matching_rating_lists_are_clean(text in arb_text(8)) {
        let ratings = vec!["4"; text.0.len()].join("，");
        let rows = vec![(Some(join(&text)), CellValue::text(ratings))];

        let errors = quiet().detect_for(&fluency_table(&rows), Criterion::Fluency).unwrap();
        prop_assert!(errors.is_empty());
    }
}
