//! Question-export service: validates input, lays out the document and emits
//! the finished PDF bytes.
//!
//! Bytes are fully materialized before anything is delivered, so a failed
//! export can never leave a partially written download behind.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::export::font_metrics::{FontStyle, PageSetup};
use crate::export::layout::{DocumentBuilder, LayoutDocument};
use crate::export::pdf_writer;
use crate::export::theme::{
    score_color, CategoryLabel, CategorySet, BLACK, PRIMARY, QUESTION_TEXT, SECONDARY,
    SECTION_LABEL,
};
use crate::models::interview::{CandidateInfo, EvaluationCriteria, InterviewQuestion};

/// Questions keyed by category label; order within a vector is render order.
/// Which labels render, and in what order, comes from the active
/// [`CategorySet`], never from map iteration.
pub type QuestionsByCategory = HashMap<String, Vec<InterviewQuestion>>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid export input: {0}")]
    InvalidInput(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// A finished export: the deterministic filename plus the PDF bytes.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportedDocument {
    /// Writes the document into `dir` under its own filename.
    pub fn save_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Groups a flat question list by the active taxonomy, preserving input
/// order within each label. Questions with labels outside the taxonomy are
/// not exported.
pub fn group_questions(
    questions: &[InterviewQuestion],
    categories: &CategorySet,
) -> QuestionsByCategory {
    categories
        .labels()
        .iter()
        .map(|label| {
            let in_category: Vec<InterviewQuestion> = questions
                .iter()
                .filter(|q| q.category == label.name)
                .cloned()
                .collect();
            (label.name.clone(), in_category)
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Service
// ────────────────────────────────────────────────────────────────────────────

/// Renders candidate info + grouped questions into a paginated PDF.
///
/// Holds only immutable configuration; every export builds and discards its
/// own [`DocumentBuilder`], so concurrent exports are independent.
pub struct PdfExportService {
    setup: PageSetup,
    categories: CategorySet,
}

impl PdfExportService {
    pub fn new(setup: PageSetup, categories: CategorySet) -> Self {
        Self { setup, categories }
    }

    /// A4 geometry with the five-way taxonomy.
    pub fn with_defaults() -> Self {
        Self::new(
            crate::export::font_metrics::default_page_setup(),
            CategorySet::five_way(),
        )
    }

    /// Deterministic download filename for a candidate.
    pub fn file_name(candidate: &CandidateInfo) -> String {
        format!(
            "Interview_Questions_{}_{}.pdf",
            candidate.title, candidate.seniority_level
        )
    }

    /// Validates the input, lays out every section and returns the finished
    /// document. Any failure aborts the export; nothing is emitted.
    pub fn export_questions(
        &self,
        candidate: &CandidateInfo,
        by_category: &QuestionsByCategory,
    ) -> Result<ExportedDocument, ExportError> {
        let layout = self.layout_questions(candidate, by_category)?;
        let bytes = pdf_writer::render(&layout, "Interview Questions")?;
        let file_name = Self::file_name(candidate);
        info!(
            file_name = %file_name,
            pages = layout.pages.len(),
            "interview questions exported"
        );
        Ok(ExportedDocument { file_name, bytes })
    }

    /// The pure layout stage, separated from PDF emission so tests can
    /// inspect placement, colors and pagination directly.
    pub fn layout_questions(
        &self,
        candidate: &CandidateInfo,
        by_category: &QuestionsByCategory,
    ) -> Result<LayoutDocument, ExportError> {
        validate(candidate, by_category, &self.categories)?;

        let mut doc = DocumentBuilder::new(self.setup.clone());
        self.add_header(&mut doc, candidate);

        for label in self.categories.labels() {
            let questions = by_category
                .get(&label.name)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            self.add_category_section(&mut doc, label, questions);
        }

        Ok(doc.finish())
    }

    fn add_header(&self, doc: &mut DocumentBuilder, candidate: &CandidateInfo) {
        doc.add_text(
            &format!(
                "Interview Questions for {} ({})",
                candidate.title, candidate.seniority_level
            ),
            16.0,
            FontStyle::Bold,
            PRIMARY,
        );
        doc.advance(3.0);

        if let Some(simulator) = candidate.simulator() {
            doc.add_text(
                &format!("{simulator} Style"),
                12.0,
                FontStyle::Regular,
                SECONDARY,
            );
            doc.advance(5.0);
        } else {
            doc.advance(3.0);
        }
    }

    /// Renders one category: header with question count, then each question
    /// numbered from 1 in input order. Empty categories render nothing.
    fn add_category_section(
        &self,
        doc: &mut DocumentBuilder,
        label: &CategoryLabel,
        questions: &[InterviewQuestion],
    ) {
        if questions.is_empty() {
            return;
        }

        doc.add_text(
            &format!("{} Questions ({})", label.name, questions.len()),
            14.0,
            FontStyle::Bold,
            label.color,
        );
        doc.advance(2.0);

        for (index, question) in questions.iter().enumerate() {
            self.add_question(doc, question, index + 1);
        }

        doc.advance(5.0);
    }

    fn add_question(&self, doc: &mut DocumentBuilder, question: &InterviewQuestion, number: usize) {
        doc.add_text(
            &format!("Q{number}. {}", question.question),
            12.0,
            FontStyle::Bold,
            QUESTION_TEXT,
        );
        doc.advance(1.0);

        doc.add_text("Expected Answer:", 11.0, FontStyle::Bold, SECTION_LABEL);
        doc.add_text(&question.expected_answer, 10.0, FontStyle::Regular, BLACK);
        doc.advance(1.0);

        doc.add_text("Evaluation Criteria:", 11.0, FontStyle::Bold, SECTION_LABEL);
        match &question.evaluation_criteria {
            EvaluationCriteria::List(items) => {
                for item in items {
                    doc.add_text(&format!("• {item}"), 10.0, FontStyle::Regular, BLACK);
                }
            }
            EvaluationCriteria::Single(text) => {
                doc.add_text(text, 10.0, FontStyle::Regular, BLACK);
            }
        }
        doc.advance(1.0);

        if let Some(guide) = &question.scoring_guide {
            doc.add_text("Scoring Guide:", 11.0, FontStyle::Bold, SECTION_LABEL);
            for item in guide {
                doc.add_text(
                    &format!("{}/5 - {}", item.stars, item.description),
                    10.0,
                    FontStyle::Regular,
                    score_color(item.stars),
                );
            }
        }

        doc.advance(5.0);
    }
}

/// Fail-fast input validation: a missing required field aborts the export
/// with a clear error instead of producing a half-formed document.
fn validate(
    candidate: &CandidateInfo,
    by_category: &QuestionsByCategory,
    categories: &CategorySet,
) -> Result<(), ExportError> {
    if candidate.title.trim().is_empty() {
        return Err(ExportError::InvalidInput(
            "candidate title is required".to_string(),
        ));
    }
    if candidate.seniority_level.trim().is_empty() {
        return Err(ExportError::InvalidInput(
            "candidate seniority level is required".to_string(),
        ));
    }

    for label in categories.labels() {
        let Some(questions) = by_category.get(&label.name) else {
            continue;
        };
        for question in questions {
            if question.question.trim().is_empty() {
                return Err(ExportError::InvalidInput(format!(
                    "question '{}' has no question text",
                    question.id
                )));
            }
            if question.expected_answer.trim().is_empty() {
                return Err(ExportError::InvalidInput(format!(
                    "question '{}' has no expected answer",
                    question.id
                )));
            }
            if question.evaluation_criteria.is_missing() {
                return Err(ExportError::InvalidInput(format!(
                    "question '{}' has empty evaluation criteria",
                    question.id
                )));
            }
        }
    }

    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::font_metrics::default_page_setup;
    use crate::export::layout::PlacedText;
    use crate::export::theme::Rgb;
    use crate::models::interview::ScoringItem;
    use std::sync::Arc;

    fn candidate() -> CandidateInfo {
        CandidateInfo {
            name: String::new(),
            title: "Software Engineer".to_string(),
            seniority_level: "Senior".to_string(),
            interview_simulator: None,
        }
    }

    fn question(id: &str, category: &str, criteria: EvaluationCriteria) -> InterviewQuestion {
        InterviewQuestion {
            id: id.to_string(),
            question: format!("Question body for {id}?"),
            category: category.to_string(),
            expected_answer: "A thorough, structured answer.".to_string(),
            evaluation_criteria: criteria,
            scoring_guide: None,
        }
    }

    fn three_way_service() -> PdfExportService {
        PdfExportService::new(default_page_setup(), CategorySet::three_way())
    }

    fn all_texts(layout: &LayoutDocument) -> Vec<&PlacedText> {
        layout.pages.iter().flat_map(|p| p.texts.iter()).collect()
    }

    fn question_block_starts<'a>(texts: &[&'a PlacedText]) -> Vec<&'a PlacedText> {
        texts
            .iter()
            .filter(|t| {
                t.font_size_pt == 12.0
                    && t.style == FontStyle::Bold
                    && t.text.starts_with('Q')
                    && t.text.as_bytes().get(1).is_some_and(u8::is_ascii_digit)
            })
            .copied()
            .collect()
    }

    /// The end-to-end scenario from the product requirements: one Technical
    /// question with string criteria, an empty Behavioral category, one
    /// Screening question with list criteria and a full scoring guide.
    #[test]
    fn test_mixed_category_export_scenario() {
        let service = three_way_service();
        let mut by_category = QuestionsByCategory::new();
        by_category.insert(
            "Technical".to_string(),
            vec![question(
                "t1",
                "Technical",
                EvaluationCriteria::Single("Covers complexity tradeoffs.".to_string()),
            )],
        );
        by_category.insert("Behavioral".to_string(), vec![]);
        let mut screening = question(
            "s1",
            "Screening",
            EvaluationCriteria::List(vec![
                "Clear communication".to_string(),
                "Relevant experience".to_string(),
                "Realistic expectations".to_string(),
            ]),
        );
        screening.scoring_guide = Some(
            (1..=5)
                .map(|stars| ScoringItem {
                    stars,
                    description: format!("Level {stars} answer"),
                })
                .collect(),
        );
        by_category.insert("Screening".to_string(), vec![screening]);

        let exported = service
            .export_questions(&candidate(), &by_category)
            .expect("export should succeed");
        assert_eq!(
            exported.file_name,
            "Interview_Questions_Software Engineer_Senior.pdf"
        );
        assert!(!exported.bytes.is_empty());

        let layout = service
            .layout_questions(&candidate(), &by_category)
            .unwrap();
        let texts = all_texts(&layout);

        assert_eq!(question_block_starts(&texts).len(), 2);
        assert!(texts.iter().any(|t| t.text == "Technical Questions (1)"));
        assert!(texts.iter().any(|t| t.text == "Screening Questions (1)"));
        assert!(
            !texts.iter().any(|t| t.text.starts_with("Behavioral")),
            "empty category must render no header"
        );

        // Three bullet lines, in input order.
        let bullets: Vec<&str> = texts
            .iter()
            .filter(|t| t.text.starts_with("• "))
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(
            bullets,
            vec![
                "• Clear communication",
                "• Relevant experience",
                "• Realistic expectations"
            ]
        );

        // Scoring lines carry the fixed star→color table.
        for (stars, expected) in [
            (5u8, Rgb::new(16, 185, 129)),
            (4, Rgb::new(59, 130, 246)),
            (3, Rgb::new(245, 158, 11)),
            (2, Rgb::new(239, 68, 68)),
            (1, Rgb::new(153, 27, 27)),
        ] {
            let line = texts
                .iter()
                .find(|t| t.text.starts_with(&format!("{stars}/5 - ")))
                .unwrap_or_else(|| panic!("missing scoring line for {stars} stars"));
            assert_eq!(line.color, expected);
        }
    }

    #[test]
    fn test_question_count_matches_sum_of_categories() {
        let service = three_way_service();
        let mut by_category = QuestionsByCategory::new();
        by_category.insert(
            "Technical".to_string(),
            (0..3)
                .map(|i| {
                    question(
                        &format!("t{i}"),
                        "Technical",
                        EvaluationCriteria::Single("Depth".to_string()),
                    )
                })
                .collect(),
        );
        by_category.insert(
            "Behavioral".to_string(),
            (0..2)
                .map(|i| {
                    question(
                        &format!("b{i}"),
                        "Behavioral",
                        EvaluationCriteria::Single("Honesty".to_string()),
                    )
                })
                .collect(),
        );

        let layout = service
            .layout_questions(&candidate(), &by_category)
            .unwrap();
        let texts = all_texts(&layout);
        assert_eq!(question_block_starts(&texts).len(), 5);
    }

    #[test]
    fn test_question_order_is_stable_and_numbering_restarts_per_category() {
        let service = three_way_service();
        let mut by_category = QuestionsByCategory::new();
        by_category.insert(
            "Technical".to_string(),
            vec![
                question("t1", "Technical", EvaluationCriteria::Single("a".into())),
                question("t2", "Technical", EvaluationCriteria::Single("b".into())),
            ],
        );
        by_category.insert(
            "Screening".to_string(),
            vec![question(
                "s1",
                "Screening",
                EvaluationCriteria::Single("c".into()),
            )],
        );

        let layout = service
            .layout_questions(&candidate(), &by_category)
            .unwrap();
        let texts = all_texts(&layout);
        let starts: Vec<String> = question_block_starts(&texts)
            .iter()
            .map(|t| t.text.clone())
            .collect();
        assert_eq!(
            starts,
            vec![
                "Q1. Question body for t1?",
                "Q2. Question body for t2?",
                "Q1. Question body for s1?"
            ]
        );
    }

    #[test]
    fn test_simulator_line_renders_when_set() {
        let service = three_way_service();
        let mut info = candidate();
        info.interview_simulator = Some("Netflix".to_string());
        let layout = service
            .layout_questions(&info, &QuestionsByCategory::new())
            .unwrap();
        let texts = all_texts(&layout);
        let style_line = texts.iter().find(|t| t.text == "Netflix Style").unwrap();
        assert_eq!(style_line.color, SECONDARY);
        assert_eq!(style_line.font_size_pt, 12.0);
    }

    #[test]
    fn test_missing_title_fails_fast() {
        let service = three_way_service();
        let mut info = candidate();
        info.title = "  ".to_string();
        let err = service
            .export_questions(&info, &QuestionsByCategory::new())
            .unwrap_err();
        assert!(matches!(err, ExportError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_expected_answer_fails_fast() {
        let service = three_way_service();
        let mut q = question(
            "t1",
            "Technical",
            EvaluationCriteria::Single("depth".into()),
        );
        q.expected_answer = String::new();
        let mut by_category = QuestionsByCategory::new();
        by_category.insert("Technical".to_string(), vec![q]);
        let err = service
            .export_questions(&candidate(), &by_category)
            .unwrap_err();
        assert!(matches!(err, ExportError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_criteria_string_rejected_but_empty_list_renders_zero_bullets() {
        let service = three_way_service();

        let mut by_category = QuestionsByCategory::new();
        by_category.insert(
            "Technical".to_string(),
            vec![question(
                "t1",
                "Technical",
                EvaluationCriteria::Single("".to_string()),
            )],
        );
        assert!(matches!(
            service.layout_questions(&candidate(), &by_category),
            Err(ExportError::InvalidInput(_))
        ));

        let mut by_category = QuestionsByCategory::new();
        by_category.insert(
            "Technical".to_string(),
            vec![question("t1", "Technical", EvaluationCriteria::List(vec![]))],
        );
        let layout = service
            .layout_questions(&candidate(), &by_category)
            .unwrap();
        let texts = all_texts(&layout);
        assert!(texts.iter().any(|t| t.text == "Evaluation Criteria:"));
        assert!(!texts.iter().any(|t| t.text.starts_with("• ")));
    }

    #[test]
    fn test_export_is_deterministic_across_calls() {
        let service = three_way_service();
        let mut by_category = QuestionsByCategory::new();
        by_category.insert(
            "Technical".to_string(),
            vec![question(
                "t1",
                "Technical",
                EvaluationCriteria::Single("depth".into()),
            )],
        );

        let first = service
            .layout_questions(&candidate(), &by_category)
            .unwrap();
        let second = service
            .layout_questions(&candidate(), &by_category)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(
            PdfExportService::file_name(&candidate()),
            PdfExportService::file_name(&candidate())
        );
    }

    #[test]
    fn test_concurrent_exports_are_independent_and_identical() {
        let service = Arc::new(three_way_service());
        let mut by_category = QuestionsByCategory::new();
        by_category.insert(
            "Technical".to_string(),
            vec![question(
                "t1",
                "Technical",
                EvaluationCriteria::Single("depth".into()),
            )],
        );
        let by_category = Arc::new(by_category);

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let service = Arc::clone(&service);
                let by_category = Arc::clone(&by_category);
                std::thread::spawn(move || {
                    service
                        .layout_questions(&candidate(), &by_category)
                        .unwrap()
                })
            })
            .collect();
        let mut results: Vec<LayoutDocument> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        let a = results.pop().unwrap();
        let b = results.pop().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_defaults_renders_the_five_way_taxonomy() {
        let service = PdfExportService::with_defaults();
        let mut by_category = QuestionsByCategory::new();
        by_category.insert(
            "Core Knowledge".to_string(),
            vec![question(
                "ck1",
                "Core Knowledge",
                EvaluationCriteria::Single("depth".into()),
            )],
        );
        let layout = service
            .layout_questions(&candidate(), &by_category)
            .unwrap();
        let texts = all_texts(&layout);
        let header = texts
            .iter()
            .find(|t| t.text == "Core Knowledge Questions (1)")
            .expect("five-way header should render");
        assert_eq!(header.color, Rgb::new(37, 99, 235));
    }

    #[test]
    fn test_group_questions_preserves_order_and_drops_unknown_labels() {
        let questions = vec![
            question("t1", "Technical", EvaluationCriteria::Single("a".into())),
            question("x1", "Trivia", EvaluationCriteria::Single("b".into())),
            question("t2", "Technical", EvaluationCriteria::Single("c".into())),
        ];
        let grouped = group_questions(&questions, &CategorySet::three_way());
        let technical: Vec<&str> = grouped["Technical"].iter().map(|q| q.id.as_str()).collect();
        assert_eq!(technical, vec!["t1", "t2"]);
        assert!(grouped["Behavioral"].is_empty());
        assert!(!grouped.contains_key("Trivia"));
    }

    #[test]
    fn test_save_to_writes_the_named_file() {
        let service = three_way_service();
        let exported = service
            .export_questions(&candidate(), &QuestionsByCategory::new())
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = exported.save_to(dir.path()).unwrap();
        assert!(path.ends_with("Interview_Questions_Software Engineer_Senior.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), exported.bytes);
    }
}
