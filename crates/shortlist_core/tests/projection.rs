use pretty_assertions::assert_eq;
use shortlist_core::{
    capitalize_words, project_contact, project_detail, project_row, project_single, round_score,
    single_remainder_note, AnalysisResult, ContactInfo, ContactLine, ContactView, ScoreTier,
    ScoreView, SingleAnalysis, SkillPreview, SkillsAnalysis,
};

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn result(filename: &str, score: f64) -> AnalysisResult {
    AnalysisResult {
        filename: filename.to_string(),
        match_score: score,
        ..AnalysisResult::default()
    }
}

#[test]
fn tier_boundaries_are_inclusive() {
    assert_eq!(ScoreTier::classify(100), ScoreTier::Excellent);
    assert_eq!(ScoreTier::classify(85), ScoreTier::Excellent);
    assert_eq!(ScoreTier::classify(84), ScoreTier::Good);
    assert_eq!(ScoreTier::classify(70), ScoreTier::Good);
    assert_eq!(ScoreTier::classify(69), ScoreTier::Fair);
    assert_eq!(ScoreTier::classify(50), ScoreTier::Fair);
    assert_eq!(ScoreTier::classify(49), ScoreTier::Poor);
    assert_eq!(ScoreTier::classify(-3), ScoreTier::Poor);
}

#[test]
fn tiers_use_the_rounded_score() {
    assert_eq!(ScoreView::from_raw(84.999).tier, ScoreTier::Excellent);
    assert_eq!(ScoreView::from_raw(84.5).value, 85);
    assert_eq!(ScoreView::from_raw(84.49).tier, ScoreTier::Good);
    assert_eq!(ScoreView::from_raw(69.5).tier, ScoreTier::Good);
    assert_eq!(ScoreView::from_raw(49.5).tier, ScoreTier::Fair);
    assert_eq!(ScoreView::from_raw(49.4).tier, ScoreTier::Poor);
}

#[test]
fn rounding_sends_halves_up() {
    assert_eq!(round_score(87.456), 87);
    assert_eq!(round_score(2.5), 3);
    assert_eq!(round_score(-0.5), 0);
    assert_eq!(round_score(-1.5), -1);
    assert_eq!(round_score(f64::NAN), 0);
}

#[test]
fn score_view_formats_as_percent_and_clamps_bar() {
    let view = ScoreView::from_raw(112.2);
    assert_eq!(view.to_string(), "112%");
    assert_eq!(view.bar_percent(), 100);
    assert_eq!(ScoreView::from_raw(-4.0).bar_percent(), 0);
}

#[test]
fn preview_caps_at_three_with_exact_remainder() {
    for n in 0..8 {
        let list: Vec<String> = (0..n).map(|i| format!("skill {i}")).collect();
        let preview = SkillPreview::row(&list);
        assert_eq!(preview.shown().len(), n.min(3));
        assert_eq!(preview.remaining(), n.saturating_sub(3));
        let text = preview.to_string();
        if n == 0 {
            assert_eq!(text, "None");
        } else if n > 3 {
            assert!(text.ends_with(&format!(" +{} more", n - 3)), "{text}");
        } else {
            assert!(!text.contains("more"), "{text}");
        }
    }
}

#[test]
fn preview_keeps_stored_order_and_capitalizes() {
    let preview = SkillPreview::row(&skills(&["machine learning", "SQL", "aws", "docker", "git"]));
    assert_eq!(
        preview,
        SkillPreview::Shown {
            skills: skills(&["Machine Learning", "Sql", "Aws"]),
            remaining: 2,
        }
    );
    assert_eq!(preview.to_string(), "Machine Learning, Sql, Aws +2 more");
}

#[test]
fn capitalization_rules() {
    assert_eq!(capitalize_words("node.JS developer"), "Node.js Developer");
    assert_eq!(capitalize_words("  two  spaces "), "  Two  Spaces ");
    assert_eq!(capitalize_words(""), "");
    assert_eq!(capitalize_words("élan VITAL"), "Élan Vital");
}

#[test]
fn capitalization_is_idempotent() {
    let samples = [
        "python",
        "MACHINE learning",
        "c++ and c#",
        "straße ßig",
        "ǆemal İstanbul",
        "  mixed\tTabs here ",
        "1password x-ray",
    ];
    for sample in samples {
        let once = capitalize_words(sample);
        assert_eq!(capitalize_words(&once), once, "input {sample:?}");
    }
}

#[test]
fn contact_lines_and_placeholder() {
    assert_eq!(project_contact(None), ContactView::NotAvailable);
    assert_eq!(
        project_contact(Some(&ContactInfo::default())),
        ContactView::NotAvailable
    );
    assert_eq!(
        project_contact(Some(&ContactInfo {
            email: Some(String::new()),
            phone: None,
            ..ContactInfo::default()
        })),
        ContactView::NotAvailable
    );
    assert_eq!(
        project_contact(Some(&ContactInfo {
            email: Some("a@b.io".to_string()),
            phone: Some("555-0100".to_string()),
            ..ContactInfo::default()
        })),
        ContactView::Lines(vec![
            ContactLine::Email("a@b.io".to_string()),
            ContactLine::Phone("555-0100".to_string()),
        ])
    );
    assert_eq!(
        project_contact(Some(&ContactInfo {
            email: None,
            phone: Some("555-0100".to_string()),
            ..ContactInfo::default()
        })),
        ContactView::Lines(vec![ContactLine::Phone("555-0100".to_string())])
    );
}

#[test]
fn row_rank_is_positional() {
    // Out-of-order scores keep their positions; rank never follows score.
    let row = project_row(2, &result("low-first.pdf", 99.0));
    assert_eq!(row.rank, 3);
    assert_eq!(row.index, 2);
    assert_eq!(row.score.value, 99);
    assert_eq!(row.matched, SkillPreview::None);
    assert_eq!(row.missing, SkillPreview::None);
    assert_eq!(row.contact, ContactView::NotAvailable);
}

#[test]
fn detail_lists_every_skill() {
    let mut entry = result("jane.pdf", 72.6);
    entry.common_skills = skills(&["python", "sql", "aws", "docker", "react"]);
    entry.missing_skills = skills(&["KUBERNETES"]);
    entry.suggestions = "Learn kubernetes.".to_string();

    let detail = project_detail(0, &entry);
    assert_eq!(detail.title, "Detailed Analysis: jane.pdf");
    assert_eq!(detail.score.value, 73);
    assert_eq!(detail.score.tier, ScoreTier::Good);
    assert_eq!(
        detail.matched,
        skills(&["Python", "Sql", "Aws", "Docker", "React"])
    );
    assert_eq!(detail.missing, skills(&["Kubernetes"]));
    assert_eq!(detail.suggestions, "Learn kubernetes.");
}

#[test]
fn single_result_caps_lists_at_ten_and_hides_empty_contact() {
    let analysis = SingleAnalysis {
        match_score: 55.2,
        skills_analysis: SkillsAnalysis {
            common_skills: (0..12).map(|i| format!("skill {i}")).collect(),
            missing_skills: Vec::new(),
        },
        suggestions: "More detail".to_string(),
        contact_info: Some(ContactInfo::default()),
        visualization: Some("iVBORw0KGgo=".to_string()),
    };

    let view = project_single(&analysis);
    assert_eq!(view.score.tier, ScoreTier::Fair);
    assert_eq!(view.matched.shown().len(), 10);
    assert_eq!(single_remainder_note(&view.matched).as_deref(), Some("and 2 more..."));
    assert_eq!(view.missing, SkillPreview::None);
    assert_eq!(single_remainder_note(&view.missing), None);
    assert_eq!(view.contact, None);
    assert_eq!(
        view.visualization.as_deref(),
        Some("data:image/png;base64,iVBORw0KGgo=")
    );
}
