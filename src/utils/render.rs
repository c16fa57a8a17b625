use crate::domain::model::AnalysisResult;

/// Terminal rendering of the result view.
pub fn render_result(result: &AnalysisResult) -> String {
    let mut lines = Vec::new();
    lines.push(format!("📊 Match score: {}", result.match_score));

    if result.missing_skills.is_empty() {
        lines.push("🧩 Missing skills: none detected".to_string());
    } else {
        lines.push("🧩 Missing skills:".to_string());
        for skill in &result.missing_skills {
            lines.push(format!("   - {}", skill));
        }
    }

    lines.push("📝 Feedback:".to_string());
    lines.push(format!("   {}", result.feedback));

    lines.join("\n")
}

/// Plain-text export of the result, the CLI stand-in for the screen's
/// print/save action.
pub fn report(result: &AnalysisResult) -> String {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let skills = if result.missing_skills.is_empty() {
        "none".to_string()
    } else {
        result.missing_skills.join(", ")
    };

    format!(
        "Resume Match Report\nGenerated: {}\n\nMatch score: {}\nMissing skills: {}\n\nFeedback:\n{}\n",
        generated, result.match_score, skills, result.feedback
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_fixture() -> AnalysisResult {
        AnalysisResult {
            match_score: "45%".to_string(),
            missing_skills: vec!["Go".to_string(), "Kubernetes".to_string()],
            feedback: "Consider highlighting backend experience.".to_string(),
        }
    }

    #[test]
    fn renders_score_skills_and_feedback() {
        let text = render_result(&result_fixture());
        assert!(text.contains("Match score: 45%"));
        assert!(text.contains("- Go"));
        assert!(text.contains("- Kubernetes"));
        assert!(text.contains("Consider highlighting backend experience."));
    }

    #[test]
    fn renders_empty_skill_list_as_none() {
        let mut result = result_fixture();
        result.missing_skills.clear();
        let text = render_result(&result);
        assert!(text.contains("Missing skills: none detected"));
    }

    #[test]
    fn report_lists_skills_on_one_line() {
        let text = report(&result_fixture());
        assert!(text.starts_with("Resume Match Report"));
        assert!(text.contains("Missing skills: Go, Kubernetes"));
    }
}
