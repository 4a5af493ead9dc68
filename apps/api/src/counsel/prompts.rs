// Prompt templates for the five counselor panels.
// Builders are pure: the same inputs always give the same prompt, and every
// value appears verbatim in the output.

use crate::llm_client::prompts::fill_template;

/// Career guidance. Replace: {name}, {background}
pub const CAREER_PROMPT_TEMPLATE: &str = "You are an AI Career Counselor for {name}.
Based on their background and interests:
{background}

Suggest 3-5 suitable career paths with explanations. Include industry demand, salaries, and growth potential.";

/// Resume review. Replace: {resume_text}, {target_job}
pub const RESUME_FEEDBACK_PROMPT_TEMPLATE: &str = "You are a professional career coach and resume expert.
Review the following resume:

{resume_text}

Provide detailed feedback on its structure, grammar, ATS compatibility, and how it fits for the job role: {target_job}.
Suggest improvements and missing skills.";

/// Learning path. Replace: {skills_gap}
pub const LEARNING_PATH_PROMPT_TEMPLATE: &str = "You are an AI career advisor.
Based on the following missing skills: {skills_gap}, recommend a personalized learning path.
Include courses, certifications, and project ideas.";

/// Interview question. Replace: {role}
pub const INTERVIEW_QUESTION_PROMPT_TEMPLATE: &str = "You are an interviewer for the role of {role}.
Ask one technical and one behavioral question to the candidate.";

/// Interview answer evaluation. Replace: {role}, {answer}
pub const INTERVIEW_EVALUATION_PROMPT_TEMPLATE: &str = "As an interviewer for {role}, evaluate the following answer:

{answer}

Provide feedback on communication, technical knowledge, and confidence.";

pub fn career_prompt(name: &str, background: &str) -> String {
    fill_template(
        CAREER_PROMPT_TEMPLATE,
        &[("name", name), ("background", background)],
    )
}

pub fn resume_feedback_prompt(resume_text: &str, target_job: &str) -> String {
    fill_template(
        RESUME_FEEDBACK_PROMPT_TEMPLATE,
        &[("resume_text", resume_text), ("target_job", target_job)],
    )
}

pub fn learning_path_prompt(skills_gap: &str) -> String {
    fill_template(LEARNING_PATH_PROMPT_TEMPLATE, &[("skills_gap", skills_gap)])
}

pub fn interview_question_prompt(role: &str) -> String {
    fill_template(INTERVIEW_QUESTION_PROMPT_TEMPLATE, &[("role", role)])
}

pub fn interview_evaluation_prompt(role: &str, answer: &str) -> String {
    fill_template(
        INTERVIEW_EVALUATION_PROMPT_TEMPLATE,
        &[("role", role), ("answer", answer)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_prompt_contains_name_and_background() {
        let prompt = career_prompt("Asha", "I love data and Python");
        assert!(prompt.contains("Asha"));
        assert!(prompt.contains("I love data and Python"));
        assert!(prompt.contains("3-5 suitable career paths"));
    }

    #[test]
    fn test_builders_are_deterministic() {
        assert_eq!(
            resume_feedback_prompt("Ten years of Go", "SRE"),
            resume_feedback_prompt("Ten years of Go", "SRE")
        );
        assert_eq!(learning_path_prompt("Kubernetes"), learning_path_prompt("Kubernetes"));
    }

    #[test]
    fn test_resume_prompt_allows_empty_target_job() {
        let prompt = resume_feedback_prompt("Ten years of Go", "");
        assert!(prompt.contains("Ten years of Go"));
        assert!(prompt.contains("fits for the job role: ."));
        assert!(prompt.contains("ATS compatibility"));
    }

    #[test]
    fn test_learning_path_prompt_interpolates_gap() {
        let prompt = learning_path_prompt("SQL, statistics");
        assert!(prompt.contains("missing skills: SQL, statistics, recommend"));
        assert!(prompt.contains("certifications"));
    }

    #[test]
    fn test_interview_prompts_carry_role_and_answer() {
        let question = interview_question_prompt("Data Scientist");
        assert!(question.contains("for the role of Data Scientist."));
        assert!(question.contains("one technical and one behavioral question"));

        let evaluation = interview_evaluation_prompt("Data Scientist", "I would use cross-validation");
        assert!(evaluation.contains("As an interviewer for Data Scientist"));
        assert!(evaluation.contains("\n\nI would use cross-validation\n\n"));
    }

    #[test]
    fn test_placeholder_like_input_is_kept_verbatim() {
        let prompt = career_prompt("{background}", "plain");
        assert!(prompt.starts_with("You are an AI Career Counselor for {background}."));
    }
}
