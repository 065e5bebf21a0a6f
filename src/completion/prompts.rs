//! CPRS prompt templates
//!
//! The prompts instruct the completion service to answer as strict JSON
//! objects matching the payload types in [`super::types`]. Submitted text
//! is truncated to a fixed character budget before it is embedded.

use crate::content::ExamTaxonomy;

/// Maximum characters of submitted text embedded in the extraction prompt
pub const PROMPT_CHAR_BUDGET: usize = 16000;

/// Token ceiling for concept-extraction completions
pub const EXTRACTION_MAX_TOKENS: u32 = 2000;

/// Token ceiling for quiz-generation completions
pub const QUIZ_MAX_TOKENS: u32 = 3000;

/// System prompt for concept extraction
pub const EXTRACTION_SYSTEM_PROMPT: &str = "You are an Azure certification expert who provides accurate, authoritative Azure facts for the AZ-104 exam. Always be precise and factual.";

/// System prompt for quiz generation
pub const QUIZ_SYSTEM_PROMPT: &str = "You are an Azure certification expert. Generate accurate, exam-ready content following the CPRS methodology. All Azure facts must be authoritative and current.";

/// Truncate text to the prompt character budget
fn truncate_to_budget(text: &str, budget: usize) -> String {
    text.chars().take(budget).collect()
}

/// Build the concept-extraction user prompt
pub fn concept_extraction_prompt(text: &str, taxonomy: &ExamTaxonomy) -> String {
    format!(
        r#"You are an Azure certification expert using the CPRS (Concept-Pathway Reinforcement System) methodology.

Analyze the following quiz review content where the student got questions wrong.

For each concept mentioned, apply the CPRS framework:
1. FOUNDATION: What problem does this concept solve?
2. DEFINITION: Precise one-sentence definition
3. DIFFERENTIATION: How is it different from commonly confused services?
4. WHY WRONG: Why the student's answer was incorrect
5. COMPRESSION: One-sentence memory hook for instant recall
6. The AZ-104 exam objective it relates to, chosen from this outline:
{outline}
Format your response as JSON with this structure:
{{
    "concepts": [
        {{
            "name": "concept name",
            "foundation": "the root purpose/problem it solves",
            "definition": "precise one-sentence definition",
            "differentiation": "how it differs from similar services",
            "correct_fact": "the accurate Azure fact",
            "why_wrong": "brief explanation of the misconception",
            "compression": "one-sentence memory hook",
            "objective": "X.X"
        }}
    ],
    "summary": "A 2-3 sentence NotebookLM-ready summary using CPRS structure focusing on the weak areas"
}}

Quiz review content:
{content}"#,
        outline = taxonomy.objective_outline(),
        content = truncate_to_budget(text, PROMPT_CHAR_BUDGET),
    )
}

/// Build the quiz-generation user prompt
pub fn quiz_prompt(concept: &str, taxonomy: &ExamTaxonomy) -> String {
    format!(
        r#"You are an Azure certification expert using the CPRS (Concept-Pathway Reinforcement System) methodology.

Generate 6 SEPARATE multiple-choice questions (MCQ) for: "{concept}"

Each question MUST have 4 options (A, B, C, D) and one correct answer.

QUESTION 1 - FOUNDATION (Root Purpose):
Test understanding of what problem {concept} solves.
Example angle: "Which scenario best describes the primary use case for {concept}?"

QUESTION 2 - DEFINITION (Textbook Clarity):
Test knowing the precise definition of {concept}.
Example angle: "Which statement correctly defines {concept}?"

QUESTION 3 - DIFFERENTIATION (Compare Similar Services):
Test distinguishing {concept} from commonly confused Azure services.
Example angle: "A company needs [scenario]. Which service should they use: {concept} or [similar service]?"

QUESTION 4 - SCENARIO (Exam-Style Application):
A realistic AZ-104 exam question applying {concept} to a business scenario.
Include subtle misdirection like Microsoft uses. All options must sound plausible.

QUESTION 5 - ANTI-CONFUSION (Trap Recognition):
Test recognizing why wrong answers are wrong.
Example angle: "Which statement about {concept} is FALSE?" or "Which scenario would NOT be appropriate for {concept}?"

QUESTION 6 - COMPRESSION (Memory Hook):
Test the core takeaway that summarizes {concept}.
Example angle: "Which one-sentence summary best captures the essence of {concept}?"

The "objective" field must be the best-matching AZ-104 objective code from this outline:
{outline}
Format your response as JSON with ALL 6 questions as MCQs:
{{
    "concept": "{concept}",
    "questions": [
        {{
            "type": "Foundation",
            "question": "the MCQ question text",
            "options": {{"A": "option A", "B": "option B", "C": "option C", "D": "option D"}},
            "correct": "A/B/C/D",
            "explanation": "why this is correct"
        }},
        {{
            "type": "Definition",
            "question": "the MCQ question text",
            "options": {{"A": "option A", "B": "option B", "C": "option C", "D": "option D"}},
            "correct": "A/B/C/D",
            "explanation": "why this is correct"
        }},
        {{
            "type": "Differentiation",
            "question": "the MCQ question text",
            "options": {{"A": "option A", "B": "option B", "C": "option C", "D": "option D"}},
            "correct": "A/B/C/D",
            "explanation": "why this is correct"
        }},
        {{
            "type": "Scenario",
            "question": "the MCQ question text",
            "options": {{"A": "option A", "B": "option B", "C": "option C", "D": "option D"}},
            "correct": "A/B/C/D",
            "explanation": "why this is correct"
        }},
        {{
            "type": "Anti-Confusion",
            "question": "the MCQ question text",
            "options": {{"A": "option A", "B": "option B", "C": "option C", "D": "option D"}},
            "correct": "A/B/C/D",
            "explanation": "why this is correct"
        }},
        {{
            "type": "Compression",
            "question": "the MCQ question text",
            "options": {{"A": "option A", "B": "option B", "C": "option C", "D": "option D"}},
            "correct": "A/B/C/D",
            "explanation": "why this is correct"
        }}
    ],
    "objective": "X.X (the AZ-104 exam objective code)"
}}"#,
        concept = concept,
        outline = taxonomy.objective_outline(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_prompt_truncates_to_budget() {
        let taxonomy = ExamTaxonomy::builtin();
        let marker = "UNIQUE-TAIL-MARKER";
        let text = format!("{}{}", "a".repeat(PROMPT_CHAR_BUDGET), marker);
        let prompt = concept_extraction_prompt(&text, &taxonomy);
        assert!(!prompt.contains(marker));

        let short = format!("short text {}", marker);
        let prompt = concept_extraction_prompt(&short, &taxonomy);
        assert!(prompt.contains(marker));
    }

    #[test]
    fn test_extraction_prompt_embeds_objective_outline() {
        let taxonomy = ExamTaxonomy::builtin();
        let prompt = concept_extraction_prompt("some quiz text", &taxonomy);
        assert!(prompt.contains("1.2 Manage access to Azure resources"));
        assert!(prompt.contains("\"summary\""));
    }

    #[test]
    fn test_quiz_prompt_names_all_six_question_types() {
        let taxonomy = ExamTaxonomy::builtin();
        let prompt = quiz_prompt("VNet Peering", &taxonomy);
        for question_type in [
            "Foundation",
            "Definition",
            "Differentiation",
            "Scenario",
            "Anti-Confusion",
            "Compression",
        ] {
            assert!(prompt.contains(question_type), "missing {}", question_type);
        }
        assert!(prompt.contains("\"VNet Peering\""));
    }
}
