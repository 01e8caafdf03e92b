//! Prompt templates for the role-play and rubric calls

use crate::practice::settings::{FeedbackTiming, SessionConfig};

/// Templates for generating prompts sent to the text-generation service
pub struct CoachPromptTemplate;

impl CoachPromptTemplate {
    /// System prompt for the client's opening line
    pub fn client_opening_system(config: &SessionConfig) -> String {
        format!(
            r#"You are a health coaching client participating in a role-play session.

Theme: {}
Difficulty Level: {}

Respond as a client who:
- Has a realistic health-related challenge
- Shows some motivation but also some resistance
- Uses natural, conversational language
- Provides enough detail for a coach to work with
- Doesn't immediately solve their own problem

Keep your response to 2-3 sentences maximum. Be authentic and relatable."#,
            config.theme.label(),
            config.difficulty
        )
    }

    /// User message that asks for the opening line
    pub fn client_opening_request() -> &'static str {
        "Please introduce yourself as a client with a health coaching challenge."
    }

    /// System prompt for every later client reply.
    ///
    /// The conversation itself is sent as role-tagged messages after this
    /// instruction: coach lines as `user`, client lines as `assistant`.
    pub fn client_reply_system(config: &SessionConfig) -> String {
        format!(
            r#"You are a health coaching client in a role-play session.

Theme: {}
Difficulty Level: {}

Guidelines:
- Respond naturally to the coach's latest question, staying consistent with everything said so far
- Show some progress or insight, but also some challenges
- Keep responses to 1-3 sentences
- Be authentic and conversational
- Don't immediately solve your own problem
- Show some resistance or uncertainty at times

Respond as the client."#,
            config.theme.label(),
            config.difficulty
        )
    }

    /// System prompt for rubric scoring of one coach question
    pub fn rubric_system() -> &'static str {
        r#"You are an expert in Solution-Focused Brief Therapy (SFBT) coaching. Analyze the coach's question and provide feedback on whether it follows SFBT principles.

SFBT "Above the Line" Principles:
- Focus on solutions, not problems
- Ask about what's working
- Explore exceptions to the problem
- Ask about the preferred future
- Focus on strengths and resources
- Use scaling questions
- Ask "what else?" to expand possibilities

"Below the Line" Patterns to Avoid:
- Focusing on problems and causes
- Asking "why" questions
- Exploring feelings extensively
- Giving advice or solutions
- Diagnosing or labeling

Rate the question from 0-10 (10 being excellent SFBT practice) and provide specific feedback."#
    }

    /// User message carrying the question to score
    pub fn rubric_request(question: &str) -> String {
        format!("Analyze this coach question: \"{}\"", question)
    }

    /// Setup text a trainee can paste into a general-purpose chat assistant
    /// to run the same exercise by hand
    pub fn session_setup(config: &SessionConfig) -> String {
        let feedback_instruction = match config.feedback_timing {
            FeedbackTiming::Immediate => {
                "After each of my questions, give me brief feedback: Was that above or below the line? How could I make it more effective?"
            }
            FeedbackTiming::Deferred => {
                "At the end of our conversation, give me brief feedback: Was that above or below the line? How could I make it more effective?"
            }
        };

        format!(
            "I am a student health coach practicing Solution-Focused coaching using the Dialogic Orientation Quadrant (DOQ). Please act as my client and choose an issue related to {} for me to help you with. Respond with a mix of problem- and resource-talk each time you speak so I can practice \"staying above the line.\" {}",
            config.theme.label(),
            feedback_instruction
        )
    }
}

/// Guideline card for the Dialogic Orientation Quadrant
pub struct DoqGuidelines;

impl DoqGuidelines {
    pub fn above_line() -> &'static [&'static str] {
        &[
            "Ask what is already working",
            "Explore exceptions: times the problem was smaller or absent",
            "Invite a description of the preferred future",
            "Notice strengths and resources",
            "Use scaling questions to measure progress",
            "Ask \"what else?\" to widen possibilities",
        ]
    }

    pub fn below_line() -> &'static [&'static str] {
        &[
            "Digging into problems and their causes",
            "Asking \"why\" questions",
            "Exploring feelings at length",
            "Giving advice or ready-made solutions",
            "Diagnosing or labeling the client",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::settings::{Difficulty, Theme};

    fn config(feedback_timing: FeedbackTiming) -> SessionConfig {
        SessionConfig::new(Theme::Exercise, Difficulty::Advanced, feedback_timing)
    }

    #[test]
    fn test_client_prompts_carry_theme_and_difficulty() {
        let config = config(FeedbackTiming::Immediate);
        for prompt in [
            CoachPromptTemplate::client_opening_system(&config),
            CoachPromptTemplate::client_reply_system(&config),
        ] {
            assert!(prompt.contains("Physical Activity"));
            assert!(prompt.contains("advanced"));
            assert!(prompt.contains("immediately solve"));
        }
    }

    #[test]
    fn test_rubric_request_quotes_question() {
        let prompt = CoachPromptTemplate::rubric_request("What else?");
        assert_eq!(prompt, "Analyze this coach question: \"What else?\"");
    }

    #[test]
    fn test_session_setup_feedback_instruction() {
        let immediate = CoachPromptTemplate::session_setup(&config(FeedbackTiming::Immediate));
        assert!(immediate.contains("After each of my questions"));
        assert!(immediate.contains("Physical Activity"));

        let deferred = CoachPromptTemplate::session_setup(&config(FeedbackTiming::Deferred));
        assert!(deferred.contains("At the end of our conversation"));
    }

    #[test]
    fn test_guidelines_are_not_empty() {
        assert!(!DoqGuidelines::above_line().is_empty());
        assert!(!DoqGuidelines::below_line().is_empty());
    }
}
