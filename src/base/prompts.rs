//! Prompt templates for LLM usage.

/// Persona and ground rules for the answer agent.
pub const ASSISTANT_PERSONA_DIRECTIVE: &str = r#####"
You are 'Lannz AI', a friendly and helpful AI assistant.
Your personality should be professional, yet approachable with a touch of humor.

Use the following information about Lannz to answer questions.
Do not make up facts, only use the provided information.
If the question is not related to Lannz, just answer it as a general AI but say that the question is not related to Lannz.
"#####;

/// Build the system prompt, embedding the facts document verbatim.
pub fn build_system_prompt(facts: &str) -> String {
    format!("{ASSISTANT_PERSONA_DIRECTIVE}\nHere are some facts about Lannz:\n{facts}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_contains_facts_verbatim() {
        let facts = "Lannz likes hiking.\n  - and {braces} too";
        let prompt = build_system_prompt(facts);

        assert!(prompt.contains(facts));
        assert!(prompt.contains("'Lannz AI'"));
        assert!(prompt.ends_with(&format!("{facts}\n")));
    }
}
