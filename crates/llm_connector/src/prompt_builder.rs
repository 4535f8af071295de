// crates/llm_connector/src/prompt_builder.rs

/// Renders the three fixed prompt templates. User-supplied text is embedded
/// verbatim; the JSON contract is spelled out in the instructions so the
/// gateway can parse the completion directly.
#[derive(Debug, Default, Clone)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build_transfer_function_prompt(&self, description: &str) -> String {
        format!(
            "Analyze the description of the dynamic system and return ONLY its transfer function.\n\
             System description: \"{description}\"\n\
             Your answer MUST be a valid JSON object containing a single key: \"transferFunction\".\n\
             Example answer: {{\"transferFunction\": \"G(s) = 1 / (RCs + 1)\"}}",
        )
    }

    pub fn build_full_analysis_prompt(&self, description: &str) -> String {
        format!(
            "Your task is to analyze the description of a control system and derive its transfer function.\n\
             System description: \"{description}\"\n\
             Format instructions: your answer MUST be a valid JSON object containing the keys: \
             \"appliedLaw\", \"differentialEquation\", \"laplaceSteps\", \"transferFunction\", \"resultAnalysis\".",
        )
    }

    pub fn build_validation_prompt(&self, description: &str, user_transfer_function: &str) -> String {
        format!(
            "Your task is to act as a control engineering tutor. Judge whether the student's answer is correct.\n\
             System description: \"{description}\"\n\
             Student transfer function: \"{user_transfer_function}\"\n\
             Format instructions: your answer MUST be a valid JSON object containing the keys: \
             \"isCorrect\" (boolean), \"feedback\" (string) and \"correctSolution\" (string).",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTION: &str =
        "A system with a mass 'M' and a spring 'K'. Find G(s) = X(s)/F(s). Symbols: % & \\n";

    #[test]
    fn transfer_function_prompt_embeds_description_verbatim() {
        let prompt = PromptBuilder::new().build_transfer_function_prompt(DESCRIPTION);
        assert!(prompt.contains(DESCRIPTION));
        assert!(prompt.contains("\"transferFunction\""));
    }

    #[test]
    fn full_analysis_prompt_names_all_five_keys() {
        let prompt = PromptBuilder::new().build_full_analysis_prompt(DESCRIPTION);
        assert!(prompt.contains(DESCRIPTION));
        for key in [
            "appliedLaw",
            "differentialEquation",
            "laplaceSteps",
            "transferFunction",
            "resultAnalysis",
        ] {
            assert!(prompt.contains(key), "missing key {key}");
        }
    }

    #[test]
    fn validation_prompt_embeds_both_inputs_verbatim() {
        let answer = "G(s) = R / (RCs + 1)";
        let prompt = PromptBuilder::new().build_validation_prompt(DESCRIPTION, answer);
        assert!(prompt.contains(DESCRIPTION));
        assert!(prompt.contains(answer));
        assert!(prompt.contains("isCorrect"));
        assert!(prompt.contains("correctSolution"));
    }
}
