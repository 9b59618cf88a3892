use serde_json::{Value, json};

pub const EXTRACTION_PROMPT: &str = "Extract a structured list of learning topics from this syllabus or study material. For each topic, provide a short title and a one-sentence brief. Ensure the output is a clean JSON array.";

/// Teaching prompt for one topic, with the titles of the whole syllabus as context.
#[must_use]
pub fn teaching_prompt(topic_title: &str, context: &str) -> String {
    format!(
        "Act as the world's best personal tutor. Your mission is to teach \"{topic_title}\" so simply that a 10-year-old could understand it, but so powerfully that an adult will never forget it.
Context from syllabus: {context}.

Please provide:
1. \"Explanation\": A narrative-driven explanation (Story Version/ELI5). Use a brilliant story or metaphor that makes the topic impossible to forget.
2. \"Analogies\": Two vivid, relatable analogies from daily life.
3. \"KeyConcepts\": Five essential points written as catchy, short rules.
4. \"Examples\": Two concrete real-world use cases.
5. \"Quiz\": A 3-question mastery check.

Tone: Warm, enthusiastic, and extremely clear. Avoid all academic jargon. Keep text punchy for fast generation. Respond strictly in JSON format matching the required schema."
    )
}

#[must_use]
pub fn topics_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "title": { "type": "STRING" },
                "description": { "type": "STRING" }
            },
            "required": ["id", "title", "description"]
        }
    })
}

#[must_use]
pub fn lesson_schema() -> Value {
    let strings = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    json!({
        "type": "OBJECT",
        "properties": {
            "topic": { "type": "STRING" },
            "explanation": { "type": "STRING" },
            "analogies": strings,
            "keyConcepts": strings,
            "examples": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "detail": { "type": "STRING" }
                    },
                    "required": ["title", "detail"]
                }
            },
            "quiz": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": strings,
                        "correctAnswer": { "type": "STRING" },
                        "explanation": { "type": "STRING" }
                    },
                    "required": ["question", "options", "correctAnswer", "explanation"]
                }
            }
        },
        "required": ["topic", "explanation", "analogies", "keyConcepts", "examples", "quiz"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teaching_prompt_names_topic_and_context() {
        let prompt = teaching_prompt("Osmosis", "Cells, Osmosis");
        assert!(prompt.contains("teach \"Osmosis\""));
        assert!(prompt.contains("Context from syllabus: Cells, Osmosis."));
        assert!(prompt.contains("3-question mastery check"));
    }

    #[test]
    fn lesson_schema_requires_every_section() {
        let schema = lesson_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(
            required,
            ["topic", "explanation", "analogies", "keyConcepts", "examples", "quiz"]
        );
        assert_eq!(
            schema["properties"]["quiz"]["items"]["properties"]["options"]["items"]["type"],
            "STRING"
        );
    }

    #[test]
    fn topics_schema_is_an_array_of_objects() {
        let schema = topics_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["type"], "OBJECT");
    }
}
