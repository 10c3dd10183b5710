//! Prompts for veterinary dental finding extraction.
//!
//! Designed for chat-completion models at temperature 0 with a JSON reply.

/// System prompt for dental extraction.
pub const SYSTEM_PROMPT: &str = r#"You are a veterinary dental specialist. Extract every dental finding mentioned in clinical notes, including minor ones. Never return empty findings when the notes mention teeth, gums, tartar, cleaning, gingivitis or any other dental term. Over-extraction is preferable to missing a finding that affects patient care."#;

/// Tooth mapping guidance included in every request.
const TOOTH_MAPPING: &str = r#"TOOTH MAPPING (Modified Triadan):
- Upper right quadrant: 101-110
- Upper left quadrant: 201-211
- Lower left quadrant: 301-311
- Lower right quadrant: 401-411
- If no tooth is named, use "general" or map to likely teeth: premolars 105-108, 205-208, 305-308, 405-408 for "back teeth"; canines 104, 204, 304, 404 for "canine teeth"."#;

/// Condition vocabulary the extractor should emit.
const CONDITION_MAPPING: &str = r#"CONDITION MAPPING:
- "tartar" or "calculus" -> calculus
- "gingivitis", "red gums" or "inflamed gums" -> gingivitis
- "broken", "fractured" or "chipped" -> fracture
- "missing", "extracted" or "pulled" -> missing
- "loose" -> mobility
- "worn" -> attrition
- "pocket" -> periodontal_disease
- "cleaning" or "scale" -> calculus
- "decay" or "cavity" -> caries"#;

/// User prompt for a clinical note.
pub fn make_dental_prompt(text: &str) -> String {
    format!(
        r#"Extract ALL dental findings from these veterinary notes:

"{}"

EXTRACTION RULES:
1. Look for any mention of teeth, gums, mouth or dental conditions.
2. Extract every finding, even minor ones.
3. Words such as tartar, calculus, gingivitis, red gums, inflamed, broken, fractured, missing, loose, worn, decay, cleaning, scale, plaque, periodontal, pocket, abscess, crown or root must be extracted.

{}

{}

Return a JSON object:
{{
  "findings": {{ "tooth_number_or_general": "condition" }},
  "summary": "What you found",
  "raw_extraction": "Exact phrases that led to findings"
}}"#,
        text, TOOTH_MAPPING, CONDITION_MAPPING
    )
}

/// Example few-shot prompts for better extraction accuracy.
pub const FEW_SHOT_EXAMPLES: &[(&str, &str)] = &[
    (
        "Patient needs dental cleaning",
        r#"{"findings":{"general":"calculus"},"summary":"Cleaning recommended, implies calculus","raw_extraction":"needs dental cleaning"}"#,
    ),
    (
        "Tartar buildup on back teeth",
        r#"{"findings":{"105":"calculus","106":"calculus","107":"calculus","108":"calculus"},"summary":"Calculus on upper right premolars","raw_extraction":"tartar buildup on back teeth"}"#,
    ),
    (
        "Fractured canine, red inflamed gums",
        r#"{"findings":{"104":"fracture","general":"gingivitis"},"summary":"Fractured canine and gingivitis","raw_extraction":"fractured canine; red inflamed gums"}"#,
    ),
];

/// Chat role of a prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Build the full message list: system context, optional few-shot turns,
/// then the actual request.
pub fn build_messages(text: &str, include_examples: bool) -> Vec<Message> {
    let mut messages = vec![Message::new(Role::System, SYSTEM_PROMPT)];

    if include_examples {
        for (input, output) in FEW_SHOT_EXAMPLES {
            messages.push(Message::new(Role::User, make_dental_prompt(input)));
            messages.push(Message::new(Role::Assistant, *output));
        }
    }

    messages.push(Message::new(Role::User, make_dental_prompt(text)));
    messages
}
