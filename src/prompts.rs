pub const PERSONA: &str = include_str!("../data/prompts/persona.txt");

/// Caption sent alongside an image when the caller provided no message text.
pub const DESCRIBE_IMAGE: &str = "Jelaskan gambar ini";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_is_non_empty() {
        assert!(!PERSONA.is_empty());
    }

    #[test]
    fn test_persona_names_the_assistant() {
        assert!(PERSONA.contains("Golem AI"));
    }

    #[test]
    fn test_image_fallback_caption() {
        assert_eq!(DESCRIBE_IMAGE, "Jelaskan gambar ini");
    }
}
