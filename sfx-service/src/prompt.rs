//! Prompt template for the sound-design brief.

/// Build the instruction prompt sent to the text-generation endpoint.
///
/// The section headings and sub-bullet labels are a compatibility contract
/// with downstream consumers; do not reword them.
pub fn build_brief_prompt(genre: &str, action: &str) -> String {
    format!(
        "You are an expert game sound designer with 20 years of experience crafting audio for AAA titles. \
         The game genre is: {genre}.\n\n\
         A developer asks you to describe the ideal sound effect for this game action:\n\
         \"{action}\"\n\n\
         Provide a DETAILED sound design brief using this EXACT structure (use markdown formatting):\n\n\
         ## 🎧 Emotional Feel\n\
         Describe the emotional impact and mood this sound should evoke in the player. \
         How should it make them feel? What psychological response should it trigger?\n\n\
         ## 🔊 Sound Texture & Character\n\
         Describe the raw sonic qualities — is it sharp, smooth, gritty, metallic, organic? \
         What real-world sounds does it resemble? Paint the texture with words.\n\n\
         ## 📊 Frequency Profile\n\
         Detail the frequency characteristics:\n\
         - **Low end (20-250Hz)**: What role do the bass frequencies play?\n\
         - **Mids (250Hz-4kHz)**: What's happening in the body?\n\
         - **Highs (4kHz-20kHz)**: What details sit in the upper range?\n\n\
         ## 🎚️ Layer Breakdown\n\
         Break the sound into its component layers:\n\
         - **Attack**: The initial transient (first 0-50ms)\n\
         - **Body**: The sustained core of the sound\n\
         - **Tail/Decay**: How the sound fades and resolves\n\
         - **Sweetener**: Any subtle extra layer that adds polish\n\n\
         ## 🛠️ Production Notes\n\
         Recommend specific approaches:\n\
         - Synthesis vs. Foley vs. Hybrid?\n\
         - Suggested tools or techniques\n\
         - Processing chain (reverb, distortion, pitch shift, etc.)\n\
         - Duration suggestion\n\n\
         ## 💡 Pro Tips\n\
         2-3 insider tips that would elevate this sound from good to exceptional.\n\n\
         Be vivid, specific, and creative. Use sensory language. This brief should be so detailed that \
         any sound designer could recreate the exact sound from your description alone."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_action_and_genre_verbatim() {
        let prompt = build_brief_prompt("Sci-Fi Horror", "player reloads a plasma rifle");
        assert!(prompt.contains("The game genre is: Sci-Fi Horror."));
        assert!(prompt.contains("\"player reloads a plasma rifle\""));
    }

    #[test]
    fn prompt_lists_all_six_sections_in_order() {
        let prompt = build_brief_prompt("General", "door slam");
        let sections = [
            "## 🎧 Emotional Feel",
            "## 🔊 Sound Texture & Character",
            "## 📊 Frequency Profile",
            "## 🎚️ Layer Breakdown",
            "## 🛠️ Production Notes",
            "## 💡 Pro Tips",
        ];

        let mut last = 0;
        for section in sections {
            let pos = prompt.find(section).unwrap_or_else(|| {
                panic!("missing section {section}");
            });
            assert!(pos > last, "section {section} out of order");
            last = pos;
        }
    }

    #[test]
    fn prompt_names_frequency_bands_and_layers() {
        let prompt = build_brief_prompt("General", "coin pickup");
        for label in [
            "**Low end (20-250Hz)**",
            "**Mids (250Hz-4kHz)**",
            "**Highs (4kHz-20kHz)**",
            "**Attack**",
            "**Body**",
            "**Tail/Decay**",
            "**Sweetener**",
        ] {
            assert!(prompt.contains(label), "missing label {label}");
        }
    }

    #[test]
    fn empty_genre_is_substituted_verbatim() {
        // Genre is deliberately unvalidated; an empty string flows through.
        let prompt = build_brief_prompt("", "footstep");
        assert!(prompt.contains("The game genre is: ."));
    }
}
