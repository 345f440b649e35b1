/// Response language supported by the assistant. Anything unrecognized
/// falls back to English, for the prompt directive and error text alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
    Bengali,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Bengali];

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "hindi" => Language::Hindi,
            "bengali" => Language::Bengali,
            _ => Language::English,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
        }
    }

    /// Instruction line embedded in the prompt.
    pub fn directive(&self) -> &'static str {
        match self {
            Language::English => "Respond in English.",
            Language::Hindi => "Respond in Hindi (हिंदी में उत्तर दें).",
            Language::Bengali => "Respond in Bengali (বাংলায় উত্তর দিন).",
        }
    }

    /// User-facing text wrapped around upstream failures.
    pub fn upstream_error_text(&self) -> &'static str {
        match self {
            Language::English => {
                "The legal assistant service is currently unavailable. Please try again."
            }
            Language::Hindi => {
                "कानूनी सहायक सेवा अभी उपलब्ध नहीं है। कृपया पुनः प्रयास करें।"
            }
            Language::Bengali => {
                "আইনি সহায়ক পরিষেবা এখন উপলব্ধ নেই। অনুগ্রহ করে আবার চেষ্টা করুন।"
            }
        }
    }
}
