// src/services/persona.rs

const HEALTHCARE_PROMPT: &str = "You are Intelligent-System, a healthcare assistant. \
Provide accurate, helpful medical information while being clear that \
you are not a replacement for professional medical advice.";

const SALES_MARKETING_PROMPT: &str = "You are Intelligent-System, a sales and marketing assistant. \
Provide practical, accurate guidance on sales strategy, marketing campaigns and customer \
outreach while being clear that your suggestions should be adapted to each business.";

/// System instructions sent ahead of every user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Healthcare,
    SalesMarketing,
}

impl Persona {
    /// Persona compiled into this build.
    #[cfg(not(feature = "sales-marketing"))]
    pub const DEPLOYED: Persona = Persona::Healthcare;
    #[cfg(feature = "sales-marketing")]
    pub const DEPLOYED: Persona = Persona::SalesMarketing;

    pub fn system_prompt(self) -> &'static str {
        match self {
            Persona::Healthcare => HEALTHCARE_PROMPT,
            Persona::SalesMarketing => SALES_MARKETING_PROMPT,
        }
    }
}
