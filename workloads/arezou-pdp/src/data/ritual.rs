//! "How to Use" ritual content.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RitualStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

/// Testimonial shown next to the ritual steps.
#[derive(Debug, Clone, Serialize)]
pub struct TrustMoment {
    pub quote: &'static str,
    pub author: &'static str,
    pub rating: f32,
    pub highlight: &'static str,
}

pub static RITUAL_STEPS: &[RitualStep] = &[
    RitualStep {
        step: 1,
        title: "Cleanse",
        description: "Start with clean, slightly damp skin for optimal absorption.",
        time: "Evening ritual",
    },
    RitualStep {
        step: 2,
        title: "Warm",
        description: "Add 3-4 drops to your palm. Warm between hands to activate the aromatherapy.",
        time: "2-3 seconds",
    },
    RitualStep {
        step: 3,
        title: "Apply",
        description: "Gently press into skin using upward, circular motions. Focus on areas that \
                      need extra care.",
        time: "30 seconds",
    },
    RitualStep {
        step: 4,
        title: "Breathe",
        description: "Cup hands over face and take 3 deep breaths. Let the bergamot calm your \
                      senses.",
        time: "Moment of peace",
    },
];

pub static PRO_TIPS: &[&str] = &[
    "Can be used as a replacement for moisturizer",
    "Start with 2 drops and increase quantity as required",
    "Perfect for use during hormonal changes and life transitions",
    "Suitable for morning and evening use",
];

pub static RITUAL_MOMENT: TrustMoment = TrustMoment {
    quote: "Following this exact ritual has transformed my evenings into a self-care moment I \
            look forward to. After 2 months, my skin looks healthier and more radiant than ever. \
            The aromatherapy is genuinely calming.",
    author: "Meera A.",
    rating: 5.0,
    highlight: "Real results after consistent use",
};

/// Short quote under the trust moment: (quote, attribution).
pub static RITUAL_WHISPER: (&str, &str) = (
    "The oil absorbs so quickly and leaves no greasy residue. I was skeptical about using oil \
     but this changed everything.",
    "Divya I. · Oily skin · Using for 6 months",
);
