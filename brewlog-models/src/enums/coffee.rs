use brewlog_codec::Symbolic;

/// How dark a batch of beans was roasted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Symbolic)]
pub enum RoastLevel {
    Light = 0,
    MediumLight = 1,
    Medium = 2,
    MediumDark = 3,
    Dark = 4,
}

/// Post-harvest processing of the coffee cherry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Symbolic)]
pub enum ProcessingMethod {
    Washed = 0,
    Natural = 1,
    Honey = 2,
    Anaerobic = 3,
    #[symbolic(label = "Wet Hulled")]
    WetHulled = 4,
    Other = 5,
}
