use brewlog_codec::Symbolic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Symbolic)]
pub enum GrindSize {
    #[symbolic(label = "Extra Fine")]
    ExtraFine = 0,
    Fine = 1,
    #[symbolic(label = "Medium Fine")]
    MediumFine = 2,
    Medium = 3,
    #[symbolic(label = "Medium Coarse")]
    MediumCoarse = 4,
    Coarse = 5,
    #[symbolic(label = "Extra Coarse")]
    ExtraCoarse = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Symbolic)]
pub enum BrewMethod {
    #[symbolic(label = "Pour Over")]
    PourOver = 0,
    #[symbolic(label = "French Press")]
    FrenchPress = 1,
    Espresso = 2,
    AeroPress = 3,
    #[symbolic(label = "Cold Brew")]
    ColdBrew = 4,
    #[symbolic(label = "Moka Pot")]
    MokaPot = 5,
    Chemex = 6,
    Siphon = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Symbolic)]
pub enum EquipmentType {
    Grinder = 0,
    Brewer = 1,
    #[symbolic(label = "Espresso Machine")]
    EspressoMachine = 2,
    Kettle = 3,
    Scale = 4,
    Other = 5,
}
