#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionKind {
    Serial,
    #[default]
    Rayon,
}

impl ExecutionKind {
    pub const ALL: &'static [Self] = &[Self::Rayon, Self::Serial];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Rayon => "rayon",
        }
    }
}
