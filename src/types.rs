/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    Gopher,
    File,
    #[default]
    NotStandard,
}

impl SchemeType {
    /// Check if this scheme has authority + hierarchical path semantics
    pub fn is_standard(self) -> bool {
        self != Self::NotStandard
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::Gopher => Some(70),
            Self::File | Self::NotStandard => None,
        }
    }
}
