//! Display names for well-known chain identifiers.

const KNOWN_CHAINS: &[(&str, &str)] = &[
    ("base", "Base"),
    ("arbitrum", "Arbitrum One"),
    ("optimism", "OP Mainnet"),
    ("scroll", "Scroll"),
    ("zksync", "ZKsync Era"),
    ("linea", "Linea"),
    ("starknet", "Starknet"),
    ("taiko", "Taiko"),
    ("blast", "Blast"),
    ("zora", "Zora"),
    ("mode", "Mode"),
    ("unichain", "Unichain"),
    ("ink", "Ink"),
    ("soneium", "Soneium"),
    ("world", "World Chain"),
];

/// Human-readable name for a chain id, falling back to the id itself
pub fn display_name(chain: &str) -> String {
    let key = chain.trim().to_ascii_lowercase();

    KNOWN_CHAINS
        .iter()
        .find(|(id, _)| *id == key)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| chain.to_string())
}
