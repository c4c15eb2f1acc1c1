/// Token metadata accessors a proxy exposes in place of `getTokenInfo`.
pub const TOKEN_METADATA: &[&str] = &[
    "function name() view returns (string)",
    "function symbol() view returns (string)",
    "function decimals() view returns (uint8)",
    "function totalSupply() view returns (uint256)",
];
